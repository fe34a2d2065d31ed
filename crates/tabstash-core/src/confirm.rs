//! Two-step confirmation for clearing the list.
//!
//! The first clear request arms a short window; a second request inside the
//! window performs the clear. When the window lapses the machine drops back
//! to idle without touching the list.

use std::time::Duration;
use tokio::time::Instant;

use crate::list::{ClearOutcome, ListController};
use crate::store::{KeyValueStore, StoreError};

/// How long a clear request waits for its confirmation.
pub const CLEAR_CONFIRM_WINDOW: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmState {
    Idle,
    Confirming,
}

/// What a clear request did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearRequest {
    /// The list was empty; state unchanged.
    NothingToClear,
    /// Window armed; ask the user to repeat the request.
    ConfirmRequested,
    /// Confirmed; this many URLs were dropped.
    Cleared(usize),
}

/// Confirmation state for the clear action. Not persisted.
#[derive(Debug)]
pub struct ClearConfirm {
    window: Duration,
    deadline: Option<Instant>,
}

impl Default for ClearConfirm {
    fn default() -> Self {
        Self::new()
    }
}

impl ClearConfirm {
    pub fn new() -> Self {
        Self::with_window(CLEAR_CONFIRM_WINDOW)
    }

    pub fn with_window(window: Duration) -> Self {
        Self {
            window,
            deadline: None,
        }
    }

    pub fn state(&self) -> ConfirmState {
        match self.deadline {
            Some(deadline) if Instant::now() < deadline => ConfirmState::Confirming,
            _ => ConfirmState::Idle,
        }
    }

    /// When the armed window lapses, if one is armed.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Drops back to idle once the window has lapsed. Returns true when this
    /// call performed the transition.
    pub fn expire_if_due(&mut self) -> bool {
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => {
                self.deadline = None;
                tracing::debug!("clear confirmation window lapsed");
                true
            }
            _ => false,
        }
    }

    /// Cancels a pending confirmation.
    pub fn reset(&mut self) {
        self.deadline = None;
    }

    /// Handles one clear request from the user.
    pub async fn request<S: KeyValueStore>(
        &mut self,
        list: &ListController<S>,
    ) -> Result<ClearRequest, StoreError> {
        self.expire_if_due();

        if self.deadline.take().is_some() {
            return Ok(match list.clear().await? {
                ClearOutcome::Cleared(n) => ClearRequest::Cleared(n),
                ClearOutcome::AlreadyEmpty => ClearRequest::NothingToClear,
            });
        }

        if list.load().await?.is_empty() {
            return Ok(ClearRequest::NothingToClear);
        }

        // A new arm replaces whatever deadline was pending.
        self.deadline = Some(Instant::now() + self.window);
        tracing::debug!(window_ms = self.window.as_millis() as u64, "clear confirmation armed");
        Ok(ClearRequest::ConfirmRequested)
    }
}

/// Resolves when `deadline` is reached; never resolves for `None`. Meant for
/// `tokio::select!` loops that need to notice the window lapsing.
pub async fn expiry(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}
