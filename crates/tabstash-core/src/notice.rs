//! Short-lived user notices. Outcomes of list operations map to a notice;
//! only the newest notice is shown and it fades after two seconds.

use std::fmt;
use std::time::Duration;
use tokio::time::Instant;

use crate::confirm::ClearRequest;
use crate::list::{AddOutcome, ClearOutcome, CopyOutcome, RemoveOutcome};
use crate::render::count_label;

/// How long a notice stays up.
pub const NOTICE_DURATION: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    /// Success or a harmless refusal.
    Info,
    /// Something failed (storage, clipboard).
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<&AddOutcome> for Notice {
    fn from(outcome: &AddOutcome) -> Self {
        match outcome {
            AddOutcome::Added(_) => Notice::info("URL added"),
            AddOutcome::AlreadyPresent(_) => Notice::info("Already in list"),
            AddOutcome::Rejected => Notice::info("Cannot collect this page"),
        }
    }
}

impl From<&RemoveOutcome> for Notice {
    fn from(outcome: &RemoveOutcome) -> Self {
        match outcome {
            RemoveOutcome::Removed(_) => Notice::info("URL removed"),
            RemoveOutcome::OutOfRange => Notice::info("No URL at that position"),
        }
    }
}

impl From<ClearOutcome> for Notice {
    fn from(outcome: ClearOutcome) -> Self {
        match outcome {
            ClearOutcome::Cleared(_) => Notice::info("List cleared"),
            ClearOutcome::AlreadyEmpty => Notice::info("List is already empty"),
        }
    }
}

impl From<ClearRequest> for Notice {
    fn from(request: ClearRequest) -> Self {
        match request {
            ClearRequest::NothingToClear => Notice::info("List is already empty"),
            ClearRequest::ConfirmRequested => Notice::info("Confirm clear: request again within 3 seconds"),
            ClearRequest::Cleared(_) => Notice::info("List cleared"),
        }
    }
}

impl From<CopyOutcome> for Notice {
    fn from(outcome: CopyOutcome) -> Self {
        match outcome {
            CopyOutcome::Copied(n) => Notice::info(format!("Copied {}", count_label(n))),
            CopyOutcome::NothingToCopy => Notice::info("Nothing to copy"),
        }
    }
}

/// Holds the notice currently on display.
#[derive(Debug, Default)]
pub struct NoticeBoard {
    current: Option<(Notice, Instant)>,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `notice`, replacing whatever was up and restarting the timer.
    pub fn post(&mut self, notice: Notice) {
        self.current = Some((notice, Instant::now() + NOTICE_DURATION));
    }

    /// The notice still on display, if any.
    pub fn current(&self) -> Option<&Notice> {
        match &self.current {
            Some((notice, until)) if Instant::now() < *until => Some(notice),
            _ => None,
        }
    }
}
