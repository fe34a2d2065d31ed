//! Results of list operations. Policy refusals are outcomes, not errors.

use crate::clipboard::ClipboardError;
use crate::store::StoreError;

/// Result of [`super::ListController::add`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// The cleaned URL was appended.
    Added(String),
    /// The cleaned URL was already in the list; nothing written.
    AlreadyPresent(String),
    /// Empty input or a browser-internal page; nothing normalized or written.
    Rejected,
}

/// Result of [`super::ListController::remove_at`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed(String),
    OutOfRange,
}

/// Result of [`super::ListController::clear`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearOutcome {
    /// Number of URLs dropped.
    Cleared(usize),
    AlreadyEmpty,
}

/// Result of [`super::ListController::copy_all`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied(usize),
    NothingToCopy,
}

#[derive(Debug, thiserror::Error)]
pub enum CopyError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
}
