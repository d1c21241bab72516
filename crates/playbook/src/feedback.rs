use std::fmt;

use crate::clipboard::ClipboardError;
use crate::entry::EntryId;

/// Severity of a [`Feedback`] message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Info,
    Warning,
    Error,
}

/// A user-facing message produced by a core operation.
///
/// The library never prints. The CLI writes feedback to stderr and the
/// browser shows it in its status bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub level: Level,
    pub message: String,
}

impl Feedback {
    pub fn info(msg: impl Into<String>) -> Self {
        Self {
            level: Level::Info,
            message: msg.into(),
        }
    }

    pub fn warning(msg: impl Into<String>) -> Self {
        Self {
            level: Level::Warning,
            message: msg.into(),
        }
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            level: Level::Error,
            message: msg.into(),
        }
    }

    /// Confirmation shown after a share link reached the clipboard.
    pub fn link_copied(id: &EntryId) -> Self {
        Self::info(format!("Link to {id} copied to clipboard"))
    }

    /// Report for a clipboard write that did not go through.
    pub fn copy_failed(err: &ClipboardError) -> Self {
        Self::error(format!("Copy failed: {err}"))
    }

    pub fn is_error(&self) -> bool {
        self.level == Level::Error
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.level {
            Level::Info => write!(f, "{}", self.message),
            Level::Warning => write!(f, "warning: {}", self.message),
            Level::Error => write!(f, "error: {}", self.message),
        }
    }
}
