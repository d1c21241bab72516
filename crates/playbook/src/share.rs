use std::time::Duration;

use crate::clipboard::{Clipboard, ClipboardError};
use crate::entry::EntryId;
use crate::link::PageLocation;

/// How long an entry stays marked as copied.
pub const RESET_AFTER: Duration = Duration::from_millis(2000);

/// Which entry's link was most recently copied, if any.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ShareState {
    #[default]
    Idle,
    Copied(EntryId),
}

impl ShareState {
    pub fn copied_id(&self) -> Option<&EntryId> {
        match self {
            Self::Idle => None,
            Self::Copied(id) => Some(id),
        }
    }
}

/// Identity of one armed reset. Only the most recently issued token can
/// return the machine to [`ShareState::Idle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShareToken(u64);

/// Outcome of a successful share.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shared {
    pub url: String,
    pub token: ShareToken,
    /// Delay after which the caller should call [`ShareMachine::expire`].
    pub reset_after: Duration,
}

/// Idle/Copied state machine behind the share action.
///
/// The machine does not own a timer. Callers schedule `expire(token)` after
/// `reset_after`; arming a new share invalidates every earlier token, so a
/// late expiry for a superseded share is a no-op.
#[derive(Debug)]
pub struct ShareMachine {
    location: PageLocation,
    state: ShareState,
    live: Option<ShareToken>,
    issued: u64,
}

impl ShareMachine {
    pub fn new(location: PageLocation) -> Self {
        Self {
            location,
            state: ShareState::Idle,
            live: None,
            issued: 0,
        }
    }

    pub fn state(&self) -> &ShareState {
        &self.state
    }

    pub fn location(&self) -> &PageLocation {
        &self.location
    }

    pub fn is_copied(&self, id: &EntryId) -> bool {
        self.state.copied_id() == Some(id)
    }

    /// Build the share link for `id`, hand it to the clipboard and move to
    /// `Copied(id)`.
    ///
    /// A clipboard failure leaves the state and any pending reset exactly as
    /// they were.
    pub fn share<C>(&mut self, id: &EntryId, clipboard: &mut C) -> Result<Shared, ClipboardError>
    where
        C: Clipboard + ?Sized,
    {
        let url = self.location.share_url(id);
        clipboard.write_text(&url)?;

        self.issued += 1;
        let token = ShareToken(self.issued);
        self.live = Some(token);
        self.state = ShareState::Copied(id.clone());

        Ok(Shared {
            url,
            token,
            reset_after: RESET_AFTER,
        })
    }

    /// Reset to `Idle` if `token` belongs to the most recent share.
    /// Returns whether the state changed.
    pub fn expire(&mut self, token: ShareToken) -> bool {
        if self.live != Some(token) {
            return false;
        }
        self.live = None;
        self.state = ShareState::Idle;
        true
    }
}
