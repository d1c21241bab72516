use std::time::Duration;

use playbook::ShareToken;

/// Commands returned by the app to the event loop for side-effect execution.
#[derive(Debug, PartialEq, Eq)]
pub enum AppCommand {
    /// No side effect needed.
    None,
    /// Quit the application.
    Quit,
    /// Arm the copied-flag reset, replacing any reset still pending.
    ScheduleReset { token: ShareToken, after: Duration },
}

/// Actions dispatched back into the app from async tasks.
#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    /// The reset armed for this share elapsed.
    ShareExpired(ShareToken),
}
