use std::time::Duration;

/// What a profile action did. Details reach the user as notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Done,
    /// The server call failed; state is unchanged
    Failed,
    /// Local validation rejected the input; no request was made
    Rejected,
    /// The same action is still in flight
    Busy,
    /// The page is leaving for sign-in
    Redirected,
}

/// Pending page change requested by the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    SignIn { after: Duration },
}
