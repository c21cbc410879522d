pub(crate) mod busy;
pub(crate) mod controller;
pub(crate) mod notification;
pub(crate) mod outcome;
pub(crate) mod state;

pub use busy::BusyFlag;
pub use controller::{LOGOUT_REDIRECT_DELAY, ProfileController};
pub use notification::{Notification, NotificationLevel};
pub use outcome::{ActionOutcome, Navigation};
pub use state::ProfileState;
