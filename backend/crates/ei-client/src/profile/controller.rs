use crate::{
    ActionOutcome, AuthSession, CachedUser, Client, Navigation, Notification, ProfileState,
    UserCache,
};

use std::sync::Arc;
use std::time::Duration;

use chrono::DateTime;
use ei_core::{Tier, UserRecord, apply_name_update, apply_server_tier, merge_user_records};
use log::{debug, error, info, warn};

pub const LOGOUT_REDIRECT_DELAY: Duration = Duration::from_millis(500);

const END_DATE_FORMAT: &str = "%Y-%m-%d";

/// Drives the profile page: load/reconcile the cached user, then the
/// account actions. Busy flags are held by guards, so they clear on every
/// exit path, an abandoned future included.
pub struct ProfileController {
    client: Client,
    cache: UserCache,
    auth: Arc<dyn AuthSession>,
    state: ProfileState,
    notifications: Vec<Notification>,
    navigation: Option<Navigation>,
}

impl ProfileController {
    pub fn new(client: Client, cache: UserCache, auth: Arc<dyn AuthSession>) -> Self {
        Self {
            client,
            cache,
            auth,
            state: ProfileState::default(),
            notifications: Vec::new(),
            navigation: None,
        }
    }

    pub fn state(&self) -> &ProfileState {
        &self.state
    }

    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut ProfileState {
        &mut self.state
    }

    /// Hand pending notifications to the view, oldest first
    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    pub fn take_navigation(&mut self) -> Option<Navigation> {
        self.navigation.take()
    }

    pub fn can_upgrade(&self) -> bool {
        self.state.user.as_ref().is_some_and(|u| u.tier == Tier::Free)
    }

    pub fn can_cancel(&self) -> bool {
        self.state.user.as_ref().is_some_and(UserRecord::is_premium)
    }

    // =========================================================================
    // Load
    // =========================================================================

    /// Read the cached user, verify it with the server and merge.
    ///
    /// Anything short of a verified record sends the page to sign-in.
    pub async fn load(&mut self) -> ActionOutcome {
        let Some(_busy) = self.state.is_loading.try_acquire() else {
            return ActionOutcome::Busy;
        };
        self.load_inner().await
    }

    async fn load_inner(&mut self) -> ActionOutcome {
        let cached = match self.cache.load() {
            Ok(CachedUser::Found(record)) => record,
            Ok(CachedUser::Missing) => return self.redirect_to_sign_in(Duration::ZERO),
            Ok(CachedUser::Corrupt(reason)) => {
                warn!("Discarding unreadable cached user: {reason}");
                self.clear_cache();
                return self.redirect_to_sign_in(Duration::ZERO);
            }
            Err(e) => {
                error!("Failed to read cached user: {e}");
                return self.redirect_to_sign_in(Duration::ZERO);
            }
        };

        let server = match self.client.verify_user(&cached.email).await {
            Ok(patch) => patch,
            Err(e) => {
                warn!("Session verification failed for {}: {e}", cached.email);
                self.clear_cache();
                return self.redirect_to_sign_in(Duration::ZERO);
            }
        };

        let merged = merge_user_records(&cached, &server);
        info!("Loaded profile {} ({})", merged.id, merged.tier);
        self.commit(merged);
        self.state.reset_fields();

        ActionOutcome::Done
    }

    // =========================================================================
    // Actions
    // =========================================================================

    /// Re-read the tier from the server
    pub async fn refresh_status(&mut self) -> ActionOutcome {
        let Some(busy) = self.state.is_loading.try_acquire() else {
            return ActionOutcome::Busy;
        };
        let Some(current) = self.state.user.clone() else {
            return self.redirect_to_sign_in(Duration::ZERO);
        };

        let result = self.client.get_user_status().await;
        drop(busy);

        match result {
            Ok(status) => {
                self.commit(apply_server_tier(&current, status.tier.as_deref()));
                self.notify(Notification::success("Status refreshed"));
                ActionOutcome::Done
            }
            Err(e) => {
                warn!("Status refresh failed: {e}");
                self.notify(
                    Notification::error("Refresh failed")
                        .with_description("Could not fetch latest status"),
                );
                ActionOutcome::Failed
            }
        }
    }

    pub fn begin_edit_name(&mut self) {
        self.state.reset_fields();
        self.state.editing_name = true;
    }

    /// Leave edit mode and restore the field from the record
    pub fn cancel_edit_name(&mut self) {
        self.state.editing_name = false;
        self.state.reset_fields();
    }

    pub async fn update_name(&mut self, new_name: &str) -> ActionOutcome {
        let Some(busy) = self.state.is_updating.try_acquire() else {
            return ActionOutcome::Busy;
        };
        let Some(current) = self.state.user.clone() else {
            return self.redirect_to_sign_in(Duration::ZERO);
        };

        self.state.name_field = new_name.to_string();
        let result = self.client.update_name(&current.id, new_name).await;
        drop(busy);

        match result {
            Ok(patch) => {
                self.commit(apply_name_update(&current, new_name, &patch));
                self.state.reset_fields();
                self.state.editing_name = false;
                self.notify(Notification::success("Profile updated"));
                ActionOutcome::Done
            }
            Err(e) => {
                warn!("Name update failed: {e}");
                self.notify(
                    Notification::error("Error updating profile").with_description(e.user_message()),
                );
                ActionOutcome::Failed
            }
        }
    }

    pub fn open_password_form(&mut self) {
        self.state.password_form_open = true;
    }

    pub fn cancel_password_form(&mut self) {
        self.state.password_form_open = false;
        self.state.clear_password_fields();
    }

    /// Validate locally, then submit. Invalid input never reaches the server.
    pub async fn update_password(&mut self, new_password: &str, confirm: &str) -> ActionOutcome {
        let Some(busy) = self.state.is_updating.try_acquire() else {
            return ActionOutcome::Busy;
        };

        self.state.new_password = new_password.to_string();
        self.state.confirm_password = confirm.to_string();

        if new_password.is_empty() {
            self.notify(Notification::error("Password cannot be empty"));
            return ActionOutcome::Rejected;
        }
        if new_password != confirm {
            self.notify(Notification::error("Passwords do not match"));
            return ActionOutcome::Rejected;
        }

        let result = self.client.update_password(new_password).await;
        drop(busy);

        match result {
            Ok(()) => {
                self.state.clear_password_fields();
                self.state.password_form_open = false;
                self.notify(Notification::success("Password updated successfully"));
                ActionOutcome::Done
            }
            Err(e) => {
                warn!("Password update failed: {e}");
                self.notify(Notification::error("Error updating password"));
                ActionOutcome::Failed
            }
        }
    }

    /// Cancel the subscription. The local tier drops to `Free` right away;
    /// the notification carries the date premium access actually ends.
    pub async fn cancel_subscription(&mut self) -> ActionOutcome {
        let Some(busy) = self.state.is_cancelling.try_acquire() else {
            return ActionOutcome::Busy;
        };
        let Some(current) = self.state.user.clone() else {
            return self.redirect_to_sign_in(Duration::ZERO);
        };

        let result = self.client.cancel_subscription().await;
        drop(busy);

        match result {
            Ok(response) => {
                self.commit(UserRecord {
                    tier: Tier::Free,
                    ..current
                });
                self.notify(
                    Notification::success("Subscription cancelled").with_description(format!(
                        "You'll retain premium access until {}",
                        format_end_date(response.end_date)
                    )),
                );
                ActionOutcome::Done
            }
            Err(e) => {
                warn!("Subscription cancellation failed: {e}");
                self.notify(
                    Notification::error("Cancellation failed").with_description(e.user_message()),
                );
                ActionOutcome::Failed
            }
        }
    }

    pub fn request_logout(&mut self) {
        self.state.logout_dialog_open = true;
    }

    pub fn dismiss_logout(&mut self) {
        self.state.logout_dialog_open = false;
    }

    pub async fn logout(&mut self) -> ActionOutcome {
        let result = match self.cache.clear() {
            Ok(()) => self.auth.sign_out().await,
            Err(e) => Err(e),
        };
        self.state.logout_dialog_open = false;

        match result {
            Ok(()) => {
                self.state = ProfileState::default();
                self.notify(Notification::success("Logged out successfully"));
                self.redirect_to_sign_in(LOGOUT_REDIRECT_DELAY)
            }
            Err(e) => {
                error!("Logout failed: {e}");
                self.notify(Notification::error("Logout failed").with_description(e.to_string()));
                ActionOutcome::Failed
            }
        }
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    /// Replace the record in state and persist it
    fn commit(&mut self, record: UserRecord) {
        if let Err(e) = self.cache.save(&record) {
            error!("Failed to persist user {}: {e}", record.id);
        }
        self.state.user = Some(record);
    }

    fn clear_cache(&self) {
        if let Err(e) = self.cache.clear() {
            error!("Failed to clear cached user: {e}");
        }
    }

    fn notify(&mut self, notification: Notification) {
        debug!("Notification: {notification}");
        self.notifications.push(notification);
    }

    fn redirect_to_sign_in(&mut self, after: Duration) -> ActionOutcome {
        self.navigation = Some(Navigation::SignIn { after });
        ActionOutcome::Redirected
    }
}

/// Unix seconds rendered as a UTC calendar date
pub(crate) fn format_end_date(end_date: i64) -> String {
    DateTime::from_timestamp(end_date, 0)
        .map(|date| date.format(END_DATE_FORMAT).to_string())
        .unwrap_or_else(|| end_date.to_string())
}
