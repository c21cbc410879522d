use crate::BusyFlag;

use ei_core::UserRecord;

/// Everything the profile page renders
#[derive(Debug, Default)]
pub struct ProfileState {
    /// `None` until a load succeeds
    pub user: Option<UserRecord>,
    pub name_field: String,
    pub email_field: String,
    pub editing_name: bool,
    pub password_form_open: bool,
    pub new_password: String,
    pub confirm_password: String,
    pub logout_dialog_open: bool,
    pub(crate) is_loading: BusyFlag,
    pub(crate) is_updating: BusyFlag,
    pub(crate) is_cancelling: BusyFlag,
}

impl ProfileState {
    pub fn is_loading(&self) -> bool {
        self.is_loading.is_set()
    }

    pub fn is_updating(&self) -> bool {
        self.is_updating.is_set()
    }

    pub fn is_cancelling(&self) -> bool {
        self.is_cancelling.is_set()
    }

    /// Seed the editable fields from the current record
    pub(crate) fn reset_fields(&mut self) {
        if let Some(user) = &self.user {
            self.name_field = user.name.clone();
            self.email_field = user.email.clone();
        }
    }

    pub(crate) fn clear_password_fields(&mut self) {
        self.new_password.clear();
        self.confirm_password.clear();
    }
}
