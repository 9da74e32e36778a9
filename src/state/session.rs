#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::Profile;
use crate::session::token_store::UserType;

/// Who is signed in, as far as the UI knows.
///
/// The durable source of truth is the token store; this is the reactive
/// mirror pages read for names and roles. Replaced wholesale on login and
/// logout, never edited field by field.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub user_type: Option<UserType>,
    pub profile: Option<Profile>,
    pub loading: bool,
}

impl SessionState {
    pub fn signed_in(user_type: UserType, profile: Profile) -> Self {
        SessionState {
            user_type: Some(user_type),
            profile: Some(profile),
            loading: false,
        }
    }

    /// Name to greet the user with, when someone is signed in.
    pub fn display_name(&self) -> Option<&str> {
        self.profile.as_ref().map(|p| p.name.as_str())
    }
}
