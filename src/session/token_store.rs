//! Durable credential slots for the two session namespaces.
//!
//! Admin and staff sessions are independent: each owns a `{type}_token`
//! and `{type}_user` pair in storage, and neither login nor clear touches
//! the other slot. Token lifetime is enforced server-side; the store keeps
//! no expiry state and learns about stale tokens only through a 401.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

use std::fmt;
use std::sync::Arc;

use crate::net::types::Profile;
use crate::session::storage::SessionStorage;

/// The two independent session namespaces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserType {
    Admin,
    Staff,
}

impl UserType {
    pub fn as_str(self) -> &'static str {
        match self {
            UserType::Admin => "admin",
            UserType::Staff => "staff",
        }
    }

    fn token_key(self) -> &'static str {
        match self {
            UserType::Admin => "admin_token",
            UserType::Staff => "staff_token",
        }
    }

    fn user_key(self) -> &'static str {
        match self {
            UserType::Admin => "admin_user",
            UserType::Staff => "staff_user",
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Handle to the credential slots. Cheap to clone; clones share storage.
#[derive(Clone)]
pub struct TokenStore {
    storage: Arc<dyn SessionStorage + Send + Sync>,
}

impl TokenStore {
    pub fn new(storage: Arc<dyn SessionStorage + Send + Sync>) -> Self {
        TokenStore { storage }
    }

    /// Store backed by browser `localStorage`.
    pub fn browser() -> Self {
        TokenStore::new(Arc::new(crate::session::storage::BrowserStorage))
    }

    /// Persist a credential. The token is stored as-is (no format
    /// validation); the profile is JSON-encoded into the `_user` slot.
    pub fn store(&self, user_type: UserType, token: &str, profile: &Profile) {
        self.storage.set(user_type.token_key(), token);
        match serde_json::to_string(profile) {
            Ok(encoded) => self.storage.set(user_type.user_key(), &encoded),
            Err(err) => log::warn!("profile for {user_type} could not be encoded: {err}"),
        }
    }

    pub fn read(&self, user_type: UserType) -> Option<String> {
        self.storage.get(user_type.token_key())
    }

    pub fn read_profile(&self, user_type: UserType) -> Option<Profile> {
        let raw = self.storage.get(user_type.user_key())?;
        serde_json::from_str(&raw).ok()
    }

    /// Remove both halves of the credential. Clearing an already-empty
    /// slot is a no-op, which keeps concurrent 401 handlers harmless.
    pub fn clear(&self, user_type: UserType) {
        self.storage.remove(user_type.token_key());
        self.storage.remove(user_type.user_key());
    }

    /// True iff both the token and the profile slot are present and
    /// non-empty for that user type.
    pub fn is_authenticated(&self, user_type: UserType) -> bool {
        let token_present = self
            .read(user_type)
            .is_some_and(|token| !token.is_empty());
        let profile_present = self
            .storage
            .get(user_type.user_key())
            .is_some_and(|raw| !raw.is_empty());
        token_present && profile_present
    }

    /// Which namespace an unspecified call runs as.
    ///
    /// Priority is fixed: an admin token wins over a staff token, and with
    /// no token at all the caller is treated as staff. Staff is the common
    /// anonymous caller, so it is the deliberate default.
    pub fn current_user_type(&self) -> UserType {
        if self.read(UserType::Admin).is_some() {
            UserType::Admin
        } else if self.read(UserType::Staff).is_some() {
            UserType::Staff
        } else {
            UserType::Staff
        }
    }

    /// Blunt-instrument fallback: sweep every storage key that looks
    /// auth-related, regardless of namespace. Used when the namespaced
    /// [`TokenStore::clear`] cannot be trusted to have caught everything.
    pub fn force_clear_all(&self) {
        for key in self.storage.keys() {
            let auth_like = key.contains("token")
                || key.contains("user")
                || key.contains("admin")
                || key.contains("staff");
            if auth_like {
                self.storage.remove(&key);
            }
        }
    }
}
