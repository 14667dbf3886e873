//! The session store: the current mock sign-in.
//!
//! There is no account backend. Signing in installs a demo profile and
//! the supplied credentials are never checked; what this store actually
//! manages is the presence, persistence, and editing of that profile.

use tracing::{error, warn};

use fitgear_core::{Email, UserId};

use crate::models::{ProfileUpdate, User};
use crate::storage::Storage;

/// Storage key holding the serialized user profile.
pub const USER_KEY: &str = "user";

/// Fixed ID of the demo user.
const DEMO_USER_ID: &str = "user1";
/// Display name installed by `login`.
const DEMO_NAME: &str = "John Doe";
/// Phone number installed by `login`.
const DEMO_PHONE: &str = "555-123-4567";
/// Address installed by `login`.
const DEMO_ADDRESS: &str = "123 Main St, Anytown, USA";

/// The current session.
///
/// Two states: logged out (no user) and logged in (one user). `login`
/// and `register` always succeed and move to logged in; `logout` moves
/// back; `update_profile` keeps the state and edits the payload.
///
/// The profile persists under [`USER_KEY`] on every change and the entry
/// is removed on logout. Like the cart, persistence is fail-soft:
/// unreadable stored state hydrates as logged out, and write failures
/// are logged without failing the operation.
pub struct AuthStore<S: Storage> {
    user: Option<User>,
    storage: S,
}

impl<S: Storage> AuthStore<S> {
    /// Open the session store, hydrating any previously persisted user.
    pub fn open(storage: S) -> Self {
        let user = match storage.get(USER_KEY) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(user) => Some(user),
                Err(err) => {
                    warn!(%err, "discarding unreadable user state");
                    None
                }
            },
            Ok(None) => None,
            Err(err) => {
                warn!(%err, "user storage unavailable, starting logged out");
                None
            }
        };
        Self { user, storage }
    }

    /// The signed-in user, if any.
    #[must_use]
    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Whether a session is active.
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    /// Sign in with an email address.
    ///
    /// The password is accepted and ignored - there is nothing to check
    /// it against. The session becomes the demo profile carrying the
    /// supplied email. Always succeeds.
    pub fn login(&mut self, email: Email, _password: &str) {
        self.user = Some(User {
            id: UserId::new(DEMO_USER_ID),
            name: DEMO_NAME.to_owned(),
            email,
            phone: Some(DEMO_PHONE.to_owned()),
            address: Some(DEMO_ADDRESS.to_owned()),
        });
        self.persist();
    }

    /// Create an account with a name and email.
    ///
    /// Like [`login`](Self::login), nothing is validated or checked for
    /// duplicates; the session becomes a fresh profile with no phone or
    /// address. Always succeeds.
    pub fn register(&mut self, name: impl Into<String>, email: Email, _password: &str) {
        self.user = Some(User {
            id: UserId::new(DEMO_USER_ID),
            name: name.into(),
            email,
            phone: None,
            address: None,
        });
        self.persist();
    }

    /// Merge a partial edit into the signed-in profile.
    ///
    /// Silently does nothing when logged out.
    pub fn update_profile(&mut self, update: ProfileUpdate) {
        if let Some(user) = &mut self.user {
            user.apply(update);
            self.persist();
        }
    }

    /// End the session and remove the persisted profile.
    pub fn logout(&mut self) {
        self.user = None;
        if let Err(err) = self.storage.remove(USER_KEY) {
            error!(%err, "failed to remove persisted user");
        }
    }

    /// Write the current profile to storage, absorbing failures.
    fn persist(&self) {
        let Some(user) = &self.user else { return };
        match serde_json::to_string(user) {
            Ok(raw) => {
                if let Err(err) = self.storage.set(USER_KEY, &raw) {
                    error!(%err, "failed to persist user");
                }
            }
            Err(err) => error!(%err, "failed to serialize user"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn email(s: &str) -> Email {
        Email::parse(s).unwrap()
    }

    #[test]
    fn test_starts_logged_out() {
        let auth = AuthStore::open(MemoryStorage::new());
        assert!(!auth.is_logged_in());
        assert!(auth.current_user().is_none());
    }

    #[test]
    fn test_login_installs_demo_profile() {
        let mut auth = AuthStore::open(MemoryStorage::new());
        auth.login(email("a@b.com"), "x");

        let user = auth.current_user().unwrap();
        assert_eq!(user.id.as_str(), "user1");
        assert_eq!(user.name, "John Doe");
        assert_eq!(user.email.as_str(), "a@b.com");
        assert!(user.phone.is_some());
        assert!(user.address.is_some());
    }

    #[test]
    fn test_register_uses_supplied_name() {
        let mut auth = AuthStore::open(MemoryStorage::new());
        auth.register("Jane Lifter", email("jane@example.com"), "pw");

        let user = auth.current_user().unwrap();
        assert_eq!(user.name, "Jane Lifter");
        assert!(user.phone.is_none());
        assert!(user.address.is_none());
    }

    #[test]
    fn test_logout_clears_session_and_entry() {
        let mut auth = AuthStore::open(MemoryStorage::new());
        auth.login(email("a@b.com"), "x");
        auth.logout();

        assert!(auth.current_user().is_none());
        assert!(auth.storage.get(USER_KEY).unwrap().is_none());
    }

    #[test]
    fn test_update_profile_merges_fields() {
        let mut auth = AuthStore::open(MemoryStorage::new());
        auth.register("Jane", email("jane@example.com"), "pw");
        auth.update_profile(ProfileUpdate {
            address: Some("9 Gym Way".to_owned()),
            ..ProfileUpdate::default()
        });

        let user = auth.current_user().unwrap();
        assert_eq!(user.address.as_deref(), Some("9 Gym Way"));
        assert_eq!(user.name, "Jane");
    }

    #[test]
    fn test_update_profile_while_logged_out_is_noop() {
        let mut auth = AuthStore::open(MemoryStorage::new());
        auth.update_profile(ProfileUpdate {
            name: Some("Ghost".to_owned()),
            ..ProfileUpdate::default()
        });

        assert!(auth.current_user().is_none());
        assert!(auth.storage.get(USER_KEY).unwrap().is_none());
    }

    #[test]
    fn test_session_persists_across_opens() {
        let storage = MemoryStorage::new();
        let mut auth = AuthStore::open(storage);
        auth.login(email("a@b.com"), "x");

        let reloaded = AuthStore::open(auth.storage);
        assert_eq!(
            reloaded.current_user().unwrap().email.as_str(),
            "a@b.com"
        );
    }

    #[test]
    fn test_corrupt_state_hydrates_logged_out() {
        let storage = MemoryStorage::new();
        storage.set(USER_KEY, "{broken").unwrap();

        let auth = AuthStore::open(storage);
        assert!(!auth.is_logged_in());
    }
}
