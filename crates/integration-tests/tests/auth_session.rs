//! Session lifecycle over the on-disk storage backend.

#![allow(clippy::unwrap_used)]

use tempfile::TempDir;

use fitgear_core::Email;
use fitgear_storefront::models::ProfileUpdate;
use fitgear_storefront::storage::{FileStorage, Storage};
use fitgear_storefront::stores::AuthStore;
use fitgear_storefront::stores::auth::USER_KEY;

fn open_auth(dir: &TempDir) -> AuthStore<FileStorage> {
    AuthStore::open(FileStorage::open(dir.path()).unwrap())
}

fn email(s: &str) -> Email {
    Email::parse(s).unwrap()
}

#[test]
fn login_then_logout_leaves_no_user() {
    let dir = TempDir::new().unwrap();
    let mut auth = open_auth(&dir);

    auth.login(email("a@b.com"), "x");
    assert!(auth.is_logged_in());

    auth.logout();
    assert!(auth.current_user().is_none());

    // And nothing is left on disk.
    let storage = FileStorage::open(dir.path()).unwrap();
    assert!(storage.get(USER_KEY).unwrap().is_none());
}

#[test]
fn session_survives_a_restart() {
    let dir = TempDir::new().unwrap();

    {
        let mut auth = open_auth(&dir);
        auth.register("Jane Lifter", email("jane@example.com"), "pw");
    }

    let auth = open_auth(&dir);
    let user = auth.current_user().unwrap();
    assert_eq!(user.name, "Jane Lifter");
    assert_eq!(user.email.as_str(), "jane@example.com");
}

#[test]
fn update_profile_after_logout_is_a_noop() {
    let dir = TempDir::new().unwrap();
    let mut auth = open_auth(&dir);

    auth.login(email("a@b.com"), "x");
    auth.logout();
    auth.update_profile(ProfileUpdate {
        name: Some("Ghost".to_owned()),
        ..ProfileUpdate::default()
    });

    assert!(auth.current_user().is_none());
    assert!(!dir.path().join("user.json").exists());
}

#[test]
fn profile_edits_persist() {
    let dir = TempDir::new().unwrap();

    {
        let mut auth = open_auth(&dir);
        auth.login(email("a@b.com"), "x");
        auth.update_profile(ProfileUpdate {
            address: Some("9 Gym Way".to_owned()),
            email: Some(email("new@b.com")),
            ..ProfileUpdate::default()
        });
    }

    let auth = open_auth(&dir);
    let user = auth.current_user().unwrap();
    assert_eq!(user.address.as_deref(), Some("9 Gym Way"));
    assert_eq!(user.email.as_str(), "new@b.com");
    // Untouched demo fields survive the edit.
    assert_eq!(user.name, "John Doe");
}

#[test]
fn corrupt_user_file_hydrates_as_logged_out() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("user.json"), "][").unwrap();

    let auth = open_auth(&dir);
    assert!(!auth.is_logged_in());
}

#[test]
fn persisted_layout_is_a_json_object() {
    let dir = TempDir::new().unwrap();
    let mut auth = open_auth(&dir);
    auth.login(email("a@b.com"), "x");

    let raw = std::fs::read_to_string(dir.path().join("user.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["id"], "user1");
    assert_eq!(value["email"], "a@b.com");
}
