mod common;

use common::session;
use postdeck::{
    auth::AuthGuard,
    identity::{parse_author_id, Error, FileStore, KeyValueStore, MemoryStore},
    model::{AUTHOR_ID_KEY, AUTHOR_NAME_KEY, AUTH_TOKEN_KEY},
    IdentityProvider, PostdeckError, StoredIdentity,
};

#[test]
fn author_id_parses_leading_digits() {
    assert_eq!(parse_author_id("42"), Some(42));
    assert_eq!(parse_author_id("  42"), Some(42));
    assert_eq!(parse_author_id("42abc"), Some(42));
    assert_eq!(parse_author_id("-3"), Some(-3));
    assert_eq!(parse_author_id("abc"), None);
    assert_eq!(parse_author_id("-"), None);
    assert_eq!(parse_author_id(""), None);
}

#[test]
fn oversized_author_id_saturates() {
    assert_eq!(parse_author_id("99999999999999999999"), Some(i64::MAX));
    assert_eq!(parse_author_id("-99999999999999999999x"), Some(i64::MIN));
}

#[tokio::test]
async fn file_store_starts_empty_and_persists() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("identity.json");

    let identity = StoredIdentity::new(FileStore::new(&path));
    assert_eq!(identity.auth_token().await.unwrap(), None);
    assert_eq!(identity.load().await.unwrap(), None);

    identity.save(&session()).await.unwrap();

    let reopened = StoredIdentity::new(FileStore::new(&path));
    assert_eq!(reopened.load().await.unwrap(), Some(session()));
    assert_eq!(
        reopened.store().get_item(AUTHOR_ID_KEY).await.unwrap(),
        Some("42".to_string())
    );

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw[AUTH_TOKEN_KEY], "secret-token");
    assert_eq!(raw[AUTHOR_NAME_KEY], "Ada");

    reopened.clear().await.unwrap();
    assert_eq!(reopened.author_name().await.unwrap(), None);
}

#[tokio::test]
async fn corrupt_file_store_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("identity.json");
    std::fs::write(&path, "[1, 2, 3]").unwrap();

    let store = FileStore::new(&path);
    assert!(matches!(
        store.get_item(AUTH_TOKEN_KEY).await,
        Err(Error::Corrupt { .. })
    ));
}

#[test]
fn debug_output_masks_the_token() {
    let output = format!("{:?}", session());
    assert!(!output.contains("secret-token"));
    assert!(output.contains("Ada"));
}

#[tokio::test]
async fn guard_requires_a_token() {
    let identity = StoredIdentity::new(MemoryStore::default());
    assert!(matches!(
        AuthGuard::check(&identity).await,
        Err(PostdeckError::Unauthorized)
    ));

    identity
        .store()
        .set_item(AUTH_TOKEN_KEY, "")
        .await
        .unwrap();
    assert!(matches!(
        AuthGuard::check(&identity).await,
        Err(PostdeckError::Unauthorized)
    ));

    identity.save(&session()).await.unwrap();
    assert!(AuthGuard::check(&identity).await.is_ok());
}
