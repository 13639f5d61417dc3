//! Session identity lookups backed by a persistent key-value store.
//!
//! The controller only ever sees [`IdentityProvider`]. [`StoredIdentity`] implements it on top of
//! any [`KeyValueStore`], reading the same `@authToken`, `@authorId` and `@authorName` keys the
//! login flow writes.
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::num::IntErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use tracing::debug;

use crate::model::{SessionIdentity, AUTHOR_ID_KEY, AUTHOR_NAME_KEY, AUTH_TOKEN_KEY};

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Identity store {path} is not a JSON object of strings: {source}")]
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Xdg(#[from] xdg::BaseDirectoriesError),
}

#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get_item(&self, key: &str) -> Result<Option<String>>;
    async fn set_item(&self, key: &str, value: &str) -> Result<()>;
    async fn remove_item(&self, key: &str) -> Result<()>;
}

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn auth_token(&self) -> Result<Option<String>>;

    /// The stored author id, or `None` when it is absent or not a base-10 integer.
    async fn author_id(&self) -> Result<Option<i64>>;

    async fn author_name(&self) -> Result<Option<String>>;
}

/// Parses a stored author id the lenient way the login flow stores it: leading whitespace is
/// skipped, trailing garbage after the digits is ignored and out of range values saturate.
pub fn parse_author_id(value: &str) -> Option<i64> {
    let value = value.trim_start();
    let end = value
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || (i == 0 && (c == '-' || c == '+'))))
        .map_or(value.len(), |(i, _)| i);

    match value[..end].parse::<i64>() {
        Ok(id) => Some(id),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}

pub struct StoredIdentity<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> StoredIdentity<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub async fn save(&self, identity: &SessionIdentity) -> Result<()> {
        self.store
            .set_item(AUTH_TOKEN_KEY, &identity.auth_token)
            .await?;
        self.store
            .set_item(AUTHOR_ID_KEY, &identity.author_id.to_string())
            .await?;
        self.store
            .set_item(AUTHOR_NAME_KEY, &identity.author_name)
            .await?;

        debug!("saved session identity for author {}", identity.author_id);
        Ok(())
    }

    pub async fn clear(&self) -> Result<()> {
        for key in [AUTH_TOKEN_KEY, AUTHOR_ID_KEY, AUTHOR_NAME_KEY] {
            self.store.remove_item(key).await?;
        }

        Ok(())
    }

    /// The complete identity, if every key is present and the author id parses.
    pub async fn load(&self) -> Result<Option<SessionIdentity>> {
        let (Some(auth_token), Some(author_id), Some(author_name)) = (
            self.auth_token().await?,
            self.author_id().await?,
            self.author_name().await?,
        ) else {
            return Ok(None);
        };

        Ok(Some(SessionIdentity {
            auth_token,
            author_id,
            author_name,
        }))
    }
}

#[async_trait]
impl<S: KeyValueStore> IdentityProvider for StoredIdentity<S> {
    async fn auth_token(&self) -> Result<Option<String>> {
        self.store.get_item(AUTH_TOKEN_KEY).await
    }

    async fn author_id(&self) -> Result<Option<i64>> {
        Ok(self
            .store
            .get_item(AUTHOR_ID_KEY)
            .await?
            .as_deref()
            .and_then(parse_author_id))
    }

    async fn author_name(&self) -> Result<Option<String>> {
        self.store.get_item(AUTHOR_NAME_KEY).await
    }
}

/// A JSON object of string values on disk. A missing file reads as an empty store.
pub struct FileStore {
    path: PathBuf,
    write_lock: tokio::sync::Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: tokio::sync::Mutex::new(()),
        }
    }

    /// `$XDG_DATA_HOME/postdeck/identity.json`
    pub fn default_location() -> Result<Self> {
        let xdg_dirs = xdg::BaseDirectories::with_prefix("postdeck")?;
        Ok(Self::new(xdg_dirs.get_data_file("identity.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read(&self) -> Result<BTreeMap<String, String>> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(e.into()),
        };

        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&contents).map_err(|source| Error::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    async fn write(&self, items: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let contents = serde_json::to_string_pretty(items)?;
        tokio::fs::write(&self.path, contents).await?;

        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read().await?.remove(key))
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut items = self.read().await?;
        items.insert(key.to_string(), value.to_string());
        self.write(&items).await
    }

    async fn remove_item(&self, key: &str) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut items = self.read().await?;
        if items.remove(key).is_some() {
            self.write(&items).await?;
        }

        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    items: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    fn items(&self) -> std::sync::MutexGuard<'_, BTreeMap<String, String>> {
        self.items.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MemoryStore {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            items: Mutex::new(
                iter.into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items().get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.items().insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<()> {
        self.items().remove(key);
        Ok(())
    }
}
