//! Credential storage and lookup
//!
//! The client only ever *reads* credentials, through a [`CredentialProvider`]
//! handed to it at construction. Writing tokens (login, logout) belongs to the
//! caller, which works against a [`TokenStore`].
//!
//! # Example
//!
//! ```rust
//! use storefront_api_client::credentials::{
//!     CredentialProvider, MemoryTokenStore, TokenStore, ACCESS_TOKEN_KEY,
//! };
//!
//! let store = MemoryTokenStore::new();
//! assert_eq!(store.access_token(), None);
//!
//! store.set(ACCESS_TOKEN_KEY, "eyJhbGciOi...").unwrap();
//! assert_eq!(store.access_token().as_deref(), Some("eyJhbGciOi..."));
//! ```

use crate::error::{ApiError, ApiResult};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use tracing::{debug, warn};

/// Key under which the bearer token is stored
pub const ACCESS_TOKEN_KEY: &str = "access_token";

/// Key under which the refresh token is stored
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";

/// Environment variable overriding the token file location
pub const TOKEN_FILE_VAR: &str = "STOREFRONT_TOKEN_FILE";

/// Source of the bearer token attached to outgoing requests
///
/// Called once per request, right before it is sent. Returning `None` means
/// the request goes out unauthenticated.
pub trait CredentialProvider: Send + Sync {
    /// Current access token, if any
    fn access_token(&self) -> Option<String>;
}

/// Persistent key-value storage for credentials
pub trait TokenStore: Send + Sync {
    /// Read a value
    fn get(&self, key: &str) -> ApiResult<Option<String>>;

    /// Write a value, replacing any previous one
    fn set(&self, key: &str, value: &str) -> ApiResult<()>;

    /// Remove a value, returning whether it was present
    fn remove(&self, key: &str) -> ApiResult<bool>;
}

impl<S: TokenStore> CredentialProvider for S {
    fn access_token(&self) -> Option<String> {
        match self.get(ACCESS_TOKEN_KEY) {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                warn!(error = %e, "Token store unreadable, sending request without credentials");
                None
            }
        }
    }
}

/// Provider that never supplies a token
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCredentials;

impl CredentialProvider for NoCredentials {
    fn access_token(&self) -> Option<String> {
        None
    }
}

/// Provider with a fixed token, e.g. one passed on the command line
#[derive(Debug, Clone, Default)]
pub struct StaticToken(Option<String>);

impl StaticToken {
    /// Always supply `token`
    pub fn new(token: impl Into<String>) -> Self {
        Self(Some(token.into()))
    }

    /// Never supply a token
    #[must_use]
    pub fn none() -> Self {
        Self(None)
    }
}

impl CredentialProvider for StaticToken {
    fn access_token(&self) -> Option<String> {
        self.0.clone()
    }
}

/// In-memory token store
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    values: RwLock<BTreeMap<String, String>>,
}

impl MemoryTokenStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store already holding an access token
    pub fn with_access_token(token: impl Into<String>) -> Self {
        let values = BTreeMap::from([(ACCESS_TOKEN_KEY.to_string(), token.into())]);
        Self {
            values: RwLock::new(values),
        }
    }
}

fn poisoned() -> ApiError {
    ApiError::config("token store lock poisoned")
}

impl TokenStore for MemoryTokenStore {
    fn get(&self, key: &str) -> ApiResult<Option<String>> {
        let guard = self.values.read().map_err(|_| poisoned())?;
        Ok(guard.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> ApiResult<()> {
        let mut guard = self.values.write().map_err(|_| poisoned())?;
        guard.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> ApiResult<bool> {
        let mut guard = self.values.write().map_err(|_| poisoned())?;
        Ok(guard.remove(key).is_some())
    }
}

/// Token store backed by a JSON object on disk
///
/// The file is re-read on every lookup so tokens written by another process
/// (a separate `login` invocation, say) are picked up without restarting.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Store at an explicit path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `STOREFRONT_TOKEN_FILE`, or the default location
    pub fn from_env() -> ApiResult<Self> {
        match env::var(TOKEN_FILE_VAR) {
            Ok(path) if !path.trim().is_empty() => Ok(Self::new(path)),
            _ => Self::default_path().map(Self::new),
        }
    }

    /// `<config_dir>/storefront/credentials.json`
    pub fn default_path() -> ApiResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("storefront").join("credentials.json"))
            .ok_or_else(|| {
                ApiError::config(format!(
                    "no configuration directory on this platform; set {TOKEN_FILE_VAR}"
                ))
            })
    }

    /// Location of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> ApiResult<BTreeMap<String, String>> {
        match fs::read_to_string(&self.path) {
            Ok(content) if content.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, values: &BTreeMap<String, String>) -> ApiResult<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                fs::create_dir_all(parent)?;
                parent
            }
            _ => Path::new("."),
        };

        let content = serde_json::to_string_pretty(values)?;
        replace_private(dir, &self.path, content.as_bytes())?;
        debug!(path = %self.path.display(), keys = values.len(), "Token store written");
        Ok(())
    }
}

/// Write `contents` to a temp file in `dir`, then rename it over `path`
///
/// Readers see either the previous file or the new one, never a truncated one.
fn replace_private(dir: &Path, path: &Path, contents: &[u8]) -> std::io::Result<()> {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new_in(dir)?;
    file.write_all(contents)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.as_file()
            .set_permissions(fs::Permissions::from_mode(0o600))?;
    }
    file.as_file().sync_all()?;
    file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

impl TokenStore for FileTokenStore {
    fn get(&self, key: &str) -> ApiResult<Option<String>> {
        Ok(self.load()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> ApiResult<()> {
        let mut values = self.load()?;
        values.insert(key.to_string(), value.to_string());
        self.save(&values)
    }

    fn remove(&self, key: &str) -> ApiResult<bool> {
        let mut values = self.load()?;
        let existed = values.remove(key).is_some();
        if existed {
            self.save(&values)?;
        }
        Ok(existed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryTokenStore::new();
        assert_eq!(store.get(ACCESS_TOKEN_KEY).unwrap(), None);

        store.set(ACCESS_TOKEN_KEY, "abc").unwrap();
        assert_eq!(store.access_token().as_deref(), Some("abc"));

        assert!(store.remove(ACCESS_TOKEN_KEY).unwrap());
        assert!(!store.remove(ACCESS_TOKEN_KEY).unwrap());
        assert_eq!(store.access_token(), None);
    }

    #[test]
    fn test_empty_token_is_absent() {
        let store = MemoryTokenStore::with_access_token("");
        assert_eq!(store.access_token(), None);
    }

    #[test]
    fn test_static_providers() {
        assert_eq!(NoCredentials.access_token(), None);
        assert_eq!(StaticToken::none().access_token(), None);
        assert_eq!(StaticToken::new("t0k").access_token().as_deref(), Some("t0k"));
    }

    #[test]
    fn test_file_store_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = FileTokenStore::new(dir.path().join("nope.json"));

        assert_eq!(store.get(ACCESS_TOKEN_KEY).unwrap(), None);
        assert_eq!(store.access_token(), None);
        assert!(!store.remove(REFRESH_TOKEN_KEY).unwrap());
    }

    #[test]
    fn test_file_store_persists_across_instances() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("credentials.json");

        let writer = FileTokenStore::new(&path);
        writer.set(ACCESS_TOKEN_KEY, "access-1").unwrap();
        writer.set(REFRESH_TOKEN_KEY, "refresh-1").unwrap();

        let reader = FileTokenStore::new(&path);
        assert_eq!(reader.access_token().as_deref(), Some("access-1"));
        assert_eq!(
            reader.get(REFRESH_TOKEN_KEY).unwrap().as_deref(),
            Some("refresh-1")
        );

        writer.remove(ACCESS_TOKEN_KEY).unwrap();
        assert_eq!(reader.access_token(), None);
        assert!(reader.get(REFRESH_TOKEN_KEY).unwrap().is_some());
    }

    #[test]
    fn test_file_store_corrupt_file_yields_no_token() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("credentials.json");
        fs::write(&path, "not json").unwrap();

        let store = FileTokenStore::new(&path);
        assert!(matches!(store.get(ACCESS_TOKEN_KEY), Err(ApiError::Json(_))));
        assert_eq!(store.access_token(), None);
    }

    #[test]
    fn test_file_store_leaves_no_temp_files() {
        let dir = TempDir::new().unwrap();
        let store = FileTokenStore::new(dir.path().join("credentials.json"));
        store.set(ACCESS_TOKEN_KEY, "a").unwrap();
        store.set(REFRESH_TOKEN_KEY, "r").unwrap();
        store.remove(ACCESS_TOKEN_KEY).unwrap();

        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(names, ["credentials.json"]);
    }

    #[test]
    fn test_file_store_readers_never_see_partial_writes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("credentials.json");
        let long_token = "x".repeat(64 * 1024);
        FileTokenStore::new(&path)
            .set(ACCESS_TOKEN_KEY, "seed")
            .unwrap();

        let writer = {
            let path = path.clone();
            std::thread::spawn(move || {
                let store = FileTokenStore::new(path);
                for i in 0..200 {
                    let token = if i % 2 == 0 { long_token.as_str() } else { "short" };
                    store.set(ACCESS_TOKEN_KEY, token).unwrap();
                }
            })
        };

        let reader = FileTokenStore::new(&path);
        while !writer.is_finished() {
            let token = reader.get(ACCESS_TOKEN_KEY).unwrap();
            assert!(token.is_some_and(|t| !t.is_empty()));
        }
        writer.join().unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn test_file_store_is_private() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("credentials.json");
        FileTokenStore::new(&path).set(ACCESS_TOKEN_KEY, "x").unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
