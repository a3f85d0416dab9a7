//! Client-side key/value storage for the session token and remembered
//! credentials.

use std::{collections::HashMap, fs, io, path::PathBuf, sync::RwLock, time::Duration};

use moka::sync::Cache;
use tracing::debug;

pub const AUTH_TOKEN_KEY: &str = "authToken";
pub const USER_EMAIL_KEY: &str = "userEmail";
pub const USER_ROLE_KEY: &str = "userRole";

pub const SESSION_KEYS: [&str; 3] = [AUTH_TOKEN_KEY, USER_EMAIL_KEY, USER_ROLE_KEY];

pub trait ClientStorage: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> io::Result<()>;
    fn remove(&self, key: &str) -> io::Result<()>;
}

/// Survives restarts: a flat JSON object on disk, rewritten on every change.
pub struct FileStorage {
    path: PathBuf,
    entries: RwLock<HashMap<String, String>>,
}

impl FileStorage {
    pub fn open(path: impl Into<PathBuf>) -> io::Result<Self> {
        let path = path.into();
        let entries = match fs::read(&path) {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(e),
        };
        debug!(path = %path.display(), "Opened client storage");
        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    fn flush(&self, entries: &HashMap<String, String>) -> io::Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let bytes = serde_json::to_vec_pretty(entries).map_err(io::Error::other)?;
        fs::write(&self.path, bytes)
    }

    fn write<F: FnOnce(&mut HashMap<String, String>)>(&self, f: F) -> io::Result<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| io::Error::other("client storage lock poisoned"))?;
        // memory only changes once the file has it
        let mut next = entries.clone();
        f(&mut next);
        self.flush(&next)?;
        *entries = next;
        Ok(())
    }
}

impl ClientStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> io::Result<()> {
        self.write(|entries| {
            entries.insert(key.to_string(), value.to_string());
        })
    }

    fn remove(&self, key: &str) -> io::Result<()> {
        self.write(|entries| {
            entries.remove(key);
        })
    }
}

/// Lives as long as the process, and each entry at most `ttl`.
pub struct SessionStorage {
    cache: Cache<String, String>,
}

impl SessionStorage {
    pub fn new(ttl: Duration) -> Self {
        Self {
            cache: Cache::builder()
                .max_capacity(64)
                .time_to_live(ttl)
                .build(),
        }
    }
}

impl ClientStorage for SessionStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.cache.get(key)
    }

    fn set(&self, key: &str, value: &str) -> io::Result<()> {
        self.cache.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> io::Result<()> {
        self.cache.invalidate(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_storage_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("storage.json");

        let storage = FileStorage::open(&path).unwrap();
        assert_eq!(storage.get(AUTH_TOKEN_KEY), None);
        storage.set(AUTH_TOKEN_KEY, "tok-123").unwrap();
        storage.set(USER_EMAIL_KEY, "a@school.edu").unwrap();
        storage.remove(USER_EMAIL_KEY).unwrap();

        let reopened = FileStorage::open(&path).unwrap();
        assert_eq!(reopened.get(AUTH_TOKEN_KEY).as_deref(), Some("tok-123"));
        assert_eq!(reopened.get(USER_EMAIL_KEY), None);
    }

    #[test]
    fn corrupt_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, b"not json").unwrap();
        let err = FileStorage::open(&path).err().unwrap();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn failed_write_leaves_entries_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let parent = dir.path().join("d");
        let storage = FileStorage::open(parent.join("storage.json")).unwrap();

        // a plain file where the directory should be
        fs::write(&parent, b"").unwrap();

        assert!(storage.set(AUTH_TOKEN_KEY, "tok").is_err());
        assert_eq!(storage.get(AUTH_TOKEN_KEY), None);
    }

    #[test]
    fn session_entries_expire() {
        let storage = SessionStorage::new(Duration::from_millis(50));
        storage.set(AUTH_TOKEN_KEY, "tok").unwrap();
        assert_eq!(storage.get(AUTH_TOKEN_KEY).as_deref(), Some("tok"));
        std::thread::sleep(Duration::from_millis(120));
        assert_eq!(storage.get(AUTH_TOKEN_KEY), None);
    }
}
