//! Durable storage for total XP
//!
//! A single key (`total_xp`) holding the decimal string of the player's total XP.
//! Reads never fail: a missing, unreadable or non-numeric value loads as 0.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::config::{write_atomic, Config};

/// Name of the persisted key (file name for [`FileXpStore`])
pub const XP_KEY: &str = "total_xp";

/// Error type for XP store writes
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to write XP store {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("XP store lock poisoned")]
    Poisoned,
}

/// Backing storage for the player's total XP
pub trait XpStore: Send {
    /// Load the persisted total, defaulting to 0
    fn load(&self) -> u64;

    /// Persist a new total
    fn save(&self, total_xp: u64) -> Result<(), StoreError>;

    /// Remove the persisted total
    fn clear(&self) -> Result<(), StoreError>;
}

/// Parse a persisted value. Anything that is not an unsigned integer is rejected.
pub fn parse_total_xp(raw: &str) -> Option<u64> {
    raw.trim().parse().ok()
}

/// File-backed store (`~/.cyberaware/total_xp` by default)
#[derive(Debug, Clone)]
pub struct FileXpStore {
    path: PathBuf,
}

impl FileXpStore {
    /// Store in the global data directory
    pub fn open_default() -> Self {
        Self::in_dir(&Config::global_config_dir())
    }

    /// Store in a specific directory
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            path: dir.join(XP_KEY),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_err(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl XpStore for FileXpStore {
    fn load(&self) -> u64 {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return 0,
            Err(e) => {
                tracing::debug!("Could not read {}: {}", self.path.display(), e);
                return 0;
            }
        };

        parse_total_xp(&raw).unwrap_or_else(|| {
            tracing::debug!("Ignoring malformed XP value in {}", self.path.display());
            0
        })
    }

    fn save(&self, total_xp: u64) -> Result<(), StoreError> {
        write_atomic(&self.path, total_xp.to_string().as_bytes()).map_err(|e| self.io_err(e))
    }

    fn clear(&self) -> Result<(), StoreError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.io_err(e)),
        }
    }
}

/// In-process store. Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct MemoryXpStore {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryXpStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a raw persisted value
    pub fn with_raw(raw: &str) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(raw.to_string()))),
        }
    }

    /// Raw persisted value, if any
    pub fn raw(&self) -> Option<String> {
        self.slot.lock().ok().and_then(|slot| slot.clone())
    }
}

impl XpStore for MemoryXpStore {
    fn load(&self) -> u64 {
        self.raw()
            .and_then(|raw| parse_total_xp(&raw))
            .unwrap_or(0)
    }

    fn save(&self, total_xp: u64) -> Result<(), StoreError> {
        let mut slot = self.slot.lock().map_err(|_| StoreError::Poisoned)?;
        *slot = Some(total_xp.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        let mut slot = self.slot.lock().map_err(|_| StoreError::Poisoned)?;
        *slot = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_total_xp() {
        assert_eq!(parse_total_xp("450"), Some(450));
        assert_eq!(parse_total_xp(" 12\n"), Some(12));
        assert_eq!(parse_total_xp(""), None);
        assert_eq!(parse_total_xp("abc"), None);
        assert_eq!(parse_total_xp("-5"), None);
        assert_eq!(parse_total_xp("12.5"), None);
    }

    #[test]
    fn test_file_store_missing_loads_zero() {
        let dir = tempdir().unwrap();
        let store = FileXpStore::in_dir(dir.path());
        assert_eq!(store.load(), 0);
    }

    #[test]
    fn test_file_store_persists_decimal_string() {
        let dir = tempdir().unwrap();
        let store = FileXpStore::in_dir(&dir.path().join("nested"));
        store.save(450).unwrap();

        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(raw, "450");
        assert_eq!(FileXpStore::in_dir(&dir.path().join("nested")).load(), 450);
    }

    #[test]
    fn test_file_store_malformed_loads_zero() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(XP_KEY), "not a number").unwrap();
        assert_eq!(FileXpStore::in_dir(dir.path()).load(), 0);
    }

    #[test]
    fn test_file_store_clear() {
        let dir = tempdir().unwrap();
        let store = FileXpStore::in_dir(dir.path());
        store.save(10).unwrap();
        store.clear().unwrap();
        assert_eq!(store.load(), 0);
        // Clearing twice is fine
        store.clear().unwrap();
    }

    #[test]
    fn test_memory_store_shares_slot() {
        let store = MemoryXpStore::new();
        let view = store.clone();
        store.save(42).unwrap();
        assert_eq!(view.raw().as_deref(), Some("42"));
        assert_eq!(MemoryXpStore::with_raw("oops").load(), 0);
    }
}
