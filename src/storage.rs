//! Persistence of the one piece of progress that outlives a page load: whether
//! the swatter has been bought.

use crate::config::GameConfig;
use crate::constants::{CONFIG_KEY, PROGRESS_KEY};
use crate::error::{GameError, GameResult};
use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::rc::Rc;

pub trait UpgradeStore {
    fn load_upgrade_flag(&self) -> GameResult<bool>;
    fn save_upgrade_flag(&mut self, owned: bool) -> GameResult<()>;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedProgress {
    pub has_upgrade: bool,
}

fn local_storage() -> GameResult<web_sys::Storage> {
    web_sys::window()
        .ok_or(GameError::StorageUnavailable)?
        .local_storage()
        .ok()
        .flatten()
        .ok_or(GameError::StorageUnavailable)
}

/// `window.localStorage`, JSON-encoded under a single key.
#[derive(Clone, Debug)]
pub struct LocalStorageStore {
    key: String,
}

impl Default for LocalStorageStore {
    fn default() -> Self {
        Self::new(PROGRESS_KEY)
    }
}

impl LocalStorageStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn clear(&self) -> GameResult<()> {
        local_storage()?.remove_item(&self.key).map_err(|e| GameError::Storage {
            key: self.key.clone(),
            reason: format!("{:?}", e),
        })
    }
}

impl UpgradeStore for LocalStorageStore {
    fn load_upgrade_flag(&self) -> GameResult<bool> {
        let raw = local_storage()?.get_item(&self.key).map_err(|e| GameError::Storage {
            key: self.key.clone(),
            reason: format!("{:?}", e),
        })?;
        let Some(raw) = raw else { return Ok(false); };
        let saved: SavedProgress = serde_json::from_str(&raw).map_err(|e| GameError::Decode {
            what: "saved progress",
            reason: e.to_string(),
        })?;
        Ok(saved.has_upgrade)
    }

    fn save_upgrade_flag(&mut self, owned: bool) -> GameResult<()> {
        let raw = serde_json::to_string(&SavedProgress { has_upgrade: owned }).map_err(|e| {
            GameError::Decode { what: "saved progress", reason: e.to_string() }
        })?;
        local_storage()?.set_item(&self.key, &raw).map_err(|e| GameError::Storage {
            key: self.key.clone(),
            reason: format!("{:?}", e),
        })
    }
}

/// In-memory store. Clones share the same flag so a test can keep a handle
/// while the game owns the boxed store.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    flag: Rc<Cell<bool>>,
    saves: Rc<Cell<u32>>,
}

impl MemoryStore {
    pub fn with_flag(owned: bool) -> Self {
        let store = Self::default();
        store.flag.set(owned);
        store
    }

    pub fn flag(&self) -> bool {
        self.flag.get()
    }

    pub fn save_count(&self) -> u32 {
        self.saves.get()
    }
}

impl UpgradeStore for MemoryStore {
    fn load_upgrade_flag(&self) -> GameResult<bool> {
        Ok(self.flag.get())
    }

    fn save_upgrade_flag(&mut self, owned: bool) -> GameResult<()> {
        self.flag.set(owned);
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}

/// Optional tuning override stored next to the progress key.
/// Absent → `Ok(None)`; present but invalid → `Err`.
pub fn load_config_override() -> GameResult<Option<GameConfig>> {
    let store = local_storage()?;
    match store.get_item(CONFIG_KEY) {
        Ok(Some(raw)) => GameConfig::from_json(&raw).map(Some),
        Ok(None) => Ok(None),
        Err(e) => Err(GameError::Storage { key: CONFIG_KEY.to_string(), reason: format!("{:?}", e) }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_clones_share_state() {
        let handle = MemoryStore::default();
        let mut owned: Box<dyn UpgradeStore> = Box::new(handle.clone());
        assert_eq!(owned.load_upgrade_flag(), Ok(false));
        owned.save_upgrade_flag(true).unwrap();
        assert!(handle.flag());
        assert_eq!(handle.save_count(), 1);
    }

    #[test]
    fn saved_progress_json_shape() {
        let raw = serde_json::to_string(&SavedProgress { has_upgrade: true }).unwrap();
        assert_eq!(raw, r#"{"has_upgrade":true}"#);
    }
}
