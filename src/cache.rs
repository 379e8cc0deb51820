//! This module provides a backing store that survives restarts in a local file

use std::collections::HashMap;
use std::error::Error;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::traits::KeyValueStore;

/// A [`KeyValueStore`] that mirrors its entries in a local JSON file.
///
/// Every [`set`](KeyValueStore::set) writes the whole document back to the backing
/// file. A failed save is logged and the entry is still served from memory for the
/// rest of the session, matching how reads degrade elsewhere in this crate
#[derive(Debug)]
pub struct FileStore {
    backing_file: PathBuf,
    data: Mutex<StoredData>,
}

#[derive(Default, Debug, PartialEq, Serialize, Deserialize)]
struct StoredData {
    entries: HashMap<String, String>,
    last_saved: Option<DateTime<Utc>>,
}

impl FileStore {
    /// Initialize a store from the content of a valid backing file if it exists.
    /// Returns an error otherwise
    pub fn from_file(path: &Path) -> Result<Self, Box<dyn Error>> {
        let data = match std::fs::File::open(path) {
            Err(err) => {
                return Err(format!("Unable to open file {:?}: {}", path, err).into());
            }
            Ok(file) => serde_json::from_reader(file)?,
        };

        Ok(Self {
            backing_file: PathBuf::from(path),
            data: Mutex::new(data),
        })
    }

    /// Initialize an empty store that will save to `path`
    pub fn new(path: &Path) -> Self {
        Self {
            backing_file: PathBuf::from(path),
            data: Mutex::new(StoredData::default()),
        }
    }

    /// The file this store saves to
    pub fn backing_file(&self) -> &Path {
        &self.backing_file
    }

    /// Store the current entries to the backing file
    fn save_to_file(&self, data: &mut StoredData) {
        data.last_saved = Some(Utc::now());

        let path = &self.backing_file;
        let file = match std::fs::File::create(path) {
            Err(err) => {
                log::warn!("Unable to save file {:?}: {}", path, err);
                return;
            }
            Ok(f) => f,
        };

        if let Err(err) = serde_json::to_writer(file, data) {
            log::warn!("Unable to serialize: {}", err);
        }
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, Box<dyn Error>> {
        let data = self
            .data
            .lock()
            .map_err(|err| format!("Poisoned store lock: {}", err))?;
        Ok(data.entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), Box<dyn Error>> {
        let mut data = self
            .data
            .lock()
            .map_err(|err| format!("Poisoned store lock: {}", err))?;
        data.entries.insert(key.to_string(), value);
        self.save_to_file(&mut data);
        Ok(())
    }
}
