//! This module provides an in-memory backing store

use std::collections::HashMap;
use std::error::Error;
use std::sync::Mutex;
#[cfg(feature = "local_store_mocks")]
use std::sync::Arc;

use async_trait::async_trait;

#[cfg(feature = "local_store_mocks")]
use crate::mock_behaviour::MockBehaviour;
use crate::traits::KeyValueStore;

/// A [`KeyValueStore`] that keeps its entries in process memory.
///
/// Entries live exactly as long as the store does, which suits tests and programs
/// happy to rebuild the catalogue on every launch
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,

    /// When set, tests can make this store fail on demand
    #[cfg(feature = "local_store_mocks")]
    mock_behaviour: Option<Arc<Mutex<MockBehaviour>>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store whose operations obey `mock_behaviour`
    #[cfg(feature = "local_store_mocks")]
    pub fn with_mock_behaviour(mock_behaviour: Arc<Mutex<MockBehaviour>>) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            mock_behaviour: Some(mock_behaviour),
        }
    }

    /// How many keys this store currently holds
    pub fn len(&self) -> usize {
        match self.entries.lock() {
            Ok(entries) => entries.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, Box<dyn Error>> {
        #[cfg(feature = "local_store_mocks")]
        if let Some(mock) = &self.mock_behaviour {
            mock.lock().map_err(|err| format!("Poisoned mock lock: {}", err))?.can_get()?;
        }

        let entries = self
            .entries
            .lock()
            .map_err(|err| format!("Poisoned store lock: {}", err))?;
        Ok(entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), Box<dyn Error>> {
        #[cfg(feature = "local_store_mocks")]
        if let Some(mock) = &self.mock_behaviour {
            mock.lock().map_err(|err| format!("Poisoned mock lock: {}", err))?.can_set()?;
        }

        let mut entries = self
            .entries
            .lock()
            .map_err(|err| format!("Poisoned store lock: {}", err))?;
        entries.insert(key.to_string(), value);
        Ok(())
    }
}
