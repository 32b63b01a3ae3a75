//! Saved-calculation history over an injected key-value store.
//!
//! The engines never touch persistence; callers that want a history list
//! supply any `KeyValueStore` and the log serialises flat
//! inputs-plus-outputs records under a single key. The whole document is
//! read on each access and rewritten on each mutation.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::FinCalcError;
use crate::FinCalcResult;

/// Key the history document lives under.
pub const HISTORY_KEY: &str = "fincalc.history";

// ---------------------------------------------------------------------------
// Storage boundary
// ---------------------------------------------------------------------------

/// Opaque string key-value storage owned by the caller.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> FinCalcResult<Option<String>>;
    fn put(&mut self, key: &str, value: &str) -> FinCalcResult<()>;
    fn remove(&mut self, key: &str) -> FinCalcResult<()>;
}

/// In-memory store for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> FinCalcResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: &str) -> FinCalcResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> FinCalcResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// One saved calculation: which calculator ran, with what, and the result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedCalculation {
    pub id: u64,
    pub calculator: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub inputs: serde_json::Value,
    pub outputs: serde_json::Value,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct HistoryDocument {
    entries: Vec<SavedCalculation>,
}

// ---------------------------------------------------------------------------
// Log
// ---------------------------------------------------------------------------

/// Append-mostly calculation history over a key-value store.
pub struct HistoryLog<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> HistoryLog<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// All saved calculations, oldest first.
    pub fn entries(&self) -> FinCalcResult<Vec<SavedCalculation>> {
        Ok(self.load()?.entries)
    }

    /// Append a record, assigning it the next id. Returns the id.
    pub fn append(
        &mut self,
        calculator: &str,
        label: Option<String>,
        inputs: serde_json::Value,
        outputs: serde_json::Value,
    ) -> FinCalcResult<u64> {
        let mut doc = self.load()?;
        let id = doc.entries.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        doc.entries.push(SavedCalculation {
            id,
            calculator: calculator.to_string(),
            label,
            inputs,
            outputs,
        });
        self.save(&doc)?;
        Ok(id)
    }

    /// Delete a record by id. Returns whether anything was removed.
    pub fn delete(&mut self, id: u64) -> FinCalcResult<bool> {
        let mut doc = self.load()?;
        let before = doc.entries.len();
        doc.entries.retain(|e| e.id != id);
        let removed = doc.entries.len() != before;
        if removed {
            self.save(&doc)?;
        }
        Ok(removed)
    }

    /// Drop the whole history.
    pub fn clear(&mut self) -> FinCalcResult<()> {
        self.store.remove(HISTORY_KEY)
    }

    fn load(&self) -> FinCalcResult<HistoryDocument> {
        match self.store.get(HISTORY_KEY)? {
            None => Ok(HistoryDocument::default()),
            Some(raw) => serde_json::from_str(&raw)
                .map_err(|e| FinCalcError::Storage(format!("Corrupt history document: {}", e))),
        }
    }

    fn save(&mut self, doc: &HistoryDocument) -> FinCalcResult<()> {
        let raw = serde_json::to_string(doc)?;
        self.store.put(HISTORY_KEY, &raw)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
