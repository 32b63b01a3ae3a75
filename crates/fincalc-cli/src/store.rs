//! File-backed key-value store for the saved-calculation history.

use std::fs;
use std::path::PathBuf;

use fincalc_core::history::{HistoryLog, KeyValueStore};
use fincalc_core::FinCalcError;
use serde_json::Value;

/// Default history file in the working directory.
pub fn default_history_path() -> String {
    ".fincalc_history.json".to_string()
}

/// Stores each key as a JSON file under a base path. The history log only
/// ever uses one key, so this is effectively a single-file store.
pub struct JsonFileStore {
    base: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: &str) -> Self {
        Self {
            base: PathBuf::from(path),
        }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        // Single-key store: the base path IS the document. Additional keys
        // get a suffixed sibling file.
        if key == fincalc_core::history::HISTORY_KEY {
            self.base.clone()
        } else {
            self.base.with_extension(format!("{}.json", key))
        }
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, FinCalcError> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        fs::read_to_string(&path)
            .map(Some)
            .map_err(|e| FinCalcError::Storage(format!("Failed to read {}: {}", path.display(), e)))
    }

    fn put(&mut self, key: &str, value: &str) -> Result<(), FinCalcError> {
        let path = self.path_for(key);
        fs::write(&path, value)
            .map_err(|e| FinCalcError::Storage(format!("Failed to write {}: {}", path.display(), e)))
    }

    fn remove(&mut self, key: &str) -> Result<(), FinCalcError> {
        let path = self.path_for(key);
        if path.exists() {
            fs::remove_file(&path).map_err(|e| {
                FinCalcError::Storage(format!("Failed to remove {}: {}", path.display(), e))
            })?;
        }
        Ok(())
    }
}

/// Append a finished computation to the history file. The envelope already
/// carries the inputs (assumptions) and outputs (result), so the saved
/// record is reconstructed from those fields.
pub fn save_calculation(
    path: &str,
    calculator: &str,
    envelope: &Value,
) -> Result<u64, Box<dyn std::error::Error>> {
    let inputs = envelope.get("assumptions").cloned().unwrap_or(Value::Null);
    let outputs = envelope.get("result").cloned().unwrap_or(Value::Null);

    let mut log = HistoryLog::new(JsonFileStore::new(path));
    let id = log.append(calculator, None, inputs, outputs)?;
    Ok(id)
}
