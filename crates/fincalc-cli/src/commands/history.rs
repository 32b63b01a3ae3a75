use clap::{Args, Subcommand};
use serde_json::{json, Value};

use fincalc_core::history::HistoryLog;

use crate::store::{default_history_path, JsonFileStore};

/// Arguments for the saved-calculation history
#[derive(Args)]
pub struct HistoryArgs {
    #[command(subcommand)]
    pub action: HistoryAction,

    /// History file to operate on
    #[arg(long, global = true, value_name = "FILE")]
    pub file: Option<String>,
}

#[derive(Subcommand)]
pub enum HistoryAction {
    /// List saved calculations
    List,
    /// Delete one saved calculation by id
    Delete { id: u64 },
    /// Drop the whole history
    Clear,
}

pub fn run_history(args: HistoryArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let path = args.file.unwrap_or_else(default_history_path);
    let mut log = HistoryLog::new(JsonFileStore::new(&path));

    match args.action {
        HistoryAction::List => {
            let entries = log.entries()?;
            Ok(json!({ "result": { "count": entries.len(), "entries": entries } }))
        }
        HistoryAction::Delete { id } => {
            let removed = log.delete(id)?;
            if !removed {
                return Err(format!("No saved calculation with id {}", id).into());
            }
            Ok(json!({ "result": { "deleted": id } }))
        }
        HistoryAction::Clear => {
            log.clear()?;
            Ok(json!({ "result": { "cleared": true } }))
        }
    }
}
