use std::fs;
use std::path::Path;

use chrono::Local;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{ClientError, ClientResult};

/// The last transaction list a successful fetch returned, kept verbatim so
/// the offline listing decodes rows through the same path as a live one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub taken_at: String,
    pub rows: Vec<Value>,
}

/// Writes the snapshot, tolerating failure. Losing the snapshot only costs
/// the next `--offline` run; the listing that produced it must not fail.
pub fn store_best_effort(path: &Path, rows: &[Value]) -> bool {
    let snapshot = Snapshot {
        taken_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        rows: rows.to_vec(),
    };
    let Ok(body) = serde_json::to_string(&snapshot) else {
        return false;
    };
    fs::write(path, body).is_ok()
}

pub fn load(path: &Path) -> ClientResult<Snapshot> {
    let body = match fs::read_to_string(path) {
        Ok(value) => value,
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
            return Err(ClientError::snapshot_missing(path));
        }
        Err(error) => return Err(ClientError::snapshot_invalid(path, &error.to_string())),
    };

    serde_json::from_str(&body).map_err(|error| ClientError::snapshot_invalid(path, &error.to_string()))
}
