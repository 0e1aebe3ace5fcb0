//! Shapes returned by the database inspector.

use serde::Serialize;
use serde_json::{Map, Value};

/// Contents of a single table.
#[derive(Debug, Clone, Serialize)]
pub struct TableDump {
    pub rows: Vec<Map<String, Value>>,
    pub columns: Vec<String>,
}
