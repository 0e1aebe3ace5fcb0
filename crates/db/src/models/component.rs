//! Wizard component model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `components` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Component {
    pub kind: String,
    /// Wizard step the component is shown on; `None` when unplaced.
    pub step: Option<i64>,
    pub label: String,
    pub sort_order: i64,
}

/// DTO for moving a component to another step.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateComponentStep {
    #[serde(default)]
    pub step: Option<i64>,
}
