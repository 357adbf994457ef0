//! Workout types.

use serde::{Deserialize, Serialize};

/// A single suggested workout.
///
/// Stored as-is under the per-day key, so the field names are part of
/// the persisted format: `{"id": 1, "name": "...", "description": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workout {
    /// Catalog identifier (1-based)
    pub id: u32,
    /// Exercise name
    pub name: String,
    /// Sets and reps description
    pub description: String,
}
