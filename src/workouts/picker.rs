//! Daily workout selection.
//!
//! The pick for a given calendar date is made once and persisted, so
//! every read within that date returns the same workout, across app
//! restarts. Records for past days are kept; they are one small JSON
//! row each.

use chrono::NaiveDate;
use rand::Rng;

use super::catalog;
use super::types::Workout;
use crate::storage::kv::StorageError;
use crate::storage::repository::AppStore;

/// Pick a workout uniformly at random from the catalog.
pub fn random_workout() -> Workout {
    let index = rand::thread_rng().gen_range(0..catalog::CATALOG_SIZE);
    catalog::entry(index)
}

/// Get the workout for a date, picking and persisting one if the date
/// has none yet.
pub fn daily_workout(store: &mut AppStore, date: NaiveDate) -> Result<Workout, StorageError> {
    if let Some(workout) = store.load_daily_workout(date)? {
        return Ok(workout);
    }

    let workout = random_workout();
    store.store_daily_workout(date, &workout)?;
    tracing::debug!("Picked workout '{}' for {}", workout.name, date);

    Ok(workout)
}
