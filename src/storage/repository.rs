//! Single-owner facade over the key-value store.
//!
//! Every screen reads and writes through `AppStore`, so the raw key
//! layout stays in one place and multi-key updates go through one
//! transaction instead of a sequence of independent writes.

use chrono::NaiveDate;

use crate::profile::UserProfile;
use crate::storage::keys;
use crate::storage::kv::{KvStore, StorageError};
use crate::workouts::types::Workout;

/// Profile fields as stored, with empty-string defaults when absent.
///
/// The frequency stays raw text here: directly-written or legacy values
/// are not guaranteed to parse, and the settings editor wants to show
/// whatever is actually on disk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawProfile {
    pub name: String,
    pub fitness_goals: String,
    pub training_frequency: String,
}

/// Application store: typed operations over the key-value layout.
pub struct AppStore {
    kv: KvStore,
}

impl AppStore {
    /// Wrap an opened key-value store.
    pub fn new(kv: KvStore) -> Self {
        Self { kv }
    }

    /// Check whether onboarding has been completed.
    ///
    /// The flag is a presence marker; any stored value counts.
    pub fn has_onboarded(&self) -> Result<bool, StorageError> {
        Ok(self.kv.get(keys::HAS_ONBOARDED)?.is_some())
    }

    /// Persist a completed onboarding: the flag plus all three profile
    /// fields, in one transaction.
    pub fn complete_onboarding(&mut self, profile: &UserProfile) -> Result<(), StorageError> {
        let frequency = profile.training_frequency.to_string();
        self.kv.set_many(&[
            (keys::HAS_ONBOARDED, "true"),
            (keys::USER_NAME, &profile.name),
            (keys::FITNESS_GOALS, &profile.fitness_goals),
            (keys::TRAINING_FREQUENCY, &frequency),
        ])
    }

    /// Overwrite the three profile fields, in one transaction.
    pub fn save_profile(&mut self, profile: &UserProfile) -> Result<(), StorageError> {
        let frequency = profile.training_frequency.to_string();
        self.kv.set_many(&[
            (keys::USER_NAME, &profile.name),
            (keys::FITNESS_GOALS, &profile.fitness_goals),
            (keys::TRAINING_FREQUENCY, &frequency),
        ])
    }

    /// Load the stored profile fields, defaulting to empty strings.
    pub fn load_raw_profile(&self) -> Result<RawProfile, StorageError> {
        Ok(RawProfile {
            name: self.kv.get(keys::USER_NAME)?.unwrap_or_default(),
            fitness_goals: self.kv.get(keys::FITNESS_GOALS)?.unwrap_or_default(),
            training_frequency: self.kv.get(keys::TRAINING_FREQUENCY)?.unwrap_or_default(),
        })
    }

    /// Load the stored display name, if any.
    pub fn load_user_name(&self) -> Result<Option<String>, StorageError> {
        self.kv.get(keys::USER_NAME)
    }

    /// Delete the onboarding flag and all profile fields, in one
    /// transaction. Irreversible.
    pub fn reset_onboarding(&mut self) -> Result<(), StorageError> {
        self.kv.remove_many(&[
            keys::HAS_ONBOARDED,
            keys::USER_NAME,
            keys::FITNESS_GOALS,
            keys::TRAINING_FREQUENCY,
        ])
    }

    /// Load the workout recorded for a date, if any.
    ///
    /// A record that fails to deserialize is treated as absent; the
    /// picker will overwrite it.
    pub fn load_daily_workout(&self, date: NaiveDate) -> Result<Option<Workout>, StorageError> {
        let key = keys::workout_key(date);
        let Some(raw) = self.kv.get(&key)? else {
            return Ok(None);
        };

        match serde_json::from_str(&raw) {
            Ok(workout) => Ok(Some(workout)),
            Err(e) => {
                tracing::warn!("Discarding unreadable workout record for {}: {}", key, e);
                Ok(None)
            }
        }
    }

    /// Record the workout for a date.
    pub fn store_daily_workout(
        &mut self,
        date: NaiveDate,
        workout: &Workout,
    ) -> Result<(), StorageError> {
        let key = keys::workout_key(date);
        let raw = serde_json::to_string(workout)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;
        self.kv.set(&key, &raw)
    }
}
