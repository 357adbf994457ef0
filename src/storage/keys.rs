//! Key constants for the persisted state layout.
//!
//! These literals are the on-disk contract; changing one orphans the
//! data already stored under it.

use chrono::NaiveDate;

/// Presence marker written on onboarding completion.
pub const HAS_ONBOARDED: &str = "@hasOnboarded";

/// The user's display name (plain text).
pub const USER_NAME: &str = "@userName";

/// The user's fitness goals (plain text).
pub const FITNESS_GOALS: &str = "@fitnessGoals";

/// Training sessions per week (decimal digits as text).
pub const TRAINING_FREQUENCY: &str = "@trainingFrequency";

/// Prefix for per-day workout records.
pub const WORKOUT_PREFIX: &str = "@workout_";

/// Derive the per-day workout key for a calendar date ("@workout_YYYY-MM-DD").
pub fn workout_key(date: NaiveDate) -> String {
    format!("{}{}", WORKOUT_PREFIX, date.format("%Y-%m-%d"))
}
