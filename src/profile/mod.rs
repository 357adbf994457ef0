//! User profile and field validation.
//!
//! The same validation rules apply wherever the profile is written:
//! the onboarding wizard and the settings editor both validate every
//! field before any write happens.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use thiserror::Error;

/// Allowed training sessions per week.
pub const FREQUENCY_RANGE: RangeInclusive<u8> = 1..=7;

/// A validated user profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Display name
    pub name: String,
    /// Free-text fitness goals (e.g. "Build muscle")
    pub fitness_goals: String,
    /// Training sessions per week (1-7)
    pub training_frequency: u8,
}

impl UserProfile {
    /// Build a profile from raw form input, validating every field.
    pub fn from_input(
        name: &str,
        fitness_goals: &str,
        training_frequency: &str,
    ) -> Result<Self, ValidationError> {
        let name = validate_name(name)?;
        let fitness_goals = validate_goals(fitness_goals)?;
        let training_frequency = parse_frequency(training_frequency)?;

        Ok(Self {
            name,
            fitness_goals,
            training_frequency,
        })
    }
}

/// Validation errors with user-facing messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter your name.")]
    EmptyName,

    #[error("Please enter your fitness goals.")]
    EmptyGoals,

    #[error("Please enter your training frequency.")]
    EmptyFrequency,

    #[error("Training frequency must be a number between 1 and 7.")]
    InvalidFrequency,
}

/// Validate and trim a name.
pub fn validate_name(name: &str) -> Result<String, ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(trimmed.to_string())
}

/// Validate and trim fitness goals.
pub fn validate_goals(goals: &str) -> Result<String, ValidationError> {
    let trimmed = goals.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyGoals);
    }
    Ok(trimmed.to_string())
}

/// Parse a training frequency as an integer in [1,7].
///
/// The store itself enforces nothing, so values read back from disk may
/// still fall outside this range.
pub fn parse_frequency(input: &str) -> Result<u8, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyFrequency);
    }

    let frequency: u8 = trimmed
        .parse()
        .map_err(|_| ValidationError::InvalidFrequency)?;

    if !FREQUENCY_RANGE.contains(&frequency) {
        return Err(ValidationError::InvalidFrequency);
    }

    Ok(frequency)
}
