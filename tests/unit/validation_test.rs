//! Unit tests for profile field validation.

use fitlog::profile::{parse_frequency, UserProfile, ValidationError};

#[test]
fn test_frequency_accepts_full_range() {
    for f in 1..=7u8 {
        assert_eq!(parse_frequency(&f.to_string()), Ok(f));
    }
}

#[test]
fn test_frequency_rejects_out_of_range() {
    assert_eq!(parse_frequency("0"), Err(ValidationError::InvalidFrequency));
    assert_eq!(parse_frequency("8"), Err(ValidationError::InvalidFrequency));
    assert_eq!(
        parse_frequency("100"),
        Err(ValidationError::InvalidFrequency)
    );
}

#[test]
fn test_frequency_rejects_non_numeric_input() {
    assert_eq!(
        parse_frequency("three"),
        Err(ValidationError::InvalidFrequency)
    );
    assert_eq!(
        parse_frequency("3.5"),
        Err(ValidationError::InvalidFrequency)
    );
    assert_eq!(
        parse_frequency("-1"),
        Err(ValidationError::InvalidFrequency)
    );
}

#[test]
fn test_frequency_rejects_empty_and_whitespace() {
    assert_eq!(parse_frequency(""), Err(ValidationError::EmptyFrequency));
    assert_eq!(parse_frequency("  "), Err(ValidationError::EmptyFrequency));
}

#[test]
fn test_frequency_trims_surrounding_whitespace() {
    assert_eq!(parse_frequency(" 3 "), Ok(3));
}

#[test]
fn test_profile_save_succeeds_iff_all_fields_valid() {
    assert!(UserProfile::from_input("Ann", "Lose weight", "3").is_ok());

    assert_eq!(
        UserProfile::from_input("", "Lose weight", "3"),
        Err(ValidationError::EmptyName)
    );
    assert_eq!(
        UserProfile::from_input("Ann", "  ", "3"),
        Err(ValidationError::EmptyGoals)
    );
    assert_eq!(
        UserProfile::from_input("Ann", "Lose weight", "8"),
        Err(ValidationError::InvalidFrequency)
    );
}

#[test]
fn test_validation_messages_are_user_facing() {
    assert_eq!(
        ValidationError::EmptyName.to_string(),
        "Please enter your name."
    );
    assert_eq!(
        ValidationError::InvalidFrequency.to_string(),
        "Training frequency must be a number between 1 and 7."
    );
}
