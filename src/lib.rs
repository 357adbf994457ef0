//! FitLog - Local Fitness Tracking Application
//!
//! A local-only fitness tracker built in Rust. Provides a first-run
//! onboarding wizard, a daily workout suggestion memoized per calendar
//! day, and a profile/settings editor, all persisted in an on-device
//! SQLite key-value store.

pub mod onboarding;
pub mod profile;
pub mod storage;
pub mod ui;
pub mod workouts;

// Re-export commonly used types
pub use onboarding::OnboardingWizard;
pub use profile::UserProfile;
pub use storage::kv::KvStore;
pub use storage::repository::AppStore;
pub use workouts::types::Workout;
