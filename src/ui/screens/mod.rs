//! UI screens for the application.

pub mod home;
pub mod onboarding;
pub mod profile;
pub mod settings;
pub mod sources;
pub mod welcome;

pub use home::HomeScreen;
pub use onboarding::OnboardingScreen;
pub use profile::ProfileScreen;
pub use settings::{SettingsAction, SettingsScreen};
pub use sources::SourcesScreen;
pub use welcome::WelcomeScreen;

/// Screen navigation state.
///
/// The full set of screens; navigation is a transition between these
/// variants and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// First-run onboarding wizard
    Onboarding,
    /// Post-onboarding welcome summary
    Welcome,
    /// Home tab: greeting and today's workout
    #[default]
    Home,
    /// Sources tab: research references
    Sources,
    /// Profile tab
    Profile,
    /// Settings editor (reached from Profile)
    Settings,
}

impl Screen {
    /// Whether this screen shows the bottom tab bar.
    pub fn is_tab(&self) -> bool {
        matches!(self, Screen::Home | Screen::Sources | Screen::Profile)
    }
}
