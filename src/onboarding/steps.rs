//! Onboarding wizard steps.

use serde::{Deserialize, Serialize};

/// Steps in the onboarding wizard, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OnboardingStep {
    /// Ask for the user's name
    #[default]
    Name,
    /// Ask for fitness goals
    Goals,
    /// Ask for weekly training frequency
    Frequency,
}

impl OnboardingStep {
    /// Get all steps in order.
    pub fn all() -> &'static [OnboardingStep] {
        &[
            OnboardingStep::Name,
            OnboardingStep::Goals,
            OnboardingStep::Frequency,
        ]
    }

    /// Get the step index (0-based).
    pub fn index(&self) -> usize {
        Self::all().iter().position(|s| s == self).unwrap_or(0)
    }

    /// Get the next step, if any.
    pub fn next(&self) -> Option<OnboardingStep> {
        let steps = Self::all();
        let idx = self.index();
        if idx + 1 < steps.len() {
            Some(steps[idx + 1])
        } else {
            None
        }
    }

    /// Get the previous step, if any.
    pub fn previous(&self) -> Option<OnboardingStep> {
        let steps = Self::all();
        let idx = self.index();
        if idx > 0 {
            Some(steps[idx - 1])
        } else {
            None
        }
    }

    /// Get the question shown for this step.
    pub fn prompt(&self) -> &'static str {
        match self {
            OnboardingStep::Name => "What's your name?",
            OnboardingStep::Goals => "What are your fitness goals?",
            OnboardingStep::Frequency => "How many times a week do you train?",
        }
    }

    /// Get the input placeholder for this step.
    pub fn placeholder(&self) -> &'static str {
        match self {
            OnboardingStep::Name => "Enter your name",
            OnboardingStep::Goals => "e.g., Build muscle, Lose weight",
            OnboardingStep::Frequency => "Enter frequency (e.g., 3)",
        }
    }

    /// Check if this is the first step.
    pub fn is_first(&self) -> bool {
        *self == OnboardingStep::Name
    }

    /// Check if this is the last step.
    pub fn is_last(&self) -> bool {
        *self == OnboardingStep::Frequency
    }
}
