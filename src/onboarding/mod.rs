//! Onboarding wizard for first-time user setup.
//!
//! A fixed three-step linear form: name, fitness goals, training
//! frequency. Advancing past a step requires a non-empty answer; going
//! back is always allowed. The wizard is pure state — persistence
//! happens in the app once `finish()` produces a validated profile.

pub mod steps;

pub use steps::OnboardingStep;

use crate::profile::{UserProfile, ValidationError};

/// State of the onboarding wizard.
#[derive(Debug, Clone, Default)]
pub struct OnboardingWizard {
    /// Current step
    current_step: OnboardingStep,
    /// Name input buffer
    pub name: String,
    /// Fitness goals input buffer
    pub fitness_goals: String,
    /// Training frequency input buffer
    pub training_frequency: String,
}

impl OnboardingWizard {
    /// Create a new wizard at the first step with empty answers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current step.
    pub fn current_step(&self) -> OnboardingStep {
        self.current_step
    }

    /// Get a mutable reference to the current step's input buffer.
    pub fn current_input_mut(&mut self) -> &mut String {
        match self.current_step {
            OnboardingStep::Name => &mut self.name,
            OnboardingStep::Goals => &mut self.fitness_goals,
            OnboardingStep::Frequency => &mut self.training_frequency,
        }
    }

    /// Advance to the next step.
    ///
    /// Blocked unless the current step's answer is non-empty after
    /// trimming. Advancing from the last step is a no-op; completion
    /// goes through [`finish`](Self::finish).
    pub fn try_advance(&mut self) -> Result<(), ValidationError> {
        self.require_current_answer()?;

        if let Some(next) = self.current_step.next() {
            self.current_step = next;
        }

        Ok(())
    }

    /// Go back to the previous step. A no-op on the first step.
    pub fn go_back(&mut self) {
        if let Some(prev) = self.current_step.previous() {
            self.current_step = prev;
        }
    }

    /// Validate every answer and produce the profile to persist.
    ///
    /// All fields are checked before anything is written anywhere, so a
    /// failed finish leaves no partially-onboarded state behind.
    pub fn finish(&self) -> Result<UserProfile, ValidationError> {
        UserProfile::from_input(&self.name, &self.fitness_goals, &self.training_frequency)
    }

    /// Reset to the first step with empty answers.
    pub fn restart(&mut self) {
        *self = Self::default();
    }

    fn require_current_answer(&self) -> Result<(), ValidationError> {
        match self.current_step {
            OnboardingStep::Name => {
                if self.name.trim().is_empty() {
                    return Err(ValidationError::EmptyName);
                }
            }
            OnboardingStep::Goals => {
                if self.fitness_goals.trim().is_empty() {
                    return Err(ValidationError::EmptyGoals);
                }
            }
            OnboardingStep::Frequency => {
                // Presence only; the range rule is applied by finish()
                // together with everything else.
                if self.training_frequency.trim().is_empty() {
                    return Err(ValidationError::EmptyFrequency);
                }
            }
        }
        Ok(())
    }
}
