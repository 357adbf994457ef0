//! Onboarding screen wrapping the wizard state machine.

use egui::{Align, Color32, Layout, RichText, Ui, Vec2};

use crate::onboarding::{OnboardingStep, OnboardingWizard};
use crate::ui::theme::LightTheme;

/// Onboarding screen state.
pub struct OnboardingScreen {
    /// Wizard controller
    wizard: OnboardingWizard,
    /// Validation or storage error to display
    error_message: Option<String>,
}

impl Default for OnboardingScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl OnboardingScreen {
    /// Create a new onboarding screen at step one.
    pub fn new() -> Self {
        Self {
            wizard: OnboardingWizard::new(),
            error_message: None,
        }
    }

    /// Show an error from outside the screen (e.g. a failed save).
    pub fn set_error(&mut self, message: String) {
        self.error_message = Some(message);
    }

    /// Restart the wizard from step one.
    pub fn restart(&mut self) {
        self.wizard.restart();
        self.error_message = None;
    }

    /// Render the onboarding screen.
    ///
    /// Returns the validated profile once the user finishes the last
    /// step; the caller persists it and navigates.
    pub fn show(&mut self, ui: &mut Ui) -> Option<crate::profile::UserProfile> {
        let mut finished = None;

        ui.vertical_centered(|ui| {
            ui.add_space(40.0);

            ui.label(
                RichText::new("FitLog")
                    .size(36.0)
                    .strong()
                    .color(LightTheme::ACCENT),
            );
            ui.add_space(4.0);
            ui.label(RichText::new("Let's get you set up").size(16.0).weak());

            ui.add_space(12.0);

            // Step dots
            ui.horizontal(|ui| {
                let steps = OnboardingStep::all();
                let current_idx = self.wizard.current_step().index();
                ui.add_space((ui.available_width() - steps.len() as f32 * 28.0) / 2.0);
                for (i, _step) in steps.iter().enumerate() {
                    let color = if i < current_idx {
                        LightTheme::ACCENT
                    } else if i == current_idx {
                        LightTheme::ACCENT_DARK
                    } else {
                        LightTheme::BORDER
                    };
                    let (rect, _) =
                        ui.allocate_exact_size(Vec2::new(20.0, 8.0), egui::Sense::hover());
                    ui.painter().rect_filled(rect, 2.0, color);
                    ui.add_space(8.0);
                }
            });

            ui.add_space(32.0);

            // Current step prompt and input
            let step = self.wizard.current_step();
            ui.label(RichText::new(step.prompt()).size(22.0));
            ui.add_space(16.0);

            let placeholder = step.placeholder();
            ui.add(
                egui::TextEdit::singleline(self.wizard.current_input_mut())
                    .hint_text(placeholder)
                    .desired_width(280.0)
                    .font(egui::TextStyle::Heading),
            );

            // Error message
            if let Some(ref error) = self.error_message {
                ui.add_space(12.0);
                ui.label(RichText::new(format!("⚠ {}", error)).color(LightTheme::ERROR));
            }

            ui.add_space(32.0);

            // Back / Next / Finish buttons
            ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                let button_size = Vec2::new(110.0, 44.0);
                let buttons = if self.wizard.current_step().is_first() {
                    1.0
                } else {
                    2.0
                };
                ui.add_space((ui.available_width() - button_size.x * buttons - 16.0) / 2.0);

                if !self.wizard.current_step().is_first()
                    && ui
                        .add_sized(
                            button_size,
                            egui::Button::new(RichText::new("Back").size(16.0))
                                .fill(LightTheme::ACCENT_LIGHT),
                        )
                        .clicked()
                {
                    self.error_message = None;
                    self.wizard.go_back();
                }

                ui.add_space(16.0);

                if self.wizard.current_step().is_last() {
                    if ui
                        .add_sized(
                            button_size,
                            egui::Button::new(
                                RichText::new("Finish").size(16.0).color(Color32::WHITE),
                            )
                            .fill(LightTheme::ACCENT),
                        )
                        .clicked()
                    {
                        match self.wizard.finish() {
                            Ok(profile) => {
                                self.error_message = None;
                                finished = Some(profile);
                            }
                            Err(e) => self.error_message = Some(e.to_string()),
                        }
                    }
                } else if ui
                    .add_sized(
                        button_size,
                        egui::Button::new(RichText::new("Next").size(16.0).color(Color32::WHITE))
                            .fill(LightTheme::ACCENT),
                    )
                    .clicked()
                {
                    match self.wizard.try_advance() {
                        Ok(()) => self.error_message = None,
                        Err(e) => self.error_message = Some(e.to_string()),
                    }
                }
            });
        });

        finished
    }
}
