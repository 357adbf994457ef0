//! Settings screen: profile editor and onboarding reset.

use egui::{Align, Color32, Layout, RichText, ScrollArea, Ui, Vec2};

use crate::profile::UserProfile;
use crate::storage::repository::AppStore;
use crate::ui::theme::LightTheme;

/// Result of rendering the settings screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsAction {
    /// Nothing happened
    None,
    /// Profile was validated and saved
    Saved,
    /// Onboarding was reset; all stored keys are gone
    Reset,
    /// User left without saving
    Back,
}

/// Settings screen state.
#[derive(Default)]
pub struct SettingsScreen {
    /// Name input buffer
    name: String,
    /// Fitness goals input buffer
    fitness_goals: String,
    /// Training frequency input buffer
    training_frequency: String,
    /// Validation or storage error to display
    error_message: Option<String>,
    /// Whether fields have been loaded since last navigation here
    loaded: bool,
}

impl SettingsScreen {
    /// Create a new settings screen.
    pub fn new() -> Self {
        Self::default()
    }

    /// Force a reload on the next show.
    pub fn invalidate(&mut self) {
        self.loaded = false;
        self.error_message = None;
    }

    fn load(&mut self, store: &AppStore) {
        match store.load_raw_profile() {
            Ok(profile) => {
                self.name = profile.name;
                self.fitness_goals = profile.fitness_goals;
                self.training_frequency = profile.training_frequency;
            }
            Err(e) => {
                tracing::error!("Failed to load settings: {}", e);
                self.error_message = Some("Could not load your settings.".to_string());
            }
        }
        self.loaded = true;
    }

    /// Validate every field, then write all of them or nothing.
    fn save(&mut self, store: &mut AppStore) -> bool {
        let profile =
            match UserProfile::from_input(&self.name, &self.fitness_goals, &self.training_frequency)
            {
                Ok(profile) => profile,
                Err(e) => {
                    self.error_message = Some(e.to_string());
                    return false;
                }
            };

        if let Err(e) = store.save_profile(&profile) {
            tracing::error!("Failed to save settings: {}", e);
            self.error_message = Some("An error occurred while saving your settings.".to_string());
            return false;
        }

        self.error_message = None;
        true
    }

    /// Render the settings screen.
    pub fn show(&mut self, ui: &mut Ui, store: &mut AppStore) -> SettingsAction {
        if !self.loaded {
            self.load(store);
        }

        let mut action = SettingsAction::None;

        // Header
        ui.horizontal(|ui| {
            ui.heading("Settings");

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui.button("Back").clicked() {
                    action = SettingsAction::Back;
                }
            });
        });

        ui.separator();

        // Error message
        if let Some(ref error) = self.error_message {
            ui.label(RichText::new(format!("⚠ {}", error)).color(LightTheme::ERROR));
            ui.add_space(8.0);
        }

        ScrollArea::vertical().show(ui, |ui| {
            ui.set_min_width(ui.available_width());

            ui.add_space(8.0);

            ui.label(RichText::new("Name").size(16.0));
            ui.add(
                egui::TextEdit::singleline(&mut self.name)
                    .hint_text("Enter your name")
                    .desired_width(f32::INFINITY),
            );

            ui.add_space(16.0);

            ui.label(RichText::new("Fitness Goals").size(16.0));
            ui.add(
                egui::TextEdit::singleline(&mut self.fitness_goals)
                    .hint_text("e.g., Build muscle, Lose weight")
                    .desired_width(f32::INFINITY),
            );

            ui.add_space(16.0);

            ui.label(RichText::new("Training Frequency (times/week)").size(16.0));
            ui.add(
                egui::TextEdit::singleline(&mut self.training_frequency)
                    .hint_text("Enter frequency (e.g., 3)")
                    .desired_width(120.0),
            );

            ui.add_space(24.0);

            if ui
                .add_sized(
                    Vec2::new(ui.available_width(), 44.0),
                    egui::Button::new(
                        RichText::new("Save Settings").size(16.0).color(Color32::WHITE),
                    )
                    .fill(LightTheme::ACCENT),
                )
                .clicked()
                && self.save(store)
            {
                action = SettingsAction::Saved;
            }

            ui.add_space(12.0);

            // Destructive: deletes the onboarding flag and all profile
            // fields in one transaction, then returns to onboarding.
            if ui
                .add_sized(
                    Vec2::new(ui.available_width(), 44.0),
                    egui::Button::new(
                        RichText::new("Reset Onboarding")
                            .size(16.0)
                            .color(Color32::WHITE),
                    )
                    .fill(LightTheme::ERROR),
                )
                .clicked()
            {
                match store.reset_onboarding() {
                    Ok(()) => {
                        tracing::info!("Onboarding reset; all profile keys removed");
                        action = SettingsAction::Reset;
                    }
                    Err(e) => {
                        tracing::error!("Failed to reset onboarding: {}", e);
                        self.error_message =
                            Some("An error occurred while resetting onboarding.".to_string());
                    }
                }
            }
        });

        action
    }
}
