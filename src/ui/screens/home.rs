//! Home tab: greeting and today's workout.

use chrono::Local;
use egui::{RichText, Ui};

use crate::storage::repository::AppStore;
use crate::ui::theme::LightTheme;
use crate::workouts;
use crate::workouts::types::Workout;

/// Home screen state.
#[derive(Default)]
pub struct HomeScreen {
    /// Greeting name ("User" when none is stored)
    name: String,
    /// Today's workout, once resolved
    workout: Option<Workout>,
    /// Shown when loading name or workout failed
    load_error: Option<String>,
    /// Whether data has been loaded since last navigation here
    loaded: bool,
}

impl HomeScreen {
    /// Create a new home screen.
    pub fn new() -> Self {
        Self::default()
    }

    /// Force a reload on the next show.
    ///
    /// Called after settings save or onboarding reset; the memoized
    /// workout for today is unaffected, only re-read.
    pub fn invalidate(&mut self) {
        self.loaded = false;
    }

    fn load(&mut self, store: &mut AppStore) {
        self.load_error = None;

        match store.load_user_name() {
            Ok(Some(name)) => self.name = name,
            Ok(None) => self.name = "User".to_string(),
            Err(e) => {
                tracing::error!("Failed to load user name: {}", e);
                self.name = "User".to_string();
                self.load_error = Some("Could not load your data.".to_string());
            }
        }

        let today = Local::now().date_naive();
        match workouts::daily_workout(store, today) {
            Ok(workout) => self.workout = Some(workout),
            Err(e) => {
                tracing::error!("Failed to resolve today's workout: {}", e);
                self.workout = None;
                self.load_error = Some("Could not load today's workout.".to_string());
            }
        }

        self.loaded = true;
    }

    /// Render the home screen.
    pub fn show(&mut self, ui: &mut Ui, store: &mut AppStore) {
        if !self.loaded {
            self.load(store);
        }

        ui.vertical_centered(|ui| {
            ui.add_space(20.0);
            ui.label(
                RichText::new(format!("Hello, {}!", self.name))
                    .size(28.0)
                    .strong()
                    .color(LightTheme::ACCENT),
            );
        });

        ui.add_space(10.0);

        if let Some(ref error) = self.load_error {
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(format!("⚠ {}", error)).color(LightTheme::ERROR));
            });
            ui.add_space(10.0);
        }

        // Today's workout card
        egui::Frame::new()
            .fill(LightTheme::CARD_BG)
            .inner_margin(20.0)
            .corner_radius(10.0)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());

                ui.label(
                    RichText::new("Today's Workout")
                        .size(22.0)
                        .strong()
                        .color(LightTheme::ACCENT_DARK),
                );
                ui.add_space(10.0);

                match self.workout {
                    Some(ref workout) => {
                        egui::Frame::new()
                            .fill(LightTheme::BACKGROUND)
                            .inner_margin(15.0)
                            .corner_radius(8.0)
                            .show(ui, |ui| {
                                ui.set_min_width(ui.available_width());
                                ui.label(
                                    RichText::new(&workout.name)
                                        .size(20.0)
                                        .color(LightTheme::ACCENT_DARK),
                                );
                                ui.add_space(5.0);
                                ui.label(
                                    RichText::new(&workout.description)
                                        .size(16.0)
                                        .color(LightTheme::TEXT_SECONDARY),
                                );
                            });
                    }
                    None => {
                        ui.vertical_centered(|ui| {
                            ui.label(
                                RichText::new("No workout scheduled for today.")
                                    .color(LightTheme::TEXT_SECONDARY),
                            );
                        });
                    }
                }
            });
    }
}
