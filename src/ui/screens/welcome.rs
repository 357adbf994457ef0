//! Welcome screen shown right after onboarding completes.

use egui::{Color32, RichText, Ui, Vec2};

use crate::storage::repository::{AppStore, RawProfile};
use crate::ui::screens::Screen;
use crate::ui::theme::LightTheme;

/// Welcome screen state.
#[derive(Default)]
pub struct WelcomeScreen {
    /// Profile fields as loaded from the store
    profile: RawProfile,
    /// Whether the fields have been loaded since last navigation here
    loaded: bool,
}

impl WelcomeScreen {
    /// Create a new welcome screen.
    pub fn new() -> Self {
        Self::default()
    }

    /// Force a reload on the next show.
    pub fn invalidate(&mut self) {
        self.loaded = false;
    }

    /// Render the welcome screen.
    ///
    /// Returns the next screen when the user taps Get Started.
    pub fn show(&mut self, ui: &mut Ui, store: &AppStore) -> Option<Screen> {
        if !self.loaded {
            match store.load_raw_profile() {
                Ok(profile) => self.profile = profile,
                Err(e) => {
                    // Fail open with empty fields; the greeting degrades
                    tracing::warn!("Failed to load profile for welcome screen: {}", e);
                    self.profile = RawProfile::default();
                }
            }
            self.loaded = true;
        }

        let mut next_screen = None;

        ui.vertical_centered(|ui| {
            ui.add_space(60.0);

            ui.label(
                RichText::new(format!("Welcome, {}!", self.profile.name))
                    .size(32.0)
                    .strong()
                    .color(LightTheme::ACCENT),
            );

            ui.add_space(32.0);

            egui::Frame::new()
                .fill(LightTheme::CARD_BG)
                .inner_margin(20.0)
                .corner_radius(10.0)
                .show(ui, |ui| {
                    ui.set_min_width(280.0);

                    ui.label(
                        RichText::new("Your Plan")
                            .size(20.0)
                            .strong()
                            .color(LightTheme::ACCENT_DARK),
                    );
                    ui.add_space(12.0);

                    ui.horizontal(|ui| {
                        ui.label(RichText::new("Goals:").strong());
                        ui.label(&self.profile.fitness_goals);
                    });
                    ui.horizontal(|ui| {
                        ui.label(RichText::new("Training:").strong());
                        ui.label(format!("{} times a week", self.profile.training_frequency));
                    });
                });

            ui.add_space(48.0);

            if ui
                .add_sized(
                    Vec2::new(240.0, 52.0),
                    egui::Button::new(
                        RichText::new("Get Started").size(18.0).color(Color32::WHITE),
                    )
                    .fill(LightTheme::ACCENT),
                )
                .clicked()
            {
                next_screen = Some(Screen::Home);
            }
        });

        next_screen
    }
}
