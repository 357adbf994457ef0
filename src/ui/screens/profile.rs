//! Profile tab.

use egui::{Align, Layout, RichText, ScrollArea, Ui};

use crate::ui::screens::Screen;
use crate::ui::theme::LightTheme;

/// Profile screen UI.
pub struct ProfileScreen;

impl ProfileScreen {
    /// Render the profile screen and return the next screen if
    /// navigation was requested.
    pub fn show(ui: &mut Ui) -> Option<Screen> {
        let mut next_screen = None;

        ScrollArea::vertical().show(ui, |ui| {
            ui.add_space(16.0);

            // Header with settings entry
            ui.horizontal(|ui| {
                ui.label(RichText::new("PROFILE").size(24.0).strong());

                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if ui
                        .button(RichText::new("⚙ SETTINGS").color(LightTheme::ACCENT))
                        .clicked()
                    {
                        next_screen = Some(Screen::Settings);
                    }
                });
            });

            ui.add_space(20.0);

            // Current program card
            ui.label(
                RichText::new("CURRENT PROGRAM")
                    .size(14.0)
                    .strong()
                    .color(LightTheme::TEXT_SECONDARY),
            );
            ui.add_space(8.0);

            egui::Frame::new()
                .fill(LightTheme::CARD_BG)
                .inner_margin(16.0)
                .corner_radius(10.0)
                .show(ui, |ui| {
                    ui.set_min_width(ui.available_width());

                    ui.label(
                        RichText::new("DAILY STRENGTH PROGRAM")
                            .size(16.0)
                            .strong()
                            .color(LightTheme::ACCENT_DARK),
                    );
                    ui.add_space(8.0);
                    ui.label(
                        RichText::new("One suggested exercise per day, picked from the catalog.")
                            .color(LightTheme::TEXT_SECONDARY),
                    );
                });

            ui.add_space(20.0);

            // History placeholder
            ui.label(
                RichText::new("HISTORY")
                    .size(14.0)
                    .strong()
                    .color(LightTheme::TEXT_SECONDARY),
            );
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new("No previous workouts yet").color(LightTheme::TEXT_SECONDARY),
                );
            });
        });

        next_screen
    }
}
