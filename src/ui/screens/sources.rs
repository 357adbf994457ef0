//! Sources tab: curated research references.

use egui::{RichText, ScrollArea, Ui};

use crate::ui::theme::LightTheme;

/// An entry in the sources list.
struct SourceItem {
    title: &'static str,
    references: u32,
    is_new: bool,
}

const PROGRAM_FUNDAMENTALS: &[SourceItem] = &[
    SourceItem {
        title: "Determining optimal volume",
        references: 4,
        is_new: false,
    },
    SourceItem {
        title: "Determining optimal frequency",
        references: 7,
        is_new: true,
    },
];

const PRACTICAL_DESIGN: &[SourceItem] = &[
    SourceItem {
        title: "Focus muscles",
        references: 5,
        is_new: false,
    },
    SourceItem {
        title: "Exercise selection",
        references: 2,
        is_new: true,
    },
    SourceItem {
        title: "Exercise ordering and fatigue management",
        references: 2,
        is_new: true,
    },
];

/// Sources screen UI. Purely static content.
pub struct SourcesScreen;

impl SourcesScreen {
    /// Render the sources screen.
    pub fn show(ui: &mut Ui) {
        ScrollArea::vertical().show(ui, |ui| {
            ui.add_space(16.0);
            ui.label(RichText::new("SOURCES").size(24.0).strong());
            ui.add_space(12.0);

            ui.label(
                RichText::new(
                    "Articles filled with peer-reviewed, published scientific research \
                     combined with years of coaching experience. We've done the hard work \
                     for you, so you can focus on getting the results.",
                )
                .color(LightTheme::TEXT_SECONDARY),
            );

            ui.add_space(20.0);
            Self::render_section(ui, "PROGRAM FUNDAMENTALS", PROGRAM_FUNDAMENTALS);

            ui.add_space(20.0);
            Self::render_section(ui, "PRACTICAL PROGRAM DESIGN", PRACTICAL_DESIGN);
        });
    }

    fn render_section(ui: &mut Ui, title: &str, items: &[SourceItem]) {
        ui.label(
            RichText::new(title)
                .size(14.0)
                .strong()
                .color(LightTheme::TEXT_SECONDARY),
        );
        ui.add_space(8.0);

        for item in items {
            egui::Frame::new()
                .fill(LightTheme::PANEL_BG)
                .inner_margin(12.0)
                .corner_radius(8.0)
                .show(ui, |ui| {
                    ui.set_min_width(ui.available_width());

                    ui.horizontal(|ui| {
                        ui.label(
                            RichText::new(format!("{} REFERENCES", item.references))
                                .size(11.0)
                                .color(LightTheme::ACCENT_DARK),
                        );
                        if item.is_new {
                            ui.label(
                                RichText::new("NEW")
                                    .size(11.0)
                                    .strong()
                                    .color(LightTheme::ACCENT),
                            );
                        }
                    });
                    ui.label(RichText::new(item.title).size(16.0));
                });
            ui.add_space(8.0);
        }
    }
}
