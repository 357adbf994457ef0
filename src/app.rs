//! Main application state and egui integration.
//!
//! Owns the store, the screen state machine, and the per-screen state.
//! The initial screen is resolved once at startup from the onboarding
//! flag; a failed read fails open to onboarding.

use eframe::egui;

use fitlog::storage::config::{self, AppConfig};
use fitlog::storage::kv::{KvStore, StorageError};
use fitlog::storage::repository::AppStore;
use fitlog::ui::screens::{
    HomeScreen, OnboardingScreen, ProfileScreen, Screen, SettingsAction, SettingsScreen,
    SourcesScreen, WelcomeScreen,
};
use fitlog::ui::theme::Theme;

/// Main application state.
pub struct FitLogApp {
    /// Current screen
    current_screen: Screen,
    /// UI theme
    theme: Theme,
    /// Application configuration
    config: AppConfig,
    /// Single-owner store; every screen reads and writes through this
    store: AppStore,
    /// Onboarding screen state
    onboarding_screen: OnboardingScreen,
    /// Welcome screen state
    welcome_screen: WelcomeScreen,
    /// Home screen state
    home_screen: HomeScreen,
    /// Settings screen state
    settings_screen: SettingsScreen,
}

impl FitLogApp {
    /// Create a new application instance.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Result<Self, StorageError> {
        // Load configuration
        let config = config::load_config().unwrap_or_else(|e| {
            tracing::warn!("Failed to load config, using defaults: {}", e);
            AppConfig::default()
        });

        // Set up theme
        let theme = config.ui.theme;
        cc.egui_ctx.set_visuals(theme.visuals());

        // Open the store, falling back to an in-memory one so the app
        // stays usable for this session when the disk store is broken
        let kv = match KvStore::open(&config::get_store_path()) {
            Ok(kv) => kv,
            Err(e) => {
                tracing::error!("Failed to open store, using in-memory fallback: {}", e);
                KvStore::open_in_memory()?
            }
        };
        let store = AppStore::new(kv);

        // Resolve the initial screen from the onboarding flag.
        // A failed read fails open to onboarding, log only.
        let current_screen = match store.has_onboarded() {
            Ok(true) => Screen::Home,
            Ok(false) => Screen::Onboarding,
            Err(e) => {
                tracing::warn!("Failed to read onboarding flag: {}", e);
                Screen::Onboarding
            }
        };

        tracing::info!("Starting on {:?}", current_screen);

        Ok(Self {
            current_screen,
            theme,
            config,
            store,
            onboarding_screen: OnboardingScreen::new(),
            welcome_screen: WelcomeScreen::new(),
            home_screen: HomeScreen::new(),
            settings_screen: SettingsScreen::new(),
        })
    }

    /// Navigate to a different screen.
    fn navigate(&mut self, screen: Screen) {
        tracing::debug!("Navigating from {:?} to {:?}", self.current_screen, screen);

        // Screens reload their data on re-entry
        match screen {
            Screen::Home => self.home_screen.invalidate(),
            Screen::Welcome => self.welcome_screen.invalidate(),
            Screen::Settings => self.settings_screen.invalidate(),
            _ => {}
        }

        self.current_screen = screen;
    }

    /// Toggle the theme between light and dark.
    fn toggle_theme(&mut self, ctx: &egui::Context) {
        self.theme = match self.theme {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        };
        ctx.set_visuals(self.theme.visuals());

        self.config.ui.theme = self.theme;
        if let Err(e) = config::save_config(&self.config) {
            tracing::warn!("Failed to save config: {}", e);
        }
    }

    /// Render the bottom tab bar for the three main tabs.
    fn render_tab_bar(&mut self, ctx: &egui::Context) {
        let mut next_tab = None;

        egui::TopBottomPanel::bottom("tab_bar").show(ctx, |ui| {
            ui.columns(3, |columns| {
                let tabs = [
                    (0, "⌂ Home", Screen::Home),
                    (1, "🔬 Sources", Screen::Sources),
                    (2, "👤 Profile", Screen::Profile),
                ];

                for (i, label, screen) in tabs {
                    columns[i].vertical_centered(|ui| {
                        let selected = self.current_screen == screen;
                        let text = if selected {
                            egui::RichText::new(label).strong()
                        } else {
                            egui::RichText::new(label).weak()
                        };
                        if ui.selectable_label(selected, text).clicked() && !selected {
                            next_tab = Some(screen);
                        }
                    });
                }
            });
        });

        if let Some(screen) = next_tab {
            self.navigate(screen);
        }
    }
}

impl eframe::App for FitLogApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Top bar (hidden during onboarding and welcome)
        let show_chrome = !matches!(
            self.current_screen,
            Screen::Onboarding | Screen::Welcome
        );

        if show_chrome {
            egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading("FitLog");

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let theme_icon = match self.theme {
                            Theme::Light => "☀",
                            Theme::Dark => "🌙",
                        };
                        if ui.button(theme_icon).clicked() {
                            self.toggle_theme(ctx);
                        }
                    });
                });
            });
        }

        if self.current_screen.is_tab() {
            self.render_tab_bar(ctx);
        }

        // Main content area
        egui::CentralPanel::default().show(ctx, |ui| match self.current_screen {
            Screen::Onboarding => {
                if let Some(profile) = self.onboarding_screen.show(ui) {
                    match self.store.complete_onboarding(&profile) {
                        Ok(()) => {
                            tracing::info!("Onboarding complete for '{}'", profile.name);
                            self.navigate(Screen::Welcome);
                        }
                        Err(e) => {
                            tracing::error!("Failed to save onboarding data: {}", e);
                            self.onboarding_screen.set_error(
                                "An error occurred while saving your data. Please try again."
                                    .to_string(),
                            );
                        }
                    }
                }
            }
            Screen::Welcome => {
                if let Some(next) = self.welcome_screen.show(ui, &self.store) {
                    self.navigate(next);
                }
            }
            Screen::Home => {
                self.home_screen.show(ui, &mut self.store);
            }
            Screen::Sources => {
                SourcesScreen::show(ui);
            }
            Screen::Profile => {
                if let Some(next) = ProfileScreen::show(ui) {
                    self.navigate(next);
                }
            }
            Screen::Settings => match self.settings_screen.show(ui, &mut self.store) {
                SettingsAction::Saved => {
                    tracing::info!("Settings saved");
                    self.navigate(Screen::Profile);
                }
                SettingsAction::Back => {
                    self.navigate(Screen::Profile);
                }
                SettingsAction::Reset => {
                    self.onboarding_screen.restart();
                    self.navigate(Screen::Onboarding);
                }
                SettingsAction::None => {}
            },
        });
    }
}
