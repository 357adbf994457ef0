//! UI module for the egui-based interface.

pub mod screens;
pub mod theme;

pub use screens::Screen;
pub use theme::Theme;
