//! # Theme Configuration
//!
//! Centralized color palette for the clinic app: a blue-on-white clinical
//! look. Every component pulls its colors from here so the palette stays
//! consistent.

use eframe::egui;
use eframe::egui::Color32;

pub mod colors {
    use super::Color32;

    /// Primary clinic blue, used for headers, active nav items and buttons
    pub const PRIMARY: Color32 = Color32::from_rgb(37, 99, 235);
    pub const PRIMARY_DARK: Color32 = Color32::from_rgb(29, 78, 216);
    /// Washed-out blue for selected backgrounds
    pub const PRIMARY_SOFT: Color32 = Color32::from_rgb(219, 234, 254);

    /// Accent used on the professionals view
    pub const ACCENT_CYAN: Color32 = Color32::from_rgb(8, 145, 178);
    /// Accent used on the activities view
    pub const ACCENT_INDIGO: Color32 = Color32::from_rgb(79, 70, 229);

    pub const WINDOW_BACKGROUND: Color32 = Color32::from_rgb(248, 250, 252);
    pub const CARD_BACKGROUND: Color32 = Color32::WHITE;
    pub const CARD_BORDER: Color32 = Color32::from_rgb(219, 234, 254);
    pub const SIDEBAR_BACKGROUND: Color32 = Color32::WHITE;

    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(30, 41, 59);
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(100, 116, 139);
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(148, 163, 184);

    pub const SUCCESS_BACKGROUND: Color32 = Color32::from_rgb(220, 252, 231);
    pub const SUCCESS_TEXT: Color32 = Color32::from_rgb(21, 128, 61);
    pub const ERROR_BACKGROUND: Color32 = Color32::from_rgb(254, 226, 226);
    pub const ERROR_TEXT: Color32 = Color32::from_rgb(185, 28, 28);

    /// Badge for children with an insurance plan
    pub const PLAN_BADGE_BACKGROUND: Color32 = Color32::from_rgb(220, 252, 231);
    pub const PLAN_BADGE_TEXT: Color32 = Color32::from_rgb(21, 128, 61);

    pub const DANGER: Color32 = Color32::from_rgb(220, 38, 38);
}

/// One-time style setup: light visuals with the clinic palette applied to
/// the default widget states.
pub fn setup_clinic_style(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::light();
    visuals.panel_fill = colors::WINDOW_BACKGROUND;
    visuals.window_fill = colors::CARD_BACKGROUND;
    visuals.selection.bg_fill = colors::PRIMARY_SOFT;
    visuals.selection.stroke = egui::Stroke::new(1.0, colors::PRIMARY);
    visuals.hyperlink_color = colors::PRIMARY;
    visuals.widgets.hovered.bg_stroke = egui::Stroke::new(1.0, colors::PRIMARY);
    visuals.widgets.active.bg_stroke = egui::Stroke::new(1.0, colors::PRIMARY_DARK);
    ctx.set_visuals(visuals);

    let mut style = (*ctx.style()).clone();
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(12.0, 6.0);
    ctx.set_style(style);
}
