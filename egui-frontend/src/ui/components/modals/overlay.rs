//! # Modal Overlay
//!
//! Shared chrome for every modal: a dimmed full-screen backdrop, a centered
//! white card with a title row and close button, and the scrollable body.

use eframe::egui;

use crate::ui::components::theme::colors;

/// Draw the backdrop and a centered modal card, returning true when the
/// close button was clicked this frame. The body closure fills the card.
pub fn show(
    ctx: &egui::Context,
    id: &str,
    title: &str,
    width: f32,
    add_body: impl FnOnce(&mut egui::Ui),
) -> bool {
    let screen_rect = ctx.screen_rect();

    // Dim everything behind the card and swallow clicks on it
    egui::Area::new(egui::Id::new((id, "backdrop")))
        .fixed_pos(screen_rect.min)
        .order(egui::Order::Middle)
        .show(ctx, |ui| {
            ui.allocate_response(screen_rect.size(), egui::Sense::click());
            ui.painter().rect_filled(
                screen_rect,
                egui::Rounding::ZERO,
                egui::Color32::from_black_alpha(110),
            );
        });

    let mut close_requested = false;

    egui::Area::new(egui::Id::new(id))
        .order(egui::Order::Foreground)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            egui::Frame::default()
                .fill(colors::CARD_BACKGROUND)
                .stroke(egui::Stroke::new(1.0, colors::CARD_BORDER))
                .rounding(egui::Rounding::same(14.0))
                .inner_margin(egui::Margin::same(20.0))
                .shadow(egui::Shadow {
                    offset: egui::vec2(0.0, 6.0),
                    blur: 24.0,
                    spread: 0.0,
                    color: egui::Color32::from_black_alpha(60),
                })
                .show(ui, |ui| {
                    ui.set_width(width);

                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new(title)
                                .size(18.0)
                                .strong()
                                .color(colors::TEXT_PRIMARY),
                        );
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                if ui.small_button("✕").on_hover_text("Fechar").clicked() {
                                    close_requested = true;
                                }
                            },
                        );
                    });
                    ui.separator();
                    ui.add_space(8.0);

                    egui::ScrollArea::vertical()
                        .max_height(screen_rect.height() - 180.0)
                        .show(ui, add_body);
                });
        });

    close_requested
}

/// Inline red error strip shown inside a modal above its action buttons.
pub fn error_strip(ui: &mut egui::Ui, message: &str) {
    egui::Frame::default()
        .fill(colors::ERROR_BACKGROUND)
        .rounding(egui::Rounding::same(8.0))
        .inner_margin(egui::Margin::symmetric(10.0, 6.0))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(message)
                    .color(colors::ERROR_TEXT)
                    .strong(),
            );
        });
    ui.add_space(6.0);
}

/// Standard Cancelar/submit button row. Returns `(cancel, submit)`.
pub fn action_row(ui: &mut egui::Ui, submit_label: &str) -> (bool, bool) {
    let mut cancel = false;
    let mut submit = false;

    ui.add_space(8.0);
    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
        if ui
            .add(
                egui::Button::new(
                    egui::RichText::new(submit_label)
                        .color(egui::Color32::WHITE)
                        .strong(),
                )
                .fill(colors::PRIMARY)
                .rounding(egui::Rounding::same(8.0))
                .min_size(egui::vec2(120.0, 32.0)),
            )
            .clicked()
        {
            submit = true;
        }
        if ui
            .add(
                egui::Button::new("Cancelar")
                    .rounding(egui::Rounding::same(8.0))
                    .min_size(egui::vec2(90.0, 32.0)),
            )
            .clicked()
        {
            cancel = true;
        }
    });

    (cancel, submit)
}
