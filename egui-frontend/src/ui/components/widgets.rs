//! # Shared Widgets
//!
//! Small building blocks reused across views and modals: labeled form
//! fields, section frames, stat cards, colored action buttons and the
//! searchable select used wherever a child or professional is picked.

use eframe::egui;

use crate::ui::components::theme::colors;

/// Labeled single-line text input stretching to the available width.
pub fn form_field(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut String,
    hint: &str,
) -> egui::Response {
    ui.vertical(|ui| {
        ui.label(
            egui::RichText::new(label)
                .size(13.0)
                .strong()
                .color(colors::TEXT_SECONDARY),
        );
        ui.add(
            egui::TextEdit::singleline(value)
                .hint_text(hint)
                .desired_width(f32::INFINITY),
        )
    })
    .inner
}

/// Labeled multi-line text input for observation fields.
pub fn multiline_field(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut String,
    hint: &str,
) -> egui::Response {
    ui.vertical(|ui| {
        ui.label(
            egui::RichText::new(label)
                .size(13.0)
                .strong()
                .color(colors::TEXT_SECONDARY),
        );
        ui.add(
            egui::TextEdit::multiline(value)
                .hint_text(hint)
                .desired_rows(3)
                .desired_width(f32::INFINITY),
        )
    })
    .inner
}

/// Grouped form section with a bold title, used for the intake form's
/// "Dados Pessoais" / "Laudos e Convênio" boxes.
pub fn section_frame<R>(
    ui: &mut egui::Ui,
    title: &str,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    egui::Frame::default()
        .fill(colors::WINDOW_BACKGROUND)
        .stroke(egui::Stroke::new(1.0, colors::CARD_BORDER))
        .rounding(egui::Rounding::same(10.0))
        .inner_margin(egui::Margin::same(12.0))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(title)
                    .strong()
                    .color(colors::TEXT_PRIMARY),
            );
            ui.add_space(6.0);
            add_contents(ui)
        })
        .inner
}

/// White card frame used by views for tables and lists.
pub fn card_frame<R>(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> R {
    egui::Frame::default()
        .fill(colors::CARD_BACKGROUND)
        .stroke(egui::Stroke::new(1.0, colors::CARD_BORDER))
        .rounding(egui::Rounding::same(12.0))
        .inner_margin(egui::Margin::same(16.0))
        .show(ui, add_contents)
        .inner
}

/// Dashboard stat card: count over a label, with a colored accent bar.
pub fn stat_card(ui: &mut egui::Ui, label: &str, value: usize, accent: egui::Color32) {
    egui::Frame::default()
        .fill(colors::CARD_BACKGROUND)
        .stroke(egui::Stroke::new(1.0, colors::CARD_BORDER))
        .rounding(egui::Rounding::same(12.0))
        .inner_margin(egui::Margin::same(16.0))
        .show(ui, |ui| {
            ui.set_min_width(160.0);
            ui.horizontal(|ui| {
                let (rect, _) =
                    ui.allocate_exact_size(egui::vec2(6.0, 40.0), egui::Sense::hover());
                ui.painter()
                    .rect_filled(rect, egui::Rounding::same(3.0), accent);
                ui.vertical(|ui| {
                    ui.label(
                        egui::RichText::new(value.to_string())
                            .size(24.0)
                            .strong()
                            .color(colors::TEXT_PRIMARY),
                    );
                    ui.label(
                        egui::RichText::new(label)
                            .size(13.0)
                            .color(colors::TEXT_SECONDARY),
                    );
                });
            });
        });
}

/// Filled action button in the given accent color.
pub fn primary_button(ui: &mut egui::Ui, text: &str, fill: egui::Color32) -> egui::Response {
    ui.add(
        egui::Button::new(egui::RichText::new(text).color(egui::Color32::WHITE).strong())
            .fill(fill)
            .rounding(egui::Rounding::same(8.0))
            .min_size(egui::vec2(0.0, 32.0)),
    )
}

/// Searchable picker over `(id, label)` options.
///
/// While nothing is selected it shows a filter box and the matching options
/// underneath; once an option is picked it shows the selected label with a
/// clear button. Returns `true` when the selection changed this frame.
pub fn searchable_select(
    ui: &mut egui::Ui,
    label: &str,
    search: &mut String,
    selected_id: &mut String,
    options: &[(String, String)],
) -> bool {
    let mut changed = false;

    ui.vertical(|ui| {
        ui.label(
            egui::RichText::new(label)
                .size(13.0)
                .strong()
                .color(colors::TEXT_SECONDARY),
        );

        if !selected_id.is_empty() {
            let selected_label = options
                .iter()
                .find(|(id, _)| id == selected_id)
                .map(|(_, l)| l.as_str())
                .unwrap_or("(registro removido)");

            ui.horizontal(|ui| {
                egui::Frame::default()
                    .fill(colors::PRIMARY_SOFT)
                    .rounding(egui::Rounding::same(6.0))
                    .inner_margin(egui::Margin::symmetric(8.0, 4.0))
                    .show(ui, |ui| {
                        ui.label(
                            egui::RichText::new(selected_label)
                                .color(colors::PRIMARY_DARK)
                                .strong(),
                        );
                    });
                if ui.small_button("✕").clicked() {
                    selected_id.clear();
                    search.clear();
                    changed = true;
                }
            });
            return;
        }

        ui.add(
            egui::TextEdit::singleline(search)
                .hint_text("Busque...")
                .desired_width(f32::INFINITY),
        );

        if options.is_empty() {
            ui.label(
                egui::RichText::new("Nenhum registro cadastrado")
                    .size(12.0)
                    .color(colors::TEXT_MUTED),
            );
            return;
        }

        let term = search.trim().to_lowercase();
        if term.is_empty() {
            return;
        }

        for (id, option_label) in options
            .iter()
            .filter(|(_, l)| l.to_lowercase().contains(&term))
            .take(6)
        {
            if ui
                .add(
                    egui::Button::new(option_label)
                        .fill(colors::WINDOW_BACKGROUND)
                        .stroke(egui::Stroke::new(1.0, colors::CARD_BORDER))
                        .min_size(egui::vec2(ui.available_width(), 24.0)),
                )
                .clicked()
            {
                *selected_id = id.clone();
                search.clear();
                changed = true;
            }
        }
    });

    changed
}
