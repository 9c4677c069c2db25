//! # Professionals View
//!
//! Card grid of registered professionals with a name search. Each card
//! shows an initial-letter avatar, the role and the login email.

use eframe::egui;
use shared::Professional;

use crate::ui::app_state::RecriarApp;
use crate::ui::components::theme::colors;
use crate::ui::components::widgets;

const CARDS_PER_ROW: usize = 3;

impl RecriarApp {
    pub fn render_professionals_view(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new("💼 Profissionais")
                    .size(22.0)
                    .strong()
                    .color(colors::TEXT_PRIMARY),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if widgets::primary_button(ui, "➕ Novo Profissional", colors::ACCENT_CYAN).clicked()
                {
                    self.forms.professional_form.clear();
                    self.forms.show_professional_modal = true;
                }
            });
        });

        ui.add_space(12.0);

        widgets::card_frame(ui, |ui| {
            ui.add(
                egui::TextEdit::singleline(&mut self.professionals_search)
                    .hint_text("🔍 Buscar profissional...")
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(8.0);

            let term = self.professionals_search.trim().to_lowercase();
            let filtered: Vec<Professional> = self
                .store
                .professionals()
                .iter()
                .filter(|p| term.is_empty() || p.name.to_lowercase().contains(&term))
                .cloned()
                .collect();

            if filtered.is_empty() {
                ui.vertical_centered(|ui| {
                    ui.add_space(24.0);
                    ui.label(
                        egui::RichText::new("Nenhum profissional encontrado.")
                            .color(colors::TEXT_MUTED),
                    );
                    ui.add_space(24.0);
                });
                return;
            }

            let card_width =
                (ui.available_width() - (CARDS_PER_ROW as f32 - 1.0) * 8.0) / CARDS_PER_ROW as f32;
            for chunk in filtered.chunks(CARDS_PER_ROW) {
                ui.horizontal(|ui| {
                    for professional in chunk {
                        render_professional_card(ui, professional, card_width);
                    }
                });
                ui.add_space(8.0);
            }
        });
    }
}

fn render_professional_card(ui: &mut egui::Ui, professional: &Professional, width: f32) {
    egui::Frame::default()
        .fill(colors::WINDOW_BACKGROUND)
        .stroke(egui::Stroke::new(1.0, colors::CARD_BORDER))
        .rounding(egui::Rounding::same(10.0))
        .inner_margin(egui::Margin::same(12.0))
        .show(ui, |ui| {
            ui.set_width(width - 24.0);
            ui.horizontal(|ui| {
                let initial = professional
                    .name
                    .chars()
                    .next()
                    .map(|c| c.to_uppercase().to_string())
                    .unwrap_or_default();
                let (rect, _) =
                    ui.allocate_exact_size(egui::vec2(32.0, 32.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 16.0, colors::PRIMARY_SOFT);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    initial,
                    egui::FontId::proportional(14.0),
                    colors::ACCENT_CYAN,
                );
                ui.vertical(|ui| {
                    ui.label(
                        egui::RichText::new(&professional.name)
                            .strong()
                            .color(colors::TEXT_PRIMARY),
                    );
                    ui.label(
                        egui::RichText::new(&professional.role)
                            .size(12.0)
                            .color(colors::TEXT_SECONDARY),
                    );
                });
            });
            ui.separator();
            ui.label(
                egui::RichText::new(&professional.email)
                    .size(12.0)
                    .color(colors::TEXT_MUTED),
            );
        });
}
