//! # Activities View
//!
//! Session diary: reverse-chronological history of therapy sessions, each
//! entry editable. "Registrar Sessão" opens the session modal with a fresh
//! form stamped with the current local time.

use eframe::egui;
use shared::Activity;

use crate::ui::app_state::RecriarApp;
use crate::ui::components::theme::colors;
use crate::ui::components::widgets;

impl RecriarApp {
    pub fn render_activities_view(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new("📋 Diário de Atividades")
                    .size(22.0)
                    .strong()
                    .color(colors::TEXT_PRIMARY),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if widgets::primary_button(ui, "➕ Registrar Sessão", colors::ACCENT_INDIGO)
                    .clicked()
                {
                    self.forms.activity_form.clear();
                    self.forms.show_activity_modal = true;
                }
            });
        });

        ui.add_space(12.0);

        let history: Vec<Activity> = self.store.activities().iter().rev().cloned().collect();
        let mut edit_request: Option<Activity> = None;

        widgets::card_frame(ui, |ui| {
            ui.label(
                egui::RichText::new("Histórico Recente")
                    .strong()
                    .color(colors::TEXT_SECONDARY),
            );
            ui.add_space(4.0);

            if history.is_empty() {
                ui.vertical_centered(|ui| {
                    ui.add_space(24.0);
                    ui.label(
                        egui::RichText::new("Nenhuma atividade registrada.")
                            .color(colors::TEXT_MUTED),
                    );
                    ui.add_space(24.0);
                });
                return;
            }

            for (i, activity) in history.iter().enumerate() {
                if i > 0 {
                    ui.separator();
                }
                if render_activity_entry(ui, activity) {
                    edit_request = Some(activity.clone());
                }
            }
        });

        if let Some(activity) = edit_request {
            self.forms.activity_form.populate_from(&activity);
            self.forms.show_activity_modal = true;
        }
    }
}

/// Render one history entry; returns true when its edit button is clicked.
fn render_activity_entry(ui: &mut egui::Ui, activity: &Activity) -> bool {
    let mut edit_clicked = false;

    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.label(
                egui::RichText::new(&activity.child_name)
                    .strong()
                    .color(colors::TEXT_PRIMARY),
            );
            ui.label(
                egui::RichText::new(&activity.date)
                    .size(12.0)
                    .color(colors::TEXT_MUTED),
            );
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
            if ui.button("✏").on_hover_text("Editar Atividade").clicked() {
                edit_clicked = true;
            }
        });
    });

    if !activity.general_observation.is_empty() {
        ui.label(
            egui::RichText::new(&activity.general_observation).color(colors::TEXT_SECONDARY),
        );
    }

    if !activity.notes.is_empty() {
        ui.horizontal_wrapped(|ui| {
            for note in &activity.notes {
                egui::Frame::default()
                    .fill(colors::PRIMARY_SOFT)
                    .rounding(egui::Rounding::same(6.0))
                    .inner_margin(egui::Margin::symmetric(6.0, 2.0))
                    .show(ui, |ui| {
                        ui.label(
                            egui::RichText::new(&note.professional_name)
                                .size(12.0)
                                .color(colors::ACCENT_INDIGO),
                        );
                    });
            }
        });
    }
    ui.add_space(4.0);

    edit_clicked
}
