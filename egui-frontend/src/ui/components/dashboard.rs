//! # Dashboard View
//!
//! Landing view after login: four stat cards summarizing the collections
//! and the five most recent activity sessions, newest first.

use eframe::egui;
use shared::Activity;

use crate::ui::app_state::RecriarApp;
use crate::ui::components::theme::colors;
use crate::ui::components::widgets;

impl RecriarApp {
    pub fn render_dashboard(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(
                    egui::RichText::new("Bem-vindo ao Espaço Recriar")
                        .size(22.0)
                        .strong()
                        .color(colors::TEXT_PRIMARY),
                );
                ui.label(
                    egui::RichText::new("Resumo geral da clínica hoje.")
                        .color(colors::TEXT_SECONDARY),
                );
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                let today = chrono::Local::now().format("%d/%m/%Y").to_string();
                ui.label(egui::RichText::new(today).strong().color(colors::PRIMARY));
            });
        });

        ui.add_space(16.0);

        let guardians_with_account = self
            .store
            .children()
            .iter()
            .filter(|c| c.guardian.create_account)
            .count();

        ui.horizontal_wrapped(|ui| {
            widgets::stat_card(ui, "Crianças", self.store.children().len(), colors::PRIMARY);
            widgets::stat_card(
                ui,
                "Profissionais",
                self.store.professionals().len(),
                colors::ACCENT_CYAN,
            );
            widgets::stat_card(
                ui,
                "Atividades",
                self.store.activities().len(),
                colors::ACCENT_INDIGO,
            );
            widgets::stat_card(
                ui,
                "Responsáveis",
                guardians_with_account,
                colors::PRIMARY_DARK,
            );
        });

        ui.add_space(20.0);
        ui.label(
            egui::RichText::new("Atividades Recentes")
                .size(16.0)
                .strong()
                .color(colors::TEXT_PRIMARY),
        );
        ui.add_space(8.0);

        let recent: Vec<Activity> = self
            .store
            .activities()
            .iter()
            .rev()
            .take(5)
            .cloned()
            .collect();

        widgets::card_frame(ui, |ui| {
            if recent.is_empty() {
                ui.vertical_centered(|ui| {
                    ui.add_space(24.0);
                    ui.label(
                        egui::RichText::new("Nenhuma atividade registrada ainda.")
                            .color(colors::TEXT_MUTED),
                    );
                    ui.add_space(24.0);
                });
                return;
            }

            for (i, activity) in recent.iter().enumerate() {
                if i > 0 {
                    ui.separator();
                }
                render_recent_activity(ui, activity);
            }
        });
    }
}

fn render_recent_activity(ui: &mut egui::Ui, activity: &Activity) {
    ui.vertical(|ui| {
        ui.label(
            egui::RichText::new(&activity.child_name)
                .strong()
                .color(colors::TEXT_PRIMARY),
        );
        ui.label(
            egui::RichText::new(format!("🕗 {}", activity.date))
                .size(12.0)
                .color(colors::TEXT_MUTED),
        );
        if !activity.general_observation.is_empty() {
            ui.label(
                egui::RichText::new(&activity.general_observation)
                    .color(colors::TEXT_SECONDARY),
            );
        }
        if !activity.notes.is_empty() {
            ui.horizontal_wrapped(|ui| {
                for note in &activity.notes {
                    egui::Frame::default()
                        .fill(colors::WINDOW_BACKGROUND)
                        .stroke(egui::Stroke::new(1.0, colors::CARD_BORDER))
                        .rounding(egui::Rounding::same(6.0))
                        .inner_margin(egui::Margin::symmetric(6.0, 2.0))
                        .show(ui, |ui| {
                            ui.label(
                                egui::RichText::new(&note.professional_name)
                                    .size(12.0)
                                    .color(colors::TEXT_SECONDARY),
                            );
                        });
                }
            });
        }
        ui.add_space(4.0);
    });
}
