//! # Children View
//!
//! Searchable table of registered children with per-row edit. The search
//! matches name (case-insensitive) or CPF, and the "Cadastrar Criança"
//! button opens the registration modal with a blank form.

use eframe::egui;
use egui_extras::{Column, TableBuilder};
use shared::Child;

use crate::ui::app_state::RecriarApp;
use crate::ui::components::theme::colors;
use crate::ui::components::widgets;

/// Age in whole years computed from the birth year only; the table does
/// not need day-level precision.
fn age_from_dob(dob: &str) -> Option<i32> {
    use chrono::Datelike;
    let birth_year: i32 = dob.get(..4)?.parse().ok()?;
    Some(chrono::Local::now().year() - birth_year)
}

impl RecriarApp {
    pub fn render_children_view(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new("👶 Crianças")
                    .size(22.0)
                    .strong()
                    .color(colors::TEXT_PRIMARY),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if widgets::primary_button(ui, "➕ Cadastrar Criança", colors::PRIMARY).clicked() {
                    self.forms.child_form.clear();
                    self.forms.show_child_modal = true;
                }
            });
        });

        ui.add_space(12.0);

        let mut edit_request: Option<Child> = None;

        widgets::card_frame(ui, |ui| {
            ui.add(
                egui::TextEdit::singleline(&mut self.children_search)
                    .hint_text("🔍 Buscar por nome ou CPF...")
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(8.0);

            let term = self.children_search.trim().to_lowercase();
            let filtered: Vec<Child> = self
                .store
                .children()
                .iter()
                .filter(|c| {
                    term.is_empty()
                        || c.name.to_lowercase().contains(&term)
                        || c.cpf.contains(self.children_search.trim())
                })
                .cloned()
                .collect();

            if filtered.is_empty() {
                ui.vertical_centered(|ui| {
                    ui.add_space(24.0);
                    ui.label(
                        egui::RichText::new("Nenhum registro encontrado.")
                            .color(colors::TEXT_MUTED),
                    );
                    ui.add_space(24.0);
                });
                return;
            }

            TableBuilder::new(ui)
                .striped(true)
                .column(Column::remainder().at_least(140.0)) // Nome
                .column(Column::auto().at_least(60.0)) // Idade
                .column(Column::remainder().at_least(120.0)) // Responsável
                .column(Column::auto().at_least(120.0)) // Telefone
                .column(Column::auto().at_least(90.0)) // Plano
                .column(Column::auto().at_least(60.0)) // Ações
                .header(24.0, |mut header| {
                    for title in ["Nome", "Idade", "Responsável", "Telefone", "Plano", "Ações"] {
                        header.col(|ui| {
                            ui.label(
                                egui::RichText::new(title)
                                    .size(12.0)
                                    .strong()
                                    .color(colors::TEXT_MUTED),
                            );
                        });
                    }
                })
                .body(|mut body| {
                    for child in &filtered {
                        body.row(30.0, |mut row| {
                            row.col(|ui| {
                                ui.label(
                                    egui::RichText::new(&child.name)
                                        .strong()
                                        .color(colors::TEXT_PRIMARY),
                                );
                            });
                            row.col(|ui| {
                                let age = age_from_dob(&child.dob)
                                    .map(|a| format!("{} anos", a))
                                    .unwrap_or_else(|| "-".to_string());
                                ui.label(age);
                            });
                            row.col(|ui| {
                                ui.label(&child.guardian.name);
                            });
                            row.col(|ui| {
                                ui.label(&child.phone);
                            });
                            row.col(|ui| {
                                if child.plan.name.is_empty() {
                                    ui.label(egui::RichText::new("-").color(colors::TEXT_MUTED));
                                } else {
                                    egui::Frame::default()
                                        .fill(colors::PLAN_BADGE_BACKGROUND)
                                        .rounding(egui::Rounding::same(6.0))
                                        .inner_margin(egui::Margin::symmetric(6.0, 2.0))
                                        .show(ui, |ui| {
                                            ui.label(
                                                egui::RichText::new(&child.plan.name)
                                                    .size(12.0)
                                                    .color(colors::PLAN_BADGE_TEXT),
                                            );
                                        });
                                }
                            });
                            row.col(|ui| {
                                if ui.button("✏").on_hover_text("Editar cadastro").clicked() {
                                    edit_request = Some(child.clone());
                                }
                            });
                        });
                    }
                });
        });

        if let Some(child) = edit_request {
            self.forms.child_form.populate_from(&child);
            self.forms.show_child_modal = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn age_uses_birth_year_only() {
        let this_year = chrono::Local::now().year();
        assert_eq!(age_from_dob("2015-06-15"), Some(this_year - 2015));
    }

    #[test]
    fn age_tolerates_malformed_dates() {
        assert_eq!(age_from_dob(""), None);
        assert_eq!(age_from_dob("15/06/2015"), None);
        assert_eq!(age_from_dob("abc"), None);
    }
}
