//! # Activity Modal
//!
//! Session registration form: a child picker, the capture timestamp, a
//! general observation and a dynamic list of per-professional note rows.
//! At save time the child and professional names are copied into the
//! record, so later renames never rewrite past sessions.

use eframe::egui;
use log::info;
use shared::{Activity, ProNote};

use crate::ui::app_state::RecriarApp;
use crate::ui::components::modals::overlay;
use crate::ui::components::theme::colors;
use crate::ui::components::widgets;

impl RecriarApp {
    pub fn render_activity_modal(&mut self, ctx: &egui::Context) {
        let editing = self.forms.activity_form.editing_id.is_some();
        let title = if editing {
            "Editar Sessão"
        } else {
            "Registrar Sessão"
        };

        let child_options: Vec<(String, String)> = self
            .store
            .children()
            .iter()
            .map(|c| (c.id.clone(), c.name.clone()))
            .collect();
        let pro_options: Vec<(String, String)> = self
            .store
            .professionals()
            .iter()
            .map(|p| (p.id.clone(), format!("{} - {}", p.name, p.role)))
            .collect();

        let error_text = self.ui.error_message.clone();
        let mut should_cancel = false;
        let mut should_submit = false;

        let form = &mut self.forms.activity_form;
        let close_requested = overlay::show(ctx, "activity_modal", title, 560.0, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new("🕗")
                        .size(14.0)
                        .color(colors::TEXT_MUTED),
                );
                ui.label(
                    egui::RichText::new(&form.date)
                        .size(13.0)
                        .color(colors::TEXT_MUTED),
                );
            });
            ui.add_space(8.0);

            widgets::searchable_select(
                ui,
                "Criança *",
                &mut form.child_search,
                &mut form.child_id,
                &child_options,
            );
            ui.add_space(8.0);

            widgets::multiline_field(
                ui,
                "Observação geral",
                &mut form.general_observation,
                "Como a criança chegou, comportamento geral...",
            );
            ui.add_space(8.0);

            widgets::section_frame(ui, "Atendimentos da Sessão", |ui| {
                let mut remove_request: Option<usize> = None;
                let removable = form.notes.len() > 1;

                for (index, draft) in form.notes.iter_mut().enumerate() {
                    if index > 0 {
                        ui.separator();
                    }
                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new(&draft.time)
                                .size(12.0)
                                .color(colors::TEXT_MUTED),
                        );
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                if removable
                                    && ui
                                        .small_button("🗑")
                                        .on_hover_text("Remover atendimento")
                                        .clicked()
                                {
                                    remove_request = Some(index);
                                }
                            },
                        );
                    });
                    ui.push_id(index, |ui| {
                        widgets::searchable_select(
                            ui,
                            "Profissional",
                            &mut draft.search,
                            &mut draft.professional_id,
                            &pro_options,
                        );
                    });
                    widgets::multiline_field(
                        ui,
                        "Observação do atendimento",
                        &mut draft.observation,
                        "Evolução, conduta, resposta da criança...",
                    );
                }

                if let Some(index) = remove_request {
                    form.remove_note(index);
                }

                ui.add_space(6.0);
                if ui.button("➕ Adicionar Profissional").clicked() {
                    form.add_note();
                }
            });
            ui.add_space(8.0);

            if let Some(message) = &error_text {
                overlay::error_strip(ui, message);
            }

            let (cancel, submit) = overlay::action_row(
                ui,
                if editing { "Salvar Alterações" } else { "Registrar" },
            );
            should_cancel = cancel;
            should_submit = submit;
        });

        if should_submit {
            match self.forms.activity_form.validate() {
                Ok(()) => {
                    let activity = self.build_activity();
                    info!("Saving activity record: {}", activity.id);
                    self.store.upsert_activity(activity);
                    self.forms.activity_form.clear();
                    self.forms.show_activity_modal = false;
                    self.ui.set_success(if editing {
                        "Atividade atualizada com sucesso!"
                    } else {
                        "Atividade registrada com sucesso!"
                    });
                }
                Err(err) => self.ui.set_error(err.to_string()),
            }
        }

        if should_cancel || close_requested {
            self.forms.activity_form.clear();
            self.forms.show_activity_modal = false;
            self.ui.clear_messages();
        }
    }

    /// Assemble the record from the validated form, snapshotting names and
    /// dropping note rows that were never filled in.
    fn build_activity(&self) -> Activity {
        let form = &self.forms.activity_form;

        let child_name = self
            .store
            .child(&form.child_id)
            .map(|c| c.name.clone())
            .unwrap_or_default();

        let notes: Vec<ProNote> = form
            .notes
            .iter()
            .filter(|draft| draft.is_filled())
            .map(|draft| ProNote {
                professional_id: draft.professional_id.clone(),
                professional_name: self
                    .store
                    .professional(&draft.professional_id)
                    .map(|p| p.name.clone())
                    .unwrap_or_default(),
                observation: draft.observation.trim().to_string(),
                time: draft.time.clone(),
            })
            .collect();

        Activity {
            id: form
                .editing_id
                .clone()
                .unwrap_or_else(Activity::generate_id),
            child_id: form.child_id.clone(),
            child_name,
            date: form.date.clone(),
            general_observation: form.general_observation.trim().to_string(),
            notes,
        }
    }
}
