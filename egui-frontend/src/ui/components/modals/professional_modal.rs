//! # Professional Modal
//!
//! Registration form for a professional. The role is picked from the fixed
//! clinic specialties via radio buttons; choosing "Outros" reveals a free
//! text field whose content becomes the stored role.

use eframe::egui;
use log::info;

use crate::ui::app_state::RecriarApp;
use crate::ui::components::modals::overlay;
use crate::ui::components::widgets;
use crate::ui::state::forms::ROLE_OTHER;

impl RecriarApp {
    pub fn render_professional_modal(&mut self, ctx: &egui::Context) {
        let editing = self.forms.professional_form.editing_id.is_some();
        let title = if editing {
            "Editar Profissional"
        } else {
            "Novo Profissional"
        };

        let error_text = self.ui.error_message.clone();
        let mut should_cancel = false;
        let mut should_submit = false;

        let form = &mut self.forms.professional_form;
        let close_requested = overlay::show(ctx, "professional_modal", title, 460.0, |ui| {
            widgets::form_field(ui, "Nome completo *", &mut form.name, "Nome do profissional");
            ui.add_space(8.0);

            widgets::section_frame(ui, "Especialidade", |ui| {
                ui.horizontal_wrapped(|ui| {
                    for role in shared::ROLES {
                        ui.radio_value(&mut form.role, role.to_string(), *role);
                    }
                    ui.radio_value(&mut form.role, ROLE_OTHER.to_string(), ROLE_OTHER);
                });
                if form.role == ROLE_OTHER {
                    ui.add_space(4.0);
                    widgets::form_field(
                        ui,
                        "Qual especialidade?",
                        &mut form.custom_role,
                        "Especialidade",
                    );
                }
            });
            ui.add_space(8.0);

            widgets::section_frame(ui, "Acesso ao Sistema", |ui| {
                widgets::form_field(ui, "Email *", &mut form.email, "email@recriar.com.br");
                widgets::form_field(ui, "Senha *", &mut form.password, "Senha de acesso");
            });
            ui.add_space(8.0);

            if let Some(message) = &error_text {
                overlay::error_strip(ui, message);
            }

            let (cancel, submit) = overlay::action_row(
                ui,
                if editing { "Salvar Alterações" } else { "Cadastrar" },
            );
            should_cancel = cancel;
            should_submit = submit;
        });

        if should_submit {
            match self.forms.professional_form.validate() {
                Ok(()) => {
                    let professional = self.forms.professional_form.to_professional();
                    info!("Saving professional record: {}", professional.id);
                    self.store.upsert_professional(professional);
                    self.forms.professional_form.clear();
                    self.forms.show_professional_modal = false;
                    self.ui.set_success(if editing {
                        "Profissional atualizado com sucesso!"
                    } else {
                        "Profissional cadastrado com sucesso!"
                    });
                }
                Err(err) => self.ui.set_error(err.to_string()),
            }
        }

        if should_cancel || close_requested {
            self.forms.professional_form.clear();
            self.forms.show_professional_modal = false;
            self.ui.clear_messages();
        }
    }
}
