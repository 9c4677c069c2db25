//! # Child Modal
//!
//! Registration form for a child, split into three sections: personal data,
//! reports and insurance, guardians and access. CPF and phone inputs are
//! re-masked on every keystroke.

use eframe::egui;
use log::info;

use crate::ui::app_state::RecriarApp;
use crate::ui::components::modals::overlay;
use crate::ui::components::widgets;

impl RecriarApp {
    pub fn render_child_modal(&mut self, ctx: &egui::Context) {
        let editing = self.forms.child_form.editing_id.is_some();
        let title = if editing {
            "Editar Cadastro"
        } else {
            "Cadastrar Criança"
        };

        let error_text = self.ui.error_message.clone();
        let mut should_cancel = false;
        let mut should_submit = false;

        let form = &mut self.forms.child_form;
        let close_requested = overlay::show(ctx, "child_modal", title, 540.0, |ui| {
            widgets::section_frame(ui, "Dados Pessoais", |ui| {
                widgets::form_field(ui, "Nome completo *", &mut form.name, "Nome da criança");
                widgets::form_field(ui, "Data de nascimento *", &mut form.dob, "AAAA-MM-DD");
                if widgets::form_field(ui, "CPF *", &mut form.cpf, "000.000.000-00").changed() {
                    form.cpf = shared::format_cpf(&form.cpf);
                }
                if widgets::form_field(ui, "Telefone *", &mut form.phone, "(00) 00000-0000")
                    .changed()
                {
                    form.phone = shared::format_phone(&form.phone);
                }
                widgets::multiline_field(
                    ui,
                    "Diagnóstico",
                    &mut form.diagnosis,
                    "Diagnóstico ou hipótese diagnóstica",
                );
            });
            ui.add_space(8.0);

            widgets::section_frame(ui, "Laudos e Convênio", |ui| {
                widgets::form_field(ui, "Convênio", &mut form.plan_name, "Nome do convênio");
                widgets::form_field(
                    ui,
                    "Número da carteirinha",
                    &mut form.plan_number,
                    "Número do beneficiário",
                );
                widgets::form_field(
                    ui,
                    "Data do último laudo",
                    &mut form.plan_last_report,
                    "AAAA-MM-DD",
                );
                widgets::multiline_field(
                    ui,
                    "Resumo do último laudo",
                    &mut form.plan_report_summary,
                    "Resumo clínico",
                );
            });
            ui.add_space(8.0);

            widgets::section_frame(ui, "Responsáveis e Segurança", |ui| {
                widgets::form_field(
                    ui,
                    "Nome do responsável *",
                    &mut form.guardian_name,
                    "Responsável legal",
                );
                if widgets::form_field(
                    ui,
                    "CPF do responsável",
                    &mut form.guardian_cpf,
                    "000.000.000-00",
                )
                .changed()
                {
                    form.guardian_cpf = shared::format_cpf(&form.guardian_cpf);
                }
                widgets::multiline_field(
                    ui,
                    "Autorização de retirada",
                    &mut form.pickup_notes,
                    "Quem pode buscar a criança",
                );
                ui.add_space(4.0);
                ui.checkbox(
                    &mut form.create_account,
                    "Criar acesso ao portal para o responsável",
                );
                if form.create_account {
                    widgets::form_field(
                        ui,
                        "Email de acesso",
                        &mut form.guardian_email,
                        "email@exemplo.com",
                    );
                    widgets::form_field(
                        ui,
                        "Senha de acesso",
                        &mut form.guardian_password,
                        "Senha",
                    );
                }
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
            match self.forms.child_form.validate() {
                Ok(()) => {
                    let child = self.forms.child_form.to_child();
                    info!("Saving child record: {}", child.id);
                    self.store.upsert_child(child);
                    self.forms.child_form.clear();
                    self.forms.show_child_modal = false;
                    self.ui.set_success(if editing {
                        "Cadastro atualizado com sucesso!"
                    } else {
                        "Criança cadastrada com sucesso!"
                    });
                }
                Err(err) => self.ui.set_error(err.to_string()),
            }
        }

        if should_cancel || close_requested {
            self.forms.child_form.clear();
            self.forms.show_child_modal = false;
            self.ui.clear_messages();
        }
    }
}
