//! # Appointment Modal
//!
//! Booking form for the agenda's selected day: child and professional
//! pickers, start/end times and an optional note. The date itself comes
//! from the agenda view, not the form.

use eframe::egui;
use log::info;

use crate::ui::app_state::RecriarApp;
use crate::ui::components::modals::overlay;
use crate::ui::components::theme::colors;
use crate::ui::components::widgets;

impl RecriarApp {
    pub fn render_appointment_modal(&mut self, ctx: &egui::Context) {
        let date_label = self.agenda_date.format("%d/%m/%Y").to_string();

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

        let form = &mut self.forms.appointment_form;
        let close_requested =
            overlay::show(ctx, "appointment_modal", "Novo Agendamento", 460.0, |ui| {
                ui.label(
                    egui::RichText::new(format!("📅 {}", date_label))
                        .size(13.0)
                        .color(colors::TEXT_MUTED),
                );
                ui.add_space(8.0);

                widgets::searchable_select(
                    ui,
                    "Criança *",
                    &mut form.child_search,
                    &mut form.child_id,
                    &child_options,
                );
                ui.add_space(8.0);

                widgets::searchable_select(
                    ui,
                    "Profissional *",
                    &mut form.professional_search,
                    &mut form.professional_id,
                    &pro_options,
                );
                ui.add_space(8.0);

                ui.columns(2, |columns| {
                    widgets::form_field(&mut columns[0], "Início *", &mut form.start, "HH:MM");
                    widgets::form_field(&mut columns[1], "Término", &mut form.end, "HH:MM");
                });
                ui.add_space(8.0);

                widgets::multiline_field(
                    ui,
                    "Observação",
                    &mut form.note,
                    "Sala, preparo, materiais...",
                );
                ui.add_space(8.0);

                if let Some(message) = &error_text {
                    overlay::error_strip(ui, message);
                }

                let (cancel, submit) = overlay::action_row(ui, "Agendar");
                should_cancel = cancel;
                should_submit = submit;
            });

        if should_submit {
            match self.forms.appointment_form.validate() {
                Ok(()) => {
                    let form = &self.forms.appointment_form;
                    let child_name = self
                        .store
                        .child(&form.child_id)
                        .map(|c| c.name.clone())
                        .unwrap_or_default();
                    let professional_name = self
                        .store
                        .professional(&form.professional_id)
                        .map(|p| p.name.clone())
                        .unwrap_or_default();
                    let date = self.agenda_date.format("%Y-%m-%d").to_string();

                    let appointment = form.to_appointment(&date, child_name, professional_name);
                    info!("Saving appointment record: {}", appointment.id);
                    self.store.upsert_appointment(appointment);
                    self.forms.appointment_form.clear();
                    self.forms.show_appointment_modal = false;
                    self.ui.set_success("Agendamento criado com sucesso!");
                }
                Err(err) => self.ui.set_error(err.to_string()),
            }
        }

        if should_cancel || close_requested {
            self.forms.appointment_form.clear();
            self.forms.show_appointment_modal = false;
            self.ui.clear_messages();
        }
    }
}
