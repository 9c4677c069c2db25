//! # Agenda View
//!
//! Daily schedule: a date picker on the left, the day's appointments on the
//! right sorted by start time. "Agendar" opens the booking modal for the
//! selected date.

use eframe::egui;
use shared::Appointment;

use crate::ui::app_state::RecriarApp;
use crate::ui::components::theme::colors;
use crate::ui::components::widgets;

/// Appointments scheduled on `date` (YYYY-MM-DD), ordered by start time.
/// Start times are zero-padded HH:MM strings, so lexicographic order is
/// chronological order.
fn appointments_for_date(appointments: &[Appointment], date: &str) -> Vec<Appointment> {
    let mut day: Vec<Appointment> = appointments
        .iter()
        .filter(|a| a.date == date)
        .cloned()
        .collect();
    day.sort_by(|a, b| a.start.cmp(&b.start));
    day
}

impl RecriarApp {
    pub fn render_agenda(&mut self, ui: &mut egui::Ui) {
        let date_str = self.agenda_date.format("%Y-%m-%d").to_string();
        let day_appointments = appointments_for_date(self.store.appointments(), &date_str);

        ui.horizontal_top(|ui| {
            // Left column: date selection
            ui.vertical(|ui| {
                ui.set_width(260.0);
                egui::Frame::default()
                    .fill(colors::PRIMARY)
                    .rounding(egui::Rounding::same(12.0))
                    .inner_margin(egui::Margin::same(16.0))
                    .show(ui, |ui| {
                        ui.label(
                            egui::RichText::new("📅 Agenda")
                                .size(18.0)
                                .strong()
                                .color(egui::Color32::WHITE),
                        );
                        ui.add_space(8.0);
                        ui.add(
                            egui_extras::DatePickerButton::new(&mut self.agenda_date)
                                .id_source("agenda_date"),
                        );
                    });

                ui.add_space(8.0);
                widgets::card_frame(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new(self.agenda_date.format("%d/%m/%Y").to_string())
                                .strong()
                                .color(colors::PRIMARY_DARK),
                        );
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.label(
                                egui::RichText::new(format!(
                                    "{} agendamentos",
                                    day_appointments.len()
                                ))
                                .size(12.0)
                                .color(colors::TEXT_SECONDARY),
                            );
                        });
                    });
                });
            });

            ui.add_space(16.0);

            // Right column: the day's schedule
            ui.vertical(|ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new("Horários")
                            .size(18.0)
                            .strong()
                            .color(colors::TEXT_PRIMARY),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if widgets::primary_button(ui, "➕ Agendar", colors::PRIMARY).clicked() {
                            self.forms.appointment_form.clear();
                            self.forms.show_appointment_modal = true;
                        }
                    });
                });
                ui.add_space(8.0);

                if day_appointments.is_empty() {
                    widgets::card_frame(ui, |ui| {
                        ui.vertical_centered(|ui| {
                            ui.add_space(24.0);
                            ui.label(
                                egui::RichText::new("Agenda livre.").color(colors::TEXT_MUTED),
                            );
                            ui.add_space(24.0);
                        });
                    });
                } else {
                    for appointment in &day_appointments {
                        render_appointment_card(ui, appointment);
                        ui.add_space(8.0);
                    }
                }
            });
        });
    }
}

fn render_appointment_card(ui: &mut egui::Ui, appointment: &Appointment) {
    widgets::card_frame(ui, |ui| {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.set_width(70.0);
                ui.label(
                    egui::RichText::new(&appointment.start)
                        .size(16.0)
                        .strong()
                        .color(colors::TEXT_PRIMARY),
                );
                if !appointment.end.is_empty() {
                    ui.label(
                        egui::RichText::new(&appointment.end)
                            .size(12.0)
                            .color(colors::TEXT_MUTED),
                    );
                }
            });
            ui.separator();
            ui.vertical(|ui| {
                ui.label(
                    egui::RichText::new(&appointment.child_name)
                        .strong()
                        .color(colors::TEXT_PRIMARY),
                );
                ui.label(
                    egui::RichText::new(&appointment.professional_name)
                        .size(13.0)
                        .color(colors::PRIMARY),
                );
                if !appointment.note.is_empty() {
                    ui.label(
                        egui::RichText::new(&appointment.note)
                            .size(12.0)
                            .color(colors::TEXT_SECONDARY),
                    );
                }
            });
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn appointment(id: &str, date: &str, start: &str) -> Appointment {
        Appointment {
            id: id.to_string(),
            date: date.to_string(),
            child_id: "child::1".to_string(),
            child_name: "Ana".to_string(),
            professional_id: "professional::1".to_string(),
            professional_name: "Dr. João".to_string(),
            start: start.to_string(),
            end: String::new(),
            note: String::new(),
        }
    }

    #[test]
    fn filters_by_date_and_sorts_by_start() {
        let all = vec![
            appointment("a1", "2026-08-28", "14:00"),
            appointment("a2", "2026-08-29", "08:00"),
            appointment("a3", "2026-08-28", "09:30"),
        ];

        let day = appointments_for_date(&all, "2026-08-28");
        assert_eq!(day.len(), 2);
        assert_eq!(day[0].id, "a3");
        assert_eq!(day[1].id, "a1");
    }

    #[test]
    fn empty_day_yields_empty_schedule() {
        let all = vec![appointment("a1", "2026-08-28", "14:00")];
        assert!(appointments_for_date(&all, "2026-08-27").is_empty());
    }
}
