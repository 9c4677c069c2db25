//! # Login Screen
//!
//! Centered card with the clinic branding and the email/password form. The
//! check is a plain comparison against the hardcoded admin pair in the
//! session module; failures show an inline error and change nothing else.

use eframe::egui;
use log::{info, warn};

use crate::session;
use crate::ui::app_state::RecriarApp;
use crate::ui::components::theme::colors;
use crate::ui::components::widgets;

impl RecriarApp {
    pub fn render_login_screen(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::default().fill(colors::PRIMARY_SOFT))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(ui.available_height() * 0.18);

                    egui::Frame::default()
                        .fill(colors::CARD_BACKGROUND)
                        .stroke(egui::Stroke::new(1.0, colors::CARD_BORDER))
                        .rounding(egui::Rounding::same(16.0))
                        .inner_margin(egui::Margin::same(32.0))
                        .shadow(egui::Shadow {
                            offset: egui::vec2(0.0, 6.0),
                            blur: 24.0,
                            spread: 0.0,
                            color: egui::Color32::from_rgba_unmultiplied(0, 0, 0, 40),
                        })
                        .show(ui, |ui| {
                            ui.set_width(360.0);
                            self.render_login_form(ui);
                        });
                });
            });
    }

    fn render_login_form(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new("🧩 Espaço Recriar")
                    .size(26.0)
                    .strong()
                    .color(colors::PRIMARY),
            );
            ui.label(
                egui::RichText::new("Sistema de Gestão Clínica")
                    .size(14.0)
                    .color(colors::TEXT_SECONDARY),
            );
        });

        ui.add_space(20.0);

        widgets::form_field(ui, "Email", &mut self.login_form.email, "seu@email.com");
        ui.add_space(8.0);

        // Password field with a show/hide toggle
        ui.label(
            egui::RichText::new("Senha")
                .size(13.0)
                .strong()
                .color(colors::TEXT_SECONDARY),
        );
        let show = self.login_form.show_password;
        ui.horizontal(|ui| {
            ui.add(
                egui::TextEdit::singleline(&mut self.login_form.password)
                    .hint_text("••••••••")
                    .password(!show)
                    .desired_width(ui.available_width() - 40.0),
            );
            let eye = if show { "🙈" } else { "👁" };
            if ui.button(eye).on_hover_text("Mostrar/ocultar senha").clicked() {
                self.login_form.show_password = !show;
            }
        });

        if let Some(error) = &self.login_form.error {
            ui.add_space(8.0);
            ui.label(egui::RichText::new(error).color(colors::ERROR_TEXT));
        }

        ui.add_space(16.0);

        let submit = widgets::primary_button(ui, "Acessar Sistema", colors::PRIMARY);
        let enter_pressed = ui.input(|i| i.key_pressed(egui::Key::Enter));

        if submit.clicked() || enter_pressed {
            self.submit_login();
        }
    }

    fn submit_login(&mut self) {
        match session::authenticate(&self.login_form.email, &self.login_form.password) {
            Ok(()) => {
                info!("Login accepted for {}", self.login_form.email);
                self.authenticated = true;
                self.login_form.clear();
            }
            Err(e) => {
                warn!("Login rejected");
                self.login_form.error = Some(e.to_string());
            }
        }
    }
}
