//! # App Coordinator Module
//!
//! Implements `eframe::App` for [`RecriarApp`] and routes each frame:
//!
//! 1. Unauthenticated -> render only the login screen.
//! 2. Authenticated -> sidebar panel + message banners + the view selected
//!    in the sidebar, then any open modal on top.
//!
//! Feedback banners expire on a timer, so the coordinator keeps requesting
//! repaints while one is visible.

use eframe::egui;

use crate::ui::app_state::{MainView, RecriarApp};
use crate::ui::components::theme::colors;

impl eframe::App for RecriarApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.authenticated {
            self.render_login_screen(ctx);
            return;
        }

        self.ui.expire_messages();
        if self.ui.has_message() {
            ctx.request_repaint_after(std::time::Duration::from_millis(500));
        }

        self.render_sidebar(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::default().fill(colors::WINDOW_BACKGROUND))
            .show(ctx, |ui| {
                egui::Frame::default()
                    .inner_margin(egui::Margin::symmetric(24.0, 20.0))
                    .show(ui, |ui| {
                        self.render_messages(ui);

                        egui::ScrollArea::vertical()
                            .auto_shrink([false, false])
                            .show(ui, |ui| {
                                self.render_current_view(ui);
                            });
                    });
            });

        self.render_modals(ctx);
    }
}

impl RecriarApp {
    /// Route to the view selected in the sidebar.
    fn render_current_view(&mut self, ui: &mut egui::Ui) {
        match self.current_view {
            MainView::Dashboard => self.render_dashboard(ui),
            MainView::Agenda => self.render_agenda(ui),
            MainView::Children => self.render_children_view(ui),
            MainView::Professionals => self.render_professionals_view(ui),
            MainView::Activities => self.render_activities_view(ui),
        }
    }

    /// Transient success/error banners below the header.
    fn render_messages(&mut self, ui: &mut egui::Ui) {
        let mut dismissed = false;

        if let Some(message) = self.ui.error_message.clone() {
            dismissed = banner(ui, &message, colors::ERROR_BACKGROUND, colors::ERROR_TEXT);
        } else if let Some(message) = self.ui.success_message.clone() {
            dismissed = banner(ui, &message, colors::SUCCESS_BACKGROUND, colors::SUCCESS_TEXT);
        }

        if dismissed {
            self.ui.clear_messages();
        }
    }
}

/// Draw one dismissible banner; returns true when the close button is hit.
fn banner(ui: &mut egui::Ui, message: &str, fill: egui::Color32, text: egui::Color32) -> bool {
    let mut dismissed = false;
    egui::Frame::default()
        .fill(fill)
        .rounding(egui::Rounding::same(8.0))
        .inner_margin(egui::Margin::symmetric(12.0, 8.0))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(message).color(text).strong());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("✕").clicked() {
                        dismissed = true;
                    }
                });
            });
        });
    ui.add_space(8.0);
    dismissed
}
