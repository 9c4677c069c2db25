//! # Sidebar Module
//!
//! Left navigation panel: clinic logo (click to collapse/expand), grouped
//! view links (Cadastros / Clínico) and the logout button pinned to the
//! bottom. Collapsed mode shows icons only.

use eframe::egui;
use log::info;

use crate::ui::app_state::{MainView, RecriarApp};
use crate::ui::components::theme::colors;

const EXPANDED_WIDTH: f32 = 220.0;
const COLLAPSED_WIDTH: f32 = 64.0;

impl RecriarApp {
    pub fn render_sidebar(&mut self, ctx: &egui::Context) {
        let width = if self.sidebar_collapsed {
            COLLAPSED_WIDTH
        } else {
            EXPANDED_WIDTH
        };

        egui::SidePanel::left("sidebar")
            .resizable(false)
            .exact_width(width)
            .frame(
                egui::Frame::default()
                    .fill(colors::SIDEBAR_BACKGROUND)
                    .inner_margin(egui::Margin::same(12.0)),
            )
            .show(ctx, |ui| {
                self.render_sidebar_logo(ui);
                ui.add_space(12.0);
                ui.separator();
                ui.add_space(8.0);

                self.nav_button(ui, MainView::Dashboard, "🏠");
                self.nav_button(ui, MainView::Agenda, "📅");

                self.section_label(ui, "Cadastros");
                self.nav_button(ui, MainView::Children, "👶");
                self.nav_button(ui, MainView::Professionals, "💼");

                self.section_label(ui, "Clínico");
                self.nav_button(ui, MainView::Activities, "📋");

                ui.with_layout(egui::Layout::bottom_up(egui::Align::Min), |ui| {
                    ui.add_space(8.0);
                    let label = if self.sidebar_collapsed { "⎋" } else { "⎋ Sair" };
                    if ui
                        .add(
                            egui::Button::new(egui::RichText::new(label).color(colors::DANGER))
                                .fill(egui::Color32::TRANSPARENT)
                                .min_size(egui::vec2(ui.available_width(), 32.0)),
                        )
                        .clicked()
                    {
                        self.logout();
                    }
                    ui.separator();
                });
            });
    }

    /// Logo row; clicking it toggles the collapsed state.
    fn render_sidebar_logo(&mut self, ui: &mut egui::Ui) {
        let text = if self.sidebar_collapsed {
            "🧩"
        } else {
            "🧩 Recriar"
        };
        let response = ui.add(
            egui::Button::new(
                egui::RichText::new(text)
                    .size(18.0)
                    .strong()
                    .color(colors::PRIMARY),
            )
            .fill(egui::Color32::TRANSPARENT)
            .min_size(egui::vec2(ui.available_width(), 36.0)),
        );
        if response.on_hover_text("Recolher/expandir menu").clicked() {
            self.sidebar_collapsed = !self.sidebar_collapsed;
        }
    }

    fn section_label(&self, ui: &mut egui::Ui, label: &str) {
        ui.add_space(12.0);
        let text = if self.sidebar_collapsed { "…" } else { label };
        ui.label(
            egui::RichText::new(text)
                .size(11.0)
                .strong()
                .color(colors::TEXT_MUTED),
        );
        ui.add_space(2.0);
    }

    fn nav_button(&mut self, ui: &mut egui::Ui, view: MainView, icon: &str) {
        let active = self.current_view == view;
        let text = if self.sidebar_collapsed {
            icon.to_string()
        } else {
            format!("{} {}", icon, view.title())
        };

        let mut rich = egui::RichText::new(text);
        rich = if active {
            rich.strong().color(colors::PRIMARY)
        } else {
            rich.color(colors::TEXT_SECONDARY)
        };

        let button = egui::Button::new(rich)
            .fill(if active {
                colors::PRIMARY_SOFT
            } else {
                egui::Color32::TRANSPARENT
            })
            .rounding(egui::Rounding::same(8.0))
            .min_size(egui::vec2(ui.available_width(), 34.0));

        if ui.add(button).clicked() && !active {
            info!("Navigating to {:?}", view);
            self.current_view = view;
        }
    }
}
