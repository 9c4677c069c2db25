//! # Modal Components
//!
//! The four record-entry modals and the overlay chrome they share. Each
//! modal renders on top of the current view with a dimmed backdrop and
//! follows the same deferred-submit pattern: the frame's closure only sets
//! flags, and the save/cancel work happens afterwards, outside the borrow
//! of the form state.

pub mod activity_modal;
pub mod appointment_modal;
pub mod child_modal;
pub mod overlay;
pub mod professional_modal;

use eframe::egui;

use crate::ui::app_state::RecriarApp;

impl RecriarApp {
    /// Render whichever modal is open. At most one is visible at a time;
    /// the view buttons only ever raise a single flag.
    pub fn render_modals(&mut self, ctx: &egui::Context) {
        if self.forms.show_child_modal {
            self.render_child_modal(ctx);
        }
        if self.forms.show_professional_modal {
            self.render_professional_modal(ctx);
        }
        if self.forms.show_activity_modal {
            self.render_activity_modal(ctx);
        }
        if self.forms.show_appointment_modal {
            self.render_appointment_modal(ctx);
        }
    }
}
