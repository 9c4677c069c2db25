//! # App State Module
//!
//! Central application state for the clinic app.
//!
//! ## Key Types:
//! - `MainView` - Enum of the sidebar destinations
//! - `RecriarApp` - Main application state struct
//!
//! The `RecriarApp` struct owns everything: the record store, the session
//! flag, per-view search inputs, and all modal form state. Views receive it
//! by reference, so there is no global state anywhere in the app.

use chrono::NaiveDate;
use log::info;

use crate::store::RecordStore;
use crate::ui::state::{FormsState, LoginFormState, UiState};

/// Destinations reachable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainView {
    Dashboard,
    Agenda,
    Children,
    Professionals,
    Activities,
}

impl MainView {
    pub fn title(&self) -> &'static str {
        match self {
            MainView::Dashboard => "Dashboard",
            MainView::Agenda => "Agenda",
            MainView::Children => "Crianças",
            MainView::Professionals => "Profissionais",
            MainView::Activities => "Atividades",
        }
    }
}

/// Main application struct for the egui clinic app.
pub struct RecriarApp {
    pub store: RecordStore,

    // Session state
    pub authenticated: bool,
    pub login_form: LoginFormState,

    // Navigation state
    pub current_view: MainView,
    pub sidebar_collapsed: bool,

    // Per-view state
    pub children_search: String,
    pub professionals_search: String,
    pub agenda_date: NaiveDate,

    // Feedback and form state
    pub ui: UiState,
    pub forms: FormsState,
}

impl RecriarApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        info!("Initializing RecriarApp");

        crate::ui::components::theme::setup_clinic_style(&cc.egui_ctx);

        Self {
            store: RecordStore::new(),
            authenticated: false,
            login_form: LoginFormState::new(),
            current_view: MainView::Dashboard,
            sidebar_collapsed: false,
            children_search: String::new(),
            professionals_search: String::new(),
            agenda_date: chrono::Local::now().date_naive(),
            ui: UiState::new(),
            forms: FormsState::new(),
        }
    }

    /// Return to the login screen. The store keeps its contents for the
    /// lifetime of the process, so logging back in shows the same data.
    pub fn logout(&mut self) {
        info!("Logging out");
        self.authenticated = false;
        self.login_form.clear();
        self.forms.hide_all_modals();
        self.ui.clear_messages();
        self.current_view = MainView::Dashboard;
    }
}
