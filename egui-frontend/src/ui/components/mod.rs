pub mod activities;
pub mod agenda;
pub mod children;
pub mod dashboard;
pub mod login;
pub mod modals;
pub mod professionals;
pub mod sidebar;
pub mod theme;
pub mod widgets;
