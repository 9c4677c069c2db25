//! Domain models shared across the Espaço Recriar clinic app.
//!
//! All records are flat, serializable value types identified by a string id
//! in the form `"<kind>::<uuid>"`. Records that reference another record also
//! carry a denormalized name snapshot taken at write time; those snapshots are
//! intentionally never reconciled if the referenced record is later renamed.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod format;
pub use format::{format_cpf, format_phone};

/// Fixed role options offered when registering a professional.
/// A free-text "other" role is handled by the registration form.
pub const ROLES: &[&str] = &[
    "Aplicador ABA",
    "Psicólogo",
    "Fisioterapeuta",
    "Nutricionista",
    "Fonoaudiólogo",
    "Acompanhante Terapêutico",
    "Robótica",
];

/// Anything stored in a record collection, unique by id within its collection.
pub trait Identified {
    fn id(&self) -> &str;
}

/// Health-insurance plan details attached to a child record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InsurancePlan {
    pub name: String,
    pub member_number: String,
    /// Date of the most recent medical report (YYYY-MM-DD, free text)
    pub last_report_date: String,
    /// Summary of the most recent report's findings
    pub last_report_summary: String,
}

/// Guardian details attached to a child record.
///
/// Email and password are only meaningful when `create_account` is set; the
/// guardian portal account is stored in the clear, matching the rest of the
/// credential handling in this app.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Guardian {
    pub name: String,
    pub cpf: String,
    /// Who is (and is not) allowed to pick the child up
    pub pickup_notes: String,
    pub create_account: bool,
    pub email: String,
    pub password: String,
}

/// A child enrolled at the clinic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Child {
    pub id: String,
    pub name: String,
    /// Date of birth (YYYY-MM-DD)
    pub dob: String,
    pub cpf: String,
    /// Contact phone, stored already masked as `(DD) DDDDD-DDDD`
    pub phone: String,
    pub diagnosis: String,
    pub plan: InsurancePlan,
    pub guardian: Guardian,
}

impl Child {
    pub fn generate_id() -> String {
        format!("child::{}", Uuid::new_v4())
    }
}

impl Identified for Child {
    fn id(&self) -> &str {
        &self.id
    }
}

/// A professional working at the clinic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Professional {
    pub id: String,
    pub name: String,
    /// One of [`ROLES`] or a free-text role entered under "Outros"
    pub role: String,
    pub email: String,
    /// Stored in plain text, like every credential in the store
    pub password: String,
}

impl Professional {
    pub fn generate_id() -> String {
        format!("professional::{}", Uuid::new_v4())
    }
}

impl Identified for Professional {
    fn id(&self) -> &str {
        &self.id
    }
}

/// One professional's note within an activity session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProNote {
    pub professional_id: String,
    /// Name snapshot taken when the note was saved
    pub professional_name: String,
    pub observation: String,
    /// Free-text local timestamp
    pub time: String,
}

/// A therapy session log entry for one child.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: String,
    pub child_id: String,
    /// Name snapshot taken when the activity was saved
    pub child_name: String,
    /// Free-text local timestamp, kept as-is when the activity is edited
    pub date: String,
    pub general_observation: String,
    pub notes: Vec<ProNote>,
}

impl Activity {
    pub fn generate_id() -> String {
        format!("activity::{}", Uuid::new_v4())
    }
}

impl Identified for Activity {
    fn id(&self) -> &str {
        &self.id
    }
}

/// A scheduled appointment between a child and a professional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    /// Appointment date (YYYY-MM-DD)
    pub date: String,
    pub child_id: String,
    pub child_name: String,
    pub professional_id: String,
    pub professional_name: String,
    /// Start time (HH:MM)
    pub start: String,
    /// End time (HH:MM)
    pub end: String,
    pub note: String,
}

impl Appointment {
    pub fn generate_id() -> String {
        format!("appointment::{}", Uuid::new_v4())
    }
}

impl Identified for Appointment {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Current local timestamp in the clinic's display format.
pub fn now_local_stamp() -> String {
    chrono::Local::now().format("%d/%m/%Y %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_carry_kind_prefix() {
        assert!(Child::generate_id().starts_with("child::"));
        assert!(Professional::generate_id().starts_with("professional::"));
        assert!(Activity::generate_id().starts_with("activity::"));
        assert!(Appointment::generate_id().starts_with("appointment::"));
    }

    #[test]
    fn generated_ids_are_unique() {
        let a = Child::generate_id();
        let b = Child::generate_id();
        assert_ne!(a, b);
    }

    #[test]
    fn now_local_stamp_has_expected_shape() {
        let stamp = now_local_stamp();
        // DD/MM/YYYY HH:MM
        assert_eq!(stamp.len(), 16);
        assert_eq!(&stamp[2..3], "/");
        assert_eq!(&stamp[5..6], "/");
        assert_eq!(&stamp[10..11], " ");
        assert_eq!(&stamp[13..14], ":");
    }
}
