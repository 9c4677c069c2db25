//! # Record Store
//!
//! Holds the four clinic collections (children, professionals, activities,
//! appointments) in insertion order and exposes a single write primitive:
//! insert-or-replace by id.
//!
//! ## Contract:
//! - Exactly one record per id survives per collection after an upsert.
//! - Replacing a record preserves its ordinal position; new records append.
//! - The store performs no schema validation; required-field checks are the
//!   submitting form's responsibility.
//! - No delete, no partial patch. Edits are whole-record overwrites carrying
//!   the same id.

use log::debug;
use shared::{Activity, Appointment, Child, Identified, Professional};

/// Scan for a record with the same id; replace it in place if found,
/// otherwise append. This is the only way records enter a collection.
fn upsert_by_id<T: Identified>(records: &mut Vec<T>, record: T) {
    match records.iter().position(|r| r.id() == record.id()) {
        Some(index) => records[index] = record,
        None => records.push(record),
    }
}

/// In-memory store for all clinic records, scoped to one running session.
#[derive(Debug, Default)]
pub struct RecordStore {
    children: Vec<Child>,
    professionals: Vec<Professional>,
    activities: Vec<Activity>,
    appointments: Vec<Appointment>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn upsert_child(&mut self, child: Child) {
        debug!("Upserting child: {}", child.id);
        upsert_by_id(&mut self.children, child);
    }

    pub fn upsert_professional(&mut self, professional: Professional) {
        debug!("Upserting professional: {}", professional.id);
        upsert_by_id(&mut self.professionals, professional);
    }

    pub fn upsert_activity(&mut self, activity: Activity) {
        debug!("Upserting activity: {}", activity.id);
        upsert_by_id(&mut self.activities, activity);
    }

    pub fn upsert_appointment(&mut self, appointment: Appointment) {
        debug!("Upserting appointment: {}", appointment.id);
        upsert_by_id(&mut self.appointments, appointment);
    }

    /// Children in insertion order.
    pub fn children(&self) -> &[Child] {
        &self.children
    }

    /// Professionals in insertion order.
    pub fn professionals(&self) -> &[Professional] {
        &self.professionals
    }

    /// Activities in insertion order (oldest first).
    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    /// Appointments in insertion order.
    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    /// Look up a child by id, for resolving name snapshots at save time.
    pub fn child(&self, id: &str) -> Option<&Child> {
        self.children.iter().find(|c| c.id == id)
    }

    /// Look up a professional by id, for resolving name snapshots at save time.
    pub fn professional(&self, id: &str) -> Option<&Professional> {
        self.professionals.iter().find(|p| p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ProNote;

    fn child(id: &str, name: &str) -> Child {
        Child {
            id: id.to_string(),
            name: name.to_string(),
            dob: "2015-01-01".to_string(),
            cpf: String::new(),
            phone: String::new(),
            diagnosis: String::new(),
            plan: Default::default(),
            guardian: Default::default(),
        }
    }

    fn professional(id: &str, name: &str, role: &str) -> Professional {
        Professional {
            id: id.to_string(),
            name: name.to_string(),
            role: role.to_string(),
            email: String::new(),
            password: String::new(),
        }
    }

    #[test]
    fn upsert_with_new_id_appends() {
        let mut store = RecordStore::new();
        store.upsert_child(child("c1", "Ana"));
        store.upsert_child(child("c2", "Bruno"));

        assert_eq!(store.children().len(), 2);
        assert_eq!(store.children()[0].name, "Ana");
        assert_eq!(store.children()[1].name, "Bruno");
    }

    #[test]
    fn upsert_with_existing_id_replaces_in_place() {
        let mut store = RecordStore::new();
        store.upsert_child(child("c1", "Ana"));
        store.upsert_child(child("c2", "Bruno"));
        store.upsert_child(child("c1", "Ana Clara"));

        assert_eq!(store.children().len(), 2);
        // Position preserved, content replaced
        assert_eq!(store.children()[0].id, "c1");
        assert_eq!(store.children()[0].name, "Ana Clara");
        assert_eq!(store.children()[1].name, "Bruno");
    }

    #[test]
    fn upsert_is_idempotent() {
        let mut store = RecordStore::new();
        store.upsert_professional(professional("p1", "Dr. João", "Psicólogo"));
        store.upsert_professional(professional("p1", "Dr. João", "Psicólogo"));

        assert_eq!(store.professionals().len(), 1);
        assert_eq!(store.professionals()[0].name, "Dr. João");
    }

    #[test]
    fn collections_are_independent() {
        let mut store = RecordStore::new();
        store.upsert_child(child("same-id", "Ana"));
        store.upsert_professional(professional("same-id", "Dr. João", "Psicólogo"));

        assert_eq!(store.children().len(), 1);
        assert_eq!(store.professionals().len(), 1);
    }

    #[test]
    fn lookups_resolve_by_id() {
        let mut store = RecordStore::new();
        store.upsert_child(child("c1", "Ana"));

        assert_eq!(store.child("c1").map(|c| c.name.as_str()), Some("Ana"));
        assert!(store.child("missing").is_none());
        assert!(store.professional("c1").is_none());
    }

    #[test]
    fn denormalized_names_stay_stale_after_rename() {
        let mut store = RecordStore::new();
        store.upsert_child(child("c1", "Ana"));
        store.upsert_professional(professional("p1", "Dr. João", "Psicólogo"));

        // Snapshot the names the way the activity form does at save time
        let child_name = store.child("c1").map(|c| c.name.clone()).unwrap_or_default();
        let pro_name = store
            .professional("p1")
            .map(|p| p.name.clone())
            .unwrap_or_default();

        store.upsert_activity(Activity {
            id: "a1".to_string(),
            child_id: "c1".to_string(),
            child_name,
            date: "01/01/2026 10:00".to_string(),
            general_observation: "Chegou bem".to_string(),
            notes: vec![ProNote {
                professional_id: "p1".to_string(),
                professional_name: pro_name,
                observation: "Sessão de psicomotricidade".to_string(),
                time: "01/01/2026 10:00".to_string(),
            }],
        });

        // Rename the child afterwards
        store.upsert_child(child("c1", "Ana Beatriz"));

        let activity = &store.activities()[0];
        assert_eq!(activity.child_name, "Ana");
        assert_eq!(activity.notes[0].professional_name, "Dr. João");
    }
}
