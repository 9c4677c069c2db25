//! # Form State Module
//!
//! Input state for every modal form in the app, one struct per form, each
//! with `new`/`clear` plus the validation its submit handler needs.
//! Validation returns `anyhow::Result` so submit handlers can surface the
//! first problem as a banner and abort the save.
//!
//! Required-field checks live here; the record store itself accepts any
//! write, so these checks are the only gate between the form and the store.

use anyhow::{bail, Result};
use shared::{Activity, Appointment, Child, Guardian, InsurancePlan, ProNote, Professional};

/// Login screen input state.
#[derive(Debug, Default)]
pub struct LoginFormState {
    pub email: String,
    pub password: String,
    pub show_password: bool,
    pub error: Option<String>,
}

impl LoginFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.email.clear();
        self.password.clear();
        self.show_password = false;
        self.error = None;
    }
}

/// Child registration form, also used for edit-as-overwrite.
#[derive(Debug, Default)]
pub struct ChildFormState {
    /// Id of the record being edited; `None` when creating
    pub editing_id: Option<String>,

    pub name: String,
    pub dob: String,
    pub cpf: String,
    pub phone: String,
    pub diagnosis: String,

    pub plan_name: String,
    pub plan_number: String,
    pub plan_last_report: String,
    pub plan_report_summary: String,

    pub guardian_name: String,
    pub guardian_cpf: String,
    pub pickup_notes: String,
    pub create_account: bool,
    pub guardian_email: String,
    pub guardian_password: String,
}

impl ChildFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn populate_from(&mut self, child: &Child) {
        *self = Self {
            editing_id: Some(child.id.clone()),
            name: child.name.clone(),
            dob: child.dob.clone(),
            cpf: child.cpf.clone(),
            phone: child.phone.clone(),
            diagnosis: child.diagnosis.clone(),
            plan_name: child.plan.name.clone(),
            plan_number: child.plan.member_number.clone(),
            plan_last_report: child.plan.last_report_date.clone(),
            plan_report_summary: child.plan.last_report_summary.clone(),
            guardian_name: child.guardian.name.clone(),
            guardian_cpf: child.guardian.cpf.clone(),
            pickup_notes: child.guardian.pickup_notes.clone(),
            create_account: child.guardian.create_account,
            guardian_email: child.guardian.email.clone(),
            guardian_password: child.guardian.password.clone(),
        };
    }

    /// Required fields of the intake form.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            bail!("Informe o nome da criança");
        }
        if self.dob.trim().is_empty() {
            bail!("Informe a data de nascimento");
        }
        if self.cpf.trim().is_empty() {
            bail!("Informe o CPF da criança");
        }
        if self.guardian_name.trim().is_empty() {
            bail!("Informe o nome do responsável");
        }
        if self.phone.trim().is_empty() {
            bail!("Informe o telefone de contato");
        }
        Ok(())
    }

    /// Build the record to store, reusing the id when editing.
    pub fn to_child(&self) -> Child {
        Child {
            id: self
                .editing_id
                .clone()
                .unwrap_or_else(Child::generate_id),
            name: self.name.trim().to_string(),
            dob: self.dob.trim().to_string(),
            cpf: self.cpf.clone(),
            phone: self.phone.clone(),
            diagnosis: self.diagnosis.trim().to_string(),
            plan: InsurancePlan {
                name: self.plan_name.trim().to_string(),
                member_number: self.plan_number.trim().to_string(),
                last_report_date: self.plan_last_report.trim().to_string(),
                last_report_summary: self.plan_report_summary.trim().to_string(),
            },
            guardian: Guardian {
                name: self.guardian_name.trim().to_string(),
                cpf: self.guardian_cpf.clone(),
                pickup_notes: self.pickup_notes.trim().to_string(),
                create_account: self.create_account,
                email: self.guardian_email.trim().to_string(),
                password: self.guardian_password.clone(),
            },
        }
    }
}

/// Sentinel radio value for a free-text role.
pub const ROLE_OTHER: &str = "Outros";

/// Professional registration form.
#[derive(Debug, Default)]
pub struct ProfessionalFormState {
    pub editing_id: Option<String>,
    pub name: String,
    /// Selected radio value, possibly [`ROLE_OTHER`]
    pub role: String,
    pub custom_role: String,
    pub email: String,
    pub password: String,
}

impl ProfessionalFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// The role that actually gets stored: the custom text when "Outros"
    /// is selected, otherwise the radio selection itself.
    pub fn effective_role(&self) -> String {
        if self.role == ROLE_OTHER {
            self.custom_role.trim().to_string()
        } else {
            self.role.clone()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            bail!("Informe o nome do profissional");
        }
        if self.email.trim().is_empty() {
            bail!("Informe o email de acesso");
        }
        if self.password.is_empty() {
            bail!("Informe a senha de acesso");
        }
        Ok(())
    }

    pub fn to_professional(&self) -> Professional {
        Professional {
            id: self
                .editing_id
                .clone()
                .unwrap_or_else(Professional::generate_id),
            name: self.name.trim().to_string(),
            role: self.effective_role(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        }
    }
}

/// One editable professional-note row in the activity form.
#[derive(Debug, Default)]
pub struct ProNoteDraft {
    pub professional_id: String,
    /// Search buffer for the professional select
    pub search: String,
    pub observation: String,
    pub time: String,
}

impl ProNoteDraft {
    pub fn new() -> Self {
        Self {
            time: shared::now_local_stamp(),
            ..Self::default()
        }
    }

    fn from_note(note: &ProNote) -> Self {
        Self {
            professional_id: note.professional_id.clone(),
            search: String::new(),
            observation: note.observation.clone(),
            time: note.time.clone(),
        }
    }

    /// Rows missing either a professional or text are dropped at save time.
    pub fn is_filled(&self) -> bool {
        !self.professional_id.is_empty() && !self.observation.trim().is_empty()
    }
}

/// Activity session form. The date is captured when the form opens and kept
/// unchanged when an existing session is edited.
#[derive(Debug)]
pub struct ActivityFormState {
    pub editing_id: Option<String>,
    pub child_id: String,
    /// Search buffer for the child select
    pub child_search: String,
    pub date: String,
    pub general_observation: String,
    pub notes: Vec<ProNoteDraft>,
}

impl ActivityFormState {
    pub fn new() -> Self {
        Self {
            editing_id: None,
            child_id: String::new(),
            child_search: String::new(),
            date: shared::now_local_stamp(),
            general_observation: String::new(),
            notes: vec![ProNoteDraft::new()],
        }
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }

    pub fn populate_from(&mut self, activity: &Activity) {
        let mut notes: Vec<ProNoteDraft> =
            activity.notes.iter().map(ProNoteDraft::from_note).collect();
        if notes.is_empty() {
            notes.push(ProNoteDraft::new());
        }
        *self = Self {
            editing_id: Some(activity.id.clone()),
            child_id: activity.child_id.clone(),
            child_search: String::new(),
            date: activity.date.clone(),
            general_observation: activity.general_observation.clone(),
            notes,
        };
    }

    pub fn add_note(&mut self) {
        self.notes.push(ProNoteDraft::new());
    }

    /// At least one row always stays on screen.
    pub fn remove_note(&mut self, index: usize) {
        if self.notes.len() > 1 && index < self.notes.len() {
            self.notes.remove(index);
        }
    }

    /// The only hard precondition: a child must be selected.
    pub fn validate(&self) -> Result<()> {
        if self.child_id.is_empty() {
            bail!("Selecione uma criança");
        }
        Ok(())
    }
}

impl Default for ActivityFormState {
    fn default() -> Self {
        Self::new()
    }
}

/// Appointment booking form. The date comes from the agenda's selected day.
#[derive(Debug, Default)]
pub struct AppointmentFormState {
    pub child_id: String,
    pub child_search: String,
    pub professional_id: String,
    pub professional_search: String,
    pub start: String,
    pub end: String,
    pub note: String,
}

impl AppointmentFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn validate(&self) -> Result<()> {
        if self.child_id.is_empty() || self.professional_id.is_empty() || self.start.trim().is_empty()
        {
            bail!("Preencha os campos obrigatórios");
        }
        Ok(())
    }

    pub fn to_appointment(&self, date: &str, child_name: String, professional_name: String) -> Appointment {
        Appointment {
            id: Appointment::generate_id(),
            date: date.to_string(),
            child_id: self.child_id.clone(),
            child_name,
            professional_id: self.professional_id.clone(),
            professional_name,
            start: self.start.trim().to_string(),
            end: self.end.trim().to_string(),
            note: self.note.trim().to_string(),
        }
    }
}

/// All modal visibility flags and their form states.
#[derive(Debug, Default)]
pub struct FormsState {
    pub show_child_modal: bool,
    pub child_form: ChildFormState,

    pub show_professional_modal: bool,
    pub professional_form: ProfessionalFormState,

    pub show_activity_modal: bool,
    pub activity_form: ActivityFormState,

    pub show_appointment_modal: bool,
    pub appointment_form: AppointmentFormState,
}

impl FormsState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hide_all_modals(&mut self) {
        self.show_child_modal = false;
        self.show_professional_modal = false;
        self.show_activity_modal = false;
        self.show_appointment_modal = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_child_form() -> ChildFormState {
        ChildFormState {
            name: "  Ana  ".to_string(),
            dob: "2015-01-01".to_string(),
            cpf: "123.456.789-01".to_string(),
            phone: "(11) 98765-4321".to_string(),
            guardian_name: "Maria".to_string(),
            ..ChildFormState::default()
        }
    }

    #[test]
    fn child_form_requires_core_fields() {
        let mut form = filled_child_form();
        assert!(form.validate().is_ok());

        form.name.clear();
        assert!(form.validate().is_err());

        let mut form = filled_child_form();
        form.guardian_name = "  ".to_string();
        assert!(form.validate().is_err());
    }

    #[test]
    fn child_form_builds_trimmed_record_with_fresh_id() {
        let form = filled_child_form();
        let child = form.to_child();
        assert_eq!(child.name, "Ana");
        assert!(child.id.starts_with("child::"));
    }

    #[test]
    fn child_form_reuses_id_when_editing() {
        let mut form = filled_child_form();
        form.editing_id = Some("child::abc".to_string());
        assert_eq!(form.to_child().id, "child::abc");
    }

    #[test]
    fn professional_role_resolution() {
        let mut form = ProfessionalFormState {
            name: "Dr. João".to_string(),
            role: "Psicólogo".to_string(),
            email: "joao@recriar.com.br".to_string(),
            password: "senha".to_string(),
            ..ProfessionalFormState::default()
        };
        assert_eq!(form.to_professional().role, "Psicólogo");

        form.role = ROLE_OTHER.to_string();
        form.custom_role = " Musicoterapeuta ".to_string();
        assert_eq!(form.to_professional().role, "Musicoterapeuta");
    }

    #[test]
    fn activity_form_keeps_at_least_one_note_row() {
        let mut form = ActivityFormState::new();
        assert_eq!(form.notes.len(), 1);
        form.remove_note(0);
        assert_eq!(form.notes.len(), 1);

        form.add_note();
        form.add_note();
        form.remove_note(1);
        assert_eq!(form.notes.len(), 2);
    }

    #[test]
    fn activity_form_requires_a_child() {
        let mut form = ActivityFormState::new();
        assert!(form.validate().is_err());
        form.child_id = "child::abc".to_string();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn activity_form_preserves_date_on_edit() {
        let activity = Activity {
            id: "activity::1".to_string(),
            child_id: "child::1".to_string(),
            child_name: "Ana".to_string(),
            date: "05/03/2026 14:30".to_string(),
            general_observation: String::new(),
            notes: vec![],
        };
        let mut form = ActivityFormState::new();
        form.populate_from(&activity);
        assert_eq!(form.date, "05/03/2026 14:30");
        assert_eq!(form.editing_id.as_deref(), Some("activity::1"));
        // An empty note list still yields one editable row
        assert_eq!(form.notes.len(), 1);
    }

    #[test]
    fn note_rows_without_pro_or_text_are_not_filled() {
        let mut draft = ProNoteDraft::new();
        assert!(!draft.is_filled());
        draft.professional_id = "professional::1".to_string();
        assert!(!draft.is_filled());
        draft.observation = "Sessão tranquila".to_string();
        assert!(draft.is_filled());
    }

    #[test]
    fn appointment_form_requires_child_pro_and_start() {
        let mut form = AppointmentFormState::new();
        assert!(form.validate().is_err());
        form.child_id = "child::1".to_string();
        form.professional_id = "professional::1".to_string();
        assert!(form.validate().is_err());
        form.start = "09:00".to_string();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn appointment_builds_with_snapshotted_names() {
        let form = AppointmentFormState {
            child_id: "child::1".to_string(),
            professional_id: "professional::1".to_string(),
            start: "09:00".to_string(),
            end: "10:00".to_string(),
            note: " Avaliação inicial ".to_string(),
            ..AppointmentFormState::default()
        };
        let appointment = form.to_appointment("2026-08-28", "Ana".to_string(), "Dr. João".to_string());
        assert_eq!(appointment.date, "2026-08-28");
        assert_eq!(appointment.child_name, "Ana");
        assert_eq!(appointment.professional_name, "Dr. João");
        assert_eq!(appointment.note, "Avaliação inicial");
        assert!(appointment.id.starts_with("appointment::"));
    }
}
