//! Locale-bound profile validator.

use entities::{Department, Profile, ProfileDraft, ProfileId, ProfileStatus, DEFAULT_AVATAR};
use tracing::debug;

use crate::{
    is_valid_email, is_valid_name, is_valid_phone, Field, FieldError, Locale, ValidationError,
    ValidationResult,
};

/// Validates profile fields under one regional rule set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Validator {
    locale: Locale,
}

impl Validator {
    /// Creates a validator for `locale`.
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// The active locale.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn is_valid_name(&self, name: &str) -> bool {
        is_valid_name(name)
    }

    pub fn is_valid_email(&self, email: &str) -> bool {
        is_valid_email(email)
    }

    pub fn is_valid_phone(&self, phone: &str) -> bool {
        is_valid_phone(self.locale, phone)
    }

    /// Returns true if a stored profile would pass the form checks.
    pub fn is_valid_profile(&self, profile: &Profile) -> bool {
        self.check(
            &profile.name,
            &profile.email,
            &profile.role,
            profile.department,
            profile.phone.as_deref(),
        )
        .is_empty()
    }

    /// Returns true if the draft can be saved.
    pub fn is_valid_draft(&self, draft: &ProfileDraft) -> bool {
        self.errors(draft).is_empty()
    }

    /// Lists every failing field of `draft` with its message.
    pub fn errors(&self, draft: &ProfileDraft) -> Vec<FieldError> {
        self.check(
            &draft.name,
            &draft.email,
            &draft.role,
            draft.department,
            draft.phone(),
        )
    }

    /// Returns the message to show under `field` for `value`, or an empty
    /// string when the value is acceptable.
    ///
    /// For [`Field::Department`] the value is parsed as a department label
    /// or identifier.
    pub fn field_error(&self, field: Field, value: &str) -> String {
        let blank = value.trim().is_empty();
        let message = match field {
            Field::Name if blank => "El nombre es obligatorio",
            Field::Name if !self.is_valid_name(value) => {
                "El nombre debe tener al menos 2 letras y solo puede contener letras, espacios, \
                 guiones o apóstrofes"
            }
            Field::Email if blank => "El correo electrónico es obligatorio",
            Field::Email if !self.is_valid_email(value) => "Ingresa un correo electrónico válido",
            Field::Role if blank => "El cargo es obligatorio",
            Field::Department if value.parse::<Department>().is_err() => {
                "Selecciona un departamento"
            }
            Field::Phone if !self.is_valid_phone(value) => {
                return format!(
                    "Número de teléfono no válido. Formato esperado: {}",
                    self.locale.phone_example()
                );
            }
            _ => "",
        };
        message.to_string()
    }

    /// Turns a draft into a new profile with the given id.
    ///
    /// A missing avatar falls back to [`DEFAULT_AVATAR`]; status follows the
    /// draft's active toggle.
    pub fn accept_new(&self, draft: &ProfileDraft, id: ProfileId) -> ValidationResult<Profile> {
        self.ensure_valid(draft)?;
        Ok(build_profile(draft, id))
    }

    /// Applies an edited draft onto `existing`, keeping its id.
    pub fn accept_update(
        &self,
        draft: &ProfileDraft,
        existing: &Profile,
    ) -> ValidationResult<Profile> {
        self.ensure_valid(draft)?;
        Ok(build_profile(draft, existing.id))
    }

    fn ensure_valid(&self, draft: &ProfileDraft) -> ValidationResult<()> {
        let errors = self.errors(draft);
        if errors.is_empty() {
            return Ok(());
        }
        debug!(
            locale = %self.locale,
            failing = errors.len(),
            "Rejected profile draft"
        );
        Err(ValidationError::InvalidFields(errors))
    }

    fn check(
        &self,
        name: &str,
        email: &str,
        role: &str,
        department: Option<Department>,
        phone: Option<&str>,
    ) -> Vec<FieldError> {
        let department = department.map(|d| d.label()).unwrap_or("");
        let values = [
            (Field::Name, name),
            (Field::Email, email),
            (Field::Role, role),
            (Field::Department, department),
            (Field::Phone, phone.unwrap_or("")),
        ];

        values
            .into_iter()
            .filter_map(|(field, value)| {
                let message = self.field_error(field, value);
                (!message.is_empty()).then_some(FieldError { field, message })
            })
            .collect()
    }
}

fn build_profile(draft: &ProfileDraft, id: ProfileId) -> Profile {
    Profile {
        id,
        name: draft.name.trim().to_string(),
        email: draft.email.trim().to_string(),
        role: draft.role.trim().to_string(),
        status: ProfileStatus::from_active(draft.active),
        avatar: draft.avatar().unwrap_or(DEFAULT_AVATAR).to_string(),
        phone: draft.phone().map(str::to_string),
        department: draft.department,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> ProfileDraft {
        ProfileDraft {
            name: "Ana García".to_string(),
            email: "ana.garcia@empresa.com".to_string(),
            role: "QA Tester".to_string(),
            department: Some(Department::Quality),
            phone: Some("+34 600 123 456".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_draft_accepted() {
        let validator = Validator::new(Locale::Spain);
        let profile = validator.accept_new(&valid_draft(), 42).unwrap();

        assert_eq!(profile.id, 42);
        assert_eq!(profile.status, ProfileStatus::Active);
        assert_eq!(profile.avatar, DEFAULT_AVATAR);
        assert!(validator.is_valid_profile(&profile));
    }

    #[test]
    fn test_missing_fields_reported() {
        let validator = Validator::default();
        let draft = ProfileDraft {
            email: "not-an-email".to_string(),
            ..Default::default()
        };
        let err = validator.accept_new(&draft, 1).unwrap_err();
        let fields: Vec<Field> = err.field_errors().iter().map(|e| e.field).collect();

        assert_eq!(
            fields,
            vec![Field::Name, Field::Email, Field::Role, Field::Department]
        );
    }

    #[test]
    fn test_phone_depends_on_locale() {
        let mut draft = valid_draft();
        draft.phone = Some("+591 71234567".to_string());

        assert!(Validator::new(Locale::Bolivia).is_valid_draft(&draft));
        assert!(!Validator::new(Locale::Spain).is_valid_draft(&draft));
    }

    #[test]
    fn test_blank_phone_is_optional() {
        let mut draft = valid_draft();
        draft.phone = Some("  ".to_string());
        let profile = Validator::default().accept_new(&draft, 1).unwrap();

        assert_eq!(profile.phone, None);
    }

    #[test]
    fn test_field_error_messages() {
        let validator = Validator::new(Locale::Bolivia);

        assert_eq!(validator.field_error(Field::Name, "Ana"), "");
        assert_eq!(
            validator.field_error(Field::Email, ""),
            "El correo electrónico es obligatorio"
        );
        assert_eq!(validator.field_error(Field::Department, "Gestión"), "");
        assert_eq!(
            validator.field_error(Field::Department, ""),
            "Selecciona un departamento"
        );
        assert!(validator
            .field_error(Field::Phone, "+34 600 123 456")
            .contains("+591"));
        assert_eq!(validator.field_error(Field::Phone, ""), "");
    }

    #[test]
    fn test_update_keeps_id_and_applies_toggle() {
        let validator = Validator::default();
        let existing = validator.accept_new(&valid_draft(), 9).unwrap();

        let mut draft = ProfileDraft::from_profile(&existing);
        draft.role = "Analista de Sistemas".to_string();
        draft.active = false;
        let updated = validator.accept_update(&draft, &existing).unwrap();

        assert_eq!(updated.id, 9);
        assert_eq!(updated.role, "Analista de Sistemas");
        assert_eq!(updated.status, ProfileStatus::Inactive);
        assert_eq!(updated.avatar, existing.avatar);
    }
}
