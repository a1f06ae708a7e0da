//! The contact form aggregate and its validation pass.

use super::field::{Field, FieldId, FieldRole, InputKind};
use super::validators::{is_required, is_valid_email};
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Why a field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// The trimmed value is empty.
    Required,
    /// The email field does not look like `local@domain.tld`.
    InvalidEmail,
}

/// A single failing field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    pub field: FieldId,
    pub role: FieldRole,
    pub kind: IssueKind,
}

/// Result of one validation pass over the whole form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub issues: Vec<FieldIssue>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Fields that failed, in form order
    pub fn failed_fields(&self) -> Vec<FieldId> {
        self.issues.iter().map(|i| i.field).collect()
    }

    pub fn issue_for(&self, field: FieldId) -> Option<&FieldIssue> {
        self.issues.iter().find(|i| i.field == field)
    }
}

/// Ordered set of contact form fields.
///
/// Construction guarantees exactly one email field, so validation never has
/// to guess where the format check applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    fields: Vec<Field>,
    email: FieldId,
}

impl ContactForm {
    /// Build a form from the markup types of its inputs, in page order.
    pub fn from_inputs(kinds: &[InputKind]) -> Result<Self, DomainError> {
        if kinds.is_empty() {
            return Err(DomainError::EmptyForm);
        }

        let fields: Vec<Field> = kinds
            .iter()
            .enumerate()
            .map(|(i, kind)| Field::new(FieldId(i), *kind))
            .collect();

        let mut emails = fields
            .iter()
            .filter(|f| f.role == FieldRole::Email)
            .map(|f| f.id);
        let email = emails.next().ok_or(DomainError::MissingEmailField)?;
        if let Some(second) = emails.next() {
            return Err(DomainError::DuplicateEmailField {
                first: email,
                second,
            });
        }

        Ok(Self { fields, email })
    }

    /// The usual three-input layout: name, email, message
    pub fn standard() -> Self {
        Self {
            fields: vec![
                Field::new(FieldId(0), InputKind::Text),
                Field::new(FieldId(1), InputKind::Email),
                Field::new(FieldId(2), InputKind::Text),
            ],
            email: FieldId(1),
        }
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn field(&self, id: FieldId) -> Result<&Field, DomainError> {
        self.fields.get(id.0).ok_or(DomainError::UnknownField(id))
    }

    pub fn field_mut(&mut self, id: FieldId) -> Result<&mut Field, DomainError> {
        self.fields.get_mut(id.0).ok_or(DomainError::UnknownField(id))
    }

    pub fn email_field(&self) -> FieldId {
        self.email
    }

    /// The last input; Enter pressed here submits the form.
    pub fn last_field(&self) -> FieldId {
        FieldId(self.fields.len().saturating_sub(1))
    }

    /// Replace a field's value
    pub fn set_value(&mut self, id: FieldId, value: impl Into<String>) -> Result<(), DomainError> {
        self.field_mut(id)?.value = value.into();
        Ok(())
    }

    pub fn clear_values(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
        }
    }

    pub fn clear_error_flags(&mut self) {
        for field in &mut self.fields {
            field.invalid = false;
        }
    }

    /// Run the required check on every field, then the email format check.
    ///
    /// The format check only runs when every required check passed, so an
    /// empty email field reports `Required`, never `InvalidEmail`.
    pub fn validate(&self) -> ValidationReport {
        let mut issues: Vec<FieldIssue> = self
            .fields
            .iter()
            .filter(|f| !is_required(&f.value))
            .map(|f| FieldIssue {
                field: f.id,
                role: f.role,
                kind: IssueKind::Required,
            })
            .collect();

        if issues.is_empty() {
            let email = &self.fields[self.email.0];
            if !is_valid_email(email.trimmed()) {
                issues.push(FieldIssue {
                    field: email.id,
                    role: email.role,
                    kind: IssueKind::InvalidEmail,
                });
            }
        }

        ValidationReport { issues }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn filled(name: &str, email: &str, message: &str) -> ContactForm {
        let mut form = ContactForm::standard();
        form.set_value(FieldId(0), name).unwrap();
        form.set_value(FieldId(1), email).unwrap();
        form.set_value(FieldId(2), message).unwrap();
        form
    }

    // ==================== Construction ====================

    #[test]
    fn test_from_inputs_assigns_roles() {
        let form = ContactForm::from_inputs(&[
            InputKind::Text,
            InputKind::Email,
            InputKind::TextArea,
        ])
        .unwrap();
        let roles: Vec<_> = form.fields().iter().map(|f| f.role).collect();
        assert_eq!(
            roles,
            vec![FieldRole::Name, FieldRole::Email, FieldRole::Message]
        );
        assert_eq!(form.email_field(), FieldId(1));
        assert_eq!(form.last_field(), FieldId(2));
    }

    #[test]
    fn test_from_inputs_matches_standard() {
        let form =
            ContactForm::from_inputs(&[InputKind::Text, InputKind::Email, InputKind::Text])
                .unwrap();
        assert_eq!(form, ContactForm::standard());
    }

    #[test]
    fn test_from_inputs_rejects_empty() {
        assert_eq!(
            ContactForm::from_inputs(&[]).unwrap_err(),
            DomainError::EmptyForm
        );
    }

    #[test]
    fn test_from_inputs_rejects_missing_email() {
        let err = ContactForm::from_inputs(&[InputKind::Text, InputKind::Text]).unwrap_err();
        assert_eq!(err, DomainError::MissingEmailField);
    }

    #[test]
    fn test_from_inputs_rejects_two_emails() {
        let err = ContactForm::from_inputs(&[
            InputKind::Text,
            InputKind::Email,
            InputKind::Email,
        ])
        .unwrap_err();
        assert_eq!(
            err,
            DomainError::DuplicateEmailField {
                first: FieldId(1),
                second: FieldId(2),
            }
        );
    }

    #[test]
    fn test_unknown_field() {
        let mut form = ContactForm::standard();
        assert_eq!(
            form.set_value(FieldId(9), "x").unwrap_err(),
            DomainError::UnknownField(FieldId(9))
        );
    }

    // ==================== Validation ====================

    #[test]
    fn test_all_valid() {
        let report = filled("Bob", "bob@x.com", "hello").validate();
        assert!(report.is_clean());
    }

    #[test]
    fn test_bad_email_only_reports_format() {
        let report = filled("Alice", "bad-email", "hi").validate();
        assert_eq!(
            report.issues,
            vec![FieldIssue {
                field: FieldId(1),
                role: FieldRole::Email,
                kind: IssueKind::InvalidEmail,
            }]
        );
    }

    #[test]
    fn test_empty_name_reports_required_only_for_name() {
        let report = filled("", "a@b.com", "hi").validate();
        assert_eq!(report.failed_fields(), vec![FieldId(0)]);
        assert_eq!(report.issues[0].kind, IssueKind::Required);
    }

    #[test]
    fn test_empty_email_is_required_not_invalid() {
        let report = filled("Alice", "   ", "hi").validate();
        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.issues[0].kind, IssueKind::Required);
        assert_eq!(report.issues[0].role, FieldRole::Email);
    }

    #[test]
    fn test_format_check_skipped_while_required_fails() {
        // Bad email plus an empty name: only the required issue is reported
        let report = filled("", "bad-email", "hi").validate();
        assert_eq!(report.failed_fields(), vec![FieldId(0)]);
    }

    #[test]
    fn test_one_issue_per_empty_field() {
        let report = filled("", "", "").validate();
        assert_eq!(
            report.failed_fields(),
            vec![FieldId(0), FieldId(1), FieldId(2)]
        );
        assert!(report.issues.iter().all(|i| i.kind == IssueKind::Required));
    }

    #[test]
    fn test_email_is_trimmed_before_format_check() {
        let report = filled("Bob", "  bob@x.com  ", "hello").validate();
        assert!(report.is_clean());
    }

    #[test]
    fn test_validate_is_idempotent() {
        let form = filled("", "bad", "hi");
        assert_eq!(form.validate(), form.validate());
    }

    #[test]
    fn test_clear_values() {
        let mut form = filled("Bob", "bob@x.com", "hello");
        form.clear_values();
        assert!(form.fields().iter().all(|f| f.value.is_empty()));
    }

    // ==================== Properties ====================

    fn valid_name() -> impl Strategy<Value = String> {
        "[A-Za-z]{1,10}( [A-Za-z]{1,10})?"
    }

    fn valid_email() -> impl Strategy<Value = String> {
        " {0,2}[a-z0-9._]{1,8}@[a-z]{1,8}\\.[a-z]{2,4} {0,2}"
    }

    fn valid_message() -> impl Strategy<Value = String> {
        "[ -~]{0,30}[!-~][ -~]{0,30}"
    }

    /// Either a whitespace-only value (flagged `true`) or one with visible text
    fn maybe_blank() -> impl Strategy<Value = (String, bool)> {
        prop_oneof![
            "[ \t\n]{0,5}".prop_map(|s| (s, true)),
            "\\PC{0,8}[!-~]\\PC{0,8}".prop_map(|s| (s, false)),
        ]
    }

    proptest! {
        #[test]
        fn prop_valid_input_is_clean(
            name in valid_name(),
            email in valid_email(),
            message in valid_message(),
        ) {
            let report = filled(&name, &email, &message).validate();
            prop_assert!(report.is_clean(), "unexpected issues: {:?}", report.issues);
        }

        #[test]
        fn prop_blank_fields_are_required(
            name in maybe_blank(),
            email in maybe_blank(),
            message in maybe_blank(),
        ) {
            let report = filled(&name.0, &email.0, &message.0).validate();
            let blank: Vec<FieldId> = [name.1, email.1, message.1]
                .iter()
                .enumerate()
                .filter(|(_, blank)| **blank)
                .map(|(i, _)| FieldId(i))
                .collect();

            if blank.is_empty() {
                prop_assert!(report.issues.len() <= 1);
                prop_assert!(report
                    .issues
                    .iter()
                    .all(|i| i.kind == IssueKind::InvalidEmail && i.field == FieldId(1)));
            } else {
                prop_assert_eq!(report.failed_fields(), blank);
                prop_assert!(report.issues.iter().all(|i| i.kind == IssueKind::Required));
            }
        }

        #[test]
        fn prop_validate_is_idempotent(
            name in "\\PC{0,12}",
            email in "\\PC{0,12}",
            message in "\\PC{0,12}",
        ) {
            let form = filled(&name, &email, &message);
            prop_assert_eq!(form.validate(), form.validate());
        }
    }
}
