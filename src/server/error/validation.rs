use std::collections::BTreeMap;
use thiserror::Error;

/// Wire name of the rules-acceptance flag, used as its error key.
pub const AGREED_TO_RULES_FIELD: &str = "agreedToRules";

/// Message reported when the applicant has not accepted the team rules.
pub const RULES_NOT_ACCEPTED_MESSAGE: &str = "يجب الموافقة على القواعد قبل التقديم";

/// Validation messages grouped by wire field name.
///
/// Fields keep every message added for them, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: &str) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Messages recorded for `field`, if any.
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn into_inner(self) -> BTreeMap<String, Vec<String>> {
        self.0
    }
}

/// Rejection produced by the application validator.
///
/// Rules acceptance is reported as its own variant so callers can tell it apart from
/// ordinary field problems; it still carries any field errors found alongside it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// One or more fields failed structural or cross-field checks.
    #[error("Application failed validation on {} field(s)", .0.len())]
    InvalidFields(FieldErrors),

    /// The applicant did not accept the team rules.
    #[error("Application submitted without accepting the team rules")]
    RulesNotAccepted(FieldErrors),
}

impl ValidationError {
    /// Field errors found besides rules acceptance.
    pub fn field_errors(&self) -> &FieldErrors {
        match self {
            Self::InvalidFields(errors) | Self::RulesNotAccepted(errors) => errors,
        }
    }

    /// Flattens into the field → messages map returned to the client.
    ///
    /// A rules-acceptance failure is listed under `agreedToRules`.
    pub fn into_field_map(self) -> BTreeMap<String, Vec<String>> {
        match self {
            Self::InvalidFields(errors) => errors.into_inner(),
            Self::RulesNotAccepted(mut errors) => {
                errors.add(AGREED_TO_RULES_FIELD, RULES_NOT_ACCEPTED_MESSAGE);
                errors.into_inner()
            }
        }
    }
}
