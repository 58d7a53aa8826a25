//! Structured field-level validation.
//!
//! Validation failures are reported as an ordered list of
//! `(field, kind)` pairs rather than an ad-hoc map, so callers can render
//! them per field and tests can assert on exact kinds.

use serde::Serialize;
use thiserror::Error;

/// What went wrong with a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationKind {
    /// The field was missing or empty.
    Required,
    /// The value is shorter than the allowed minimum.
    TooShort,
    /// The value is below the allowed minimum.
    BelowMinimum,
    /// The value is above the allowed maximum.
    AboveMaximum,
    /// The value is not a plausible email address.
    InvalidEmail,
    /// The value is not one of the supported choices.
    InvalidChoice,
}

impl ValidationKind {
    /// Human-readable message for form display.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Required => "This field is required",
            Self::TooShort => "Value is too short",
            Self::BelowMinimum => "Value is below the minimum",
            Self::AboveMaximum => "Value is above the maximum",
            Self::InvalidEmail => "Invalid email address",
            Self::InvalidChoice => "Unsupported choice",
        }
    }
}

/// A single field validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Name of the offending field.
    pub field: &'static str,
    /// Failure kind.
    pub kind: ValidationKind,
}

impl FieldError {
    /// Creates a new field error.
    #[must_use]
    pub const fn new(field: &'static str, kind: ValidationKind) -> Self {
        Self { field, kind }
    }
}

/// An ordered collection of field validation failures.
///
/// Field order follows declaration order of the validated form, so the
/// first error always belongs to the topmost offending field.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("validation failed on {} field(s)", .0.len())]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    /// Returns the error kind recorded for `field`, if any.
    #[must_use]
    pub fn kind_for(&self, field: &str) -> Option<ValidationKind> {
        self.0.iter().find(|e| e.field == field).map(|e| e.kind)
    }

    /// Returns true when no failures were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Collects field errors and converts into a `Result`.
#[derive(Debug, Default)]
pub struct ValidationContext {
    errors: Vec<FieldError>,
}

impl ValidationContext {
    /// Creates an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a failure for `field`.
    pub fn fail(&mut self, field: &'static str, kind: ValidationKind) {
        self.errors.push(FieldError::new(field, kind));
    }

    /// Requires `value` to be at least `min` characters after trimming.
    pub fn require_min_len(&mut self, field: &'static str, value: &str, min: usize) {
        let len = value.trim().chars().count();
        if len == 0 {
            self.fail(field, ValidationKind::Required);
        } else if len < min {
            self.fail(field, ValidationKind::TooShort);
        }
    }

    /// Requires `value` to look like an email address.
    pub fn require_email(&mut self, field: &'static str, value: &str) {
        if value.trim().is_empty() {
            self.fail(field, ValidationKind::Required);
        } else if !is_plausible_email(value) {
            self.fail(field, ValidationKind::InvalidEmail);
        }
    }

    /// Finishes validation, returning `Ok(())` when no failures were recorded.
    ///
    /// # Errors
    ///
    /// Returns the accumulated `ValidationErrors` otherwise.
    pub fn finish(self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(self.errors))
        }
    }
}

/// Lightweight email shape check: one `@`, non-empty local part, and a dot
/// somewhere after it. Deliverability is the mail system's problem.
#[must_use]
pub fn is_plausible_email(value: &str) -> bool {
    let value = value.trim();
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}
