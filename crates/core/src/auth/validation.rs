//! Field validation for the auth forms.

use super::types::{SignInInput, SignUpInput};
use crate::validation::{ValidationContext, ValidationErrors, ValidationKind};

/// Validates a sign-up submission: name ≥ 2 chars, plausible email,
/// password ≥ 6 chars.
///
/// # Errors
///
/// Returns the accumulated `ValidationErrors` on any violation.
pub fn validate_sign_up(input: &SignUpInput) -> Result<(), ValidationErrors> {
    let mut ctx = ValidationContext::new();
    ctx.require_min_len("name", &input.name, 2);
    ctx.require_email("email", &input.email);
    if input.password.is_empty() {
        ctx.fail("password", ValidationKind::Required);
    } else if input.password.chars().count() < 6 {
        ctx.fail("password", ValidationKind::TooShort);
    }
    ctx.finish()
}

/// Validates a sign-in submission: plausible email, non-empty password.
///
/// # Errors
///
/// Returns the accumulated `ValidationErrors` on any violation.
pub fn validate_sign_in(input: &SignInInput) -> Result<(), ValidationErrors> {
    let mut ctx = ValidationContext::new();
    ctx.require_email("email", &input.email);
    if input.password.is_empty() {
        ctx.fail("password", ValidationKind::Required);
    }
    ctx.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_up_happy_path() {
        let input = SignUpInput {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "secret1".to_string(),
        };
        assert!(validate_sign_up(&input).is_ok());
    }

    #[test]
    fn test_sign_up_short_password() {
        let input = SignUpInput {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "12345".to_string(),
        };
        let errs = validate_sign_up(&input).unwrap_err();
        assert_eq!(errs.kind_for("password"), Some(ValidationKind::TooShort));
    }

    #[test]
    fn test_sign_up_all_fields_bad() {
        let input = SignUpInput {
            name: "A".to_string(),
            email: "nope".to_string(),
            password: String::new(),
        };
        let errs = validate_sign_up(&input).unwrap_err();
        assert_eq!(errs.0.len(), 3);
        assert_eq!(errs.kind_for("name"), Some(ValidationKind::TooShort));
        assert_eq!(errs.kind_for("email"), Some(ValidationKind::InvalidEmail));
        assert_eq!(errs.kind_for("password"), Some(ValidationKind::Required));
    }

    #[test]
    fn test_sign_in_requires_password_but_any_length() {
        let ok = SignInInput {
            email: "a@b.co".to_string(),
            password: "x".to_string(),
        };
        assert!(validate_sign_in(&ok).is_ok());

        let missing = SignInInput {
            email: "a@b.co".to_string(),
            password: String::new(),
        };
        let errs = validate_sign_in(&missing).unwrap_err();
        assert_eq!(errs.kind_for("password"), Some(ValidationKind::Required));
    }
}
