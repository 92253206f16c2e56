use std::sync::LazyLock;

use regex::Regex;

use super::entity::Reviewer;
use crate::domain::text::{ensure_trimmed, require_text};
use crate::domain::{DomainResult, ValidationError};

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid"));

/// Validates all Reviewer invariants
pub fn validate_reviewer(reviewer: &Reviewer) -> DomainResult<()> {
    ensure_trimmed("firstName", "First name", reviewer.first_name())?;
    ensure_trimmed("lastName", "Last name", reviewer.last_name())?;
    ensure_trimmed("email", "Email", reviewer.email())?;
    ensure_trimmed("organization", "Organization", reviewer.organization())?;
    validate_email(reviewer.email())?;
    Ok(())
}

/// Blank check first, then the shape check on the untrimmed value
pub(crate) fn validate_email_input(email: &str) -> DomainResult<()> {
    require_text("email", "Email", email)?;
    validate_email(email)
}

/// local@domain.tld shape only, no RFC 5322
pub fn validate_email(email: &str) -> DomainResult<()> {
    if !EMAIL_RE.is_match(email) {
        return Err(ValidationError::format(
            "email",
            format!("Invalid email format: {}", email),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::reviewer::DEFAULT_ORGANIZATION;
    use crate::domain::Violation;

    #[test]
    fn test_valid_reviewer() {
        let reviewer = Reviewer::new("Alice", "Wonder", "alice@wonder.com", Some("ACME")).unwrap();
        assert!(validate_reviewer(&reviewer).is_ok());
        assert_eq!(reviewer.organization(), "ACME");
    }

    #[test]
    fn test_organization_defaults() {
        for org in [None, Some(""), Some("   ")] {
            let reviewer = Reviewer::new("Bob", "Builder", "bob@builder.com", org).unwrap();
            assert_eq!(reviewer.organization(), DEFAULT_ORGANIZATION);
            assert_eq!(reviewer.organization(), "Independent");
        }
    }

    #[test]
    fn test_fields_are_trimmed() {
        let reviewer =
            Reviewer::new(" Charlie ", " Brown ", "charlie@brown.com", Some("  Peanuts ")).unwrap();
        assert_eq!(reviewer.first_name(), "Charlie");
        assert_eq!(reviewer.last_name(), "Brown");
        assert_eq!(reviewer.email(), "charlie@brown.com");
        assert_eq!(reviewer.organization(), "Peanuts");
        assert!(validate_reviewer(&reviewer).is_ok());
    }

    #[test]
    fn test_padded_email_is_rejected() {
        for padded in [" alice@wonder.com ", "alice@wonder.com\t", "\nalice@wonder.com"] {
            let err = Reviewer::new("Alice", "Wonder", padded, None).unwrap_err();
            assert_eq!(err.field, "email");
            assert_eq!(err.kind, Violation::Format);
            assert!(err.message.starts_with("Invalid email format"));
        }
    }

    #[test]
    fn test_blank_required_fields_fail() {
        let err = Reviewer::new(" ", "Wonder", "alice@wonder.com", None).unwrap_err();
        assert_eq!((err.field, err.kind), ("firstName", Violation::Required));

        let err = Reviewer::new("Alice", "", "alice@wonder.com", None).unwrap_err();
        assert_eq!((err.field, err.kind), ("lastName", Violation::Required));

        let err = Reviewer::new("Alice", "Wonder", "\t", None).unwrap_err();
        assert_eq!((err.field, err.kind), ("email", Violation::Required));
    }

    #[test]
    fn test_email_shapes() {
        assert!(validate_email("a@b.c").is_ok());
        assert!(validate_email("first.last@mail.example.com").is_ok());

        let malformed = [
            "alice",
            "alice@wonder",
            "@wonder.com",
            "alice@@wonder.com",
            "al ice@wonder.com",
            "alice@wonder.",
        ];
        for bad in malformed {
            let err = validate_email(bad).unwrap_err();
            assert_eq!(err.kind, Violation::Format, "{bad} should be rejected");
        }
    }

    #[test]
    fn test_same_person_is_name_pair() {
        let a = Reviewer::new("Alice", "Wonder", "alice@wonder.com", None).unwrap();
        let b = Reviewer::new("Alice", "Wonder", "other@mail.org", Some("ACME")).unwrap();
        let c = Reviewer::new("alice", "Wonder", "alice@wonder.com", None).unwrap();

        assert!(a.same_person(&b));
        assert!(!a.same_person(&c));
    }
}
