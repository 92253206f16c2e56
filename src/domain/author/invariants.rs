use std::sync::LazyLock;

use regex::Regex;

use super::entity::Author;
use crate::domain::text::ensure_trimmed;
use crate::domain::{DomainResult, ValidationError};

/// Optional `http(s)://www.` prefix, a host label, a dot, two word characters.
/// The match must not be followed by another `.`; the `regex` crate has no
/// look-ahead so that part is checked in `is_contact_url`.
static CONTACT_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:https?://www\.)?[a-zA-Z0-9]+\.\w{2}").expect("contact URL pattern is valid")
});

/// Validates all Author invariants
pub fn validate_author(author: &Author) -> DomainResult<()> {
    ensure_trimmed("firstName", "First name", author.first_name())?;
    ensure_trimmed("lastName", "Last name", author.last_name())?;
    ensure_trimmed("contactUrl", "Contact URL", author.contact_url())?;
    ensure_trimmed("residentCity", "Resident city", author.resident_city())?;
    ensure_trimmed("residentCountry", "Resident country", author.resident_country())?;
    validate_contact_url(author.contact_url())?;
    Ok(())
}

/// Contact URL must look like a single-level domain somewhere in the string
pub fn validate_contact_url(url: &str) -> DomainResult<()> {
    if !is_contact_url(url) {
        return Err(ValidationError::format(
            "contactUrl",
            format!("Invalid URL format: {}", url),
        ));
    }
    Ok(())
}

/// Tries every start position so a candidate rejected by the trailing-dot
/// rule does not hide a later one that passes.
fn is_contact_url(candidate: &str) -> bool {
    let mut start = 0;
    while let Some(found) = CONTACT_URL_RE.find_at(candidate, start) {
        if !candidate[found.end()..].starts_with('.') {
            return true;
        }
        let step = candidate[found.start()..]
            .chars()
            .next()
            .map_or(1, char::len_utf8);
        start = found.start() + step;
    }
    false
}

/// Critical Author Invariants:
///
/// 1. First name, last name, contact URL, city and country are non-blank
/// 2. Every field is stored trimmed
/// 3. Contact URL passes the loose shape check (bare domains allowed)
/// 4. Nothing changes after construction

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Violation;

    fn ellison() -> Author {
        Author::new(
            "Ralph",
            "Waldo Ellison",
            "http://ralphwaldoellison.com",
            "New York",
            "USA",
        )
        .unwrap()
    }

    #[test]
    fn test_valid_author() {
        let author = ellison();
        assert!(validate_author(&author).is_ok());
        assert_eq!(author.contact_url(), "http://ralphwaldoellison.com");
    }

    #[test]
    fn test_fields_are_trimmed() {
        let author = Author::new(
            "  Ursula ",
            " Le Guin\t",
            "  https://www.ursulakleguin.com  ",
            " Portland ",
            " USA ",
        )
        .unwrap();

        assert_eq!(author.first_name(), "Ursula");
        assert_eq!(author.last_name(), "Le Guin");
        assert_eq!(author.contact_url(), "https://www.ursulakleguin.com");
        assert_eq!(author.resident_city(), "Portland");
        assert_eq!(author.resident_country(), "USA");
        assert!(validate_author(&author).is_ok());
    }

    #[test]
    fn test_blank_fields_fail_with_field_name() {
        let cases = [
            (["", "B", "a.com", "C", "D"], "firstName"),
            (["A", " ", "a.com", "C", "D"], "lastName"),
            (["A", "B", "\t", "C", "D"], "contactUrl"),
            (["A", "B", "a.com", "", "D"], "residentCity"),
            (["A", "B", "a.com", "C", "  "], "residentCountry"),
        ];

        for ([first, last, url, city, country], field) in cases {
            let err = Author::new(first, last, url, city, country).unwrap_err();
            assert_eq!(err.field, field);
            assert_eq!(err.kind, Violation::Required);
        }
    }

    #[test]
    fn test_malformed_url_fails() {
        let err = Author::new("Ralph", "Ellison", "not a url", "New York", "USA").unwrap_err();
        assert_eq!(err.field, "contactUrl");
        assert_eq!(err.kind, Violation::Format);
    }

    #[test]
    fn test_url_shapes() {
        assert!(is_contact_url("example.com"));
        assert!(is_contact_url("www.example.org"));
        assert!(is_contact_url("https://www.example.io"));
        assert!(is_contact_url("http://example.co"));
        // The second label is short but a later candidate passes
        assert!(is_contact_url("a.bc.def"));

        assert!(!is_contact_url("not a url"));
        assert!(!is_contact_url("example"));
        assert!(!is_contact_url("example.c"));
        assert!(!is_contact_url("https://www.a.bc."));
        assert!(!is_contact_url(".com"));
    }
}
