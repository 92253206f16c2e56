use serde::Serialize;

use super::invariants::validate_email_input;
use crate::domain::text::require_text;
use crate::domain::DomainResult;

/// Organization recorded when a reviewer gives none
pub const DEFAULT_ORGANIZATION: &str = "Independent";

/// Someone who submits reviews.
///
/// Two reviewers count as the same person when their first and last names
/// match exactly (see [`Reviewer::same_person`]). Email is not part of that
/// identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reviewer {
    /// Given name, part of the reviewer's identity
    first_name: String,

    /// Family name, part of the reviewer's identity
    last_name: String,

    /// Contact address (local@domain.tld shape)
    email: String,

    /// Affiliation, "Independent" when none was given
    organization: String,
}

impl Reviewer {
    /// Create a new Reviewer
    /// A missing or blank organization becomes [`DEFAULT_ORGANIZATION`]
    pub fn new(
        first_name: &str,
        last_name: &str,
        email: &str,
        organization: Option<&str>,
    ) -> DomainResult<Self> {
        let first_name = require_text("firstName", "First name", first_name)?;
        let last_name = require_text("lastName", "Last name", last_name)?;
        // Shape check runs on the raw input; padding is a format error
        validate_email_input(email)?;
        let email = require_text("email", "Email", email)?;

        let organization = organization
            .map(str::trim)
            .filter(|org| !org.is_empty())
            .unwrap_or(DEFAULT_ORGANIZATION)
            .to_string();

        Ok(Self {
            first_name,
            last_name,
            email,
            organization,
        })
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn organization(&self) -> &str {
        &self.organization
    }

    /// Case-sensitive match on (first name, last name)
    pub fn same_person(&self, other: &Reviewer) -> bool {
        self.first_name == other.first_name && self.last_name == other.last_name
    }
}

impl std::fmt::Display for Reviewer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{},{},{},{}",
            self.first_name, self.last_name, self.email, self.organization
        )
    }
}
