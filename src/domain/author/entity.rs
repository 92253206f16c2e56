use serde::Serialize;

use super::invariants::validate_contact_url;
use crate::domain::text::require_text;
use crate::domain::DomainResult;

/// The person who wrote a book, with where to reach them.
///
/// Immutable once built. Books hold authors through `Arc` so one author can
/// be shared by many books.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    /// Given name
    first_name: String,

    /// Family name
    last_name: String,

    /// Where to reach the author (loose URL shape)
    contact_url: String,

    /// City of residence
    resident_city: String,

    /// Country of residence
    resident_country: String,
}

impl Author {
    /// Create a new Author
    /// Every field must be non-blank and is stored trimmed; the contact URL
    /// must also pass the URL shape check
    pub fn new(
        first_name: &str,
        last_name: &str,
        contact_url: &str,
        resident_city: &str,
        resident_country: &str,
    ) -> DomainResult<Self> {
        let first_name = require_text("firstName", "First name", first_name)?;
        let last_name = require_text("lastName", "Last name", last_name)?;
        let contact_url = require_text("contactUrl", "Contact URL", contact_url)?;
        let resident_city = require_text("residentCity", "Resident city", resident_city)?;
        let resident_country =
            require_text("residentCountry", "Resident country", resident_country)?;

        validate_contact_url(&contact_url)?;

        Ok(Self {
            first_name,
            last_name,
            contact_url,
            resident_city,
            resident_country,
        })
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn contact_url(&self) -> &str {
        &self.contact_url
    }

    pub fn resident_city(&self) -> &str {
        &self.resident_city
    }

    pub fn resident_country(&self) -> &str {
        &self.resident_country
    }
}

impl std::fmt::Display for Author {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{},{},{},{},{}",
            self.first_name,
            self.last_name,
            self.contact_url,
            self.resident_city,
            self.resident_country
        )
    }
}
