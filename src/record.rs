//! Phone book record model
//!
//! A record is one directory entry: a unique 1-based integer id plus six
//! free-text fields. The core imposes no format validation on the text
//! fields; phone numbers and names are stored exactly as entered.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One entry in the phone book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneBookRecord {
    /// Unique record id, assigned by the directory, stable once assigned
    pub id: u64,
    pub last_name: String,
    pub first_name: String,
    pub middle_name: String,
    pub organization: String,
    pub work_phone: String,
    pub personal_phone: String,
}

impl fmt::Display for PhoneBookRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}, {}, {}",
            self.last_name,
            self.first_name,
            self.middle_name,
            self.organization,
            self.work_phone,
            self.personal_phone
        )
    }
}

/// Searchable text fields of a record
///
/// This is the fixed dispatch table for search criteria: a query may only
/// name one of these six fields (`id` is deliberately not searchable), and
/// each variant knows how to read its value out of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchField {
    LastName,
    FirstName,
    MiddleName,
    Organization,
    WorkPhone,
    PersonalPhone,
}

impl SearchField {
    /// Get string representation (matches the serialized field name).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LastName => "last_name",
            Self::FirstName => "first_name",
            Self::MiddleName => "middle_name",
            Self::Organization => "organization",
            Self::WorkPhone => "work_phone",
            Self::PersonalPhone => "personal_phone",
        }
    }

    /// Parse from a field name. Returns `None` for names outside the set.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "last_name" => Some(Self::LastName),
            "first_name" => Some(Self::FirstName),
            "middle_name" => Some(Self::MiddleName),
            "organization" => Some(Self::Organization),
            "work_phone" => Some(Self::WorkPhone),
            "personal_phone" => Some(Self::PersonalPhone),
            _ => None,
        }
    }

    /// All searchable fields, in record order.
    pub fn all() -> &'static [SearchField] {
        &[
            Self::LastName,
            Self::FirstName,
            Self::MiddleName,
            Self::Organization,
            Self::WorkPhone,
            Self::PersonalPhone,
        ]
    }

    /// Read this field's value out of a record.
    pub fn value_of<'a>(&self, record: &'a PhoneBookRecord) -> &'a str {
        match self {
            Self::LastName => &record.last_name,
            Self::FirstName => &record.first_name,
            Self::MiddleName => &record.middle_name,
            Self::Organization => &record.organization,
            Self::WorkPhone => &record.work_phone,
            Self::PersonalPhone => &record.personal_phone,
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
