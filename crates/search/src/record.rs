//! Searchable records.

use serde::{Deserialize, Deserializer, Serialize};
use std::borrow::Cow;

/// A field the ranker compares the query against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Role,
    Department,
    Status,
    /// Composite `"<first_name> <last_name>"`
    FullName,
}

impl Field {
    /// Every matched field, in scoring order.
    pub const ALL: [Field; 7] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Role,
        Field::Department,
        Field::Status,
        Field::FullName,
    ];

    /// Field name as it appears in output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::FirstName => "first_name",
            Field::LastName => "last_name",
            Field::Email => "email",
            Field::Role => "role",
            Field::Department => "department",
            Field::Status => "status",
            Field::FullName => "full_name",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A record that can be ranked against a free-text query.
///
/// Implementations must be total: a missing value is an empty string.
pub trait Searchable {
    /// Returns the text of `field` for this record.
    fn field(&self, field: Field) -> Cow<'_, str>;
}

/// Opaque record identifier.
///
/// Holds whatever JSON value the source used (number, string or anything
/// else) and writes it back unchanged. Never compared against a query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(serde_json::Value);

impl RecordId {
    /// The id as an unsigned integer, if it is one.
    pub fn as_u64(&self) -> Option<u64> {
        self.0.as_u64()
    }

    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }
}

impl From<u64> for RecordId {
    fn from(id: u64) -> Self {
        Self(serde_json::Value::from(id))
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self(serde_json::Value::from(id))
    }
}

impl From<String> for RecordId {
    fn from(id: String) -> Self {
        Self(serde_json::Value::String(id))
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.0 {
            serde_json::Value::Null => Ok(()),
            serde_json::Value::String(s) => f.write_str(s),
            other => write!(f, "{}", other),
        }
    }
}

/// An employee directory entry.
///
/// Deserialization accepts both `camelCase` and `snake_case` field names.
/// Missing, `null` or non-string values for text fields become empty strings,
/// and `id` accepts any JSON value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Identifier, not used for matching
    #[serde(default)]
    pub id: RecordId,
    #[serde(default, alias = "first_name", deserialize_with = "lenient_string")]
    pub first_name: String,
    #[serde(default, alias = "last_name", deserialize_with = "lenient_string")]
    pub last_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub role: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub department: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub status: String,
}

impl Employee {
    /// Creates an employee with a name and empty remaining fields.
    pub fn new(id: u64, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id: RecordId::from(id),
            first_name: first_name.into(),
            last_name: last_name.into(),
            ..Self::default()
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = department.into();
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// `"<first_name> <last_name>"`
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Searchable for Employee {
    fn field(&self, field: Field) -> Cow<'_, str> {
        match field {
            Field::FirstName => Cow::Borrowed(self.first_name.as_str()),
            Field::LastName => Cow::Borrowed(self.last_name.as_str()),
            Field::Email => Cow::Borrowed(self.email.as_str()),
            Field::Role => Cow::Borrowed(self.role.as_str()),
            Field::Department => Cow::Borrowed(self.department.as_str()),
            Field::Status => Cow::Borrowed(self.status.as_str()),
            Field::FullName => Cow::Owned(self.full_name()),
        }
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => s,
        _ => String::new(),
    })
}
