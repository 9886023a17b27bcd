//! Core type definitions with validation.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation errors for core types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided value was empty.
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },
}

/// Generates a validated string ID newtype with common trait implementations.
macro_rules! define_string_id {
    (
        $(#[$meta:meta])*
        $name:ident, $field_name:literal
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Creates a new ID after validation.
            pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
                let id = id.into();
                if id.trim().is_empty() {
                    return Err(ValidationError::Empty { field: $field_name });
                }
                Ok(Self(id))
            }

            /// Returns the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }
    };
}

define_string_id!(
    /// A validated agenda row identifier.
    ///
    /// Row IDs are opaque and must be unique within one meeting's agenda.
    /// Uniqueness is checked by [`crate::Agenda`] when rows are inserted.
    RowId, "row ID"
);

define_string_id!(
    /// A validated meeting identifier.
    MeetingId, "meeting ID"
);

define_string_id!(
    /// A validated club member identifier.
    MemberId, "member ID"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_id_rejects_empty() {
        assert!(RowId::new("").is_err());
        assert!(RowId::new("   ").is_err());
        assert!(RowId::new("row-1").is_ok());
    }

    #[test]
    fn row_id_serde_roundtrip() {
        let id = RowId::new("row-123").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"row-123\"");
        let parsed: RowId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn row_id_serde_rejects_empty() {
        let result: Result<RowId, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }

    #[test]
    fn meeting_id_error_names_field() {
        let err = MeetingId::new("").unwrap_err();
        assert_eq!(err.to_string(), "meeting ID cannot be empty");
    }

    #[test]
    fn member_id_parses_from_str() {
        let id: MemberId = "m-42".parse().unwrap();
        assert_eq!(id.as_str(), "m-42");
        assert!("".parse::<MemberId>().is_err());
    }

    #[test]
    fn member_id_as_ref() {
        let id = MemberId::new("alex").unwrap();
        let s: &str = id.as_ref();
        assert_eq!(s, "alex");
    }
}
