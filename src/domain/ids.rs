//! Strongly-typed identifiers. Cross references between entities are stored as ids
//! and resolved through the [`crate::domain::School`] registry.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self::new(s)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }
    };
}

string_id!(
    /// Student id, e.g. `S001`.
    StudentId
);
string_id!(
    /// Teacher id, e.g. `T001`.
    TeacherId
);
string_id!(
    /// Course id, e.g. `MATH101`.
    CourseId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_serialize_as_plain_strings() {
        let id = CourseId::from("MATH101");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"MATH101\"");
        assert_eq!(id.to_string(), "MATH101");
    }
}
