//! Participants sharing a ledger.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::PersonId;

/// A participant. The id is the join key for expenses and transfers; the
/// name is carried only for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
}

impl Person {
    #[must_use]
    pub fn new(id: PersonId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

/// Test helpers.
#[cfg(any(test, feature = "test-helpers"))]
impl Person {
    /// Person with id `id` named after a letter (`1 → "A"`, `2 → "B"`, ...).
    pub fn dummy(id: u64) -> Self {
        let name = u8::try_from(id.saturating_sub(1) % 26)
            .map(|offset| char::from(b'A' + offset).to_string())
            .unwrap_or_default();
        Self::new(PersonId(id), name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dummy_names_follow_alphabet() {
        assert_eq!(Person::dummy(1).name, "A");
        assert_eq!(Person::dummy(3).name, "C");
        assert_eq!(Person::dummy(3).id, PersonId(3));
    }

    #[test]
    fn person_display() {
        let p = Person::new(PersonId(9), "Alice");
        assert_eq!(format!("{p}"), "Alice (person:9)");
    }

    #[test]
    fn person_serde_roundtrip() {
        let p = Person::new(PersonId(2), "Bob");
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"{"id":2,"name":"Bob"}"#);
        let back: Person = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}
