//! Group entity: a named collection with an optional description.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A user group.
///
/// Immutable like [`super::User`]; validation is a predicate the service
/// layer applies, not a construction-time guarantee.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    id: Uuid,
    name: String,
    description: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl Group {
    /// Creates a new group with a generated id and creation timestamp.
    pub fn new(name: String, description: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            description,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// Rehydrates a group from stored fields. Used by repositories.
    pub fn from_parts(
        id: Uuid,
        name: String,
        description: Option<String>,
        created_at: DateTime<Utc>,
        updated_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// Checks whether the record meets the business rules.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_creation() {
        let group = Group::new("Platform".to_string(), Some("Core team".to_string()));

        assert_eq!(group.name(), "Platform");
        assert_eq!(group.description(), Some("Core team"));
        assert!(group.is_valid());
    }

    #[test]
    fn test_is_valid_rejects_blank_name() {
        assert!(!Group::new(String::new(), None).is_valid());
        assert!(!Group::new("   ".to_string(), None).is_valid());
    }
}
