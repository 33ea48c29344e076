//! User entity representing a directory member.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A registered user.
///
/// Fields are private: a `User` is immutable once constructed, and every
/// change produces a new record (see [`User::with_display_name`]). The
/// service layer is responsible for normalizing and validating input before
/// construction; [`User::is_valid`] only reports whether the record meets
/// the business rules, it is not enforced here.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    id: Uuid,
    username: String,
    email: String,
    display_name: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl User {
    /// Creates a new user with a generated id and creation timestamp.
    pub fn new(username: String, email: String, display_name: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            username,
            email,
            display_name,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// Rehydrates a user from stored fields. Used by repositories.
    pub fn from_parts(
        id: Uuid,
        username: String,
        email: String,
        display_name: Option<String>,
        created_at: DateTime<Utc>,
        updated_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            username,
            email,
            display_name,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// Returns a copy with a new display name and a refreshed `updated_at`.
    ///
    /// Identity, username, email and `created_at` are preserved.
    pub fn with_display_name(&self, display_name: Option<String>) -> Self {
        Self {
            id: self.id,
            username: self.username.clone(),
            email: self.email.clone(),
            display_name,
            created_at: self.created_at,
            updated_at: Some(Utc::now()),
        }
    }

    /// Checks whether the record meets the business rules.
    pub fn is_valid(&self) -> bool {
        self.username.len() >= 3 && self.email.contains('@')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_creation() {
        let user = User::new(
            "alice".to_string(),
            "alice@example.com".to_string(),
            Some("Alice Smith".to_string()),
        );

        assert_eq!(user.username(), "alice");
        assert_eq!(user.email(), "alice@example.com");
        assert_eq!(user.display_name(), Some("Alice Smith"));
        assert!(user.updated_at().is_none());
        assert!(user.is_valid());
    }

    #[test]
    fn test_distinct_ids() {
        let a = User::new("alice".to_string(), "a@example.com".to_string(), None);
        let b = User::new("bob".to_string(), "b@example.com".to_string(), None);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_with_display_name_preserves_identity() {
        let user = User::new("alice".to_string(), "alice@example.com".to_string(), None);
        let renamed = user.with_display_name(Some("Alice".to_string()));

        assert_eq!(renamed.id(), user.id());
        assert_eq!(renamed.username(), user.username());
        assert_eq!(renamed.email(), user.email());
        assert_eq!(renamed.created_at(), user.created_at());
        assert_eq!(renamed.display_name(), Some("Alice"));
        assert!(renamed.updated_at().is_some());

        // Original record is untouched.
        assert!(user.display_name().is_none());
        assert!(user.updated_at().is_none());
    }

    #[test]
    fn test_is_valid_rules() {
        let short = User::new("ab".to_string(), "ab@example.com".to_string(), None);
        assert!(!short.is_valid());

        let bad_email = User::new("alice".to_string(), "not-an-email".to_string(), None);
        assert!(!bad_email.is_valid());
    }
}
