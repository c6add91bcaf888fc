//! The console user as supplied by the session backend.

use crate::errors::StrongroomError;
use crate::types::Role;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A signed-in console user.
///
/// `role` stays the raw session string so an unrecognized role can still be
/// shown to the user while granting nothing. [`User::role_class`] is the only
/// place the string is interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Login name.
    pub name: String,
    /// Raw role string from the session backend. Recognized values are
    /// `"DEV"`, `"OPS"` and `"MASTER"`, compared case-sensitively.
    pub role: String,
    /// Applications the user belongs to, by uppercase identifier.
    #[serde(default)]
    pub memberships: Vec<String>,
}

impl User {
    /// Creates a user with no memberships.
    pub fn new(name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            memberships: Vec::new(),
        }
    }

    /// Sets the user's application memberships.
    pub fn with_memberships(mut self, memberships: Vec<String>) -> Self {
        self.memberships = memberships;
        self
    }

    /// The recognized role, or `None` when the raw string is not exactly one
    /// of the known wire forms.
    pub fn role_class(&self) -> Option<Role> {
        Role::parse(&self.role)
    }

    /// Whether the user belongs to `application`, ignoring ASCII case.
    /// Membership lists are stored uppercased; lookups may not be.
    pub fn is_member_of(&self, application: &str) -> bool {
        self.memberships
            .iter()
            .any(|membership| membership.eq_ignore_ascii_case(application))
    }
}

/// Supplies the acting user for the current session.
#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// Returns the signed-in user with role and memberships resolved.
    async fn current_user(&self) -> Result<User, StrongroomError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_class_exact_match() {
        assert_eq!(User::new("alice", "DEV").role_class(), Some(Role::Dev));
        assert_eq!(User::new("bob", "OPS").role_class(), Some(Role::Ops));
        assert_eq!(User::new("carol", "MASTER").role_class(), Some(Role::Master));
    }

    #[test]
    fn test_role_class_rejects_near_misses() {
        assert_eq!(User::new("dan", "dev").role_class(), None);
        assert_eq!(User::new("erin", "Master").role_class(), None);
        assert_eq!(User::new("frank", "PROD").role_class(), None);
        assert_eq!(User::new("grace", "").role_class(), None);
        assert_eq!(User::new("heidi", "OPS ").role_class(), None);
    }

    #[test]
    fn test_is_member_of_ignores_ascii_case() {
        let user = User::new("alice", "DEV")
            .with_memberships(vec!["TESTAPP".to_string(), "PAYROLL".to_string()]);

        assert!(user.is_member_of("TESTAPP"));
        assert!(user.is_member_of("testapp"));
        assert!(user.is_member_of("Payroll"));
        assert!(!user.is_member_of("OTHER"));
        assert!(!user.is_member_of(""));
    }

    #[test]
    fn test_memberships_default_to_empty_on_deserialize() {
        let json = r#"{"name": "alice", "role": "DEV"}"#;
        let user: User = serde_json::from_str(json).unwrap();

        assert!(user.memberships.is_empty());
        assert!(!user.is_member_of("TESTAPP"));
    }

    #[test]
    fn test_user_round_trips_through_json() {
        let user = User::new("alice", "MASTER").with_memberships(vec!["TESTAPP".to_string()]);

        let serialized = serde_json::to_string(&user).unwrap();
        let deserialized: User = serde_json::from_str(&serialized).unwrap();
        assert_eq!(user, deserialized);
    }

    struct FixedSession(User);

    #[async_trait]
    impl SessionProvider for FixedSession {
        async fn current_user(&self) -> Result<User, StrongroomError> {
            Ok(self.0.clone())
        }
    }

    #[tokio::test]
    async fn test_session_provider_returns_current_user() {
        let session = FixedSession(User::new("alice", "OPS"));

        let user = session.current_user().await.unwrap();
        assert_eq!(user.name, "alice");
        assert_eq!(user.role_class(), Some(Role::Ops));
    }
}
