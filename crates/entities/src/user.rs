//! User-related entity definitions.

use serde::{Deserialize, Serialize};

/// Identifier of a user. Supplied by the caller, never assigned by a store.
pub type UserId = i64;

/// Role a user plays in the practice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    Admin,
    Customer,
    Hygienist,
    Dentist,
}

/// A person who can sign in: staff or customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier, stored exactly as given.
    #[serde(default)]
    pub id: UserId,
    pub last_name: String,
    pub first_name: String,
    /// Email address; the key used for authentication lookups.
    pub email: String,
    #[serde(default)]
    pub role: Role,
}

impl User {
    /// Creates a new user with the default role.
    pub fn new(id: UserId, email: impl Into<String>) -> Self {
        Self {
            id,
            last_name: String::new(),
            first_name: String::new(),
            email: email.into(),
            role: Role::default(),
        }
    }

    /// Sets the first and last name.
    pub fn with_name(mut self, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self.last_name = last_name.into();
        self
    }

    /// Sets the role.
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }
}
