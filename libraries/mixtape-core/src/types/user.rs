/// User domain type
use crate::types::UserId;
use serde::{Deserialize, Serialize};

/// User account
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    #[serde(default)]
    pub id: UserId,

    /// Display name
    #[serde(default)]
    pub name: String,
}

impl User {
    /// Create a new user
    pub fn new(id: impl Into<UserId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
