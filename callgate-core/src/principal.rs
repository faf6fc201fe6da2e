//! The authenticated caller.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::permission::{self, Permission};
use crate::tenant::CustomerId;

/// The principal ("agent") a request acts as.
///
/// Built once per request by the authentication step (token or access
/// key) and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub id: Uuid,
    pub customer_id: CustomerId,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub name: String,
    pub permission: Permission,
}

impl Principal {
    pub fn new(id: Uuid, customer_id: CustomerId, permission: Permission) -> Self {
        Self {
            id,
            customer_id,
            username: String::new(),
            name: String::new(),
            permission,
        }
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn is_super_admin(&self) -> bool {
        self.permission.contains(Permission::PROJECT_SUPER_ADMIN)
    }

    /// See [`permission::check`].
    pub fn has_permission(&self, customer_id: CustomerId, required: Permission) -> bool {
        permission::check(self, customer_id, required)
    }
}
