//! Role Model

use serde::{Deserialize, Serialize};

use crate::types::{RoleId, STATUS_ACTIVE};

/// Role entity
///
/// Roles form a flat hierarchy by `level`: a lower level means more
/// authority.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    pub id: RoleId,
    pub name: String,
    pub level: i64,
    pub status_id: i64,
}

impl Role {
    pub fn is_active(&self) -> bool {
        self.status_id == STATUS_ACTIVE
    }
}

/// Assignable role list entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleOption {
    pub id: RoleId,
    pub label: String,
}

impl From<&Role> for RoleOption {
    fn from(role: &Role) -> Self {
        Self {
            id: role.id,
            label: role.name.clone(),
        }
    }
}
