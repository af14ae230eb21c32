//! User Model

use serde::{Deserialize, Serialize};

use crate::grants::PresetEntry;
use crate::types::{LocationId, RoleId, UserId, STATUS_ACTIVE};

/// User row as returned by `GET /users?role_id={id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: UserId,
    pub name: String,
    pub role_id: RoleId,
    pub status_id: i64,
}

impl UserSummary {
    pub fn is_active(&self) -> bool {
        self.status_id == STATUS_ACTIVE
    }
}

/// Partial user update carrying the resolved override
///
/// Only the fields being pushed are serialized; a cascade may replace
/// grants, locations, or both.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserPresetUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_ids: Option<Vec<LocationId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_permission_presets: Option<Vec<PresetEntry>>,
}
