//! Role Preset Model

use serde::{Deserialize, Serialize};

use crate::grants::PresetEntry;
use crate::types::{LocationId, RoleId, UserId};

/// Nested role preset response (`GET /role-presets/nested/{role_id}`)
///
/// The role's default location scope and grant rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RolePresetNested {
    pub location_ids: Vec<LocationId>,
    pub presets: Vec<PresetEntry>,
}

/// Role preset save payload (`POST /role-presets`, `PUT /role-presets/{id}`)
///
/// The two `apply_*` flags trigger the bulk cascade over `user_ids`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RolePresetSave {
    pub role_id: RoleId,
    pub location_ids: Vec<LocationId>,
    pub presets: Vec<PresetEntry>,
    pub status_id: i64,
    pub user_ids: Vec<UserId>,
    pub apply_permissions_to_users: bool,
    pub apply_locations_to_users: bool,
}
