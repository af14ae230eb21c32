//! Role preset resolution

use shared::models::RolePresetNested;
use shared::{GrantSet, LocationId, RoleId};

use crate::api::PermissionApi;
use crate::error::ClientResult;

/// Resolved location scope and grants an edit session works on
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkingState {
    pub location_ids: Vec<LocationId>,
    pub grants: GrantSet,
}

impl WorkingState {
    pub fn new(location_ids: Vec<LocationId>, grants: GrantSet) -> Self {
        Self {
            location_ids,
            grants,
        }
    }

    /// Drop every location and grant
    ///
    /// Used on failed resolutions so a stale set from another role can never
    /// survive into the form.
    pub fn clear(&mut self) {
        self.location_ids.clear();
        self.grants.clear();
    }
}

impl From<RolePresetNested> for WorkingState {
    fn from(preset: RolePresetNested) -> Self {
        Self {
            location_ids: preset.location_ids,
            grants: GrantSet::from_entries(preset.presets),
        }
    }
}

/// Fetch a role's preset and translate it into a working state
///
/// `NotFound` means the role has no defined defaults; the caller decides
/// what that does to the working state.
pub async fn resolve_role_preset<A: PermissionApi + ?Sized>(
    api: &A,
    role_id: RoleId,
) -> ClientResult<WorkingState> {
    let preset = api.role_preset(role_id).await?;
    tracing::debug!(
        role_id = %role_id,
        locations = preset.location_ids.len(),
        modules = preset.presets.len(),
        "Resolved role preset"
    );
    Ok(WorkingState::from(preset))
}
