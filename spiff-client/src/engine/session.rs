//! Edit session reconciler
//!
//! One session per user-create or user-edit form. The session owns the
//! snapshots taken at load time and the working state the matrix operates
//! on, and decides on every role change whether to adopt the new role's
//! preset defaults or restore the user's previously saved override.
//!
//! Resolutions are asynchronous; they re-enter the session through
//! [`EditSession::apply_resolution`], which discards responses for roles
//! that are no longer current.

use shared::{ActionId, GrantSet, ModuleId, PresetEntry, RoleId};

use crate::error::ClientResult;

use super::resolver::WorkingState;

/// What a role change requires of the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleChange {
    /// Resolve this role's preset and feed the result back through
    /// `apply_resolution`
    Resolve(RoleId),
    /// The original override was restored; nothing to fetch
    Restored,
    /// Edit session whose snapshot is not loaded yet; change ignored
    Deferred,
}

/// How an applied resolution landed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionOutcome {
    /// Preset adopted into the working state
    Applied,
    /// Response belongs to a superseded role; discarded
    Stale,
    /// Edit session snapshot not loaded yet; change ignored
    Deferred,
    /// Role has no defined defaults; working state cleared
    ClearedNoDefaults,
    /// Resolution failed; working state cleared so no stale grants survive
    ClearedFailed(String),
}

/// Permission edit session for one user form
#[derive(Debug, Default)]
pub struct EditSession {
    /// Role assignment loaded from storage (edit mode only)
    original_role_id: Option<RoleId>,
    /// Saved override as initially loaded (edit mode only)
    original_override: Option<WorkingState>,
    /// True for edit mode, even before the snapshot arrives
    edit_mode: bool,
    /// Role currently selected in the form
    working_role_id: Option<RoleId>,
    working: WorkingState,
}

impl EditSession {
    /// Session for creating a new user
    pub fn create() -> Self {
        Self::default()
    }

    /// Session for editing an existing user
    ///
    /// Role changes are ignored until [`EditSession::load_snapshot`] runs;
    /// the reconciler must not fire before the original state exists.
    pub fn edit() -> Self {
        Self {
            edit_mode: true,
            ..Self::default()
        }
    }

    /// Install the stored role and override once they arrive
    pub fn load_snapshot(&mut self, role_id: RoleId, saved: WorkingState) {
        self.original_role_id = Some(role_id);
        self.working_role_id = Some(role_id);
        self.working = saved.clone();
        self.original_override = Some(saved);
        tracing::debug!(role_id = %role_id, "Loaded edit session snapshot");
    }

    /// React to the working role changing
    pub fn change_role(&mut self, new_role_id: RoleId) -> RoleChange {
        if self.edit_mode {
            let Some(original_role_id) = self.original_role_id else {
                return RoleChange::Deferred;
            };
            if new_role_id == original_role_id {
                // The saved override is authoritative here; the role's
                // current defaults may have drifted from the user's
                // customizations.
                self.working_role_id = Some(new_role_id);
                if let Some(original) = &self.original_override {
                    self.working = original.clone();
                }
                return RoleChange::Restored;
            }
        }
        self.working_role_id = Some(new_role_id);
        RoleChange::Resolve(new_role_id)
    }

    /// Feed a finished resolution back into the session
    ///
    /// The response is only applied when it belongs to the still-current
    /// working role; late responses for superseded roles are dropped.
    /// Failed resolutions clear the working state instead of leaving
    /// another role's grants behind.
    pub fn apply_resolution(
        &mut self,
        role_id: RoleId,
        result: ClientResult<WorkingState>,
    ) -> ResolutionOutcome {
        if self.working_role_id != Some(role_id) {
            tracing::debug!(
                role_id = %role_id,
                current = ?self.working_role_id,
                "Discarding stale role preset resolution"
            );
            return ResolutionOutcome::Stale;
        }
        match result {
            Ok(state) => {
                self.working = state;
                ResolutionOutcome::Applied
            }
            Err(e) if e.is_not_found() => {
                self.working.clear();
                tracing::info!(role_id = %role_id, "Role has no preset; cleared working grants");
                ResolutionOutcome::ClearedNoDefaults
            }
            Err(e) => {
                self.working.clear();
                tracing::warn!(role_id = %role_id, error = %e, "Role preset resolution failed");
                ResolutionOutcome::ClearedFailed(e.to_string())
            }
        }
    }

    /// Change role and resolve in one step
    ///
    /// Convenience wrapper for call sites that can hold the session across
    /// the fetch; the stale guard still applies.
    pub async fn change_role_with<A: crate::api::PermissionApi + ?Sized>(
        &mut self,
        api: &A,
        new_role_id: RoleId,
    ) -> ResolutionOutcome {
        match self.change_role(new_role_id) {
            RoleChange::Resolve(role_id) => {
                let result = super::resolver::resolve_role_preset(api, role_id).await;
                self.apply_resolution(role_id, result)
            }
            RoleChange::Restored => ResolutionOutcome::Applied,
            RoleChange::Deferred => ResolutionOutcome::Deferred,
        }
    }

    // ========== Matrix operations ==========

    pub fn is_granted(&self, module_id: ModuleId, action_id: ActionId) -> bool {
        self.working.grants.is_granted(module_id, action_id)
    }

    pub fn toggle_cell(&mut self, module_id: ModuleId, action_id: ActionId) {
        self.working.grants.toggle_cell(module_id, action_id);
    }

    pub fn toggle_column(&mut self, visible_modules: &[ModuleId], action_id: ActionId) {
        self.working.grants.toggle_column(visible_modules, action_id);
    }

    pub fn toggle_row(&mut self, module_id: ModuleId, all_action_ids: &[ActionId]) {
        self.working.grants.toggle_row(module_id, all_action_ids);
    }

    // ========== Accessors ==========

    pub fn working_role_id(&self) -> Option<RoleId> {
        self.working_role_id
    }

    pub fn working_state(&self) -> &WorkingState {
        &self.working
    }

    pub fn is_edit_mode(&self) -> bool {
        self.edit_mode
    }

    /// Wire entries of the working grants, for the user submit payload
    pub fn submission_presets(&self) -> Vec<PresetEntry> {
        self.working.grants.to_entries()
    }

    /// Working location scope, for the user submit payload
    pub fn submission_location_ids(&self) -> Vec<shared::LocationId> {
        self.working.location_ids.clone()
    }
}
