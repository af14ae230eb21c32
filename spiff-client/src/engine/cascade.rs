//! Bulk cascade propagator
//!
//! Pushes a role preset's grants and/or locations to a chosen subset of the
//! users holding that role. Propagation is best-effort per user: one
//! target's failure never aborts the rest, and the caller always receives
//! one outcome per requested target.

use std::collections::{HashMap, HashSet};

use futures::future::join_all;

use shared::models::UserPresetUpdate;
use shared::{GrantSet, RoleId, UserId};

use crate::api::PermissionApi;
use crate::error::ClientResult;

/// One cascade invocation
#[derive(Debug, Clone)]
pub struct CascadeRequest {
    pub role_id: RoleId,
    pub target_user_ids: Vec<UserId>,
    /// Replace each target's override grants with the preset's grants
    pub apply_permissions: bool,
    /// Replace each target's location scope with the preset's locations
    pub apply_locations: bool,
}

/// Per-target result status
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CascadeStatus {
    /// Override replaced as requested
    Updated,
    /// Nothing requested (both apply flags false)
    Skipped,
    /// Target does not currently hold the role; nothing applied
    Rejected,
    /// Update was attempted and failed
    Failed,
}

/// Outcome for one requested target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CascadeOutcome {
    pub user_id: UserId,
    pub status: CascadeStatus,
    pub detail: Option<String>,
}

impl CascadeOutcome {
    fn new(user_id: UserId, status: CascadeStatus) -> Self {
        Self {
            user_id,
            status,
            detail: None,
        }
    }

    fn failed(user_id: UserId, detail: impl Into<String>) -> Self {
        Self {
            user_id,
            status: CascadeStatus::Failed,
            detail: Some(detail.into()),
        }
    }

    fn rejected(user_id: UserId) -> Self {
        Self {
            user_id,
            status: CascadeStatus::Rejected,
            detail: Some("user does not hold the role".into()),
        }
    }
}

/// Propagate a role preset to the requested users
///
/// Setup failures (the preset fetch or the eligibility query) fail the
/// whole call before any target is touched. Per-target failures are
/// reported in the outcome list; outcomes are returned in request order.
pub async fn cascade<A: PermissionApi + ?Sized>(
    api: &A,
    request: &CascadeRequest,
) -> ClientResult<Vec<CascadeOutcome>> {
    let targets = dedupe(&request.target_user_ids);
    if targets.is_empty() {
        return Ok(Vec::new());
    }

    tracing::info!(
        role_id = %request.role_id,
        targets = targets.len(),
        apply_permissions = request.apply_permissions,
        apply_locations = request.apply_locations,
        "Cascading role preset"
    );

    if !request.apply_permissions && !request.apply_locations {
        return Ok(targets
            .into_iter()
            .map(|u| CascadeOutcome::new(u, CascadeStatus::Skipped))
            .collect());
    }

    let preset = api.role_preset(request.role_id).await?;
    let eligible: HashSet<UserId> = api
        .users_by_role(request.role_id)
        .await?
        .into_iter()
        .map(|u| u.id)
        .collect();

    let update = UserPresetUpdate {
        location_ids: request
            .apply_locations
            .then(|| preset.location_ids.clone()),
        user_permission_presets: request
            .apply_permissions
            .then(|| GrantSet::from_entries(preset.presets.clone()).to_entries()),
    };

    let (in_scope, rejected): (Vec<UserId>, Vec<UserId>) =
        targets.iter().copied().partition(|u| eligible.contains(u));

    let updates = in_scope.iter().map(|&user_id| {
        let update = &update;
        async move {
            match api.update_user_presets(user_id, update).await {
                Ok(()) => CascadeOutcome::new(user_id, CascadeStatus::Updated),
                Err(e) => {
                    tracing::warn!(user_id = %user_id, error = %e, "Cascade target update failed");
                    CascadeOutcome::failed(user_id, e.to_string())
                }
            }
        }
    });

    let mut by_user: HashMap<UserId, CascadeOutcome> = join_all(updates)
        .await
        .into_iter()
        .map(|o| (o.user_id, o))
        .collect();
    for user_id in rejected {
        tracing::warn!(user_id = %user_id, role_id = %request.role_id, "Cascade target out of role scope");
        by_user.insert(user_id, CascadeOutcome::rejected(user_id));
    }

    // Report in request order
    Ok(targets
        .into_iter()
        .filter_map(|u| by_user.remove(&u))
        .collect())
}

fn dedupe(ids: &[UserId]) -> Vec<UserId> {
    let mut seen = HashSet::new();
    ids.iter()
        .copied()
        .filter(|id| seen.insert(*id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ClientError, ClientResult};
    use async_trait::async_trait;
    use shared::models::{
        Action, Module, Role, RolePresetNested, RolePresetSave, UserSummary,
    };
    use shared::{PresetEntry, STATUS_ACTIVE};
    use std::sync::Mutex;

    /// In-memory backend double
    struct MockApi {
        preset: Option<RolePresetNested>,
        role_users: Vec<UserSummary>,
        failing_users: HashSet<UserId>,
        updates: Mutex<Vec<(UserId, UserPresetUpdate)>>,
    }

    impl MockApi {
        fn new(preset: Option<RolePresetNested>, role_users: Vec<UserId>) -> Self {
            Self {
                preset,
                role_users: role_users
                    .into_iter()
                    .map(|id| UserSummary {
                        id,
                        name: format!("user-{}", id),
                        role_id: 5,
                        status_id: STATUS_ACTIVE,
                    })
                    .collect(),
                failing_users: HashSet::new(),
                updates: Mutex::new(Vec::new()),
            }
        }

        fn failing(mut self, user_id: UserId) -> Self {
            self.failing_users.insert(user_id);
            self
        }

        fn applied(&self) -> Vec<(UserId, UserPresetUpdate)> {
            self.updates.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PermissionApi for MockApi {
        async fn role_preset(&self, _role_id: RoleId) -> ClientResult<RolePresetNested> {
            self.preset
                .clone()
                .ok_or_else(|| ClientError::NotFound("role preset".into()))
        }

        async fn modules(&self) -> ClientResult<Vec<Module>> {
            Ok(Vec::new())
        }

        async fn actions(&self) -> ClientResult<Vec<Action>> {
            Ok(Vec::new())
        }

        async fn roles(&self) -> ClientResult<Vec<Role>> {
            Ok(Vec::new())
        }

        async fn users_by_role(&self, _role_id: RoleId) -> ClientResult<Vec<UserSummary>> {
            Ok(self.role_users.clone())
        }

        async fn update_user_presets(
            &self,
            user_id: UserId,
            update: &UserPresetUpdate,
        ) -> ClientResult<()> {
            if self.failing_users.contains(&user_id) {
                return Err(ClientError::NotFound(format!("user {}", user_id)));
            }
            self.updates.lock().unwrap().push((user_id, update.clone()));
            Ok(())
        }

        async fn create_role_preset(&self, _payload: &RolePresetSave) -> ClientResult<()> {
            Ok(())
        }

        async fn update_role_preset(
            &self,
            _preset_id: i64,
            _payload: &RolePresetSave,
        ) -> ClientResult<()> {
            Ok(())
        }
    }

    fn preset() -> RolePresetNested {
        RolePresetNested {
            location_ids: vec![10, 20],
            presets: vec![PresetEntry {
                module_ids: 1,
                action_ids: vec![1, 2],
            }],
        }
    }

    fn request(targets: &[UserId], permissions: bool, locations: bool) -> CascadeRequest {
        CascadeRequest {
            role_id: 5,
            target_user_ids: targets.to_vec(),
            apply_permissions: permissions,
            apply_locations: locations,
        }
    }

    #[tokio::test]
    async fn test_partial_failure_does_not_abort_batch() {
        // 102 was deleted server-side after the eligibility query
        let api = MockApi::new(Some(preset()), vec![101, 102]).failing(102);

        let outcomes = cascade(&api, &request(&[101, 102], true, false))
            .await
            .unwrap();

        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].user_id, 101);
        assert_eq!(outcomes[0].status, CascadeStatus::Updated);
        assert_eq!(outcomes[1].user_id, 102);
        assert_eq!(outcomes[1].status, CascadeStatus::Failed);

        // 101's update stands despite 102's failure
        let applied = api.applied();
        assert_eq!(applied.len(), 1);
        assert_eq!(applied[0].0, 101);
    }

    #[tokio::test]
    async fn test_out_of_scope_target_is_rejected() {
        let api = MockApi::new(Some(preset()), vec![101]);

        let outcomes = cascade(&api, &request(&[101, 999], true, true))
            .await
            .unwrap();

        assert_eq!(outcomes[0].status, CascadeStatus::Updated);
        assert_eq!(outcomes[1].status, CascadeStatus::Rejected);
        assert!(api.applied().iter().all(|(id, _)| *id != 999));
    }

    #[tokio::test]
    async fn test_flags_select_what_is_pushed() {
        let api = MockApi::new(Some(preset()), vec![101]);

        cascade(&api, &request(&[101], false, true)).await.unwrap();

        let applied = api.applied();
        let update = &applied[0].1;
        assert_eq!(update.location_ids.as_deref(), Some(&[10, 20][..]));
        assert!(update.user_permission_presets.is_none());
    }

    #[tokio::test]
    async fn test_neither_flag_is_reported_noop() {
        let api = MockApi::new(Some(preset()), vec![101]);

        let outcomes = cascade(&api, &request(&[101, 102], false, false))
            .await
            .unwrap();

        assert!(outcomes.iter().all(|o| o.status == CascadeStatus::Skipped));
        assert!(api.applied().is_empty());
    }

    #[tokio::test]
    async fn test_missing_preset_fails_before_any_update() {
        let api = MockApi::new(None, vec![101]);

        let result = cascade(&api, &request(&[101], true, true)).await;

        assert!(result.is_err());
        assert!(api.applied().is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_targets_reported_once() {
        let api = MockApi::new(Some(preset()), vec![101]);

        let outcomes = cascade(&api, &request(&[101, 101], true, false))
            .await
            .unwrap();

        assert_eq!(outcomes.len(), 1);
        assert_eq!(api.applied().len(), 1);
    }
}
