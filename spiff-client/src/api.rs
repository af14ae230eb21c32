//! Permission API
//!
//! Typed calls consumed by the engine. The trait is the seam the engine is
//! tested through; `HttpPermissionApi` is the network implementation.

use async_trait::async_trait;

use shared::models::{
    Action, Module, Role, RolePresetNested, RolePresetSave, UserPresetUpdate, UserSummary,
};
use shared::{RoleId, UserId};

use crate::error::ClientResult;
use crate::http::HttpClient;

/// Backend API surface the permission engine consumes
#[async_trait]
pub trait PermissionApi: Send + Sync {
    /// Role's default location scope and grants, or NotFound
    async fn role_preset(&self, role_id: RoleId) -> ClientResult<RolePresetNested>;

    /// Full module catalog (caller filters to active)
    async fn modules(&self) -> ClientResult<Vec<Module>>;

    /// Full action catalog (caller filters to active)
    async fn actions(&self) -> ClientResult<Vec<Action>>;

    /// All roles, including inactive ones
    async fn roles(&self) -> ClientResult<Vec<Role>>;

    /// Users currently holding a role (cascade eligibility scope)
    async fn users_by_role(&self, role_id: RoleId) -> ClientResult<Vec<UserSummary>>;

    /// Replace parts of one user's saved override
    async fn update_user_presets(
        &self,
        user_id: UserId,
        update: &UserPresetUpdate,
    ) -> ClientResult<()>;

    /// Create a role preset
    async fn create_role_preset(&self, payload: &RolePresetSave) -> ClientResult<()>;

    /// Update an existing role preset
    async fn update_role_preset(&self, preset_id: i64, payload: &RolePresetSave)
        -> ClientResult<()>;
}

/// Network implementation of [`PermissionApi`]
#[derive(Debug, Clone)]
pub struct HttpPermissionApi {
    http: HttpClient,
}

impl HttpPermissionApi {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl PermissionApi for HttpPermissionApi {
    async fn role_preset(&self, role_id: RoleId) -> ClientResult<RolePresetNested> {
        self.http
            .get(&format!("api/role-presets/nested/{}", role_id))
            .await
    }

    async fn modules(&self) -> ClientResult<Vec<Module>> {
        self.http.get("api/modules").await
    }

    async fn actions(&self) -> ClientResult<Vec<Action>> {
        self.http.get("api/actions").await
    }

    async fn roles(&self) -> ClientResult<Vec<Role>> {
        self.http.get("api/roles?all=true").await
    }

    async fn users_by_role(&self, role_id: RoleId) -> ClientResult<Vec<UserSummary>> {
        self.http.get(&format!("api/users?role_id={}", role_id)).await
    }

    async fn update_user_presets(
        &self,
        user_id: UserId,
        update: &UserPresetUpdate,
    ) -> ClientResult<()> {
        self.http
            .put_empty(&format!("api/users/{}", user_id), update)
            .await
    }

    async fn create_role_preset(&self, payload: &RolePresetSave) -> ClientResult<()> {
        self.http.post_empty("api/role-presets", payload).await
    }

    async fn update_role_preset(
        &self,
        preset_id: i64,
        payload: &RolePresetSave,
    ) -> ClientResult<()> {
        self.http
            .put_empty(&format!("api/role-presets/{}", preset_id), payload)
            .await
    }
}
