//! Spiff Client - console-side permission engine
//!
//! Typed HTTP access to the console backend plus the permission matrix
//! resolution engine: role preset resolution, the role-change reconciler,
//! role visibility filtering and bulk cascade propagation.

pub mod api;
pub mod config;
pub mod engine;
pub mod error;
pub mod http;

pub use api::{HttpPermissionApi, PermissionApi};
pub use config::ClientConfig;
pub use engine::{
    cascade, resolve_role_preset, visible_roles, CascadeOutcome, CascadeRequest, CascadeStatus,
    EditSession, ResolutionOutcome, RoleChange, RoleVisibility, UnavailableRole, WorkingState,
};
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;

// Re-export shared types for convenience
pub use shared::models::{Action, Module, Role, RoleOption, RolePresetNested, RolePresetSave};
pub use shared::{Grant, GrantSet, PresetEntry};
