//! Common types for the shared crate
//!
//! Utility types used across the framework

/// Module catalog ID
pub type ModuleId = i64;

/// Action catalog ID
pub type ActionId = i64;

/// Role ID
pub type RoleId = i64;

/// Location ID
pub type LocationId = i64;

/// User ID
pub type UserId = i64;

/// Wire value of `status_id` for active catalog entries
pub const STATUS_ACTIVE: i64 = 1;
