//! Permission matrix resolution engine
//!
//! Everything between the backend API and the form: preset resolution,
//! the role-change reconciler, role visibility, and bulk cascade.

pub mod cascade;
pub mod resolver;
pub mod session;
pub mod visibility;

pub use cascade::{cascade, CascadeOutcome, CascadeRequest, CascadeStatus};
pub use resolver::{resolve_role_preset, WorkingState};
pub use session::{EditSession, ResolutionOutcome, RoleChange};
pub use visibility::{visible_roles, RoleVisibility, UnavailableRole};
