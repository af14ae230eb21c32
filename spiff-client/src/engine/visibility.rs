//! Role visibility filter
//!
//! Administrators may only assign roles of equal or lesser authority, i.e.
//! a numerically equal-or-greater level. Inactive roles are never
//! assignable, but an edited user's existing role must still be resolvable
//! so the form can warn about it.

use shared::models::{Role, RoleOption};
use shared::RoleId;

/// A current role that no longer passes the visibility filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnavailableRole {
    pub id: RoleId,
    pub label: String,
}

/// Assignable role options plus the edited user's out-of-filter role
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleVisibility {
    /// Every entry here is active and within the acting admin's authority
    pub assignable: Vec<RoleOption>,
    /// The edited user's current role when it fails the filter (deactivated,
    /// or its level was raised above the admin's reach)
    pub unavailable_current: Option<UnavailableRole>,
}

/// Restrict which roles an acting administrator may assign
pub fn visible_roles(
    all_roles: &[Role],
    acting_admin_level: i64,
    editing_user_role_id: Option<RoleId>,
) -> RoleVisibility {
    let assignable: Vec<RoleOption> = all_roles
        .iter()
        .filter(|r| r.is_active() && r.level >= acting_admin_level)
        .map(RoleOption::from)
        .collect();

    let unavailable_current = editing_user_role_id.and_then(|current_id| {
        if assignable.iter().any(|o| o.id == current_id) {
            return None;
        }
        all_roles
            .iter()
            .find(|r| r.id == current_id)
            .map(|r| UnavailableRole {
                id: r.id,
                label: r.name.clone(),
            })
    });

    RoleVisibility {
        assignable,
        unavailable_current,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::STATUS_ACTIVE;

    fn role(id: RoleId, name: &str, level: i64, active: bool) -> Role {
        Role {
            id,
            name: name.to_string(),
            level,
            status_id: if active { STATUS_ACTIVE } else { 0 },
        }
    }

    #[test]
    fn test_level_and_status_bounds() {
        // Admin at level 2: only the active level-2 role is assignable
        let roles = vec![
            role(1, "Director", 1, true),
            role(2, "Manager", 2, true),
            role(3, "Clerk", 3, false),
        ];

        let visibility = visible_roles(&roles, 2, None);

        assert_eq!(visibility.assignable.len(), 1);
        assert_eq!(visibility.assignable[0].id, 2);
        assert!(visibility.unavailable_current.is_none());
        assert!(visibility
            .assignable
            .iter()
            .all(|o| roles.iter().any(|r| r.id == o.id && r.is_active() && r.level >= 2)));
    }

    #[test]
    fn test_deactivated_current_role_is_resolved_but_not_assignable() {
        let roles = vec![role(2, "Manager", 2, true), role(3, "Clerk", 3, false)];

        let visibility = visible_roles(&roles, 2, Some(3));

        assert_eq!(visibility.assignable.len(), 1);
        assert_eq!(
            visibility.unavailable_current,
            Some(UnavailableRole {
                id: 3,
                label: "Clerk".to_string()
            })
        );
    }

    #[test]
    fn test_current_role_above_admin_authority_is_flagged() {
        let roles = vec![role(1, "Director", 1, true), role(2, "Manager", 2, true)];

        let visibility = visible_roles(&roles, 2, Some(1));

        assert_eq!(visibility.assignable.len(), 1);
        assert_eq!(visibility.unavailable_current.as_ref().map(|u| u.id), Some(1));
    }

    #[test]
    fn test_current_role_passing_filter_is_not_flagged() {
        let roles = vec![role(2, "Manager", 2, true)];
        let visibility = visible_roles(&roles, 2, Some(2));
        assert!(visibility.unavailable_current.is_none());
    }
}
