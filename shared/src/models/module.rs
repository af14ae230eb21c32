//! Module Model

use serde::{Deserialize, Serialize};

use crate::types::{ModuleId, STATUS_ACTIVE};

/// Module catalog entry (a functional area actions apply to)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Module {
    pub id: ModuleId,
    pub name: String,
    /// Optional short name used by the matrix filter
    #[serde(default)]
    pub alias: Option<String>,
    pub status_id: i64,
}

impl Module {
    pub fn is_active(&self) -> bool {
        self.status_id == STATUS_ACTIVE
    }

    /// True when the filter text matches the module name or alias
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&query)
            || self
                .alias
                .as_ref()
                .is_some_and(|a| a.to_lowercase().contains(&query))
    }
}

/// Module IDs currently passing the matrix text filter
///
/// Filtering only narrows the scope of row/column toggles; it never touches
/// the underlying grant set.
pub fn visible_module_ids(modules: &[Module], query: &str) -> Vec<ModuleId> {
    modules
        .iter()
        .filter(|m| m.matches(query))
        .map(|m| m.id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn module(id: ModuleId, name: &str, alias: Option<&str>) -> Module {
        Module {
            id,
            name: name.to_string(),
            alias: alias.map(|a| a.to_string()),
            status_id: STATUS_ACTIVE,
        }
    }

    #[test]
    fn test_filter_matches_name_and_alias() {
        let modules = vec![
            module(1, "Users", None),
            module(2, "Locations", Some("stores")),
            module(3, "Transactions", None),
        ];

        assert_eq!(visible_module_ids(&modules, ""), vec![1, 2, 3]);
        assert_eq!(visible_module_ids(&modules, "user"), vec![1]);
        assert_eq!(visible_module_ids(&modules, "STORE"), vec![2]);
        assert!(visible_module_ids(&modules, "payroll").is_empty());
    }
}
