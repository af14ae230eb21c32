//! Grant Set
//!
//! A grant is a (module, set-of-actions) pair; a grant set is the full
//! collection of grants held by a role preset or a single user. Cell, row
//! and column toggles operate here so every caller shares the same
//! semantics.

use serde::{Deserialize, Serialize};

use crate::types::{ActionId, ModuleId};

/// Permissions granted within one module
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grant {
    pub module_id: ModuleId,
    pub action_ids: Vec<ActionId>,
}

/// Wire shape of one preset row
///
/// `module_ids` is a scalar despite the plural name; the field name is
/// load-bearing for API compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetEntry {
    pub module_ids: ModuleId,
    pub action_ids: Vec<ActionId>,
}

/// Ordered collection of grants, unique by module
///
/// Invariant: no entry ever has an empty `action_ids` — a module whose last
/// action is revoked is removed from the set entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrantSet(Vec<Grant>);

impl GrantSet {
    /// Create an empty grant set
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Build from wire entries, dropping empty rows and duplicate modules
    pub fn from_entries(entries: Vec<PresetEntry>) -> Self {
        let mut set = Self::new();
        for entry in entries {
            if entry.action_ids.is_empty() || set.grant_for(entry.module_ids).is_some() {
                continue;
            }
            set.0.push(Grant {
                module_id: entry.module_ids,
                action_ids: entry.action_ids,
            });
        }
        set
    }

    /// Convert to the wire shape for form submission
    pub fn to_entries(&self) -> Vec<PresetEntry> {
        self.0
            .iter()
            .map(|g| PresetEntry {
                module_ids: g.module_id,
                action_ids: g.action_ids.clone(),
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Remove every grant
    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Grant> {
        self.0.iter()
    }

    /// Grant entry for a module, if any action is granted there
    pub fn grant_for(&self, module_id: ModuleId) -> Option<&Grant> {
        self.0.iter().find(|g| g.module_id == module_id)
    }

    /// True iff the action is granted for the module
    pub fn is_granted(&self, module_id: ModuleId, action_id: ActionId) -> bool {
        self.grant_for(module_id)
            .is_some_and(|g| g.action_ids.contains(&action_id))
    }

    /// Toggle a single cell
    ///
    /// Revoking the last action of a module removes the module entry;
    /// granting into an absent module creates the entry at the end.
    pub fn toggle_cell(&mut self, module_id: ModuleId, action_id: ActionId) {
        if self.is_granted(module_id, action_id) {
            self.remove_action(module_id, action_id);
        } else {
            self.add_action(module_id, action_id);
        }
    }

    /// Toggle one action across the visible modules (tri-state)
    ///
    /// If the action is granted in every visible module it is revoked from
    /// exactly those; otherwise it is granted to each visible module lacking
    /// it. Modules outside `visible_modules` are never touched.
    pub fn toggle_column(&mut self, visible_modules: &[ModuleId], action_id: ActionId) {
        if visible_modules.is_empty() {
            return;
        }
        let all_granted = visible_modules
            .iter()
            .all(|&m| self.is_granted(m, action_id));
        for &module_id in visible_modules {
            if all_granted {
                self.remove_action(module_id, action_id);
            } else {
                self.add_action(module_id, action_id);
            }
        }
    }

    /// Toggle every action of one module (tri-state)
    ///
    /// If all of `all_action_ids` are granted the module entry is cleared;
    /// otherwise the module is granted the full action list.
    pub fn toggle_row(&mut self, module_id: ModuleId, all_action_ids: &[ActionId]) {
        if all_action_ids.is_empty() {
            return;
        }
        let all_granted = all_action_ids
            .iter()
            .all(|&a| self.is_granted(module_id, a));
        if all_granted {
            self.0.retain(|g| g.module_id != module_id);
        } else {
            for &action_id in all_action_ids {
                self.add_action(module_id, action_id);
            }
        }
    }

    fn add_action(&mut self, module_id: ModuleId, action_id: ActionId) {
        match self.0.iter_mut().find(|g| g.module_id == module_id) {
            Some(grant) => {
                if !grant.action_ids.contains(&action_id) {
                    grant.action_ids.push(action_id);
                }
            }
            None => self.0.push(Grant {
                module_id,
                action_ids: vec![action_id],
            }),
        }
    }

    fn remove_action(&mut self, module_id: ModuleId, action_id: ActionId) {
        if let Some(grant) = self.0.iter_mut().find(|g| g.module_id == module_id) {
            grant.action_ids.retain(|&a| a != action_id);
            if grant.action_ids.is_empty() {
                self.0.retain(|g| g.module_id != module_id);
            }
        }
    }
}

impl FromIterator<Grant> for GrantSet {
    fn from_iter<I: IntoIterator<Item = Grant>>(iter: I) -> Self {
        Self::from_entries(
            iter.into_iter()
                .map(|g| PresetEntry {
                    module_ids: g.module_id,
                    action_ids: g.action_ids,
                })
                .collect(),
        )
    }
}
