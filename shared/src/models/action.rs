//! Action Model

use serde::{Deserialize, Serialize};

use crate::types::{ActionId, STATUS_ACTIVE};

/// Action catalog entry (an operation type grantable per module)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Action {
    pub id: ActionId,
    pub name: String,
    pub status_id: i64,
}

impl Action {
    pub fn is_active(&self) -> bool {
        self.status_id == STATUS_ACTIVE
    }
}

/// Action IDs of the active catalog entries, in catalog order
pub fn active_action_ids(actions: &[Action]) -> Vec<ActionId> {
    actions
        .iter()
        .filter(|a| a.is_active())
        .map(|a| a.id)
        .collect()
}
