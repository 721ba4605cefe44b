// File: helpbot-core/src/auth.rs

use std::collections::{HashMap, HashSet};
use parking_lot::RwLock;
use helpbot_common::models::Requester;
use helpbot_common::traits::AuthorizationOracle;

/// In-memory group membership table. Group names are case-insensitive.
#[derive(Debug, Default)]
pub struct StaticGroupAuthorizer {
    groups: RwLock<HashMap<String, HashSet<String>>>,
}

impl StaticGroupAuthorizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_member(&self, group: &str, requester_id: &str) {
        self.groups
            .write()
            .entry(group.to_lowercase())
            .or_default()
            .insert(requester_id.to_string());
    }

    /// Returns whether the requester was a member.
    pub fn remove_member(&self, group: &str, requester_id: &str) -> bool {
        let mut groups = self.groups.write();
        match groups.get_mut(&group.to_lowercase()) {
            Some(members) => members.remove(requester_id),
            None => false,
        }
    }
}

impl AuthorizationOracle for StaticGroupAuthorizer {
    fn is_in_group(&self, requester: &Requester, group: &str) -> bool {
        self.groups
            .read()
            .get(&group.to_lowercase())
            .map_or(false, |members| members.contains(&requester.id))
    }
}
