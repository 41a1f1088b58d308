//! Per-resource and per-level permission projections.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::scope::{Access, Resource};

/// Per-resource permission levels — the canonical UI selection state.
///
/// Every resource is always present; unselected resources sit at
/// [`Access::NoAccess`]. Iteration follows [`Resource::ALL`] order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionState {
    levels: BTreeMap<Resource, Access>,
}

impl Default for PermissionState {
    fn default() -> Self {
        Self {
            levels: Resource::ALL
                .iter()
                .map(|&resource| (resource, Access::NoAccess))
                .collect(),
        }
    }
}

impl PermissionState {
    pub fn get(&self, resource: Resource) -> Access {
        self.levels.get(&resource).copied().unwrap_or_default()
    }

    /// Overwrite a resource's level, as the settings form does when the
    /// user picks from a dropdown.
    pub fn set(&mut self, resource: Resource, access: Access) {
        self.levels.insert(resource, access);
    }

    /// Raise a resource's level if `access` exceeds the current one.
    ///
    /// Consolidation folds scope lists with this, so duplicate and
    /// lower-level scopes collapse without a tie-break rule.
    pub fn raise_to(&mut self, resource: Resource, access: Access) {
        let level = self.levels.entry(resource).or_default();
        *level = (*level).max(access);
    }

    /// All resources with their current level, in [`Resource::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Resource, Access)> + '_ {
        self.levels.iter().map(|(&resource, &access)| (resource, access))
    }

    /// Only the resources granted something beyond `NoAccess`.
    pub fn granted(&self) -> impl Iterator<Item = (Resource, Access)> + '_ {
        self.iter().filter(|(_, access)| *access != Access::NoAccess)
    }
}

/// Per-level resource grouping for level-centric display
/// ("these resources are read-only").
///
/// Always carries exactly the three grantable buckets; `NoAccess`
/// resources are excluded and a resource appears in at most one bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelGrouping {
    pub read: Vec<Resource>,
    pub write: Vec<Resource>,
    pub admin: Vec<Resource>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_all_no_access() {
        let state = PermissionState::default();
        for resource in Resource::ALL {
            assert_eq!(state.get(resource), Access::NoAccess);
        }
        assert_eq!(state.granted().count(), 0);
    }

    #[test]
    fn raise_to_never_lowers() {
        let mut state = PermissionState::default();
        state.raise_to(Resource::Project, Access::Write);
        state.raise_to(Resource::Project, Access::Read);
        assert_eq!(state.get(Resource::Project), Access::Write);

        state.raise_to(Resource::Project, Access::Admin);
        assert_eq!(state.get(Resource::Project), Access::Admin);
    }

    #[test]
    fn set_overwrites_in_both_directions() {
        let mut state = PermissionState::default();
        state.set(Resource::Team, Access::Admin);
        state.set(Resource::Team, Access::Read);
        assert_eq!(state.get(Resource::Team), Access::Read);
    }

    #[test]
    fn iteration_follows_settings_page_order() {
        let state = PermissionState::default();
        let order: Vec<Resource> = state.iter().map(|(resource, _)| resource).collect();
        assert_eq!(order, Resource::ALL);
    }

    #[test]
    fn serializes_as_display_name_map() {
        let mut state = PermissionState::default();
        state.set(Resource::Release, Access::Admin);
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["Release"], "admin");
        assert_eq!(json["Project"], "no-access");
        assert_eq!(json["Organization"], "no-access");
    }
}
