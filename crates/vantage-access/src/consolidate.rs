//! Scope list consolidation and the reverse mapping used on save.
//!
//! The settings page holds a per-resource [`PermissionState`] as its
//! single source of truth; these functions convert between that state
//! and the flat scope lists the API persists.

use tracing::warn;
use vantage_core::models::permission::{LevelGrouping, PermissionState};
use vantage_core::models::scope::{Access, ScopeToken};

use crate::vocabulary::ScopeVocabulary;

/// Consolidate a flat scope list into per-resource permission levels.
///
/// Each resource ends up at the highest level any of its scopes grants,
/// under `read < write < admin`. The `project:releases` alias always
/// lands `Release` at `Admin`, regardless of other `release:*` scopes.
/// Duplicates are harmless, tokens outside the fixed vocabulary are
/// skipped, and an empty input yields the all-`NoAccess` default.
pub fn resource_permissions<S: AsRef<str>>(scopes: &[S]) -> PermissionState {
    let mut state = PermissionState::default();
    for scope in scopes {
        let Some(token) = ScopeToken::parse(scope.as_ref()) else {
            continue;
        };
        state.raise_to(token.resource, token.level);
    }
    state
}

/// Group resources by their consolidated level, excluding `NoAccess`.
///
/// Always returns all three buckets, each possibly empty.
pub fn level_grouping<S: AsRef<str>>(scopes: &[S]) -> LevelGrouping {
    let mut grouping = LevelGrouping::default();
    for (resource, access) in resource_permissions(scopes).iter() {
        match access {
            Access::NoAccess => {}
            Access::Read => grouping.read.push(resource),
            Access::Write => grouping.write.push(resource),
            Access::Admin => grouping.admin.push(resource),
        }
    }
    grouping
}

/// Flatten a permission state back into the scope list to persist.
///
/// Resources are visited in [`Resource::ALL`] order, but callers must
/// rely on set membership only, not list order. A granted level with no
/// vocabulary entry contributes nothing; the gap is logged rather than
/// raised so an in-progress edit can never hard-fail.
///
/// [`Resource::ALL`]: vantage_core::models::scope::Resource::ALL
pub fn state_to_scopes(state: &PermissionState, vocab: &ScopeVocabulary) -> Vec<String> {
    let mut scopes = Vec::new();
    for (resource, access) in state.granted() {
        match vocab.scopes_for(resource, access) {
            Some(entry) => scopes.extend_from_slice(entry),
            None => warn!(
                resource = resource.display_name(),
                level = access.as_str(),
                "no scope vocabulary entry; selection will not persist"
            ),
        }
    }
    scopes
}

#[cfg(test)]
mod tests {
    use super::*;
    use vantage_core::models::scope::Resource;

    fn scopes(list: &[&str]) -> Vec<String> {
        list.iter().map(|scope| scope.to_string()).collect()
    }

    #[test]
    fn empty_input_yields_the_default_state() {
        let state = resource_permissions::<String>(&[]);
        assert_eq!(state, PermissionState::default());
    }

    #[test]
    fn picks_the_highest_level_per_resource() {
        let state = resource_permissions(&scopes(&[
            "project:read",
            "project:write",
            "team:read",
            "team:write",
            "team:admin",
        ]));
        assert_eq!(state.get(Resource::Project), Access::Write);
        assert_eq!(state.get(Resource::Team), Access::Admin);
        assert_eq!(state.get(Resource::Event), Access::NoAccess);
    }

    #[test]
    fn duplicate_scopes_collapse() {
        let state = resource_permissions(&scopes(&[
            "member:read",
            "member:read",
            "member:read",
        ]));
        assert_eq!(state.get(Resource::Member), Access::Read);
    }

    #[test]
    fn releases_alias_always_wins_for_release() {
        for input in [
            vec!["project:releases"],
            vec!["release:read", "project:releases"],
            vec!["project:releases", "release:write"],
        ] {
            let state = resource_permissions(&scopes(&input));
            assert_eq!(state.get(Resource::Release), Access::Admin, "input {input:?}");
        }
    }

    #[test]
    fn releases_alias_does_not_touch_project() {
        let state = resource_permissions(&scopes(&["project:releases"]));
        assert_eq!(state.get(Resource::Project), Access::NoAccess);
        for resource in [
            Resource::Team,
            Resource::Event,
            Resource::Organization,
            Resource::Member,
        ] {
            assert_eq!(state.get(resource), Access::NoAccess);
        }
    }

    #[test]
    fn unrecognized_tokens_are_skipped() {
        let state = resource_permissions(&scopes(&[
            "project:read",
            "billing:admin",
            "project",
            "team:owner",
        ]));
        assert_eq!(state.get(Resource::Project), Access::Read);
        assert_eq!(state.granted().count(), 1);
    }

    #[test]
    fn grouping_excludes_no_access_and_never_double_counts() {
        let grouping = level_grouping(&scopes(&[
            "project:read",
            "project:write",
            "team:admin",
            "event:read",
        ]));
        assert_eq!(grouping.read, [Resource::Event]);
        assert_eq!(grouping.write, [Resource::Project]);
        assert_eq!(grouping.admin, [Resource::Team]);

        let mut all: Vec<Resource> = grouping
            .read
            .iter()
            .chain(&grouping.write)
            .chain(&grouping.admin)
            .copied()
            .collect();
        all.sort();
        all.dedup();
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn grouping_of_empty_input_has_three_empty_buckets() {
        let grouping = level_grouping::<String>(&[]);
        assert_eq!(grouping, LevelGrouping::default());
    }

    #[test]
    fn state_to_scopes_expands_cumulative_grants() {
        let mut state = PermissionState::default();
        state.set(Resource::Project, Access::Write);
        state.set(Resource::Member, Access::Read);

        let mut list = state_to_scopes(&state, &ScopeVocabulary::production());
        list.sort();
        assert_eq!(list, ["member:read", "project:read", "project:write"]);
    }

    #[test]
    fn no_access_contributes_nothing() {
        let state = PermissionState::default();
        assert!(state_to_scopes(&state, &ScopeVocabulary::production()).is_empty());
    }

    #[test]
    fn vocabulary_miss_contributes_nothing() {
        let mut state = PermissionState::default();
        state.set(Resource::Release, Access::Read);
        assert!(state_to_scopes(&state, &ScopeVocabulary::production()).is_empty());
    }
}
