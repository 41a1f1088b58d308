//! Scope vocabulary — the persisted scope strings behind each
//! resource/level choice on the settings page.

use std::collections::BTreeMap;

use vantage_core::models::scope::{Access, RELEASES_ALIAS, Resource};

/// Immutable table mapping a `(resource, level)` choice to the raw scope
/// strings it persists as.
///
/// Grants are cumulative: a single level may expand to multiple
/// underlying scopes (`Project`/`Write` persists both `project:read`
/// and `project:write`).
#[derive(Debug, Clone, Default)]
pub struct ScopeVocabulary {
    entries: BTreeMap<(Resource, Access), Vec<String>>,
}

impl ScopeVocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// The production table.
    ///
    /// `Release` carries only an `Admin` entry backed by the historical
    /// `project:releases` alias; a read or write selection for releases
    /// has nothing to persist as. That gap is real and callers of the
    /// reverse mapping surface it.
    pub fn production() -> Self {
        let mut vocab = ScopeVocabulary::new();
        for resource in [
            Resource::Project,
            Resource::Team,
            Resource::Event,
            Resource::Organization,
            Resource::Member,
        ] {
            let raw = resource.as_raw();
            let read = format!("{raw}:read");
            let write = format!("{raw}:write");
            let admin = format!("{raw}:admin");
            vocab.insert(resource, Access::Read, &[&read]);
            vocab.insert(resource, Access::Write, &[&read, &write]);
            vocab.insert(resource, Access::Admin, &[&read, &write, &admin]);
        }
        vocab.insert(Resource::Release, Access::Admin, &[RELEASES_ALIAS]);
        vocab
    }

    /// Register the scope strings persisted for a resource/level choice.
    pub fn insert(&mut self, resource: Resource, level: Access, scopes: &[&str]) {
        self.entries.insert(
            (resource, level),
            scopes.iter().map(|scope| scope.to_string()).collect(),
        );
    }

    /// The scope strings for a choice, or `None` when the table has no
    /// entry. A miss yields nothing; callers decide how to report it.
    pub fn scopes_for(&self, resource: Resource, level: Access) -> Option<&[String]> {
        self.entries.get(&(resource, level)).map(Vec::as_slice)
    }
}
