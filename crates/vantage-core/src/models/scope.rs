//! Access-control scope model.
//!
//! A scope is a string token of the form `"<resource>:<level>"` granting
//! a specific access right, e.g. `project:write`.

use serde::{Deserialize, Serialize};

/// Historical alias granting full admin access to releases.
///
/// Predates the generic `resource:level` grammar and maps to
/// [`Resource::Release`] at [`Access::Admin`], not to `Project`.
pub const RELEASES_ALIAS: &str = "project:releases";

/// A coarse-grained access-control category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Resource {
    Project,
    Team,
    Release,
    Event,
    Organization,
    Member,
}

impl Resource {
    /// Every resource, in the order the settings page lists them.
    ///
    /// Reverse-mapped scope lists are emitted in this order.
    pub const ALL: [Resource; 6] = [
        Resource::Project,
        Resource::Team,
        Resource::Release,
        Resource::Event,
        Resource::Organization,
        Resource::Member,
    ];

    /// Parse the raw key used inside scope strings.
    pub fn parse_raw(raw: &str) -> Option<Self> {
        match raw {
            "project" => Some(Resource::Project),
            "team" => Some(Resource::Team),
            "release" => Some(Resource::Release),
            "event" => Some(Resource::Event),
            "org" => Some(Resource::Organization),
            "member" => Some(Resource::Member),
            _ => None,
        }
    }

    /// The raw key used inside scope strings.
    pub fn as_raw(&self) -> &'static str {
        match self {
            Resource::Project => "project",
            Resource::Team => "team",
            Resource::Release => "release",
            Resource::Event => "event",
            Resource::Organization => "org",
            Resource::Member => "member",
        }
    }

    /// Human-readable name shown in the settings UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            Resource::Project => "Project",
            Resource::Team => "Team",
            Resource::Release => "Release",
            Resource::Event => "Event",
            Resource::Organization => "Organization",
            Resource::Member => "Member",
        }
    }
}

/// Access granularity for a resource, lowest to highest.
///
/// The derived order (`NoAccess < Read < Write < Admin`) is the order
/// consolidation folds with.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "kebab-case")]
pub enum Access {
    #[default]
    NoAccess,
    Read,
    Write,
    Admin,
}

impl Access {
    /// Parse a level token from a scope string.
    ///
    /// `no-access` is a UI state, never a wire token, so only the three
    /// grantable levels parse.
    pub fn parse_level(raw: &str) -> Option<Self> {
        match raw {
            "read" => Some(Access::Read),
            "write" => Some(Access::Write),
            "admin" => Some(Access::Admin),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Access::NoAccess => "no-access",
            Access::Read => "read",
            Access::Write => "write",
            Access::Admin => "admin",
        }
    }
}

/// A scope string parsed into its resource and level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScopeToken {
    pub resource: Resource,
    pub level: Access,
}

impl ScopeToken {
    /// Parse `"resource:level"`, carving out the releases alias first.
    ///
    /// Returns `None` for anything outside the fixed vocabulary; callers
    /// skip such tokens rather than failing — malformed scopes are the
    /// server's data-quality problem, not a runtime error here.
    pub fn parse(scope: &str) -> Option<Self> {
        if scope == RELEASES_ALIAS {
            return Some(ScopeToken {
                resource: Resource::Release,
                level: Access::Admin,
            });
        }
        let (raw_resource, raw_level) = scope.split_once(':')?;
        Some(ScopeToken {
            resource: Resource::parse_raw(raw_resource)?,
            level: Access::parse_level(raw_level)?,
        })
    }
}
