//! VANTAGE Access — scope/permission consolidation for the
//! access-control settings page.

pub mod consolidate;
pub mod vocabulary;

pub use consolidate::{level_grouping, resource_permissions, state_to_scopes};
pub use vocabulary::ScopeVocabulary;
