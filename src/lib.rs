//! Cratos Skill Exporter
//!
//! Bulk-exports builtin skills from the Cratos registry to markdown.
//! Everything of substance -- skill storage, rendering, the registry
//! itself -- lives in the external `cratos` binary; this crate only
//! drives it: rebuild, list the active skills, filter by origin, and
//! run one export command per selected skill.

pub mod batch;
pub mod listing;
pub mod runner;
