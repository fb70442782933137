//! Listing Parser
//!
//! Parses the tabular output of `cratos skill list --active` into
//! structured records. This is a positional text contract with the
//! producer: the column order is fixed and unversioned, so any change
//! to the producer's layout must be mirrored here by hand.

/// First line of a non-empty listing, e.g.
/// `Cratos Skills (12 total, 9 active)`.
const HEADER_PREFIX: &str = "Cratos Skills";

/// One parsed row of the skill listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkillRecord {
    /// Skill name, unique within one listing.
    pub name: String,
    /// Free-form classification column. Kept for completeness, not
    /// used for filtering.
    pub category: String,
    /// Provenance tag: `built`, `auto`, `user`.
    pub origin: String,
}

/// Parse raw listing text into records, one per well-formed row,
/// preserving source order.
///
/// Rows have the shape `<icon> <name> <category> <origin> ...`,
/// whitespace-separated; tokens past the fourth are ignored. The header
/// line, dash separators, blank lines, and rows with fewer than four
/// tokens are skipped silently.
pub fn parse_listing(text: &str) -> Vec<SkillRecord> {
    let mut records = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with(HEADER_PREFIX) {
            continue;
        }
        if line.chars().all(|c| c == '-') {
            continue;
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() < 4 {
            // Truncated row. Tolerated, not reported.
            continue;
        }

        records.push(SkillRecord {
            name: tokens[1].to_string(),
            category: tokens[2].to_string(),
            origin: tokens[3].to_string(),
        });
    }

    records
}

/// Keep only records whose origin matches `origin` exactly.
///
/// Case-sensitive, order-preserving, and without deduplication: a name
/// the producer lists twice is kept twice.
pub fn with_origin(records: Vec<SkillRecord>, origin: &str) -> Vec<SkillRecord> {
    records.into_iter().filter(|r| r.origin == origin).collect()
}
