//! Named locations and the canonical-name boundary.

use serde::{Deserialize, Serialize};

use super::Point;

/// Canonical form for every name entering the core: trimmed and lowercased.
///
/// Normalization happens exactly once, where external names arrive
/// (ingestion and query parameters). Every internal comparison assumes
/// canonical form, so equality is unambiguous.
pub fn canonical_name(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Bare corridor-intersection naming convention: `j` followed by digits.
pub fn is_junction_name(name: &str) -> bool {
    let mut chars = name.chars();
    if chars.next() != Some('j') {
        return false;
    }
    let rest = chars.as_str();
    !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit())
}

/// Category of a named location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LocationKind {
    Room,
    Furniture,
    Door,
    Junction,
    Exit,
    /// Fire-safety equipment markers. Tracked separately; never graph nodes.
    HazardEquipment,
}

/// A named point of interest in the building.
///
/// Created once per floor-plan parse and immutable afterward. The name is
/// stored canonical.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub position: Point,
    pub kind: LocationKind,
}

impl Location {
    pub fn new(name: impl Into<String>, position: Point, kind: LocationKind) -> Self {
        Self {
            name: name.into(),
            position,
            kind,
        }
    }
}
