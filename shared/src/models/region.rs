//! Region classification models

use serde::{Deserialize, Serialize};

/// Coarse geographic bucket used to select default soil and yield
/// multipliers. `Unknown` is an explicit sentinel, never a null.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RegionCategory {
    Coastal,
    Western,
    Northern,
    Southern,
    Unknown,
}

impl RegionCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            RegionCategory::Coastal => "coastal",
            RegionCategory::Western => "western",
            RegionCategory::Northern => "northern",
            RegionCategory::Southern => "southern",
            RegionCategory::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for RegionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
