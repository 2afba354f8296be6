//! Crop catalog models

use serde::{Deserialize, Serialize};

/// Supported crop types
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CropType {
    Rice,
    Wheat,
    Maize,
    Sugarcane,
    Cotton,
    Pulses,
    Chillies,
    Turmeric,
    Groundnut,
    Jute,
}

/// All cataloged crops, in display order
pub const ALL_CROPS: &[CropType] = &[
    CropType::Rice,
    CropType::Wheat,
    CropType::Maize,
    CropType::Sugarcane,
    CropType::Cotton,
    CropType::Pulses,
    CropType::Chillies,
    CropType::Turmeric,
    CropType::Groundnut,
    CropType::Jute,
];

impl CropType {
    /// Parse a crop name as submitted by clients. Accepts common aliases.
    pub fn parse(s: &str) -> Option<CropType> {
        match s.trim().to_lowercase().as_str() {
            "rice" | "paddy" => Some(CropType::Rice),
            "wheat" => Some(CropType::Wheat),
            "maize" | "corn" => Some(CropType::Maize),
            "sugarcane" => Some(CropType::Sugarcane),
            "cotton" => Some(CropType::Cotton),
            "pulses" | "pulse" => Some(CropType::Pulses),
            "chillies" | "chilli" | "chili" => Some(CropType::Chillies),
            "turmeric" => Some(CropType::Turmeric),
            "groundnut" | "peanut" => Some(CropType::Groundnut),
            "jute" => Some(CropType::Jute),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CropType::Rice => "rice",
            CropType::Wheat => "wheat",
            CropType::Maize => "maize",
            CropType::Sugarcane => "sugarcane",
            CropType::Cotton => "cotton",
            CropType::Pulses => "pulses",
            CropType::Chillies => "chillies",
            CropType::Turmeric => "turmeric",
            CropType::Groundnut => "groundnut",
            CropType::Jute => "jute",
        }
    }

    /// Recommended varieties for the crop. Advisory only, never used in
    /// yield math.
    pub fn varieties(&self) -> &'static [&'static str] {
        match self {
            CropType::Rice => &["Swarna", "MTU-1010", "Lalat", "Pooja"],
            CropType::Wheat => &["HD-2967", "PBW-550"],
            CropType::Maize => &["DHM-117", "Ganga-5"],
            CropType::Sugarcane => &["Co-86032", "CoJ-64"],
            CropType::Cotton => &["Bunny Bt", "MCU-5"],
            CropType::Pulses => &["Arhar", "Moong", "Biri"],
            CropType::Chillies => &["Guntur Sannam", "Byadgi"],
            CropType::Turmeric => &["Roma", "Lakadong"],
            CropType::Groundnut => &["TMV-2", "Kadiri-6"],
            CropType::Jute => &["JRO-524", "JRO-8432"],
        }
    }
}

impl std::fmt::Display for CropType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for CropType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CropType::parse(s).ok_or(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        assert_eq!(CropType::parse("corn"), Some(CropType::Maize));
        assert_eq!(CropType::parse("Paddy"), Some(CropType::Rice));
        assert_eq!(CropType::parse("  RICE "), Some(CropType::Rice));
        assert_eq!(CropType::parse("brinjal"), None);
    }

    #[test]
    fn test_round_trip_names() {
        for crop in ALL_CROPS {
            assert_eq!(CropType::parse(crop.as_str()), Some(*crop));
        }
    }

    #[test]
    fn test_varieties_nonempty() {
        for crop in ALL_CROPS {
            assert!(!crop.varieties().is_empty());
        }
    }
}
