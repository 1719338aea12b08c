use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CivilStatus {
    Single,
    Married,
}

impl CivilStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Married => "married",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "single" => Some(Self::Single),
            "married" => Some(Self::Married),
            _ => None,
        }
    }

    /// Number of adults in the household for this civil status.
    pub fn adults(&self) -> u32 {
        match self {
            Self::Single => 1,
            Self::Married => 2,
        }
    }
}

/// Church affiliation recognized by the municipal church tax registers.
///
/// `None` and `Other` are not liable for church tax; the three recognized
/// denominations map to per-municipality multipliers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Religion {
    None,
    RomanCatholic,
    Protestant,
    ChristCatholic,
    Other,
}

impl Religion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::RomanCatholic => "roman_catholic",
            Self::Protestant => "protestant",
            Self::ChristCatholic => "christ_catholic",
            Self::Other => "other",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "none" => Some(Self::None),
            "roman_catholic" => Some(Self::RomanCatholic),
            "protestant" => Some(Self::Protestant),
            "christ_catholic" => Some(Self::ChristCatholic),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    /// Whether this affiliation is liable for church tax at all.
    pub fn is_recognized(&self) -> bool {
        matches!(
            self,
            Self::RomanCatholic | Self::Protestant | Self::ChristCatholic
        )
    }
}
