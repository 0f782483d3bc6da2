use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which classification colours the map.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// Fine-grained logistics zones.
    #[default]
    Zone,
    /// Coarser delivery areas; zones sharing a Gebiet look identical.
    Gebiet,
}

impl DisplayMode {
    pub const ALL: [Self; 2] = [Self::Zone, Self::Gebiet];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Zone => "zone",
            Self::Gebiet => "gebiet",
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names neither display mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseModeError(pub String);

impl fmt::Display for ParseModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown display mode '{}' (expected 'zone' or 'gebiet')", self.0)
    }
}

impl std::error::Error for ParseModeError {}

impl FromStr for DisplayMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "zone" | "zones" | "zonen" => Ok(Self::Zone),
            "gebiet" | "gebiete" | "liefergebiet" => Ok(Self::Gebiet),
            _ => Err(ParseModeError(s.to_owned())),
        }
    }
}
