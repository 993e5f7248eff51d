use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Platform exchange codes for Chinese equity and futures venues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Exchange {
    Sse,
    Szse,
    Bse,
    Cffex,
    Shfe,
    Dce,
    Czce,
    Ine,
    Gfex,
}

impl Exchange {
    pub const ALL: [Self; 9] = [
        Self::Sse,
        Self::Szse,
        Self::Bse,
        Self::Cffex,
        Self::Shfe,
        Self::Dce,
        Self::Czce,
        Self::Ine,
        Self::Gfex,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sse => "SSE",
            Self::Szse => "SZSE",
            Self::Bse => "BSE",
            Self::Cffex => "CFFEX",
            Self::Shfe => "SHFE",
            Self::Dce => "DCE",
            Self::Czce => "CZCE",
            Self::Ine => "INE",
            Self::Gfex => "GFEX",
        }
    }
}

impl Display for Exchange {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Exchange {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|exchange| exchange.as_str() == normalized)
            .ok_or(ValidationError::InvalidExchange { value: normalized })
    }
}
