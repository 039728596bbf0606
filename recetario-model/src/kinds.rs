//! The two closed enumerations every record carries.
//!
//! Wire tokens are the kebab-case Spanish values stored snapshots use,
//! so existing catalogs deserialize unchanged.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Parse error for the closed enumerations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown value: {0}")]
pub struct UnknownVariant(pub String);

/// The cuisine category of a recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CuisineType {
    Ramen,
    Sushi,
    Donburi,
    Tempura,
    CurryJapones,
    Okonomiyaki,
    Yakitori,
    Bento,
    Wagashi,
}

impl CuisineType {
    /// Every cuisine type, in menu order.
    pub const ALL: [CuisineType; 9] = [
        CuisineType::Ramen,
        CuisineType::Sushi,
        CuisineType::Donburi,
        CuisineType::Tempura,
        CuisineType::CurryJapones,
        CuisineType::Okonomiyaki,
        CuisineType::Yakitori,
        CuisineType::Bento,
        CuisineType::Wagashi,
    ];

    /// The wire token for this cuisine type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            CuisineType::Ramen => "ramen",
            CuisineType::Sushi => "sushi",
            CuisineType::Donburi => "donburi",
            CuisineType::Tempura => "tempura",
            CuisineType::CurryJapones => "curry-japones",
            CuisineType::Okonomiyaki => "okonomiyaki",
            CuisineType::Yakitori => "yakitori",
            CuisineType::Bento => "bento",
            CuisineType::Wagashi => "wagashi",
        }
    }
}

impl fmt::Display for CuisineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CuisineType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CuisineType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownVariant(s.to_string()))
    }
}

/// How demanding a recipe is to prepare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Facil,
    Media,
    Dificil,
}

impl Difficulty {
    /// Every difficulty level, easiest first.
    pub const ALL: [Difficulty; 3] = [Difficulty::Facil, Difficulty::Media, Difficulty::Dificil];

    /// The wire token for this difficulty.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Facil => "facil",
            Difficulty::Media => "media",
            Difficulty::Dificil => "dificil",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| UnknownVariant(s.to_string()))
    }
}
