//! Pure lookup and format functions over the closed enumerations.

use chrono::DateTime;
use recetario_model::{CuisineType, Difficulty};

/// Shown when a cuisine type has no dedicated image.
pub const DEFAULT_IMAGE: &str = "Imagenes/ramen.jpeg";

/// Display label for a cuisine type.
#[must_use]
pub const fn cuisine_label(tipo: CuisineType) -> &'static str {
    match tipo {
        CuisineType::Ramen => "Ramen",
        CuisineType::Sushi => "Sushi",
        CuisineType::Donburi => "Donburi",
        CuisineType::Tempura => "Tempura",
        CuisineType::CurryJapones => "Curry japonés",
        CuisineType::Okonomiyaki => "Okonomiyaki",
        CuisineType::Yakitori => "Yakitori",
        CuisineType::Bento => "Bento",
        CuisineType::Wagashi => "Wagashi",
    }
}

/// Display label for a difficulty level.
#[must_use]
pub const fn difficulty_label(dificultad: Difficulty) -> &'static str {
    match dificultad {
        Difficulty::Facil => "Fácil",
        Difficulty::Media => "Media",
        Difficulty::Dificil => "Difícil",
    }
}

/// Relative image path for a cuisine type.
#[must_use]
pub const fn cuisine_image(tipo: CuisineType) -> &'static str {
    match tipo {
        CuisineType::Ramen => "Imagenes/ramen.jpeg",
        CuisineType::Sushi => "Imagenes/sushi.jpeg",
        CuisineType::Donburi => "Imagenes/donburi.jpeg",
        CuisineType::Tempura => "Imagenes/tempura.jpeg",
        CuisineType::CurryJapones => "Imagenes/curry-japones.jpeg",
        CuisineType::Okonomiyaki => "Imagenes/okonomiyaki.jpeg",
        CuisineType::Yakitori => "Imagenes/yakitori.jpeg",
        CuisineType::Bento => "Imagenes/bento.jpeg",
        CuisineType::Wagashi => "Imagenes/wagashi.jpeg",
    }
}

/// Formats an RFC 3339 instant as `dd/mm/yyyy`.
///
/// Unparseable input passes through unchanged rather than failing, so
/// the card still renders something.
#[must_use]
pub fn format_date(iso: &str) -> String {
    match DateTime::parse_from_rfc3339(iso) {
        Ok(instant) => instant.format("%d/%m/%Y").to_string(),
        Err(_) => iso.to_string(),
    }
}
