use crate::{CuisineType, Difficulty, RecipeId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One recipe entry in the catalog.
///
/// Serde field names follow the stored snapshot layout (`esFavorita`,
/// `fechaCreacion`), so existing collections deserialize unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub nombre: String,
    pub descripcion: String,
    pub tipo: CuisineType,
    pub dificultad: Difficulty,
    /// Preparation time in minutes, always positive.
    pub tiempo: u32,
    /// Free text, comma-separated. Use [`Recipe::ingredient_list`] to split.
    pub ingredientes: String,
    #[serde(rename = "esFavorita")]
    pub es_favorita: bool,
    pub likes: u32,
    #[serde(rename = "fechaCreacion")]
    pub fecha_creacion: DateTime<Utc>,
}

impl Recipe {
    /// Splits the comma-separated ingredient text into trimmed items,
    /// dropping empty segments.
    pub fn ingredient_list(&self) -> impl Iterator<Item = &str> {
        self.ingredientes
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}
