//! The not-yet-validated form input and its validation rules.
//!
//! Validation never fails hard: it produces a field-to-message mapping
//! that the presentation layer shows inline. An empty mapping means the
//! draft may become a record.

use crate::{CuisineType, Difficulty, Recipe, RecipeId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The transient input used to create a new recipe.
///
/// `tipo` and `dificultad` are `None` while nothing is selected; the text
/// fields start empty. `Default` gives the cleared form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeDraft {
    pub nombre: String,
    pub descripcion: String,
    pub tipo: Option<CuisineType>,
    pub dificultad: Option<Difficulty>,
    pub tiempo: Option<u32>,
    pub ingredientes: String,
    pub es_favorita: bool,
}

impl RecipeDraft {
    /// Checks the draft against the field rules.
    ///
    /// Pure: the draft is not modified and no state is touched. Every
    /// failing field appears in the returned mapping with a human-readable
    /// message.
    #[must_use]
    pub fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::default();

        if self.nombre.trim().is_empty() {
            errors.insert(DraftField::Nombre, "El nombre es obligatorio");
        }
        if self.descripcion.trim().is_empty() {
            errors.insert(DraftField::Descripcion, "La descripción es obligatoria");
        }
        if self.tipo.is_none() {
            errors.insert(DraftField::Tipo, "Debes seleccionar un tipo de cocina");
        }
        if self.dificultad.is_none() {
            errors.insert(DraftField::Dificultad, "Debes seleccionar una dificultad");
        }
        if self.tiempo.is_none_or(|t| t == 0) {
            errors.insert(DraftField::Tiempo, "El tiempo debe ser mayor a 0");
        }
        if self.ingredientes.trim().is_empty() {
            errors.insert(DraftField::Ingredientes, "Los ingredientes son obligatorios");
        }

        errors
    }

    /// Turns the draft into a record with the given identity and creation
    /// instant, or reports why it cannot.
    ///
    /// Like count always starts at zero; the favorite flag is taken from
    /// the draft. The draft is consumed, which is what clears the form.
    pub fn into_recipe(
        self,
        id: RecipeId,
        created: DateTime<Utc>,
    ) -> Result<Recipe, ValidationErrors> {
        let errors = self.validate();
        // Validation rejects missing selections, so the destructuring
        // below only succeeds on the happy path.
        match (self.tipo, self.dificultad, self.tiempo) {
            (Some(tipo), Some(dificultad), Some(tiempo)) if errors.is_valid() => Ok(Recipe {
                id,
                nombre: self.nombre,
                descripcion: self.descripcion,
                tipo,
                dificultad,
                tiempo,
                ingredientes: self.ingredientes,
                es_favorita: self.es_favorita,
                likes: 0,
                fecha_creacion: created,
            }),
            _ => Err(errors),
        }
    }
}

/// The six validated draft fields, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DraftField {
    Nombre,
    Descripcion,
    Tipo,
    Dificultad,
    Tiempo,
    Ingredientes,
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DraftField::Nombre => "nombre",
            DraftField::Descripcion => "descripcion",
            DraftField::Tipo => "tipo",
            DraftField::Dificultad => "dificultad",
            DraftField::Tiempo => "tiempo",
            DraftField::Ingredientes => "ingredientes",
        };
        f.write_str(name)
    }
}

/// Mapping from failing field to human-readable message.
///
/// Iteration order is form order, so inline messages render stably.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationErrors(BTreeMap<DraftField, String>);

impl ValidationErrors {
    /// True when no field failed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of failing fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no field failed. Mirror of [`ValidationErrors::is_valid`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The message for one field, if that field failed.
    #[must_use]
    pub fn get(&self, field: DraftField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    /// True when the given field failed.
    #[must_use]
    pub fn contains(&self, field: DraftField) -> bool {
        self.0.contains_key(&field)
    }

    /// Iterates failing fields with their messages, in form order.
    pub fn iter(&self) -> impl Iterator<Item = (DraftField, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }

    fn insert(&mut self, field: DraftField, message: &str) {
        self.0.insert(field, message.to_string());
    }
}
