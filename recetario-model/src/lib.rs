//! Core record model for Recetario.
//!
//! Defines the types every other crate depends on:
//! - [`Recipe`] — one catalog entry with its full attribute set
//! - [`RecipeDraft`] — the transient, not-yet-validated form input
//! - [`CuisineType`] / [`Difficulty`] — the closed enumerations
//! - [`ValidationErrors`] — field-to-message mapping produced by validation
//! - seed data installed when no usable snapshot exists
//!
//! Wire field names (`esFavorita`, `fechaCreacion`, kebab-case cuisine
//! tokens) match the stored snapshot layout so existing catalogs load
//! unchanged.

mod draft;
mod ids;
mod kinds;
mod recipe;
mod seed;

pub use draft::{DraftField, RecipeDraft, ValidationErrors};
pub use ids::RecipeId;
pub use kinds::{CuisineType, Difficulty, UnknownVariant};
pub use recipe::Recipe;
pub use seed::{SEED_NEXT_ID, seed_recipes};
