//! Seed catalog installed when no usable snapshot exists.

use crate::{CuisineType, Difficulty, Recipe, RecipeId};
use chrono::{DateTime, Utc};

/// The next-identifier counter that accompanies the seed catalog.
pub const SEED_NEXT_ID: u64 = 4;

/// The three example recipes, with preset identifiers 1–3 and the given
/// creation instant.
#[must_use]
pub fn seed_recipes(now: DateTime<Utc>) -> Vec<Recipe> {
    vec![
        Recipe {
            id: RecipeId::new(1),
            nombre: "Tonkotsu Ramen".to_string(),
            descripcion:
                "Ramen de caldo de huesos de cerdo, rico y cremoso con fideos al dente".to_string(),
            tipo: CuisineType::Ramen,
            dificultad: Difficulty::Dificil,
            tiempo: 240,
            ingredientes:
                "Huesos de cerdo, Kombu, Katsuobushi, Miso, Shoyu, Fideos, Huevo, Cebolla verde"
                    .to_string(),
            es_favorita: false,
            likes: 15,
            fecha_creacion: now,
        },
        Recipe {
            id: RecipeId::new(2),
            nombre: "Gyudon".to_string(),
            descripcion: "Bowl de arroz con carne de res cocida en salsa dulce y salada"
                .to_string(),
            tipo: CuisineType::Donburi,
            dificultad: Difficulty::Media,
            tiempo: 30,
            ingredientes:
                "Carne de res, Cebolla, Salsa de soja, Mirin, Sake, Azúcar, Arroz, Huevo"
                    .to_string(),
            es_favorita: true,
            likes: 8,
            fecha_creacion: now,
        },
        Recipe {
            id: RecipeId::new(3),
            nombre: "Tempura mixta".to_string(),
            descripcion: "Verduras y mariscos rebozados en masa ligera y fritos hasta dorar"
                .to_string(),
            tipo: CuisineType::Tempura,
            dificultad: Difficulty::Media,
            tiempo: 35,
            ingredientes:
                "Langostinos, Batata, Zapallo kabocha, Harina, Agua helada, Aceite, Daikon"
                    .to_string(),
            es_favorita: false,
            likes: 12,
            fecha_creacion: now,
        },
    ]
}
