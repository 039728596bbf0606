use chrono::{TimeZone, Utc};
use recetario_model::{CuisineType, Difficulty, Recipe, RecipeId};
use recetario_ui::render_card;

fn gyudon() -> Recipe {
    Recipe {
        id: RecipeId::new(2),
        nombre: "Gyudon".to_string(),
        descripcion: "Bowl de arroz con carne de res".to_string(),
        tipo: CuisineType::Donburi,
        dificultad: Difficulty::Media,
        tiempo: 30,
        ingredientes: "Carne de res, Cebolla, Arroz".to_string(),
        es_favorita: true,
        likes: 8,
        fecha_creacion: Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap(),
    }
}

#[test]
fn card_shows_title_badges_and_info() {
    let card = render_card(&gyudon());

    assert!(card.starts_with("#2 Gyudon [Donburi] [Media] [Favorita]\n"));
    assert!(card.contains("Imagen: Imagenes/donburi.jpeg"));
    assert!(card.contains("Tiempo: 30 min | Tipo: donburi | Creada: 01/06/2025"));
    assert!(card.contains("Likes: 8"));
}

#[test]
fn card_lists_each_ingredient_on_its_own_line() {
    let card = render_card(&gyudon());
    assert!(card.contains("    - Carne de res\n"));
    assert!(card.contains("    - Cebolla\n"));
    assert!(card.contains("    - Arroz\n"));
}

#[test]
fn favorite_badge_only_when_flagged() {
    let mut recipe = gyudon();
    recipe.es_favorita = false;
    let card = render_card(&recipe);
    assert!(!card.contains("[Favorita]"));
}
