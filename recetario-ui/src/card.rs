use crate::{cuisine_image, cuisine_label, difficulty_label, format_date};
use recetario_model::Recipe;
use std::fmt::Write;

/// Renders one recipe as a text card: title with badges, image reference,
/// description, info line, like count, and the ingredient list.
#[must_use]
pub fn render_card(recipe: &Recipe) -> String {
    let mut out = String::new();

    let mut badges = format!(
        "[{}] [{}]",
        cuisine_label(recipe.tipo),
        difficulty_label(recipe.dificultad)
    );
    if recipe.es_favorita {
        badges.push_str(" [Favorita]");
    }

    let _ = writeln!(out, "#{} {} {}", recipe.id, recipe.nombre, badges);
    let _ = writeln!(out, "  Imagen: {}", cuisine_image(recipe.tipo));
    let _ = writeln!(out, "  {}", recipe.descripcion);
    let _ = writeln!(
        out,
        "  Tiempo: {} min | Tipo: {} | Creada: {}",
        recipe.tiempo,
        recipe.tipo,
        format_date(&recipe.fecha_creacion.to_rfc3339())
    );
    let _ = writeln!(out, "  Likes: {}", recipe.likes);
    let _ = writeln!(out, "  Ingredientes:");
    for ingrediente in recipe.ingredient_list() {
        let _ = writeln!(out, "    - {ingrediente}");
    }

    out
}
