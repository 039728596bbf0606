//! Recetario command-line surface.
//!
//! One command per user action (the form, the card list, the favorite,
//! like, and delete buttons), with confirmation prompts before anything
//! destructive and a file-backed substrate under `--data-dir`.
//!
//! Usage:
//!   recetario list
//!   recetario add --nombre "Mochi" --descripcion "..." --tipo wagashi \
//!       --dificultad facil --tiempo 20 --ingredientes "Arroz, Azúcar"
//!   recetario favorite 2 | recetario like 2 | recetario remove 2 | recetario clear

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use recetario_model::{CuisineType, Difficulty, RecipeDraft, RecipeId};
use recetario_store::{FileKv, RecipeStore};
use recetario_ui::{LikeCounter, render_card};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "recetario")]
#[command(about = "Catálogo local de recetas de cocina japonesa")]
struct Args {
    /// Directory holding the persisted catalog
    #[arg(long, default_value = "recetario-data")]
    data_dir: PathBuf,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show every recipe card and the favorites count
    List,

    /// Validate a draft and add it to the catalog
    Add {
        #[arg(long)]
        nombre: String,
        #[arg(long)]
        descripcion: String,
        /// Cuisine type (ramen, sushi, donburi, tempura, curry-japones,
        /// okonomiyaki, yakitori, bento, wagashi)
        #[arg(long)]
        tipo: CuisineType,
        /// Difficulty (facil, media, dificil)
        #[arg(long)]
        dificultad: Difficulty,
        /// Preparation time in minutes
        #[arg(long)]
        tiempo: u32,
        /// Comma-separated ingredient list
        #[arg(long)]
        ingredientes: String,
        /// Mark as favorite right away
        #[arg(long)]
        favorita: bool,
    },

    /// Toggle the favorite flag of one recipe
    Favorite { id: RecipeId },

    /// Like a recipe (or like-then-unlike with --undo)
    Like {
        id: RecipeId,
        /// Toggle twice, modeling an immediate unlike
        #[arg(long)]
        undo: bool,
    },

    /// Delete one recipe (asks for confirmation)
    Remove {
        id: RecipeId,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Delete every recipe (asks for confirmation)
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::WARN };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .compact()
        .init();

    let kv = FileKv::open(&args.data_dir)
        .with_context(|| format!("no se pudo abrir {}", args.data_dir.display()))?;
    let mut store = RecipeStore::open(kv);
    store.subscribe(|event| debug!(?event, "cambio aplicado"));

    match args.command {
        Command::List => list(&store),
        Command::Add {
            nombre,
            descripcion,
            tipo,
            dificultad,
            tiempo,
            ingredientes,
            favorita,
        } => {
            let draft = RecipeDraft {
                nombre,
                descripcion,
                tipo: Some(tipo),
                dificultad: Some(dificultad),
                tiempo: Some(tiempo),
                ingredientes,
                es_favorita: favorita,
            };
            add(&mut store, draft)
        }
        Command::Favorite { id } => favorite(&mut store, id),
        Command::Like { id, undo } => like(&mut store, id, undo),
        Command::Remove { id, yes } => remove(&mut store, id, yes),
        Command::Clear { yes } => clear(&mut store, yes),
    }
}

fn list(store: &RecipeStore<FileKv>) -> Result<()> {
    if store.recipes().is_empty() {
        println!("No hay recetas.");
        return Ok(());
    }
    for recipe in store.recipes() {
        print!("{}", render_card(recipe));
        println!();
    }
    println!(
        "Favoritas: {} | Total: {}",
        store.favorites_count(),
        store.recipes().len()
    );
    Ok(())
}

fn add(store: &mut RecipeStore<FileKv>, draft: RecipeDraft) -> Result<()> {
    match store.add(draft) {
        Ok(id) => {
            println!("¡Receta agregada exitosamente! (id {id})");
            Ok(())
        }
        Err(errors) => {
            for (field, message) in errors.iter() {
                eprintln!("{field}: {message}");
            }
            bail!("el formulario tiene {} errores", errors.len());
        }
    }
}

fn favorite(store: &mut RecipeStore<FileKv>, id: RecipeId) -> Result<()> {
    if !store.toggle_favorite(id) {
        bail!("no existe la receta {id}");
    }
    let es_favorita = store.get(id).is_some_and(|r| r.es_favorita);
    if es_favorita {
        println!("Receta {id} marcada como favorita.");
    } else {
        println!("Receta {id} ya no es favorita.");
    }
    Ok(())
}

fn like(store: &mut RecipeStore<FileKv>, id: RecipeId, undo: bool) -> Result<()> {
    let Some(recipe) = store.get(id) else {
        bail!("no existe la receta {id}");
    };

    let mut counter = LikeCounter::mount(id, recipe.likes);
    let (_, mut likes) = counter.toggle();
    if undo {
        (_, likes) = counter.toggle();
    }
    store.set_likes(id, likes);
    println!("{}", counter.label());
    Ok(())
}

fn remove(store: &mut RecipeStore<FileKv>, id: RecipeId, yes: bool) -> Result<()> {
    if !yes && !confirm("¿Estás seguro de que quieres eliminar esta receta?")? {
        println!("Cancelado.");
        return Ok(());
    }
    if !store.remove(id) {
        bail!("no existe la receta {id}");
    }
    println!("Receta {id} eliminada.");
    Ok(())
}

fn clear(store: &mut RecipeStore<FileKv>, yes: bool) -> Result<()> {
    if !yes
        && !confirm(
            "¿Estás seguro de que quieres eliminar TODAS las recetas? \
             Esta acción no se puede deshacer.",
        )?
    {
        println!("Cancelado.");
        return Ok(());
    }
    store.clear_all();
    println!("Catálogo vaciado.");
    Ok(())
}

/// Stdin confirmation for destructive actions. Only an explicit yes
/// proceeds.
fn confirm(question: &str) -> Result<bool> {
    print!("{question} (s/N): ");
    io::stdout().flush().context("no se pudo escribir el prompt")?;

    let mut answer = String::new();
    io::stdin()
        .lock()
        .read_line(&mut answer)
        .context("no se pudo leer la respuesta")?;
    let answer = answer.trim().to_lowercase();
    Ok(answer == "s" || answer == "si" || answer == "sí")
}
