//! Collection store for Recetario.
//!
//! Owns the ordered recipe sequence and the next-identifier counter, and
//! mirrors every mutation to a key-value substrate as a full snapshot:
//!
//! - `recetas_japonesas` — JSON array of records
//! - `siguienteId` — decimal string of the next-identifier counter
//!
//! Persistence is best-effort: a failing substrate is logged and
//! ignored, and the in-memory collection stays authoritative for the rest
//! of the session. A missing, malformed, or empty snapshot is replaced by
//! a fixed seed catalog at load time.

mod error;
mod kv;
mod store;

pub use error::{KvError, KvResult};
pub use kv::{FileKv, KvStore, MemoryKv};
pub use store::{COLLECTION_KEY, NEXT_ID_KEY, RecipeStore, StoreEvent};
