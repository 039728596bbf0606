//! The collection store: ordered recipe sequence, identifier counter,
//! snapshot persistence, and change notifications.

use crate::{KvError, KvStore};
use chrono::Utc;
use recetario_model::{
    Recipe, RecipeDraft, RecipeId, SEED_NEXT_ID, ValidationErrors, seed_recipes,
};
use thiserror::Error;
use tracing::{debug, warn};

/// Substrate key holding the JSON-encoded record array.
pub const COLLECTION_KEY: &str = "recetas_japonesas";

/// Substrate key holding the decimal next-identifier counter.
pub const NEXT_ID_KEY: &str = "siguienteId";

/// A state change the store has applied (and attempted to persist).
///
/// Delivered to subscribers so a presentation layer can re-render without
/// polling. Emitted after the in-memory mutation and the persist attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    /// The seed catalog was installed because no usable snapshot existed.
    Seeded,
    /// A validated draft became a record.
    Added { id: RecipeId },
    /// A record was deleted.
    Removed { id: RecipeId },
    /// A record's favorite flag flipped; `es_favorita` is the new value.
    FavoriteToggled { id: RecipeId, es_favorita: bool },
    /// A record's like count was overwritten with a reported value.
    LikesUpdated { id: RecipeId, likes: u32 },
    /// The whole collection was emptied.
    Cleared,
}

/// Why a snapshot could not be read or written. Never surfaced to callers;
/// reads fall back to the seed catalog and writes are logged and dropped.
#[derive(Debug, Error)]
enum SnapshotError {
    #[error(transparent)]
    Kv(#[from] KvError),

    #[error("malformed record array: {0}")]
    Records(#[from] serde_json::Error),

    #[error("malformed counter: {0}")]
    Counter(#[from] std::num::ParseIntError),
}

/// The recipe collection and its persistence contract.
///
/// Owns the ordered sequence (insertion order, which is display order),
/// the monotonically increasing next-identifier counter, and the last
/// validation-error set. Every mutation writes the full snapshot back to
/// the substrate; a write failure is logged and swallowed, leaving the
/// in-memory state authoritative for the session.
pub struct RecipeStore<K: KvStore> {
    kv: K,
    recipes: Vec<Recipe>,
    next_id: u64,
    last_errors: ValidationErrors,
    subscribers: Vec<Box<dyn FnMut(&StoreEvent)>>,
}

impl<K: KvStore> RecipeStore<K> {
    /// Opens the store over the given substrate and performs the one-time
    /// load: a missing, malformed, or empty snapshot is replaced by the
    /// seed catalog, which is immediately persisted.
    pub fn open(kv: K) -> Self {
        let mut store = Self {
            kv,
            recipes: Vec::new(),
            next_id: 1,
            last_errors: ValidationErrors::default(),
            subscribers: Vec::new(),
        };
        store.load();
        store
    }

    /// Registers a listener for subsequent state changes.
    pub fn subscribe(&mut self, listener: impl FnMut(&StoreEvent) + 'static) {
        self.subscribers.push(Box::new(listener));
    }

    // ── Reads ────────────────────────────────────────────────────

    /// All records, in insertion order.
    #[must_use]
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// The record with the given identifier, if present.
    #[must_use]
    pub fn get(&self, id: RecipeId) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    /// How many records are currently favorites. Always derived from the
    /// live sequence, never stored.
    #[must_use]
    pub fn favorites_count(&self) -> usize {
        self.recipes.iter().filter(|r| r.es_favorita).count()
    }

    /// The identifier the next added record will receive.
    #[must_use]
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    /// The error set produced by the most recent validation or add.
    #[must_use]
    pub fn last_errors(&self) -> &ValidationErrors {
        &self.last_errors
    }

    // ── Mutations ────────────────────────────────────────────────

    /// Checks a draft against the field rules and records the result as
    /// the last error set. The collection is not touched.
    pub fn validate(&mut self, draft: &RecipeDraft) -> ValidationErrors {
        self.last_errors = draft.validate();
        self.last_errors.clone()
    }

    /// Validates the draft and, on success, appends it as a new record
    /// with the next identifier, a fresh creation timestamp, and zero
    /// likes. On failure the collection is left unchanged and the errors
    /// are returned (and kept as the last error set).
    ///
    /// The draft is consumed either way; that is the cleared form.
    pub fn add(&mut self, draft: RecipeDraft) -> Result<RecipeId, ValidationErrors> {
        let id = RecipeId::new(self.next_id);
        match draft.into_recipe(id, Utc::now()) {
            Ok(recipe) => {
                self.next_id += 1;
                self.last_errors = ValidationErrors::default();
                self.recipes.push(recipe);
                self.persist();
                self.emit(StoreEvent::Added { id });
                Ok(id)
            }
            Err(errors) => {
                self.last_errors = errors.clone();
                Err(errors)
            }
        }
    }

    /// Removes the record with the given identifier. Returns false (and
    /// does nothing) if no such record exists. User confirmation is the
    /// caller's responsibility.
    pub fn remove(&mut self, id: RecipeId) -> bool {
        let before = self.recipes.len();
        self.recipes.retain(|r| r.id != id);
        if self.recipes.len() == before {
            return false;
        }
        self.persist();
        self.emit(StoreEvent::Removed { id });
        true
    }

    /// Flips the favorite flag on the matching record. Returns false if
    /// no such record exists.
    pub fn toggle_favorite(&mut self, id: RecipeId) -> bool {
        let Some(recipe) = self.recipes.iter_mut().find(|r| r.id == id) else {
            return false;
        };
        recipe.es_favorita = !recipe.es_favorita;
        let es_favorita = recipe.es_favorita;
        self.persist();
        self.emit(StoreEvent::FavoriteToggled { id, es_favorita });
        true
    }

    /// Overwrites the like count of the matching record with the value a
    /// like counter reported. The value is trusted as-is. Returns false
    /// if no such record exists.
    pub fn set_likes(&mut self, id: RecipeId, likes: u32) -> bool {
        let Some(recipe) = self.recipes.iter_mut().find(|r| r.id == id) else {
            return false;
        };
        recipe.likes = likes;
        self.persist();
        self.emit(StoreEvent::LikesUpdated { id, likes });
        true
    }

    /// Empties the collection. The identifier counter is NOT reset, so
    /// identifiers stay unique across a full clear. User confirmation is
    /// the caller's responsibility.
    pub fn clear_all(&mut self) {
        self.recipes.clear();
        self.persist();
        self.emit(StoreEvent::Cleared);
    }

    /// Hands the substrate back, consuming the store.
    pub fn into_kv(self) -> K {
        self.kv
    }

    // ── Persistence ──────────────────────────────────────────────

    fn load(&mut self) {
        match self.read_snapshot() {
            Ok((records, next_id)) => {
                if let Some(records) = records {
                    self.recipes = records;
                }
                if let Some(next_id) = next_id {
                    self.next_id = next_id;
                }
                if self.recipes.is_empty() {
                    self.install_seed();
                } else {
                    debug!(
                        records = self.recipes.len(),
                        next_id = self.next_id,
                        "snapshot loaded"
                    );
                }
            }
            Err(err) => {
                warn!(error = %err, "snapshot unreadable, installing seed catalog");
                self.install_seed();
            }
        }
    }

    fn read_snapshot(&self) -> Result<(Option<Vec<Recipe>>, Option<u64>), SnapshotError> {
        let records = match self.kv.get(COLLECTION_KEY)? {
            Some(raw) => Some(serde_json::from_str(&raw)?),
            None => None,
        };
        let next_id = match self.kv.get(NEXT_ID_KEY)? {
            Some(raw) => Some(raw.trim().parse()?),
            None => None,
        };
        Ok((records, next_id))
    }

    fn install_seed(&mut self) {
        self.recipes = seed_recipes(Utc::now());
        self.next_id = SEED_NEXT_ID;
        self.persist();
        self.emit(StoreEvent::Seeded);
    }

    /// Best-effort snapshot write. Failure is logged and swallowed; the
    /// in-memory collection remains the source of truth for the session.
    fn persist(&mut self) {
        if let Err(err) = self.write_snapshot() {
            warn!(error = %err, "persist failed, collection will not survive a restart");
        }
    }

    fn write_snapshot(&mut self) -> Result<(), SnapshotError> {
        let encoded = serde_json::to_string(&self.recipes)?;
        self.kv.set(COLLECTION_KEY, &encoded)?;
        self.kv.set(NEXT_ID_KEY, &self.next_id.to_string())?;
        Ok(())
    }

    fn emit(&mut self, event: StoreEvent) {
        for listener in &mut self.subscribers {
            listener(&event);
        }
    }
}
