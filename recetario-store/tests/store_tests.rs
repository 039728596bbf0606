use pretty_assertions::assert_eq;
use recetario_model::{CuisineType, Difficulty, DraftField, RecipeDraft, RecipeId};
use recetario_store::{
    COLLECTION_KEY, FileKv, KvError, KvResult, KvStore, MemoryKv, NEXT_ID_KEY, RecipeStore,
    StoreEvent,
};
use std::cell::RefCell;
use std::rc::Rc;

fn mochi_draft() -> RecipeDraft {
    RecipeDraft {
        nombre: "Mochi".to_string(),
        descripcion: "desc".to_string(),
        tipo: Some(CuisineType::Wagashi),
        dificultad: Some(Difficulty::Facil),
        tiempo: Some(20),
        ingredientes: "Arroz glutinoso, Azúcar".to_string(),
        es_favorita: false,
    }
}

/// Substrate whose writes always fail, for the swallow-and-log path.
struct FailingKv;

impl KvStore for FailingKv {
    fn get(&self, _key: &str) -> KvResult<Option<String>> {
        Ok(None)
    }

    fn set(&mut self, _key: &str, _value: &str) -> KvResult<()> {
        Err(KvError::Unavailable("quota exceeded".to_string()))
    }
}

// ── Load & seed fallback ─────────────────────────────────────────

#[test]
fn empty_substrate_installs_seed_catalog() {
    let store = RecipeStore::open(MemoryKv::new());

    let ids: Vec<u64> = store.recipes().iter().map(|r| r.id.value()).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(store.next_id(), 4);
    assert_eq!(store.favorites_count(), 1); // Gyudon is seeded as favorite
}

#[test]
fn seed_is_persisted_immediately() {
    let kv = RecipeStore::open(MemoryKv::new()).into_kv();

    let records = kv.get(COLLECTION_KEY).unwrap().unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&records).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 3);
    assert_eq!(parsed[0]["nombre"], "Tonkotsu Ramen");
    assert_eq!(parsed[1]["esFavorita"], true);
    assert_eq!(kv.get(NEXT_ID_KEY).unwrap().as_deref(), Some("4"));
}

#[test]
fn malformed_record_array_falls_back_to_seed() {
    let mut kv = MemoryKv::new();
    kv.set(COLLECTION_KEY, "{not json").unwrap();
    kv.set(NEXT_ID_KEY, "17").unwrap();

    let store = RecipeStore::open(kv);
    assert_eq!(store.recipes().len(), 3);
    assert_eq!(store.next_id(), 4);
}

#[test]
fn malformed_counter_falls_back_to_seed() {
    let mut kv = MemoryKv::new();
    kv.set(COLLECTION_KEY, "[]").unwrap();
    kv.set(NEXT_ID_KEY, "cuatro").unwrap();

    let store = RecipeStore::open(kv);
    assert_eq!(store.recipes().len(), 3);
    assert_eq!(store.next_id(), 4);
}

#[test]
fn empty_stored_collection_reseeds() {
    let mut kv = MemoryKv::new();
    kv.set(COLLECTION_KEY, "[]").unwrap();
    kv.set(NEXT_ID_KEY, "9").unwrap();

    let store = RecipeStore::open(kv);
    assert_eq!(store.recipes().len(), 3);
    assert_eq!(store.next_id(), 4);
}

// ── add ──────────────────────────────────────────────────────────

#[test]
fn add_on_seed_state_assigns_id_4() {
    let mut store = RecipeStore::open(MemoryKv::new());

    let id = store.add(mochi_draft()).unwrap();
    assert_eq!(id, RecipeId::new(4));
    assert_eq!(store.next_id(), 5);
    assert_eq!(store.recipes().len(), 4);

    let mochi = store.get(id).unwrap();
    assert_eq!(mochi.nombre, "Mochi");
    assert!(!mochi.es_favorita);
    assert_eq!(mochi.likes, 0);
    assert!(store.last_errors().is_valid());
}

#[test]
fn add_appends_at_the_end() {
    let mut store = RecipeStore::open(MemoryKv::new());
    let id = store.add(mochi_draft()).unwrap();
    assert_eq!(store.recipes().last().map(|r| r.id), Some(id));
}

#[test]
fn add_respects_explicit_favorite_flag() {
    let mut store = RecipeStore::open(MemoryKv::new());
    let mut draft = mochi_draft();
    draft.es_favorita = true;
    let id = store.add(draft).unwrap();
    assert!(store.get(id).unwrap().es_favorita);
    assert_eq!(store.favorites_count(), 2);
}

#[test]
fn invalid_draft_leaves_collection_unchanged() {
    let mut store = RecipeStore::open(MemoryKv::new());
    let mut draft = mochi_draft();
    draft.nombre = String::new();

    let errors = store.add(draft).unwrap_err();
    assert!(errors.contains(DraftField::Nombre));
    assert_eq!(store.recipes().len(), 3);
    assert_eq!(store.next_id(), 4);
    assert!(store.last_errors().contains(DraftField::Nombre));
}

#[test]
fn failed_add_does_not_consume_an_identifier() {
    let mut store = RecipeStore::open(MemoryKv::new());
    let _ = store.add(RecipeDraft::default());
    let id = store.add(mochi_draft()).unwrap();
    assert_eq!(id, RecipeId::new(4));
}

#[test]
fn validate_records_the_last_error_set() {
    let mut store = RecipeStore::open(MemoryKv::new());

    let errors = store.validate(&RecipeDraft::default());
    assert_eq!(errors.len(), 6);
    assert_eq!(store.last_errors().len(), 6);

    store.validate(&mochi_draft());
    assert!(store.last_errors().is_valid());
}

// ── remove ───────────────────────────────────────────────────────

#[test]
fn remove_deletes_exactly_one_record() {
    let mut store = RecipeStore::open(MemoryKv::new());
    assert!(store.remove(RecipeId::new(2)));
    assert_eq!(store.recipes().len(), 2);
    assert!(store.get(RecipeId::new(2)).is_none());
}

#[test]
fn remove_nonexistent_is_a_noop() {
    let mut store = RecipeStore::open(MemoryKv::new());
    assert!(!store.remove(RecipeId::new(99)));
    assert_eq!(store.recipes().len(), 3);
}

#[test]
fn removed_record_stays_gone_after_reload() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut store = RecipeStore::open(FileKv::open(dir.path()).unwrap());
        store.remove(RecipeId::new(1));
    }
    let store = RecipeStore::open(FileKv::open(dir.path()).unwrap());
    assert!(store.get(RecipeId::new(1)).is_none());
    assert_eq!(store.recipes().len(), 2);
}

// ── toggle_favorite ──────────────────────────────────────────────

#[test]
fn toggle_favorite_is_an_involution() {
    let mut store = RecipeStore::open(MemoryKv::new());
    let id = RecipeId::new(1);
    let original = store.get(id).unwrap().es_favorita;

    store.toggle_favorite(id);
    assert_eq!(store.get(id).unwrap().es_favorita, !original);
    store.toggle_favorite(id);
    assert_eq!(store.get(id).unwrap().es_favorita, original);
}

#[test]
fn favorites_count_tracks_the_live_sequence() {
    let mut store = RecipeStore::open(MemoryKv::new());
    assert_eq!(store.favorites_count(), 1);
    store.toggle_favorite(RecipeId::new(1));
    store.toggle_favorite(RecipeId::new(3));
    assert_eq!(store.favorites_count(), 3);
    store.toggle_favorite(RecipeId::new(2));
    assert_eq!(store.favorites_count(), 2);
}

#[test]
fn toggle_favorite_nonexistent_is_a_noop() {
    let mut store = RecipeStore::open(MemoryKv::new());
    assert!(!store.toggle_favorite(RecipeId::new(42)));
}

// ── set_likes ────────────────────────────────────────────────────

#[test]
fn set_likes_overwrites_the_reported_value() {
    let mut store = RecipeStore::open(MemoryKv::new());
    assert!(store.set_likes(RecipeId::new(2), 9));
    assert_eq!(store.get(RecipeId::new(2)).unwrap().likes, 9);
}

#[test]
fn set_likes_nonexistent_is_a_noop() {
    let mut store = RecipeStore::open(MemoryKv::new());
    assert!(!store.set_likes(RecipeId::new(42), 1));
}

// ── clear_all ────────────────────────────────────────────────────

#[test]
fn clear_all_empties_but_keeps_the_counter() {
    let mut store = RecipeStore::open(MemoryKv::new());
    store.add(mochi_draft()).unwrap(); // counter now 5

    store.clear_all();
    assert!(store.recipes().is_empty());
    assert_eq!(store.favorites_count(), 0);

    let id = store.add(mochi_draft()).unwrap();
    assert_eq!(id, RecipeId::new(5)); // strictly greater than anything issued
}

// ── Round-trip ───────────────────────────────────────────────────

#[test]
fn persisted_snapshot_reproduces_in_a_fresh_session() {
    let mut store = RecipeStore::open(MemoryKv::new());
    store.add(mochi_draft()).unwrap();
    store.toggle_favorite(RecipeId::new(4));
    store.set_likes(RecipeId::new(4), 2);

    let first: Vec<_> = store.recipes().to_vec();
    let next_id = store.next_id();

    let reopened = RecipeStore::open(store.into_kv());
    assert_eq!(reopened.recipes(), first.as_slice());
    assert_eq!(reopened.next_id(), next_id);
}

// ── Persistence failure ──────────────────────────────────────────

#[test]
fn persist_failure_is_swallowed() {
    let mut store = RecipeStore::open(FailingKv);
    // Seeding could not be persisted, but memory is authoritative.
    assert_eq!(store.recipes().len(), 3);

    let id = store.add(mochi_draft()).unwrap();
    assert_eq!(store.get(id).unwrap().nombre, "Mochi");
    assert!(store.remove(id));
}

// ── Notifications ────────────────────────────────────────────────

#[test]
fn mutations_notify_subscribers() {
    let mut store = RecipeStore::open(MemoryKv::new());
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    store.subscribe(move |event| sink.borrow_mut().push(*event));

    let id = store.add(mochi_draft()).unwrap();
    store.toggle_favorite(id);
    store.set_likes(id, 3);
    store.remove(id);
    store.clear_all();

    assert_eq!(
        *seen.borrow(),
        vec![
            StoreEvent::Added { id },
            StoreEvent::FavoriteToggled { id, es_favorita: true },
            StoreEvent::LikesUpdated { id, likes: 3 },
            StoreEvent::Removed { id },
            StoreEvent::Cleared,
        ]
    );
}

#[test]
fn failed_add_emits_nothing() {
    let mut store = RecipeStore::open(MemoryKv::new());
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    store.subscribe(move |event| sink.borrow_mut().push(*event));

    let _ = store.add(RecipeDraft::default());
    assert!(seen.borrow().is_empty());
}
