//! Keyed cache of fetched collections with manual invalidation.
//!
//! Each view reads through [`run_query`]: the last successful value for
//! the key is delivered immediately, and the loader runs only when the
//! key has never been filled or has been invalidated. Mutations go
//! through [`run_mutation`], which on success invalidates every key the
//! registry declares for the touched entity, waking the subscribed
//! views so they re-fetch.
//!
//! There is no TTL, no background refresh and no retry. A loader error
//! is handed to the caller; whatever was cached before keeps rendering.

use crate::api::ApiError;
use common::cache::{dependents, CacheKey, Entity};
use gloo_console::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::future::Future;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::Callback;

struct Entry {
    value: Value,
    fresh: bool,
}

struct Listener {
    id: usize,
    key: CacheKey,
    notify: Callback<CacheKey>,
}

/// The process-wide query cache. Cheap to clone behind an `Rc`; stored
/// values are plain JSON so one cache serves every row type.
#[derive(Default)]
pub struct QueryCache {
    entries: RefCell<HashMap<CacheKey, Entry>>,
    listeners: RefCell<Vec<Listener>>,
    next_id: Cell<usize>,
}

impl QueryCache {
    pub fn new() -> Self {
        QueryCache::default()
    }

    /// Last successful value for the key, fresh or stale.
    pub fn get(&self, key: CacheKey) -> Option<Value> {
        self.entries.borrow().get(&key).map(|e| e.value.clone())
    }

    /// Whether the key holds a value that has not been invalidated.
    pub fn is_fresh(&self, key: CacheKey) -> bool {
        self.entries.borrow().get(&key).is_some_and(|e| e.fresh)
    }

    pub fn store(&self, key: CacheKey, value: Value) {
        self.entries
            .borrow_mut()
            .insert(key, Entry { value, fresh: true });
    }

    /// Marks the keys stale and wakes their subscribers.
    pub fn invalidate(&self, keys: &[CacheKey]) {
        {
            let mut entries = self.entries.borrow_mut();
            for key in keys {
                if let Some(entry) = entries.get_mut(key) {
                    entry.fresh = false;
                }
            }
        }
        let listeners: Vec<(CacheKey, Callback<CacheKey>)> = self
            .listeners
            .borrow()
            .iter()
            .filter(|l| keys.contains(&l.key))
            .map(|l| (l.key, l.notify.clone()))
            .collect();
        for (key, notify) in listeners {
            notify.emit(key);
        }
    }

    /// Invalidates every key the registry declares for the entity.
    pub fn invalidate_entity(&self, entity: Entity) {
        self.invalidate(dependents(entity));
    }

    /// Registers interest in a key; the callback fires after each
    /// invalidation of that key. Returns an id for [`unsubscribe`].
    ///
    /// [`unsubscribe`]: QueryCache::unsubscribe
    pub fn subscribe(&self, key: CacheKey, notify: Callback<CacheKey>) -> usize {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.listeners.borrow_mut().push(Listener { id, key, notify });
        id
    }

    pub fn unsubscribe(&self, id: usize) {
        self.listeners.borrow_mut().retain(|l| l.id != id);
    }
}

/// Reads a collection through the cache.
///
/// Delivery order on a key with a cached value: the cached decode is
/// emitted synchronously, then, if the key is stale or empty, the loader
/// runs and its result is emitted as well. A loader error is emitted
/// without touching the cached value. A late result lands in the cache
/// even if the requesting view is gone; only the cache is written.
pub fn run_query<T, F>(
    cache: Rc<QueryCache>,
    key: CacheKey,
    loader: F,
    on_ready: Callback<Result<T, ApiError>>,
) where
    T: Serialize + DeserializeOwned + 'static,
    F: Future<Output = Result<T, ApiError>> + 'static,
{
    if let Some(value) = cache.get(key) {
        match serde_json::from_value(value) {
            Ok(decoded) => on_ready.emit(Ok(decoded)),
            Err(err) => warn!(format!("cached {} is unreadable: {err}", key.as_str())),
        }
        if cache.is_fresh(key) {
            return;
        }
    }
    spawn_local(async move {
        match loader.await {
            Ok(fetched) => {
                match serde_json::to_value(&fetched) {
                    Ok(value) => cache.store(key, value),
                    Err(err) => warn!(format!("cannot cache {}: {err}", key.as_str())),
                }
                on_ready.emit(Ok(fetched));
            }
            Err(err) => {
                warn!(format!("loading {} failed: {err}", key.as_str()));
                on_ready.emit(Err(err));
            }
        }
    });
}

/// Runs one table write, then on success invalidates the entity's keys.
///
/// The operation is fire-once: no retry, no cancellation after launch.
/// `idle -> in_flight -> settled` is driven by the caller's own state
/// around `on_done`.
pub fn run_mutation<F>(
    cache: Rc<QueryCache>,
    entity: Entity,
    op: F,
    on_done: Callback<Result<(), ApiError>>,
) where
    F: Future<Output = Result<(), ApiError>> + 'static,
{
    spawn_local(async move {
        let result = op.await;
        if result.is_ok() {
            cache.invalidate_entity(entity);
        }
        on_done.emit(result);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::rc::Rc;

    #[test]
    fn stored_value_is_served_and_fresh() {
        let cache = QueryCache::new();
        cache.store(CacheKey::Services, json!([{"id": "1"}]));
        assert_eq!(cache.get(CacheKey::Services), Some(json!([{"id": "1"}])));
        assert!(cache.is_fresh(CacheKey::Services));
    }

    #[test]
    fn invalidation_keeps_the_value_but_marks_it_stale() {
        let cache = QueryCache::new();
        cache.store(CacheKey::Reviews, json!([]));
        cache.invalidate(&[CacheKey::Reviews]);
        assert!(!cache.is_fresh(CacheKey::Reviews));
        assert!(cache.get(CacheKey::Reviews).is_some());
    }

    #[test]
    fn entity_invalidation_touches_every_declared_key() {
        let cache = QueryCache::new();
        cache.store(CacheKey::Reviews, json!([]));
        cache.store(CacheKey::ReviewsAdmin, json!([]));
        cache.store(CacheKey::PendingReviewsCount, json!(3));
        cache.store(CacheKey::Demos, json!([]));

        cache.invalidate_entity(Entity::Review);

        assert!(!cache.is_fresh(CacheKey::Reviews));
        assert!(!cache.is_fresh(CacheKey::ReviewsAdmin));
        assert!(!cache.is_fresh(CacheKey::PendingReviewsCount));
        // Unrelated keys are untouched.
        assert!(cache.is_fresh(CacheKey::Demos));
    }

    #[test]
    fn subscribers_are_woken_per_key() {
        let cache = QueryCache::new();
        let hits = Rc::new(RefCell::new(Vec::new()));
        let sink = hits.clone();
        let id = cache.subscribe(
            CacheKey::TeamAdmin,
            Callback::from(move |key| sink.borrow_mut().push(key)),
        );

        cache.invalidate_entity(Entity::TeamMember);
        assert_eq!(&*hits.borrow(), &[CacheKey::TeamAdmin]);

        // Unrelated entity: no wakeup.
        cache.invalidate_entity(Entity::Demo);
        assert_eq!(hits.borrow().len(), 1);

        cache.unsubscribe(id);
        cache.invalidate_entity(Entity::TeamMember);
        assert_eq!(hits.borrow().len(), 1);
    }

    #[test]
    fn missing_key_is_neither_cached_nor_fresh() {
        let cache = QueryCache::new();
        assert_eq!(cache.get(CacheKey::Inquiries), None);
        assert!(!cache.is_fresh(CacheKey::Inquiries));
    }
}
