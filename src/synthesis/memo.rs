// Copyright (c) 2024 Mike Tsao

use log::trace;
use once_cell::sync::OnceCell;
use rustc_hash::FxHashMap;
use std::{
    hash::Hash,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

/// A thread-safe table of computed values that computes each key at most
/// once, even when several threads ask for the same key at the same time.
///
/// Each key owns a [OnceCell]. The table lock is held only long enough to
/// find or create that cell; the computation itself runs under the cell's own
/// lock, so requests for different keys proceed in parallel while duplicate
/// requests for one key wait for the first to finish.
pub struct MemoTable<K, V> {
    cells: Mutex<FxHashMap<K, Arc<OnceCell<V>>>>,
}
impl<K, V> Default for MemoTable<K, V> {
    fn default() -> Self {
        Self {
            cells: Mutex::new(FxHashMap::default()),
        }
    }
}
impl<K, V> core::fmt::Debug for MemoTable<K, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MemoTable")
            .field("len", &self.lock().len())
            .finish()
    }
}
impl<K, V> MemoTable<K, V> {
    /// The number of keys with a value or a computation in flight.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[allow(missing_docs)]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Forgets everything. Computations already in flight still deliver
    /// their results to their callers, but those results aren't kept.
    pub fn clear(&self) {
        self.lock().clear();
    }

    // A panic inside a computation poisons only that key's cell, never this
    // map, because the map lock isn't held while computing.
    fn lock(&self) -> MutexGuard<'_, FxHashMap<K, Arc<OnceCell<V>>>> {
        self.cells.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
impl<K: Eq + Hash + Clone, V: Clone> MemoTable<K, V> {
    /// Returns the value for `key`, calling `f` to compute it if no value is
    /// stored yet. If `f` fails, the error is returned and nothing is stored,
    /// so a later call tries again.
    pub fn get_or_try_insert_with<E>(
        &self,
        key: K,
        f: impl FnOnce() -> Result<V, E>,
    ) -> Result<V, E> {
        let cell = Arc::clone(self.lock().entry(key.clone()).or_default());
        if let Some(value) = cell.get() {
            trace!("memo hit");
            return Ok(value.clone());
        }
        match cell.get_or_try_init(f) {
            Ok(value) => Ok(value.clone()),
            Err(e) => {
                let mut cells = self.lock();
                if cells
                    .get(&key)
                    .is_some_and(|c| Arc::ptr_eq(c, &cell) && c.get().is_none())
                {
                    cells.remove(&key);
                }
                Err(e)
            }
        }
    }

    /// Returns the stored value for `key`, if any, without computing it.
    pub fn get(&self, key: &K) -> Option<V> {
        self.lock().get(key).and_then(|cell| cell.get().cloned())
    }
}
