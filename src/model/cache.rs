//! Process-wide, write-once store of frequency tables.
//!
//! One slot per (language, order) key. The map lock is only held to find or
//! insert a slot; the load itself runs inside the slot's `OnceLock`, so exactly
//! one thread loads a key while others asking for the same key wait on that
//! slot alone. Unrelated keys never wait on each other.
//!
//! Whatever the first load produced, table or error, is what every later
//! caller gets. Failed loads are not retried: they mean the packaged data is
//! missing or corrupt.

use crate::config::ConfigError;
use crate::lang::Language;
use crate::model::source::{JsonModelSource, ModelSource};
use crate::model::{FrequencyTable, ModelError, NgramOrder};
use parking_lot::RwLock;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::sync::{Arc, OnceLock};
use tracing::{debug, warn};

type LoadResult = Result<Arc<FrequencyTable>, ModelError>;
type Slot = Arc<OnceLock<LoadResult>>;

static GLOBAL: OnceLock<Arc<ModelCache>> = OnceLock::new();

pub struct ModelCache {
    source: Arc<dyn ModelSource>,
    slots: RwLock<FxHashMap<(Language, NgramOrder), Slot>>,
}

impl std::fmt::Debug for ModelCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelCache")
            .field("slots", &self.slots.read().len())
            .finish_non_exhaustive()
    }
}

impl ModelCache {
    /// An isolated store. Detectors only share tables when they share the
    /// `Arc<ModelCache>`.
    pub fn new(source: impl ModelSource + 'static) -> Self {
        Self::with_source(Arc::new(source))
    }

    pub fn with_source(source: Arc<dyn ModelSource>) -> Self {
        Self {
            source,
            slots: RwLock::new(FxHashMap::default()),
        }
    }

    /// The process-wide store used by detectors built without an explicit
    /// cache. Initialised on first use from [`JsonModelSource::from_env`]
    /// unless [`ModelCache::init_global`] ran first.
    pub fn global() -> Arc<ModelCache> {
        GLOBAL
            .get_or_init(|| {
                let source = JsonModelSource::from_env();
                debug!(root = %source.root().display(), "initialising global model cache");
                Arc::new(ModelCache::new(source))
            })
            .clone()
    }

    /// Installs the source of the process-wide store. Fails once the global
    /// store exists, whether it was created here or by [`ModelCache::global`].
    pub fn init_global(source: impl ModelSource + 'static) -> Result<Arc<ModelCache>, ConfigError> {
        let cache = Arc::new(ModelCache::new(source));
        GLOBAL
            .set(cache.clone())
            .map_err(|_| ConfigError::GlobalCacheInitialized)?;
        Ok(cache)
    }

    /// The table for one key, loading it on first request.
    pub fn get(&self, language: Language, order: NgramOrder) -> Result<Arc<FrequencyTable>, ModelError> {
        let slot = self.slot(language, order);
        slot.get_or_init(|| self.load(language, order)).clone()
    }

    fn slot(&self, language: Language, order: NgramOrder) -> Slot {
        let key = (language, order);
        if let Some(slot) = self.slots.read().get(&key) {
            return slot.clone();
        }
        self.slots.write().entry(key).or_default().clone()
    }

    fn load(&self, language: Language, order: NgramOrder) -> LoadResult {
        debug!(language = language.code(), %order, "loading language model");
        let table = self.source.load(language, order).and_then(|table| {
            if table.language() != language || table.order() != order {
                return Err(ModelError::malformed(
                    language,
                    order,
                    format!(
                        "source returned the {} model for {}",
                        table.order(),
                        table.language()
                    ),
                ));
            }
            Ok(Arc::new(table))
        });
        match &table {
            Ok(t) => debug!(language = language.code(), %order, ngrams = t.len(), "language model loaded"),
            Err(err) => warn!(language = language.code(), %order, %err, "language model failed to load"),
        }
        table
    }

    /// Loads every (language, order) pair in parallel. Returns the first error
    /// encountered; pairs loaded before it stay cached.
    pub fn preload(&self, languages: &[Language], orders: &[NgramOrder]) -> Result<(), ModelError> {
        let keys: Vec<(Language, NgramOrder)> = languages
            .iter()
            .flat_map(|&l| orders.iter().map(move |&o| (l, o)))
            .collect();
        debug!(keys = keys.len(), "preloading language models");
        keys.par_iter()
            .try_for_each(|&(language, order)| self.get(language, order).map(drop))
    }

    /// `true` once a table for the key has been published.
    pub fn is_loaded(&self, language: Language, order: NgramOrder) -> bool {
        self.slots
            .read()
            .get(&(language, order))
            .and_then(|slot| slot.get())
            .is_some_and(|result| result.is_ok())
    }

    /// Number of successfully published tables.
    pub fn loaded_count(&self) -> usize {
        self.slots
            .read()
            .values()
            .filter(|slot| matches!(slot.get(), Some(Ok(_))))
            .count()
    }
}
