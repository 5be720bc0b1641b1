use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use tracing::trace;

use crate::acoustics::Acoustics;
use crate::block::{Block, BlockState, BlockStateKey};

/// How a table entry produces acoustics
#[derive(Debug, Clone)]
pub enum AcousticProfile {
    /// Fixed acoustics, cached forever
    Static(Acoustics),
    /// Recomputed on every query from the queried state
    Dynamic(fn(&BlockState) -> Acoustics),
}

impl AcousticProfile {
    pub fn evaluate(&self, state: &BlockState) -> Acoustics {
        match self {
            AcousticProfile::Static(acoustics) => acoustics.clone(),
            AcousticProfile::Dynamic(compute) => compute(state),
        }
    }
}

/// Fallback consulted by a table when no registered key matches
pub trait AcousticResolver {
    fn resolve(&self, state: &BlockState) -> Option<AcousticProfile>;
}

/// One acoustic table with a per-state result cache.
///
/// Lookups relax from the specific key to the generic key, then the injected
/// resolver, then the special key. Not thread-safe; used from the tick thread.
pub struct BlockAcousticMap {
    data: HashMap<BlockStateKey, Acoustics>,
    cache: RefCell<HashMap<BlockState, Option<AcousticProfile>>>,
    resolver: Option<Rc<dyn AcousticResolver>>,
}

impl BlockAcousticMap {
    /// Table without a resolver, pre-seeded with air as not emitting
    pub fn new() -> Self {
        let mut map = Self {
            data: HashMap::new(),
            cache: RefCell::new(HashMap::new()),
            resolver: None,
        };
        map.seed();
        map
    }

    pub fn with_resolver(resolver: Rc<dyn AcousticResolver>) -> Self {
        Self {
            resolver: Some(resolver),
            ..Self::new()
        }
    }

    fn seed(&mut self) {
        self.data
            .insert(BlockStateKey::block_wide(&Block::air()), Acoustics::NotEmitter);
    }

    /// Acoustics for `state`, [`Acoustics::None`] when nothing matches
    pub fn get(&self, state: &BlockState) -> Acoustics {
        if let Some(cached) = self.cache.borrow().get(state) {
            return cached
                .as_ref()
                .map_or(Acoustics::None, |profile| profile.evaluate(state));
        }

        let profile = self.resolve(state);
        let result = profile
            .as_ref()
            .map_or(Acoustics::None, |profile| profile.evaluate(state));
        self.cache.borrow_mut().insert(state.clone(), profile);
        result
    }

    fn resolve(&self, state: &BlockState) -> Option<AcousticProfile> {
        let key = BlockStateKey::of(state);

        if let Some(found) = self.data.get(&key) {
            return Some(AcousticProfile::Static(found.clone()));
        }
        if key.has_subtypes() {
            if let Some(found) = self.data.get(&key.as_generic()) {
                trace!(block = key.block(), "Generic acoustics matched");
                return Some(AcousticProfile::Static(found.clone()));
            }
        }
        if let Some(profile) = self.resolver.as_ref().and_then(|r| r.resolve(state)) {
            trace!(block = key.block(), "Resolver supplied acoustics");
            return Some(profile);
        }
        for special in key.special_keys() {
            if let Some(found) = self.data.get(&special) {
                trace!(block = key.block(), "Special acoustics matched");
                return Some(AcousticProfile::Static(found.clone()));
            }
        }
        None
    }

    /// Register static acoustics for `key`, invalidating cached results
    pub fn put(&mut self, key: BlockStateKey, acoustics: Acoustics) {
        self.data.insert(key, acoustics);
        self.cache.get_mut().clear();
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Drop every registration and cached result, keeping the air seed
    pub fn clear(&mut self) {
        self.data.clear();
        self.cache.get_mut().clear();
        self.seed();
    }

    /// Drop cached results only (resolver data changed)
    pub fn invalidate(&mut self) {
        self.cache.get_mut().clear();
    }
}

impl Default for BlockAcousticMap {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for BlockAcousticMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlockAcousticMap")
            .field("rules", &self.data.len())
            .field("cached", &self.cache.borrow().len())
            .field("has_resolver", &self.resolver.is_some())
            .finish()
    }
}
