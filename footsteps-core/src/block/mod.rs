//! Host-facing block model.
//!
//! The host engine owns the real block types; this module is the narrow view
//! the footstep core needs: a block name, its properties (one of which may
//! select sub-types), and its native step-sound metadata.

mod key;
mod spec;

pub use key::*;
pub use spec::*;

use std::collections::{BTreeMap, HashMap};
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::constants::AIR_BLOCK;

/// Native step-sound metadata of a block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoundType {
    #[serde(default)]
    pub step_sound: Option<String>,
    #[serde(default)]
    pub break_sound: Option<String>,
    pub volume: f32,
    pub pitch: f32,
}

impl SoundType {
    pub fn new(step_sound: impl Into<String>, volume: f32, pitch: f32) -> Self {
        Self {
            step_sound: Some(step_sound.into()),
            break_sound: None,
            volume,
            pitch,
        }
    }

    pub fn with_break_sound(mut self, break_sound: impl Into<String>) -> Self {
        self.break_sound = Some(break_sound.into());
        self
    }

    /// Step sound name, `None` when missing or empty
    pub fn step_name(&self) -> Option<&str> {
        self.step_sound.as_deref().filter(|s| !s.is_empty())
    }
}

/// A registered block type
#[derive(Debug)]
pub struct Block {
    name: Arc<str>,
    /// Allowed values per property; the first value is the default
    properties: BTreeMap<String, Vec<String>>,
    variant_property: Option<String>,
    sound_type: Option<SoundType>,
}

impl Block {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self {
            name: Arc::from(name.as_ref()),
            properties: BTreeMap::new(),
            variant_property: None,
            sound_type: None,
        }
    }

    /// The canonical air block
    pub fn air() -> Arc<Block> {
        Arc::new(Block::new(AIR_BLOCK))
    }

    pub fn with_property<I, S>(mut self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.properties
            .insert(name.into(), values.into_iter().map(Into::into).collect());
        self
    }

    /// Declare the property that selects sub-types (wool color, plank type, ...)
    pub fn with_variant_property<I, S>(mut self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        self.variant_property = Some(name.clone());
        self.with_property(name, values)
    }

    pub fn with_sound(mut self, sound_type: SoundType) -> Self {
        self.sound_type = Some(sound_type);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn shared_name(&self) -> Arc<str> {
        Arc::clone(&self.name)
    }

    pub fn is_air(&self) -> bool {
        &*self.name == AIR_BLOCK
    }

    pub fn has_subtypes(&self) -> bool {
        self.variant_property.is_some()
    }

    pub fn variant_property(&self) -> Option<&str> {
        self.variant_property.as_deref()
    }

    pub fn sound_type(&self) -> Option<&SoundType> {
        self.sound_type.as_ref()
    }

    /// Whether `value` is an allowed value of `property`
    pub fn accepts(&self, property: &str, value: &str) -> bool {
        self.properties
            .get(property)
            .is_some_and(|values| values.iter().any(|v| v == value))
    }

    /// State with every property at its default (first) value
    pub fn default_state(self: &Arc<Self>) -> BlockState {
        let properties = self
            .properties
            .iter()
            .filter_map(|(k, values)| values.first().map(|v| (k.clone(), v.clone())))
            .collect();
        BlockState {
            block: Arc::clone(self),
            properties,
        }
    }
}

/// A concrete block state: a block plus one value per property.
///
/// Equality and hashing cover the block name and the full property map, so two
/// equal states stand in for the same interned host state.
#[derive(Debug, Clone)]
pub struct BlockState {
    block: Arc<Block>,
    properties: BTreeMap<String, String>,
}

impl BlockState {
    pub fn air() -> Self {
        Block::air().default_state()
    }

    pub fn block(&self) -> &Arc<Block> {
        &self.block
    }

    pub fn name(&self) -> &str {
        self.block.name()
    }

    pub fn is_air(&self) -> bool {
        self.block.is_air()
    }

    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    pub fn properties(&self) -> &BTreeMap<String, String> {
        &self.properties
    }

    pub fn sound_type(&self) -> Option<&SoundType> {
        self.block.sound_type()
    }

    /// Copy of this state with one property changed, `None` if the block
    /// does not accept that value
    pub fn with_property(&self, name: &str, value: &str) -> Option<BlockState> {
        if !self.block.accepts(name, value) {
            return None;
        }
        let mut next = self.clone();
        next.properties.insert(name.to_string(), value.to_string());
        Some(next)
    }
}

impl PartialEq for BlockState {
    fn eq(&self, other: &Self) -> bool {
        self.block.name == other.block.name && self.properties == other.properties
    }
}

impl Eq for BlockState {}

impl Hash for BlockState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.block.name.hash(state);
        self.properties.hash(state);
    }
}

/// Resolves block names to block handles
pub trait BlockLookup {
    fn lookup(&self, name: &str) -> Option<Arc<Block>>;
}

/// In-memory block table keyed by namespaced name
#[derive(Debug)]
pub struct BlockRegistry {
    blocks: HashMap<String, Arc<Block>>,
}

impl BlockRegistry {
    /// New registry containing only air
    pub fn new() -> Self {
        let mut registry = Self {
            blocks: HashMap::new(),
        };
        registry.insert(Block::air());
        registry
    }

    /// Register a block, replacing any previous block with the same name
    pub fn register(&mut self, block: Block) -> Arc<Block> {
        let block = Arc::new(block);
        self.insert(Arc::clone(&block));
        block
    }

    fn insert(&mut self, block: Arc<Block>) {
        self.blocks.insert(block.name().to_string(), block);
    }

    pub fn get(&self, name: &str) -> Option<&Arc<Block>> {
        self.blocks.get(name)
    }

    /// Default state of a registered block
    pub fn state(&self, name: &str) -> Option<BlockState> {
        self.get(name).map(Block::default_state)
    }

    pub fn count(&self) -> usize {
        self.blocks.len()
    }
}

impl Default for BlockRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockLookup for BlockRegistry {
    fn lookup(&self, name: &str) -> Option<Arc<Block>> {
        self.blocks.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wheat() -> Arc<Block> {
        Arc::new(Block::new("minecraft:wheat").with_property("age", (0..8).map(|a| a.to_string())))
    }

    #[test]
    fn test_default_state_uses_first_value() {
        let state = wheat().default_state();
        assert_eq!(state.property("age"), Some("0"));
        assert_eq!(state.name(), "minecraft:wheat");
    }

    #[test]
    fn test_with_property_rejects_unknown_values() {
        let state = wheat().default_state();
        assert!(state.with_property("age", "7").is_some());
        assert!(state.with_property("age", "8").is_none());
        assert!(state.with_property("color", "red").is_none());
    }

    #[test]
    fn test_equal_states_from_distinct_handles() {
        let a = wheat().default_state().with_property("age", "3").unwrap();
        let b = wheat().default_state().with_property("age", "3").unwrap();
        assert_eq!(a, b);

        let c = wheat().default_state();
        assert_ne!(a, c);
    }

    #[test]
    fn test_air_is_air() {
        assert!(BlockState::air().is_air());
        assert!(!wheat().default_state().is_air());
    }

    #[test]
    fn test_step_name_treats_empty_as_undefined() {
        let sound = SoundType::new("", 1.0, 1.0);
        assert!(sound.step_name().is_none());
        let sound = SoundType::new("block.stone.step", 1.0, 1.0);
        assert_eq!(sound.step_name(), Some("block.stone.step"));
    }

    #[test]
    fn test_registry_seeds_air() {
        let mut registry = BlockRegistry::new();
        assert_eq!(registry.count(), 1);
        assert!(registry.lookup(AIR_BLOCK).is_some());

        registry.register(Block::new("minecraft:stone"));
        assert!(registry.state("minecraft:stone").is_some());
        assert!(registry.lookup("minecraft:dirt").is_none());
    }
}
