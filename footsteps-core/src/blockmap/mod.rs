//! Block → footstep acoustic tables.
//!
//! [`BlockMap`] owns the main table plus one table per [`Substrate`] and turns
//! configuration entries (`"minecraft:wheat" = "#wheat"`) into table rules.

mod acoustic_map;
mod macros;

pub use acoustic_map::*;
pub use macros::*;

use std::collections::BTreeMap;
use std::rc::Rc;

use tracing::{debug, warn};

use crate::acoustics::{Acoustics, AcousticsManager};
use crate::block::{BlockLookup, BlockSpec, BlockState, BlockStateKey};
use crate::constants::MACRO_PREFIX;
use crate::error::RegisterError;

/// Main acoustic table plus lazily created substrate tables
#[derive(Debug, Default)]
pub struct BlockMap {
    main: BlockAcousticMap,
    substrates: BTreeMap<Substrate, BlockAcousticMap>,
}

impl BlockMap {
    /// Map whose main table falls back to `resolver`
    pub fn new(resolver: Rc<dyn AcousticResolver>) -> Self {
        Self {
            main: BlockAcousticMap::with_resolver(resolver),
            substrates: BTreeMap::new(),
        }
    }

    /// Acoustics of `state` in the main table, or only in `substrate`'s table
    pub fn get_block_acoustics(&self, state: &BlockState, substrate: Option<Substrate>) -> Acoustics {
        if state.is_air() {
            return Acoustics::NotEmitter;
        }
        match substrate {
            None => self.main.get(state),
            Some(substrate) => self
                .substrates
                .get(&substrate)
                .map_or(Acoustics::None, |map| map.get(state)),
        }
    }

    /// Register one configuration entry. Problems are logged and the entry skipped.
    ///
    /// Returns the number of table rules written.
    pub fn register(
        &mut self,
        lookup: &dyn BlockLookup,
        acoustics: &AcousticsManager,
        key: &str,
        value: &str,
    ) -> usize {
        match self.try_register(lookup, acoustics, key, value) {
            Ok(count) => count,
            Err(err) => {
                warn!(key, value, error = %err, "Block acoustic registration skipped");
                0
            }
        }
    }

    /// Register one configuration entry, reporting why it was rejected
    pub fn try_register(
        &mut self,
        lookup: &dyn BlockLookup,
        acoustics: &AcousticsManager,
        key: &str,
        value: &str,
    ) -> Result<usize, RegisterError> {
        let spec: BlockSpec = key.parse()?;
        let block = lookup
            .lookup(&spec.name)
            .ok_or_else(|| RegisterError::UnknownBlock(spec.name.clone()))?;
        let value = value.trim();

        if value.starts_with(MACRO_PREFIX) {
            let entries = lookup_macro(value).ok_or_else(|| RegisterError::UnknownMacro(value.to_string()))?;
            if spec.filter.is_some() || spec.extra.is_some() {
                debug!(key, "Macro applies to the whole block; filter and substrate ignored");
            }

            let default_state = block.default_state();
            let mut written = 0;
            for entry in entries {
                let key = match entry.property {
                    None => BlockStateKey::block_wide(&block),
                    Some((property, prop_value)) => match default_state.with_property(property, prop_value) {
                        Some(state) => BlockStateKey::property_key(&state),
                        None => {
                            warn!(
                                block = block.name(),
                                macro_name = value,
                                property,
                                value = prop_value,
                                "Macro entry skipped, property not accepted"
                            );
                            continue;
                        }
                    },
                };
                self.put(entry.substrate, key, acoustics.compile_acoustics(entry.acoustic));
                written += 1;
            }
            debug!(block = block.name(), macro_name = value, written, "Macro expanded");
            return Ok(written);
        }

        let substrate = spec.extra.as_deref().map(str::parse::<Substrate>).transpose()?;
        let key = spec.key_for(&block)?;
        self.put(substrate, key, acoustics.compile_acoustics(value));
        Ok(1)
    }

    fn put(&mut self, substrate: Option<Substrate>, key: BlockStateKey, acoustics: Acoustics) {
        match substrate {
            None => self.main.put(key, acoustics),
            Some(substrate) => self.substrates.entry(substrate).or_default().put(key, acoustics),
        }
    }

    /// Whether a table exists for `substrate`
    pub fn has_substrate(&self, substrate: Substrate) -> bool {
        self.substrates.contains_key(&substrate)
    }

    /// Diagnostic lines: the main acoustics, then `substrate:acoustic,...` per substrate
    pub fn collect_data(&self, state: &BlockState) -> Vec<String> {
        let mut data = Vec::new();
        let main = self.get_block_acoustics(state, None);
        if !main.is_none() {
            data.push(main.to_string());
        }
        for (substrate, map) in &self.substrates {
            let acoustics = map.get(state);
            if !acoustics.is_none() {
                data.push(format!("{substrate}:{acoustics}"));
            }
        }
        data
    }

    /// Drop cached lookups after resolver data changed
    pub fn invalidate(&mut self) {
        self.main.invalidate();
        self.substrates.values_mut().for_each(BlockAcousticMap::invalidate);
    }

    /// Reset the main table and drop every substrate table
    pub fn clear(&mut self) {
        self.main.clear();
        self.substrates.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::acoustics::{Acoustic, SoundDef};
    use crate::block::{Block, BlockRegistry};
    use crate::constants::NOT_EMITTER;

    fn setup() -> (BlockRegistry, AcousticsManager, BlockMap) {
        let mut blocks = BlockRegistry::new();
        blocks.register(Block::new("minecraft:wheat").with_property("age", (0..8).map(|a| a.to_string())));
        blocks.register(Block::new("minecraft:beetroots").with_property("age", ["0", "1", "2", "3"]));
        blocks.register(Block::new("minecraft:wool").with_variant_property("color", ["white", "red"]));
        blocks.register(Block::new("minecraft:oak_fence"));
        blocks.register(Block::new("minecraft:moss"));
        blocks.register(
            Block::new("mod:crop")
                .with_variant_property("type", ["corn", "rice"])
                .with_property("age", (0..8).map(|a| a.to_string())),
        );

        let mut acoustics = AcousticsManager::new();
        for name in ["brush", "brush_straw_transition", "straw", "leaves", "bluntwood", "rug", "wool", "woodutility"] {
            acoustics.add_acoustic(Acoustic::new(name, SoundDef::new(name)));
        }
        (blocks, acoustics, BlockMap::default())
    }

    #[test]
    fn test_literal_registration_main_table() {
        let (blocks, acoustics, mut map) = setup();
        assert_eq!(map.register(&blocks, &acoustics, "minecraft:wool", "wool,woodutility"), 1);

        let state = blocks.state("minecraft:wool").unwrap();
        assert_eq!(map.get_block_acoustics(&state, None).names(), vec!["wool", "woodutility"]);
        assert!(map.get_block_acoustics(&state, Some(Substrate::Carpet)).is_none());
        assert!(!map.has_substrate(Substrate::Carpet));
    }

    #[test]
    fn test_substrate_suffix_creates_table() {
        let (blocks, acoustics, mut map) = setup();
        map.register(&blocks, &acoustics, "minecraft:wool+carpet", "rug");

        let state = blocks.state("minecraft:wool").unwrap();
        assert!(map.has_substrate(Substrate::Carpet));
        assert_eq!(map.get_block_acoustics(&state, Some(Substrate::Carpet)).names(), vec!["rug"]);
        assert!(map.get_block_acoustics(&state, None).is_none());
    }

    #[test]
    fn test_wheat_macro_expansion() {
        let (blocks, acoustics, mut map) = setup();
        assert_eq!(map.register(&blocks, &acoustics, "minecraft:wheat", "#wheat"), 10);

        let wheat = blocks.state("minecraft:wheat").unwrap();
        assert!(map.get_block_acoustics(&wheat, None).is_not_emitter());
        assert!(map.get_block_acoustics(&wheat, Some(Substrate::Messy)).is_messy_ground());

        let foliage = |age: &str| {
            let state = wheat.with_property("age", age).unwrap();
            map.get_block_acoustics(&state, Some(Substrate::Foliage)).names()
        };
        assert_eq!(foliage("0"), vec![NOT_EMITTER]);
        assert_eq!(foliage("1"), vec![NOT_EMITTER]);
        assert_eq!(foliage("2"), vec!["brush"]);
        assert_eq!(foliage("3"), vec!["brush"]);
        assert_eq!(foliage("4"), vec!["brush_straw_transition"]);
        assert_eq!(foliage("5"), vec!["brush_straw_transition"]);
        assert_eq!(foliage("6"), vec!["straw"]);
        assert_eq!(foliage("7"), vec!["straw"]);
    }

    #[test]
    fn test_wheat_macro_on_block_with_subtypes() {
        let (blocks, acoustics, mut map) = setup();
        assert_eq!(map.register(&blocks, &acoustics, "mod:crop", "#wheat"), 10);

        let crop = blocks.state("mod:crop").unwrap();
        for kind in ["corn", "rice"] {
            let foliage = |age: &str| {
                let state = crop.with_property("type", kind).unwrap().with_property("age", age).unwrap();
                map.get_block_acoustics(&state, Some(Substrate::Foliage)).names()
            };
            assert_eq!(foliage("0"), vec![NOT_EMITTER]);
            assert_eq!(foliage("2"), vec!["brush"]);
            assert_eq!(foliage("5"), vec!["brush_straw_transition"]);
            assert_eq!(foliage("7"), vec!["straw"]);
        }
        assert!(map.get_block_acoustics(&crop, None).is_not_emitter());
    }

    #[test]
    fn test_beets_macro_on_four_stage_crop() {
        let (blocks, acoustics, mut map) = setup();
        assert_eq!(map.register(&blocks, &acoustics, "minecraft:beetroots", "#beets"), 6);
        let state = blocks
            .state("minecraft:beetroots")
            .unwrap()
            .with_property("age", "3")
            .unwrap();
        assert_eq!(map.get_block_acoustics(&state, Some(Substrate::Foliage)).names(), vec!["brush"]);
    }

    #[test]
    fn test_crop_macro_skips_missing_ages() {
        let (blocks, acoustics, mut map) = setup();
        // beetroots only age to 3, so ages 4..=7 of #crop are skipped
        assert_eq!(map.register(&blocks, &acoustics, "minecraft:beetroots", "#crop"), 6);
    }

    #[test]
    fn test_fence_and_moss_macros() {
        let (blocks, acoustics, mut map) = setup();
        map.register(&blocks, &acoustics, "minecraft:oak_fence", "#fence");
        map.register(&blocks, &acoustics, "minecraft:moss", "#moss");

        let fence = blocks.state("minecraft:oak_fence").unwrap();
        assert!(map.get_block_acoustics(&fence, None).is_not_emitter());
        assert_eq!(map.get_block_acoustics(&fence, Some(Substrate::Fence)).names(), vec!["bluntwood"]);

        let moss = blocks.state("minecraft:moss").unwrap();
        assert_eq!(map.get_block_acoustics(&moss, Some(Substrate::Carpet)).names(), vec!["rug"]);
    }

    #[test]
    fn test_rejected_registrations() {
        let (blocks, acoustics, mut map) = setup();
        assert_eq!(
            map.try_register(&blocks, &acoustics, "minecraft:nope", "wool"),
            Err(RegisterError::UnknownBlock("minecraft:nope".into()))
        );
        assert_eq!(
            map.try_register(&blocks, &acoustics, "minecraft:wool", "#nope"),
            Err(RegisterError::UnknownMacro("#nope".into()))
        );
        assert_eq!(
            map.try_register(&blocks, &acoustics, "minecraft:wool+roof", "wool"),
            Err(RegisterError::UnknownSubstrate("roof".into()))
        );
        assert_eq!(map.register(&blocks, &acoustics, "a:b:c:d", "wool"), 0);
    }

    #[test]
    fn test_generic_fallback_for_variants() {
        let (blocks, acoustics, mut map) = setup();
        map.register(&blocks, &acoustics, "minecraft:wool", "wool");
        map.register(&blocks, &acoustics, "minecraft:wool:red", "rug");

        let white = blocks.state("minecraft:wool").unwrap();
        let red = white.with_property("color", "red").unwrap();
        assert_eq!(map.get_block_acoustics(&white, None).names(), vec!["wool"]);
        assert_eq!(map.get_block_acoustics(&red, None).names(), vec!["rug"]);
    }

    #[test]
    fn test_air_short_circuits() {
        let (_, _, map) = setup();
        assert!(map.get_block_acoustics(&BlockState::air(), None).is_not_emitter());
        assert!(map
            .get_block_acoustics(&BlockState::air(), Some(Substrate::Foliage))
            .is_not_emitter());
    }

    #[test]
    fn test_collect_data_shape() {
        let (blocks, acoustics, mut map) = setup();
        map.register(&blocks, &acoustics, "minecraft:wheat", "#wheat");
        let state = blocks
            .state("minecraft:wheat")
            .unwrap()
            .with_property("age", "6")
            .unwrap();

        let data = map.collect_data(&state);
        assert_eq!(data, vec!["NOT_EMITTER", "foliage:straw", "messy:MESSY_GROUND"]);
    }

    #[test]
    fn test_clear_drops_everything() {
        let (blocks, acoustics, mut map) = setup();
        map.register(&blocks, &acoustics, "minecraft:wheat", "#wheat");
        map.clear();

        let state = blocks.state("minecraft:wheat").unwrap();
        assert!(map.get_block_acoustics(&state, None).is_none());
        assert!(!map.has_substrate(Substrate::Messy));
        assert!(map.collect_data(&state).is_empty());
    }
}
