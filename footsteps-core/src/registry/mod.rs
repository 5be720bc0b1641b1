//! The footstep registry: every table the solver reads, loaded from config.

use std::collections::HashMap;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::acoustics::{Acoustic, AcousticRef, Acoustics, AcousticsManager};
use crate::block::{BlockLookup, BlockState};
use crate::blockmap::{BlockMap, Substrate};
use crate::config::{FootstepOptions, FootstepsConfig};
use crate::logging::TimingSpan;
use crate::primitive::PrimitiveMap;
use crate::world::ArmorClass;

/// Counts from one [`Footsteps::load`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadReport {
    pub acoustics: usize,
    pub primitives: usize,
    pub block_entries: usize,
    pub block_rules: usize,
    pub armor: usize,
}

impl LoadReport {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// Acoustics manager, block map, primitive table and armor tables.
///
/// Confined to the tick thread (`!Send`).
#[derive(Debug)]
pub struct Footsteps {
    acoustics: AcousticsManager,
    blocks: BlockMap,
    primitives: Rc<PrimitiveMap>,
    armor: HashMap<ArmorClass, Acoustics>,
    foot_armor: HashMap<ArmorClass, Acoustics>,
    options: FootstepOptions,
}

impl Footsteps {
    pub fn new() -> Self {
        let primitives = Rc::new(PrimitiveMap::new());
        Self {
            acoustics: AcousticsManager::new(),
            blocks: BlockMap::new(primitives.clone()),
            primitives,
            armor: HashMap::new(),
            foot_armor: HashMap::new(),
            options: FootstepOptions::default(),
        }
    }

    /// Register everything in `config`: acoustics first, then the tables
    /// that reference them
    pub fn load(&mut self, config: &FootstepsConfig, lookup: &dyn BlockLookup) -> LoadReport {
        let _span = TimingSpan::new("footsteps_load");
        let mut report = LoadReport::default();

        self.set_options(config.options);

        for def in &config.acoustics {
            self.add_acoustic(def.clone());
            report.acoustics += 1;
        }
        for (key, value) in &config.primitives {
            self.register_primitive(key, value);
            report.primitives += 1;
        }
        for (key, value) in &config.blocks {
            report.block_entries += 1;
            report.block_rules += self.register_block(lookup, key, value);
        }
        for (class, spec) in &config.armor {
            self.set_armor_acoustics(*class, spec);
            report.armor += 1;
        }
        for (class, spec) in &config.foot_armor {
            self.set_foot_armor_acoustics(*class, spec);
            report.armor += 1;
        }

        info!(
            acoustics = report.acoustics,
            primitives = report.primitives,
            block_entries = report.block_entries,
            block_rules = report.block_rules,
            armor = report.armor,
            "Footstep configuration loaded"
        );
        report
    }

    /// Drop every registration (config reload path)
    pub fn clear(&mut self) {
        self.acoustics.clear();
        self.blocks.clear();
        self.primitives.clear();
        self.armor.clear();
        self.foot_armor.clear();
        debug!("Footstep registry cleared");
    }

    pub fn add_acoustic(&mut self, acoustic: impl Into<Acoustic>) -> AcousticRef {
        self.acoustics.add_acoustic(acoustic)
    }

    /// Register a block entry; returns the number of table rules written
    pub fn register_block(&mut self, lookup: &dyn BlockLookup, key: &str, value: &str) -> usize {
        self.blocks.register(lookup, &self.acoustics, key, value)
    }

    pub fn register_primitive(&mut self, key: &str, value: &str) {
        self.primitives.register(&self.acoustics, key, value);
        self.blocks.invalidate();
    }

    pub fn set_armor_acoustics(&mut self, class: ArmorClass, spec: &str) {
        self.armor.insert(class, self.acoustics.compile_acoustics(spec));
    }

    pub fn set_foot_armor_acoustics(&mut self, class: ArmorClass, spec: &str) {
        self.foot_armor.insert(class, self.acoustics.compile_acoustics(spec));
    }

    /// Overlay acoustics for the walker's armor, if any are configured
    pub fn armor_acoustics(&self, class: ArmorClass) -> Option<&[AcousticRef]> {
        non_empty(self.armor.get(&class))
    }

    /// Overlay acoustics for the walker's boots, if any are configured
    pub fn foot_armor_acoustics(&self, class: ArmorClass) -> Option<&[AcousticRef]> {
        non_empty(self.foot_armor.get(&class))
    }

    pub fn get_block_acoustics(&self, state: &BlockState, substrate: Option<Substrate>) -> Acoustics {
        self.blocks.get_block_acoustics(state, substrate)
    }

    pub fn acoustics(&self) -> &AcousticsManager {
        &self.acoustics
    }

    pub fn block_map(&self) -> &BlockMap {
        &self.blocks
    }

    pub fn primitives(&self) -> &PrimitiveMap {
        &self.primitives
    }

    pub fn options(&self) -> FootstepOptions {
        self.options
    }

    pub fn set_options(&mut self, options: FootstepOptions) {
        if options.vanilla_fallback != self.options.vanilla_fallback {
            self.blocks.invalidate();
        }
        self.primitives.set_vanilla_fallback(options.vanilla_fallback);
        self.options = options;
    }
}

impl Default for Footsteps {
    fn default() -> Self {
        Self::new()
    }
}

fn non_empty(acoustics: Option<&Acoustics>) -> Option<&[AcousticRef]> {
    acoustics
        .map(Acoustics::as_slice)
        .filter(|list| !list.is_empty())
}
