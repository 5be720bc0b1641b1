//! Primitive fallback: acoustics inferred from a block's native step sound.
//!
//! Used as the resolver of the main block table, so blocks without an
//! explicit rule still get a footstep from their sound type.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::sync::Arc;

use tracing::{trace, warn};

use crate::acoustics::{Acoustic, Acoustics, AcousticsManager, SoundDef};
use crate::block::{BlockState, SoundType};
use crate::blockmap::{AcousticProfile, AcousticResolver};
use crate::constants::UNDEFINED_SOUND;

/// Table of `sound` and `sound@substrate` → acoustics.
///
/// Shared with the main block table through `Rc`; registration goes through
/// interior mutability on the tick thread.
#[derive(Debug)]
pub struct PrimitiveMap {
    table: RefCell<HashMap<String, Acoustics>>,
    vanilla_fallback: Cell<bool>,
}

impl PrimitiveMap {
    pub fn new() -> Self {
        Self {
            table: RefCell::new(HashMap::new()),
            vanilla_fallback: Cell::new(true),
        }
    }

    /// Register `value` for `key` (`sound` or `sound@substrate`)
    pub fn register(&self, acoustics: &AcousticsManager, key: &str, value: &str) {
        let key = key.trim();
        if key.is_empty() || key.starts_with('@') || key.ends_with('@') {
            warn!(key, "Primitive registration skipped, malformed key");
            return;
        }
        self.table
            .borrow_mut()
            .insert(key.to_string(), acoustics.compile_acoustics(value));
    }

    /// Acoustics registered for `name`, or `name@substrate` when given
    pub fn get(&self, name: &str, substrate: Option<&str>) -> Option<Acoustics> {
        let table = self.table.borrow();
        match substrate {
            Some(substrate) => table.get(&format!("{name}@{substrate}")).cloned(),
            None => table.get(name).cloned(),
        }
    }

    /// Whether unmatched blocks fall back to their native step sound
    pub fn set_vanilla_fallback(&self, enabled: bool) {
        self.vanilla_fallback.set(enabled);
    }

    pub fn len(&self) -> usize {
        self.table.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.table.borrow_mut().clear();
    }

    fn lookup(&self, sound: &SoundType) -> Option<Acoustics> {
        let substrate = format!("{}_{}", two_decimals(sound.volume), two_decimals(sound.pitch));
        let name = sound.step_name().unwrap_or(UNDEFINED_SOUND);

        if let Some(found) = self.get(name, Some(&substrate)) {
            return Some(found);
        }
        if sound.step_name().is_none() {
            if let Some(found) = sound
                .break_sound
                .as_deref()
                .and_then(|b| self.get(name, Some(&format!("break_{b}"))))
            {
                return Some(found);
            }
        }
        self.get(name, None)
    }
}

/// Two-decimal key fragment with ties rounded away from zero (`0.125` → `0.13`)
fn two_decimals(value: f32) -> String {
    let rounded = (f64::from(value) * 100.0).round() / 100.0;
    format!("{rounded:.2}")
}

impl Default for PrimitiveMap {
    fn default() -> Self {
        Self::new()
    }
}

impl AcousticResolver for PrimitiveMap {
    fn resolve(&self, state: &BlockState) -> Option<AcousticProfile> {
        if state.is_air() {
            return Some(AcousticProfile::Static(Acoustics::NotEmitter));
        }
        let sound = state.sound_type()?;
        if let Some(found) = self.lookup(sound) {
            trace!(block = state.name(), "Primitive acoustics matched");
            return Some(AcousticProfile::Static(found));
        }
        if sound.step_name().is_some() && self.vanilla_fallback.get() {
            trace!(block = state.name(), "Falling back to native step sound");
            return Some(AcousticProfile::Dynamic(vanilla_step_acoustics));
        }
        None
    }
}

/// One-off acoustic playing the state's native step sound
pub fn vanilla_step_acoustics(state: &BlockState) -> Acoustics {
    let Some((sound, step)) = state
        .sound_type()
        .and_then(|sound| sound.step_name().map(|step| (sound, step)))
    else {
        return Acoustics::None;
    };
    let acoustic = Acoustic::new(
        format!("vanilla:{step}"),
        SoundDef {
            sound: step.to_string(),
            volume: sound.volume,
            pitch: sound.pitch,
        },
    );
    Acoustics::Resolved(Arc::from(vec![Arc::new(acoustic)]))
}
