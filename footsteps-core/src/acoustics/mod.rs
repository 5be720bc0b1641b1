//! Acoustic definitions and the name → acoustic registry.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::constants::{MESSY_GROUND, NOT_EMITTER};

/// What the walker is doing when a sound plays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Walk,
    Wander,
    Swim,
    Run,
    Jump,
    Land,
    Climb,
    ClimbRun,
    Down,
    DownRun,
    Up,
    UpRun,
}

/// One playable sound
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoundDef {
    pub sound: String,
    #[serde(default = "unit")]
    pub volume: f32,
    #[serde(default = "unit")]
    pub pitch: f32,
}

fn unit() -> f32 {
    1.0
}

impl SoundDef {
    pub fn new(sound: impl Into<String>) -> Self {
        Self {
            sound: sound.into(),
            volume: 1.0,
            pitch: 1.0,
        }
    }
}

/// Config form of an acoustic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcousticDef {
    pub name: String,
    #[serde(default)]
    pub sound: Option<SoundDef>,
    #[serde(default)]
    pub events: BTreeMap<EventType, SoundDef>,
}

/// A named footstep sound profile
#[derive(Debug, Clone, PartialEq)]
pub struct Acoustic {
    name: String,
    sound: Option<SoundDef>,
    events: BTreeMap<EventType, SoundDef>,
}

/// Shared handle to a registered acoustic
pub type AcousticRef = Arc<Acoustic>;

impl Acoustic {
    pub fn new(name: impl Into<String>, sound: SoundDef) -> Self {
        Self {
            name: name.into(),
            sound: Some(sound),
            events: BTreeMap::new(),
        }
    }

    pub fn with_event(mut self, event: EventType, sound: SoundDef) -> Self {
        self.events.insert(event, sound);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sound for `event`, falling back to the default sound
    pub fn sound_for(&self, event: EventType) -> Option<&SoundDef> {
        self.events.get(&event).or(self.sound.as_ref())
    }
}

impl From<AcousticDef> for Acoustic {
    fn from(def: AcousticDef) -> Self {
        Self {
            name: def.name,
            sound: def.sound,
            events: def.events,
        }
    }
}

/// Resolved acoustics for one lookup.
///
/// The sentinels are explicit variants rather than special list instances.
#[derive(Debug, Clone)]
pub enum Acoustics {
    /// No rule found
    None,
    /// The block never produces a footstep
    NotEmitter,
    /// Messy ground marker (MESSY substrate)
    MessyGround,
    /// Ordered acoustic list, possibly empty
    Resolved(Arc<[AcousticRef]>),
}

impl Acoustics {
    pub fn is_none(&self) -> bool {
        matches!(self, Acoustics::None)
    }

    pub fn is_not_emitter(&self) -> bool {
        matches!(self, Acoustics::NotEmitter)
    }

    pub fn is_messy_ground(&self) -> bool {
        matches!(self, Acoustics::MessyGround)
    }

    /// Playable acoustics; sentinels have none
    pub fn as_slice(&self) -> &[AcousticRef] {
        match self {
            Acoustics::Resolved(list) => list,
            _ => &[],
        }
    }

    /// Textual form used by diagnostics
    pub fn names(&self) -> Vec<String> {
        match self {
            Acoustics::None => Vec::new(),
            Acoustics::NotEmitter => vec![NOT_EMITTER.to_string()],
            Acoustics::MessyGround => vec![MESSY_GROUND.to_string()],
            Acoustics::Resolved(list) => list.iter().map(|a| a.name().to_string()).collect(),
        }
    }

    /// Both values share the same list (or are the same sentinel)
    pub fn same_as(&self, other: &Acoustics) -> bool {
        match (self, other) {
            (Acoustics::Resolved(a), Acoustics::Resolved(b)) => Arc::ptr_eq(a, b),
            (Acoustics::None, Acoustics::None)
            | (Acoustics::NotEmitter, Acoustics::NotEmitter)
            | (Acoustics::MessyGround, Acoustics::MessyGround) => true,
            _ => false,
        }
    }
}

impl fmt::Display for Acoustics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.names().join(","))
    }
}

/// Registry of named acoustics and compiler of acoustic specs
#[derive(Debug)]
pub struct AcousticsManager {
    acoustics: HashMap<String, AcousticRef>,
    empty: Arc<[AcousticRef]>,
}

impl AcousticsManager {
    pub fn new() -> Self {
        Self {
            acoustics: HashMap::new(),
            empty: Arc::from(Vec::new()),
        }
    }

    /// Register an acoustic; a later acoustic with the same name replaces it
    pub fn add_acoustic(&mut self, acoustic: impl Into<Acoustic>) -> AcousticRef {
        let acoustic: AcousticRef = Arc::new(acoustic.into());
        if self
            .acoustics
            .insert(acoustic.name().to_string(), Arc::clone(&acoustic))
            .is_some()
        {
            debug!(name = acoustic.name(), "Acoustic replaced");
        }
        acoustic
    }

    pub fn get_acoustic(&self, name: &str) -> Option<AcousticRef> {
        self.acoustics.get(name).cloned()
    }

    /// Compile `NOT_EMITTER`, `MESSY_GROUND` or a comma-separated name list.
    ///
    /// Unknown names are logged and dropped. A spec with no known name
    /// compiles to the shared empty list.
    pub fn compile_acoustics(&self, spec: &str) -> Acoustics {
        let spec = spec.trim();
        if spec == NOT_EMITTER {
            return Acoustics::NotEmitter;
        }
        if spec == MESSY_GROUND {
            return Acoustics::MessyGround;
        }

        let list: Vec<AcousticRef> = spec
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .filter_map(|name| {
                let found = self.get_acoustic(name);
                if found.is_none() {
                    warn!(name, spec, "Unknown acoustic dropped");
                }
                found
            })
            .collect();

        if list.is_empty() {
            Acoustics::Resolved(Arc::clone(&self.empty))
        } else {
            Acoustics::Resolved(Arc::from(list))
        }
    }

    /// The shared empty list returned for specs with no known names
    pub fn empty(&self) -> Acoustics {
        Acoustics::Resolved(Arc::clone(&self.empty))
    }

    pub fn count(&self) -> usize {
        self.acoustics.len()
    }

    pub fn clear(&mut self) {
        self.acoustics.clear();
    }
}

impl Default for AcousticsManager {
    fn default() -> Self {
        Self::new()
    }
}
