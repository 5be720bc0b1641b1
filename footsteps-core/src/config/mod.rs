//! Footstep configuration files (JSON or RON).

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::acoustics::AcousticDef;
use crate::error::{FootstepsError, Result};
use crate::world::ArmorClass;

/// Behavior switches for the solver and the primitive fallback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FootstepOptions {
    /// Layer armor acoustics over every step
    pub armor_accents: bool,
    /// Layer boot acoustics over every step
    pub foot_armor_accents: bool,
    /// Play the native step sound of blocks without any rule
    pub vanilla_fallback: bool,
}

impl Default for FootstepOptions {
    fn default() -> Self {
        Self {
            armor_accents: true,
            foot_armor_accents: true,
            vanilla_fallback: true,
        }
    }
}

/// One footstep configuration document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FootstepsConfig {
    pub options: FootstepOptions,
    pub acoustics: Vec<AcousticDef>,
    /// `sound` or `sound@volume_pitch` → acoustic spec
    pub primitives: BTreeMap<String, String>,
    /// Block key → acoustic spec or `#macro`
    pub blocks: BTreeMap<String, String>,
    pub armor: BTreeMap<ArmorClass, String>,
    pub foot_armor: BTreeMap<ArmorClass, String>,
}

impl FootstepsConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_ron(ron: &str) -> Result<Self> {
        Ok(ron::from_str(ron)?)
    }

    /// Load a `.json` or `.ron` file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json(&content),
            Some("ron") => Self::from_ron(&content),
            _ => Err(FootstepsError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Number of entries that will be registered
    pub fn entry_count(&self) -> usize {
        self.acoustics.len()
            + self.primitives.len()
            + self.blocks.len()
            + self.armor.len()
            + self.foot_armor.len()
    }
}
