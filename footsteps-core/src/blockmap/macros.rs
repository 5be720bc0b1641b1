use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{MESSY_GROUND, NOT_EMITTER};
use crate::error::RegisterError;

/// Secondary acoustic channel layered over a block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Substrate {
    Carpet,
    Foliage,
    Messy,
    /// Fence tops, configured as `bigger`
    #[serde(rename = "bigger")]
    Fence,
}

impl Substrate {
    pub const ALL: [Substrate; 4] = [
        Substrate::Carpet,
        Substrate::Foliage,
        Substrate::Messy,
        Substrate::Fence,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Substrate::Carpet => "carpet",
            Substrate::Foliage => "foliage",
            Substrate::Messy => "messy",
            Substrate::Fence => "bigger",
        }
    }
}

impl fmt::Display for Substrate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Substrate {
    type Err = RegisterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "carpet" => Ok(Substrate::Carpet),
            "foliage" => Ok(Substrate::Foliage),
            "messy" => Ok(Substrate::Messy),
            "bigger" => Ok(Substrate::Fence),
            other => Err(RegisterError::UnknownSubstrate(other.to_string())),
        }
    }
}

/// One registration produced by a macro
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MacroEntry {
    pub substrate: Option<Substrate>,
    /// Property applied to the default state before registering
    pub property: Option<(&'static str, &'static str)>,
    pub acoustic: &'static str,
}

impl MacroEntry {
    const fn base(acoustic: &'static str) -> Self {
        Self {
            substrate: None,
            property: None,
            acoustic,
        }
    }

    const fn on(substrate: Substrate, acoustic: &'static str) -> Self {
        Self {
            substrate: Some(substrate),
            property: None,
            acoustic,
        }
    }

    const fn aged(age: &'static str, acoustic: &'static str) -> Self {
        Self {
            substrate: Some(Substrate::Foliage),
            property: Some(("age", age)),
            acoustic,
        }
    }
}

const SAPLING: &[MacroEntry] = &[
    MacroEntry::base(NOT_EMITTER),
    MacroEntry::on(Substrate::Messy, MESSY_GROUND),
    MacroEntry::on(Substrate::Foliage, "straw"),
];

const PLANT: &[MacroEntry] = &[
    MacroEntry::base("leaves"),
    MacroEntry::on(Substrate::Messy, MESSY_GROUND),
    MacroEntry::on(Substrate::Foliage, "brush"),
];

const BUSH: &[MacroEntry] = &[
    MacroEntry::base("leaves"),
    MacroEntry::on(Substrate::Messy, MESSY_GROUND),
    MacroEntry::on(Substrate::Foliage, "brush_straw_transition"),
];

const FENCE: &[MacroEntry] = &[
    MacroEntry::base(NOT_EMITTER),
    MacroEntry::on(Substrate::Fence, "bluntwood"),
];

const VINE: &[MacroEntry] = &[
    MacroEntry::base("straw"),
    MacroEntry::on(Substrate::Messy, MESSY_GROUND),
    MacroEntry::on(Substrate::Foliage, "straw"),
];

const MOSS: &[MacroEntry] = &[
    MacroEntry::base(NOT_EMITTER),
    MacroEntry::on(Substrate::Carpet, "rug"),
];

const WHEAT: &[MacroEntry] = &[
    MacroEntry::base(NOT_EMITTER),
    MacroEntry::on(Substrate::Messy, MESSY_GROUND),
    MacroEntry::aged("0", NOT_EMITTER),
    MacroEntry::aged("1", NOT_EMITTER),
    MacroEntry::aged("2", "brush"),
    MacroEntry::aged("3", "brush"),
    MacroEntry::aged("4", "brush_straw_transition"),
    MacroEntry::aged("5", "brush_straw_transition"),
    MacroEntry::aged("6", "straw"),
    MacroEntry::aged("7", "straw"),
];

const CROP: &[MacroEntry] = &[
    MacroEntry::base(NOT_EMITTER),
    MacroEntry::on(Substrate::Messy, MESSY_GROUND),
    MacroEntry::aged("0", NOT_EMITTER),
    MacroEntry::aged("1", NOT_EMITTER),
    MacroEntry::aged("2", NOT_EMITTER),
    MacroEntry::aged("3", NOT_EMITTER),
    MacroEntry::aged("4", "brush"),
    MacroEntry::aged("5", "brush"),
    MacroEntry::aged("6", "brush"),
    MacroEntry::aged("7", "brush"),
];

const BEETS: &[MacroEntry] = &[
    MacroEntry::base(NOT_EMITTER),
    MacroEntry::on(Substrate::Messy, MESSY_GROUND),
    MacroEntry::aged("0", NOT_EMITTER),
    MacroEntry::aged("1", NOT_EMITTER),
    MacroEntry::aged("2", "brush"),
    MacroEntry::aged("3", "brush"),
];

/// Expansion of a macro token such as `#wheat`
pub fn lookup_macro(token: &str) -> Option<&'static [MacroEntry]> {
    let entries = match token {
        "#sapling" | "#reed" => SAPLING,
        "#plant" => PLANT,
        "#bush" => BUSH,
        "#fence" => FENCE,
        "#vine" => VINE,
        "#moss" => MOSS,
        "#wheat" => WHEAT,
        "#crop" => CROP,
        "#beets" => BEETS,
        _ => return None,
    };
    Some(entries)
}
