//! Narrow world and walker interfaces implemented by the host engine.

use std::collections::HashMap;

use glam::{DVec3, IVec3};
use serde::{Deserialize, Serialize};

use crate::block::BlockState;

/// Read access to the block grid
pub trait BlockAccess {
    /// Block state at `pos`; unloaded or empty cells report air
    fn block_state(&self, pos: IVec3) -> BlockState;
}

/// Armor weight class worn by a walker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArmorClass {
    None,
    Light,
    Medium,
    Crystal,
    Heavy,
}

impl ArmorClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArmorClass::None => "none",
            ArmorClass::Light => "light",
            ArmorClass::Medium => "medium",
            ArmorClass::Crystal => "crystal",
            ArmorClass::Heavy => "heavy",
        }
    }
}

/// An entity that produces footsteps
pub trait Walker {
    /// Feet position (bottom center of the bounding box)
    fn position(&self) -> DVec3;
    fn motion(&self) -> DVec3;
    /// Body yaw in degrees, unwrapped
    fn yaw(&self) -> f32;
    fn is_in_water(&self) -> bool;
    /// Head submerged, as opposed to wading
    fn is_head_in_water(&self) -> bool;
    /// Effective armor class over all armor slots
    fn armor_class(&self) -> ArmorClass {
        ArmorClass::None
    }
    /// Armor class of the boots only
    fn foot_armor_class(&self) -> ArmorClass {
        ArmorClass::None
    }
}

/// Neighbor helpers on block positions (`+x` east, `+z` south)
pub trait BlockPosExt {
    fn up(self) -> Self;
    fn down(self) -> Self;
    fn east(self) -> Self;
    fn west(self) -> Self;
    fn south(self) -> Self;
    fn north(self) -> Self;
}

impl BlockPosExt for IVec3 {
    fn up(self) -> Self {
        self + IVec3::Y
    }

    fn down(self) -> Self {
        self - IVec3::Y
    }

    fn east(self) -> Self {
        self + IVec3::X
    }

    fn west(self) -> Self {
        self - IVec3::X
    }

    fn south(self) -> Self {
        self + IVec3::Z
    }

    fn north(self) -> Self {
        self - IVec3::Z
    }
}

/// Sparse block grid; cells never set are air
#[derive(Debug, Default, Clone)]
pub struct SparseWorld {
    blocks: HashMap<IVec3, BlockState>,
}

impl SparseWorld {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, pos: IVec3, state: BlockState) {
        if state.is_air() {
            self.blocks.remove(&pos);
        } else {
            self.blocks.insert(pos, state);
        }
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

impl BlockAccess for SparseWorld {
    fn block_state(&self, pos: IVec3) -> BlockState {
        self.blocks.get(&pos).cloned().unwrap_or_else(BlockState::air)
    }
}

/// Plain-data walker, for hosts that snapshot entity state each tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalkerSnapshot {
    pub position: DVec3,
    pub motion: DVec3,
    pub yaw: f32,
    #[serde(default)]
    pub in_water: bool,
    #[serde(default)]
    pub head_in_water: bool,
    pub armor: ArmorClass,
    pub foot_armor: ArmorClass,
}

impl WalkerSnapshot {
    /// Walker on the ground at `position`, moving with a normal downward motion
    pub fn standing(position: DVec3, yaw: f32) -> Self {
        Self {
            position,
            motion: DVec3::new(0.0, -0.0784, 0.0),
            yaw,
            in_water: false,
            head_in_water: false,
            armor: ArmorClass::None,
            foot_armor: ArmorClass::None,
        }
    }
}

impl Walker for WalkerSnapshot {
    fn position(&self) -> DVec3 {
        self.position
    }

    fn motion(&self) -> DVec3 {
        self.motion
    }

    fn yaw(&self) -> f32 {
        self.yaw
    }

    fn is_in_water(&self) -> bool {
        self.in_water
    }

    fn is_head_in_water(&self) -> bool {
        self.head_in_water
    }

    fn armor_class(&self) -> ArmorClass {
        self.armor
    }

    fn foot_armor_class(&self) -> ArmorClass {
        self.foot_armor
    }
}
