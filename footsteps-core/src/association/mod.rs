//! The outcome of one footstep query.

use glam::{DVec3, IVec3};

use crate::acoustics::AcousticRef;
use crate::block::BlockState;

/// Where and how a foot touched down
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FootStrike {
    pub location: DVec3,
    pub is_right_foot: bool,
    /// Body yaw in degrees
    pub rotation: f32,
}

/// Resolved block plus the acoustics to play for a single step.
///
/// Built for one foot-down event and consumed right away.
#[derive(Debug, Clone, Default)]
pub struct Association {
    block: Option<(BlockState, IVec3)>,
    acoustics: Vec<AcousticRef>,
    strike: Option<FootStrike>,
    no_association: bool,
}

impl Association {
    /// Association without a physical block (pure acoustic overlay)
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(state: BlockState, pos: IVec3) -> Self {
        Self {
            block: Some((state, pos)),
            ..Self::default()
        }
    }

    /// Block found but no rule configured for it
    pub fn no_association(state: BlockState, pos: IVec3) -> Self {
        Self {
            no_association: true,
            ..Self::at(state, pos)
        }
    }

    pub fn with_acoustics(mut self, acoustics: &[AcousticRef]) -> Self {
        self.add(acoustics);
        self
    }

    /// Append acoustics, keeping order
    pub fn add(&mut self, acoustics: &[AcousticRef]) {
        if !acoustics.is_empty() {
            self.acoustics.extend(acoustics.iter().cloned());
            self.no_association = false;
        }
    }

    pub fn set_strike(&mut self, strike: FootStrike) {
        self.strike = Some(strike);
    }

    pub fn state(&self) -> Option<&BlockState> {
        self.block.as_ref().map(|(state, _)| state)
    }

    pub fn pos(&self) -> Option<IVec3> {
        self.block.as_ref().map(|(_, pos)| *pos)
    }

    pub fn acoustics(&self) -> &[AcousticRef] {
        &self.acoustics
    }

    /// Acoustic names in play order
    pub fn names(&self) -> Vec<&str> {
        self.acoustics.iter().map(|a| a.name()).collect()
    }

    pub fn strike(&self) -> Option<&FootStrike> {
        self.strike.as_ref()
    }

    /// A block was found at this position but nothing is configured for it
    pub fn is_no_association(&self) -> bool {
        self.no_association
    }

    pub fn is_empty(&self) -> bool {
        self.acoustics.is_empty()
    }
}
