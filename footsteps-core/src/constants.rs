//! Centralized constants for the footstep core.
//!
//! The numeric thresholds are tuned values; keep them literal.

// =====================================================
// Sentinel tokens
// =====================================================

/// Acoustic spec token: the block never emits a footstep sound
pub const NOT_EMITTER: &str = "NOT_EMITTER";

/// Acoustic spec token: the block is messy ground (used by the MESSY substrate)
pub const MESSY_GROUND: &str = "MESSY_GROUND";

/// Step sound name used when a block's native step sound is missing
pub const UNDEFINED_SOUND: &str = "UNDEFINED";

/// Acoustic played while swimming instead of regular footsteps
pub const SWIM_ACOUSTIC: &str = "_SWIM";

/// Acoustic layered when walking through messy foliage
pub const MESSY_ACOUSTIC: &str = "_MESSY";

/// Prefix for macro values in block registrations
pub const MACRO_PREFIX: char = '#';

/// Name of the air block
pub const AIR_BLOCK: &str = "minecraft:air";

/// Namespace assumed when a block name has none
pub const DEFAULT_NAMESPACE: &str = "minecraft";

// =====================================================
// Solver
// =====================================================

/// Vertical motion below this is treated as bounce jitter and produces no step
pub const MIN_VERTICAL_MOTION: f64 = 0.02;

/// Lateral distance of each foot from the body center
pub const FOOT_DISTANCE_TO_CENTER: f64 = 0.2;

/// How far below the walker's feet the stepped-on block is probed
pub const FOOT_PROBE_DEPTH: f64 = 0.1;

/// Normalized distance from the block center beyond which a neighbor is tried
pub const EDGE_THRESHOLD: f64 = 0.2;

// =====================================================
// Swimming
// =====================================================

/// Horizontal motion weight in the swim volume
pub const SWIM_HORIZONTAL_WEIGHT: f64 = 0.2;

/// Vertical motion weight in the swim volume
pub const SWIM_VERTICAL_WEIGHT: f64 = 1.0;

/// Final scale applied to the swim volume
pub const SWIM_VOLUME_SCALE: f64 = 0.35;

/// Upper bound of the swim volume
pub const SWIM_VOLUME_MAX: f32 = 1.0;
