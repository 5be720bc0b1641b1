//! Footsteps - Acoustic Core Library
//!
//! Decides which footstep sounds a walker makes on the block it steps on:
//! - Acoustic registry and acoustic spec compilation
//! - Block acoustic tables with specific/generic/special key fallback
//! - Substrate tables (carpet, foliage, messy ground, fence tops) and macros
//! - Primitive fallback from a block's native step sound
//! - Footstep solver with edge correction and armor overlays
//! - JSON/RON configuration with hot reload
//!
//! The core is host-agnostic: the game supplies blocks through
//! [`block::BlockLookup`], the world through [`world::BlockAccess`], walkers
//! through [`world::Walker`] and playback through [`solver::SoundSink`].
//! Everything is meant to run on the single client tick thread.

pub mod acoustics;
pub mod association;
pub mod block;
pub mod blockmap;
pub mod config;
pub mod constants;
pub mod error;
pub mod hotreload;
pub mod logging;
pub mod primitive;
pub mod registry;
pub mod solver;
pub mod world;

pub use acoustics::{Acoustic, AcousticRef, Acoustics, AcousticsManager, EventType};
pub use association::Association;
pub use blockmap::{BlockMap, Substrate};
pub use config::FootstepsConfig;
pub use error::{FootstepsError, RegisterError, Result};
pub use registry::Footsteps;
pub use solver::{Solver, SoundSink};
