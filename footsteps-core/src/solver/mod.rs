//! Per-footstep resolution.
//!
//! For every foot-down event the solver turns the walker's position into a
//! block position, searches that block and its edge neighbors for acoustics
//! (carpet above, fence below, foliage above), and layers armor sounds on top.
//! Everything runs on the tick thread against the borrowed [`Footsteps`]
//! registry.

use glam::{DVec3, IVec3};
use tracing::{debug, trace};

use crate::acoustics::{Acoustic, AcousticRef, Acoustics, EventType};
use crate::association::{Association, FootStrike};
use crate::blockmap::Substrate;
use crate::constants::{
    EDGE_THRESHOLD, FOOT_DISTANCE_TO_CENTER, FOOT_PROBE_DEPTH, MESSY_ACOUSTIC, MIN_VERTICAL_MOTION,
    SWIM_ACOUSTIC, SWIM_HORIZONTAL_WEIGHT, SWIM_VERTICAL_WEIGHT, SWIM_VOLUME_MAX, SWIM_VOLUME_SCALE,
};
use crate::registry::Footsteps;
use crate::world::{BlockAccess, BlockPosExt, Walker};

/// Playback side of the host: receives every sound the solver decides on
pub trait SoundSink {
    fn play(&mut self, location: DVec3, acoustic: &Acoustic, event: EventType, volume: f32);
}

/// A sound handed to a queueing sink
#[derive(Debug, Clone, PartialEq)]
pub struct PlayedSound {
    pub location: DVec3,
    pub acoustic: String,
    pub event: EventType,
    pub volume: f32,
}

/// Queue sounds for the host to drain after the tick
impl SoundSink for Vec<PlayedSound> {
    fn play(&mut self, location: DVec3, acoustic: &Acoustic, event: EventType, volume: f32) {
        self.push(PlayedSound {
            location,
            acoustic: acoustic.name().to_string(),
            event,
            volume,
        });
    }
}

/// Footstep solver over a loaded registry
#[derive(Debug, Clone, Copy)]
pub struct Solver<'a> {
    footsteps: &'a Footsteps,
}

impl<'a> Solver<'a> {
    pub fn new(footsteps: &'a Footsteps) -> Self {
        Self { footsteps }
    }

    /// Resolve the step of one foot, armor overlay included.
    ///
    /// Returns `None` while the walker's vertical motion is below the jitter
    /// threshold, whatever else is configured.
    pub fn find_association_for_player(
        &self,
        world: &dyn BlockAccess,
        walker: &dyn Walker,
        vertical_offset: f64,
        right_foot: bool,
    ) -> Option<Association> {
        if walker.motion().y.abs() < MIN_VERTICAL_MOTION {
            trace!("Vertical motion below jitter threshold");
            return None;
        }

        let position = walker.position();
        let foot = foot_location(position, walker.yaw(), right_foot);
        let pos = IVec3::new(
            foot.x.floor() as i32,
            (position.y - FOOT_PROBE_DEPTH - vertical_offset).floor() as i32,
            foot.z.floor() as i32,
        );

        let found = self.find_association_for_location(world, walker, pos);
        let mut association = self.add_sound_overlay(walker, found)?;
        association.set_strike(FootStrike {
            location: DVec3::new(foot.x, position.y, foot.z),
            is_right_foot: right_foot,
            rotation: walker.yaw(),
        });
        Some(association)
    }

    /// Resolve `pos`, retrying the neighbors the walker is leaning towards
    pub fn find_association_for_location(
        &self,
        world: &dyn BlockAccess,
        walker: &dyn Walker,
        pos: IVec3,
    ) -> Option<Association> {
        if let Some(found) = self.find_association_for_block(world, pos) {
            return Some(found);
        }

        let position = walker.position();
        let xdang = (position.x - f64::from(pos.x)) * 2.0 - 1.0;
        let zdang = (position.z - f64::from(pos.z)) * 2.0 - 1.0;
        if xdang.abs().max(zdang.abs()) <= EDGE_THRESHOLD {
            return None;
        }

        let along_x = if xdang > 0.0 { pos.east() } else { pos.west() };
        let along_z = if zdang > 0.0 { pos.south() } else { pos.north() };
        let (first, second) = if xdang.abs() >= zdang.abs() {
            (along_x, along_z)
        } else {
            (along_z, along_x)
        };

        trace!(?pos, xdang, zdang, "Trying edge neighbors");
        self.find_association_for_block(world, first)
            .or_else(|| self.find_association_for_block(world, second))
    }

    /// Resolve a single block position.
    ///
    /// `None` means nothing there emits (keep searching). A block without
    /// any rule yields a no-association result with an empty list.
    pub fn find_association_for_block(&self, world: &dyn BlockAccess, pos: IVec3) -> Option<Association> {
        let mut state = world.block_state(pos);
        let mut pos = pos;
        let above_pos = pos.up();
        let above = world.block_state(above_pos);

        let carpet = self.footsteps.get_block_acoustics(&above, Some(Substrate::Carpet));
        let acoustics = if carpet.is_none() || carpet.is_not_emitter() {
            let mut acoustics = Acoustics::None;
            if state.is_air() {
                let below_pos = pos.down();
                let below = world.block_state(below_pos);
                acoustics = self.footsteps.get_block_acoustics(&below, Some(Substrate::Fence));
                if !acoustics.is_none() {
                    trace!(block = below.name(), "Fence top under air");
                    pos = below_pos;
                    state = below;
                }
            }
            if acoustics.is_none() {
                acoustics = self.footsteps.get_block_acoustics(&state, None);
            }
            if !acoustics.is_none() && !acoustics.is_not_emitter() {
                let foliage = self.footsteps.get_block_acoustics(&above, Some(Substrate::Foliage));
                if !foliage.is_none() && !foliage.is_not_emitter() {
                    acoustics = concat(&acoustics, &foliage);
                }
            }
            acoustics
        } else {
            trace!(block = above.name(), "Carpet above takes precedence");
            pos = above_pos;
            state = above;
            carpet
        };

        if acoustics.is_not_emitter() {
            return None;
        }
        if acoustics.as_slice().is_empty() {
            debug!(block = state.name(), ?pos, "No footstep association");
            return Some(Association::no_association(state, pos));
        }
        Some(Association::at(state, pos).with_acoustics(acoustics.as_slice()))
    }

    /// Messy foliage on top of `pos`, if the block above is messy ground
    pub fn find_association_messy_foliage(&self, world: &dyn BlockAccess, pos: IVec3) -> Option<Association> {
        let above_pos = pos.up();
        let above = world.block_state(above_pos);
        if above.is_air() {
            return None;
        }
        self.footsteps
            .get_block_acoustics(&above, Some(Substrate::Messy))
            .is_messy_ground()
            .then(|| Association::at(above, above_pos))
    }

    /// Play the messy-foliage accent for a step on `pos`, if there is one
    pub fn play_messy_foliage(
        &self,
        world: &dyn BlockAccess,
        walker: &dyn Walker,
        pos: IVec3,
        sink: &mut dyn SoundSink,
    ) -> bool {
        if self.find_association_messy_foliage(world, pos).is_none() {
            return false;
        }
        match self.footsteps.acoustics().get_acoustic(MESSY_ACOUSTIC) {
            Some(messy) => {
                sink.play(walker.position(), &messy, EventType::Walk, 1.0);
                true
            }
            None => false,
        }
    }

    /// Conditions that replace regular footsteps entirely
    pub fn has_special_stopping_conditions(&self, walker: &dyn Walker) -> bool {
        walker.is_in_water()
    }

    /// Play the swim sound instead of a footstep; `true` when regular
    /// footsteps must be skipped
    pub fn play_special_stopping_conditions(&self, walker: &dyn Walker, sink: &mut dyn SoundSink) -> bool {
        if !walker.is_in_water() {
            return false;
        }
        let event = if walker.is_head_in_water() {
            EventType::Swim
        } else {
            EventType::Walk
        };
        match self.footsteps.acoustics().get_acoustic(SWIM_ACOUSTIC) {
            Some(swim) => sink.play(walker.position(), &swim, event, swim_volume(walker.motion())),
            None => debug!("Swim acoustic not registered"),
        }
        true
    }

    /// Layer armor and boot acoustics over `association`, synthesizing an
    /// empty association when only armor sounds exist
    pub fn add_sound_overlay(&self, walker: &dyn Walker, association: Option<Association>) -> Option<Association> {
        let options = self.footsteps.options();
        let armor = options
            .armor_accents
            .then(|| self.footsteps.armor_acoustics(walker.armor_class()))
            .flatten();
        let foot = options
            .foot_armor_accents
            .then(|| self.footsteps.foot_armor_acoustics(walker.foot_armor_class()))
            .flatten()
            .filter(|foot| !armor.is_some_and(|armor| same_names(armor, foot)));

        if armor.is_none() && foot.is_none() {
            return association;
        }

        let mut association = association.unwrap_or_default();
        if let Some(armor) = armor {
            association.add(armor);
        }
        if let Some(foot) = foot {
            association.add(foot);
        }
        Some(association)
    }

    /// Play every acoustic of `association` at its strike location
    pub fn play_association(
        &self,
        walker: &dyn Walker,
        association: &Association,
        event: EventType,
        sink: &mut dyn SoundSink,
    ) {
        let location = association
            .strike()
            .map_or_else(|| walker.position(), |strike| strike.location);
        for acoustic in association.acoustics() {
            sink.play(location, acoustic, event, 1.0);
        }
    }
}

/// Where a foot touches down: offset sideways from the body center
pub fn foot_location(position: DVec3, yaw: f32, right_foot: bool) -> DVec3 {
    let rotation = f64::from(wrap_degrees(yaw)).to_radians();
    let distance = if right_foot {
        -FOOT_DISTANCE_TO_CENTER
    } else {
        FOOT_DISTANCE_TO_CENTER
    };
    DVec3::new(
        position.x + rotation.cos() * distance,
        position.y,
        position.z + rotation.sin() * distance,
    )
}

/// Swim sound volume from the walker's motion
pub fn swim_volume(motion: DVec3) -> f32 {
    let weighted = motion.x * motion.x * SWIM_HORIZONTAL_WEIGHT
        + motion.y * motion.y * SWIM_VERTICAL_WEIGHT
        + motion.z * motion.z * SWIM_HORIZONTAL_WEIGHT;
    ((weighted.sqrt() * SWIM_VOLUME_SCALE) as f32).min(SWIM_VOLUME_MAX)
}

/// Wrap an angle in degrees into `[-180, 180)`
fn wrap_degrees(degrees: f32) -> f32 {
    (degrees + 180.0).rem_euclid(360.0) - 180.0
}

fn concat(first: &Acoustics, second: &Acoustics) -> Acoustics {
    let list: Vec<_> = first.as_slice().iter().chain(second.as_slice()).cloned().collect();
    Acoustics::Resolved(list.into())
}

fn same_names(a: &[AcousticRef], b: &[AcousticRef]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(a, b)| a.name() == b.name())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::acoustics::SoundDef;
    use crate::block::{Block, BlockRegistry, BlockState, SoundType};
    use crate::config::FootstepOptions;
    use crate::world::{ArmorClass, SparseWorld, WalkerSnapshot};

    struct Fixture {
        blocks: BlockRegistry,
        footsteps: Footsteps,
        world: SparseWorld,
    }

    impl Fixture {
        fn new() -> Self {
            let mut blocks = BlockRegistry::new();
            blocks.register(Block::new("minecraft:stone"));
            blocks.register(Block::new("minecraft:carpet"));
            blocks.register(Block::new("minecraft:snow_layer"));
            blocks.register(Block::new("minecraft:oak_fence"));
            blocks.register(Block::new("minecraft:tallgrass"));
            blocks.register(Block::new("minecraft:sapling"));
            blocks.register(Block::new("minecraft:dirt"));

            let mut footsteps = Footsteps::new();
            for name in [
                "hardstone", "rug", "bluntwood", "brush", "leaves", "straw", "metalbar", "chainmail", "_SWIM",
                "_MESSY",
            ] {
                footsteps.add_acoustic(Acoustic::new(name, SoundDef::new(format!("footsteps.{name}"))));
            }
            footsteps.set_options(FootstepOptions {
                vanilla_fallback: false,
                ..FootstepOptions::default()
            });
            for (key, value) in [
                ("minecraft:stone", "hardstone"),
                ("minecraft:carpet+carpet", "rug"),
                ("minecraft:carpet", "NOT_EMITTER"),
                ("minecraft:snow_layer+carpet", "NOT_EMITTER"),
                ("minecraft:oak_fence", "#fence"),
                ("minecraft:tallgrass", "#plant"),
                ("minecraft:sapling", "#sapling"),
            ] {
                footsteps.register_block(&blocks, key, value);
            }
            footsteps.set_armor_acoustics(ArmorClass::Heavy, "metalbar");
            footsteps.set_foot_armor_acoustics(ArmorClass::Heavy, "metalbar");
            footsteps.set_foot_armor_acoustics(ArmorClass::Medium, "chainmail");

            Self {
                blocks,
                footsteps,
                world: SparseWorld::new(),
            }
        }

        fn place(&mut self, pos: IVec3, name: &str) {
            let state = self.blocks.state(name).unwrap();
            self.world.set(pos, state);
        }

        fn solver(&self) -> Solver<'_> {
            Solver::new(&self.footsteps)
        }
    }

    #[test]
    fn test_jitter_filter_wins_over_armor() {
        let mut fx = Fixture::new();
        fx.place(IVec3::new(0, 63, 0), "minecraft:stone");
        let mut walker = WalkerSnapshot::standing(DVec3::new(0.5, 64.0, 0.5), 0.0);
        walker.motion.y = 0.01;
        walker.armor = ArmorClass::Heavy;
        assert!(fx.solver().find_association_for_player(&fx.world, &walker, 0.0, true).is_none());
    }

    #[test]
    fn test_exact_block_with_strike() {
        let mut fx = Fixture::new();
        fx.place(IVec3::new(0, 63, 0), "minecraft:stone");
        let walker = WalkerSnapshot::standing(DVec3::new(0.5, 64.0, 0.5), 0.0);

        let assoc = fx.solver().find_association_for_player(&fx.world, &walker, 0.0, false).unwrap();
        assert_eq!(assoc.names(), vec!["hardstone"]);
        assert_eq!(assoc.pos(), Some(IVec3::new(0, 63, 0)));
        let strike = assoc.strike().unwrap();
        assert!(!strike.is_right_foot);
        assert!((strike.location.x - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_carpet_above_shifts_up() {
        let mut fx = Fixture::new();
        fx.place(IVec3::new(0, 63, 0), "minecraft:stone");
        fx.place(IVec3::new(0, 64, 0), "minecraft:carpet");

        let assoc = fx.solver().find_association_for_block(&fx.world, IVec3::new(0, 63, 0)).unwrap();
        assert_eq!(assoc.names(), vec!["rug"]);
        assert_eq!(assoc.pos(), Some(IVec3::new(0, 64, 0)));
        assert_eq!(assoc.state().unwrap().name(), "minecraft:carpet");
    }

    #[test]
    fn test_not_emitter_carpet_does_not_shift() {
        let mut fx = Fixture::new();
        fx.place(IVec3::new(0, 63, 0), "minecraft:stone");
        fx.place(IVec3::new(0, 64, 0), "minecraft:snow_layer");

        let assoc = fx.solver().find_association_for_block(&fx.world, IVec3::new(0, 63, 0)).unwrap();
        assert_eq!(assoc.names(), vec!["hardstone"]);
        assert_eq!(assoc.pos(), Some(IVec3::new(0, 63, 0)));
    }

    #[test]
    fn test_fence_below_air() {
        let mut fx = Fixture::new();
        fx.place(IVec3::new(0, 63, 0), "minecraft:oak_fence");

        let assoc = fx.solver().find_association_for_block(&fx.world, IVec3::new(0, 64, 0)).unwrap();
        assert_eq!(assoc.names(), vec!["bluntwood"]);
        assert_eq!(assoc.pos(), Some(IVec3::new(0, 63, 0)));
    }

    #[test]
    fn test_foliage_layered_from_above() {
        let mut fx = Fixture::new();
        fx.place(IVec3::new(0, 63, 0), "minecraft:stone");
        fx.place(IVec3::new(0, 64, 0), "minecraft:tallgrass");

        let assoc = fx.solver().find_association_for_block(&fx.world, IVec3::new(0, 63, 0)).unwrap();
        assert_eq!(assoc.names(), vec!["hardstone", "brush"]);
        assert_eq!(assoc.pos(), Some(IVec3::new(0, 63, 0)));
    }

    #[test]
    fn test_air_is_not_an_association() {
        let fx = Fixture::new();
        assert!(fx.solver().find_association_for_block(&fx.world, IVec3::ZERO).is_none());
    }

    #[test]
    fn test_unconfigured_block_is_no_association() {
        let mut fx = Fixture::new();
        fx.place(IVec3::ZERO, "minecraft:dirt");
        let assoc = fx.solver().find_association_for_block(&fx.world, IVec3::ZERO).unwrap();
        assert!(assoc.is_no_association());
        assert!(assoc.is_empty());
        assert_eq!(assoc.pos(), Some(IVec3::ZERO));
    }

    #[test]
    fn test_edge_correction_dominant_axis() {
        let mut fx = Fixture::new();
        fx.place(IVec3::new(-1, 63, 0), "minecraft:stone");
        fx.place(IVec3::new(0, 63, 1), "minecraft:stone");
        let walker = WalkerSnapshot::standing(DVec3::new(0.1, 64.0, 0.6), 0.0);

        let assoc = fx
            .solver()
            .find_association_for_location(&fx.world, &walker, IVec3::new(0, 63, 0))
            .unwrap();
        // xdang -0.8 dominates zdang 0.2: west first
        assert_eq!(assoc.pos(), Some(IVec3::new(-1, 63, 0)));
    }

    #[test]
    fn test_edge_correction_tie_tries_x_then_z() {
        let mut fx = Fixture::new();
        fx.place(IVec3::new(0, 63, 1), "minecraft:stone");
        let walker = WalkerSnapshot::standing(DVec3::new(0.75, 64.0, 0.75), 0.0);
        let solver = fx.solver();

        let assoc = solver
            .find_association_for_location(&fx.world, &walker, IVec3::new(0, 63, 0))
            .unwrap();
        assert_eq!(assoc.pos(), Some(IVec3::new(0, 63, 1)));

        fx.place(IVec3::new(1, 63, 0), "minecraft:stone");
        let assoc = fx
            .solver()
            .find_association_for_location(&fx.world, &walker, IVec3::new(0, 63, 0))
            .unwrap();
        assert_eq!(assoc.pos(), Some(IVec3::new(1, 63, 0)));
    }

    #[test]
    fn test_centered_walker_skips_neighbors() {
        let mut fx = Fixture::new();
        fx.place(IVec3::new(1, 63, 0), "minecraft:stone");
        let walker = WalkerSnapshot::standing(DVec3::new(0.55, 64.0, 0.5), 0.0);
        assert!(fx
            .solver()
            .find_association_for_location(&fx.world, &walker, IVec3::new(0, 63, 0))
            .is_none());
    }

    #[test]
    fn test_messy_foliage() {
        let mut fx = Fixture::new();
        fx.place(IVec3::new(0, 63, 0), "minecraft:stone");
        fx.place(IVec3::new(0, 64, 0), "minecraft:sapling");
        let solver = fx.solver();

        let assoc = solver
            .find_association_messy_foliage(&fx.world, IVec3::new(0, 63, 0))
            .unwrap();
        assert_eq!(assoc.pos(), Some(IVec3::new(0, 64, 0)));
        assert!(solver
            .find_association_messy_foliage(&fx.world, IVec3::new(0, 64, 0))
            .is_none());

        let walker = WalkerSnapshot::standing(DVec3::new(0.5, 64.0, 0.5), 0.0);
        let mut played: Vec<PlayedSound> = Vec::new();
        assert!(solver.play_messy_foliage(&fx.world, &walker, IVec3::new(0, 63, 0), &mut played));
        assert_eq!(played[0].acoustic, "_MESSY");
    }

    #[test]
    fn test_overlay_synthesizes_association() {
        let fx = Fixture::new();
        let mut walker = WalkerSnapshot::standing(DVec3::ZERO, 0.0);
        walker.armor = ArmorClass::Heavy;

        let assoc = fx.solver().add_sound_overlay(&walker, None).unwrap();
        assert_eq!(assoc.names(), vec!["metalbar"]);
        assert!(assoc.state().is_none());
    }

    #[test]
    fn test_overlay_skips_duplicate_foot_armor() {
        let fx = Fixture::new();
        let mut walker = WalkerSnapshot::standing(DVec3::ZERO, 0.0);
        walker.armor = ArmorClass::Heavy;
        walker.foot_armor = ArmorClass::Heavy;
        let assoc = fx.solver().add_sound_overlay(&walker, None).unwrap();
        assert_eq!(assoc.names(), vec!["metalbar"]);

        walker.foot_armor = ArmorClass::Medium;
        let assoc = fx.solver().add_sound_overlay(&walker, None).unwrap();
        assert_eq!(assoc.names(), vec!["metalbar", "chainmail"]);
    }

    #[test]
    fn test_overlay_disabled_or_absent() {
        let mut fx = Fixture::new();
        let walker = WalkerSnapshot::standing(DVec3::ZERO, 0.0);
        assert!(fx.solver().add_sound_overlay(&walker, None).is_none());

        let mut heavy = walker.clone();
        heavy.armor = ArmorClass::Heavy;
        fx.footsteps.set_options(FootstepOptions {
            armor_accents: false,
            foot_armor_accents: false,
            vanilla_fallback: false,
        });
        assert!(fx.solver().add_sound_overlay(&heavy, None).is_none());
    }

    #[test]
    fn test_swim_volume() {
        assert_eq!(swim_volume(DVec3::ZERO), 0.0);
        let volume = swim_volume(DVec3::new(0.0, 1.0, 0.0));
        assert!((volume - 0.35).abs() < 1e-6);
        assert_eq!(swim_volume(DVec3::new(10.0, 10.0, 10.0)), SWIM_VOLUME_MAX);
    }

    #[test]
    fn test_swimming_replaces_footsteps() {
        let fx = Fixture::new();
        let solver = fx.solver();
        let mut walker = WalkerSnapshot::standing(DVec3::ZERO, 0.0);
        let mut played: Vec<PlayedSound> = Vec::new();

        assert!(!solver.has_special_stopping_conditions(&walker));
        assert!(!solver.play_special_stopping_conditions(&walker, &mut played));
        assert!(played.is_empty());

        walker.in_water = true;
        walker.motion = DVec3::new(0.0, 0.4, 0.0);
        assert!(solver.has_special_stopping_conditions(&walker));
        assert!(solver.play_special_stopping_conditions(&walker, &mut played));
        assert_eq!(played[0].acoustic, "_SWIM");
        assert_eq!(played[0].event, EventType::Walk);

        walker.head_in_water = true;
        solver.play_special_stopping_conditions(&walker, &mut played);
        assert_eq!(played[1].event, EventType::Swim);
        assert!((played[1].volume - 0.14).abs() < 1e-6);
    }

    #[test]
    fn test_play_association_at_strike() {
        let mut fx = Fixture::new();
        fx.place(IVec3::new(0, 63, 0), "minecraft:stone");
        fx.place(IVec3::new(0, 64, 0), "minecraft:tallgrass");
        let walker = WalkerSnapshot::standing(DVec3::new(0.5, 64.0, 0.5), 90.0);
        let solver = fx.solver();

        let assoc = solver.find_association_for_player(&fx.world, &walker, 0.0, true).unwrap();
        let mut played: Vec<PlayedSound> = Vec::new();
        solver.play_association(&walker, &assoc, EventType::Run, &mut played);

        assert_eq!(played.len(), 2);
        assert_eq!(played[1].acoustic, "brush");
        assert!(played.iter().all(|p| p.event == EventType::Run));
        // yaw 90: right foot offset is along -z
        assert!((played[0].location.z - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_wrap_degrees() {
        assert_eq!(wrap_degrees(0.0), 0.0);
        assert_eq!(wrap_degrees(180.0), -180.0);
        assert_eq!(wrap_degrees(-190.0), 170.0);
        assert_eq!(wrap_degrees(720.0), 0.0);
    }

    #[test]
    fn test_vanilla_fallback_reaches_solver() {
        let mut blocks = BlockRegistry::new();
        let gravel = blocks.register(Block::new("minecraft:gravel").with_sound(SoundType::new(
            "block.gravel.step",
            1.0,
            1.0,
        )));
        let footsteps = Footsteps::new();
        let mut world = SparseWorld::new();
        world.set(IVec3::ZERO, gravel.default_state());

        let assoc = Solver::new(&footsteps)
            .find_association_for_block(&world, IVec3::ZERO)
            .unwrap();
        assert_eq!(assoc.names(), vec!["vanilla:block.gravel.step"]);
        assert!(world.block_state(IVec3::Y).is_air());
        assert_eq!(BlockState::air().name(), "minecraft:air");
    }
}
