pub mod arena;
pub mod burst;
pub mod components;
pub mod config;
pub mod error;
pub mod game;
pub mod params;
pub mod presentation;
pub mod resources;
pub mod session;
pub mod skin;
pub mod systems;

pub use arena::*;
pub use burst::*;
pub use components::*;
pub use config::*;
pub use error::*;
pub use game::*;
pub use params::*;
pub use resources::*;
pub use session::*;
pub use skin::*;

use hecs::World;
use systems::*;

/// Run one frame of the gauge simulation. Decay is the only per-frame
/// behaviour; clicks are applied synchronously by `click_target`.
pub fn step(
    world: &mut World,
    time: &Time,
    config: &Config,
    session: &mut Session,
    events: &mut Events,
) {
    decay_gauges(world, time, config, session, events);
}

/// Helper to create a target entity
pub fn create_target(
    world: &mut World,
    pos: glam::Vec2,
    size: f32,
    band: Band,
    required_hits: u32,
) -> hecs::Entity {
    world.spawn((
        Gauge::new(band),
        Progress::new(required_hits),
        Placement::new(pos, size),
        Visual::new(),
    ))
}

/// The single live target, if any
pub fn active_target(world: &World) -> Option<hecs::Entity> {
    world
        .query::<&Gauge>()
        .iter()
        .next()
        .map(|(entity, _)| entity)
}
