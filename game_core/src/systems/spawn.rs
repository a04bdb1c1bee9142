use hecs::{Entity, World};
use log::debug;
use rand::Rng;

use crate::{active_target, create_target, Arena, Band, Config, Events, GameRng, Session};

/// Spawn a fresh target if none exists and the session is running
pub fn spawn_next(
    world: &mut World,
    session: &Session,
    config: &Config,
    arena: &Arena,
    rng: &mut GameRng,
    events: &mut Events,
) -> Option<Entity> {
    if !session.is_active() || active_target(world).is_some() {
        return None;
    }

    let size = arena.random_size(config, rng);
    let pos = arena.random_position(size, config, rng);

    let max_start = config.max_band_start();
    let band_min = if max_start > 0.0 {
        rng.0.gen_range(0.0..max_start)
    } else {
        0.0
    };
    let band = Band::new(band_min, config.band_width);
    let required = rng
        .0
        .gen_range(config.required_hits_min..=config.required_hits_max);

    let entity = create_target(world, pos, size, band, required);
    events.spawned += 1;
    debug!(
        "spawned target: band [{:.1}, {:.1}], {} hits, size {:.0} at ({:.0}, {:.0})",
        band.min, band.max, required, size, pos.x, pos.y
    );
    Some(entity)
}
