use hecs::World;
use log::trace;

use crate::{BandChange, Config, Events, Gauge, Session, Time};

/// Drain every gauge by `decay_rate * dt`. Falling out of the band breaks
/// the streak but leaves the target and its progress alone.
pub fn decay_gauges(
    world: &mut World,
    time: &Time,
    config: &Config,
    session: &mut Session,
    events: &mut Events,
) {
    if !session.is_active() {
        return;
    }

    for (_entity, gauge) in world.query_mut::<&mut Gauge>() {
        match gauge.decay(config.decay_rate, time.dt) {
            BandChange::Entered => events.band_entered = true,
            BandChange::Exited => {
                events.band_exited = true;
                trace!("gauge decayed out of band at {:.1}", gauge.speed);
                if session.register_miss() {
                    events.streak_lost = true;
                }
            }
            BandChange::Unchanged => {}
        }
    }
}
