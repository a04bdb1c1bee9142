use hecs::{Entity, World};
use log::{debug, trace};

use crate::{
    active_target, Burst, Config, Events, GameRng, Gauge, HitEvent, Placement, Progress, Session,
    Visual,
};

/// What a press on the active target did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Paused, not started, or no target
    Ignored,
    /// Boosted speed landed in the band
    Hit { points: u32 },
    /// Boosted speed missed the band
    Miss,
    /// Hit that completed the target; it has been despawned
    Cleared { points: u32 },
}

/// Boost the active target's gauge and score the result. The band check uses
/// the post-boost speed.
pub fn click_target(
    world: &mut World,
    session: &mut Session,
    config: &Config,
    rng: &mut GameRng,
    events: &mut Events,
) -> ClickOutcome {
    if !session.is_active() {
        return ClickOutcome::Ignored;
    }
    let Some(entity) = active_target(world) else {
        return ClickOutcome::Ignored;
    };

    let (points, complete, placement) = {
        let Ok((gauge, progress, visual, placement)) = world
            .query_one_mut::<(&mut Gauge, &mut Progress, &mut Visual, &Placement)>(entity)
        else {
            return ClickOutcome::Ignored;
        };

        if !gauge.boost(config.boost_per_click, config.max_speed) {
            events.miss_clicks += 1;
            if session.register_miss() {
                events.streak_lost = true;
            }
            return ClickOutcome::Miss;
        }

        progress.hits += 1;
        let points = session.register_hit(config.base_points);
        visual.scale += config.growth_per_hit;
        events.hits.push(HitEvent {
            points,
            streak: session.streak(),
            top_center: placement.pos + glam::Vec2::new(placement.size * 0.5, 0.0),
        });
        trace!(
            "hit {}/{} at {:.1}: +{} (streak {})",
            progress.hits,
            progress.required,
            gauge.speed,
            points,
            session.streak()
        );
        (points, progress.is_complete(), *placement)
    };

    if complete {
        clear_target(world, entity, &placement, rng, events);
        ClickOutcome::Cleared { points }
    } else {
        ClickOutcome::Hit { points }
    }
}

fn clear_target(
    world: &mut World,
    entity: Entity,
    placement: &Placement,
    rng: &mut GameRng,
    events: &mut Events,
) {
    if world.despawn(entity).is_ok() {
        debug!("target cleared");
        events
            .cleared
            .push(Burst::new(placement.center(), placement.size, rng));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_target, Band, SessionAction};
    use glam::Vec2;

    struct Fixture {
        world: World,
        entity: Entity,
        session: Session,
        config: Config,
        rng: GameRng,
        events: Events,
    }

    impl Fixture {
        fn new(band: Band, required: u32) -> Self {
            let mut world = World::new();
            let entity = create_target(&mut world, Vec2::new(100.0, 200.0), 80.0, band, required);
            let mut session = Session::default();
            session.transition(SessionAction::Start);
            Self {
                world,
                entity,
                session,
                config: Config::new(),
                rng: GameRng::new(12345),
                events: Events::new(),
            }
        }

        fn set_speed(&mut self, speed: f32) {
            self.world.get::<&mut Gauge>(self.entity).unwrap().speed = speed;
        }

        fn click(&mut self) -> ClickOutcome {
            click_target(
                &mut self.world,
                &mut self.session,
                &self.config,
                &mut self.rng,
                &mut self.events,
            )
        }

        fn gauge(&self) -> Gauge {
            *self.world.get::<&Gauge>(self.entity).unwrap()
        }

        fn progress(&self) -> Progress {
            *self.world.get::<&Progress>(self.entity).unwrap()
        }
    }

    #[test]
    fn test_click_into_band_is_hit() {
        let mut f = Fixture::new(Band::new(10.0, 25.0), 10);
        assert_eq!(f.click(), ClickOutcome::Hit { points: 1 });
        assert_eq!(f.gauge().speed, 15.0);
        assert!(f.gauge().in_band);
        assert_eq!(f.progress().hits, 1);
        assert_eq!(f.session.streak(), 1);
        let visual = *f.world.get::<&Visual>(f.entity).unwrap();
        assert!((visual.scale - 1.03).abs() < 1e-6);
        assert_eq!(f.events.hits.len(), 1);
        assert_eq!(f.events.hits[0].top_center, Vec2::new(140.0, 200.0));
    }

    #[test]
    fn test_band_boundaries_are_inclusive() {
        let mut f = Fixture::new(Band::new(40.0, 25.0), 10);
        f.set_speed(25.0); // lands on min
        assert!(matches!(f.click(), ClickOutcome::Hit { .. }));
        f.set_speed(50.0); // lands on max
        assert!(matches!(f.click(), ClickOutcome::Hit { .. }));
        assert_eq!(f.progress().hits, 2);
    }

    #[test]
    fn test_overshoot_is_miss_and_resets_streak() {
        let mut f = Fixture::new(Band::new(60.0, 20.0), 10);
        f.set_speed(50.0);
        assert!(matches!(f.click(), ClickOutcome::Hit { .. }));
        f.set_speed(70.0); // 85 after boost
        assert_eq!(f.click(), ClickOutcome::Miss);
        assert_eq!(f.gauge().speed, 85.0);
        assert!(!f.gauge().in_band);
        assert_eq!(f.session.streak(), 0);
        assert!(f.events.streak_lost);
        assert_eq!(f.events.miss_clicks, 1);
        assert_eq!(f.progress().hits, 1, "misses keep progress");
        let visual = *f.world.get::<&Visual>(f.entity).unwrap();
        assert!((visual.scale - 1.03).abs() < 1e-6, "no growth on miss");
    }

    #[test]
    fn test_click_at_cap_still_hits() {
        let mut f = Fixture::new(Band::new(75.0, 25.0), 10);
        f.set_speed(100.0);
        assert!(matches!(f.click(), ClickOutcome::Hit { .. }));
        assert_eq!(f.gauge().speed, 100.0);
    }

    #[test]
    fn test_completion_despawns_with_burst() {
        let mut f = Fixture::new(Band::new(75.0, 25.0), 3);
        f.set_speed(100.0);
        assert!(matches!(f.click(), ClickOutcome::Hit { .. }));
        assert!(matches!(f.click(), ClickOutcome::Hit { .. }));
        assert_eq!(f.click(), ClickOutcome::Cleared { points: 2 });
        assert!(!f.world.contains(f.entity));
        assert_eq!(f.events.cleared.len(), 1);
        assert_eq!(f.events.cleared[0].center, Vec2::new(140.0, 240.0));
        assert_eq!(f.click(), ClickOutcome::Ignored, "no target left");
    }

    #[test]
    fn test_paused_click_is_ignored() {
        let mut f = Fixture::new(Band::new(0.0, 25.0), 10);
        f.session.transition(SessionAction::TogglePause);
        assert_eq!(f.click(), ClickOutcome::Ignored);
        assert_eq!(f.gauge().speed, 0.0);
        assert!(f.events.is_empty());
    }
}
