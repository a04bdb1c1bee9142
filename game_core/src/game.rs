//! Session driver
//!
//! `Game` owns the world (holding at most one target), the clock anchor and
//! the session, and is the only thing the browser shell talks to. Everything
//! is driven by explicit calls with host timestamps, so tests can replay a
//! session deterministically.

use glam::Vec2;
use hecs::World;
use log::info;

use crate::presentation::{band_percent, fill_percent};
use crate::systems::{self, click_target, spawn_next, ClickOutcome};
use crate::{
    active_target, step, Arena, Config, ConfigError, Events, GameRng, Gauge, Phase, Placement,
    Progress, Session, SessionAction, StreakTier, Time, Visual,
};

/// Read-only view of the active target for rendering
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetView {
    pub pos: Vec2,
    pub size: f32,
    pub speed: f32,
    pub fill_percent: f32,
    pub band_left_percent: f32,
    pub band_width_percent: f32,
    pub in_band: bool,
    pub scale: f32,
    pub pressed: bool,
    pub hits: u32,
    pub required_hits: u32,
}

pub struct Game {
    world: World,
    time: Time,
    session: Session,
    config: Config,
    arena: Arena,
    rng: GameRng,
    events: Events,
}

impl Game {
    /// Fails if `config` doesn't pass `Config::validate`
    pub fn new(config: Config, arena: Arena, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            world: World::new(),
            time: Time::new(),
            session: Session::new(config.streak_tiers.clone()),
            config,
            arena,
            rng: GameRng::new(seed),
            events: Events::new(),
        })
    }

    /// NotStarted -> Active: zero the score, anchor the clock, spawn the
    /// first target. Returns false if the session was already started.
    pub fn start(&mut self, now_ms: f64) -> bool {
        if !self.session.transition(SessionAction::Start).success {
            return false;
        }
        info!(
            "session started ({}x{} arena)",
            self.arena.width, self.arena.height
        );
        self.time.anchor_at(now_ms);
        self.spawn_next();
        true
    }

    /// Flip Active <-> Paused. The clock is re-anchored so time spent paused
    /// never turns into decay.
    pub fn toggle_pause(&mut self, now_ms: f64) -> Phase {
        if self.session.transition(SessionAction::TogglePause).success {
            self.time.anchor_at(now_ms);
        }
        self.session.phase()
    }

    /// Per-frame update
    pub fn tick(&mut self, now_ms: f64) {
        if !self.session.is_active() {
            self.time.anchor_at(now_ms);
            return;
        }
        self.time.advance(now_ms);
        step(
            &mut self.world,
            &self.time,
            &self.config,
            &mut self.session,
            &mut self.events,
        );
    }

    /// A press landed on the current target
    pub fn press(&mut self) -> ClickOutcome {
        let outcome = click_target(
            &mut self.world,
            &mut self.session,
            &self.config,
            &mut self.rng,
            &mut self.events,
        );
        if let ClickOutcome::Cleared { .. } = outcome {
            self.spawn_next();
        }
        outcome
    }

    /// Press at a container-relative point. `None` when the press missed the
    /// target or the session isn't running.
    pub fn press_at(&mut self, point: Vec2) -> Option<ClickOutcome> {
        if !self.session.is_active() {
            return None;
        }
        if systems::press_at(&mut self.world, point) {
            Some(self.press())
        } else {
            None
        }
    }

    pub fn release(&mut self) {
        systems::release(&mut self.world);
    }

    /// New container size; applies to targets spawned from now on
    pub fn resize(&mut self, width: f32, height: f32) {
        self.arena = Arena::new(width, height);
    }

    pub fn snapshot(&self) -> Option<TargetView> {
        let entity = active_target(&self.world)?;
        let mut query = self
            .world
            .query_one::<(&Gauge, &Progress, &Placement, &Visual)>(entity)
            .ok()?;
        let (gauge, progress, placement, visual) = query.get()?;
        let max_speed = self.config.max_speed;
        let (band_left_percent, band_width_percent) =
            band_percent(gauge.band.min, gauge.band.max, max_speed);
        let view = TargetView {
            pos: placement.pos,
            size: placement.size,
            speed: gauge.speed,
            fill_percent: fill_percent(gauge.speed, max_speed),
            band_left_percent,
            band_width_percent,
            in_band: gauge.in_band,
            scale: visual.scale,
            pressed: visual.pressed,
            hits: progress.hits,
            required_hits: progress.required,
        };
        Some(view)
    }

    pub fn has_target(&self) -> bool {
        active_target(&self.world).is_some()
    }

    pub fn score(&self) -> u32 {
        self.session.score()
    }

    pub fn streak(&self) -> u32 {
        self.session.streak()
    }

    pub fn streak_tier(&self) -> &StreakTier {
        self.session.current_tier()
    }

    pub fn phase(&self) -> Phase {
        self.session.phase()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    /// Direct access to the target components (scripted scenarios)
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Drain side effects accumulated since the last call
    pub fn take_events(&mut self) -> Events {
        std::mem::take(&mut self.events)
    }

    fn spawn_next(&mut self) {
        spawn_next(
            &mut self.world,
            &self.session,
            &self.config,
            &self.arena,
            &mut self.rng,
            &mut self.events,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game() -> Game {
        Game::new(Config::new(), Arena::new(1280.0, 800.0), 42).unwrap()
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let mut config = Config::new();
        config.required_hits_min = 12;
        config.required_hits_max = 9;
        let result = Game::new(config, Arena::new(1280.0, 800.0), 42);
        assert!(matches!(
            result,
            Err(ConfigError::RequiredHits { min: 12, max: 9 })
        ));
    }

    #[test]
    fn test_start_spawns_one_target() {
        let mut game = game();
        assert!(!game.has_target());
        assert!(game.start(0.0));
        assert!(game.has_target());
        assert_eq!(game.phase(), Phase::Active);
        assert_eq!(game.take_events().spawned, 1);
        assert!(!game.start(10.0), "second start is rejected");
        assert!(game.take_events().is_empty());
    }

    #[test]
    fn test_nothing_happens_before_start() {
        let mut game = game();
        game.tick(16.0);
        assert_eq!(game.press(), ClickOutcome::Ignored);
        assert_eq!(game.press_at(Vec2::new(500.0, 500.0)), None);
        assert_eq!(game.toggle_pause(20.0), Phase::NotStarted);
        assert!(game.take_events().is_empty());
    }

    #[test]
    fn test_snapshot_reflects_target() {
        let mut game = game();
        game.start(0.0);
        let view = game.snapshot().unwrap();
        assert_eq!(view.speed, 0.0);
        assert_eq!(view.fill_percent, 0.0);
        assert!((view.band_width_percent - 25.0).abs() < 1e-3);
        assert_eq!(view.scale, 1.0);
        assert_eq!(view.hits, 0);
        assert!((8..=17).contains(&view.required_hits));
        assert!(view.pos.y >= 100.0);
        assert!(view.size >= 200.0, "desktop-sized");
    }

    #[test]
    fn test_press_at_hit_tests_target_box() {
        let mut game = game();
        game.start(0.0);
        let view = game.snapshot().unwrap();

        let outside = view.pos - Vec2::splat(1.0);
        assert_eq!(game.press_at(outside), None);

        let inside = view.pos + Vec2::splat(view.size * 0.5);
        assert!(game.press_at(inside).is_some());
        assert!(game.snapshot().unwrap().pressed);
        game.release();
        assert!(!game.snapshot().unwrap().pressed);
    }

    #[test]
    fn test_resize_affects_future_spawns() {
        let mut game = game();
        game.resize(390.0, 844.0);
        game.start(0.0);
        let view = game.snapshot().unwrap();
        assert!(view.size < 95.0, "mobile-sized after resize");
    }
}
