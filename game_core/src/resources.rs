use glam::Vec2;

use crate::burst::Burst;

/// Frame clock anchored to host timestamps (milliseconds)
#[derive(Debug, Clone, Copy, Default)]
pub struct Time {
    pub dt: f32,  // Seconds applied by the last advance
    pub now: f64, // Last host timestamp seen (ms)
    anchor: Option<f64>,
}

impl Time {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset the delta anchor so the next advance starts from `now_ms`
    pub fn anchor_at(&mut self, now_ms: f64) {
        self.anchor = Some(now_ms);
        self.now = now_ms;
        self.dt = 0.0;
    }

    /// Move the anchor to `now_ms` and return elapsed seconds (never negative)
    pub fn advance(&mut self, now_ms: f64) -> f32 {
        let dt = match self.anchor {
            Some(prev) => ((now_ms - prev) / 1000.0).max(0.0) as f32,
            None => 0.0,
        };
        self.anchor = Some(now_ms);
        self.now = now_ms;
        self.dt = dt;
        dt
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// A successful in-band tap
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitEvent {
    pub points: u32,
    pub streak: u32,
    pub top_center: Vec2, // where floating points appear
}

/// Side effects recorded since the last drain
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub hits: Vec<HitEvent>,
    pub miss_clicks: u32,
    pub streak_lost: bool,
    pub band_entered: bool,
    pub band_exited: bool,
    pub spawned: u32,
    pub cleared: Vec<Burst>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.hits.clear();
        self.miss_clicks = 0;
        self.streak_lost = false;
        self.band_entered = false;
        self.band_exited = false;
        self.spawned = 0;
        self.cleared.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
            && self.miss_clicks == 0
            && !self.streak_lost
            && !self.band_entered
            && !self.band_exited
            && self.spawned == 0
            && self.cleared.is_empty()
    }
}
