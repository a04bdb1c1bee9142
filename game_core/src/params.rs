/// Game tuning parameters for the sweet-spot tapper
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Gauge
    pub const MAX_SPEED: f32 = 100.0;
    pub const DECAY_RATE: f32 = 50.0; // units per second (full range in 2s)
    pub const BOOST_PER_CLICK: f32 = 15.0;

    // Sweet spot
    pub const BAND_WIDTH: f32 = 25.0;

    // Clearing a target
    pub const REQUIRED_HITS_MIN: u32 = 8;
    pub const REQUIRED_HITS_MAX: u32 = 17; // inclusive
    pub const GROWTH_PER_HIT: f32 = 0.03;

    // Scoring
    pub const BASE_POINTS: f32 = 1.0;

    // Layout (CSS pixels)
    pub const MOBILE_BREAKPOINT: f32 = 768.0;
    pub const MOBILE_SIZE_MIN: f32 = 60.0;
    pub const MOBILE_SIZE_MAX: f32 = 95.0;
    pub const DESKTOP_SIZE_MIN: f32 = 200.0;
    pub const DESKTOP_SIZE_MAX: f32 = 300.0;
    pub const TOP_SAFE_ZONE: f32 = 100.0; // score bar + menu

    // Completion burst
    pub const BURST_PARTICLES: usize = 20;
    pub const BURST_RADIUS_FACTOR: f32 = 0.8;
    pub const BURST_DURATION_MIN: f32 = 0.5;
    pub const BURST_DURATION_MAX: f32 = 1.0;
}
