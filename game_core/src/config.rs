use crate::error::ConfigError;
use crate::params::Params;
use serde::{Deserialize, Serialize};

/// One rung of the streak multiplier ladder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreakTier {
    pub threshold: u32,
    pub multiplier: f32,
    pub name: String,
    pub flames: u8, // fire glyphs shown next to floating points
}

impl StreakTier {
    pub fn new(threshold: u32, multiplier: f32, name: &str, flames: u8) -> Self {
        Self {
            threshold,
            multiplier,
            name: name.to_string(),
            flames,
        }
    }
}

/// Highest threshold first; the threshold-0 tier always matches
pub fn default_tiers() -> Vec<StreakTier> {
    vec![
        StreakTier::new(12, 16.0, "Max!", 4),
        StreakTier::new(8, 8.0, "x8!", 3),
        StreakTier::new(4, 4.0, "x4!", 2),
        StreakTier::new(2, 2.0, "x2", 1),
        StreakTier::new(0, 1.0, "x1", 0),
    ]
}

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub max_speed: f32,
    pub decay_rate: f32,
    pub boost_per_click: f32,
    pub band_width: f32,
    pub required_hits_min: u32,
    pub required_hits_max: u32,
    pub growth_per_hit: f32,
    pub base_points: f32,
    pub mobile_breakpoint: f32,
    pub mobile_size: (f32, f32),
    pub desktop_size: (f32, f32),
    pub top_safe_zone: f32,
    pub streak_tiers: Vec<StreakTier>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_speed: Params::MAX_SPEED,
            decay_rate: Params::DECAY_RATE,
            boost_per_click: Params::BOOST_PER_CLICK,
            band_width: Params::BAND_WIDTH,
            required_hits_min: Params::REQUIRED_HITS_MIN,
            required_hits_max: Params::REQUIRED_HITS_MAX,
            growth_per_hit: Params::GROWTH_PER_HIT,
            base_points: Params::BASE_POINTS,
            mobile_breakpoint: Params::MOBILE_BREAKPOINT,
            mobile_size: (Params::MOBILE_SIZE_MIN, Params::MOBILE_SIZE_MAX),
            desktop_size: (Params::DESKTOP_SIZE_MIN, Params::DESKTOP_SIZE_MAX),
            top_safe_zone: Params::TOP_SAFE_ZONE,
            streak_tiers: default_tiers(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a (possibly partial) JSON override; missing fields keep defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Highest value the band's lower edge may take
    pub fn max_band_start(&self) -> f32 {
        self.max_speed - self.band_width
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.max_speed > 0.0) {
            return Err(ConfigError::MaxSpeed(self.max_speed));
        }
        if !(self.band_width > 0.0 && self.band_width <= self.max_speed) {
            return Err(ConfigError::BandWidth {
                width: self.band_width,
                max_speed: self.max_speed,
            });
        }
        for (name, value) in [
            ("decay_rate", self.decay_rate),
            ("boost_per_click", self.boost_per_click),
            ("growth_per_hit", self.growth_per_hit),
            ("base_points", self.base_points),
        ] {
            if !(value >= 0.0) {
                return Err(ConfigError::NegativeRate { name, value });
            }
        }
        if self.required_hits_min == 0 || self.required_hits_min > self.required_hits_max {
            return Err(ConfigError::RequiredHits {
                min: self.required_hits_min,
                max: self.required_hits_max,
            });
        }
        for (name, (min, max)) in [
            ("mobile_size", self.mobile_size),
            ("desktop_size", self.desktop_size),
        ] {
            if !(min > 0.0 && min <= max) {
                return Err(ConfigError::SizeRange { name, min, max });
            }
        }
        if self.streak_tiers.is_empty() {
            return Err(ConfigError::NoTiers);
        }
        for (index, pair) in self.streak_tiers.windows(2).enumerate() {
            if pair[1].threshold >= pair[0].threshold {
                return Err(ConfigError::TierOrder {
                    index: index + 1,
                    threshold: pair[1].threshold,
                });
            }
        }
        for (index, tier) in self.streak_tiers.iter().enumerate() {
            if !(tier.multiplier.is_finite() && tier.multiplier >= 1.0) {
                return Err(ConfigError::Multiplier {
                    index,
                    value: tier.multiplier,
                });
            }
        }
        if self.streak_tiers.iter().all(|t| t.threshold != 0) {
            return Err(ConfigError::MissingBaseTier);
        }
        Ok(())
    }
}
