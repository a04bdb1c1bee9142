//! Configuration errors
//!
//! Gameplay operations never fail; only loading a `Config` can.

use std::fmt;

/// Reasons a `Config` is rejected
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// JSON could not be parsed into a `Config`
    Parse(String),
    /// `max_speed` must be positive
    MaxSpeed(f32),
    /// Band width must lie in (0, max_speed]
    BandWidth { width: f32, max_speed: f32 },
    /// Decay and boost rates must be non-negative
    NegativeRate { name: &'static str, value: f32 },
    /// Required hits range is empty or starts at zero
    RequiredHits { min: u32, max: u32 },
    /// A size range has min > max or a non-positive min
    SizeRange { name: &'static str, min: f32, max: f32 },
    /// The streak tier table is empty
    NoTiers,
    /// No tier with threshold 0, so some streaks would have no multiplier
    MissingBaseTier,
    /// Tiers must be ordered by strictly descending threshold
    TierOrder { index: usize, threshold: u32 },
    /// A tier multiplier is not a finite value of at least 1
    Multiplier { index: usize, value: f32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(msg) => write!(f, "invalid config JSON: {}", msg),
            ConfigError::MaxSpeed(v) => write!(f, "max_speed must be positive, got {}", v),
            ConfigError::BandWidth { width, max_speed } => write!(
                f,
                "band_width {} must be in (0, {}]",
                width, max_speed
            ),
            ConfigError::NegativeRate { name, value } => {
                write!(f, "{} must be non-negative, got {}", name, value)
            }
            ConfigError::RequiredHits { min, max } => {
                write!(f, "required hits range {}..={} is invalid", min, max)
            }
            ConfigError::SizeRange { name, min, max } => {
                write!(f, "{} range {}..{} is invalid", name, min, max)
            }
            ConfigError::NoTiers => write!(f, "streak tier table is empty"),
            ConfigError::MissingBaseTier => {
                write!(f, "streak tier table needs a threshold-0 tier")
            }
            ConfigError::TierOrder { index, threshold } => write!(
                f,
                "streak tier {} (threshold {}) is out of descending order",
                index, threshold
            ),
            ConfigError::Multiplier { index, value } => write!(
                f,
                "streak tier {} multiplier must be finite and at least 1, got {}",
                index, value
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}
