use glam::Vec2;

use crate::arena::Aabb;

/// Sweet spot on the gauge, inclusive at both ends
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub min: f32,
    pub max: f32,
}

impl Band {
    pub fn new(min: f32, width: f32) -> Self {
        Self {
            min,
            max: min + width,
        }
    }

    pub fn width(&self) -> f32 {
        self.max - self.min
    }

    pub fn contains(&self, speed: f32) -> bool {
        speed >= self.min && speed <= self.max
    }
}

/// Gauge component - decaying, boostable speed with its sweet spot
#[derive(Debug, Clone, Copy)]
pub struct Gauge {
    pub speed: f32, // 0..=max_speed
    pub band: Band, // fixed for the target's lifetime
    pub in_band: bool,
}

impl Gauge {
    pub fn new(band: Band) -> Self {
        // in_band starts false even when the band covers 0; the first tick
        // settles it without counting as a miss
        Self {
            speed: 0.0,
            band,
            in_band: false,
        }
    }

    /// Apply decay and report how band membership changed
    pub fn decay(&mut self, rate: f32, dt: f32) -> BandChange {
        if self.speed > 0.0 {
            self.speed = (self.speed - rate * dt).max(0.0);
        }
        self.settle()
    }

    /// Apply a click boost; the band check uses the boosted speed
    pub fn boost(&mut self, amount: f32, max_speed: f32) -> bool {
        self.speed = (self.speed + amount).min(max_speed);
        self.in_band = self.band.contains(self.speed);
        self.in_band
    }

    fn settle(&mut self) -> BandChange {
        let now_in = self.band.contains(self.speed);
        let change = match (self.in_band, now_in) {
            (false, true) => BandChange::Entered,
            (true, false) => BandChange::Exited,
            _ => BandChange::Unchanged,
        };
        self.in_band = now_in;
        change
    }
}

/// Band membership transition observed during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandChange {
    Unchanged,
    Entered,
    Exited,
}

/// Progress toward clearing the target
#[derive(Debug, Clone, Copy)]
pub struct Progress {
    pub hits: u32,
    pub required: u32,
}

impl Progress {
    pub fn new(required: u32) -> Self {
        Self { hits: 0, required }
    }

    pub fn is_complete(&self) -> bool {
        self.hits >= self.required
    }
}

/// Placement component - top-left corner and edge length, fixed at spawn
#[derive(Debug, Clone, Copy)]
pub struct Placement {
    pub pos: Vec2,
    pub size: f32,
}

impl Placement {
    pub fn new(pos: Vec2, size: f32) -> Self {
        Self { pos, size }
    }

    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.size * 0.5)
    }

    /// On-screen rectangle of the target element (growth scales only the visual)
    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.pos + Vec2::splat(self.size))
    }
}

/// Visual state that isn't gameplay-relevant
#[derive(Debug, Clone, Copy)]
pub struct Visual {
    pub scale: f32,
    pub pressed: bool,
}

impl Visual {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for Visual {
    fn default() -> Self {
        Self {
            scale: 1.0,
            pressed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_inclusive_bounds() {
        let band = Band::new(60.0, 25.0);
        assert_eq!(band.width(), 25.0);
        assert!(band.contains(60.0));
        assert!(band.contains(85.0));
        assert!(!band.contains(59.99));
        assert!(!band.contains(85.01));
    }

    #[test]
    fn test_decay_never_below_zero() {
        let mut gauge = Gauge::new(Band::new(50.0, 25.0));
        gauge.speed = 10.0;
        gauge.decay(50.0, 5.0);
        assert_eq!(gauge.speed, 0.0);
    }

    #[test]
    fn test_decay_reports_exit() {
        let mut gauge = Gauge::new(Band::new(50.0, 25.0));
        gauge.speed = 55.0;
        gauge.in_band = true;
        assert_eq!(gauge.decay(50.0, 0.2), BandChange::Exited);
        assert!(!gauge.in_band);
        assert_eq!(gauge.decay(50.0, 0.1), BandChange::Unchanged);
    }

    #[test]
    fn test_decay_from_above_enters_band() {
        let mut gauge = Gauge::new(Band::new(50.0, 25.0));
        gauge.speed = 80.0;
        assert_eq!(gauge.decay(50.0, 0.1), BandChange::Entered);
        assert!(gauge.in_band);
    }

    #[test]
    fn test_first_settle_at_zero_with_band_at_zero() {
        let mut gauge = Gauge::new(Band::new(0.0, 25.0));
        assert!(!gauge.in_band);
        assert_eq!(gauge.decay(50.0, 0.016), BandChange::Entered);
    }

    #[test]
    fn test_boost_caps_at_max() {
        let mut gauge = Gauge::new(Band::new(75.0, 25.0));
        gauge.speed = 95.0;
        assert!(gauge.boost(15.0, 100.0));
        assert_eq!(gauge.speed, 100.0);
        // Already at the cap: still a hit, speed unchanged
        assert!(gauge.boost(15.0, 100.0));
        assert_eq!(gauge.speed, 100.0);
    }

    #[test]
    fn test_boost_overshoot_is_not_in_band() {
        let mut gauge = Gauge::new(Band::new(60.0, 20.0));
        gauge.speed = 70.0;
        assert!(!gauge.boost(15.0, 100.0));
        assert_eq!(gauge.speed, 85.0);
    }

    #[test]
    fn test_placement_bounds() {
        let placement = Placement::new(Vec2::new(10.0, 120.0), 80.0);
        let bounds = placement.bounds();
        assert_eq!(bounds.min, Vec2::new(10.0, 120.0));
        assert_eq!(bounds.max, Vec2::new(90.0, 200.0));
        assert_eq!(placement.center(), Vec2::new(50.0, 160.0));
    }
}
