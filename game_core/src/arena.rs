use glam::Vec2;
use rand::Rng;

use crate::{Config, GameRng};

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }
}

/// Play area: the game container's size in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn is_mobile(&self, config: &Config) -> bool {
        self.width <= config.mobile_breakpoint
    }

    /// Target edge length for this device class
    pub fn random_size(&self, config: &Config, rng: &mut GameRng) -> f32 {
        let (min, max) = if self.is_mobile(config) {
            config.mobile_size
        } else {
            config.desktop_size
        };
        uniform(rng, min, max)
    }

    /// Top-left corner that keeps the target inside the arena and below the
    /// safe zone
    pub fn random_position(&self, size: f32, config: &Config, rng: &mut GameRng) -> Vec2 {
        let max_x = self.width - size;
        let max_y = self.height - size;
        Vec2::new(
            uniform(rng, 0.0, max_x),
            uniform(rng, config.top_safe_zone, max_y),
        )
    }
}

/// Half-open uniform draw; collapses to `lo` when the range is empty
fn uniform(rng: &mut GameRng, lo: f32, hi: f32) -> f32 {
    if hi > lo {
        rng.0.gen_range(lo..hi)
    } else {
        lo
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_contains_inclusive() {
        let aabb = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(aabb.contains(Vec2::new(0.0, 0.0)));
        assert!(aabb.contains(Vec2::new(10.0, 10.0)));
        assert!(aabb.contains(Vec2::new(5.0, 5.0)));
        assert!(!aabb.contains(Vec2::new(10.1, 5.0)));
        assert!(!aabb.contains(Vec2::new(5.0, -0.1)));
    }

    #[test]
    fn test_device_class() {
        let config = Config::new();
        assert!(Arena::new(768.0, 1000.0).is_mobile(&config));
        assert!(!Arena::new(769.0, 1000.0).is_mobile(&config));
    }

    #[test]
    fn test_random_size_ranges() {
        let config = Config::new();
        let mut rng = GameRng::new(7);
        let phone = Arena::new(390.0, 844.0);
        let desktop = Arena::new(1920.0, 1080.0);
        for _ in 0..200 {
            let s = phone.random_size(&config, &mut rng);
            assert!((60.0..95.0).contains(&s), "mobile size {}", s);
            let s = desktop.random_size(&config, &mut rng);
            assert!((200.0..300.0).contains(&s), "desktop size {}", s);
        }
    }

    #[test]
    fn test_random_position_within_bounds() {
        let config = Config::new();
        let mut rng = GameRng::new(99);
        let arena = Arena::new(1280.0, 720.0);
        for _ in 0..200 {
            let size = arena.random_size(&config, &mut rng);
            let pos = arena.random_position(size, &config, &mut rng);
            assert!(pos.x >= 0.0 && pos.x + size <= arena.width);
            assert!(pos.y >= config.top_safe_zone && pos.y + size <= arena.height);
        }
    }

    #[test]
    fn test_tiny_arena_collapses_to_lower_bound() {
        let config = Config::new();
        let mut rng = GameRng::new(1);
        let arena = Arena::new(50.0, 120.0);
        let pos = arena.random_position(80.0, &config, &mut rng);
        assert_eq!(pos, Vec2::new(0.0, config.top_safe_zone));
    }
}
