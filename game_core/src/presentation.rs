//! Display helpers for the score, gauge and floating text

use crate::config::StreakTier;
use crate::session::tier_for;

pub const FLAME: &str = "\u{1F525}";

/// "+N" followed by the streak tier's flames, e.g. "+8 🔥🔥🔥"
pub fn floating_points_text(points: u32, streak: u32, tiers: &[StreakTier]) -> String {
    let flames = tier_for(tiers, streak).flames as usize;
    if flames == 0 {
        format!("+{}", points)
    } else {
        format!("+{} {}", points, FLAME.repeat(flames))
    }
}

/// Gauge fill as a percentage of the full scale
pub fn fill_percent(speed: f32, max_speed: f32) -> f32 {
    (speed / max_speed * 100.0).clamp(0.0, 100.0)
}

/// Band indicator as (left, width) percentages of the gauge
pub fn band_percent(min: f32, max: f32, max_speed: f32) -> (f32, f32) {
    let start = min / max_speed * 100.0;
    let end = max / max_speed * 100.0;
    (start, end - start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_tiers;

    #[test]
    fn test_floating_points_text() {
        let tiers = default_tiers();
        assert_eq!(floating_points_text(1, 1, &tiers), "+1");
        assert_eq!(floating_points_text(2, 2, &tiers), format!("+2 {}", FLAME));
        assert_eq!(floating_points_text(8, 9, &tiers), format!("+8 {}", FLAME.repeat(3)));
        assert_eq!(floating_points_text(16, 12, &tiers), format!("+16 {}", FLAME.repeat(4)));
    }

    #[test]
    fn test_fill_percent_clamps() {
        assert_eq!(fill_percent(50.0, 100.0), 50.0);
        assert_eq!(fill_percent(-5.0, 100.0), 0.0);
        assert_eq!(fill_percent(150.0, 100.0), 100.0);
    }

    #[test]
    fn test_band_percent() {
        let (left, width) = band_percent(30.0, 55.0, 100.0);
        assert!((left - 30.0).abs() < 1e-4);
        assert!((width - 25.0).abs() < 1e-4);
    }
}
