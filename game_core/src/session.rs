//! Session controller
//!
//! Owns the score, the streak and the NotStarted -> Active <-> Paused
//! lifecycle. Scoring is driven by the active target's click handler.

use log::{debug, warn};

use crate::config::{default_tiers, StreakTier};

/// Session phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    Active,
    Paused,
}

/// Actions that trigger phase transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    Start,
    TogglePause,
}

/// Result of a phase transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from: Phase,
    pub to: Phase,
    pub action: SessionAction,
}

#[derive(Debug, Clone)]
pub struct Session {
    phase: Phase,
    score: u32,
    streak: u32,
    tiers: Vec<StreakTier>,
}

impl Session {
    /// `tiers` must be ordered by descending threshold and end with threshold 0
    pub fn new(tiers: Vec<StreakTier>) -> Self {
        Self {
            phase: Phase::NotStarted,
            score: 0,
            streak: 0,
            tiers,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn tiers(&self) -> &[StreakTier] {
        &self.tiers
    }

    pub fn is_active(&self) -> bool {
        self.phase == Phase::Active
    }

    pub fn is_paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: SessionAction) -> TransitionResult {
        let from = self.phase;
        let next = match (from, action) {
            (Phase::NotStarted, SessionAction::Start) => Some(Phase::Active),
            (Phase::Active, SessionAction::TogglePause) => Some(Phase::Paused),
            (Phase::Paused, SessionAction::TogglePause) => Some(Phase::Active),
            _ => None,
        };

        match next {
            Some(to) => {
                if action == SessionAction::Start {
                    self.score = 0;
                    self.streak = 0;
                }
                self.phase = to;
                debug!("session {:?} -> {:?}", from, to);
                TransitionResult {
                    success: true,
                    from,
                    to,
                    action,
                }
            }
            None => {
                warn!("session: {:?} rejected in {:?}", action, from);
                TransitionResult {
                    success: false,
                    from,
                    to: from,
                    action,
                }
            }
        }
    }

    /// Tier with the greatest threshold not above `streak`
    pub fn tier_lookup(&self, streak: u32) -> &StreakTier {
        tier_for(&self.tiers, streak)
    }

    pub fn current_tier(&self) -> &StreakTier {
        self.tier_lookup(self.streak)
    }

    /// Count a successful tap; returns the points awarded
    pub fn register_hit(&mut self, base_points: f32) -> u32 {
        self.streak = self.streak.saturating_add(1);
        let multiplier = self.tier_lookup(self.streak).multiplier;
        // `as` saturates, so huge products land on u32::MAX
        let points = (base_points * multiplier).ceil() as u32;
        self.score = self.score.saturating_add(points);
        points
    }

    /// Break the streak; returns true if there was one to lose
    pub fn register_miss(&mut self) -> bool {
        if self.streak > 0 {
            debug!(
                "streak of {} lost ({})",
                self.streak,
                self.current_tier().name
            );
            self.streak = 0;
            true
        } else {
            false
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(default_tiers())
    }
}

static BASE_TIER: StreakTier = StreakTier {
    threshold: 0,
    multiplier: 1.0,
    name: String::new(),
    flames: 0,
};

/// First tier (highest threshold first) that `streak` reaches. A validated
/// table always ends at threshold 0; an unvalidated one falls back to x1.
pub fn tier_for(tiers: &[StreakTier], streak: u32) -> &StreakTier {
    tiers
        .iter()
        .find(|tier| streak >= tier.threshold)
        .unwrap_or(&BASE_TIER)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active() -> Session {
        let mut session = Session::default();
        session.transition(SessionAction::Start);
        session
    }

    #[test]
    fn test_initial_phase() {
        let session = Session::default();
        assert_eq!(session.phase(), Phase::NotStarted);
        assert_eq!(session.score(), 0);
        assert_eq!(session.streak(), 0);
    }

    #[test]
    fn test_pause_round_trip() {
        let mut session = active();
        let result = session.transition(SessionAction::TogglePause);
        assert!(result.success);
        assert_eq!(result.from, Phase::Active);
        assert_eq!(result.to, Phase::Paused);
        session.transition(SessionAction::TogglePause);
        assert_eq!(session.phase(), Phase::Active);
    }

    #[test]
    fn test_invalid_transitions() {
        let mut session = Session::default();
        let result = session.transition(SessionAction::TogglePause);
        assert!(!result.success);
        assert_eq!(session.phase(), Phase::NotStarted);

        let mut session = active();
        session.register_hit(1.0);
        let result = session.transition(SessionAction::Start);
        assert!(!result.success);
        assert_eq!(session.phase(), Phase::Active);
        assert_eq!(session.score(), 1, "rejected start must not reset score");
    }

    #[test]
    fn test_tier_lookup() {
        let session = Session::default();
        let cases = [
            (0, 1.0),
            (1, 1.0),
            (2, 2.0),
            (3, 2.0),
            (4, 4.0),
            (7, 4.0),
            (8, 8.0),
            (11, 8.0),
            (12, 16.0),
            (500, 16.0),
        ];
        for (streak, multiplier) in cases {
            assert_eq!(
                session.tier_lookup(streak).multiplier,
                multiplier,
                "streak {}",
                streak
            );
        }
    }

    #[test]
    fn test_register_hit_applies_multiplier_after_increment() {
        let mut session = active();
        let points: Vec<u32> = (0..12).map(|_| session.register_hit(1.0)).collect();
        // streaks 1..=12
        assert_eq!(points, vec![1, 2, 2, 4, 4, 4, 4, 8, 8, 8, 8, 16]);
        assert_eq!(session.score(), 69);
        assert_eq!(session.streak(), 12);
        assert_eq!(session.current_tier().name, "Max!");
    }

    #[test]
    fn test_tier_lookup_without_base_tier_falls_back() {
        let session = Session::new(vec![StreakTier::new(4, 4.0, "x4!", 2)]);
        assert_eq!(session.tier_lookup(1).multiplier, 1.0);
        assert_eq!(session.tier_lookup(4).multiplier, 4.0);
    }

    #[test]
    fn test_register_hit_rounds_up() {
        let mut session = active();
        assert_eq!(session.register_hit(0.4), 1);
        assert_eq!(session.register_hit(0.4), 1); // ceil(0.8)
        assert_eq!(session.score(), 2);
    }

    #[test]
    fn test_register_miss() {
        let mut session = active();
        assert!(!session.register_miss(), "no streak to lose");
        session.register_hit(1.0);
        session.register_hit(1.0);
        assert!(session.register_miss());
        assert_eq!(session.streak(), 0);
        assert_eq!(session.score(), 3, "misses never take points away");
    }

    #[test]
    fn test_score_and_streak_saturate() {
        let mut session = Session::new(vec![StreakTier::new(0, 1e10, "x1", 0)]);
        session.transition(SessionAction::Start);
        assert_eq!(session.register_hit(1.0), u32::MAX);
        session.register_hit(1.0);
        assert_eq!(session.score(), u32::MAX);

        session.streak = u32::MAX;
        session.register_hit(1.0);
        assert_eq!(session.streak(), u32::MAX);
    }
}
