//! Player progression engine: experience, levels, quest completion and swap counters.
//!
//! A [`GameState`] is an ordinary owned value. The shell keeps one per session and
//! passes it by reference to whatever needs it; tests build as many as they like.
//!
//! Mutations never fail. `add_xp` accepts any amount (negative values lower xp with
//! no floor), `complete_quest` ignores unknown ids, and `increment_swaps` has no bound.

use log::{debug, info};
use serde::Serialize;

use crate::config::ProgressionConfig;
use crate::game::seed;
use crate::game::types::{Achievement, LevelUpPolicy, Quest};
use crate::logutil::escape_log;

/// Result of a single `add_xp` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XpOutcome {
    pub levels_gained: u32,
    pub level: u32,
    pub xp: i64,
}

/// Result of claiming a quest reward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimOutcome {
    pub quest_id: String,
    pub title: String,
    pub xp_reward: i64,
    pub xp: XpOutcome,
}

#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    level: u32,
    xp: i64,
    max_xp: i64,
    total_swaps: u64,
    total_volume: f64,
    guild: Option<String>,
    quests: Vec<Quest>,
    achievements: Vec<Achievement>,
    #[serde(skip)]
    policy: LevelUpPolicy,
}

impl GameState {
    pub fn new(cfg: &ProgressionConfig) -> Self {
        Self {
            level: cfg.starting_level.max(1),
            xp: cfg.starting_xp,
            max_xp: cfg.max_xp.max(1),
            total_swaps: cfg.starting_swaps,
            total_volume: cfg.starting_volume,
            guild: cfg.guild.clone().filter(|g| !g.trim().is_empty()),
            quests: seed::starter_quests(),
            achievements: seed::starter_achievements(),
            policy: cfg.level_up_policy,
        }
    }

    /// Fresh session with the built-in sample values.
    pub fn seeded() -> Self {
        Self::new(&ProgressionConfig::default())
    }

    pub fn with_policy(mut self, policy: LevelUpPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn xp(&self) -> i64 {
        self.xp
    }

    pub fn max_xp(&self) -> i64 {
        self.max_xp
    }

    pub fn total_swaps(&self) -> u64 {
        self.total_swaps
    }

    pub fn total_volume(&self) -> f64 {
        self.total_volume
    }

    pub fn guild(&self) -> Option<&str> {
        self.guild.as_deref()
    }

    pub fn quests(&self) -> &[Quest] {
        &self.quests
    }

    pub fn quest(&self, quest_id: &str) -> Option<&Quest> {
        self.quests.iter().find(|q| q.id == quest_id)
    }

    pub fn achievements(&self) -> &[Achievement] {
        &self.achievements
    }

    pub fn policy(&self) -> LevelUpPolicy {
        self.policy
    }

    /// Progress bar value, rounded to the nearest percent.
    pub fn xp_percent(&self) -> i64 {
        ((self.xp as f64 / self.max_xp as f64) * 100.0).round() as i64
    }

    pub fn xp_to_next_level(&self) -> i64 {
        self.max_xp.saturating_sub(self.xp)
    }

    /// Add experience, rolling over into the next level when `max_xp` is reached.
    pub fn add_xp(&mut self, amount: i64) -> XpOutcome {
        let mut xp = self.xp.saturating_add(amount);
        let mut levels_gained = 0u32;
        match self.policy {
            LevelUpPolicy::SingleStep => {
                if xp >= self.max_xp {
                    xp -= self.max_xp;
                    levels_gained = 1;
                }
            }
            LevelUpPolicy::MultiStep => {
                if xp >= self.max_xp {
                    levels_gained = u32::try_from(xp / self.max_xp).unwrap_or(u32::MAX);
                    xp %= self.max_xp;
                }
            }
        }
        self.xp = xp;
        self.level = self.level.saturating_add(levels_gained);
        if levels_gained > 0 {
            info!(
                "Level up: +{} -> level {} ({} / {} xp)",
                levels_gained, self.level, self.xp, self.max_xp
            );
        } else {
            debug!("xp {:+} -> {} / {}", amount, self.xp, self.max_xp);
        }
        XpOutcome {
            levels_gained,
            level: self.level,
            xp: self.xp,
        }
    }

    /// Mark a quest completed. Returns `true` only when an incomplete quest flipped.
    /// Unknown ids are ignored. Does not grant xp.
    pub fn complete_quest(&mut self, quest_id: &str) -> bool {
        match self.quests.iter_mut().find(|q| q.id == quest_id) {
            Some(quest) if !quest.completed => {
                quest.completed = true;
                debug!("quest '{}' completed", escape_log(quest_id));
                true
            }
            Some(_) => false,
            None => {
                debug!("complete_quest: no quest '{}'", escape_log(quest_id));
                false
            }
        }
    }

    /// Complete a quest and grant its xp reward in one step.
    ///
    /// Returns `None` for unknown or already completed quests so a reward is never
    /// granted twice through this path.
    pub fn claim_quest_reward(&mut self, quest_id: &str) -> Option<ClaimOutcome> {
        let (title, xp_reward) = {
            let quest = self.quest(quest_id)?;
            if quest.completed {
                return None;
            }
            (quest.title.clone(), quest.xp_reward)
        };
        self.complete_quest(quest_id);
        let xp = self.add_xp(xp_reward);
        info!("Quest '{}' claimed for {} xp", title, xp_reward);
        Some(ClaimOutcome {
            quest_id: quest_id.to_string(),
            title,
            xp_reward,
            xp,
        })
    }

    pub fn increment_swaps(&mut self) {
        self.total_swaps = self.total_swaps.saturating_add(1);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_xp_below_threshold() {
        let mut state = GameState::seeded();
        let out = state.add_xp(100);
        assert_eq!(out.levels_gained, 0);
        assert_eq!(state.xp(), 250);
        assert_eq!(state.level(), 1);
    }

    #[test]
    fn add_xp_exactly_at_threshold_levels_up() {
        let mut state = GameState::seeded();
        state.add_xp(350);
        assert_eq!(state.level(), 2);
        assert_eq!(state.xp(), 0);
    }

    #[test]
    fn single_step_caps_at_one_level() {
        let mut state = GameState::seeded();
        let out = state.add_xp(1_000);
        assert_eq!(out.levels_gained, 1);
        assert_eq!(state.level(), 2);
        assert_eq!(state.xp(), 650);
    }

    #[test]
    fn multi_step_rolls_over_repeatedly() {
        let mut state = GameState::seeded().with_policy(LevelUpPolicy::MultiStep);
        let out = state.add_xp(1_000);
        assert_eq!(out.levels_gained, 2);
        assert_eq!(state.level(), 3);
        assert_eq!(state.xp(), 150);
    }

    #[test]
    fn multi_step_huge_gain_saturates_level() {
        let mut state = GameState::seeded().with_policy(LevelUpPolicy::MultiStep);
        let out = state.add_xp(i64::MAX / 2);
        assert_eq!(out.levels_gained, u32::MAX);
        assert_eq!(state.level(), u32::MAX);
        assert!((0..500).contains(&state.xp()));
        assert_eq!(state.xp_to_next_level(), 500 - state.xp());
    }

    #[test]
    fn extreme_xp_keeps_derived_values_finite() {
        let mut state = GameState::seeded();
        state.add_xp(i64::MAX);
        assert_eq!(state.level(), 2);
        assert_eq!(state.xp(), i64::MAX - 500);
        state.add_xp(-i64::MAX);
        state.add_xp(i64::MIN);
        assert_eq!(state.xp(), i64::MIN);
        assert_eq!(state.xp_to_next_level(), i64::MAX);
    }

    #[test]
    fn negative_xp_has_no_floor() {
        let mut state = GameState::seeded();
        state.add_xp(-200);
        assert_eq!(state.xp(), -50);
        assert_eq!(state.level(), 1);
    }

    #[test]
    fn xp_percent_rounds() {
        let state = GameState::seeded();
        assert_eq!(state.xp_percent(), 30);
        assert_eq!(state.xp_to_next_level(), 350);
    }

    #[test]
    fn claim_pairs_completion_with_reward() {
        let mut state = GameState::seeded();
        let claim = state.claim_quest_reward("3").expect("claimable");
        assert_eq!(claim.xp_reward, 150);
        assert!(state.quest("3").unwrap().completed);
        assert_eq!(state.xp(), 300);
        assert!(state.claim_quest_reward("3").is_none());
        assert_eq!(state.xp(), 300);
    }

    #[test]
    fn inert_fields_stay_untouched() {
        let mut state = GameState::seeded();
        state.add_xp(400);
        state.increment_swaps();
        state.claim_quest_reward("4");
        assert_eq!(state.total_volume(), seed::DEFAULT_TOTAL_VOLUME);
        assert_eq!(state.quest("4").unwrap().progress, 8);
        assert!(!state.achievements()[1].unlocked);
    }
}
