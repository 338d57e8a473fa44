use serde::{Deserialize, Serialize};
use std::fmt;

/// Rarity tier shared by quests, achievements, loot and badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    /// Colored dot used in quest listings.
    pub fn icon(self) -> &'static str {
        match self {
            Rarity::Common => "⚪",
            Rarity::Rare => "🔵",
            Rarity::Epic => "🟣",
            Rarity::Legendary => "🟡",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Rare => "rare",
            Rarity::Epic => "epic",
            Rarity::Legendary => "legendary",
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How `add_xp` treats a gain that crosses more than one level threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LevelUpPolicy {
    /// Subtract `max_xp` at most once per call. Large gains can leave
    /// `xp >= max_xp` until the next call.
    #[default]
    SingleStep,
    /// Keep rolling over until `xp < max_xp`.
    MultiStep,
}

/// A trackable objective. Only `completed` is ever mutated by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quest {
    pub id: String,
    pub title: String,
    pub description: String,
    pub progress: u32,
    pub max_progress: u32,
    pub xp_reward: i64,
    pub completed: bool,
    pub rarity: Rarity,
}

impl Quest {
    pub fn new(id: &str, title: &str, description: &str, rarity: Rarity) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            progress: 0,
            max_progress: 1,
            xp_reward: 0,
            completed: false,
            rarity,
        }
    }

    pub fn with_progress(mut self, progress: u32, max_progress: u32) -> Self {
        self.progress = progress;
        self.max_progress = max_progress;
        self
    }

    pub fn with_xp_reward(mut self, xp: i64) -> Self {
        self.xp_reward = xp;
        self
    }

    pub fn as_completed(mut self) -> Self {
        self.completed = true;
        self
    }

    /// Objective met according to the counters (may be true while not yet claimed).
    pub fn is_ready(&self) -> bool {
        self.progress >= self.max_progress
    }
}

/// Rotating daily objective. Display-only; never claimed through the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyQuest {
    pub quest: Quest,
    pub time_left: String,
}

/// Static badge. No operation unlocks one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub rarity: Rarity,
    pub unlocked: bool,
}

impl Achievement {
    pub fn new(id: &str, title: &str, description: &str, icon: &str, rarity: Rarity) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
            rarity,
            unlocked: false,
        }
    }

    pub fn as_unlocked(mut self) -> Self {
        self.unlocked = true;
        self
    }
}

/// Collectible badge shown on the profile. Display-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NftBadge {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub rarity: Rarity,
    /// ISO date the badge was minted.
    pub earned: &'static str,
}
