//! Gamification core: player progression plus the mini-games around it.
//!
//! [`GameState`] owns level, experience, swap counters, quests and achievements.
//! The other modules are read-mostly helpers (quest board, achievements, guilds)
//! or self-contained games. Loot box prizes feed `GameState::add_xp`; price
//! predictions only record picks and never award xp.

pub mod achievement;
pub mod errors;
pub mod guild;
pub mod lootbox;
pub mod prediction;
pub mod progress;
pub mod quest;
pub mod seed;
pub mod types;

pub use errors::GameError;
pub use guild::{join_status, JoinStatus};
pub use lootbox::{apply_rewards, roll, LootItem, LootKind};
pub use prediction::{Direction, PredictionBoard, PredictionRound};
pub use progress::{ClaimOutcome, GameState, XpOutcome};
pub use quest::{active_quests, claimable_quests, completed_quests, progress_percent};
pub use types::*;
