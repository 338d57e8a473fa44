//! Hard-coded sample data every session starts from.

use crate::game::types::{Achievement, DailyQuest, NftBadge, Quest, Rarity};

pub const DEFAULT_LEVEL: u32 = 1;
pub const DEFAULT_XP: i64 = 150;
pub const DEFAULT_MAX_XP: i64 = 500;
pub const DEFAULT_TOTAL_SWAPS: u64 = 7;
pub const DEFAULT_TOTAL_VOLUME: f64 = 1247.89;
pub const DEFAULT_GUILD: &str = "Jupiter Traders";

pub fn starter_quests() -> Vec<Quest> {
    vec![
        Quest::new("1", "First Swap", "Complete your first token swap", Rarity::Common)
            .with_progress(1, 1)
            .with_xp_reward(50)
            .as_completed(),
        Quest::new("2", "Volume Trader", "Trade $1000+ in volume", Rarity::Rare)
            .with_progress(1247, 1000)
            .with_xp_reward(200)
            .as_completed(),
        Quest::new(
            "3",
            "Prediction Master",
            "Win 3 price prediction games",
            Rarity::Epic,
        )
        .with_progress(2, 3)
        .with_xp_reward(150),
        Quest::new(
            "4",
            "Guild Champion",
            "Reach top 10 in your guild",
            Rarity::Legendary,
        )
        .with_progress(8, 10)
        .with_xp_reward(500),
    ]
}

pub fn starter_achievements() -> Vec<Achievement> {
    vec![
        Achievement::new(
            "1",
            "Welcome Aboard",
            "Connected your first wallet",
            "🚀",
            Rarity::Common,
        )
        .as_unlocked(),
        Achievement::new("2", "Swap Master", "Completed 10 swaps", "⚡", Rarity::Rare),
        Achievement::new(
            "3",
            "Oracle",
            "Perfect prediction streak of 5",
            "🔮",
            Rarity::Legendary,
        ),
    ]
}

pub fn daily_quests() -> Vec<DailyQuest> {
    let daily = |quest: Quest, time_left: &str| DailyQuest {
        quest,
        time_left: time_left.to_string(),
    };
    vec![
        daily(
            Quest::new(
                "daily-1",
                "Morning Trader",
                "Complete 3 swaps before noon",
                Rarity::Common,
            )
            .with_progress(2, 3)
            .with_xp_reward(75),
            "4h 23m",
        ),
        daily(
            Quest::new(
                "daily-2",
                "Volume Hunter",
                "Trade $500+ in total volume today",
                Rarity::Rare,
            )
            .with_progress(347, 500)
            .with_xp_reward(150),
            "15h 12m",
        ),
        daily(
            Quest::new(
                "daily-3",
                "Token Explorer",
                "Swap 5 different token pairs",
                Rarity::Common,
            )
            .with_progress(3, 5)
            .with_xp_reward(100),
            "20h 45m",
        ),
    ]
}

pub const NFT_COLLECTION: [NftBadge; 3] = [
    NftBadge {
        id: "1",
        name: "First Swap Badge",
        description: "Commemorates your first successful swap",
        icon: "🚀",
        rarity: Rarity::Common,
        earned: "2024-01-15",
    },
    NftBadge {
        id: "2",
        name: "Volume Trader",
        description: "Achieved $1000+ in trading volume",
        icon: "💎",
        rarity: Rarity::Rare,
        earned: "2024-01-20",
    },
    NftBadge {
        id: "3",
        name: "Guild Warrior",
        description: "Top 10 performer in guild rankings",
        icon: "⚔️",
        rarity: Rarity::Epic,
        earned: "2024-01-25",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starter_quest_ids_are_unique() {
        let quests = starter_quests();
        let mut ids: Vec<_> = quests.iter().map(|q| q.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids, vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn only_first_achievement_starts_unlocked() {
        let unlocked: Vec<_> = starter_achievements()
            .into_iter()
            .filter(|a| a.unlocked)
            .map(|a| a.id)
            .collect();
        assert_eq!(unlocked, vec!["1".to_string()]);
    }
}
