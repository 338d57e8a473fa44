//! Quest board helpers: partitioning, progress math and text rendering.
//!
//! The engine only flips `completed`; everything here is read-only.
use crate::game::types::{DailyQuest, Quest};

/// Rounded completion percentage. Not clamped: over-achieved quests report >100.
pub fn progress_percent(quest: &Quest) -> u32 {
    if quest.max_progress == 0 {
        return 100;
    }
    ((quest.progress as f64 / quest.max_progress as f64) * 100.0).round() as u32
}

pub fn active_quests(quests: &[Quest]) -> Vec<&Quest> {
    quests.iter().filter(|q| !q.completed).collect()
}

pub fn completed_quests(quests: &[Quest]) -> Vec<&Quest> {
    quests.iter().filter(|q| q.completed).collect()
}

/// Quests that show a claim button: objective met and reward not yet taken.
pub fn claimable_quests(quests: &[Quest]) -> Vec<&Quest> {
    quests.iter().filter(|q| !q.completed && q.is_ready()).collect()
}

/// Sum of rewards already earned through completed quests.
pub fn earned_xp(quests: &[Quest]) -> i64 {
    completed_quests(quests).iter().map(|q| q.xp_reward).sum()
}

pub fn format_quest_line(quest: &Quest) -> String {
    let status = if quest.completed {
        "✓".to_string()
    } else if quest.is_ready() {
        "CLAIM".to_string()
    } else {
        format!("{}%", progress_percent(quest))
    };
    format!(
        "{} [{}] {} [{}/{}] +{} XP ({})",
        quest.rarity.icon(),
        quest.id,
        quest.title,
        quest.progress,
        quest.max_progress,
        quest.xp_reward,
        status
    )
}

pub fn format_quest_board(quests: &[Quest], daily: &[DailyQuest]) -> String {
    let mut out = String::from("=== QUESTS ===\n");
    let active = active_quests(quests);
    if active.is_empty() {
        out.push_str("No active quests.\n");
    }
    for quest in active {
        out.push_str(&format_quest_line(quest));
        out.push('\n');
        out.push_str(&format!("    {}\n", quest.description));
    }
    if !daily.is_empty() {
        out.push_str("--- Daily ---\n");
        for d in daily {
            out.push_str(&format_quest_line(&d.quest));
            out.push_str(&format!(" ⏳ {}\n", d.time_left));
        }
    }
    let done = completed_quests(quests);
    if !done.is_empty() {
        out.push_str("--- Completed ---\n");
        for quest in done {
            out.push_str(&format_quest_line(quest));
            out.push('\n');
        }
    }
    out.push_str(&format!("Quest XP earned: {}\n", earned_xp(quests)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::seed;

    #[test]
    fn percent_is_not_clamped() {
        let quests = seed::starter_quests();
        assert_eq!(progress_percent(&quests[1]), 125);
        assert_eq!(progress_percent(&quests[2]), 67);
        assert_eq!(progress_percent(&quests[3]), 80);
    }

    #[test]
    fn partitions_seeded_board() {
        let quests = seed::starter_quests();
        assert_eq!(active_quests(&quests).len(), 2);
        assert_eq!(completed_quests(&quests).len(), 2);
        assert!(claimable_quests(&quests).is_empty());
        assert_eq!(earned_xp(&quests), 250);
    }

    #[test]
    fn board_lists_daily_quests() {
        let board = format_quest_board(&seed::starter_quests(), &seed::daily_quests());
        assert!(board.contains("Prediction Master"));
        assert!(board.contains("Morning Trader"));
        assert!(board.contains("⏳ 4h 23m"));
        assert!(board.contains("--- Completed ---"));
    }
}
