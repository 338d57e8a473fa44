//! Achievement shelf rendering. Achievements are static: nothing in the game unlocks one.
use crate::game::types::Achievement;

pub fn unlocked(achievements: &[Achievement]) -> Vec<&Achievement> {
    achievements.iter().filter(|a| a.unlocked).collect()
}

pub fn locked(achievements: &[Achievement]) -> Vec<&Achievement> {
    achievements.iter().filter(|a| !a.unlocked).collect()
}

pub fn format_achievements(achievements: &[Achievement]) -> String {
    let mut out = format!(
        "=== ACHIEVEMENTS ({}/{} unlocked) ===\n",
        unlocked(achievements).len(),
        achievements.len()
    );
    for a in achievements {
        let icon = if a.unlocked { a.icon.as_str() } else { "🔒" };
        out.push_str(&format!(
            "{} {} - {} [{}]\n",
            icon, a.title, a.description, a.rarity
        ));
    }
    out
}
