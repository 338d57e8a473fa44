//! Guild leaderboard and guild directory.
//!
//! The leaderboard is sample data with one live row: rank 8 reflects the current
//! player's level, swaps and volume, and shows `1500 + xp` as lifetime XP.

use crate::game::progress::GameState;
use crate::game::types::Rarity;

/// Offset added to the player's current-level xp for the leaderboard column.
pub const LIFETIME_XP_BASE: i64 = 1500;
/// Leaderboard slot occupied by the current player.
pub const PLAYER_RANK: u32 = 8;

#[derive(Debug, Clone, PartialEq)]
pub struct GuildMember {
    pub rank: u32,
    pub name: String,
    pub level: u32,
    pub xp: i64,
    pub swaps: u64,
    pub volume: f64,
    pub is_current_user: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuildInfo {
    pub name: &'static str,
    pub members: u32,
    pub level: u32,
    pub description: &'static str,
    pub requirement: &'static str,
    pub badge: &'static str,
    pub tier: Rarity,
    /// Level gate enforced on the join button; 0 means open.
    pub min_level: u32,
}

/// What the directory offers the player for one guild.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinStatus {
    Current,
    LevelRequired,
    Joinable,
}

impl JoinStatus {
    pub fn label(self) -> &'static str {
        match self {
            JoinStatus::Current => "Current Guild",
            JoinStatus::LevelRequired => "Level Required",
            JoinStatus::Joinable => "Join Guild",
        }
    }
}

const RIVALS: [(&str, u32, i64, u64, f64); 9] = [
    ("CryptoMaster", 15, 4250, 234, 15247.89),
    ("SwapKing", 12, 3890, 189, 12456.34),
    ("TokenHunter", 11, 3456, 167, 9876.12),
    ("DeFiPro", 10, 2987, 145, 8234.56),
    ("JupiterTrader", 9, 2543, 123, 6789.01),
    ("SolanaExplorer", 8, 2134, 98, 4567.89),
    ("GuildWarrior", 7, 1876, 87, 3456.78),
    ("NewTrader", 4, 1234, 45, 2345.67),
    ("Rookie", 3, 987, 23, 1234.56),
];

pub const AVAILABLE_GUILDS: [GuildInfo; 4] = [
    GuildInfo {
        name: "Jupiter Elite",
        members: 2847,
        level: 15,
        description: "Top-tier traders with legendary status",
        requirement: "Level 10+ required",
        badge: "🏆",
        tier: Rarity::Legendary,
        min_level: 10,
    },
    GuildInfo {
        name: "DeFi Dragons",
        members: 1923,
        level: 12,
        description: "Fierce competitors in the trading arena",
        requirement: "Level 8+ required",
        badge: "🐉",
        tier: Rarity::Epic,
        min_level: 0,
    },
    GuildInfo {
        name: "Solana Swappers",
        members: 3456,
        level: 8,
        description: "Community-focused trading guild",
        requirement: "Level 5+ required",
        badge: "⚡",
        tier: Rarity::Rare,
        min_level: 0,
    },
    GuildInfo {
        name: "Crypto Rookies",
        members: 5432,
        level: 4,
        description: "Perfect for beginners to learn and grow",
        requirement: "Open to all",
        badge: "🌱",
        tier: Rarity::Common,
        min_level: 0,
    },
];

/// Build the ten-row leaderboard with the player spliced in at [`PLAYER_RANK`].
pub fn leaderboard(state: &GameState) -> Vec<GuildMember> {
    let mut rows = Vec::with_capacity(RIVALS.len() + 1);
    let mut rivals = RIVALS.iter();
    for rank in 1..=(RIVALS.len() as u32 + 1) {
        if rank == PLAYER_RANK {
            rows.push(GuildMember {
                rank,
                name: "You".to_string(),
                level: state.level(),
                xp: LIFETIME_XP_BASE.saturating_add(state.xp()),
                swaps: state.total_swaps(),
                volume: state.total_volume(),
                is_current_user: true,
            });
        } else if let Some(&(name, level, xp, swaps, volume)) = rivals.next() {
            rows.push(GuildMember {
                rank,
                name: name.to_string(),
                level,
                xp,
                swaps,
                volume,
                is_current_user: false,
            });
        }
    }
    rows
}

pub fn join_status(info: &GuildInfo, state: &GameState) -> JoinStatus {
    if state.guild() == Some(info.name) {
        JoinStatus::Current
    } else if state.level() < info.min_level {
        JoinStatus::LevelRequired
    } else {
        JoinStatus::Joinable
    }
}

pub fn rank_badge(rank: u32) -> String {
    match rank {
        1 => "🥇".to_string(),
        2 => "🥈".to_string(),
        3 => "🥉".to_string(),
        n => format!("#{}", n),
    }
}

pub fn format_leaderboard(state: &GameState) -> String {
    let guild = state.guild().unwrap_or("No guild");
    let mut out = format!("=== {} LEADERBOARD ===\n", guild.to_uppercase());
    for m in leaderboard(state) {
        let marker = if m.is_current_user { " ◀" } else { "" };
        out.push_str(&format!(
            "{:>3} {} Lv{} {} XP {} swaps ${:.2}{}\n",
            rank_badge(m.rank),
            m.name,
            m.level,
            m.xp,
            m.swaps,
            m.volume,
            marker
        ));
    }
    out.push_str("--- Guilds ---\n");
    for g in AVAILABLE_GUILDS.iter() {
        out.push_str(&format!(
            "{} {} (Lv{}, {} members) - {} [{}] {}\n",
            g.badge,
            g.name,
            g.level,
            g.members,
            g.description,
            g.requirement,
            join_status(g, state).label()
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_sits_at_rank_eight() {
        let state = GameState::seeded();
        let rows = leaderboard(&state);
        assert_eq!(rows.len(), 10);
        let me = &rows[7];
        assert!(me.is_current_user);
        assert_eq!(me.rank, 8);
        assert_eq!(me.xp, 1650);
        assert_eq!(me.swaps, 7);
        assert_eq!(rows[8].name, "NewTrader");
        assert_eq!(rows[9].rank, 10);
    }

    #[test]
    fn leaderboard_tracks_live_state() {
        let mut state = GameState::seeded();
        state.increment_swaps();
        state.add_xp(400);
        let me = leaderboard(&state).into_iter().find(|m| m.is_current_user).unwrap();
        assert_eq!(me.level, 2);
        assert_eq!(me.xp, 1550);
        assert_eq!(me.swaps, 8);
    }

    #[test]
    fn directory_gates_elite_guild_by_level() {
        let state = GameState::seeded();
        let elite = &AVAILABLE_GUILDS[0];
        let rookies = &AVAILABLE_GUILDS[3];
        assert_eq!(join_status(elite, &state), JoinStatus::LevelRequired);
        assert_eq!(join_status(rookies, &state), JoinStatus::Joinable);
        let mut veteran = GameState::seeded().with_policy(crate::game::LevelUpPolicy::MultiStep);
        veteran.add_xp(500 * 9);
        assert_eq!(veteran.level(), 10);
        assert_eq!(join_status(elite, &veteran), JoinStatus::Joinable);
    }

    #[test]
    fn directory_marks_current_guild() {
        let cfg = crate::config::ProgressionConfig {
            guild: Some("DeFi Dragons".to_string()),
            ..Default::default()
        };
        let state = GameState::new(&cfg);
        assert_eq!(join_status(&AVAILABLE_GUILDS[1], &state), JoinStatus::Current);
        assert!(format_leaderboard(&state).contains("Fierce competitors in the trading arena [Level 8+ required] Current Guild"));
    }

    #[test]
    fn badges_for_podium() {
        assert_eq!(rank_badge(1), "🥇");
        assert_eq!(rank_badge(3), "🥉");
        assert_eq!(rank_badge(4), "#4");
    }
}
