//! Mystery loot box opened from the swap page.
//!
//! Overview
//! - Five fixed prizes; each opening draws 1–3 of them uniformly, with replacement
//! - XP prizes feed [`GameState::add_xp`] once per item; token and NFT prizes are cosmetic
//! - Opening is a delayed interaction: the shell waits `lootbox_open_ms` inside a
//!   [`crate::tasks::ViewScope`] and only calls [`apply_rewards`] if the dialog is still open
//!
//! Rolling takes the RNG as a parameter so tests can seed it.

use rand::Rng;
use std::fmt;

use crate::game::progress::{GameState, XpOutcome};
use crate::game::types::Rarity;

/// Minimum and maximum number of prizes per opening.
pub const MIN_ITEMS: usize = 1;
pub const MAX_ITEMS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LootKind {
    Xp,
    Token,
    Nft,
}

impl fmt::Display for LootKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LootKind::Xp => "XP",
            LootKind::Token => "Token",
            LootKind::Nft => "NFT",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LootItem {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: LootKind,
    pub value: &'static str,
    pub rarity: Rarity,
    pub icon: &'static str,
}

impl LootItem {
    /// Experience granted by this item, if it is an XP prize.
    pub fn xp_value(&self) -> Option<i64> {
        match self.kind {
            LootKind::Xp => self.value.parse().ok(),
            _ => None,
        }
    }
}

pub const PRIZE_TABLE: [LootItem; 5] = [
    LootItem {
        id: "1",
        name: "XP Boost",
        kind: LootKind::Xp,
        value: "100",
        rarity: Rarity::Common,
        icon: "⚡",
    },
    LootItem {
        id: "2",
        name: "SOL Tokens",
        kind: LootKind::Token,
        value: "0.1",
        rarity: Rarity::Rare,
        icon: "◎",
    },
    LootItem {
        id: "3",
        name: "Trader Badge NFT",
        kind: LootKind::Nft,
        value: "#001",
        rarity: Rarity::Epic,
        icon: "🏆",
    },
    LootItem {
        id: "4",
        name: "Legendary Boost",
        kind: LootKind::Xp,
        value: "500",
        rarity: Rarity::Legendary,
        icon: "🌟",
    },
    LootItem {
        id: "5",
        name: "Jupiter Token",
        kind: LootKind::Token,
        value: "25",
        rarity: Rarity::Rare,
        icon: "🪐",
    },
];

/// Draw the prizes for one opening.
pub fn roll<R: Rng + ?Sized>(rng: &mut R) -> Vec<LootItem> {
    let count = rng.gen_range(MIN_ITEMS..=MAX_ITEMS);
    (0..count)
        .map(|_| PRIZE_TABLE[rng.gen_range(0..PRIZE_TABLE.len())])
        .collect()
}

pub fn xp_total(items: &[LootItem]) -> i64 {
    items.iter().filter_map(LootItem::xp_value).sum()
}

/// Grant every XP prize, one `add_xp` call per item.
pub fn apply_rewards(state: &mut GameState, items: &[LootItem]) -> Vec<XpOutcome> {
    items
        .iter()
        .filter_map(LootItem::xp_value)
        .map(|xp| state.add_xp(xp))
        .collect()
}

pub fn format_rewards(items: &[LootItem]) -> String {
    let mut out = String::from("🎉 You received:\n");
    for item in items {
        out.push_str(&format!(
            "{} {} • {} {} [{}]\n",
            item.icon, item.name, item.kind, item.value, item.rarity
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn roll_stays_within_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let items = roll(&mut rng);
            assert!((MIN_ITEMS..=MAX_ITEMS).contains(&items.len()));
            assert!(items.iter().all(|i| PRIZE_TABLE.contains(i)));
        }
    }

    #[test]
    fn only_xp_prizes_have_xp() {
        assert_eq!(PRIZE_TABLE[0].xp_value(), Some(100));
        assert_eq!(PRIZE_TABLE[1].xp_value(), None);
        assert_eq!(PRIZE_TABLE[3].xp_value(), Some(500));
        assert_eq!(xp_total(&PRIZE_TABLE), 600);
    }

    #[test]
    fn apply_rewards_adds_each_item_separately() {
        let mut state = GameState::seeded();
        let items = [PRIZE_TABLE[0], PRIZE_TABLE[2], PRIZE_TABLE[0]];
        let outcomes = apply_rewards(&mut state, &items);
        assert_eq!(outcomes.len(), 2);
        assert_eq!(state.xp(), 350);
        assert_eq!(state.level(), 1);
    }
}
