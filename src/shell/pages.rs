//! Page identifiers and text renderers for the shell.

use crate::config::AppConfig;
use crate::game::{achievement, guild, prediction, quest, seed, GameState, PredictionBoard};
use crate::logutil::short_address;
use crate::market::swap::{usd_value, SLIPPAGE_OPTIONS};
use crate::market::token::format_price_list;
use crate::market::{parse_amount, MockWallet, SwapForm};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Swap,
    Quests,
    Guilds,
    Game,
    Profile,
}

impl Page {
    pub const ALL: [Page; 6] = [
        Page::Home,
        Page::Swap,
        Page::Quests,
        Page::Guilds,
        Page::Game,
        Page::Profile,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Swap => "swap",
            Page::Quests => "quests",
            Page::Guilds => "guilds",
            Page::Game => "game",
            Page::Profile => "profile",
        }
    }

    pub fn from_name(name: &str) -> Option<Page> {
        let name = name.trim().trim_start_matches('/').to_ascii_lowercase();
        if name.is_empty() {
            return Some(Page::Home);
        }
        Page::ALL.into_iter().find(|p| p.slug() == name)
    }
}

pub fn level_bar(state: &GameState) -> String {
    let filled = (state.xp_percent().clamp(0, 100) / 10) as usize;
    format!(
        "Lv{} [{}{}] {} / {} XP",
        state.level(),
        "#".repeat(filled),
        ".".repeat(10 - filled),
        state.xp(),
        state.max_xp()
    )
}

pub fn nav_bar(current: Page, state: &GameState, wallet: &MockWallet) -> String {
    let tabs: Vec<String> = Page::ALL
        .iter()
        .map(|p| {
            if *p == current {
                format!("[{}]", p.slug())
            } else {
                p.slug().to_string()
            }
        })
        .collect();
    let wallet_label = match wallet.address() {
        Some(addr) => format!("◎ {:.2} {}", wallet.balance(), short_address(addr)),
        None => "wallet: disconnected".to_string(),
    };
    format!("{} | {} | {}\n", tabs.join(" "), level_bar(state), wallet_label)
}

pub fn home(app: &AppConfig, wallet: &MockWallet) -> String {
    let mut out = format!("=== {} ===\n", app.name);
    if !app.greeting.is_empty() {
        out.push_str(&app.greeting);
        out.push('\n');
    }
    out.push_str("⚔️  Epic Quests - daily challenges, volume milestones\n");
    out.push_str("🏆 Guild Wars - team trading, guild rewards\n");
    out.push_str("🔮 Price Oracle - prediction games, win streaks\n");
    if !wallet.is_connected() {
        out.push_str("Ready to start trading? Type 'connect'.\n");
    }
    out
}

pub fn swap(form: &SwapForm, wallet: &MockWallet) -> String {
    if !wallet.is_connected() {
        return "=== Wallet Required ===\nPlease connect your wallet to access the swap interface ('connect').\n"
            .to_string();
    }
    let from_usd = parse_amount(&form.from_amount)
        .map(|a| usd_value(a, &form.from))
        .unwrap_or(0.0);
    let to_usd = form
        .to_amount()
        .map(|a| usd_value(a, &form.to))
        .unwrap_or(0.0);
    let mut out = String::from("=== SWAP ===\n");
    out.push_str(&format!(
        "From: {} {} {} (${:.2})  Balance: {:.4} SOL\n",
        form.from.icon,
        if form.from_amount.is_empty() { "0.00" } else { form.from_amount.as_str() },
        form.from.symbol,
        from_usd,
        wallet.balance()
    ));
    let to_text = form.to_amount_text();
    out.push_str(&format!(
        "To:   {} {} {} (${:.2})\n",
        form.to.icon,
        if to_text.is_empty() { "0.00" } else { to_text.as_str() },
        form.to.symbol,
        to_usd
    ));
    out.push_str(&format!(
        "Slippage: {}% (options: {})\n",
        form.slippage,
        SLIPPAGE_OPTIONS.join(", ")
    ));
    out.push_str(&format_price_list());
    out.push_str("🎁 Loot box available: type 'loot'\n");
    out
}

pub fn quests(state: &GameState) -> String {
    let mut out = quest::format_quest_board(state.quests(), &seed::daily_quests());
    let ready = quest::claimable_quests(state.quests());
    if !ready.is_empty() {
        let ids: Vec<&str> = ready.iter().map(|q| q.id.as_str()).collect();
        out.push_str(&format!("Ready to claim: {} ('claim <id>')\n", ids.join(", ")));
    }
    out
}

pub fn guilds(state: &GameState) -> String {
    guild::format_leaderboard(state)
}

pub fn game(board: &PredictionBoard) -> String {
    prediction::format_board(board)
}

pub fn profile(state: &GameState, wallet: &MockWallet) -> String {
    let mut out = String::from("=== PROFILE ===\n");
    if let Some(addr) = wallet.address() {
        out.push_str(&format!("Wallet: {}\n", short_address(addr)));
    }
    out.push_str(&level_bar(state));
    out.push_str(&format!(" ({}%)\n", state.xp_percent()));
    out.push_str(&format!("⚡ Total Swaps: {}\n", state.total_swaps()));
    out.push_str(&format!("💰 Total Volume: ${:.2}\n", state.total_volume()));
    out.push_str(&format!("🏆 Current Level: {}\n", state.level()));
    out.push_str(&format!("⚔️  Guild Rank: #{}\n", guild::PLAYER_RANK));
    out.push_str(&format!("◎ SOL Balance: {:.4} SOL\n", wallet.balance()));
    out.push_str(&format!("🎨 NFTs Earned: {}\n", seed::NFT_COLLECTION.len()));
    if let Some(g) = state.guild() {
        out.push_str(&format!("Guild: {}\n", g));
    }
    out.push_str(&achievement::format_achievements(state.achievements()));
    out.push_str("=== NFT COLLECTION ===\n");
    for nft in seed::NFT_COLLECTION.iter() {
        out.push_str(&format!(
            "{} {} [{}] - {} (earned {})\n",
            nft.icon, nft.name, nft.rarity, nft.description, nft.earned
        ));
    }
    out
}
