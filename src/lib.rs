//! # Swapquest - gamified token swaps in the terminal
//!
//! Swapquest wraps a simulated token-swap form in a small progression game. Every
//! swap earns experience, quests pay out XP rewards, and a few mini-games (loot
//! boxes, price predictions, guild rankings) feed the same level bar.
//!
//! ## Features
//!
//! - **Progression**: level, XP and swap counter with a configurable level-up policy.
//! - **Quests & Achievements**: seeded quest board, daily quests, claimable rewards.
//! - **Mini-Games**: loot boxes and a price prediction board with live countdowns.
//! - **Mock Market**: fixed-price token catalog, quote math, slippage, mocked wallet.
//! - **Cancellable Waits**: simulated network delays are tied to the open page and
//!   are dropped when the player navigates away.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use swapquest::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load("swapquest.toml").await?;
//!     swapquest::shell::run(config).await
//! }
//! ```
//!
//! Using the engine directly:
//!
//! ```rust
//! use swapquest::game::GameState;
//!
//! let mut state = GameState::seeded();
//! state.add_xp(400);
//! assert_eq!((state.level(), state.xp()), (2, 50));
//! ```
//!
//! ## Module Organization
//!
//! - [`game`] - progression engine, quests, achievements, loot box, predictions, guilds
//! - [`market`] - token catalog, swap form, mocked wallet
//! - [`shell`] - interactive pages and command loop
//! - [`tasks`] - view-scoped cancellable delays
//! - [`config`] - TOML configuration
//! - [`logutil`] - log-safe string helpers

pub mod config;
pub mod game;
pub mod logutil;
pub mod market;
pub mod shell;
pub mod tasks;
