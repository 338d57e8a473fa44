//! Simulated market side: token catalog, swap form with quote math, mocked wallet.
//!
//! Nothing here talks to a chain or price feed. Prices are constants and every
//! "network" step is a cancellable delay from [`crate::tasks`].

pub mod swap;
pub mod token;
pub mod wallet;

pub use swap::{parse_amount, quote, submit_swap, PendingSwap, SwapForm, SwapReceipt};
pub use token::{Token, CATALOG};
pub use wallet::{MockWallet, WalletInfo};
