//! Swap form with simulated quote math.
//!
//! Quotes are a straight price ratio: `out = amount * from.price / to.price`.
//! There is no fee, slippage or liquidity modelling; the slippage setting is kept
//! for display only. Submitting is split in two so the caller can wait in between:
//! [`SwapForm::prepare`] validates and snapshots the order, then after the simulated
//! network delay [`PendingSwap::settle`] grants xp, bumps the swap counter and
//! resets the form. A cancelled wait simply drops the `PendingSwap`.

use log::{debug, info};
use std::time::Duration;

use crate::game::{GameError, GameState, XpOutcome};
use crate::logutil::escape_log;
use crate::market::token::{self, Token};
use crate::market::wallet::MockWallet;
use crate::tasks::ViewScope;

pub const SLIPPAGE_OPTIONS: [&str; 4] = ["0.1", "0.5", "1.0", "3.0"];

/// Linear price conversion between two tokens.
pub fn quote(amount: f64, from: &Token, to: &Token) -> f64 {
    amount * from.price / to.price
}

/// USD value of `amount` units of `token`.
pub fn usd_value(amount: f64, token: &Token) -> f64 {
    amount * token.price
}

/// Parse a typed amount. Empty, non-numeric, non-finite and non-positive inputs are rejected.
pub fn parse_amount(text: &str) -> Result<f64, GameError> {
    let trimmed = text.trim();
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => Ok(v),
        _ => Err(GameError::InvalidAmount(trimmed.to_string())),
    }
}

/// Experience for a swap: `floor(amount * from.price * rate)`.
pub fn xp_for_swap(amount: f64, from: &Token, xp_rate: f64) -> i64 {
    (usd_value(amount, from) * xp_rate).floor() as i64
}

#[derive(Debug, Clone, PartialEq)]
pub struct SwapForm {
    pub from: Token,
    pub to: Token,
    pub from_amount: String,
    pub slippage: String,
}

impl SwapForm {
    pub fn new(default_slippage: &str) -> Self {
        let slippage = if SLIPPAGE_OPTIONS.contains(&default_slippage) {
            default_slippage
        } else {
            "0.5"
        };
        Self {
            from: token::CATALOG[0],
            to: token::CATALOG[1],
            from_amount: String::new(),
            slippage: slippage.to_string(),
        }
    }

    pub fn set_from(&mut self, symbol: &str) -> Result<(), GameError> {
        self.from = token::find(symbol)?;
        Ok(())
    }

    pub fn set_to(&mut self, symbol: &str) -> Result<(), GameError> {
        self.to = token::find(symbol)?;
        Ok(())
    }

    pub fn set_amount(&mut self, text: &str) {
        self.from_amount = text.trim().to_string();
    }

    pub fn set_slippage(&mut self, pct: &str) -> Result<(), GameError> {
        let pct = pct.trim().trim_end_matches('%');
        match SLIPPAGE_OPTIONS.iter().find(|o| **o == pct) {
            Some(o) => {
                self.slippage = o.to_string();
                Ok(())
            }
            None => Err(GameError::InvalidSlippage(pct.to_string())),
        }
    }

    /// Estimated output, or `None` while the amount field does not parse.
    pub fn to_amount(&self) -> Option<f64> {
        parse_amount(&self.from_amount)
            .ok()
            .map(|amount| quote(amount, &self.from, &self.to))
    }

    /// Output amount as shown in the read-only field (six decimals).
    pub fn to_amount_text(&self) -> String {
        self.to_amount()
            .map(|v| format!("{:.6}", v))
            .unwrap_or_default()
    }

    /// Swap direction: tokens trade places and the estimated output becomes the input.
    pub fn switch_tokens(&mut self) {
        let estimated = self.to_amount_text();
        std::mem::swap(&mut self.from, &mut self.to);
        self.from_amount = estimated;
    }

    pub fn reset(&mut self) {
        self.from_amount.clear();
    }

    /// Validate the form and snapshot the order for submission.
    pub fn prepare(&self, wallet: &MockWallet) -> Result<PendingSwap, GameError> {
        if !wallet.is_connected() {
            return Err(GameError::WalletNotConnected);
        }
        let amount = parse_amount(&self.from_amount)?;
        if self.from.symbol == self.to.symbol {
            return Err(GameError::SameToken);
        }
        let output = quote(amount, &self.from, &self.to);
        debug!(
            "prepared swap {} {} -> {:.6} {}",
            escape_log(&self.from_amount),
            self.from.symbol,
            output,
            self.to.symbol
        );
        Ok(PendingSwap {
            from: self.from,
            to: self.to,
            amount,
            output,
        })
    }
}

/// A validated order awaiting its simulated confirmation.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingSwap {
    pub from: Token,
    pub to: Token,
    pub amount: f64,
    pub output: f64,
}

impl PendingSwap {
    /// Apply the confirmed swap: xp, swap counter, and form reset.
    pub fn settle(self, state: &mut GameState, form: &mut SwapForm, xp_rate: f64) -> SwapReceipt {
        let xp_gained = xp_for_swap(self.amount, &self.from, xp_rate);
        let xp = state.add_xp(xp_gained);
        state.increment_swaps();
        form.reset();
        info!(
            "Swapped {} {} for {:.6} {} (+{} xp)",
            self.amount, self.from.symbol, self.output, self.to.symbol, xp_gained
        );
        SwapReceipt {
            swap: self,
            xp_gained,
            xp,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SwapReceipt {
    pub swap: PendingSwap,
    pub xp_gained: i64,
    pub xp: XpOutcome,
}

impl SwapReceipt {
    pub fn summary(&self) -> String {
        format!(
            "Successfully swapped {} {} for {:.6} {}! +{} XP earned!",
            self.swap.amount, self.swap.from.symbol, self.swap.output, self.swap.to.symbol, self.xp_gained
        )
    }
}

/// Validate, wait inside `scope`, then settle. Nothing is applied if the scope is dismissed.
pub async fn submit_swap(
    state: &mut GameState,
    form: &mut SwapForm,
    wallet: &MockWallet,
    scope: &ViewScope,
    delay: Duration,
    xp_rate: f64,
) -> Result<SwapReceipt, GameError> {
    let pending = form.prepare(wallet)?;
    scope.delay(delay).await?;
    Ok(pending.settle(state, form, xp_rate))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_is_linear_price_ratio() {
        let sol = token::find("SOL").unwrap();
        let usdc = token::find("USDC").unwrap();
        let jup = token::find("JUP").unwrap();
        assert!((quote(1.5, &sol, &usdc) - 147.675).abs() < 1e-9);
        assert!((quote(100.0, &usdc, &jup) - 114.942528).abs() < 1e-6);
    }

    #[test]
    fn parse_amount_rejects_bad_input() {
        assert_eq!(parse_amount("1.25"), Ok(1.25));
        for bad in ["", "   ", "abc", "0", "-3", "NaN", "inf"] {
            assert!(parse_amount(bad).is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn xp_rounds_down() {
        let sol = token::find("SOL").unwrap();
        assert_eq!(xp_for_swap(1.0, &sol, 0.1), 9);
        assert_eq!(xp_for_swap(10.0, &sol, 0.1), 98);
    }

    #[test]
    fn form_quotes_to_six_decimals() {
        let mut form = SwapForm::new("0.5");
        assert_eq!(form.to_amount_text(), "");
        form.set_amount("2");
        assert_eq!(form.to_amount_text(), "196.900000");
    }

    #[test]
    fn switch_moves_estimate_into_input() {
        let mut form = SwapForm::new("0.5");
        form.set_amount("1");
        form.switch_tokens();
        assert_eq!(form.from.symbol, "USDC");
        assert_eq!(form.to.symbol, "SOL");
        assert_eq!(form.from_amount, "98.450000");
    }

    #[test]
    fn slippage_accepts_known_options_only() {
        let mut form = SwapForm::new("9.9");
        assert_eq!(form.slippage, "0.5");
        form.set_slippage("1.0%").unwrap();
        assert_eq!(form.slippage, "1.0");
        assert_eq!(
            form.set_slippage("2"),
            Err(GameError::InvalidSlippage("2".into()))
        );
        assert_eq!(form.slippage, "1.0");
    }

    #[test]
    fn prepare_requires_wallet_and_amount() {
        let mut form = SwapForm::new("0.5");
        let mut wallet = MockWallet::new();
        form.set_amount("1");
        assert_eq!(form.prepare(&wallet), Err(GameError::WalletNotConnected));
        wallet.complete_connect();
        form.set_amount("");
        assert!(matches!(form.prepare(&wallet), Err(GameError::InvalidAmount(_))));
        form.set_amount("1");
        form.set_to("SOL").unwrap();
        assert_eq!(form.prepare(&wallet), Err(GameError::SameToken));
    }

    #[test]
    fn settle_grants_xp_and_counts_swap() {
        let mut state = GameState::seeded();
        let mut form = SwapForm::new("0.5");
        let mut wallet = MockWallet::new();
        wallet.complete_connect();
        form.set_amount("10");
        let receipt = form.prepare(&wallet).unwrap().settle(&mut state, &mut form, 0.1);
        assert_eq!(receipt.xp_gained, 98);
        assert_eq!(state.xp(), 248);
        assert_eq!(state.total_swaps(), 8);
        assert!(form.from_amount.is_empty());
        assert!(receipt.summary().contains("+98 XP"));
    }
}
