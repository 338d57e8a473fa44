use thiserror::Error;

/// Errors surfaced by the game and market layers.
///
/// Engine mutations on [`crate::game::GameState`] never fail; these variants
/// cover the interaction boundaries (swap form, wallet, timers, prediction rounds).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    /// Typed amount is empty, non-numeric, non-finite or not positive.
    #[error("Please enter a valid amount: {0}")]
    InvalidAmount(String),

    /// Slippage is not one of the offered percentages.
    #[error("slippage must be one of 0.1, 0.5, 1.0 or 3.0 percent, got {0}")]
    InvalidSlippage(String),

    /// Symbol not present in the token catalog.
    #[error("unknown token: {0}")]
    UnknownToken(String),

    /// The swap page requires a connected wallet.
    #[error("wallet not connected")]
    WalletNotConnected,

    /// From and to token are identical.
    #[error("cannot swap a token for itself")]
    SameToken,

    /// The view that requested a delayed action was dismissed first.
    #[error("cancelled: view was dismissed")]
    Cancelled,

    /// A prediction was already placed on this round.
    #[error("prediction already made for {0}")]
    AlreadyPredicted(String),

    /// The countdown for this round has reached zero.
    #[error("round closed for {0}")]
    RoundClosed(String),

    /// No round at this index.
    #[error("no prediction round #{0}")]
    UnknownRound(usize),

    /// Action is only available on another page.
    #[error("open the {0} page first")]
    WrongPage(&'static str),

    /// Another interaction of the same kind is still in flight.
    #[error("busy: {0}")]
    Busy(&'static str),
}
