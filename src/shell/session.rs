//! One interactive session: the player's state plus the views they are looking at.
//!
//! Commands that only read or flip local state reply immediately. Commands that
//! simulate a network wait (connect, submit, loot) return [`Outcome::Start`] with a
//! [`ScopeHandle`] tied to the current page; the run loop waits on it and hands the
//! result back to [`Session::finish`]. Navigating away dismisses the page's scope,
//! so an abandoned wait finishes as cancelled and changes nothing.

use log::{debug, info, warn};
use rand::Rng;
use std::time::Duration;

use crate::config::Config;
use crate::game::{lootbox, GameError, GameState, PredictionBoard};
use crate::logutil::escape_log;
use crate::market::{MockWallet, PendingSwap, SwapForm};
use crate::shell::commands::{CommandParser, ShellCommand};
use crate::shell::pages::{self, Page};
use crate::tasks::{ScopeHandle, ViewScope};

/// An interaction waiting on a simulated delay.
#[derive(Debug, Clone, PartialEq)]
pub enum DelayedAction {
    ConnectWallet,
    Swap(PendingSwap),
    OpenLootBox,
}

impl DelayedAction {
    pub fn label(&self) -> &'static str {
        match self {
            DelayedAction::ConnectWallet => "wallet connection",
            DelayedAction::Swap(_) => "swap",
            DelayedAction::OpenLootBox => "loot box",
        }
    }
}

#[derive(Debug)]
pub enum Outcome {
    Reply(String),
    Start {
        message: String,
        action: DelayedAction,
        wait: Duration,
        handle: ScopeHandle,
    },
    Quit,
}

pub struct Session {
    config: Config,
    state: GameState,
    wallet: MockWallet,
    form: SwapForm,
    board: PredictionBoard,
    page: Page,
    view: ViewScope,
    parser: CommandParser,
    in_flight: bool,
}

impl Session {
    pub fn new(config: Config) -> Self {
        let state = GameState::new(&config.progression);
        let form = SwapForm::new(&config.swap.default_slippage);
        Self {
            config,
            state,
            wallet: MockWallet::new(),
            form,
            board: PredictionBoard::seeded(),
            page: Page::Home,
            view: ViewScope::open(Page::Home.slug()),
            parser: CommandParser::new(),
            in_flight: false,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn wallet(&self) -> &MockWallet {
        &self.wallet
    }

    pub fn form(&self) -> &SwapForm {
        &self.form
    }

    pub fn board(&self) -> &PredictionBoard {
        &self.board
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight
    }

    /// Switch pages. The old page's scope is dismissed, cancelling its pending waits.
    pub fn navigate(&mut self, page: Page) {
        debug!("navigate {} -> {}", self.page.slug(), page.slug());
        self.view.dismiss();
        self.view = ViewScope::open(page.slug());
        self.page = page;
    }

    /// Abandon whatever the current view is waiting on, keeping the same page open.
    pub fn dismiss_view(&mut self) {
        self.view.dismiss();
        self.view = ViewScope::open(self.page.slug());
    }

    pub fn render(&self) -> String {
        let body = match self.page {
            Page::Home => pages::home(&self.config.app, &self.wallet),
            Page::Swap => pages::swap(&self.form, &self.wallet),
            Page::Quests => pages::quests(&self.state),
            Page::Guilds => pages::guilds(&self.state),
            Page::Game => pages::game(&self.board),
            Page::Profile => pages::profile(&self.state, &self.wallet),
        };
        format!("{}{}", pages::nav_bar(self.page, &self.state, &self.wallet), body)
    }

    pub fn handle_line(&mut self, line: &str) -> Outcome {
        let cmd = self.parser.parse(line);
        debug!("command {:?} from '{}'", cmd, escape_log(line));
        self.execute(cmd)
    }

    pub fn execute(&mut self, cmd: ShellCommand) -> Outcome {
        match self.try_execute(cmd) {
            Ok(outcome) => outcome,
            Err(e) => Outcome::Reply(format!("⚠ {}\n", e)),
        }
    }

    fn try_execute(&mut self, cmd: ShellCommand) -> Result<Outcome, GameError> {
        let reply = match cmd {
            ShellCommand::Empty => String::new(),
            ShellCommand::Help => help_text(),
            ShellCommand::Quit => return Ok(Outcome::Quit),
            ShellCommand::Go(page) => {
                self.navigate(page);
                self.render()
            }
            ShellCommand::Status => self.render(),
            ShellCommand::Connect => {
                if self.wallet.is_connected() {
                    "Wallet already connected.\n".to_string()
                } else {
                    let wait = self.config.delays.wallet_connect();
                    return self.start(
                        DelayedAction::ConnectWallet,
                        wait,
                        "Connecting wallet...\n".to_string(),
                    );
                }
            }
            ShellCommand::Disconnect => {
                // Pending connect/swap/loot belong to the old wallet
                if self.in_flight {
                    self.dismiss_view();
                }
                self.wallet.disconnect();
                "Wallet disconnected.\n".to_string()
            }
            ShellCommand::From(sym) => {
                self.form.set_from(&sym)?;
                self.swap_page_reply()
            }
            ShellCommand::To(sym) => {
                self.form.set_to(&sym)?;
                self.swap_page_reply()
            }
            ShellCommand::Amount(text) => {
                self.form.set_amount(&text);
                self.swap_page_reply()
            }
            ShellCommand::Flip => {
                self.form.switch_tokens();
                self.swap_page_reply()
            }
            ShellCommand::Slippage(pct) => {
                self.form.set_slippage(&pct)?;
                format!("Slippage set to {}%.\n", self.form.slippage)
            }
            ShellCommand::Submit => {
                self.require_page(Page::Swap)?;
                let pending = self.form.prepare(&self.wallet)?;
                let message = format!(
                    "Swapping {} {} for ~{:.6} {}...\n",
                    pending.amount, pending.from.symbol, pending.output, pending.to.symbol
                );
                let wait = self.config.delays.swap_submit();
                return self.start(DelayedAction::Swap(pending), wait, message);
            }
            ShellCommand::Loot => {
                self.require_page(Page::Swap)?;
                if !self.wallet.is_connected() {
                    return Err(GameError::WalletNotConnected);
                }
                let wait = self.config.delays.lootbox_open();
                return self.start(DelayedAction::OpenLootBox, wait, "🎁 Opening...\n".to_string());
            }
            ShellCommand::Claim(id) => match self.state.claim_quest_reward(&id) {
                Some(claim) => {
                    let mut msg = format!(
                        "Quest completed! +{} XP earned! ({})\n",
                        claim.xp_reward, claim.title
                    );
                    if claim.xp.levels_gained > 0 {
                        msg.push_str(&format!("⬆ Level up! Now level {}.\n", claim.xp.level));
                    }
                    msg
                }
                None => format!("No claimable quest '{}'.\n", id),
            },
            ShellCommand::Predict(idx, dir) => {
                let round = self.board.predict(idx, dir)?;
                info!("Prediction {} on {}", dir, round.token);
                format!("Prediction made: {} {}\n", dir.icon(), round.token)
            }
            ShellCommand::Unknown(word) => format!("Unknown command '{}'. Type 'help'.\n", word),
            ShellCommand::Invalid(msg) => format!("⚠ {}\n", msg),
        };
        Ok(Outcome::Reply(reply))
    }

    fn require_page(&self, page: Page) -> Result<(), GameError> {
        if self.page == page {
            Ok(())
        } else {
            Err(GameError::WrongPage(page.slug()))
        }
    }

    fn swap_page_reply(&self) -> String {
        if self.page == Page::Swap {
            self.render()
        } else {
            format!(
                "Form: {} {} -> {} {}\n",
                self.form.from_amount,
                self.form.from.symbol,
                self.form.to_amount_text(),
                self.form.to.symbol
            )
        }
    }

    fn start(
        &mut self,
        action: DelayedAction,
        wait: Duration,
        message: String,
    ) -> Result<Outcome, GameError> {
        if self.in_flight {
            return Err(GameError::Busy("another action is still in progress"));
        }
        self.in_flight = true;
        debug!("starting {} ({:?})", action.label(), wait);
        Ok(Outcome::Start {
            message,
            action,
            wait,
            handle: self.view.handle(),
        })
    }

    /// Apply a delayed action once its wait has resolved. Cancelled waits apply nothing.
    pub fn finish<R: Rng + ?Sized>(
        &mut self,
        action: DelayedAction,
        result: Result<(), GameError>,
        rng: &mut R,
    ) -> String {
        self.in_flight = false;
        if let Err(e) = result {
            warn!("{} abandoned: {}", action.label(), e);
            return format!("✖ {} cancelled.\n", action.label());
        }
        let needs_wallet = !matches!(action, DelayedAction::ConnectWallet);
        if needs_wallet && !self.wallet.is_connected() {
            warn!("{} dropped: {}", action.label(), GameError::WalletNotConnected);
            return format!("✖ {} cancelled: wallet not connected.\n", action.label());
        }
        match action {
            DelayedAction::ConnectWallet => {
                let info = self.wallet.complete_connect();
                format!("Connected. Balance: {:.4} SOL\n", info.balance)
            }
            DelayedAction::Swap(pending) => {
                let receipt = pending.settle(&mut self.state, &mut self.form, self.config.swap.xp_rate);
                let mut msg = receipt.summary();
                msg.push('\n');
                if receipt.xp.levels_gained > 0 {
                    msg.push_str(&format!("⬆ Level up! Now level {}.\n", receipt.xp.level));
                }
                msg
            }
            DelayedAction::OpenLootBox => {
                let items = lootbox::roll(rng);
                let outcomes = lootbox::apply_rewards(&mut self.state, &items);
                let mut msg = lootbox::format_rewards(&items);
                if let Some(last) = outcomes.iter().rev().find(|o| o.levels_gained > 0) {
                    msg.push_str(&format!("⬆ Level up! Now level {}.\n", last.level));
                }
                msg
            }
        }
    }

    /// Advance prediction countdowns by one tick.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.board.tick(rng);
    }
}

pub fn help_text() -> String {
    let mut out = String::from("Pages: ");
    let names: Vec<&str> = Page::ALL.iter().map(|p| p.slug()).collect();
    out.push_str(&names.join(", "));
    out.push('\n');
    out.push_str(
        "Wallet: connect, disconnect\n\
         Swap: from <SYM>, to <SYM>, amount <A>, flip, slippage <p>, submit, loot\n\
         Quests: claim <id>\n\
         Game: predict <#> up|down\n\
         Other: status, help, quit (Ctrl-C cancels a pending action)\n",
    );
    out
}
