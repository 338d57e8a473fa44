//! Interactive terminal front end.
//!
//! - [`commands`] - line parser
//! - [`pages`] - text renderers per page
//! - [`session`] - state plus command dispatch
//!
//! [`run`] drives a [`Session`] from stdin. A delayed action (connect, swap, loot)
//! is awaited alongside input so the player can keep typing; navigating away or
//! pressing Ctrl-C cancels it.

pub mod commands;
pub mod pages;
pub mod session;

pub use commands::{CommandParser, ShellCommand};
pub use pages::Page;
pub use session::{DelayedAction, Outcome, Session};

use anyhow::Result;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::future::Future;
use std::pin::Pin;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::time::{interval, Interval, MissedTickBehavior};

use crate::config::Config;
use crate::game::GameError;

type PendingWait = Pin<Box<dyn Future<Output = Result<(), GameError>> + Send>>;

/// Run the shell until `quit`, end of input, or Ctrl-C with nothing pending.
pub async fn run(config: Config) -> Result<()> {
    let mut ticker = config.delays.prediction_tick().map(|period| {
        let mut t = interval(period);
        t.set_missed_tick_behavior(MissedTickBehavior::Delay);
        t
    });
    let mut session = Session::new(config);
    let mut rng = StdRng::from_entropy();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut out = tokio::io::stdout();
    let mut pending: Option<(DelayedAction, PendingWait)> = None;

    info!("Session started on page '{}'", session.page().slug());
    write_out(&mut out, &session.render()).await?;
    write_out(&mut out, "Type 'help' for commands.\n> ").await?;

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    debug!("stdin closed");
                    break;
                };
                match session.handle_line(&line) {
                    Outcome::Reply(text) => write_out(&mut out, &text).await?,
                    Outcome::Start { message, action, wait, handle } => {
                        write_out(&mut out, &message).await?;
                        pending = Some((action, Box::pin(handle.delay(wait))));
                    }
                    Outcome::Quit => break,
                }
                write_out(&mut out, "> ").await?;
            }
            result = wait_pending(&mut pending) => {
                if let Some((action, _)) = pending.take() {
                    let text = session.finish(action, result, &mut rng);
                    write_out(&mut out, &format!("\n{}> ", text)).await?;
                }
            }
            _ = next_tick(&mut ticker) => {
                session.tick(&mut rng);
            }
            signal = tokio::signal::ctrl_c() => {
                signal?;
                if pending.is_some() {
                    session.dismiss_view();
                } else {
                    break;
                }
            }
        }
    }

    info!(
        "Session ended at level {} with {} XP",
        session.state().level(),
        session.state().xp()
    );
    write_out(&mut out, "Bye.\n").await?;
    Ok(())
}

async fn write_out(out: &mut tokio::io::Stdout, text: &str) -> Result<()> {
    out.write_all(text.as_bytes()).await?;
    out.flush().await?;
    Ok(())
}

async fn wait_pending(pending: &mut Option<(DelayedAction, PendingWait)>) -> Result<(), GameError> {
    match pending {
        Some((_, wait)) => wait.as_mut().await,
        None => std::future::pending().await,
    }
}

async fn next_tick(ticker: &mut Option<Interval>) {
    match ticker {
        Some(t) => {
            t.tick().await;
        }
        None => std::future::pending::<()>().await,
    }
}
