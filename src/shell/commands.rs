//! Shell command parser.
//!
//! Commands are a single keyword plus optional arguments, case-insensitive.
//! Page names double as navigation commands (`swap`, `quests`, ...). The parser
//! never touches session state; [`crate::shell::Session`] interprets the result.
use log::trace;

use crate::game::Direction;
use crate::shell::pages::Page;

#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
    Help,
    Quit,
    Go(Page),
    Status,
    Connect,
    Disconnect,
    From(String),
    To(String),
    Amount(String),
    Flip,
    Slippage(String),
    Submit,
    Loot,
    Claim(String),
    Predict(usize, Direction),
    Empty,
    Unknown(String),
    Invalid(String),
}

pub struct CommandParser;

impl CommandParser {
    pub fn new() -> Self {
        Self
    }

    pub fn parse(&self, raw: &str) -> ShellCommand {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return ShellCommand::Empty;
        }
        let mut parts = trimmed.splitn(2, char::is_whitespace);
        let keyword = parts.next().unwrap_or_default().to_ascii_lowercase();
        let rest = parts.next().map(str::trim).unwrap_or("");
        trace!("parse keyword='{}' rest='{}'", keyword, rest);

        if let Some(page) = Page::from_name(&keyword) {
            return ShellCommand::Go(page);
        }
        match keyword.as_str() {
            "help" | "?" | "h" => ShellCommand::Help,
            "quit" | "exit" | "q" => ShellCommand::Quit,
            "status" | "me" => ShellCommand::Status,
            "connect" => ShellCommand::Connect,
            "disconnect" => ShellCommand::Disconnect,
            "flip" | "switch" => ShellCommand::Flip,
            "submit" | "go" => ShellCommand::Submit,
            "loot" | "open" => ShellCommand::Loot,
            "from" => required(rest, "Token symbol required", ShellCommand::From),
            "to" => required(rest, "Token symbol required", ShellCommand::To),
            "amount" | "amt" => required(rest, "Amount required", ShellCommand::Amount),
            "slippage" => required(rest, "Slippage required", ShellCommand::Slippage),
            "claim" => required(rest, "Quest id required", ShellCommand::Claim),
            "predict" | "p" => parse_predict(rest),
            _ => ShellCommand::Unknown(keyword),
        }
    }
}

impl Default for CommandParser {
    fn default() -> Self {
        Self::new()
    }
}

fn required(rest: &str, msg: &str, build: fn(String) -> ShellCommand) -> ShellCommand {
    if rest.is_empty() {
        ShellCommand::Invalid(msg.to_string())
    } else {
        build(rest.to_string())
    }
}

/// `predict <round#> up|down`, round numbers are 1-based on screen.
fn parse_predict(rest: &str) -> ShellCommand {
    let mut args = rest.split_whitespace();
    let (Some(idx), Some(dir)) = (args.next(), args.next()) else {
        return ShellCommand::Invalid("Usage: predict <round#> up|down".into());
    };
    let Ok(idx) = idx.parse::<usize>() else {
        return ShellCommand::Invalid(format!("Bad round number: {}", idx));
    };
    if idx == 0 {
        return ShellCommand::Invalid("Rounds are numbered from 1".into());
    }
    match Direction::parse(dir) {
        Some(direction) => ShellCommand::Predict(idx - 1, direction),
        None => ShellCommand::Invalid(format!("Direction must be up or down, got {}", dir)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_and_simple_commands() {
        let p = CommandParser::new();
        assert_eq!(p.parse("SWAP"), ShellCommand::Go(Page::Swap));
        assert_eq!(p.parse(" quests "), ShellCommand::Go(Page::Quests));
        assert_eq!(p.parse("help"), ShellCommand::Help);
        assert_eq!(p.parse(""), ShellCommand::Empty);
        assert_eq!(p.parse("dance"), ShellCommand::Unknown("dance".into()));
    }

    #[test]
    fn arguments_are_required() {
        let p = CommandParser::new();
        assert_eq!(p.parse("amount 1.5"), ShellCommand::Amount("1.5".into()));
        assert_eq!(p.parse("from jup"), ShellCommand::From("jup".into()));
        assert!(matches!(p.parse("claim"), ShellCommand::Invalid(_)));
        assert_eq!(p.parse("claim 3"), ShellCommand::Claim("3".into()));
    }

    #[test]
    fn predict_is_one_based() {
        let p = CommandParser::new();
        assert_eq!(p.parse("predict 2 down"), ShellCommand::Predict(1, Direction::Down));
        assert!(matches!(p.parse("predict 0 up"), ShellCommand::Invalid(_)));
        assert!(matches!(p.parse("predict 1 sideways"), ShellCommand::Invalid(_)));
        assert!(matches!(p.parse("predict"), ShellCommand::Invalid(_)));
    }
}
