//! Price-prediction mini-game: countdown rounds with a simulated price walk.
//!
//! Each round counts down once per tick; the shell drives ticks from a tokio
//! interval (`prediction_tick_ms`). Players pick up or down once per open round.
//! Rounds are never settled, so no xp is awarded here.

use rand::Rng;
use std::fmt;

use crate::game::errors::GameError;

/// Maximum absolute price move per tick.
pub const PRICE_JITTER: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "up" | "u" | "higher" => Some(Direction::Up),
            "down" | "d" | "lower" => Some(Direction::Down),
            _ => None,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Direction::Up => "📈",
            Direction::Down => "📉",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Up => "up",
            Direction::Down => "down",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PredictionRound {
    pub token: &'static str,
    pub current_price: f64,
    pub target_time: u32,
    pub time_left: u32,
    pub prediction: Option<Direction>,
    pub reward: i64,
    pub difficulty: Difficulty,
}

impl PredictionRound {
    pub fn new(token: &'static str, price: f64, seconds: u32, reward: i64, difficulty: Difficulty) -> Self {
        Self {
            token,
            current_price: price,
            target_time: seconds,
            time_left: seconds,
            prediction: None,
            reward,
            difficulty,
        }
    }

    pub fn is_open(&self) -> bool {
        self.time_left > 0
    }

    /// Fraction of the countdown already elapsed, in percent.
    pub fn elapsed_percent(&self) -> u32 {
        if self.target_time == 0 {
            return 100;
        }
        let elapsed = self.target_time - self.time_left.min(self.target_time);
        ((elapsed as f64 / self.target_time as f64) * 100.0).round() as u32
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PastPrediction {
    pub token: &'static str,
    pub prediction: Direction,
    pub actual: Direction,
    pub reward: i64,
    pub when: &'static str,
}

impl PastPrediction {
    pub fn correct(&self) -> bool {
        self.prediction == self.actual
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PredictionStats {
    pub win_streak: u32,
    pub total: u32,
    pub correct: u32,
}

impl PredictionStats {
    pub fn accuracy_percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        ((self.correct as f64 / self.total as f64) * 100.0).round() as u32
    }
}

#[derive(Debug, Clone)]
pub struct PredictionBoard {
    rounds: Vec<PredictionRound>,
    stats: PredictionStats,
    history: Vec<PastPrediction>,
}

impl PredictionBoard {
    pub fn seeded() -> Self {
        Self {
            rounds: vec![
                PredictionRound::new("SOL", 98.45, 300, 100, Difficulty::Easy),
                PredictionRound::new("JUP", 0.87, 600, 150, Difficulty::Medium),
                PredictionRound::new("RAY", 2.34, 900, 200, Difficulty::Hard),
            ],
            stats: PredictionStats {
                win_streak: 3,
                total: 12,
                correct: 8,
            },
            history: vec![
                PastPrediction {
                    token: "SOL",
                    prediction: Direction::Up,
                    actual: Direction::Up,
                    reward: 100,
                    when: "2h ago",
                },
                PastPrediction {
                    token: "USDC",
                    prediction: Direction::Down,
                    actual: Direction::Up,
                    reward: 0,
                    when: "4h ago",
                },
                PastPrediction {
                    token: "JUP",
                    prediction: Direction::Up,
                    actual: Direction::Up,
                    reward: 150,
                    when: "6h ago",
                },
                PastPrediction {
                    token: "RAY",
                    prediction: Direction::Down,
                    actual: Direction::Down,
                    reward: 200,
                    when: "8h ago",
                },
            ],
        }
    }

    pub fn rounds(&self) -> &[PredictionRound] {
        &self.rounds
    }

    pub fn stats(&self) -> PredictionStats {
        self.stats
    }

    pub fn history(&self) -> &[PastPrediction] {
        &self.history
    }

    /// Advance every round by one second and jitter its price.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for round in &mut self.rounds {
            round.time_left = round.time_left.saturating_sub(1);
            round.current_price += rng.gen_range(-PRICE_JITTER..PRICE_JITTER);
        }
    }

    /// Lock in a direction for the round at `index` (zero-based).
    pub fn predict(&mut self, index: usize, direction: Direction) -> Result<&PredictionRound, GameError> {
        let round = self
            .rounds
            .get_mut(index)
            .ok_or(GameError::UnknownRound(index + 1))?;
        if !round.is_open() {
            return Err(GameError::RoundClosed(round.token.to_string()));
        }
        if round.prediction.is_some() {
            return Err(GameError::AlreadyPredicted(round.token.to_string()));
        }
        round.prediction = Some(direction);
        Ok(round)
    }
}

impl Default for PredictionBoard {
    fn default() -> Self {
        Self::seeded()
    }
}

/// `m:ss` countdown label.
pub fn format_time(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

pub fn format_board(board: &PredictionBoard) -> String {
    let mut out = String::from("=== 🔮 PRICE ORACLE ===\n");
    for (idx, round) in board.rounds().iter().enumerate() {
        let pick = match round.prediction {
            Some(dir) => format!("{} {}", dir.icon(), dir),
            None if round.is_open() => "predict up|down".to_string(),
            None => "closed".to_string(),
        };
        out.push_str(&format!(
            "{}) {} ${:.4} ⏱ {} [{}] +{} XP - {}\n",
            idx + 1,
            round.token,
            round.current_price,
            format_time(round.time_left),
            round.difficulty,
            round.reward,
            pick
        ));
    }
    let stats = board.stats();
    out.push_str(&format!(
        "Streak {} | {}/{} correct ({}%)\n",
        stats.win_streak,
        stats.correct,
        stats.total,
        stats.accuracy_percent()
    ));
    out.push_str("--- Recent ---\n");
    for past in board.history() {
        let verdict = if past.correct() {
            format!("+{} XP", past.reward)
        } else {
            "missed".to_string()
        };
        out.push_str(&format!(
            "{} {} {} ({}) {}\n",
            past.token,
            past.prediction.icon(),
            past.prediction,
            past.when,
            verdict
        ));
    }
    out
}
