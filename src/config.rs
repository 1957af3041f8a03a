//! AI and match configuration

use crate::board::Mark;

/// Strength of the automated opponent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Difficulty {
    /// Uniformly random legal move
    Random,
    /// Exhaustive minimax
    #[default]
    Optimal,
}

/// Who plays whom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum GameMode {
    /// Human vs AI
    #[default]
    #[value(name = "pve")]
    PvE,
    /// Two humans (hotseat)
    #[value(name = "pvp")]
    PvP,
}

impl GameMode {
    pub fn toggled(self) -> Self {
        match self {
            GameMode::PvE => GameMode::PvP,
            GameMode::PvP => GameMode::PvE,
        }
    }
}

/// Configuration of the automated side for one match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AiConfig {
    pub difficulty: Difficulty,
    /// Mark the AI plays; never `Mark::Empty`
    pub player: Mark,
    /// Fixed seed for the random strategy, entropy when `None`
    pub seed: Option<u64>,
}

impl AiConfig {
    pub fn new(difficulty: Difficulty, player: Mark) -> Self {
        Self {
            difficulty,
            player,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self::new(Difficulty::Optimal, Mark::Circle)
    }
}
