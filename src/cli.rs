//! Command-line options shared by the window and terminal front ends

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use crate::board::Mark;
use crate::config::{AiConfig, Difficulty, GameMode};

/// Mark the AI plays, as accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Side {
    Cross,
    Circle,
}

impl From<Side> for Mark {
    fn from(side: Side) -> Self {
        match side {
            Side::Cross => Mark::Cross,
            Side::Circle => Mark::Circle,
        }
    }
}

/// Tic-tac-toe against a minimax opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe against a minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// AI strength
    #[arg(short, long, value_enum, default_value_t = Difficulty::Optimal)]
    pub difficulty: Difficulty,

    /// Mark the AI plays
    #[arg(long, value_enum, default_value_t = Side::Circle)]
    pub ai_player: Side,

    /// Human vs AI or two humans
    #[arg(short, long, value_enum, default_value_t = GameMode::PvE)]
    pub mode: GameMode,

    /// Seed for the random AI
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Cli {
    pub fn ai_config(&self) -> AiConfig {
        AiConfig {
            difficulty: self.difficulty,
            player: self.ai_player.into(),
            seed: self.seed,
        }
    }

    /// Install the global tracing subscriber
    pub fn init_tracing(&self) {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new(&self.log_level)),
            )
            .with_writer(std::io::stderr)
            .try_init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["tictactoe"]);
        assert_eq!(cli.ai_config(), AiConfig::default());
        assert_eq!(cli.mode, GameMode::PvE);
        assert_eq!(cli.log_level, "info");
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::parse_from([
            "tictactoe",
            "--difficulty",
            "random",
            "--ai-player",
            "cross",
            "--mode",
            "pvp",
            "--seed",
            "3",
        ]);
        let config = cli.ai_config();
        assert_eq!(config.difficulty, Difficulty::Random);
        assert_eq!(config.player, Mark::Cross);
        assert_eq!(config.seed, Some(3));
        assert_eq!(cli.mode, GameMode::PvP);
    }

    #[test]
    fn test_rejects_unknown_difficulty() {
        assert!(Cli::try_parse_from(["tictactoe", "--difficulty", "hard"]).is_err());
    }
}
