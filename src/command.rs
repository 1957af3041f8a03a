//! Commands produced by the input shells

use std::str::FromStr;

use crate::board::Mark;
use crate::config::Difficulty;
use crate::error::GameError;

/// One user action, independent of the device that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Place { row: i32, col: i32 },
    Reset,
    ToggleMode,
    SetDifficulty(Difficulty),
    SetAiPlayer(Mark),
}

impl FromStr for Command {
    type Err = GameError;

    /// Terminal syntax: `r c`, `place r c`, `r`/`reset`, `g`/`mode`,
    /// `0`/`1` for the difficulty and `ai x|o`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || GameError::InvalidCommand(s.trim().to_string());
        let words: Vec<String> = s.split_whitespace().map(str::to_lowercase).collect();
        let words: Vec<&str> = words.iter().map(String::as_str).collect();

        match words.as_slice() {
            ["r"] | ["reset"] => Ok(Command::Reset),
            ["g"] | ["mode"] => Ok(Command::ToggleMode),
            ["0"] => Ok(Command::SetDifficulty(Difficulty::Random)),
            ["1"] => Ok(Command::SetDifficulty(Difficulty::Optimal)),
            ["ai", "x"] => Ok(Command::SetAiPlayer(Mark::Cross)),
            ["ai", "o"] => Ok(Command::SetAiPlayer(Mark::Circle)),
            ["place", row, col] | [row, col] => {
                let row: i32 = row.parse().map_err(|_| invalid())?;
                let col: i32 = col.parse().map_err(|_| invalid())?;
                Ok(Command::Place { row, col })
            }
            _ => Err(invalid()),
        }
    }
}
