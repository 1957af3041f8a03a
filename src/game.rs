//! Match lifecycle: turn order, game over detection and AI turns
//!
//! [`TurnController`] owns the live board for one match. Input shells feed
//! it [`Command`]s; in human-vs-AI mode the shell calls
//! [`TurnController::play_ai_turn`] every time it polls, and the controller
//! decides whether the AI is due.

use tracing::{debug, info};

use crate::board::{Board, Mark, Pos};
use crate::command::Command;
use crate::config::{AiConfig, Difficulty, GameMode};
use crate::engine::{AIEngine, MoveResult};
use crate::error::GameError;
use crate::rules::{find_winning_line, Outcome};

/// Lifecycle state of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStatus {
    InProgress,
    Over,
}

/// Main match state
pub struct TurnController {
    board: Board,
    current_turn: Mark,
    status: MatchStatus,
    mode: GameMode,
    engine: AIEngine,
    last_move: Option<Pos>,
    move_history: Vec<(Pos, Mark)>,
    last_ai_result: Option<MoveResult>,
}

impl TurnController {
    pub fn new(mode: GameMode, config: AiConfig) -> Self {
        Self {
            board: Board::new(),
            current_turn: Mark::Cross,
            status: MatchStatus::InProgress,
            mode,
            engine: AIEngine::new(config),
            last_move: None,
            move_history: Vec::with_capacity(9),
            last_ai_result: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Mark {
        self.current_turn
    }

    pub fn status(&self) -> MatchStatus {
        self.status
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn ai_config(&self) -> &AiConfig {
        self.engine.config()
    }

    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    pub fn move_history(&self) -> &[(Pos, Mark)] {
        &self.move_history
    }

    pub fn last_ai_result(&self) -> Option<&MoveResult> {
        self.last_ai_result.as_ref()
    }

    /// True once a line is complete or the board is full
    pub fn is_over(&self) -> bool {
        self.status == MatchStatus::Over
    }

    pub fn outcome(&self) -> Outcome {
        self.board.outcome()
    }

    /// Completed line, for highlighting
    pub fn winning_line(&self) -> Option<[Pos; 3]> {
        find_winning_line(&self.board)
    }

    /// Mark (row, col) for the player to move and pass the turn.
    ///
    /// Rejected without any state change when the match is over, the cell is
    /// off the board or already taken.
    pub fn apply_move(&mut self, row: i32, col: i32) -> Result<Outcome, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        let pos = Pos::try_new(row, col).ok_or(GameError::OutOfBounds { row, col })?;

        let color = self.current_turn;
        self.board.mark(pos, color)?;

        self.move_history.push((pos, color));
        self.last_move = Some(pos);
        self.current_turn = color.opponent();
        debug!(?color, %pos, "move applied");

        let outcome = self.board.outcome();
        if outcome.is_over() {
            self.status = MatchStatus::Over;
            info!(?outcome, moves = self.move_history.len(), "match over");
        }
        Ok(outcome)
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        self.mode == GameMode::PvE
            && !self.is_over()
            && self.current_turn == self.engine.config().player
    }

    /// Let the AI move if it is due. Returns the decision it made.
    pub fn play_ai_turn(&mut self) -> Result<Option<MoveResult>, GameError> {
        if !self.is_ai_turn() {
            return Ok(None);
        }

        let result = self.engine.evaluate(&self.board)?;
        self.apply_move(result.best_move.row as i32, result.best_move.col as i32)?;
        self.last_ai_result = Some(result);
        Ok(Some(result))
    }

    /// Start a new match. Mode and AI configuration are kept.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.current_turn = Mark::Cross;
        self.status = MatchStatus::InProgress;
        self.last_move = None;
        self.move_history.clear();
        self.last_ai_result = None;
        debug!("match reset");
    }

    /// Start a new match with a fresh AI configuration
    pub fn reset_with_config(&mut self, config: AiConfig) {
        self.engine = AIEngine::new(config);
        self.reset();
    }

    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        info!(mode = ?self.mode, "game mode changed");
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.engine.set_difficulty(difficulty);
        info!(?difficulty, "AI difficulty changed");
    }

    pub fn set_ai_player(&mut self, player: Mark) -> Result<(), GameError> {
        self.engine.set_player(player)?;
        info!(?player, "AI player changed");
        Ok(())
    }

    /// Apply a command from an input shell
    pub fn dispatch(&mut self, command: Command) -> Result<(), GameError> {
        match command {
            Command::Place { row, col } => self.apply_move(row, col).map(|_| ()),
            Command::Reset => {
                self.reset();
                Ok(())
            }
            Command::ToggleMode => {
                self.toggle_mode();
                Ok(())
            }
            Command::SetDifficulty(difficulty) => {
                self.set_difficulty(difficulty);
                Ok(())
            }
            Command::SetAiPlayer(player) => self.set_ai_player(player),
        }
    }
}

impl Default for TurnController {
    fn default() -> Self {
        Self::new(GameMode::default(), AiConfig::default())
    }
}
