//! Game state management for the tic-tac-toe GUI

use crate::error::GameError;
use crate::rules::{check_winner, find_winning_line, is_terminal};
use crate::{AIEngine, Board, Mark, MoveResult, Pos};
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::Instant;
use tracing::{debug, info, warn};

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
    },
}

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    Win { winner: Mark, line: [Pos; 3] },
    Draw,
}

impl GameResult {
    /// Banner shown over the board
    pub fn banner(&self) -> String {
        match self {
            GameResult::Win { winner, .. } => format!("{winner} wins!"),
            GameResult::Draw => "Draw!".to_string(),
        }
    }

    fn from_board(board: &Board) -> Option<Self> {
        if !is_terminal(board) {
            return None;
        }
        match (check_winner(board), find_winning_line(board)) {
            (Some(winner), Some(line)) => Some(GameResult::Win { winner, line }),
            _ => Some(GameResult::Draw),
        }
    }
}

/// Main game state: one human against the engine
pub struct GameState {
    pub board: Board,
    pub human: Mark,
    pub game_over: Option<GameResult>,
    pub last_move: Option<Pos>,
    pub move_history: Vec<(Pos, Mark)>,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub message: Option<String>,
}

impl GameState {
    pub fn new(human: Mark) -> Self {
        info!(%human, "New game");
        Self {
            board: Board::new(),
            human,
            game_over: None,
            last_move: None,
            move_history: Vec::new(),
            last_ai_result: None,
            ai_state: AiState::Idle,
            message: None,
        }
    }

    /// Start over with the same sides
    pub fn restart(&mut self) {
        *self = Self::new(self.human);
    }

    /// Restart only once the game is over; a running game is left alone
    pub fn request_restart(&mut self) -> bool {
        if self.game_over.is_none() {
            debug!("Restart ignored, game still running");
            return false;
        }
        self.restart();
        true
    }

    /// Mark played by the engine
    pub fn ai(&self) -> Mark {
        self.human.opponent()
    }

    /// Side to move on the current board
    pub fn current_turn(&self) -> Mark {
        self.board.to_move()
    }

    pub fn is_human_turn(&self) -> bool {
        self.game_over.is_none() && self.current_turn() == self.human
    }

    pub fn is_ai_turn(&self) -> bool {
        self.game_over.is_none() && self.current_turn() == self.ai()
    }

    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Human click on `pos`
    pub fn try_place(&mut self, pos: Pos) -> Result<(), GameError> {
        if self.game_over.is_some() {
            return Err(GameError::GameOver);
        }
        if self.is_ai_thinking() {
            return Err(GameError::AiThinking);
        }
        if !self.is_human_turn() {
            return Err(GameError::NotYourTurn);
        }

        self.execute_move(pos)
    }

    /// Apply a move for whichever side is to move
    fn execute_move(&mut self, pos: Pos) -> Result<(), GameError> {
        let mark = self.current_turn();
        self.board = self.board.result(pos)?;

        info!(%mark, %pos, "Move played");
        self.move_history.push((pos, mark));
        self.last_move = Some(pos);
        self.message = None;

        if let Some(result) = GameResult::from_board(&self.board) {
            info!(result = %result.banner(), moves = self.move_history.len(), "Game over");
            self.game_over = Some(result);
        }
        Ok(())
    }

    /// Spawn the engine on a worker thread if it is the AI's turn
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() {
            return;
        }

        let board = self.board;
        let (tx, rx) = channel();

        thread::spawn(move || {
            let mut engine = AIEngine::new();
            let result = engine.get_move_with_stats(&board);
            let _ = tx.send(result);
        });

        debug!(ai = %self.ai(), "AI thinking");
        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Poll the worker; apply its move once it arrives
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking { receiver, start_time } => match receiver.try_recv() {
                Ok(result) => Some((result, start_time.elapsed())),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => {
                    warn!("AI worker exited without a move");
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        if let Some((move_result, elapsed)) = result {
            self.ai_state = AiState::Idle;
            debug!(elapsed_ms = elapsed.as_millis() as u64, "AI result received");
            self.last_ai_result = Some(move_result.clone());

            match move_result.best_move {
                Some(pos) => {
                    if let Err(err) = self.execute_move(pos) {
                        warn!(%err, "AI move rejected");
                        self.message = Some(err.to_string());
                    }
                }
                None => self.message = Some("AI could not find a move".to_string()),
            }
        }
    }
}
