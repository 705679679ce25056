//! Game state management for the Ataxx GUI

use std::time::{Duration, Instant};

use tracing::{info, warn};

use crate::player::{AiPlayer, ManualPlayer, Player};
use crate::{AtaxxError, Board, Move, MoveResult, Outcome, Piece, Side, Square};

/// Pause before an AI move so consecutive AI moves stay visible
const AI_MOVE_DELAY: Duration = Duration::from_millis(400);

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Human vs AI
    PvE { human: Side },
    /// Human vs Human (hotseat)
    PvP,
    /// AI plays both sides
    AiVsAi,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE { human: Side::Red }
    }
}

impl GameMode {
    pub fn label(self) -> String {
        match self {
            GameMode::PvE { human } => format!("Human ({human}) vs AI"),
            GameMode::PvP => "Human vs Human".to_string(),
            GameMode::AiVsAi => "AI vs AI".to_string(),
        }
    }
}

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub last_move_duration: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            last_move_duration: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn stop(&mut self) -> Duration {
        let duration = self.elapsed();
        self.last_move_duration = Some(duration);
        self.start_time = None;
        duration
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }
}

/// Main game state
pub struct GameState {
    pub board: Board,
    pub mode: GameMode,
    /// Blockers placed during setup, replayed by undo
    pub blockers: Vec<Square>,
    pub move_history: Vec<Move>,
    pub last_move: Option<Move>,
    /// Cells flipped by the last move
    pub last_captures: Vec<Square>,
    /// Source cell picked by the first click of a move
    pub selected: Option<Square>,
    pub move_timer: MoveTimer,
    pub message: Option<String>,
    /// Setup confirmed, so the AI may open the game
    started: bool,
    human: ManualPlayer,
    ai: AiPlayer,
}

impl GameState {
    pub fn new(mode: GameMode, seed: u64) -> Self {
        info!(mode = %mode.label(), seed, "new game");
        Self {
            board: Board::new(),
            mode,
            blockers: Vec::new(),
            move_history: Vec::new(),
            last_move: None,
            last_captures: Vec::new(),
            selected: None,
            move_timer: MoveTimer::default(),
            message: None,
            started: false,
            human: ManualPlayer::new(),
            ai: AiPlayer::new(seed),
        }
    }

    /// Start over in the same mode with the AI generator rewound
    pub fn reset(&mut self) {
        let mode = self.mode;
        let seed = self.ai.engine().seed();
        *self = Self::new(mode, seed);
    }

    #[inline]
    pub fn current_turn(&self) -> Side {
        self.board.side_to_move()
    }

    #[inline]
    pub fn outcome(&self) -> Option<Outcome> {
        self.board.winner()
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.board.is_game_over()
    }

    pub fn is_ai_side(&self, side: Side) -> bool {
        match self.mode {
            GameMode::PvE { human } => side != human,
            GameMode::PvP => false,
            GameMode::AiVsAi => true,
        }
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        !self.is_ai_side(self.current_turn())
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        self.is_ai_side(self.current_turn())
    }

    /// Setup is open and the AI would make the first move
    pub fn awaiting_start(&self) -> bool {
        self.board.in_setup() && !self.started && self.is_ai_turn()
    }

    /// Close the setup phase and let the AI open the game
    pub fn start(&mut self) {
        if !self.started {
            info!(blockers = self.blockers.len(), "setup finished");
        }
        self.started = true;
    }

    /// True once the AI is on move and the pause after the last move is over
    pub fn ai_due(&self) -> bool {
        self.is_ai_turn()
            && !self.is_game_over()
            && !self.awaiting_start()
            && self.move_timer.elapsed() >= AI_MOVE_DELAY
    }

    /// The human on move has no clone or jump and must pass
    pub fn must_pass(&self) -> bool {
        self.is_human_turn() && !self.is_game_over() && !self.board.has_legal_move(self.current_turn())
    }

    pub fn last_ai_result(&self) -> Option<&MoveResult> {
        self.ai.last_result()
    }

    /// Handle a click on a board cell.
    ///
    /// Clicking one of the mover's pieces selects it; a second click on a
    /// target cell plays the move. Clicking an empty cell with nothing
    /// selected places a blocker, which the board only accepts before the
    /// first move. During setup this works whoever is on move.
    pub fn click(&mut self, sq: Square) -> Result<(), String> {
        if self.is_game_over() {
            return Err("Game is over".to_string());
        }

        let content = self.board.content(sq);
        if self.board.in_setup() && self.selected.is_none() && content == Piece::Empty {
            return self.place_blocker(sq);
        }
        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }

        let mover = Piece::from(self.current_turn());

        if content == mover {
            // Clicking the selected piece again drops the selection.
            self.selected = if self.selected == Some(sq) { None } else { Some(sq) };
            return Ok(());
        }

        match self.selected {
            Some(from) => {
                self.selected = None;
                let mv = Move::new(from, sq).map_err(|e| self.reject(e))?;
                self.human.submit_move(mv);
                self.play_turn()
            }
            None if content == Piece::Empty => self.place_blocker(sq),
            None => Err(format!("{sq} does not hold a {} piece", self.current_turn())),
        }
    }

    /// Play a move typed in notation for the human on move
    pub fn submit_notation(&mut self, text: &str) -> Result<(), String> {
        if self.is_game_over() {
            return Err("Game is over".to_string());
        }
        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }
        self.selected = None;
        self.human.submit(text).map_err(|e| e.to_string())?;
        self.play_turn()
    }

    /// Pass for the human on move; only legal when no move exists
    pub fn pass(&mut self) -> Result<(), String> {
        self.submit_notation("pass")
    }

    /// Put a blocker on `sq` during the setup phase
    pub fn place_blocker(&mut self, sq: Square) -> Result<(), String> {
        self.board.set_blocker(sq).map_err(|e| self.reject(e))?;
        self.blockers.push(sq);
        self.message = None;
        Ok(())
    }

    /// Let the AI make its move if it is on turn and setup is closed
    pub fn play_ai_turn(&mut self) -> Result<(), String> {
        if !self.is_ai_turn() || self.is_game_over() || self.awaiting_start() {
            return Ok(());
        }
        self.play_turn()
    }

    /// Ask the player on move for a move and play it
    fn play_turn(&mut self) -> Result<(), String> {
        let side = self.current_turn();
        let player: &mut dyn Player = if self.is_ai_side(side) { &mut self.ai } else { &mut self.human };
        let Some(mv) = player.choose_move(&self.board, side) else {
            return Ok(());
        };
        self.execute_move(mv).map_err(|e| self.reject(e))
    }

    /// Execute a move (for both human and AI)
    fn execute_move(&mut self, mv: Move) -> Result<(), AtaxxError> {
        let captured = self.board.apply(mv)?;

        self.move_history.push(mv);
        self.last_move = Some(mv);
        self.last_captures = captured;
        self.selected = None;
        self.message = None;
        self.move_timer.stop();

        if let Some(outcome) = self.outcome() {
            info!(%outcome, score = %self.board.score(), moves = self.move_history.len(), "game over");
        } else {
            self.move_timer.start();
        }
        Ok(())
    }

    fn reject(&mut self, err: AtaxxError) -> String {
        warn!(error = %err, "rejected input");
        self.human.clear();
        err.to_string()
    }

    /// Undo last move
    pub fn undo(&mut self) {
        if self.move_history.is_empty() {
            // Before the first move, undo takes back blockers.
            if self.blockers.pop().is_some() {
                self.replay(Vec::new());
            }
            return;
        }

        // Against the AI, take back the AI reply and the human move
        let undo_count = match self.mode {
            GameMode::PvE { human } => {
                let last_by_ai = self.current_turn() == human;
                if last_by_ai && self.move_history.len() >= 2 { 2 } else { 1 }
            }
            _ => 1,
        };

        let keep = self.move_history.len().saturating_sub(undo_count);
        let moves: Vec<Move> = self.move_history.drain(..keep).collect();
        self.replay(moves);
    }

    /// Rebuild the board from the blockers and `moves`
    fn replay(&mut self, moves: Vec<Move>) {
        self.board = Board::new();
        self.move_history.clear();
        self.last_move = None;
        self.last_captures.clear();
        self.selected = None;
        self.message = None;
        self.human.clear();

        for &sq in &self.blockers {
            if let Err(e) = self.board.set_blocker(sq) {
                warn!(error = %e, "replay stopped");
                return;
            }
        }
        for mv in moves {
            match self.board.apply(mv) {
                Ok(captured) => {
                    self.move_history.push(mv);
                    self.last_move = Some(mv);
                    self.last_captures = captured;
                }
                Err(e) => {
                    warn!(error = %e, "replay stopped");
                    break;
                }
            }
        }
        if self.move_history.is_empty() {
            // Back in setup: blockers can be edited again before the AI opens.
            self.started = false;
        }
        self.move_timer.start();
    }
}
