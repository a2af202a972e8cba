// Copyright 2026 Tobin Edwards
//
//    Licensed under the Apache License, Version 2.0 (the "License");
//    you may not use this file except in compliance with the License.
//    You may obtain a copy of the License at
//
//        http://www.apache.org/licenses/LICENSE-2.0
//
//    Unless required by applicable law or agreed to in writing, software
//    distributed under the License is distributed on an "AS IS" BASIS,
//    WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//    See the License for the specific language governing permissions and
//    limitations under the License.

//! Game engine
//!
//! A `Game` owns the board for its whole lifetime and is the only thing
//! that mutates it. Each turn runs through the same steps:
//!
//! * On entering `AwaitingMove` the legal moves of the side to move are
//!   computed: every candidate of every piece it owns that survives all
//!   rules. An empty set means the side to move forfeits.
//! * The side's `Strategy` picks one of those moves. A move outside the
//!   set is a contract violation and ends `play_turn` with an error.
//! * The move is applied, the move counter advances, the turn passes to
//!   the opponent and the win conditions are checked for the mover.

use anyhow::Result;
use log::{debug, error, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

mod config;
mod render;

pub use config::*;
pub use render::*;

use crate::board::{Board, BoardError, Color, Move, Pair, Piece, RuleSet};
use crate::player::Strategy;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GameError {
    #[error("The game is over")]
    GameOver,
    #[error("Illegal move {mv}: {reason}")]
    IllegalMove { mv: Move, reason: String },
    #[error("{player} chose {mv}, which is not one of the legal moves")]
    ContractViolation { player: String, mv: Move },
}
use GameError::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    Win(Color, WinReason),
    Draw(DrawReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinReason {
    CentralPlace,
    Annihilation,
    // The opponent had no legal move
    Forfeit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrawReason {
    MoveLimit,
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use GameResult::*;
        match self {
            Win(color, WinReason::CentralPlace) => {
                write!(f, "{} wins by occupying the central place", color)
            }
            Win(color, WinReason::Annihilation) => {
                write!(f, "{} wins by capturing every opposing piece", color)
            }
            Win(color, WinReason::Forfeit) => {
                write!(f, "{} wins: {} has no legal move", color, !*color)
            }
            Draw(DrawReason::MoveLimit) => write!(f, "draw by move limit"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    AwaitingMove(Color),
    GameOver(GameResult),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRecord {
    /// 1-based
    pub number: usize,
    pub mover: Color,
    pub mv: Move,
    pub piece: Piece,
    pub captured: Option<Piece>,
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {} {}", self.number, self.piece.symbol(), self.mv)?;
        if let Some(captured) = self.captured {
            write!(f, " x{}", captured.symbol())?;
        }
        Ok(())
    }
}

pub struct Game {
    config: Configuration,
    board: Board,
    rules: RuleSet,
    state: GameState,
    legal_moves: Vec<Move>,
    history: Vec<MoveRecord>,
}

impl Game {
    /// Sets up a game with the standard rules.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the configuration is invalid.
    pub fn new(config: Configuration) -> Result<Self> {
        let rules = RuleSet::standard(config.protected_moves);
        Self::with_rules(config, rules)
    }

    pub fn with_rules(config: Configuration, rules: RuleSet) -> Result<Self> {
        let board = config.build_board()?;
        let mut game = Self {
            state: GameState::AwaitingMove(board.turn()),
            config,
            board,
            rules,
            legal_moves: Vec::new(),
            history: Vec::new(),
        };
        game.state = game.await_move();
        Ok(game)
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn config(&self) -> &Configuration {
        &self.config
    }

    #[inline]
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    #[inline]
    pub fn state(&self) -> GameState {
        self.state
    }

    #[inline]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Legal moves of the side to move. Empty once the game is over.
    #[inline]
    pub fn legal_moves(&self) -> &[Move] {
        &self.legal_moves
    }

    #[inline]
    pub fn turn(&self) -> Color {
        self.board.turn()
    }

    pub fn result(&self) -> Option<GameResult> {
        match self.state {
            GameState::GameOver(result) => Some(result),
            GameState::AwaitingMove(_) => None,
        }
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.result().is_some()
    }

    /// Display name of the player with `color`, falling back to the color.
    pub fn player_name(&self, color: Color) -> String {
        self.config
            .player(color)
            .map(|player| player.name.clone())
            .unwrap_or_else(|| color.to_string())
    }

    /// Candidates of every piece owned by the side to move that pass all
    /// rules.
    pub fn compute_legal_moves(&self) -> Vec<Move> {
        let turn = self.board.turn();
        self.board
            .pieces_of(turn)
            .flat_map(|(at, piece)| piece.candidate_moves(&self.board, at))
            .filter(|mv| self.rules.is_legal(&self.board, mv))
            .collect()
    }

    /// `None` if `mv` may be played now, otherwise why not.
    pub fn explain(&self, mv: &Move) -> Option<String> {
        if self.is_over() {
            return Some(GameOver.to_string());
        }
        if let Some(rule) = self.rules.violation(&self.board, mv) {
            return Some(rule.description());
        }
        if self.legal_moves.contains(mv) {
            None
        } else {
            Some("The piece cannot move that way".to_string())
        }
    }

    /// Applies a move from the current legal set and advances the game.
    ///
    /// # Errors
    ///
    /// Fails if the game is over or `mv` is not a legal move. The board is
    /// left untouched in both cases.
    pub fn submit_move(&mut self, mv: Move) -> Result<MoveRecord> {
        let mover = match self.state {
            GameState::AwaitingMove(color) => color,
            GameState::GameOver(_) => return Err(GameOver.into()),
        };
        if !self.legal_moves.contains(&mv) {
            let reason = self
                .explain(&mv)
                .unwrap_or_else(|| "not a legal move".to_string());
            debug!("rejected {}: {}", mv, reason);
            return Err(IllegalMove { mv, reason }.into());
        }
        let piece = self.board.piece_at(mv.from)?.ok_or(BoardError::Empty(mv.from))?;
        let captured = self.board.move_piece(mv.from, mv.to)?;
        self.board.end_turn();

        let record = MoveRecord {
            number: self.board.moves_played(),
            mover,
            mv,
            piece,
            captured,
        };
        info!("{} ({}) played {}", self.player_name(mover), mover, record);
        self.history.push(record);

        self.state = match self.check_win() {
            Some(result) => {
                self.legal_moves.clear();
                GameState::GameOver(result)
            }
            None => self.await_move(),
        };
        if let GameState::GameOver(result) = self.state {
            info!("game over after {} moves: {}", self.board.moves_played(), result);
        }
        Ok(record)
    }

    /// Win conditions for the player who made the last move: a piece of
    /// theirs on the central place, or nothing left for the opponent.
    pub fn check_win(&self) -> Option<GameResult> {
        let mover = self.history.last()?.mover;
        let moves_played = self.board.moves_played();
        if self.config.protection_gates_win && moves_played <= self.config.protected_moves {
            return None;
        }
        let central = self.board.occupant(self.board.central_place());
        if central.map(|piece| piece.owner()) == Some(mover) {
            return Some(GameResult::Win(mover, WinReason::CentralPlace));
        }
        if self.board.count_of(!mover) == 0 {
            return Some(GameResult::Win(mover, WinReason::Annihilation));
        }
        None
    }

    fn await_move(&mut self) -> GameState {
        let turn = self.board.turn();
        if let Some(max_moves) = self.config.max_moves {
            if self.board.moves_played() >= max_moves {
                self.legal_moves.clear();
                return GameState::GameOver(GameResult::Draw(DrawReason::MoveLimit));
            }
        }
        self.legal_moves = self.compute_legal_moves();
        debug!("{} has {} legal moves", turn, self.legal_moves.len());
        if self.legal_moves.is_empty() {
            info!("{} has no legal move and forfeits", turn);
            return GameState::GameOver(GameResult::Win(!turn, WinReason::Forfeit));
        }
        GameState::AwaitingMove(turn)
    }

    /// Asks the side to move for a move and applies it.
    ///
    /// # Errors
    ///
    /// Fails if the game is over, the strategy fails, or the strategy
    /// returns a move outside the legal set. No other move is substituted.
    pub fn play_turn(&mut self, players: &mut Pair<Box<dyn Strategy>>) -> Result<GameState> {
        let turn = match self.state {
            GameState::AwaitingMove(color) => color,
            GameState::GameOver(_) => return Err(GameOver.into()),
        };
        let mv = players[turn].next_move(self, &self.legal_moves)?;
        if !self.legal_moves.contains(&mv) {
            let player = self.player_name(turn);
            error!("{} broke the move contract with {}", player, mv);
            return Err(ContractViolation { player, mv }.into());
        }
        self.submit_move(mv)?;
        Ok(self.state)
    }

    /// Plays turns until the game ends, rendering after every transition.
    /// Rendering failures are logged and otherwise ignored.
    pub fn run(
        &mut self,
        players: &mut Pair<Box<dyn Strategy>>,
        renderer: &mut dyn Renderer,
    ) -> Result<GameResult> {
        self.show(renderer);
        loop {
            if let GameState::GameOver(result) = self.state {
                return Ok(result);
            }
            self.play_turn(players)?;
            self.show(renderer);
        }
    }

    fn show(&self, renderer: &mut dyn Renderer) {
        if let Err(err) = renderer.render(self) {
            warn!("failed to render the board: {:#}", err);
        }
    }
}
