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

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

use crate::board::{Board, Color, Piece, PieceKind, Place};

pub const MIN_BOARD_SIZE: usize = 3;
pub const MAX_BOARD_SIZE: usize = 26;
pub const DEFAULT_BOARD_SIZE: usize = 9;
pub const DEFAULT_PROTECTED_MOVES: usize = 2;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Board size must be odd and between 3 and 26 (got {0})")]
    InvalidSize(usize),
    #[error("Expecting exactly 2 players (got {0})")]
    PlayerCount(usize),
    #[error("Players must have different colors")]
    DuplicateColor,
    #[error("Initial piece at {0} is outside the board")]
    PlacementOutOfBounds(Place),
    #[error("More than one initial piece at {0}")]
    DuplicatePlacement(Place),
}
use ConfigError::*;

/// Identity of a participant. Fixed for the duration of a game.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash)]
pub struct Player {
    pub name: String,
    pub color: Color,
}

impl Player {
    pub fn new<S: Into<String>>(name: S, color: Color) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    pub place: Place,
    pub piece: Piece,
}

impl Placement {
    pub fn new(place: Place, owner: Color, kind: PieceKind) -> Self {
        Self {
            place,
            piece: Piece::new(owner, kind),
        }
    }
}

fn check_size(size: usize) -> Result<(), ConfigError> {
    if size < MIN_BOARD_SIZE || size > MAX_BOARD_SIZE || size % 2 == 0 {
        return Err(InvalidSize(size));
    }
    Ok(())
}

/// Everything needed to set up a game. Built once and read-only afterwards.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Configuration {
    pub size: usize,
    /// Turn order: the first player moves first.
    pub players: Vec<Player>,
    pub placements: Vec<Placement>,
    #[serde(default)]
    pub protected_moves: usize,
    /// Only look for a winner once the protected moves are over.
    #[serde(default = "default_protection_gates_win")]
    pub protection_gates_win: bool,
    /// Declare a draw after this many moves without a winner.
    #[serde(default)]
    pub max_moves: Option<usize>,
}

fn default_protection_gates_win() -> bool {
    true
}

impl Default for Configuration {
    fn default() -> Self {
        Self::standard(DEFAULT_BOARD_SIZE, DEFAULT_PROTECTED_MOVES)
    }
}

impl Configuration {
    /// An empty board for two players, `first` moving first. Pieces are
    /// added with `with_piece`.
    pub fn new(size: usize, first: Player, second: Player) -> Self {
        Self {
            size,
            players: vec![first, second],
            placements: Vec::new(),
            protected_moves: 0,
            protection_gates_win: true,
            max_moves: None,
        }
    }

    /// The usual JesonMor opening: each player fills their back row with
    /// knights on even columns and archers on odd columns. An invalid size
    /// gets no pieces and is rejected by `validate`.
    pub fn standard(size: usize, protected_moves: usize) -> Self {
        let mut config = Self::new(
            size,
            Player::new("White", Color::White),
            Player::new("Black", Color::Black),
        )
        .with_protected_moves(protected_moves);
        if check_size(size).is_err() {
            return config;
        }
        let Ok(width) = i32::try_from(size) else {
            return config;
        };
        let last = width - 1;
        for x in 0..width {
            let kind = if x % 2 == 0 {
                PieceKind::Knight
            } else {
                PieceKind::Archer
            };
            config = config
                .with_piece(Place::new(x, 0), Color::White, kind)
                .with_piece(Place::new(x, last), Color::Black, kind);
        }
        config
    }

    /// Reads a configuration from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading configuration {}", path.display()))?;
        let config: Self = serde_json::from_str(&text)
            .with_context(|| format!("parsing configuration {}", path.display()))?;
        Ok(config)
    }

    pub fn with_piece(mut self, place: Place, owner: Color, kind: PieceKind) -> Self {
        self.placements.push(Placement::new(place, owner, kind));
        self
    }

    pub fn with_protected_moves(mut self, protected_moves: usize) -> Self {
        self.protected_moves = protected_moves;
        self
    }

    pub fn with_protection_gates_win(mut self, gates: bool) -> Self {
        self.protection_gates_win = gates;
        self
    }

    pub fn with_max_moves(mut self, max_moves: Option<usize>) -> Self {
        self.max_moves = max_moves;
        self
    }

    /// The player moving first.
    pub fn first_player(&self) -> Option<&Player> {
        self.players.first()
    }

    pub fn player(&self, color: Color) -> Option<&Player> {
        self.players.iter().find(|player| player.color == color)
    }

    /// Checks the configuration without building anything.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` describing the first problem found.
    pub fn validate(&self) -> Result<()> {
        check_size(self.size)?;
        if self.players.len() != 2 {
            return Err(PlayerCount(self.players.len()).into());
        }
        if self.players[0].color == self.players[1].color {
            return Err(DuplicateColor.into());
        }
        let mut seen = HashSet::new();
        for placement in self.placements.iter() {
            let place = placement.place;
            if !place.is_within(self.size) {
                return Err(PlacementOutOfBounds(place).into());
            }
            if !seen.insert(place) {
                return Err(DuplicatePlacement(place).into());
            }
        }
        Ok(())
    }

    /// Validates the configuration and lays out the initial board with
    /// the first player to move.
    pub fn build_board(&self) -> Result<Board> {
        self.validate()?;
        let turn = self.players[0].color;
        let mut board = Board::new(self.size).with_turn(turn);
        for placement in self.placements.iter() {
            board.place(placement.piece, placement.place)?;
        }
        Ok(board)
    }
}
