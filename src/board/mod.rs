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

//! Board model for JesonMor and similar N-by-N capture games
//!
//! Some of the key abstractions include:
//!
//! * A `Place` is an (x, y) coordinate. Columns are named by letters
//!   and rows by numbers starting at 1, so `a1` is `(0, 0)`. A `Place`
//!   may lie outside the board; candidate moves are generated purely
//!   from a piece's shape and the rules decide what is on the board.
//!
//! * A `Piece` combines a `PieceKind` (`Knight`, `Archer`, `King`) with
//!   the `Color` of the player that owns it. Ownership never changes;
//!   captured pieces are simply removed from the board.
//!
//! * A `Move` is a plain (from, to) pair with no legality attached.
//!
//! * A `Rule` is a side-effect free predicate over a board and a move.
//!   A move is legal when every rule in a `RuleSet` accepts it. Each rule
//!   only looks at the moves it understands and lets everything else
//!   through, so rules can be added or reordered freely.
//!
//! * A `Board` holds the contents of each cell, whose turn it is and how
//!   many moves have been played. Its mutators do not check legality;
//!   they are driven by the game engine once a move has been validated.

use anyhow::Result;
use std::fmt;
use thiserror::Error;

mod moves;
mod piece;
mod place;
mod rules;

pub use moves::*;
pub use piece::*;
pub use place::*;
pub use rules::*;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum BoardError {
    #[error("Place {0} is outside the board")]
    OutOfRange(Place),
    #[error("Place {0} is already occupied")]
    Occupied(Place),
    #[error("Place {0} is empty")]
    Empty(Place),
}
use BoardError::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Piece>>,
    turn: Color,
    moves_played: usize,
}

impl Board {
    /// An empty `size` by `size` board with white to move.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
            turn: Color::White,
            moves_played: 0,
        }
    }

    pub fn with_turn(mut self, turn: Color) -> Self {
        self.turn = turn;
        self
    }

    pub fn with_moves_played(mut self, moves_played: usize) -> Self {
        self.moves_played = moves_played;
        self
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[inline]
    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    /// The cell in the middle of the board. Only well defined for odd
    /// sizes, which the configuration enforces.
    #[inline]
    pub fn central_place(&self) -> Place {
        let mid = (self.size / 2) as i32;
        Place::new(mid, mid)
    }

    #[inline]
    pub fn contains(&self, place: Place) -> bool {
        place.is_within(self.size)
    }

    fn index(&self, place: Place) -> Result<usize, BoardError> {
        if !self.contains(place) {
            return Err(OutOfRange(place));
        }
        Ok(place.y() as usize * self.size + place.x() as usize)
    }

    /// Occupant of `place`. Fails only when `place` is off the board.
    pub fn piece_at(&self, place: Place) -> Result<Option<Piece>> {
        let index = self.index(place)?;
        Ok(self.cells[index])
    }

    /// Occupant of `place`, treating places off the board as empty.
    #[inline]
    pub fn occupant(&self, place: Place) -> Option<Piece> {
        self.index(place).ok().and_then(|index| self.cells[index])
    }

    #[inline]
    pub fn is_occupied(&self, place: Place) -> bool {
        self.occupant(place).is_some()
    }

    pub fn place(&mut self, piece: Piece, at: Place) -> Result<()> {
        let index = self.index(at)?;
        if self.cells[index].is_some() {
            return Err(Occupied(at).into());
        }
        self.cells[index] = Some(piece);
        Ok(())
    }

    pub fn remove(&mut self, at: Place) -> Result<Piece> {
        let index = self.index(at)?;
        self.cells[index].take().ok_or_else(|| Empty(at).into())
    }

    /// Moves the piece on `from` to `to`, returning whatever was captured.
    pub fn move_piece(&mut self, from: Place, to: Place) -> Result<Option<Piece>> {
        let src = self.index(from)?;
        let dest = self.index(to)?;
        let piece = self.cells[src].take().ok_or(Empty(from))?;
        Ok(self.cells[dest].replace(piece))
    }

    /// Counts the move just played and hands the turn to the opponent.
    pub(crate) fn end_turn(&mut self) {
        self.moves_played += 1;
        self.turn = !self.turn;
    }

    pub fn pieces(&self) -> impl Iterator<Item = (Place, Piece)> + '_ {
        let size = self.size;
        self.cells.iter().enumerate().filter_map(move |(index, cell)| {
            cell.map(|piece| {
                let place = Place::new((index % size) as i32, (index / size) as i32);
                (place, piece)
            })
        })
    }

    pub fn pieces_of(&self, owner: Color) -> impl Iterator<Item = (Place, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.owner() == owner)
    }

    pub fn count_of(&self, owner: Color) -> usize {
        self.pieces_of(owner).count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let central = self.central_place();
        for y in (0..self.size as i32).rev() {
            write!(f, "{:>2} ", y + 1)?;
            for x in 0..self.size as i32 {
                let place = Place::new(x, y);
                let c = match self.occupant(place) {
                    Some(piece) => piece.symbol(),
                    None if place == central => '+',
                    None => '.',
                };
                write!(f, " {}", c)?;
            }
            writeln!(f)?;
        }
        write!(f, "   ")?;
        for x in 0..self.size {
            let file = u8::try_from(x)
                .ok()
                .filter(|x| *x < 26)
                .map_or('?', |x| (b'a' + x) as char);
            write!(f, " {}", file)?;
        }
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(5);
        assert_eq!(board.pieces().count(), 0);
        assert_eq!(board.turn(), Color::White);
        assert_eq!(board.moves_played(), 0);
        assert_eq!(board.central_place(), Place::new(2, 2));
    }
    #[test]
    fn test_piece_at_out_of_range_fails() {
        let board = Board::new(5);
        assert!(board.piece_at(Place::new(5, 0)).is_err());
        assert!(board.piece_at(Place::new(0, -1)).is_err());
        assert_eq!(board.piece_at(Place::new(4, 4)).unwrap(), None);
        assert_eq!(board.occupant(Place::new(-3, 9)), None);
    }
    #[test]
    fn test_place_and_remove() {
        let mut board = Board::new(5);
        let at = Place::new(1, 3);
        board.place(Piece::BN, at).unwrap();
        assert_eq!(board.piece_at(at).unwrap(), Some(Piece::BN));
        assert!(board.place(Piece::WN, at).is_err());
        assert_eq!(board.remove(at).unwrap(), Piece::BN);
        assert!(board.remove(at).is_err());
        assert!(!board.is_occupied(at));
    }
    #[test]
    fn test_move_piece_captures() {
        let mut board = Board::new(5);
        board.place(Piece::WA, Place::new(0, 0)).unwrap();
        board.place(Piece::BN, Place::new(0, 4)).unwrap();
        let captured = board.move_piece(Place::new(0, 0), Place::new(0, 4)).unwrap();
        assert_eq!(captured, Some(Piece::BN));
        assert_eq!(board.occupant(Place::new(0, 4)), Some(Piece::WA));
        assert_eq!(board.occupant(Place::new(0, 0)), None);
        assert_eq!(board.count_of(Color::Black), 0);
    }
    #[test]
    fn test_move_piece_from_empty_fails() {
        let mut board = Board::new(5);
        assert!(board.move_piece(Place::new(0, 0), Place::new(1, 2)).is_err());
    }
    #[test]
    fn test_end_turn() {
        let mut board = Board::new(5);
        board.end_turn();
        assert_eq!(board.turn(), Color::Black);
        assert_eq!(board.moves_played(), 1);
        board.end_turn();
        assert_eq!(board.turn(), Color::White);
        assert_eq!(board.moves_played(), 2);
    }
    #[test]
    fn test_pieces_of() {
        let mut board = Board::new(5);
        board.place(Piece::WN, Place::new(0, 0)).unwrap();
        board.place(Piece::WA, Place::new(1, 0)).unwrap();
        board.place(Piece::BN, Place::new(4, 4)).unwrap();
        let white: Vec<_> = board.pieces_of(Color::White).collect();
        assert_eq!(white, vec![(Place::new(0, 0), Piece::WN), (Place::new(1, 0), Piece::WA)]);
        assert_eq!(board.count_of(Color::Black), 1);
    }
    #[test]
    fn test_display() {
        let mut board = Board::new(3);
        board.place(Piece::WN, Place::new(0, 0)).unwrap();
        board.place(Piece::BA, Place::new(2, 2)).unwrap();
        let expected = " 3  . . a\n 2  . + .\n 1  N . .\n    a b c\n";
        assert_eq!(board.to_string(), expected);
    }
    #[test]
    fn test_display_past_column_z() {
        let board = Board::new(29);
        let text = board.to_string();
        assert!(text.ends_with(" x y z ? ? ?\n"));
        assert!(text.starts_with("29 "));
    }
}
