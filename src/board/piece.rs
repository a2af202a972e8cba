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

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use std::ops::{Index, IndexMut, Not};
use strum::IntoEnumIterator;
use strum_macros::Display;

use super::moves::Move;
use super::place::{Direction, Offset, Place};
use super::Board;

/// A piece on the board. The owner is fixed when the piece is placed and
/// never changes; a captured piece is removed, not reassigned.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    owner: Color,
}

impl Piece {
    pub const WN: Self = Self::new(White, Knight);
    pub const WA: Self = Self::new(White, Archer);
    pub const WK: Self = Self::new(White, King);

    pub const BN: Self = Self::new(Black, Knight);
    pub const BA: Self = Self::new(Black, Archer);
    pub const BK: Self = Self::new(Black, King);

    #[inline]
    pub const fn new(owner: Color, kind: PieceKind) -> Self {
        Self { kind, owner }
    }

    #[inline]
    pub fn owner(&self) -> Color {
        self.owner
    }

    #[inline]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub fn is_knight(&self) -> bool {
        self.kind.is_knight()
    }

    #[inline]
    pub fn is_archer(&self) -> bool {
        self.kind.is_archer()
    }

    #[inline]
    pub fn is_king(&self) -> bool {
        self.kind.is_king()
    }

    /// Uppercase for white, lowercase for black.
    pub fn symbol(&self) -> char {
        let c = self.kind.symbol();
        match self.owner {
            White => c,
            Black => c.to_ascii_lowercase(),
        }
    }

    /// Every destination this piece could reach from `at` by its shape
    /// alone. Occupancy, boundaries and turn order are left to the rules,
    /// so the result may point outside the board or onto friendly pieces.
    pub fn candidate_moves(&self, board: &Board, at: Place) -> Vec<Move> {
        match self.kind {
            Knight => KNIGHT_OFFSETS
                .iter()
                .map(|offset| Move::new(at, at + offset))
                .collect(),
            Archer => {
                let reach = board.size() as i32;
                Direction::orthogonals()
                    .flat_map(|direction| {
                        let step: Offset = direction.into();
                        (1..reach).map(move |n| Offset::new(step.x * n, step.y * n))
                    })
                    .map(|offset| Move::new(at, at + offset))
                    .collect()
            }
            King => Direction::iter()
                .map(|direction| Move::new(at, at + direction))
                .collect(),
        }
    }
}

pub const KNIGHT_OFFSETS: [Offset; 8] = [
    Offset::new(1, 2),
    Offset::new(2, 1),
    Offset::new(2, -1),
    Offset::new(1, -2),
    Offset::new(-1, -2),
    Offset::new(-2, -1),
    Offset::new(-2, 1),
    Offset::new(-1, 2),
];

use Color::{Black, White};

#[derive(Debug, Serialize, Deserialize, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Not for Color {
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        match self {
            White => Black,
            Black => White,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pair<T>((T, T));

impl<T> Pair<T> {
    pub const fn new(white: T, black: T) -> Self {
        Self((white, black))
    }
}

impl<T> Pair<T> {
    pub fn white(&self) -> &T {
        &self.0 .0
    }
    pub fn white_mut(&mut self) -> &mut T {
        &mut self.0 .0
    }
    pub fn black(&self) -> &T {
        &self.0 .1
    }
    pub fn black_mut(&mut self) -> &mut T {
        &mut self.0 .1
    }
}

impl<T: Hash> Hash for Pair<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.white().hash(state);
        self.black().hash(state);
    }
}

impl<T> Index<Color> for Pair<T> {
    type Output = T;

    #[inline(always)]
    fn index(&self, index: Color) -> &Self::Output {
        match index {
            White => self.white(),
            Black => self.black(),
        }
    }
}

impl<T> IndexMut<Color> for Pair<T> {
    #[inline(always)]
    fn index_mut(&mut self, index: Color) -> &mut Self::Output {
        match index {
            White => self.white_mut(),
            Black => self.black_mut(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Knight,
    Archer,
    King,
}
use PieceKind::{Archer, King, Knight};

impl PieceKind {
    pub fn symbol(&self) -> char {
        match self {
            Knight => 'N',
            Archer => 'A',
            King => 'K',
        }
    }
    pub fn is_knight(&self) -> bool {
        matches!(*self, Knight)
    }
    pub fn is_archer(&self) -> bool {
        matches!(*self, Archer)
    }
    pub fn is_king(&self) -> bool {
        matches!(*self, King)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn destinations(piece: Piece, board: &Board, at: Place) -> HashSet<Place> {
        piece
            .candidate_moves(board, at)
            .into_iter()
            .inspect(|mv| assert_eq!(mv.from, at))
            .map(|mv| mv.to)
            .collect()
    }

    #[test]
    fn test_knight_candidates_ignore_boundaries() {
        let board = Board::new(5);
        let dests = destinations(Piece::WN, &board, Place::new(0, 0));
        assert_eq!(dests.len(), 8);
        assert!(dests.contains(&Place::new(1, 2)));
        assert!(dests.contains(&Place::new(2, 1)));
        assert!(dests.contains(&Place::new(-2, -1)));
    }
    #[test]
    fn test_archer_candidates_cover_row_and_column() {
        let board = Board::new(5);
        let at = Place::new(2, 2);
        let dests = destinations(Piece::BA, &board, at);
        assert_eq!(dests.len(), 16);
        assert!(dests.contains(&Place::new(2, 0)));
        assert!(dests.contains(&Place::new(0, 2)));
        assert!(dests.contains(&Place::new(2, 6)));
        assert!(!dests.contains(&Place::new(3, 3)));
        assert!(!dests.contains(&at));
    }
    #[test]
    fn test_king_candidates_are_unit_steps() {
        let board = Board::new(5);
        let at = Place::new(1, 1);
        let dests = destinations(Piece::WK, &board, at);
        assert_eq!(dests.len(), 8);
        assert!(dests.iter().all(|&to| (to - at).distance() == 1));
    }
    #[test]
    fn test_candidates_ignore_occupancy() {
        let mut board = Board::new(5);
        board.place(Piece::WN, Place::new(1, 2)).unwrap();
        let dests = destinations(Piece::WN, &board, Place::new(0, 0));
        assert!(dests.contains(&Place::new(1, 2)));
    }
    #[test]
    fn test_symbols() {
        assert_eq!(Piece::WN.symbol(), 'N');
        assert_eq!(Piece::BA.symbol(), 'a');
        assert_eq!(Piece::BK.symbol(), 'k');
        assert_eq!(!Color::White, Color::Black);
    }
    #[test]
    fn test_pair_indexing() {
        let mut pair = Pair::new(1, 2);
        pair[Color::Black] += 10;
        assert_eq!(pair[Color::White], 1);
        assert_eq!(pair[Color::Black], 12);
    }
}
