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

use std::fmt;

use super::moves::Move;
use super::piece::Piece;
use super::place::{between, Place};
use super::Board;

/// A single legality constraint. Rules hold no board-derived state, so
/// evaluating one twice on the same board and move gives the same answer.
///
/// A rule that does not apply to a move (wrong piece kind, nothing on the
/// source place, ...) must accept it and leave the decision to others.
pub trait Rule: fmt::Debug {
    fn validate(&self, board: &Board, mv: &Move) -> bool;
    fn description(&self) -> String;
}

fn moving_piece(board: &Board, mv: &Move) -> Option<Piece> {
    board.occupant(mv.from)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct OutOfBoundaryRule;

impl Rule for OutOfBoundaryRule {
    fn validate(&self, board: &Board, mv: &Move) -> bool {
        board.contains(mv.from) && board.contains(mv.to)
    }
    fn description(&self) -> String {
        "Source and destination must be on the board".to_string()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NilMoveRule;

impl Rule for NilMoveRule {
    fn validate(&self, _board: &Board, mv: &Move) -> bool {
        mv.from != mv.to
    }
    fn description(&self) -> String {
        "Source and destination must be different".to_string()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct VacantRule;

impl Rule for VacantRule {
    fn validate(&self, board: &Board, mv: &Move) -> bool {
        !board.contains(mv.from) || board.is_occupied(mv.from)
    }
    fn description(&self) -> String {
        "There is no piece at the source".to_string()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NotOwnPieceRule;

impl Rule for NotOwnPieceRule {
    fn validate(&self, board: &Board, mv: &Move) -> bool {
        match moving_piece(board, mv) {
            Some(piece) => piece.owner() == board.turn(),
            None => true,
        }
    }
    fn description(&self) -> String {
        "Cannot move a piece belonging to another player".to_string()
    }
}

/// Forbids capturing one's own piece.
#[derive(Debug, Clone, Copy, Default)]
pub struct OccupiedRule;

impl Rule for OccupiedRule {
    fn validate(&self, board: &Board, mv: &Move) -> bool {
        match (moving_piece(board, mv), board.occupant(mv.to)) {
            (Some(piece), Some(target)) => piece.owner() != target.owner(),
            _ => true,
        }
    }
    fn description(&self) -> String {
        "Cannot capture a piece of your own".to_string()
    }
}

/// No captures of any kind while fewer than `n` moves have been played.
#[derive(Debug, Clone, Copy)]
pub struct FirstNMovesProtectionRule {
    n: usize,
}

impl FirstNMovesProtectionRule {
    pub fn new(n: usize) -> Self {
        Self { n }
    }
}

impl Rule for FirstNMovesProtectionRule {
    fn validate(&self, board: &Board, mv: &Move) -> bool {
        board.moves_played() >= self.n || !board.is_occupied(mv.to)
    }
    fn description(&self) -> String {
        format!("Captures are not allowed in the first {} moves", self.n)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct KnightMoveRule;

impl Rule for KnightMoveRule {
    fn validate(&self, board: &Board, mv: &Move) -> bool {
        match moving_piece(board, mv) {
            Some(piece) if piece.is_knight() => mv.offset().is_knight_shape(),
            _ => true,
        }
    }
    fn description(&self) -> String {
        "Knight must move in an L shape".to_string()
    }
}

/// The square next to a knight along the long side of its L. The knight
/// cannot jump when that square is occupied.
pub fn knight_leg(mv: &Move) -> Option<Place> {
    let offset = mv.offset();
    match (offset.x.abs(), offset.y.abs()) {
        (2, 1) => Some(Place::new(mv.from.x() + offset.x.signum(), mv.from.y())),
        (1, 2) => Some(Place::new(mv.from.x(), mv.from.y() + offset.y.signum())),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct KnightBlockRule;

impl Rule for KnightBlockRule {
    fn validate(&self, board: &Board, mv: &Move) -> bool {
        match moving_piece(board, mv) {
            Some(piece) if piece.is_knight() => match knight_leg(mv) {
                Some(leg) => !board.is_occupied(leg),
                None => true,
            },
            _ => true,
        }
    }
    fn description(&self) -> String {
        "Knight is blocked by a piece next to it".to_string()
    }
}

/// Archers move along their row or column. A plain move needs a clear
/// line onto an empty place; a capture needs exactly one piece to jump
/// over and an opponent on the destination.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArcherMoveRule;

impl Rule for ArcherMoveRule {
    fn validate(&self, board: &Board, mv: &Move) -> bool {
        let piece = match moving_piece(board, mv) {
            Some(piece) if piece.is_archer() => piece,
            _ => return true,
        };
        if !mv.offset().is_orthogonal() {
            return false;
        }
        let screens = between(mv.from, mv.to)
            .into_iter()
            .filter(|&place| board.is_occupied(place))
            .count();
        match board.occupant(mv.to) {
            None => screens == 0,
            Some(target) => screens == 1 && target.owner() != piece.owner(),
        }
    }
    fn description(&self) -> String {
        "Archer moves along a clear row or column and captures by jumping over exactly one piece"
            .to_string()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct KingMoveRule;

impl Rule for KingMoveRule {
    fn validate(&self, board: &Board, mv: &Move) -> bool {
        match moving_piece(board, mv) {
            Some(piece) if piece.is_king() => mv.offset().distance() == 1,
            _ => true,
        }
    }
    fn description(&self) -> String {
        "King moves one step at a time".to_string()
    }
}

/// An ordered list of rules. A move is legal when every rule accepts it.
#[derive(Debug, Default)]
pub struct RuleSet {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rules of JesonMor with `protected_moves` capture-free opening moves.
    pub fn standard(protected_moves: usize) -> Self {
        Self::new()
            .with(OutOfBoundaryRule)
            .with(NilMoveRule)
            .with(VacantRule)
            .with(NotOwnPieceRule)
            .with(OccupiedRule)
            .with(FirstNMovesProtectionRule::new(protected_moves))
            .with(KnightMoveRule)
            .with(KnightBlockRule)
            .with(ArcherMoveRule)
            .with(KingMoveRule)
    }

    pub fn with<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Rule> {
        self.rules.iter().map(|rule| &**rule)
    }

    pub fn is_legal(&self, board: &Board, mv: &Move) -> bool {
        self.violation(board, mv).is_none()
    }

    /// The first rule rejecting `mv`, if any.
    pub fn violation(&self, board: &Board, mv: &Move) -> Option<&dyn Rule> {
        self.iter().find(|rule| !rule.validate(board, mv))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Color;

    fn mv(from: &str, to: &str) -> Move {
        Move::new(Place::from_string(from), Place::from_string(to))
    }

    fn board_with(pieces: &[(Piece, &str)]) -> Board {
        let mut board = Board::new(5);
        for (piece, name) in pieces {
            board.place(*piece, Place::from_string(name)).unwrap();
        }
        board
    }

    #[test]
    fn test_out_of_boundary() {
        let board = Board::new(5);
        let rule = OutOfBoundaryRule;
        for x in -2..7 {
            for y in -2..7 {
                let to = Place::new(x, y);
                let inside = (0..5).contains(&x) && (0..5).contains(&y);
                assert_eq!(rule.validate(&board, &Move::new(Place::new(2, 2), to)), inside);
                assert_eq!(rule.validate(&board, &Move::new(to, Place::new(2, 2))), inside);
            }
        }
    }
    #[test]
    fn test_nil_move() {
        let board = Board::new(5);
        assert!(!NilMoveRule.validate(&board, &mv("c3", "c3")));
        assert!(NilMoveRule.validate(&board, &mv("c3", "c4")));
    }
    #[test]
    fn test_vacant_source() {
        let board = board_with(&[(Piece::WN, "a1")]);
        assert!(VacantRule.validate(&board, &mv("a1", "b3")));
        assert!(!VacantRule.validate(&board, &mv("a2", "b4")));
    }
    #[test]
    fn test_not_own_piece() {
        let board = board_with(&[(Piece::WN, "a1"), (Piece::BN, "e5")]);
        assert!(NotOwnPieceRule.validate(&board, &mv("a1", "b3")));
        assert!(!NotOwnPieceRule.validate(&board, &mv("e5", "d3")));
        let board = board.with_turn(Color::Black);
        assert!(NotOwnPieceRule.validate(&board, &mv("e5", "d3")));
    }
    #[test]
    fn test_occupied_forbids_self_capture() {
        let board = board_with(&[(Piece::WN, "a1"), (Piece::WA, "b3"), (Piece::BN, "c2")]);
        assert!(!OccupiedRule.validate(&board, &mv("a1", "b3")));
        assert!(OccupiedRule.validate(&board, &mv("a1", "c2")));
        assert!(OccupiedRule.validate(&board, &mv("a1", "a2")));
    }
    #[test]
    fn test_protection_forbids_any_capture() {
        let board = board_with(&[(Piece::WN, "a1"), (Piece::BN, "c2"), (Piece::WA, "b3")]);
        let rule = FirstNMovesProtectionRule::new(2);
        assert!(!rule.validate(&board, &mv("a1", "c2")));
        assert!(!rule.validate(&board, &mv("a1", "b3")));
        assert!(rule.validate(&board, &mv("a1", "a2")));
        let board = board.with_moves_played(1);
        assert!(!rule.validate(&board, &mv("a1", "c2")));
        let board = board.with_moves_played(2);
        assert!(rule.validate(&board, &mv("a1", "c2")));
    }
    #[test]
    fn test_protection_with_zero_moves() {
        let board = board_with(&[(Piece::WN, "a1"), (Piece::BN, "c2")]);
        assert!(FirstNMovesProtectionRule::new(0).validate(&board, &mv("a1", "c2")));
    }
    #[test]
    fn test_knight_shape() {
        let board = board_with(&[(Piece::WN, "c3"), (Piece::WA, "a1")]);
        assert!(KnightMoveRule.validate(&board, &mv("c3", "d5")));
        assert!(KnightMoveRule.validate(&board, &mv("c3", "a2")));
        assert!(!KnightMoveRule.validate(&board, &mv("c3", "c4")));
        assert!(!KnightMoveRule.validate(&board, &mv("c3", "e5")));
        // not a knight
        assert!(KnightMoveRule.validate(&board, &mv("a1", "a5")));
    }
    #[test]
    fn test_knight_leg() {
        assert_eq!(knight_leg(&mv("c3", "e4")), Some(Place::from_string("d3")));
        assert_eq!(knight_leg(&mv("c3", "a2")), Some(Place::from_string("b3")));
        assert_eq!(knight_leg(&mv("c3", "d5")), Some(Place::from_string("c4")));
        assert_eq!(knight_leg(&mv("c3", "b1")), Some(Place::from_string("c2")));
        assert_eq!(knight_leg(&mv("c3", "c4")), None);
    }
    #[test]
    fn test_knight_blocked() {
        let board = board_with(&[(Piece::WN, "c3"), (Piece::BA, "d3")]);
        assert!(!KnightBlockRule.validate(&board, &mv("c3", "e4")));
        assert!(!KnightBlockRule.validate(&board, &mv("c3", "e2")));
        assert!(KnightBlockRule.validate(&board, &mv("c3", "d5")));
        assert!(KnightBlockRule.validate(&board, &mv("c3", "a4")));
    }
    #[test]
    fn test_knight_block_ignores_other_pieces() {
        let board = board_with(&[(Piece::WA, "c3"), (Piece::BA, "d3")]);
        assert!(KnightBlockRule.validate(&board, &mv("c3", "e4")));
    }
    #[test]
    fn test_archer_plain_moves() {
        let board = board_with(&[(Piece::WA, "a1"), (Piece::BN, "a4")]);
        assert!(ArcherMoveRule.validate(&board, &mv("a1", "a3")));
        assert!(ArcherMoveRule.validate(&board, &mv("a1", "e1")));
        assert!(!ArcherMoveRule.validate(&board, &mv("a1", "a5")));
        assert!(!ArcherMoveRule.validate(&board, &mv("a1", "b2")));
    }
    #[test]
    fn test_archer_captures_over_one_screen() {
        let board = board_with(&[(Piece::WA, "a1"), (Piece::WN, "a2"), (Piece::BN, "a4")]);
        assert!(ArcherMoveRule.validate(&board, &mv("a1", "a4")));
        // adjacent without screen
        let board = board_with(&[(Piece::WA, "a1"), (Piece::BN, "a2")]);
        assert!(!ArcherMoveRule.validate(&board, &mv("a1", "a2")));
        // two screens
        let board = board_with(&[
            (Piece::WA, "a1"),
            (Piece::WN, "a2"),
            (Piece::BN, "a3"),
            (Piece::BN, "a5"),
        ]);
        assert!(!ArcherMoveRule.validate(&board, &mv("a1", "a5")));
    }
    #[test]
    fn test_archer_cannot_capture_own_piece() {
        let board = board_with(&[(Piece::WA, "a1"), (Piece::BN, "b1"), (Piece::WN, "d1")]);
        assert!(!ArcherMoveRule.validate(&board, &mv("a1", "d1")));
    }
    #[test]
    fn test_king_steps() {
        let board = board_with(&[(Piece::BK, "c3")]);
        assert!(KingMoveRule.validate(&board, &mv("c3", "d4")));
        assert!(KingMoveRule.validate(&board, &mv("c3", "c2")));
        assert!(!KingMoveRule.validate(&board, &mv("c3", "c5")));
    }
    #[test]
    fn test_rules_are_idempotent() {
        let board = board_with(&[(Piece::WN, "c3"), (Piece::BA, "d3"), (Piece::WA, "a3")]);
        let rules = RuleSet::standard(1);
        for (from, _) in board.pieces() {
            for to in (0..5).flat_map(|x| (0..5).map(move |y| Place::new(x, y))) {
                let mv = Move::new(from, to);
                for rule in rules.iter() {
                    assert_eq!(rule.validate(&board, &mv), rule.validate(&board, &mv));
                }
            }
        }
    }
    #[test]
    fn test_rule_set_reports_first_violation() {
        let board = board_with(&[(Piece::WN, "a1"), (Piece::WA, "b3")]);
        let rules = RuleSet::standard(0);
        assert_eq!(rules.len(), 10);
        assert!(rules.is_legal(&board, &mv("a1", "c2")));
        let rule = rules.violation(&board, &mv("a1", "b3")).unwrap();
        assert_eq!(rule.description(), OccupiedRule.description());
        let rule = rules.violation(&board, &mv("a1", "z9")).unwrap();
        assert_eq!(rule.description(), OutOfBoundaryRule.description());
    }
    #[test]
    fn test_rule_order_does_not_change_outcome() {
        let board = board_with(&[(Piece::WN, "c3"), (Piece::BA, "d3"), (Piece::BN, "e4")]);
        let forward = RuleSet::standard(0);
        let reversed = RuleSet::new()
            .with(KingMoveRule)
            .with(ArcherMoveRule)
            .with(KnightBlockRule)
            .with(KnightMoveRule)
            .with(FirstNMovesProtectionRule::new(0))
            .with(OccupiedRule)
            .with(NotOwnPieceRule)
            .with(VacantRule)
            .with(NilMoveRule)
            .with(OutOfBoundaryRule);
        for mv in Piece::WN.candidate_moves(&board, Place::from_string("c3")) {
            assert_eq!(forward.is_legal(&board, &mv), reversed.is_legal(&board, &mv));
        }
    }
}
