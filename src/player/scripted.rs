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

use anyhow::Result;
use std::collections::VecDeque;

use super::{PlayerError, Strategy};
use crate::board::Move;
use crate::game::Game;

/// Plays a fixed list of moves in order, legal or not.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPlayer {
    moves: VecDeque<Move>,
}

impl ScriptedPlayer {
    pub fn new<I>(moves: I) -> Self
    where
        I: IntoIterator<Item = Move>,
    {
        Self {
            moves: moves.into_iter().collect(),
        }
    }

    pub fn from_strings(moves: &[&str]) -> Result<Self> {
        let moves = moves
            .iter()
            .map(|text| Move::try_from_string(text))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(moves))
    }

    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

impl Strategy for ScriptedPlayer {
    fn next_move(&mut self, _game: &Game, _legal_moves: &[Move]) -> Result<Move> {
        self.moves
            .pop_front()
            .ok_or_else(|| PlayerError::ScriptExhausted.into())
    }
}
