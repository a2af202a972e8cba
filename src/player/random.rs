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
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::{PlayerError, Strategy};
use crate::board::Move;
use crate::game::Game;

/// Picks uniformly among the legal moves.
pub struct RandomPlayer {
    rng: StdRng,
}

impl RandomPlayer {
    /// A fixed `seed` makes the sequence of choices reproducible.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }
}

impl Strategy for RandomPlayer {
    fn next_move(&mut self, _game: &Game, legal_moves: &[Move]) -> Result<Move> {
        let mv = legal_moves
            .choose(&mut self.rng)
            .ok_or(PlayerError::NoLegalMoves)?;
        Ok(*mv)
    }
}
