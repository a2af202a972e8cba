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

//! Move selection
//!
//! A `Strategy` decides which of the legal moves to play. It never
//! validates anything: the engine hands it the precomputed legal moves and
//! treats any move outside that list as a broken contract.

use anyhow::Result;
use thiserror::Error;

use crate::board::Move;
use crate::game::Game;

mod console;
#[cfg(feature = "random")]
mod random;
mod scripted;

pub use console::*;
#[cfg(feature = "random")]
pub use random::*;
pub use scripted::*;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PlayerError {
    #[error("Input closed before a move was entered")]
    InputClosed,
    #[error("Scripted player ran out of moves")]
    ScriptExhausted,
    #[error("No legal move to choose from")]
    NoLegalMoves,
}

pub trait Strategy {
    /// Picks one of `legal_moves`, which is never empty.
    fn next_move(&mut self, game: &Game, legal_moves: &[Move]) -> Result<Move>;
}
