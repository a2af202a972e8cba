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

//! JesonMor: a turn-based capture game on an N-by-N board
//!
//! Each player starts with a row of knights and archers. A player wins by
//! landing on the central place or by capturing every opposing piece.
//!
//! [x] Knights, archers and kings
//! [x] Composable move rules with human readable rejections
//! [x] Capture-free opening moves
//! [x] Console, random and scripted players
//! [ ] Move search beyond random choice

mod board;
mod game;
mod player;

pub use board::*;
pub use game::*;
pub use player::*;
