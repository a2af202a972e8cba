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
use std::io::{self, Write};

use super::{Game, GameState};

/// Receives a read-only view of the game after every state transition.
pub trait Renderer {
    fn render(&mut self, game: &Game) -> Result<()>;
}

/// Renders nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _game: &Game) -> Result<()> {
        Ok(())
    }
}

pub struct TextRenderer<W> {
    out: W,
}

impl TextRenderer<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, game: &Game) -> Result<()> {
        writeln!(self.out)?;
        if let Some(record) = game.history().last() {
            writeln!(self.out, "{} played {}", game.player_name(record.mover), record)?;
        }
        write!(self.out, "{}", game.board())?;
        match game.state() {
            GameState::AwaitingMove(turn) => writeln!(
                self.out,
                "Move {}: {} ({}) to play, {} legal moves",
                game.board().moves_played() + 1,
                game.player_name(turn),
                turn,
                game.legal_moves().len()
            )?,
            GameState::GameOver(result) => writeln!(self.out, "Game over: {}", result)?,
        }
        self.out.flush()?;
        Ok(())
    }
}
