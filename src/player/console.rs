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
use log::debug;
use std::io::{self, BufRead, Cursor, Write};

use super::{PlayerError, Strategy};
use crate::board::Move;
use crate::game::Game;

/// Where typed lines come from. `io::Stdin` locks only for the duration
/// of each read, so two console players can share the terminal.
pub trait LineReader {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize>;
}

impl LineReader for io::Stdin {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        io::Stdin::read_line(self, buf)
    }
}

impl<T: AsRef<[u8]>> LineReader for Cursor<T> {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

/// A human typing moves such as `a1->b3`. Typing `moves` lists the legal
/// moves. Rejected input is explained and the prompt repeats until a legal
/// move is entered.
pub struct ConsolePlayer<R, W> {
    input: R,
    output: W,
}

impl ConsolePlayer<io::Stdin, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin(), io::stdout())
    }
}

impl<R: LineReader, W: Write> ConsolePlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn list_moves(&mut self, legal_moves: &[Move]) -> io::Result<()> {
        let names: Vec<String> = legal_moves.iter().map(|mv| mv.to_string()).collect();
        writeln!(self.output, "Legal moves: {}", names.join(" "))
    }
}

impl<R: LineReader, W: Write> Strategy for ConsolePlayer<R, W> {
    fn next_move(&mut self, game: &Game, legal_moves: &[Move]) -> Result<Move> {
        let turn = game.turn();
        let name = game.player_name(turn);
        loop {
            write!(self.output, "{} ({}) > ", name, turn)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(PlayerError::InputClosed.into());
            }
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if line.eq_ignore_ascii_case("moves") {
                self.list_moves(legal_moves)?;
                continue;
            }
            match Move::try_from_string(line) {
                Ok(mv) if legal_moves.contains(&mv) => return Ok(mv),
                Ok(mv) => {
                    let reason = game
                        .explain(&mv)
                        .unwrap_or_else(|| "not a legal move".to_string());
                    debug!("{} attempted {}: {}", name, mv, reason);
                    writeln!(self.output, "Illegal move {}: {}", mv, reason)?;
                }
                Err(err) => writeln!(self.output, "{}", err)?,
            }
        }
    }
}
