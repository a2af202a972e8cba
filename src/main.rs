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

//! JesonMor in the terminal

use anyhow::Result;
use clap::{Parser, ValueEnum};
use log::info;
use std::path::PathBuf;

use jesonmor::{
    ConsolePlayer, Configuration, Game, GameResult, Pair, Strategy, TextRenderer,
    DEFAULT_BOARD_SIZE, DEFAULT_PROTECTED_MOVES,
};

#[derive(Parser)]
#[command(name = "jesonmor")]
#[command(about = "Play JesonMor in the terminal", long_about = None)]
struct Cli {
    /// JSON configuration file (overrides --size and --protected-moves)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Board size (odd)
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
    size: usize,

    /// Number of opening moves during which captures are not allowed
    #[arg(long, default_value_t = DEFAULT_PROTECTED_MOVES)]
    protected_moves: usize,

    /// Declare a draw after this many moves
    #[arg(long)]
    max_moves: Option<usize>,

    /// Check for a winner even during the protected moves
    #[arg(long)]
    no_win_gate: bool,

    /// Who plays white
    #[arg(long, value_enum, default_value = "human")]
    white: Controller,

    /// Who plays black
    #[arg(long, value_enum, default_value = "random")]
    black: Controller,

    /// Seed for random players
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Controller {
    Human,
    Random,
}

fn strategy(controller: Controller, seed: Option<u64>) -> Result<Box<dyn Strategy>> {
    match controller {
        Controller::Human => Ok(Box::new(ConsolePlayer::stdio())),
        #[cfg(feature = "random")]
        Controller::Random => Ok(Box::new(jesonmor::RandomPlayer::new(seed))),
        #[cfg(not(feature = "random"))]
        Controller::Random => {
            let _ = seed;
            anyhow::bail!("random players need the `random` feature")
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Configuration::load(path)?,
        None => Configuration::standard(cli.size, cli.protected_moves),
    };
    if cli.max_moves.is_some() {
        config = config.with_max_moves(cli.max_moves);
    }
    if cli.no_win_gate {
        config = config.with_protection_gates_win(false);
    }

    let mut game = Game::new(config)?;
    let mut players = Pair::new(
        strategy(cli.white, cli.seed)?,
        strategy(cli.black, cli.seed.map(|seed| seed.wrapping_add(1)))?,
    );
    info!(
        "starting a {}x{} game, {} moves first",
        game.board().size(),
        game.board().size(),
        game.player_name(game.turn())
    );

    let result = game.run(&mut players, &mut TextRenderer::stdout())?;
    match result {
        GameResult::Win(color, _) => {
            println!("{} ({}) wins!", game.player_name(color), color);
        }
        GameResult::Draw(_) => println!("{}", result),
    }
    Ok(())
}
