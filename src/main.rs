mod action;
mod board;
mod game;
mod snake;
mod term;

use std::{fs::File, path::Path};

use anyhow::{Context, Result};
use log::info;
use simplelog::{Config, LevelFilter, WriteLogger};

pub type TermInt = u16;
pub type Coord = i16;
pub type Coords = (Coord, Coord);

// The terminal is the game screen, so logs go to a file
const LOG_FILE: &str = "snake.log";

/// Plays without logs when the log file cannot be created.
fn init_logger(path: &Path) -> Result<()> {
    match File::create(path) {
        Ok(log_file) => WriteLogger::init(LevelFilter::Info, Config::default(), log_file)
            .context("Error initializing logger"),
        Err(_) => Ok(()),
    }
}

fn main() -> Result<()> {
    init_logger(Path::new(LOG_FILE))?;

    let mut game = game::SnakeGame::new();
    let mut term = term::TermManager::new();

    // Restore the terminal whether or not the game loop failed
    let outcome = term.setup().and_then(|()| game.run(&mut term::Keyboard, &mut term));
    let restored = term.restore();
    let score = outcome?;
    restored?;

    info!("Exiting ({:?}) with score {}", game.status(), score);
    println!("Game Over!");
    println!("Your score is: {}", score);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unwritable_log_path_does_not_stop_the_game() {
        assert!(init_logger(Path::new("/nonexistent-snake-dir/snake.log")).is_ok());
    }
}
