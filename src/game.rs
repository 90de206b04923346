use std::{thread::sleep, time::Duration};

use crate::action::{is_allowed, Action, Axis, ALLOWED_ACTIONS};
use crate::board::{Board, Cell};
use crate::snake::Snake;
use crate::{Coord, Coords};

use anyhow::Result;
use log::{debug, info};
use rand::{rngs::StdRng, SeedableRng};

pub const BOARD_WIDTH: Coord = 64;
pub const BOARD_HEIGHT: Coord = BOARD_WIDTH / 4;
const START_POS: Coords = (1, 1);
const START_DIRECTION: Action = Action::Right;

// Terminal cells are taller than they are wide, so vertical steps wait longer
const REFRESH_TIME_X: Duration = Duration::from_millis(60);
const REFRESH_TIME_Y: Duration = Duration::from_millis(90);

/// Non-blocking key source. `None` means nothing was pressed this tick.
pub trait KeyInput {
    fn poll_key(&mut self) -> Result<Option<char>>;
}

pub trait Display {
    fn draw(&mut self, board: &Board) -> Result<()>;
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameOverReason {
    Quit,
    HitWall,
    HitSelf,
    BoardFull,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Status {
    Running,
    GameOver(GameOverReason),
}

pub struct SnakeGame {
    board: Board,
    snake: Snake,
    food: Option<Coords>,
    direction: Action,
    refresh: Duration,
    score: u32,
    status: Status,
    rng: StdRng,
}

impl SnakeGame {
    pub fn new() -> Self {
        SnakeGame::with_rng(BOARD_WIDTH, BOARD_HEIGHT, StdRng::from_entropy())
    }

    pub fn with_rng(width: Coord, height: Coord, mut rng: StdRng) -> Self {
        let mut board = Board::generate(width, height);
        let snake = Snake::new(START_POS);

        let food = board.place_food(&mut rng, snake.body());
        board.mark_snake(snake.body());

        let status = match food {
            Some(_) => Status::Running,
            None => Status::GameOver(GameOverReason::BoardFull),
        };

        SnakeGame {
            board,
            snake,
            food,
            direction: START_DIRECTION,
            refresh: REFRESH_TIME_X,
            score: 0,
            status,
            rng,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Draws the starting frame, then ticks and redraws until the game is
    /// over. Returns the final score.
    pub fn run<I: KeyInput, D: Display>(&mut self, input: &mut I, display: &mut D) -> Result<u32> {
        info!("Starting game on a {}x{} board", self.board.width(), self.board.height());

        display.draw(&self.board)?;
        sleep(self.refresh);

        while self.status == Status::Running {
            self.step(input)?;
            display.draw(&self.board)?;
            sleep(self.refresh);
        }

        Ok(self.score)
    }

    /// Advances the game by one tick. The order matters: the tail cell is
    /// erased and the body shifted before the head moves, and the head is
    /// tested against last frame's board before food is considered.
    pub fn step<I: KeyInput>(&mut self, input: &mut I) -> Result<Status> {
        if self.status != Status::Running {
            return Ok(self.status);
        }

        self.board.clear_cell(self.snake.tail());
        self.snake.shift_body();

        let action = Action::from_key(input.poll_key()?);
        if is_allowed(action, &ALLOWED_ACTIONS) {
            if let Some(action) = action {
                self.commit(action);
            }
        }

        match self.direction.delta() {
            None => self.end(GameOverReason::Quit),
            Some(delta) => {
                self.refresh = match self.direction.axis() {
                    Some(Axis::Vertical) => REFRESH_TIME_Y,
                    _ => REFRESH_TIME_X,
                };
                self.snake.move_head(delta);

                if let Some(reason) = self.collision() {
                    self.end(reason);
                } else if Some(self.snake.head()) == self.food {
                    self.eat();
                }
            }
        }

        // A head that ran into the wall is never drawn over the border
        if self.board.is_interior(self.snake.head()) {
            self.board.mark_snake(self.snake.body());
        }

        Ok(self.status)
    }

    ///////////////////////////////////////////////////////////////////////////

    fn commit(&mut self, action: Action) {
        if action != self.direction {
            debug!("Direction {:?} -> {:?}", self.direction, action);
        }
        self.direction = action;
    }

    fn collision(&self) -> Option<GameOverReason> {
        let head = self.snake.head();

        if !self.board.is_interior(head) {
            Some(GameOverReason::HitWall)
        } else if self.board.get(head) == Some(Cell::SnakeBody) {
            Some(GameOverReason::HitSelf)
        } else {
            None
        }
    }

    fn eat(&mut self) {
        self.score += 1;
        self.snake.grow();
        self.food = self.board.place_food(&mut self.rng, self.snake.body());

        match self.food {
            Some(food) => debug!("Ate food, score {}, new food at {:?}", self.score, food),
            None => self.end(GameOverReason::BoardFull),
        }
    }

    fn end(&mut self, reason: GameOverReason) {
        info!("Game over ({:?}): score {}, length {}", reason, self.score, self.snake.len());
        self.status = Status::GameOver(reason);
    }
}
