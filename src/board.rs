use crate::{Coord, Coords};

use rand::Rng;

const SNAKE_BODY_CHAR: char = 'O';
const EMPTY_CHAR: char = ' ';
const BORDER_CHAR: char = '#';
const FOOD_CHAR: char = '*';

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Border,
    Food,
    SnakeBody,
}

impl Cell {
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => EMPTY_CHAR,
            Cell::Border => BORDER_CHAR,
            Cell::Food => FOOD_CHAR,
            Cell::SnakeBody => SNAKE_BODY_CHAR,
        }
    }
}

/// Row-major grid with a one cell wide wall around the play area.
pub struct Board {
    width: Coord,
    height: Coord,
    cells: Vec<Cell>,
}

impl Board {
    pub fn generate(width: Coord, height: Coord) -> Self {
        assert!(width >= 3 && height >= 3, "board must be at least 3x3");

        let mut cells = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                let on_edge = y == 0 || y == height - 1 || x == 0 || x == width - 1;
                cells.push(if on_edge { Cell::Border } else { Cell::Empty });
            }
        }

        Board { width, height, cells }
    }

    pub fn width(&self) -> Coord {
        self.width
    }

    pub fn height(&self) -> Coord {
        self.height
    }

    /// `None` outside the grid.
    pub fn get(&self, pos: Coords) -> Option<Cell> {
        self.index(pos).map(|i| self.cells[i])
    }

    pub fn is_interior(&self, pos: Coords) -> bool {
        pos.0 > 0 && pos.0 < self.width - 1 && pos.1 > 0 && pos.1 < self.height - 1
    }

    /// Writes outside the grid are ignored.
    pub fn set(&mut self, pos: Coords, cell: Cell) {
        if let Some(i) = self.index(pos) {
            self.cells[i] = cell;
        }
    }

    pub fn clear_cell(&mut self, pos: Coords) {
        self.set(pos, Cell::Empty);
    }

    /// Old positions are left as they are; clear them first.
    pub fn mark_snake(&mut self, segments: &[Coords]) {
        for pos in segments {
            self.set(*pos, Cell::SnakeBody);
        }
    }

    /// Drops food on a random interior cell that is neither drawn as snake
    /// nor listed in `occupied`. Returns `None` when no such cell is left.
    pub fn place_food<R: Rng>(&mut self, rng: &mut R, occupied: &[Coords]) -> Option<Coords> {
        let is_free = |board: &Board, pos: Coords| {
            board.get(pos) != Some(Cell::SnakeBody) && !occupied.contains(&pos)
        };

        let any_free = (1..self.height - 1)
            .flat_map(|y| (1..self.width - 1).map(move |x| (x, y)))
            .any(|pos| is_free(self, pos));
        if !any_free {
            return None;
        }

        loop {
            let pos = (rng.gen_range(1..self.width - 1), rng.gen_range(1..self.height - 1));
            if is_free(self, pos) {
                self.set(pos, Cell::Food);
                return Some(pos);
            }
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        self.cells
            .chunks(self.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect())
    }

    ///////////////////////////////////////////////////////////////////////////

    fn index(&self, (x, y): Coords) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            None
        } else {
            Some(y as usize * self.width as usize + x as usize)
        }
    }
}
