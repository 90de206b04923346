use crate::Coords;
use Action::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Exit,
    Up,
    Down,
    Left,
    Right,
}

pub const ALLOWED_ACTIONS: [Action; 5] = [Exit, Up, Down, Left, Right];

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Action {
    /// Maps a key to its action. Unknown keys and "no key this tick" both
    /// resolve to `None`.
    pub fn from_key(key: Option<char>) -> Option<Action> {
        match key? {
            'x' => Some(Exit),
            'w' => Some(Up),
            'a' => Some(Left),
            's' => Some(Down),
            'd' => Some(Right),
            _ => None,
        }
    }

    /// Unit step applied to the head, `None` for `Exit`.
    pub fn delta(self) -> Option<Coords> {
        match self {
            Exit => None,
            Up => Some((0, -1)),
            Down => Some((0, 1)),
            Left => Some((-1, 0)),
            Right => Some((1, 0)),
        }
    }

    pub fn axis(self) -> Option<Axis> {
        match self {
            Exit => None,
            Up | Down => Some(Axis::Vertical),
            Left | Right => Some(Axis::Horizontal),
        }
    }
}

pub fn is_allowed(action: Option<Action>, allowed: &[Action]) -> bool {
    match action {
        Some(action) => allowed.contains(&action),
        None => false,
    }
}
