use serde::{Deserialize, Serialize};

/// Single coordinate axis used for board width, height, and positions.
pub type Coord = u16;

/// Flat row-major index into a grid (`y * width + x`).
pub type CellIndex = usize;

/// Two-dimensional coordinates `(x, y)`.
pub type Coord2 = (Coord, Coord);

pub const fn mult(a: Coord, b: Coord) -> usize {
    (a as usize) * (b as usize)
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const fn opposite(self) -> Self {
        use Direction::*;
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }

    const fn delta(self) -> (i8, i8) {
        use Direction::*;
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }

    /// Steps `coords` one cell in this direction, returning a value only when it remains in `bounds`.
    pub fn step(self, coords: Coord2, bounds: Coord2) -> Option<Coord2> {
        let (x, y) = coords;
        let (dx, dy) = self.delta();
        let (max_x, max_y) = bounds;

        let next_x = x.checked_add_signed(dx.into())?;
        if next_x >= max_x {
            return None;
        }

        let next_y = y.checked_add_signed(dy.into())?;
        if next_y >= max_y {
            return None;
        }

        Some((next_x, next_y))
    }
}

impl Default for Direction {
    fn default() -> Self {
        Self::Right
    }
}

/// Per-tick input supplied by the driver.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Input {
    Up,
    Down,
    Left,
    Right,
    None,
}

impl Input {
    pub const fn direction(self) -> Option<Direction> {
        match self {
            Self::Up => Some(Direction::Up),
            Self::Down => Some(Direction::Down),
            Self::Left => Some(Direction::Left),
            Self::Right => Some(Direction::Right),
            Self::None => None,
        }
    }

    /// Parses a single move character: `U D L R` (either case), `.` for no input.
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'U' | 'u' => Some(Self::Up),
            'D' | 'd' => Some(Self::Down),
            'L' | 'l' => Some(Self::Left),
            'R' | 'r' => Some(Self::Right),
            '.' => Some(Self::None),
            _ => None,
        }
    }
}

impl From<Direction> for Input {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Up => Self::Up,
            Direction::Down => Self::Down,
            Direction::Left => Self::Left,
            Direction::Right => Self::Right,
        }
    }
}

impl Default for Input {
    fn default() -> Self {
        Self::None
    }
}
