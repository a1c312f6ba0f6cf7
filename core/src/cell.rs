use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Contents of a single board cell. Flags are independent; `PLAIN` is the empty set.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct Cell: u8 {
        const SNAKE = 1;
        const WALL  = 1 << 1;
        const FOOD  = 1 << 2;
        const GRASS = 1 << 3;
    }
}

impl Cell {
    pub const PLAIN: Self = Self::empty();

    pub const fn is_plain(self) -> bool {
        self.is_empty()
    }

    pub const fn is_snake(self) -> bool {
        self.contains(Self::SNAKE)
    }

    pub const fn is_wall(self) -> bool {
        self.contains(Self::WALL)
    }

    pub const fn is_food(self) -> bool {
        self.contains(Self::FOOD)
    }

    pub const fn is_grass(self) -> bool {
        self.contains(Self::GRASS)
    }

    /// Whether food may be dropped here: exactly plain, or exactly grass.
    pub fn accepts_food(self) -> bool {
        self == Self::PLAIN || self == Self::GRASS
    }

    /// Maps a board-string run letter to its cell.
    pub const fn from_run_letter(c: char) -> Option<Self> {
        match c {
            'E' => Some(Self::PLAIN),
            'W' => Some(Self::WALL),
            'G' => Some(Self::GRASS),
            'S' => Some(Self::SNAKE),
            _ => None,
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::PLAIN
    }
}
