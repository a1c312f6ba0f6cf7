#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use food::*;
pub use grid::*;
pub use render::*;
pub use setup::*;
pub use snake::*;
pub use types::*;

mod cell;
mod engine;
mod error;
mod food;
mod grid;
mod render;
mod setup;
mod snake;
mod types;

/// Starting grid together with the snake placed on it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub grid: Grid,
    pub snake: Snake,
}

/// Gameplay switches. The defaults match the classic rules: eating grows the snake, and neither running into its own
/// body nor reversing onto its neck is prevented.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rules {
    /// Eating extends the snake by one cell instead of only moving it.
    pub growing: bool,
    /// Moving onto a body cell (other than the tail being vacated) ends the game.
    pub body_collision: bool,
    /// Input pointing straight back at the neck is ignored.
    pub reversal_guard: bool,
}

impl Rules {
    pub const fn classic() -> Self {
        Self {
            growing: true,
            body_collision: false,
            reversal_guard: false,
        }
    }

    pub const fn with_growing(mut self, growing: bool) -> Self {
        self.growing = growing;
        self
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::classic()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickOutcome {
    /// The game was already over.
    Ignored,
    Moved,
    Ate,
    HitWall,
    HitSelf,
    /// Food was eaten but no free cell is left for the next one.
    BoardFull,
}

impl TickOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::Ignored)
    }

    pub const fn ends_game(self) -> bool {
        matches!(self, Self::HitWall | Self::HitSelf | Self::BoardFull)
    }
}
