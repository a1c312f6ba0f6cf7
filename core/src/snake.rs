use alloc::collections::VecDeque;
use serde::{Deserialize, Serialize};

use crate::*;

/// Positions occupied by the snake, head at the front and tail at the back.
///
/// The body is never empty: it is created with a head and only ever shifts or grows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snake {
    direction: Direction,
    body: VecDeque<CellIndex>,
}

impl Snake {
    pub fn new(head: CellIndex, direction: Direction) -> Self {
        Self {
            direction,
            body: VecDeque::from([head]),
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    pub fn head(&self) -> CellIndex {
        *self.body.front().expect("snake body should not be empty")
    }

    pub fn tail(&self) -> CellIndex {
        *self.body.back().expect("snake body should not be empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn contains(&self, index: CellIndex) -> bool {
        self.body.contains(&index)
    }

    /// Iterates from head to tail.
    pub fn iter(&self) -> impl Iterator<Item = CellIndex> + '_ {
        self.body.iter().copied()
    }

    /// Pushes `head` to the front and drops the tail, returning the vacated tail index.
    pub fn advance(&mut self, head: CellIndex) -> CellIndex {
        self.body.push_front(head);
        self.body
            .pop_back()
            .expect("snake body should not be empty after push")
    }

    /// Re-attaches `index` behind the current tail.
    pub fn grow_tail(&mut self, index: CellIndex) {
        self.body.push_back(index);
    }
}
