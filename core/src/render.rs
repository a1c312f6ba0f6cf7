use core::fmt;

use crate::*;

/// Text rendering of a grid, one glyph per cell and one line per row.
#[derive(Copy, Clone, Debug)]
pub struct BoardView<'a> {
    grid: &'a Grid,
    head: Option<CellIndex>,
}

impl<'a> BoardView<'a> {
    pub fn new(grid: &'a Grid, head: Option<CellIndex>) -> Self {
        Self { grid, head }
    }

    pub fn glyph(&self, index: CellIndex) -> char {
        let Some(cell) = self.grid.get(index) else {
            return ' ';
        };
        if self.head == Some(index) {
            '@'
        } else {
            glyph(cell)
        }
    }
}

/// Glyph for a cell, by precedence snake > wall > food > grass.
pub fn glyph(cell: Cell) -> char {
    if cell.is_snake() {
        'o'
    } else if cell.is_wall() {
        '#'
    } else if cell.is_food() {
        '*'
    } else if cell.is_grass() {
        ','
    } else {
        ' '
    }
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = usize::from(self.grid.width());
        for index in 0..self.grid.len() {
            write!(f, "{}", self.glyph(index))?;
            if (index + 1) % width == 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", BoardView::new(self, None))
    }
}
