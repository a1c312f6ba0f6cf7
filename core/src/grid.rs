use alloc::vec::Vec;
use core::ops::{Index, IndexMut};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Flat cell store, addressed row-major by [`CellIndex`].
///
/// The grid does not enforce a wall perimeter; that is up to whoever built it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    /// Indexed as `[y, x]`, so iteration order matches flat indices.
    cells: Array2<Cell>,
}

impl Grid {
    pub fn new((width, height): Coord2) -> Self {
        Self {
            cells: Array2::default([usize::from(height), usize::from(width)]),
        }
    }

    /// Builds a grid from row-major cells, failing when the count does not match the size.
    pub fn from_cells((width, height): Coord2, cells: Vec<Cell>) -> Result<Self> {
        let cells = Array2::from_shape_vec([usize::from(height), usize::from(width)], cells)
            .map_err(|_| GameError::IncorrectDimensions)?;
        Ok(Self { cells })
    }

    pub fn width(&self) -> Coord {
        // dimensions always come from a `Coord`
        self.cells.ncols() as Coord
    }

    pub fn height(&self) -> Coord {
        self.cells.nrows() as Coord
    }

    pub fn size(&self) -> Coord2 {
        (self.width(), self.height())
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn coords_of(&self, index: CellIndex) -> Option<Coord2> {
        if index >= self.len() {
            return None;
        }
        let width = usize::from(self.width());
        Some(((index % width) as Coord, (index / width) as Coord))
    }

    pub fn index_of(&self, (x, y): Coord2) -> Option<CellIndex> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(usize::from(y) * usize::from(self.width()) + usize::from(x))
    }

    pub fn get(&self, index: CellIndex) -> Option<Cell> {
        let (x, y) = self.coords_of(index)?;
        self.cells.get([usize::from(y), usize::from(x)]).copied()
    }

    pub fn get_mut(&mut self, index: CellIndex) -> Option<&mut Cell> {
        let (x, y) = self.coords_of(index)?;
        self.cells.get_mut([usize::from(y), usize::from(x)])
    }

    /// Overwrites the cell, returning `false` when `index` is out of bounds.
    pub fn set(&mut self, index: CellIndex, cell: Cell) -> bool {
        match self.get_mut(index) {
            Some(slot) => {
                *slot = cell;
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    pub fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = Cell> + '_> + '_ {
        self.cells.rows().into_iter().map(|row| row.into_iter().copied())
    }

    /// Number of cells that carry every flag in `flags`.
    pub fn count(&self, flags: Cell) -> usize {
        self.iter().filter(|cell| cell.contains(flags)).count()
    }

    pub fn indices_where(&self, pred: impl Fn(Cell) -> bool) -> impl Iterator<Item = CellIndex> {
        self.iter()
            .enumerate()
            .filter(move |&(_, cell)| pred(cell))
            .map(|(index, _)| index)
    }
}

impl Index<CellIndex> for Grid {
    type Output = Cell;

    fn index(&self, index: CellIndex) -> &Self::Output {
        let width = usize::from(self.width());
        &self.cells[[index / width, index % width]]
    }
}

impl IndexMut<CellIndex> for Grid {
    fn index_mut(&mut self, index: CellIndex) -> &mut Self::Output {
        let width = usize::from(self.width());
        &mut self.cells[[index / width, index % width]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn flat_indices_are_row_major() {
        let grid = Grid::new((4, 3));

        assert_eq!(grid.len(), 12);
        assert_eq!(grid.index_of((0, 0)), Some(0));
        assert_eq!(grid.index_of((3, 0)), Some(3));
        assert_eq!(grid.index_of((0, 1)), Some(4));
        assert_eq!(grid.index_of((3, 2)), Some(11));
        assert_eq!(grid.index_of((4, 0)), None);
        assert_eq!(grid.coords_of(6), Some((2, 1)));
        assert_eq!(grid.coords_of(12), None);
    }

    #[test]
    fn get_and_set_respect_bounds() {
        let mut grid = Grid::new((2, 2));

        assert!(grid.set(3, Cell::WALL));
        assert!(!grid.set(4, Cell::WALL));
        assert_eq!(grid.get(3), Some(Cell::WALL));
        assert_eq!(grid.get(4), None);
        assert_eq!(grid[3], Cell::WALL);
        assert_eq!(grid[0], Cell::PLAIN);
    }

    #[test]
    fn from_cells_checks_length() {
        let cells = vec![Cell::PLAIN; 6];

        assert!(Grid::from_cells((3, 2), cells.clone()).is_ok());
        assert_eq!(
            Grid::from_cells((4, 2), cells),
            Err(GameError::IncorrectDimensions)
        );
    }

    #[test]
    fn rows_follow_index_order() {
        let mut grid = Grid::new((3, 2));
        grid[4] |= Cell::FOOD;

        let second: Vec<Cell> = grid.rows().nth(1).unwrap().collect();

        assert_eq!(second, vec![Cell::PLAIN, Cell::FOOD, Cell::PLAIN]);
        assert_eq!(grid.count(Cell::FOOD), 1);
        assert_eq!(grid.indices_where(Cell::is_food).collect::<Vec<_>>(), vec![4]);
    }
}
