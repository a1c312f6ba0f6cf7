use super::*;

/// The built-in 20x10 arena: a wall perimeter, a ring of grass just inside it, and the snake at `(2, 2)`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DefaultBoard;

impl DefaultBoard {
    pub const SIZE: Coord2 = (20, 10);
    pub const SNAKE_START: Coord2 = (2, 2);
}

impl BoardSetup for DefaultBoard {
    fn build(self) -> Result<Board> {
        let (width, height) = Self::SIZE;
        let mut grid = Grid::new(Self::SIZE);

        for y in 0..height {
            for x in 0..width {
                let ring = x.min(y).min(width - 1 - x).min(height - 1 - y);
                let cell = match ring {
                    0 => Cell::WALL,
                    1 => Cell::GRASS,
                    _ => Cell::PLAIN,
                };
                if let Some(index) = grid.index_of((x, y)) {
                    grid[index] = cell;
                }
            }
        }

        let head = grid
            .index_of(Self::SNAKE_START)
            .ok_or(GameError::IncorrectDimensions)?;
        grid[head] = Cell::SNAKE;
        log::debug!("built default {}x{} board", width, height);

        Ok(Board {
            grid,
            snake: Snake::new(head, Direction::Right),
        })
    }
}
