use serde::{Deserialize, Serialize};

use crate::*;

/// Everything a running game owns: the grid, the snake, the score, and whether it has ended.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    grid: Grid,
    snake: Snake,
    rules: Rules,
    score: u32,
    game_over: bool,
}

impl GameState {
    /// Starts a game on `board`, dropping the first food cell.
    pub fn new(board: Board, rules: Rules, source: &mut impl IndexSource) -> Result<Self> {
        let Board { mut grid, mut snake } = board;
        place_food(&mut grid, source)?;
        snake.set_direction(Direction::Right);

        Ok(Self {
            grid,
            snake,
            rules,
            score: 0,
            game_over: false,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn rules(&self) -> Rules {
        self.rules
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn view(&self) -> BoardView<'_> {
        BoardView::new(&self.grid, Some(self.snake.head()))
    }

    /// Advances the game by one tick.
    ///
    /// Moves are taken on `(x, y)` coordinates, so stepping past a left or right edge is a wall hit rather than a wrap
    /// into the neighbouring row.
    ///
    /// A wall hit (or leaving the grid) ends the game without touching anything else. Otherwise the tail moves to
    /// the cell ahead of the head; landing on food scores a point, regrows the tail when the rules say so, and drops
    /// new food.
    pub fn tick(&mut self, input: Input, source: &mut impl IndexSource) -> TickOutcome {
        use TickOutcome::*;

        if self.game_over {
            return Ignored;
        }

        if let Some(direction) = input.direction() {
            let reverses = direction == self.snake.direction().opposite() && self.snake.len() > 1;
            if !(self.rules.reversal_guard && reverses) {
                self.snake.set_direction(direction);
            }
        }

        let head = self.snake.head();
        let Some(next) = self.next_index(head) else {
            return self.end_game(HitWall);
        };

        let target = self.grid[next];
        if target.is_wall() {
            return self.end_game(HitWall);
        }
        if self.rules.body_collision && target.is_snake() && next != self.snake.tail() {
            return self.end_game(HitSelf);
        }

        let tail = self.snake.tail();
        self.grid[tail].remove(Cell::SNAKE);
        self.grid[next].insert(Cell::SNAKE);
        let vacated = self.snake.advance(next);
        log::trace!("snake moved {:?} from {} to {}", self.snake.direction(), head, next);

        if !self.grid[next].is_food() {
            return Moved;
        }

        self.grid[next].remove(Cell::FOOD);
        self.score += 1;
        if self.rules.growing {
            self.grid[vacated].insert(Cell::SNAKE);
            self.snake.grow_tail(vacated);
        }

        match place_food(&mut self.grid, source) {
            Ok(_) => Ate,
            Err(_) => self.end_game(BoardFull),
        }
    }

    fn next_index(&self, head: CellIndex) -> Option<CellIndex> {
        let coords = self.grid.coords_of(head)?;
        let next = self.snake.direction().step(coords, self.grid.size())?;
        self.grid.index_of(next)
    }

    fn end_game(&mut self, outcome: TickOutcome) -> TickOutcome {
        self.game_over = true;
        log::info!("game over ({:?}), score {}", outcome, self.score);
        outcome
    }
}
