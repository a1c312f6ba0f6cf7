use alloc::vec::Vec;
use core::iter;
use core::str::FromStr;

use super::*;

/// Run-length encoded board, e.g. `B3x3|W3|W1S1W1|W3`.
///
/// The header is `B<height>x<width>`, followed by one `|`-separated token per row. Each row is a sequence of runs, a
/// flag letter (`E`mpty, `W`all, `G`rass, `S`nake) followed by the decimal number of cells it covers. Exactly one
/// snake cell must appear on the whole board.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CompressedBoard<'a>(pub &'a str);

const ROW_DELIMITER: char = '|';

impl BoardSetup for CompressedBoard<'_> {
    fn build(self) -> Result<Board> {
        // empty tokens from `||` or a trailing `|` are skipped
        let mut tokens = self.0.trim().split(ROW_DELIMITER).filter(|token| !token.is_empty());
        let (width, height) = parse_header(tokens.next().unwrap_or_default())?;

        let rows: Vec<&str> = tokens.collect();
        if rows.len() != usize::from(height) {
            return Err(GameError::IncorrectDimensions);
        }

        // cells are only turned into a grid once every row checks out
        let mut decoder = RowDecoder {
            width: width.into(),
            cells: Vec::with_capacity(mult(width, height)),
            snake_count: 0,
            snake_at: None,
        };
        for row in rows {
            decoder.decode_row(row)?;
        }

        let head = match decoder.snake_at {
            Some(head) if decoder.snake_count == 1 => head,
            _ => return Err(GameError::WrongSnakeCount(decoder.snake_count)),
        };
        let grid = Grid::from_cells((width, height), decoder.cells)?;
        log::debug!("decompressed {}x{} board, snake at {}", width, height, head);

        Ok(Board {
            grid,
            snake: Snake::new(head, Direction::Right),
        })
    }
}

impl FromStr for Board {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        CompressedBoard(s).build()
    }
}

/// Parses `B<height>x<width>` into `(width, height)`.
fn parse_header(header: &str) -> Result<Coord2> {
    let (height, width) = header
        .strip_prefix('B')
        .and_then(|dims| dims.split_once('x'))
        .ok_or(GameError::IncorrectDimensions)?;

    let parse = |dim: &str| match dim.parse::<Coord>() {
        Ok(dim) if dim > 0 => Ok(dim),
        _ => Err(GameError::IncorrectDimensions),
    };
    Ok((parse(width)?, parse(height)?))
}

struct RowDecoder {
    width: usize,
    cells: Vec<Cell>,
    snake_count: usize,
    snake_at: Option<CellIndex>,
}

impl RowDecoder {
    fn decode_row(&mut self, row: &str) -> Result<()> {
        let row_start = self.cells.len();
        let mut flag = None;
        let mut chars = row.char_indices().peekable();

        while let Some((start, c)) = chars.next() {
            if !c.is_ascii_digit() {
                flag = Some(Cell::from_run_letter(c).ok_or(GameError::BadChar(c))?);
                continue;
            }

            let mut end = start + 1;
            while let Some(&(i, next)) = chars.peek() {
                if !next.is_ascii_digit() {
                    break;
                }
                end = i + 1;
                chars.next();
            }

            let cell = flag.ok_or(GameError::BadChar(c))?;
            let run: usize = row[start..end]
                .parse()
                .map_err(|_| GameError::IncorrectDimensions)?;

            let column = self.cells.len() - row_start;
            if column.checked_add(run).is_none_or(|end| end > self.width) {
                return Err(GameError::IncorrectDimensions);
            }

            if cell == Cell::SNAKE {
                self.snake_count = self.snake_count.saturating_add(run);
                if self.snake_count != 1 {
                    return Err(GameError::WrongSnakeCount(self.snake_count));
                }
                self.snake_at = Some(self.cells.len());
            }
            self.cells.extend(iter::repeat(cell).take(run));
        }

        if self.cells.len() - row_start != self.width {
            return Err(GameError::IncorrectDimensions);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decompress(s: &str) -> Result<Board> {
        CompressedBoard(s).build()
    }

    #[test]
    fn walled_three_by_three() {
        let board = decompress("B3x3|W3|W1S1W1|W3").unwrap();

        assert_eq!(board.grid.size(), (3, 3));
        assert_eq!(board.grid.len(), 9);
        for index in [0, 1, 2, 3, 5, 6, 7, 8] {
            assert_eq!(board.grid[index], Cell::WALL, "index {index}");
        }
        assert_eq!(board.grid[4], Cell::SNAKE);
        assert_eq!(board.snake.head(), 4);
        assert_eq!(board.snake.len(), 1);
        assert_eq!(board.snake.direction(), Direction::Right);
    }

    #[test]
    fn height_comes_before_width() {
        let board = decompress("B2x4|W4|E1G2S1").unwrap();

        assert_eq!(board.grid.size(), (4, 2));
        assert_eq!(board.grid[5], Cell::GRASS);
        assert_eq!(board.grid[6], Cell::GRASS);
        assert_eq!(board.snake.head(), 7);
    }

    #[test]
    fn multi_digit_runs() {
        let board = decompress("B3x12|W12|W1E4S1E5W1|W12").unwrap();

        assert_eq!(board.grid.size(), (12, 3));
        assert_eq!(board.snake.head(), 12 + 5);
        assert_eq!(board.grid.count(Cell::WALL), 26);
    }

    #[test]
    fn missing_snake() {
        assert_eq!(
            decompress("B3x3|W3|W1W1W1|W3").unwrap_err(),
            GameError::WrongSnakeCount(0)
        );
    }

    #[test]
    fn two_snake_cells() {
        assert_eq!(
            decompress("B3x4|W4|S2W2|W4").unwrap_err(),
            GameError::WrongSnakeCount(2)
        );
        assert_eq!(
            decompress("B3x3|S1W2|W3|W2S1").unwrap_err(),
            GameError::WrongSnakeCount(2)
        );
    }

    #[test]
    fn short_row() {
        assert_eq!(
            decompress("B3x3|W3|W1S1|W3").unwrap_err(),
            GameError::IncorrectDimensions
        );
    }

    #[test]
    fn overlong_row() {
        assert_eq!(
            decompress("B3x3|W3|W1S1W2|W3").unwrap_err(),
            GameError::IncorrectDimensions
        );
    }

    #[test]
    fn row_count_mismatch() {
        assert_eq!(
            decompress("B4x3|W3|W1S1W1|W3").unwrap_err(),
            GameError::IncorrectDimensions
        );
        assert_eq!(
            decompress("B2x3|W3|W1S1W1|W3").unwrap_err(),
            GameError::IncorrectDimensions
        );
    }

    #[test]
    fn bad_flag_letter() {
        assert_eq!(
            decompress("B3x3|W3|W1X1W1|W3").unwrap_err(),
            GameError::BadChar('X')
        );
        assert_eq!(
            decompress("B3x3|W3|w1S1W1|W3").unwrap_err(),
            GameError::BadChar('w')
        );
    }

    #[test]
    fn count_without_letter() {
        assert_eq!(
            decompress("B3x3|W3|3|W3").unwrap_err(),
            GameError::BadChar('3')
        );
    }

    #[test]
    fn malformed_header() {
        for input in ["3x3|W3|W1S1W1|W3", "B3|W3|W1S1W1|W3", "B0x3|", "Bax3|W3|W1S1W1|W3"] {
            assert_eq!(
                decompress(input).unwrap_err(),
                GameError::IncorrectDimensions,
                "{input}"
            );
        }
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let board = decompress("  B3x3|W3|W1S1W1|W3\n").unwrap();

        assert_eq!(board.snake.head(), 4);
    }

    #[test]
    fn empty_row_tokens_are_skipped() {
        for input in ["B3x3|W3|W1S1W1|W3|", "B3x3|W3||W1S1W1|W3"] {
            let board = decompress(input).unwrap();

            assert_eq!(board.grid.size(), (3, 3), "{input}");
            assert_eq!(board.snake.head(), 4, "{input}");
        }
    }

    #[test]
    fn from_str_decompresses() {
        let board: Board = "B1x2|S1E1".parse().unwrap();

        assert_eq!(board.grid[0], Cell::SNAKE);
        assert_eq!(board.grid[1], Cell::PLAIN);
    }
}
