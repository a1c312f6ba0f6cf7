use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board dimensions do not match the declared size")]
    IncorrectDimensions,
    #[error("Unexpected character {0:?} in board string")]
    BadChar(char),
    #[error("Board must contain exactly one snake cell, found {0}")]
    WrongSnakeCount(usize),
    #[error("No free cell left to place food")]
    BoardFull,
}

pub type Result<T> = core::result::Result<T, GameError>;
