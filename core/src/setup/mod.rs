use crate::*;
pub use compressed::*;
pub use default::*;

mod compressed;
mod default;

/// A way of producing the starting grid and snake.
pub trait BoardSetup {
    fn build(self) -> Result<Board>;
}
