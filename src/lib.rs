pub mod card;
pub mod error;
pub mod game;
pub mod model;
pub mod roster;

pub use error::{BingoError, Result};
pub use model::*;
