pub mod reader;

pub use reader::{read_card, read_card_file, CardSheet};
