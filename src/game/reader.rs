use super::GameDocument;
use crate::error::Result;
use std::io;
use std::path::Path;

/// Parse a game document from JSON content. Unknown fields are ignored.
pub fn read_game<R: io::Read>(reader: R) -> Result<GameDocument> {
    Ok(serde_json::from_reader(reader)?)
}

/// Read a game document from a JSON file.
pub fn read_game_file(path: &Path) -> Result<GameDocument> {
    let file = std::fs::File::open(path)?;
    read_game(io::BufReader::new(file))
}
