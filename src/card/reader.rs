use crate::error::{BingoError, Result};
use csv::ReaderBuilder;
use std::io;
use std::path::Path;

/// Column holding the player name; everything else is a category flag.
const PLAYER_COLUMN: &str = "Player";

/// Data extracted from a bingo card CSV sheet.
///
/// The header row becomes `columns`; each data row is padded or truncated
/// to the same width so cells can be addressed by column index.
#[derive(Debug, Default)]
pub struct CardSheet {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
    player_index: usize,
}

impl CardSheet {
    /// The player name cell of a row.
    pub fn player_name<'a>(&self, row: &'a [String]) -> &'a str {
        row.get(self.player_index).map(String::as_str).unwrap_or("")
    }

    /// Category columns (everything except `Player`) with their column index,
    /// in sheet order.
    pub fn category_columns(&self) -> impl Iterator<Item = (usize, &str)> {
        self.columns
            .iter()
            .enumerate()
            .filter(|&(index, _)| index != self.player_index)
            .map(|(index, column)| (index, column.as_str()))
    }
}

/// Read a card sheet from CSV content.
pub fn read_card<R: io::Read>(reader: R) -> Result<CardSheet> {
    let mut csv_reader = ReaderBuilder::new().flexible(true).from_reader(reader);

    let columns: Vec<String> = csv_reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let player_index = columns
        .iter()
        .position(|column| column == PLAYER_COLUMN)
        .ok_or(BingoError::MissingPlayerColumn)?;

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let mut row: Vec<String> = record.iter().map(String::from).collect();
        // Short rows read as missing flags, long rows as stray cells
        row.resize(columns.len(), String::new());
        rows.push(row);
    }

    Ok(CardSheet {
        columns,
        rows,
        player_index,
    })
}

/// Read a card sheet from a CSV file.
pub fn read_card_file(path: &Path) -> Result<CardSheet> {
    let file = std::fs::File::open(path)?;
    read_card(io::BufReader::new(file))
}
