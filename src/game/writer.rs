use super::GameDocument;
use crate::error::Result;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::io;
use std::path::Path;

/// Write a game document as pretty-printed JSON.
///
/// Matches the shipped data files: 4-space indentation, UTF-8 text left
/// unescaped.
pub fn write_game<W: io::Write>(writer: W, document: &GameDocument) -> Result<()> {
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
    document.serialize(&mut serializer)?;
    Ok(())
}

/// Write a game document to a JSON file.
pub fn write_game_file(path: &Path, document: &GameDocument) -> Result<()> {
    let file = std::fs::File::create(path)?;
    let mut writer = io::BufWriter::new(file);
    write_game(&mut writer, document)?;
    io::Write::flush(&mut writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::builder::build_document;
    use crate::card::read_card;
    use crate::game::reader::read_game;

    fn sample_document() -> GameDocument {
        let sheet = read_card(
            "Player,team_Rapid,country_Romania\nIon Popescu,1,0\n".as_bytes(),
        )
        .unwrap();
        build_document(&sheet, 1003)
    }

    #[test]
    fn test_written_document_reads_back() {
        let document = sample_document();
        let mut buffer = Vec::new();
        write_game(&mut buffer, &document).unwrap();

        let parsed = read_game(&buffer[..]).unwrap();
        assert_eq!(parsed, document);
    }

    #[test]
    fn test_output_shape_and_indentation() {
        let document = sample_document();
        let mut buffer = Vec::new();
        write_game(&mut buffer, &document).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.starts_with("{\n    \"gameData\""));
        // Remit entries stay wrapped in single-element groups
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        let remit = &value["gameData"]["remit"];
        assert!(remit[0].is_array());
        assert_eq!(remit[0].as_array().unwrap().len(), 1);
        assert_eq!(remit[0][0]["id"], "1003_1");
        assert_eq!(remit[0][0]["type"], 2);
    }

    #[test]
    fn test_unicode_left_unescaped() {
        let mut document = sample_document();
        document.game_data.players[0].f = "Bălțați".into();
        let mut buffer = Vec::new();
        write_game(&mut buffer, &document).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("Bălțați"));
        assert!(!text.contains("\\u"));
    }
}
