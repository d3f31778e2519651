use crate::error::Result;
use crate::game::{reader, GameDocument};
use log::warn;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

/// A game document paired with the label of the file it came from
/// (the file stem, naming the bingo card the players belong to).
#[derive(Debug)]
pub struct LabeledDocument {
    pub label: String,
    pub document: GameDocument,
}

/// List the `*.json` files in a directory, sorted by file name so repeated
/// runs resolve duplicate player IDs the same way.
pub fn list_game_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

/// Read every game document in a directory. Files that fail to parse or
/// lack the expected structure are logged and skipped; the scan continues.
pub fn load_documents(dir: &Path) -> Result<Vec<LabeledDocument>> {
    let mut documents = Vec::new();
    for path in list_game_files(dir)? {
        let label = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();

        match reader::read_game_file(&path) {
            Ok(document) => documents.push(LabeledDocument { label, document }),
            Err(e) => warn!("Error processing {}: {}", path.display(), e),
        }
    }
    Ok(documents)
}

/// Aggregate players from many documents into an ID → display-name map.
/// When the same ID appears in several documents, the last one wins.
pub fn player_directory(documents: &[LabeledDocument]) -> HashMap<String, String> {
    let mut directory = HashMap::new();
    for labeled in documents {
        for player in &labeled.document.game_data.players {
            directory.insert(player.id.clone(), player.directory_name());
        }
    }
    directory
}

/// Directory entries ordered for the report and CSV output: IDs that parse
/// as integers come first, by value; the rest follow lexicographically.
pub fn sorted_directory(directory: &HashMap<String, String>) -> Vec<(&str, &str)> {
    let mut entries: Vec<(&str, &str)> = directory
        .iter()
        .map(|(id, name)| (id.as_str(), name.as_str()))
        .collect();
    entries.sort_by(|(a, _), (b, _)| id_sort_key(a).cmp(&id_sort_key(b)));
    entries
}

fn id_sort_key(id: &str) -> (u8, i64, &str) {
    match id.parse::<i64>() {
        Ok(n) => (0, n, id),
        Err(_) => (1, 0, id),
    }
}

/// Write the player directory as a two-column CSV.
pub fn write_players_csv<W: io::Write>(writer: W, entries: &[(&str, &str)]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["ID", "Name"])?;
    for (id, name) in entries {
        csv_writer.write_record([id, name])?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// One row of the flattened roster output.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterRow {
    pub id: String,
    pub full_name: String,
    pub card: String,
}

/// Flatten every document's player list into roster rows, in document-then-
/// player order. No de-duplication: a player appearing on two cards yields
/// two rows.
pub fn flatten_rosters(documents: &[LabeledDocument]) -> Vec<RosterRow> {
    let mut rows = Vec::new();
    for labeled in documents {
        for player in &labeled.document.game_data.players {
            rows.push(RosterRow {
                id: player.id.clone(),
                full_name: player.full_name(),
                card: labeled.label.clone(),
            });
        }
    }
    rows
}

/// Write roster rows as a three-column CSV.
pub fn write_roster_csv<W: io::Write>(writer: W, rows: &[RosterRow]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["Player ID", "Full Name", "Bingo Card"])?;
    for row in rows {
        csv_writer.write_record([&row.id, &row.full_name, &row.card])?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameData;
    use crate::model::Player;
    use std::fs;

    fn document(players: Vec<Player>) -> GameDocument {
        GameDocument {
            game_data: GameData {
                remit: Vec::new(),
                players,
            },
        }
    }

    fn player(id: &str, g: &str, f: &str) -> Player {
        Player {
            id: id.into(),
            f: f.into(),
            g: g.into(),
            v: Vec::new(),
        }
    }

    fn labeled(label: &str, players: Vec<Player>) -> LabeledDocument {
        LabeledDocument {
            label: label.into(),
            document: document(players),
        }
    }

    #[test]
    fn test_last_document_wins_on_duplicate_ids() {
        let documents = vec![
            labeled("card_1", vec![player("7", "Ion", "Popescu")]),
            labeled("card_2", vec![player("7", "Gica", "Hagi")]),
        ];
        let directory = player_directory(&documents);
        assert_eq!(directory.len(), 1);
        assert_eq!(directory["7"], "Hagi, Gica");
    }

    #[test]
    fn test_directory_name_composition() {
        let documents = vec![labeled(
            "card_1",
            vec![player("1", "Ion", "Popescu"), player("2", "", "Pele")],
        )];
        let directory = player_directory(&documents);
        assert_eq!(directory["1"], "Popescu, Ion");
        assert_eq!(directory["2"], "Pele");
    }

    #[test]
    fn test_numeric_ids_sort_by_value() {
        let documents = vec![labeled(
            "card_1",
            vec![
                player("10", "", "Ten"),
                player("2", "", "Two"),
                player("1003_1", "", "Generated"),
                player("1", "", "One"),
            ],
        )];
        let directory = player_directory(&documents);
        let ids: Vec<&str> = sorted_directory(&directory)
            .iter()
            .map(|(id, _)| *id)
            .collect();
        assert_eq!(ids, vec!["1", "2", "10", "1003_1"]);
    }

    #[test]
    fn test_players_csv_output() {
        let entries = vec![("1", "Popescu, Ion"), ("2", "Pele")];
        let mut buffer = Vec::new();
        write_players_csv(&mut buffer, &entries).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text, "ID,Name\n1,\"Popescu, Ion\"\n2,Pele\n");
    }

    #[test]
    fn test_flatten_keeps_document_then_player_order() {
        let documents = vec![
            labeled(
                "card_2",
                vec![player("1", "Ion", "Popescu"), player("2", "", "Pele")],
            ),
            labeled("card_1", vec![player("1", "Gica", "Hagi")]),
        ];
        let rows = flatten_rosters(&documents);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].full_name, "Ion Popescu");
        assert_eq!(rows[0].card, "card_2");
        assert_eq!(rows[1].full_name, "Pele");
        assert_eq!(rows[2].card, "card_1");
    }

    #[test]
    fn test_roster_csv_output() {
        let rows = vec![RosterRow {
            id: "1003_1".into(),
            full_name: "Ion Popescu".into(),
            card: "1003".into(),
        }];
        let mut buffer = Vec::new();
        write_roster_csv(&mut buffer, &rows).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text, "Player ID,Full Name,Bingo Card\n1003_1,Ion Popescu,1003\n");
    }

    #[test]
    fn test_load_documents_skips_malformed_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("1003.json"),
            r#"{"gameData": {"remit": [], "players": [{"id": "1", "f": "Popescu", "g": "", "v": []}]}}"#,
        )
        .unwrap();
        fs::write(dir.path().join("broken.json"), "not json").unwrap();
        fs::write(dir.path().join("wrong_shape.json"), r#"{"players": []}"#).unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let documents = load_documents(dir.path()).unwrap();
        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].label, "1003");
        assert_eq!(documents[0].document.game_data.players[0].f, "Popescu");
    }

    #[test]
    fn test_load_documents_sorted_by_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let doc = |name: &str| {
            format!(
                r#"{{"gameData": {{"remit": [], "players": [{{"id": "7", "f": "{}", "g": "", "v": []}}]}}}}"#,
                name
            )
        };
        fs::write(dir.path().join("b.json"), doc("FromB")).unwrap();
        fs::write(dir.path().join("a.json"), doc("FromA")).unwrap();

        let documents = load_documents(dir.path()).unwrap();
        let labels: Vec<&str> = documents.iter().map(|d| d.label.as_str()).collect();
        assert_eq!(labels, vec!["a", "b"]);

        // Last file in sorted order wins the directory entry
        let directory = player_directory(&documents);
        assert_eq!(directory["7"], "FromB");
    }
}
