use super::{GameData, GameDocument, RemitGroup};
use crate::card::CardSheet;
use crate::model::{Category, Player};
use log::warn;

/// Cell value marking a category as held by the player.
const TRUTHY_FLAG: &str = "1";

/// Format an ID in the `<base>_<ordinal>` scheme.
///
/// Categories and players share this scheme within a document: category
/// ordinals count columns, player ordinals count rows, so the same ID string
/// can name a category and a player. Downstream consumers rely on it.
fn format_id(base_id: u32, ordinal: usize) -> String {
    format!("{}_{}", base_id, ordinal)
}

/// Build the remit catalog from the sheet's column list.
///
/// Returns the remit groups plus the (column index, category ID) pairs that
/// feed the player value lists. Ordinals count every non-Player column in
/// sheet order; a column the classifier does not recognize keeps its ordinal
/// but contributes no catalog entry and no mapping.
pub fn build_remit(sheet: &CardSheet, base_id: u32) -> (Vec<RemitGroup>, Vec<(usize, String)>) {
    let mut remit = Vec::new();
    let mut column_ids = Vec::new();

    for (ordinal, (column_index, column)) in sheet.category_columns().enumerate() {
        let id = format_id(base_id, ordinal + 1);
        if let Some(category) = Category::from_column(column, id.clone()) {
            remit.push(vec![category]);
            column_ids.push((column_index, id));
        }
    }

    (remit, column_ids)
}

/// Build the player list from the sheet's data rows.
///
/// A row with a blank Player cell is logged and skipped; it still consumes
/// its row ordinal so later players keep their IDs.
pub fn build_players(
    sheet: &CardSheet,
    column_ids: &[(usize, String)],
    base_id: u32,
) -> Vec<Player> {
    let mut players = Vec::new();

    for (row_index, row) in sheet.rows.iter().enumerate() {
        let name = sheet.player_name(row);
        let Some((given, family)) = Player::split_name(name) else {
            warn!("Row {}: blank Player cell, skipping", row_index + 1);
            continue;
        };

        let values = column_ids
            .iter()
            .filter(|(column_index, _)| row[*column_index].trim() == TRUTHY_FLAG)
            .map(|(_, id)| id.clone())
            .collect();

        players.push(Player {
            id: format_id(base_id, row_index + 1),
            f: family,
            g: given,
            v: values,
        });
    }

    players
}

/// Convert a card sheet into a complete game document.
pub fn build_document(sheet: &CardSheet, base_id: u32) -> GameDocument {
    let (remit, column_ids) = build_remit(sheet, base_id);
    let players = build_players(sheet, &column_ids, base_id);
    GameDocument {
        game_data: GameData { remit, players },
    }
}
