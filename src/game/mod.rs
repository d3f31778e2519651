pub mod builder;
pub mod reader;
pub mod writer;

use crate::model::{Category, Player};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A remit group: categories rendered together as a single board square.
/// The converter always emits single-item groups; hand-edited documents may
/// combine several categories into one square.
pub type RemitGroup = Vec<Category>;

/// Top-level game document as stored on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameDocument {
    #[serde(rename = "gameData")]
    pub game_data: GameData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameData {
    pub remit: Vec<RemitGroup>,
    pub players: Vec<Player>,
}

impl GameDocument {
    /// All catalog entries, across remit groups.
    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.game_data.remit.iter().flatten()
    }

    /// Check the document's structural invariants, returning a description
    /// of every violation found.
    pub fn check_invariants(&self) -> Vec<String> {
        let mut issues = Vec::new();

        let mut seen = HashSet::new();
        for category in self.categories() {
            if !seen.insert(category.id.as_str()) {
                issues.push(format!("Duplicate category ID: {}", category.id));
            }
        }

        for player in &self.game_data.players {
            if player.f.is_empty() {
                issues.push(format!("Player {}: empty family name", player.id));
            }
            for value in &player.v {
                if !seen.contains(value.as_str()) {
                    issues.push(format!(
                        "Player {}: unknown category ID {}",
                        player.id, value
                    ));
                }
            }
        }

        issues
    }
}
