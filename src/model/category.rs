use serde::{Deserialize, Serialize};
use std::fmt;

/// Category kind, stored in game documents as its integer code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum CategoryType {
    Country = 1,
    Team = 2,
    LeaguePlayed = 3,
    Coach = 4,
    Player = 5,
    Achievement = 6,
}

/// Column prefix table. Checked in this order; the first matching prefix wins.
const PREFIXES: [(&str, CategoryType); 7] = [
    ("team_", CategoryType::Team),
    ("country_", CategoryType::Country),
    ("league_play_", CategoryType::LeaguePlayed),
    ("coached_by_", CategoryType::Coach),
    ("teamplayer_", CategoryType::Player),
    ("league_won_", CategoryType::Achievement),
    ("cup_won_", CategoryType::Achievement),
];

impl CategoryType {
    /// Classify a card sheet column by its prefix.
    pub fn from_column(column: &str) -> Option<Self> {
        matched_prefix(column).map(|(_, category_type)| category_type)
    }
}

impl From<CategoryType> for u8 {
    fn from(category_type: CategoryType) -> u8 {
        category_type as u8
    }
}

impl TryFrom<u8> for CategoryType {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(CategoryType::Country),
            2 => Ok(CategoryType::Team),
            3 => Ok(CategoryType::LeaguePlayed),
            4 => Ok(CategoryType::Coach),
            5 => Ok(CategoryType::Player),
            6 => Ok(CategoryType::Achievement),
            _ => Err(format!("Unknown category type: {}", code)),
        }
    }
}

impl fmt::Display for CategoryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CategoryType::Country => "Country",
            CategoryType::Team => "Team",
            CategoryType::LeaguePlayed => "League",
            CategoryType::Coach => "Coach",
            CategoryType::Player => "Player",
            CategoryType::Achievement => "Achievement",
        };
        write!(f, "{}", label)
    }
}

fn matched_prefix(column: &str) -> Option<(&'static str, CategoryType)> {
    PREFIXES
        .iter()
        .find(|(prefix, _)| column.starts_with(prefix))
        .copied()
}

/// A catalog entry in a game document's remit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub category_type: CategoryType,
    #[serde(rename = "displayName")]
    pub display_name: String,
}

impl Category {
    /// Build a catalog entry from a prefixed column name.
    ///
    /// Returns `None` for columns carrying no known prefix; those are
    /// excluded from the catalog entirely.
    pub fn from_column(column: &str, id: String) -> Option<Self> {
        let (prefix, category_type) = matched_prefix(column)?;
        let name = clean_column_name(column, prefix);
        let display_name = display_name(&name, category_type);
        Some(Category {
            id,
            name,
            category_type,
            display_name,
        })
    }
}

/// Turn a prefixed column name into a human-readable category name.
///
/// The matched prefix is stripped (`league_play_` is substituted with
/// `"Played in "` instead), remaining underscores become spaces, and the
/// result is title-cased.
fn clean_column_name(column: &str, prefix: &str) -> String {
    let rest = &column[prefix.len()..];
    let substituted = if prefix == "league_play_" {
        format!("Played in {}", rest)
    } else {
        rest.to_string()
    };
    title_case(&substituted.replace('_', " "))
}

/// Title-case a string: each letter following a non-letter is upper-cased,
/// every other letter lower-cased. The shipped data files were generated
/// with these exact semantics, including `"Played In ..."` names.
fn title_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut prev_is_letter = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            result.push(c);
            prev_is_letter = false;
        }
    }
    result
}

/// Derive the short display name shown on the board square.
fn display_name(name: &str, category_type: CategoryType) -> String {
    match category_type {
        // Countries use a 3-letter code
        CategoryType::Country => name.chars().take(3).collect::<String>().to_uppercase(),
        CategoryType::Team => {
            let words: Vec<&str> = name.split_whitespace().collect();
            if words.len() >= 2 {
                // "Poli Timisoara", "Poli Iasi" etc. keep their qualifier
                if words[0].to_lowercase().starts_with("poli") {
                    format!("Poli {}", words[1])
                } else {
                    words[0].to_string()
                }
            } else {
                name.to_string()
            }
        }
        CategoryType::Coach => name.strip_prefix("Coached By ").unwrap_or(name).to_string(),
        CategoryType::Player => name.split_whitespace().last().unwrap_or(name).to_string(),
        _ => name.to_string(),
    }
}
