use serde::{Deserialize, Serialize};

/// A player entry in a game document.
///
/// Field names follow the wire format: `f` is the family name, `g` the
/// given name (may be empty), `v` the IDs of the categories the player
/// matches, in catalog order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub f: String,
    pub g: String,
    pub v: Vec<String>,
}

impl Player {
    /// Split a full name into (given, family) parts.
    ///
    /// The last whitespace-delimited token is the family name; everything
    /// before it is the given name. A single token is a family name with an
    /// empty given name. Returns `None` for blank input.
    pub fn split_name(name: &str) -> Option<(String, String)> {
        let tokens: Vec<&str> = name.split_whitespace().collect();
        match tokens.as_slice() {
            [] => None,
            [family] => Some((String::new(), (*family).to_string())),
            [given @ .., family] => Some((given.join(" "), (*family).to_string())),
        }
    }

    /// `"<given> <family>"` with the leading space dropped when the given
    /// name is empty. Used by the flattened roster output.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.g, self.f).trim().to_string()
    }

    /// `"<family>, <given>"`, or just the family name when there is no given
    /// name. Used by the player directory report.
    pub fn directory_name(&self) -> String {
        if self.g.is_empty() {
            self.f.clone()
        } else {
            format!("{}, {}", self.f, self.g)
        }
    }
}
