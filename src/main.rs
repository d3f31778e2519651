use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use bingo_data::card;
use bingo_data::game;
use bingo_data::roster;
use bingo_data::CategoryType;

#[derive(Parser)]
#[command(name = "bingo-data")]
#[command(about = "Convert bingo card CSV sheets to game data JSON and extract player rosters", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a bingo card CSV sheet into a game data JSON document
    Convert {
        /// Input CSV file
        input: PathBuf,

        /// Numeric base for all generated category and player IDs
        #[arg(long, default_value_t = 1003)]
        base_id: u32,

        /// Output file (defaults to <base-id>.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Aggregate player names from game JSON files into a directory CSV
    ExtractPlayers {
        /// Directory containing game JSON files
        #[arg(default_value = ".")]
        dir: PathBuf,

        /// Output CSV file
        #[arg(short, long, default_value = "players.csv")]
        output: PathBuf,
    },

    /// Flatten per-card player lists into a roster CSV
    ExtractRoster {
        /// Directory containing game JSON files
        #[arg(default_value = ".")]
        dir: PathBuf,

        /// Output CSV file
        #[arg(short, long, default_value = "all_players.csv")]
        output: PathBuf,
    },

    /// Display information about a card sheet or game document
    Info {
        /// Input file to inspect (.csv or .json)
        input: PathBuf,
    },

    /// Validate a game document
    Validate {
        /// Input file to validate
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            input,
            base_id,
            output,
        } => {
            convert(&input, base_id, output.as_deref())?;
        }
        Commands::ExtractPlayers { dir, output } => {
            extract_players(&dir, &output)?;
        }
        Commands::ExtractRoster { dir, output } => {
            extract_roster(&dir, &output)?;
        }
        Commands::Info { input } => {
            info(&input)?;
        }
        Commands::Validate { input } => {
            validate(&input)?;
        }
    }

    Ok(())
}

fn convert(input: &Path, base_id: u32, output: Option<&Path>) -> Result<()> {
    println!("Reading card sheet: {}", input.display());
    let sheet = card::read_card_file(input).context("Failed to read card sheet")?;
    println!(
        "Found {} columns and {} rows",
        sheet.columns.len(),
        sheet.rows.len()
    );

    let document = game::builder::build_document(&sheet, base_id);
    println!(
        "Built {} remit entries and {} players",
        document.game_data.remit.len(),
        document.game_data.players.len()
    );

    let default_output = PathBuf::from(format!("{}.json", base_id));
    let output = output.unwrap_or(&default_output);
    println!("Writing game document: {}", output.display());
    game::writer::write_game_file(output, &document).context("Failed to write game document")?;

    println!("Done!");
    Ok(())
}

fn extract_players(dir: &Path, output: &Path) -> Result<()> {
    let documents = roster::load_documents(dir).context("Failed to scan directory")?;
    println!("Found {} game documents", documents.len());

    let directory = roster::player_directory(&documents);
    let entries = roster::sorted_directory(&directory);
    for (id, name) in &entries {
        println!("ID: {} - Name: {}", id, name);
    }

    let file = std::fs::File::create(output).context("Failed to create output file")?;
    roster::write_players_csv(file, &entries).context("Failed to write player directory")?;
    println!();
    println!("Data has been saved to {}", output.display());
    Ok(())
}

fn extract_roster(dir: &Path, output: &Path) -> Result<()> {
    let documents = roster::load_documents(dir).context("Failed to scan directory")?;
    println!("Found {} game documents", documents.len());

    let rows = roster::flatten_rosters(&documents);
    println!("Found {} roster entries", rows.len());

    let file = std::fs::File::create(output).context("Failed to create output file")?;
    roster::write_roster_csv(file, &rows).context("Failed to write roster")?;
    println!("Data has been saved to {}", output.display());
    Ok(())
}

fn info(input: &Path) -> Result<()> {
    let ext = input
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match ext.as_str() {
        "csv" => {
            let sheet = card::read_card_file(input).context("Failed to read card sheet")?;
            println!("Card sheet: {}", input.display());
            println!("Columns: {}", sheet.columns.len());
            println!("Rows: {}", sheet.rows.len());
            println!();

            let mut counts: HashMap<CategoryType, usize> = HashMap::new();
            let mut unrecognized = 0;
            for (_, column) in sheet.category_columns() {
                match CategoryType::from_column(column) {
                    Some(category_type) => *counts.entry(category_type).or_default() += 1,
                    None => unrecognized += 1,
                }
            }

            println!("Category columns:");
            let mut counts: Vec<_> = counts.into_iter().collect();
            counts.sort_by_key(|(category_type, _)| u8::from(*category_type));
            for (category_type, count) in counts {
                println!("  {}: {}", category_type, count);
            }
            if unrecognized > 0 {
                println!("  Unrecognized: {}", unrecognized);
            }
        }
        "json" => {
            let document =
                game::reader::read_game_file(input).context("Failed to read game document")?;
            println!("Game document: {}", input.display());
            println!("Remit entries: {}", document.game_data.remit.len());
            println!("Players: {}", document.game_data.players.len());
            println!();

            for player in document.game_data.players.iter().take(10) {
                println!(
                    "  {} - {} ({} categories)",
                    player.id,
                    player.full_name(),
                    player.v.len()
                );
            }
            if document.game_data.players.len() > 10 {
                println!("  ... and {} more", document.game_data.players.len() - 10);
            }
        }
        _ => {
            anyhow::bail!("Unsupported file format: {}", ext);
        }
    }

    Ok(())
}

fn validate(input: &Path) -> Result<()> {
    let document = game::reader::read_game_file(input).context("Failed to read game document")?;
    println!("Game document parsed");
    println!("  {} remit entries", document.game_data.remit.len());
    println!("  {} players", document.game_data.players.len());

    let issues = document.check_invariants();
    if issues.is_empty() {
        println!("  No issues found");
    } else {
        println!("  Issues found:");
        for issue in issues {
            println!("    - {}", issue);
        }
    }

    Ok(())
}
