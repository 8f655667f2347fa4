//! CLI interface for the wardrobe.
//!
//! Every subcommand is non-interactive: arguments in, text out.
//! Items are referred to by full id or an unambiguous prefix.

mod format;
mod item;
mod outfit;
mod recommend;
mod transfer;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::Config;
use crate::model::{Category, ClothingItem, Season};
use crate::storage::{Storage, StorageError};

use item::ItemCommand;

/// Wardrobe — catalog your clothes and get dressed for the weather.
#[derive(Debug, Parser)]
#[command(name = "wardrobe", after_long_help = WORKFLOW_HELP)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

const WORKFLOW_HELP: &str = r#"Workflow:
  1. wardrobe item add --category top --name "Wool sweater" --season autumn --season winter
  2. wardrobe item add --category bottom --name "Jeans"
  3. wardrobe item add --category shoes --name "Boots" --material leather
  4. wardrobe recommend --temp -5
  5. wardrobe recommend --temp 18 --rain --seed 7

Manual outfits:
  wardrobe item list --season winter
  wardrobe outfit a3b 9f0 c41"#;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage clothing items: add, list, show, edit, remove.
    Item {
        #[command(subcommand)]
        command: ItemCommand,
    },

    /// List the distinct materials in the wardrobe.
    Materials,

    /// Assemble an outfit by hand from item ids.
    ///
    /// Each item goes into the slot for its category. Naming two items
    /// for the same slot is an error.
    Outfit {
        /// Item ids (full or unambiguous prefix).
        #[arg(required = true)]
        items: Vec<String>,
    },

    /// Suggest an outfit for the weather.
    Recommend {
        /// Air temperature in degrees Celsius.
        #[arg(long, allow_negative_numbers = true)]
        temp: f64,

        /// It is raining.
        #[arg(long)]
        rain: bool,

        /// Seed the random pick for a reproducible suggestion.
        #[arg(long, conflicts_with = "first")]
        seed: Option<u64>,

        /// Always take the first eligible item instead of a random one.
        #[arg(long)]
        first: bool,

        /// Print the recommendation as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Import items from a JSON file (an export or a document-store dump).
    Import {
        /// Path to a JSON array of items.
        file: std::path::PathBuf,
    },

    /// Export every item as JSON.
    Export {
        /// Write to this file instead of stdout.
        #[arg(long)]
        out: Option<std::path::PathBuf>,
    },

    /// Remove every item from the wardrobe.
    Clear,
}

/// CLI-facing category, mapped to the domain `Category`.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CategoryArg {
    /// Shirts, sweaters, jackets, coats.
    Top,
    /// Trousers, skirts, shorts.
    Bottom,
    /// Any footwear.
    Shoes,
}

impl CategoryArg {
    fn to_domain(self) -> Category {
        match self {
            Self::Top => Category::Top,
            Self::Bottom => Category::Bottom,
            Self::Shoes => Category::Shoes,
        }
    }
}

/// CLI-facing season, mapped to the domain `Season`.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SeasonArg {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl SeasonArg {
    fn to_domain(self) -> Season {
        match self {
            Self::Spring => Season::Spring,
            Self::Summer => Season::Summer,
            Self::Autumn => Season::Autumn,
            Self::Winter => Season::Winter,
        }
    }
}

/// Run the CLI, returning an error message on failure.
pub fn run(config: &Config, storage: &Storage) -> Result<(), String> {
    let cli = Cli::parse();

    match cli.command {
        Command::Item { command } => item::run(storage, command),
        Command::Materials => item::cmd_materials(storage),
        Command::Outfit { items } => outfit::cmd_outfit(storage, &items),
        Command::Recommend {
            temp,
            rain,
            seed,
            first,
            json,
        } => recommend::cmd_recommend(
            config,
            storage,
            &recommend::RecommendArgs {
                temperature: temp,
                raining: rain,
                seed,
                first,
                json,
            },
        ),
        Command::Import { file } => transfer::cmd_import(storage, &file),
        Command::Export { out } => transfer::cmd_export(storage, out.as_deref()),
        Command::Clear => transfer::cmd_clear(storage),
    }
}

/// Resolve an item reference (full id or unambiguous prefix) to an item.
fn resolve_item(storage: &Storage, reference: &str) -> Result<ClothingItem, String> {
    if reference.is_empty() {
        return Err("item reference is empty".to_string());
    }

    // Try an exact id first.
    match storage.load_item(reference) {
        Ok(item) => return Ok(item),
        Err(StorageError::ItemNotFound(_)) => {}
        Err(e) => return Err(format!("failed to load item '{reference}': {e}")),
    }

    let items = storage
        .list_items()
        .map_err(|e| format!("failed to list items: {e}"))?;

    let matches: Vec<&ClothingItem> = items
        .iter()
        .filter(|i| i.id.as_deref().is_some_and(|id| id.starts_with(reference)))
        .collect();

    match matches.len() {
        0 => Err(format!("no item matching '{reference}'")),
        1 => Ok(matches[0].clone()),
        n => {
            let ids: Vec<String> = matches.iter().map(|i| format::short_id(i)).collect();
            Err(format!(
                "'{reference}' is ambiguous — matches {n} items: {}",
                ids.join(", ")
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::CommandFactory;
    use tempfile::TempDir;

    fn storage_with(ids: &[&str]) -> (TempDir, Storage) {
        let dir = TempDir::new().unwrap();
        let storage = Storage::new(dir.path()).unwrap();
        for id in ids {
            let mut item = ClothingItem::new(Category::Top);
            item.id = Some((*id).to_string());
            storage.add_item(&item).unwrap();
        }
        (dir, storage)
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_negative_temperature() {
        let cli = Cli::try_parse_from(["wardrobe", "recommend", "--temp", "-5", "--rain"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Recommend { temp, rain: true, .. } if temp == -5.0
        ));
    }

    #[test]
    fn seed_conflicts_with_first() {
        let result =
            Cli::try_parse_from(["wardrobe", "recommend", "--temp", "3", "--seed", "1", "--first"]);
        assert!(result.is_err());
    }

    #[test]
    fn resolves_exact_and_prefix() {
        let (_dir, storage) = storage_with(&["abc123", "abd456", "xyz"]);

        assert_eq!(resolve_item(&storage, "xyz").unwrap().id.as_deref(), Some("xyz"));
        assert_eq!(
            resolve_item(&storage, "abd").unwrap().id.as_deref(),
            Some("abd456")
        );
    }

    #[test]
    fn exact_id_wins_over_longer_prefix_match() {
        let (_dir, storage) = storage_with(&["ab", "abc"]);
        assert_eq!(resolve_item(&storage, "ab").unwrap().id.as_deref(), Some("ab"));
    }

    #[test]
    fn ambiguous_prefix_fails() {
        let (_dir, storage) = storage_with(&["abc123", "abd456"]);
        let err = resolve_item(&storage, "ab").unwrap_err();
        assert!(err.contains("ambiguous"));
    }

    #[test]
    fn unknown_reference_fails() {
        let (_dir, storage) = storage_with(&["abc123"]);
        assert!(resolve_item(&storage, "zzz").unwrap_err().contains("no item matching"));
        assert!(resolve_item(&storage, "").is_err());
    }

    #[test]
    fn corrupt_exact_match_is_reported() {
        let (dir, storage) = storage_with(&[]);
        let conn = rusqlite::Connection::open(dir.path().join("wardrobe.sqlite")).unwrap();
        conn.execute(
            "INSERT INTO item (id, category, created_at) VALUES ('hat1', 'hat', '2024-01-01T00:00:00Z')",
            [],
        )
        .unwrap();

        let err = resolve_item(&storage, "hat1").unwrap_err();
        assert!(err.starts_with("failed to load item 'hat1'"));
        assert!(err.contains("corrupt"));
    }
}
