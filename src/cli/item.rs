//! Item commands: add, list, show, edit, remove, and materials.

use clap::Subcommand;
use tracing::info;

use crate::{
    model::{ClothingItem, ItemFilter, distinct_materials},
    storage::Storage,
};

use super::format::{format_item_detail, format_item_line, short_id};
use super::{CategoryArg, SeasonArg, resolve_item};

#[derive(Debug, Subcommand)]
pub enum ItemCommand {
    /// Add an item. Prints the new item's id.
    Add {
        /// Which outfit slot the item fills.
        #[arg(long, value_enum)]
        category: CategoryArg,

        /// Display name (e.g. "Grey wool sweater").
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        color: Option<String>,

        #[arg(long)]
        material: Option<String>,

        /// A season the item suits. Repeat for several.
        #[arg(long = "season", value_enum)]
        seasons: Vec<SeasonArg>,

        /// Free-text notes.
        #[arg(long)]
        notes: Option<String>,
    },

    /// List items, newest first.
    List {
        /// Only items of this category.
        #[arg(long, value_enum)]
        category: Option<CategoryArg>,

        /// Only items tagged with this season.
        #[arg(long, value_enum)]
        season: Option<SeasonArg>,

        /// Only items of this material (case-insensitive).
        #[arg(long)]
        material: Option<String>,
    },

    /// Show every field of an item.
    Show {
        /// Item id (full or unambiguous prefix).
        item: String,
    },

    /// Change an item's fields. An empty string clears a text field.
    Edit {
        /// Item id (full or unambiguous prefix).
        item: String,

        #[arg(long, value_enum)]
        category: Option<CategoryArg>,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        color: Option<String>,

        #[arg(long)]
        material: Option<String>,

        /// Replace the item's seasons. Repeat for several.
        #[arg(long = "season", value_enum, conflicts_with = "clear_seasons")]
        seasons: Vec<SeasonArg>,

        /// Remove all season tags.
        #[arg(long)]
        clear_seasons: bool,

        #[arg(long)]
        notes: Option<String>,
    },

    /// Remove an item.
    Remove {
        /// Item id (full or unambiguous prefix).
        item: String,
    },
}

pub(super) fn run(storage: &Storage, command: ItemCommand) -> Result<(), String> {
    match command {
        ItemCommand::Add {
            category,
            name,
            color,
            material,
            seasons,
            notes,
        } => {
            let item = ClothingItem {
                name: non_blank(name),
                color: non_blank(color),
                material: non_blank(material),
                seasons: seasons.into_iter().map(SeasonArg::to_domain).collect(),
                notes: non_blank(notes),
                ..ClothingItem::new(category.to_domain())
            };
            cmd_add(storage, &item)
        }
        ItemCommand::List {
            category,
            season,
            material,
        } => {
            let filter = ItemFilter {
                category: category.map(CategoryArg::to_domain),
                season: season.map(SeasonArg::to_domain),
                material,
            };
            cmd_list(storage, &filter)
        }
        ItemCommand::Show { item } => {
            let item = resolve_item(storage, &item)?;
            println!("{}", format_item_detail(&item));
            Ok(())
        }
        ItemCommand::Edit {
            item,
            category,
            name,
            color,
            material,
            seasons,
            clear_seasons,
            notes,
        } => {
            let mut item = resolve_item(storage, &item)?;
            if let Some(category) = category {
                item.category = category.to_domain();
            }
            if name.is_some() {
                item.name = non_blank(name);
            }
            if color.is_some() {
                item.color = non_blank(color);
            }
            if material.is_some() {
                item.material = non_blank(material);
            }
            if clear_seasons {
                item.seasons.clear();
            } else if !seasons.is_empty() {
                item.seasons = seasons.into_iter().map(SeasonArg::to_domain).collect();
            }
            if notes.is_some() {
                item.notes = non_blank(notes);
            }
            cmd_edit(storage, &item)
        }
        ItemCommand::Remove { item } => {
            let item = resolve_item(storage, &item)?;
            cmd_remove(storage, &item)
        }
    }
}

fn cmd_add(storage: &Storage, item: &ClothingItem) -> Result<(), String> {
    let stored = storage
        .add_item(item)
        .map_err(|e| format!("failed to add item: {e}"))?;

    info!(id = stored.id.as_deref().unwrap_or("-"), "added item");
    println!("{}", stored.id.as_deref().unwrap_or_default());
    Ok(())
}

fn cmd_list(storage: &Storage, filter: &ItemFilter) -> Result<(), String> {
    let items = storage
        .list_items()
        .map_err(|e| format!("failed to list items: {e}"))?;

    let shown = filter.apply(&items);
    if shown.is_empty() {
        println!("No items");
        return Ok(());
    }

    for item in &shown {
        println!("{}", format_item_line(item));
    }
    Ok(())
}

fn cmd_edit(storage: &Storage, item: &ClothingItem) -> Result<(), String> {
    storage
        .update_item(item)
        .map_err(|e| format!("failed to update item: {e}"))?;

    eprintln!("Item {} updated", short_id(item));
    Ok(())
}

fn cmd_remove(storage: &Storage, item: &ClothingItem) -> Result<(), String> {
    let id = item.id.as_deref().ok_or("item has no id")?;
    storage
        .delete_item(id)
        .map_err(|e| format!("failed to remove item: {e}"))?;

    eprintln!("Removed {} ({})", item.label(), short_id(item));
    Ok(())
}

pub(super) fn cmd_materials(storage: &Storage) -> Result<(), String> {
    let items = storage
        .list_items()
        .map_err(|e| format!("failed to list items: {e}"))?;

    let materials = distinct_materials(&items);
    if materials.is_empty() {
        println!("No materials");
        return Ok(());
    }
    for material in materials {
        println!("{material}");
    }
    Ok(())
}

/// Trims the value and treats an empty string as absent.
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
