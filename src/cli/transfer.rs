//! Import, export, and clear.

use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::{
    storage::Storage,
    transfer::{export_json, parse_import},
};

pub(super) fn cmd_import(storage: &Storage, file: &Path) -> Result<(), String> {
    let json = fs::read_to_string(file)
        .map_err(|e| format!("failed to read {}: {e}", file.display()))?;
    let batch =
        parse_import(&json).map_err(|e| format!("invalid import file {}: {e}", file.display()))?;

    let added = storage
        .add_items(&batch.items)
        .map_err(|e| format!("failed to import items, nothing was imported: {e}"))?;
    for id in &added.duplicates {
        warn!(%id, "item already in wardrobe, skipping");
    }

    let imported = added.stored.len();
    let duplicates = added.duplicates.len();
    info!(imported, duplicates, skipped = batch.skipped, "import finished");
    eprintln!("Imported {imported} item(s) from {}", file.display());
    if duplicates > 0 {
        eprintln!("Skipped {duplicates} item(s) already in the wardrobe");
    }
    if batch.skipped > 0 {
        eprintln!("Skipped {} malformed record(s) or record(s) without a usable category", batch.skipped);
    }
    Ok(())
}

pub(super) fn cmd_export(storage: &Storage, out: Option<&Path>) -> Result<(), String> {
    let items = storage
        .list_items()
        .map_err(|e| format!("failed to list items: {e}"))?;
    let json = export_json(&items).map_err(|e| format!("failed to serialize items: {e}"))?;

    match out {
        Some(path) => {
            fs::write(path, &json)
                .map_err(|e| format!("failed to write {}: {e}", path.display()))?;
            eprintln!("Exported {} item(s) → {}", items.len(), path.display());
        }
        None => {
            println!("{json}");
        }
    }
    Ok(())
}

pub(super) fn cmd_clear(storage: &Storage) -> Result<(), String> {
    let removed = storage
        .clear_items()
        .map_err(|e| format!("failed to clear wardrobe: {e}"))?;

    eprintln!("Removed {removed} item(s)");
    Ok(())
}
