//! Item storage: add, load, update, delete, and list clothing items.

use std::collections::BTreeSet;

use jiff::Timestamp;
use rusqlite::{Connection, OptionalExtension, Row};
use tracing::debug;
use uuid::Uuid;

use crate::model::{Category, ClothingItem, Season};

use super::{Result, Storage, StorageError};

const COLUMNS: &str = "id, name, category, color, material, seasons, notes, created_at";

impl Storage {
    /// Stores a new item and returns it as stored.
    ///
    /// An item without an id gets a fresh UUID, and one without a creation
    /// time is stamped with the current time.
    pub fn add_item(&self, item: &ClothingItem) -> Result<ClothingItem> {
        let conn = self.open_db()?;
        insert_item(&conn, item)
    }

    /// Stores a batch of items in one transaction.
    ///
    /// Items whose id is already taken are reported in
    /// [`AddedItems::duplicates`] and left alone. Any other failure rolls
    /// back the whole batch.
    pub fn add_items(&self, items: &[ClothingItem]) -> Result<AddedItems> {
        let mut conn = self.open_db()?;
        let tx = conn.transaction()?;

        let mut added = AddedItems::default();
        for item in items {
            match insert_item(&tx, item) {
                Ok(stored) => added.stored.push(stored),
                Err(StorageError::ItemAlreadyExists(id)) => added.duplicates.push(id),
                Err(e) => return Err(e),
            }
        }

        tx.commit()?;
        debug!(
            stored = added.stored.len(),
            duplicates = added.duplicates.len(),
            "batch added"
        );
        Ok(added)
    }

    /// Replaces every field of an existing item except its creation time.
    pub fn update_item(&self, item: &ClothingItem) -> Result<()> {
        let id = item.id.as_deref().ok_or(StorageError::MissingId)?;
        let conn = self.open_db()?;
        let rows = conn.execute(
            "UPDATE item
             SET name = ?1, category = ?2, color = ?3, material = ?4, seasons = ?5, notes = ?6
             WHERE id = ?7",
            rusqlite::params![
                &item.name,
                item.category.as_str(),
                &item.color,
                &item.material,
                serialize_seasons(&item.seasons),
                &item.notes,
                id,
            ],
        )?;
        if rows == 0 {
            return Err(StorageError::ItemNotFound(id.to_string()));
        }
        debug!(%id, "item updated");
        Ok(())
    }

    /// Loads a single item by its full id.
    pub fn load_item(&self, id: &str) -> Result<ClothingItem> {
        let conn = self.open_db()?;
        let raw = conn
            .query_row(
                &format!("SELECT {COLUMNS} FROM item WHERE id = ?1"),
                [id],
                RawItem::from_row,
            )
            .optional()?;
        match raw {
            Some(raw) => raw.into_item(),
            None => Err(StorageError::ItemNotFound(id.to_string())),
        }
    }

    /// Removes an item.
    pub fn delete_item(&self, id: &str) -> Result<()> {
        let conn = self.open_db()?;
        let rows = conn.execute("DELETE FROM item WHERE id = ?1", [id])?;
        if rows == 0 {
            return Err(StorageError::ItemNotFound(id.to_string()));
        }
        debug!(%id, "item deleted");
        Ok(())
    }

    /// Removes every item. Returns how many were removed.
    pub fn clear_items(&self) -> Result<usize> {
        let conn = self.open_db()?;
        let removed = conn.execute("DELETE FROM item", [])?;
        debug!(removed, "wardrobe cleared");
        Ok(removed)
    }

    /// Lists all items, newest first.
    ///
    /// Items created at the same instant are ordered by id, so the
    /// order is stable between calls.
    pub fn list_items(&self) -> Result<Vec<ClothingItem>> {
        let conn = self.open_db()?;
        let mut stmt = conn.prepare(&format!("SELECT {COLUMNS} FROM item"))?;
        let rows = stmt.query_map([], RawItem::from_row)?;

        let mut items = Vec::new();
        for raw in rows {
            items.push(raw?.into_item()?);
        }
        items.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(items)
    }
}

/// Outcome of [`Storage::add_items`].
#[derive(Debug, Default)]
pub struct AddedItems {
    /// Items as stored, in input order.
    pub stored: Vec<ClothingItem>,

    /// Ids that were already in the wardrobe.
    pub duplicates: Vec<String>,
}

fn insert_item(conn: &Connection, item: &ClothingItem) -> Result<ClothingItem> {
    let mut item = item.clone();
    let id = item
        .id
        .get_or_insert_with(|| Uuid::new_v4().to_string())
        .clone();
    let created_at = *item.created_at.get_or_insert_with(Timestamp::now);

    if item_exists(conn, &id)? {
        return Err(StorageError::ItemAlreadyExists(id));
    }
    conn.execute(
        &format!("INSERT INTO item ({COLUMNS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)"),
        rusqlite::params![
            &id,
            &item.name,
            item.category.as_str(),
            &item.color,
            &item.material,
            serialize_seasons(&item.seasons),
            &item.notes,
            created_at.to_string(),
        ],
    )?;
    debug!(%id, category = item.category.as_str(), "item added");
    Ok(item)
}

fn item_exists(conn: &Connection, id: &str) -> Result<bool> {
    let found = conn
        .query_row("SELECT 1 FROM item WHERE id = ?1", [id], |_| Ok(()))
        .optional()?;
    Ok(found.is_some())
}

/// Column values for one item row, before validation.
struct RawItem {
    id: String,
    name: Option<String>,
    category: String,
    color: Option<String>,
    material: Option<String>,
    seasons: String,
    notes: Option<String>,
    created_at: String,
}

impl RawItem {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            category: row.get(2)?,
            color: row.get(3)?,
            material: row.get(4)?,
            seasons: row.get(5)?,
            notes: row.get(6)?,
            created_at: row.get(7)?,
        })
    }

    fn into_item(self) -> Result<ClothingItem> {
        let category = Category::from_code(&self.category).ok_or_else(|| {
            StorageError::Corrupt(format!(
                "item {} has unknown category: {}",
                self.id, self.category
            ))
        })?;
        let seasons = deserialize_seasons(&self.seasons)?;
        let created_at = self
            .created_at
            .parse::<Timestamp>()
            .map_err(|e| StorageError::Corrupt(format!("invalid created_at: {e}")))?;

        Ok(ClothingItem {
            id: Some(self.id),
            name: self.name,
            category,
            color: self.color,
            material: self.material,
            seasons,
            notes: self.notes,
            created_at: Some(created_at),
        })
    }
}

/// Seasons as a comma-separated list of codes.
fn serialize_seasons(seasons: &BTreeSet<Season>) -> String {
    seasons
        .iter()
        .map(|s| s.as_str())
        .collect::<Vec<_>>()
        .join(",")
}

fn deserialize_seasons(column: &str) -> Result<BTreeSet<Season>> {
    column
        .split(',')
        .filter(|code| !code.is_empty())
        .map(|code| {
            Season::from_code(code)
                .ok_or_else(|| StorageError::Corrupt(format!("unknown season: {code}")))
        })
        .collect()
}
