//! Moving items in and out of the wardrobe as JSON.
//!
//! Export writes the model shape. Import is more forgiving: it also reads
//! the document-store shape (`_id`, legacy category labels, `createdAt`
//! as epoch milliseconds, `"not specified"` placeholders, a single season
//! instead of a list) and skips records that are malformed or whose
//! category doesn't name an outfit slot.

use std::collections::BTreeSet;

use jiff::Timestamp;
use serde::Deserialize;
use tracing::warn;

use crate::model::{Category, ClothingItem, Season};

/// Placeholder the document store writes for unset color and material.
const NOT_SPECIFIED: &str = "not specified";

/// The result of parsing an import file.
#[derive(Debug, Default)]
pub struct ImportBatch {
    /// Items ready to be stored, in file order.
    pub items: Vec<ClothingItem>,

    /// Records dropped because they were malformed or their category was
    /// missing or unknown.
    pub skipped: usize,
}

/// JSON shape of an item record from an export or the document store.
///
/// Unknown fields (images, owner, version counters) are ignored.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ItemRecord {
    #[serde(default)]
    id: Option<String>,

    #[serde(default, rename = "_id")]
    document_id: Option<String>,

    #[serde(default)]
    name: Option<String>,

    #[serde(default)]
    category: Option<String>,

    #[serde(default)]
    color: Option<String>,

    #[serde(default)]
    material: Option<String>,

    #[serde(default, alias = "season")]
    seasons: Option<SeasonCodes>,

    #[serde(default)]
    notes: Option<String>,

    #[serde(default)]
    created_at: Option<CreatedAt>,
}

/// Seasons as a list of codes, or one bare code.
#[derive(Deserialize)]
#[serde(untagged)]
enum SeasonCodes {
    One(String),
    Many(Vec<String>),
}

impl SeasonCodes {
    /// Known seasons only. Unknown codes are dropped.
    fn into_seasons(self) -> BTreeSet<Season> {
        match self {
            Self::One(code) => Season::from_code(&code).into_iter().collect(),
            Self::Many(codes) => codes
                .iter()
                .filter_map(|code| Season::from_code(code))
                .collect(),
        }
    }
}

/// Creation time as either epoch milliseconds or a timestamp string.
#[derive(Deserialize)]
#[serde(untagged)]
enum CreatedAt {
    Millis(i64),
    Text(String),
}

impl CreatedAt {
    fn to_timestamp(&self) -> Option<Timestamp> {
        match self {
            Self::Millis(ms) => Timestamp::from_millisecond(*ms).ok(),
            Self::Text(text) => text.parse().ok(),
        }
    }
}

/// Parses a JSON array of item records.
///
/// Fails only when the text isn't a JSON array. Records that aren't
/// objects, have a field of the wrong type, or have an unusable category
/// are counted in [`ImportBatch::skipped`]; unknown seasons and
/// unparseable timestamps are dropped from otherwise valid records.
pub fn parse_import(json: &str) -> Result<ImportBatch, serde_json::Error> {
    let values: Vec<serde_json::Value> = serde_json::from_str(json)?;
    let mut batch = ImportBatch::default();

    for (index, value) in values.into_iter().enumerate() {
        let record = match serde_json::from_value::<ItemRecord>(value) {
            Ok(record) => record,
            Err(e) => {
                warn!(index, error = %e, "skipping malformed record");
                batch.skipped += 1;
                continue;
            }
        };

        let id = record.id.or(record.document_id);
        let Some(category) = record.category.as_deref().and_then(Category::from_code) else {
            warn!(
                id = id.as_deref().unwrap_or("-"),
                category = record.category.as_deref().unwrap_or("-"),
                "skipping record without a usable category"
            );
            batch.skipped += 1;
            continue;
        };

        batch.items.push(ClothingItem {
            id,
            name: specified(record.name),
            category,
            color: specified(record.color),
            material: specified(record.material),
            seasons: record
                .seasons
                .map(SeasonCodes::into_seasons)
                .unwrap_or_default(),
            notes: specified(record.notes),
            created_at: record.created_at.as_ref().and_then(CreatedAt::to_timestamp),
        });
    }

    Ok(batch)
}

/// Serializes items as a pretty-printed JSON array that [`parse_import`] reads back.
pub fn export_json(items: &[ClothingItem]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(items)
}

/// Treats blanks and the store's placeholder as absent.
fn specified(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case(NOT_SPECIFIED))
}
