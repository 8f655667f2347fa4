//! Output formatting for CLI display.

use std::collections::BTreeSet;

use crate::model::{Category, ClothingItem, Outfit, Season, Slot};

/// Display label for a category.
pub(super) fn category_label(category: Category) -> &'static str {
    match category {
        Category::Top => "Top",
        Category::Bottom => "Bottom",
        Category::Shoes => "Shoes",
    }
}

pub(super) fn slot_label(slot: Slot) -> &'static str {
    category_label(slot.category())
}

/// The first eight characters of an item's id, or `-` for transient items.
pub(super) fn short_id(item: &ClothingItem) -> String {
    match &item.id {
        Some(id) => id.chars().take(8).collect(),
        None => "-".to_string(),
    }
}

pub(super) fn format_seasons(seasons: &BTreeSet<Season>) -> String {
    if seasons.is_empty() {
        return "any season".to_string();
    }
    seasons
        .iter()
        .map(|s| s.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// One-line summary for listings.
pub(super) fn format_item_line(item: &ClothingItem) -> String {
    let mut line = format!(
        "{}  [{}]  {}",
        short_id(item),
        category_label(item.category),
        item.label()
    );
    let details: Vec<&str> = [item.color.as_deref(), item.material.as_deref()]
        .into_iter()
        .flatten()
        .collect();
    if !details.is_empty() {
        line.push_str(&format!("  ({})", details.join(", ")));
    }
    if !item.seasons.is_empty() {
        line.push_str(&format!("  {{{}}}", format_seasons(&item.seasons)));
    }
    line
}

/// Every field, one per line.
pub(super) fn format_item_detail(item: &ClothingItem) -> String {
    let or_dash = |v: Option<&str>| v.unwrap_or("-").to_string();
    let created = item
        .created_at
        .map_or_else(|| "-".to_string(), |t| t.to_string());

    [
        format!("id:        {}", or_dash(item.id.as_deref())),
        format!("name:      {}", or_dash(item.name.as_deref())),
        format!("category:  {}", category_label(item.category)),
        format!("color:     {}", or_dash(item.color.as_deref())),
        format!("material:  {}", or_dash(item.material.as_deref())),
        format!("seasons:   {}", format_seasons(&item.seasons)),
        format!("notes:     {}", or_dash(item.notes.as_deref())),
        format!("created:   {created}"),
    ]
    .join("\n")
}

/// One line per slot. Empty slots are shown as such.
pub(super) fn format_outfit(outfit: &Outfit) -> String {
    Slot::ALL
        .into_iter()
        .map(|slot| {
            let label = format!("{}:", slot_label(slot));
            match outfit.get(slot) {
                Some(item) => format!("{label:<8}{} ({})", item.label(), short_id(item)),
                None => format!("{label:<8}(none)"),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
