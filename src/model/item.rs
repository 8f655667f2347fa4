//! Clothing items: what the wardrobe holds.

use std::collections::BTreeSet;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// The kind of garment, which decides the outfit slot it can fill.
///
/// Serialized as the short code (`"top"`, `"bottom"`, `"shoes"`).
/// The display labels older exports stored are accepted on the way in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[serde(alias = "Top", alias = "Верх")]
    Top,

    #[serde(alias = "Bottom", alias = "Низ")]
    Bottom,

    #[serde(alias = "Shoes", alias = "Обувь")]
    Shoes,
}

impl Category {
    /// The canonical short code.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Shoes => "shoes",
        }
    }

    /// Parses a short code or a legacy display label.
    ///
    /// Returns `None` for anything that doesn't name one of the three slots.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "top" | "Top" | "Верх" => Some(Self::Top),
            "bottom" | "Bottom" | "Низ" => Some(Self::Bottom),
            "shoes" | "Shoes" | "Обувь" => Some(Self::Shoes),
            _ => None,
        }
    }
}

/// A season an item is suited for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Spring => "spring",
            Self::Summer => "summer",
            Self::Autumn => "autumn",
            Self::Winter => "winter",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "spring" => Some(Self::Spring),
            "summer" => Some(Self::Summer),
            "autumn" | "fall" => Some(Self::Autumn),
            "winter" => Some(Self::Winter),
            _ => None,
        }
    }
}

/// A single piece of clothing.
///
/// `id` is absent for transient items that were never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClothingItem {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub name: Option<String>,

    pub category: Category,

    #[serde(default)]
    pub color: Option<String>,

    #[serde(default)]
    pub material: Option<String>,

    /// Seasons the item suits. Empty means none were tagged.
    #[serde(default, alias = "season")]
    pub seasons: BTreeSet<Season>,

    #[serde(default)]
    pub notes: Option<String>,

    #[serde(default)]
    pub created_at: Option<Timestamp>,
}

impl ClothingItem {
    /// A transient item with only a category set.
    pub fn new(category: Category) -> Self {
        Self {
            id: None,
            name: None,
            category,
            color: None,
            material: None,
            seasons: BTreeSet::new(),
            notes: None,
            created_at: None,
        }
    }

    #[cfg(test)]
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The name, or the category code when the item is unnamed.
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(self.category.as_str())
    }
}

/// Narrows a wardrobe listing. Unset criteria match everything.
#[derive(Debug, Clone, Default)]
pub struct ItemFilter {
    pub category: Option<Category>,
    pub season: Option<Season>,
    pub material: Option<String>,
}

impl ItemFilter {
    /// True when the item satisfies every criterion that is set.
    ///
    /// Material comparison ignores case.
    pub fn matches(&self, item: &ClothingItem) -> bool {
        if self.category.is_some_and(|c| c != item.category) {
            return false;
        }
        if self.season.is_some_and(|s| !item.seasons.contains(&s)) {
            return false;
        }
        if let Some(wanted) = &self.material {
            let Some(material) = &item.material else {
                return false;
            };
            if material.to_lowercase() != wanted.to_lowercase() {
                return false;
            }
        }
        true
    }

    /// The items that match, in their original order.
    pub fn apply<'a>(&self, items: &'a [ClothingItem]) -> Vec<&'a ClothingItem> {
        items.iter().filter(|item| self.matches(item)).collect()
    }
}

/// Distinct materials across the items, sorted, compared case-insensitively.
pub fn distinct_materials(items: &[ClothingItem]) -> Vec<String> {
    let mut seen = BTreeSet::new();
    let mut materials = Vec::new();
    for material in items.iter().filter_map(|i| i.material.as_deref()) {
        let material = material.trim();
        if material.is_empty() {
            continue;
        }
        if seen.insert(material.to_lowercase()) {
            materials.push(material.to_string());
        }
    }
    materials.sort_by_key(|m| m.to_lowercase());
    materials
}
