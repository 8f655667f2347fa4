//! Outfits and recommendations.

use serde::{Deserialize, Serialize};

use super::item::{Category, ClothingItem};

/// An outfit position. Each slot accepts exactly one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Slot {
    Top,
    Bottom,
    Shoes,
}

impl Slot {
    /// Every slot, in dressing order.
    pub const ALL: [Self; 3] = [Self::Top, Self::Bottom, Self::Shoes];

    pub fn for_category(category: Category) -> Self {
        match category {
            Category::Top => Self::Top,
            Category::Bottom => Self::Bottom,
            Category::Shoes => Self::Shoes,
        }
    }

    pub fn category(self) -> Category {
        match self {
            Self::Top => Category::Top,
            Self::Bottom => Category::Bottom,
            Self::Shoes => Category::Shoes,
        }
    }
}

/// At most one item per slot. An empty slot means nothing suitable was found.
///
/// Items can only enter through [`Outfit::place`], which routes them by
/// category, so a slot never holds an item of another category.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Outfit {
    #[serde(skip_serializing_if = "Option::is_none")]
    top: Option<ClothingItem>,

    #[serde(skip_serializing_if = "Option::is_none")]
    bottom: Option<ClothingItem>,

    #[serde(skip_serializing_if = "Option::is_none")]
    shoes: Option<ClothingItem>,
}

impl Outfit {
    /// Puts the item into the slot matching its category.
    ///
    /// Returns the item previously in that slot, if any.
    pub fn place(&mut self, item: ClothingItem) -> Option<ClothingItem> {
        let slot = Slot::for_category(item.category);
        self.slot_mut(slot).replace(item)
    }

    pub fn get(&self, slot: Slot) -> Option<&ClothingItem> {
        match slot {
            Slot::Top => self.top.as_ref(),
            Slot::Bottom => self.bottom.as_ref(),
            Slot::Shoes => self.shoes.as_ref(),
        }
    }

    pub fn is_empty(&self) -> bool {
        Slot::ALL.iter().all(|s| self.get(*s).is_none())
    }

    pub fn is_complete(&self) -> bool {
        Slot::ALL.iter().all(|s| self.get(*s).is_some())
    }

    /// The populated slots and their items, in dressing order.
    pub fn populated(&self) -> impl Iterator<Item = (Slot, &ClothingItem)> {
        Slot::ALL
            .into_iter()
            .filter_map(|slot| self.get(slot).map(|item| (slot, item)))
    }

    /// Slots with nothing in them.
    pub fn missing(&self) -> impl Iterator<Item = Slot> {
        Slot::ALL.into_iter().filter(|slot| self.get(*slot).is_none())
    }

    fn slot_mut(&mut self, slot: Slot) -> &mut Option<ClothingItem> {
        match slot {
            Slot::Top => &mut self.top,
            Slot::Bottom => &mut self.bottom,
            Slot::Shoes => &mut self.shoes,
        }
    }
}

/// A suggested outfit and the reasoning behind it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub outfit: Outfit,
    pub reason: String,
}
