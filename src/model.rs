//! Core data model for the wardrobe.
//!
//! These types are plain values: clothing items, the weather they are
//! chosen for, and the outfits and recommendations built from them.
//! Nothing here touches storage.

mod item;
mod outfit;
mod weather;

pub use item::{Category, ClothingItem, ItemFilter, Season, distinct_materials};
pub use outfit::{Outfit, Recommendation, Slot};
pub use weather::{TemperatureBand, WeatherReading};
