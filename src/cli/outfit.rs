//! Manual outfit assembly.

use crate::{
    model::{ClothingItem, Outfit, Slot},
    storage::Storage,
};

use super::format::{format_outfit, short_id, slot_label};
use super::resolve_item;

pub(super) fn cmd_outfit(storage: &Storage, references: &[String]) -> Result<(), String> {
    let items = references
        .iter()
        .map(|r| resolve_item(storage, r))
        .collect::<Result<Vec<_>, _>>()?;

    let outfit = assemble(items)?;

    println!("{}", format_outfit(&outfit));
    if outfit.is_complete() {
        println!("Outfit complete");
    } else {
        let missing: Vec<&str> = outfit.missing().map(slot_label).collect();
        println!("Missing: {}", missing.join(", "));
    }
    Ok(())
}

/// Places each item in its slot, refusing two items for one slot.
fn assemble(items: Vec<ClothingItem>) -> Result<Outfit, String> {
    let mut outfit = Outfit::default();
    for item in items {
        let slot = Slot::for_category(item.category);
        let newcomer = format!("{} ({})", item.label(), short_id(&item));
        if let Some(previous) = outfit.place(item) {
            return Err(format!(
                "two items for the {} slot: {} ({}) and {newcomer}",
                slot_label(slot).to_lowercase(),
                previous.label(),
                short_id(&previous),
            ));
        }
    }
    Ok(outfit)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::model::Category;

    #[test]
    fn assembles_partial_outfit() {
        let outfit = assemble(vec![
            ClothingItem::new(Category::Shoes).named("Boots"),
            ClothingItem::new(Category::Top).named("Coat"),
        ])
        .unwrap();

        assert!(!outfit.is_complete());
        assert_eq!(outfit.get(Slot::Top).unwrap().label(), "Coat");
        assert_eq!(outfit.missing().collect::<Vec<_>>(), vec![Slot::Bottom]);
    }

    #[test]
    fn rejects_two_items_for_one_slot() {
        let err = assemble(vec![
            ClothingItem::new(Category::Top).named("Coat"),
            ClothingItem::new(Category::Top).named("Shirt"),
        ])
        .unwrap_err();

        assert_eq!(err, "two items for the top slot: Coat (-) and Shirt (-)");
    }
}
