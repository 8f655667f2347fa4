//! Outfit recommendation: the domain logic for suggesting what to wear.
//!
//! Given a weather reading and a snapshot of the wardrobe, pick one item
//! for each slot and explain the choice. The rules are fixed: which item
//! is picked is up to a [`Selector`], and the wording depends only on the
//! weather and on which slots could be filled.
//!
//! The engine never fails. Missing categories leave slots empty and are
//! reflected in the reason text.

use std::thread;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::model::{
    ClothingItem, Outfit, Recommendation, Slot, TemperatureBand, WeatherReading,
};

/// Reason given when no item fits any slot.
pub const EMPTY_WARDROBE: &str = "wardrobe is empty — add clothing items to get recommendations";

/// Appended when some, but not all, slots were filled.
pub const ADD_MORE_ITEMS: &str =
    "Consider adding more items to your wardrobe for more precise recommendations.";

/// Picks one candidate out of a non-empty pool.
///
/// Returns an index into the pool. `pool_len` is always at least 1.
/// Out-of-range answers wrap around rather than fail.
pub trait Selector {
    fn pick(&mut self, slot: Slot, weather: &WeatherReading, pool_len: usize) -> usize;
}

impl<F> Selector for F
where
    F: FnMut(Slot, &WeatherReading, usize) -> usize,
{
    fn pick(&mut self, slot: Slot, weather: &WeatherReading, pool_len: usize) -> usize {
        self(slot, weather, pool_len)
    }
}

/// Uniformly random selection.
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    /// Seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible: the same seed over the same snapshot picks the same items.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl Selector for RandomSelector {
    fn pick(&mut self, _slot: Slot, _weather: &WeatherReading, pool_len: usize) -> usize {
        self.rng.random_range(0..pool_len)
    }
}

/// Always the first candidate in wardrobe order.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstSelector;

impl Selector for FirstSelector {
    fn pick(&mut self, _slot: Slot, _weather: &WeatherReading, _pool_len: usize) -> usize {
        0
    }
}

/// Suggest an outfit for the weather from the given items.
///
/// Items are grouped into one pool per slot, keeping their order. Each
/// non-empty pool contributes one item, chosen by `selector`, and one
/// phrase to the reason.
pub fn recommend(
    weather: &WeatherReading,
    items: &[ClothingItem],
    selector: &mut (impl Selector + ?Sized),
) -> Recommendation {
    let mut outfit = Outfit::default();
    let mut phrases = String::new();

    for slot in Slot::ALL {
        let pool: Vec<&ClothingItem> = items
            .iter()
            .filter(|item| Slot::for_category(item.category) == slot)
            .collect();
        if pool.is_empty() {
            debug!(?slot, "no candidates");
            continue;
        }

        let index = selector.pick(slot, weather, pool.len()) % pool.len();
        let chosen = pool[index];
        debug!(?slot, index, candidates = pool.len(), item = chosen.label(), "selected");

        outfit.place(chosen.clone());
        phrases.push_str(slot_phrase(slot, weather));
        phrases.push_str(". ");
    }

    let reason = if outfit.is_empty() {
        EMPTY_WARDROBE.to_string()
    } else if outfit.is_complete() {
        let rain = if weather.is_raining() { ", raining" } else { "" };
        format!(
            "Ideal outfit for {}°C{rain}. {phrases}",
            weather.temperature()
        )
    } else {
        phrases.push_str(ADD_MORE_ITEMS);
        phrases
    };

    Recommendation { outfit, reason }
}

/// The phrase explaining a filled slot, without trailing punctuation.
///
/// The top follows the temperature band. Bottom and shoes only care
/// whether it is strictly above 20°C, and for shoes rain comes first.
pub fn slot_phrase(slot: Slot, weather: &WeatherReading) -> &'static str {
    match slot {
        Slot::Top => match weather.band() {
            TemperatureBand::Cold => "cold weather requires warm outerwear",
            TemperatureBand::Cool => "cool weather — medium outerwear is suitable",
            TemperatureBand::Mild => "moderate temperature — light outerwear",
            TemperatureBand::Warm => "warm weather — light clothing",
        },
        Slot::Bottom => {
            if weather.is_hot() {
                "warm weather — light pants or shorts"
            } else {
                "suitable pants selected"
            }
        }
        Slot::Shoes => {
            if weather.is_raining() {
                "rainy weather — closed-toe shoes recommended"
            } else if weather.is_hot() {
                "warm weather — any shoes work"
            } else {
                "suitable shoes selected"
            }
        }
    }
}

/// A selector plus an optional pause before answering.
///
/// The pause stands in for the latency of a remote advisor. It has no
/// effect on the result.
pub struct Advisor {
    selector: Box<dyn Selector>,
    delay: Option<Duration>,
}

impl Advisor {
    pub fn new(selector: impl Selector + 'static) -> Self {
        Self {
            selector: Box::new(selector),
            delay: None,
        }
    }

    /// Pause this long before each recommendation. Zero disables the pause.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = (!delay.is_zero()).then_some(delay);
        self
    }

    pub fn recommend(&mut self, weather: &WeatherReading, items: &[ClothingItem]) -> Recommendation {
        if let Some(delay) = self.delay {
            debug!(?delay, "simulating advisor latency");
            thread::sleep(delay);
        }
        recommend(weather, items, self.selector.as_mut())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::time::Instant;

    use crate::model::Category;

    fn weather(temperature: f64, raining: bool) -> WeatherReading {
        WeatherReading::new(temperature, raining).unwrap()
    }

    fn item(category: Category, name: &str) -> ClothingItem {
        ClothingItem::new(category).named(name)
    }

    fn full_wardrobe() -> Vec<ClothingItem> {
        vec![
            item(Category::Top, "Parka"),
            item(Category::Bottom, "Jeans"),
            item(Category::Shoes, "Boots"),
        ]
    }

    fn first(weather: &WeatherReading, items: &[ClothingItem]) -> Recommendation {
        recommend(weather, items, &mut FirstSelector)
    }

    #[test]
    fn empty_wardrobe() {
        let rec = first(&weather(15.0, false), &[]);

        assert!(rec.outfit.is_empty());
        assert_eq!(rec.reason, EMPTY_WARDROBE);
    }

    #[test]
    fn empty_wardrobe_message_ignores_weather() {
        for (t, rain) in [(-40.0, true), (0.0, false), (45.0, true)] {
            let rec = first(&weather(t, rain), &[]);
            assert_eq!(rec.reason, EMPTY_WARDROBE);
        }
    }

    #[test]
    fn cold_full_outfit() {
        let rec = first(&weather(-5.0, false), &full_wardrobe());

        assert!(rec.outfit.is_complete());
        assert!(rec.reason.starts_with("Ideal outfit for -5°C."));
        assert!(rec.reason.contains("cold weather requires warm outerwear."));
        assert_eq!(
            rec.reason,
            "Ideal outfit for -5°C. cold weather requires warm outerwear. \
             suitable pants selected. suitable shoes selected. "
        );
    }

    #[test]
    fn rainy_full_outfit_mentions_rain() {
        let rec = first(&weather(12.5, true), &full_wardrobe());

        assert!(rec.reason.starts_with("Ideal outfit for 12.5°C, raining. "));
        assert!(rec.reason.contains("moderate temperature — light outerwear. "));
        assert!(rec.reason.contains("rainy weather — closed-toe shoes recommended. "));
    }

    #[test]
    fn shoes_only_in_warm_rain() {
        let items = vec![item(Category::Shoes, "Sneakers")];
        let rec = first(&weather(25.0, true), &items);

        assert!(rec.outfit.get(Slot::Top).is_none());
        assert!(rec.outfit.get(Slot::Bottom).is_none());
        assert_eq!(rec.outfit.get(Slot::Shoes).unwrap().label(), "Sneakers");
        assert!(rec.reason.contains("rainy weather — closed-toe shoes recommended"));
        assert!(!rec.reason.contains("any shoes work"));
        assert!(rec.reason.ends_with(ADD_MORE_ITEMS));
        assert!(!rec.reason.starts_with("Ideal outfit"));
    }

    #[test]
    fn partial_outfit_lists_phrases_then_suffix() {
        let items = vec![item(Category::Top, "Tee"), item(Category::Bottom, "Shorts")];
        let rec = first(&weather(30.0, false), &items);

        assert_eq!(
            rec.reason,
            format!("warm weather — light clothing. warm weather — light pants or shorts. {ADD_MORE_ITEMS}")
        );
        assert!(rec.outfit.get(Slot::Shoes).is_none());
    }

    #[test]
    fn top_phrase_per_band() {
        let cases = [
            (-0.5, "cold weather requires warm outerwear"),
            (0.0, "cool weather — medium outerwear is suitable"),
            (9.9, "cool weather — medium outerwear is suitable"),
            (10.0, "moderate temperature — light outerwear"),
            (19.9, "moderate temperature — light outerwear"),
            (20.0, "warm weather — light clothing"),
            (35.0, "warm weather — light clothing"),
        ];
        for (t, expected) in cases {
            assert_eq!(slot_phrase(Slot::Top, &weather(t, false)), expected, "at {t}");
        }
    }

    #[test]
    fn twenty_degrees_is_not_warm_for_bottom_and_shoes() {
        let at_twenty = weather(20.0, false);
        assert_eq!(slot_phrase(Slot::Bottom, &at_twenty), "suitable pants selected");
        assert_eq!(slot_phrase(Slot::Shoes, &at_twenty), "suitable shoes selected");

        let just_above = weather(20.01, false);
        assert_eq!(
            slot_phrase(Slot::Bottom, &just_above),
            "warm weather — light pants or shorts"
        );
        assert_eq!(slot_phrase(Slot::Shoes, &just_above), "warm weather — any shoes work");
    }

    #[test]
    fn rain_takes_precedence_for_shoes_at_any_temperature() {
        for t in [-10.0, 5.0, 20.0, 30.0] {
            assert_eq!(
                slot_phrase(Slot::Shoes, &weather(t, true)),
                "rainy weather — closed-toe shoes recommended"
            );
        }
    }

    #[test]
    fn slots_only_hold_matching_categories() {
        let items = vec![
            item(Category::Shoes, "Loafers"),
            item(Category::Top, "Shirt"),
            item(Category::Shoes, "Boots"),
            item(Category::Bottom, "Chinos"),
            item(Category::Top, "Hoodie"),
        ];
        let mut selector = RandomSelector::seeded(7);
        for _ in 0..50 {
            let rec = recommend(&weather(8.0, false), &items, &mut selector);
            for (slot, chosen) in rec.outfit.populated() {
                assert_eq!(chosen.category, slot.category());
            }
            assert!(rec.outfit.is_complete());
        }
    }

    #[test]
    fn missing_category_leaves_slot_empty() {
        let items = vec![item(Category::Top, "Shirt"), item(Category::Shoes, "Boots")];
        let rec = first(&weather(5.0, false), &items);

        assert!(rec.outfit.get(Slot::Bottom).is_none());
        assert!(!rec.reason.contains("pants"));
        assert!(rec.reason.ends_with(ADD_MORE_ITEMS));
    }

    #[test]
    fn selector_index_follows_wardrobe_order() {
        let items = vec![
            item(Category::Top, "Shirt"),
            item(Category::Bottom, "Jeans"),
            item(Category::Top, "Sweater"),
            item(Category::Top, "Coat"),
        ];
        let mut pick_second = |_: Slot, _: &WeatherReading, _: usize| -> usize { 1 };
        let rec = recommend(&weather(5.0, false), &items, &mut pick_second);

        assert_eq!(rec.outfit.get(Slot::Top).unwrap().label(), "Sweater");
        // Pool of one: index 1 wraps to 0.
        assert_eq!(rec.outfit.get(Slot::Bottom).unwrap().label(), "Jeans");
    }

    #[test]
    fn selector_sees_slot_weather_and_pool_size() {
        let items = vec![
            item(Category::Top, "A"),
            item(Category::Top, "B"),
            item(Category::Shoes, "C"),
        ];
        let mut seen = Vec::new();
        let mut record = |slot: Slot, w: &WeatherReading, len: usize| -> usize {
            seen.push((slot, w.band(), w.is_raining(), len));
            0
        };
        recommend(&weather(-3.0, true), &items, &mut record);

        assert_eq!(
            seen,
            vec![
                (Slot::Top, TemperatureBand::Cold, true, 2),
                (Slot::Shoes, TemperatureBand::Cold, true, 1),
            ]
        );
    }

    #[test]
    fn wild_selector_never_panics() {
        let items = full_wardrobe();
        let mut huge = |_: Slot, _: &WeatherReading, _: usize| -> usize { usize::MAX };
        let rec = recommend(&weather(1.0, false), &items, &mut huge);
        assert!(rec.outfit.is_complete());
    }

    #[test]
    fn same_seed_same_outfit() {
        let items: Vec<ClothingItem> = (0..20)
            .map(|i| {
                let category = [Category::Top, Category::Bottom, Category::Shoes][i % 3];
                item(category, &format!("item-{i}"))
            })
            .collect();
        let w = weather(14.0, false);

        let a = recommend(&w, &items, &mut RandomSelector::seeded(42));
        let b = recommend(&w, &items, &mut RandomSelector::seeded(42));
        assert_eq!(a, b);
    }

    #[test]
    fn random_selection_reaches_every_candidate() {
        let items: Vec<ClothingItem> = (0..4)
            .map(|i| item(Category::Top, &format!("top-{i}")))
            .collect();
        let mut selector = RandomSelector::seeded(1);
        let mut seen = std::collections::BTreeSet::new();
        for _ in 0..200 {
            let rec = recommend(&weather(10.0, false), &items, &mut selector);
            seen.insert(rec.outfit.get(Slot::Top).unwrap().label().to_string());
        }
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn reason_is_never_empty() {
        let wardrobes = [
            vec![],
            vec![item(Category::Top, "T")],
            vec![item(Category::Bottom, "B")],
            full_wardrobe(),
        ];
        for items in &wardrobes {
            for t in [-30.0, 0.0, 10.0, 20.0, 20.5, 40.0] {
                for rain in [false, true] {
                    let rec = first(&weather(t, rain), items);
                    assert!(!rec.reason.is_empty());
                }
            }
        }
    }

    #[test]
    fn input_is_left_untouched() {
        let items = full_wardrobe();
        let before = items.clone();
        first(&weather(3.0, true), &items);
        assert_eq!(items, before);
    }

    #[test]
    fn concurrent_calls_are_independent() {
        let items = full_wardrobe();
        thread::scope(|scope| {
            let handles: Vec<_> = [-5.0, 25.0]
                .into_iter()
                .map(|t| {
                    let items = &items;
                    scope.spawn(move || first(&weather(t, false), items))
                })
                .collect();
            let results: Vec<Recommendation> =
                handles.into_iter().map(|h| h.join().unwrap()).collect();
            assert!(results[0].reason.starts_with("Ideal outfit for -5°C."));
            assert!(results[1].reason.starts_with("Ideal outfit for 25°C."));
        });
    }

    #[test]
    fn advisor_without_delay_matches_engine() {
        let items = full_wardrobe();
        let w = weather(18.0, false);
        let mut advisor = Advisor::new(FirstSelector);
        assert_eq!(advisor.recommend(&w, &items), first(&w, &items));
    }

    #[test]
    fn advisor_waits_for_configured_delay() {
        let mut advisor = Advisor::new(FirstSelector).with_delay(Duration::from_millis(20));
        let started = Instant::now();
        let rec = advisor.recommend(&weather(0.0, false), &[]);

        assert!(started.elapsed() >= Duration::from_millis(20));
        assert_eq!(rec.reason, EMPTY_WARDROBE);
    }

    #[test]
    fn zero_delay_disables_pause() {
        let advisor = Advisor::new(FirstSelector).with_delay(Duration::ZERO);
        assert!(advisor.delay.is_none());
    }
}
