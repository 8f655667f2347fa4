//! The recommend command: load the wardrobe, read the weather, suggest an outfit.

use tracing::info;

use crate::{
    config::Config,
    model::{Recommendation, WeatherReading},
    recommend::{Advisor, FirstSelector, RandomSelector},
    storage::Storage,
};

use super::format::format_outfit;

pub(super) struct RecommendArgs {
    pub temperature: f64,
    pub raining: bool,
    pub seed: Option<u64>,
    pub first: bool,
    pub json: bool,
}

pub(super) fn cmd_recommend(
    config: &Config,
    storage: &Storage,
    args: &RecommendArgs,
) -> Result<(), String> {
    let weather = WeatherReading::new(args.temperature, args.raining)
        .map_err(|e| format!("invalid weather: {e}"))?;

    let items = storage
        .list_items()
        .map_err(|e| format!("failed to load wardrobe: {e}"))?;

    let mut advisor = advisor_for(config, args);
    let recommendation = advisor.recommend(&weather, &items);
    info!(
        items = items.len(),
        filled = recommendation.outfit.populated().count(),
        complete = recommendation.outfit.is_complete(),
        "recommendation ready"
    );

    if args.json {
        let json = serde_json::to_string_pretty(&recommendation)
            .map_err(|e| format!("failed to serialize recommendation: {e}"))?;
        println!("{json}");
    } else {
        println!("{}", render(&recommendation));
    }
    Ok(())
}

/// `--first` beats any seed; an explicit `--seed` beats the configured one.
fn advisor_for(config: &Config, args: &RecommendArgs) -> Advisor {
    let advisor = if args.first {
        Advisor::new(FirstSelector)
    } else {
        match args.seed.or(config.seed) {
            Some(seed) => Advisor::new(RandomSelector::seeded(seed)),
            None => Advisor::new(RandomSelector::new()),
        }
    };
    advisor.with_delay(config.delay())
}

fn render(recommendation: &Recommendation) -> String {
    if recommendation.outfit.is_empty() {
        return recommendation.reason.clone();
    }
    format!(
        "{}\n\n{}",
        format_outfit(&recommendation.outfit),
        recommendation.reason.trim_end()
    )
}
