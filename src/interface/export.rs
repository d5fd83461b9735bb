use std::path::Path;

use crate::engine::ranking::{lush_profit, lush_profit_per_hour, lush_roi};
use crate::error::Result;
use crate::models::Plant;

/// Write a ranking table to CSV with lush-baseline metrics per plant.
pub fn write_ranking_csv<P: AsRef<Path>>(path: P, plants: &[&Plant]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "rank",
        "slug",
        "name",
        "rarity",
        "cost",
        "base_value",
        "grow_time_sec",
        "lush_profit",
        "lush_roi_pct",
        "lush_profit_per_hour",
    ])?;

    for (i, plant) in plants.iter().enumerate() {
        wtr.write_record([
            (i + 1).to_string(),
            plant.slug.clone(),
            plant.name.clone(),
            plant.rarity.as_str().to_string(),
            format!("{:.0}", plant.cost),
            format!("{:.0}", plant.base_value),
            format!("{:.0}", plant.grow_time_sec),
            format!("{:.0}", lush_profit(plant)),
            format!("{:.1}", lush_roi(plant)),
            format!("{:.0}", lush_profit_per_hour(plant)),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
