use crate::engine::ranking::{lush_profit, lush_profit_per_hour, lush_roi};
use crate::engine::{Goal, NextAction};
use crate::models::{CalculationResult, Mutation, Plant, RedeemCode, SavedPlan, UserProgress};
use crate::state::achievement_info;

/// Format a coin amount with K/M suffixes.
pub fn format_currency(value: f64, include_unit: bool) -> String {
    let unit = if include_unit { " coins" } else { "" };
    if value >= 1_000_000.0 {
        format!("{:.2}M{}", value / 1_000_000.0, unit)
    } else if value >= 1_000.0 {
        format!("{:.1}K{}", value / 1_000.0, unit)
    } else {
        format!("{:.0}{}", value, unit)
    }
}

/// Format a duration in seconds as h/m/s.
pub fn format_time(seconds: f64) -> String {
    let seconds = seconds as u64;
    if seconds >= 3600 {
        format!("{}h {}m", seconds / 3600, (seconds % 3600) / 60)
    } else if seconds >= 60 {
        format!("{}m {}s", seconds / 60, seconds % 60)
    } else {
        format!("{}s", seconds)
    }
}

/// Display a full calculation result.
pub fn display_result(result: &CalculationResult) {
    println!();
    println!("=== {} ({}) ===", result.plant.name, result.stage.as_str());
    println!();

    if !result.mutation_keys.is_empty() {
        println!("Mutations: {}", result.mutation_keys.join(", "));
    }
    println!("Weight: {} kg", result.weight);
    println!();

    println!("Sell price:      {}", format_currency(result.sell_price, true));
    println!("Profit:          {}", format_currency(result.profit, true));
    println!("ROI:             {:.1}%", result.roi);
    println!("Profit per hour: {}", format_currency(result.profit_per_hour, true));
    println!("Grade:           {}", result.grade.as_str());

    if let Some(loss) = result.loss_if_harvest_now {
        println!();
        println!("Harvesting now forfeits {:.1}% of lush value.", loss);
    }
    if let Some(gap) = result.gap_to_best {
        println!("Waiting for lush would sell for {:.1}% more.", gap);
    }

    println!();
}

/// Display the next-best-action recommendation.
pub fn display_next_action(action: &NextAction) {
    match action {
        NextAction::WaitForLush { gap_pct } => {
            println!("Next: wait for the lush stage to gain +{:.0}% profit.", gap_pct);
        }
        NextAction::SwitchPlant { name, roi_delta, .. } => {
            println!("Next: switch to {} for +{:.0}% better ROI.", name, roi_delta);
        }
        NextAction::Optimal => {
            println!("Current setup is optimal!");
        }
    }
}

/// Display a ranking table with lush-baseline metrics.
pub fn display_ranking(title: &str, plants: &[&Plant]) {
    if plants.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ===", title);
    println!();

    let max_name_len = plants.iter().map(|p| p.name.len()).max().unwrap_or(10);

    for (i, plant) in plants.iter().enumerate() {
        println!(
            "{:>3}. {:<width$}  cost {:>10}  ROI {:>7.1}%  {:>12}/h  grow {}",
            i + 1,
            plant.name,
            format_currency(plant.cost, false),
            lush_roi(plant),
            format_currency(lush_profit_per_hour(plant), false),
            format_time(plant.grow_time_sec),
            width = max_name_len
        );
    }

    println!();
}

/// Display budget/playtime recommendations.
pub fn display_recommendations(plants: &[&Plant], budget: f64, hours: f64, goal: Goal) {
    if plants.is_empty() {
        println!(
            "No plants found within a budget of {}.",
            format_currency(budget, true)
        );
        return;
    }

    println!();
    println!(
        "=== Recommended for {} and {:.1}h (goal: {}) ===",
        format_currency(budget, true),
        hours,
        goal
    );
    display_ranking_rows(plants, hours);
}

fn display_ranking_rows(plants: &[&Plant], hours: f64) {
    println!();
    let max_name_len = plants.iter().map(|p| p.name.len()).max().unwrap_or(10);

    for (i, plant) in plants.iter().enumerate() {
        let harvests = if plant.grow_time_sec > 0.0 {
            (hours * 3600.0 / plant.grow_time_sec).floor()
        } else {
            0.0
        };
        println!(
            "{:>3}. {:<width$}  cost {:>10}  {:>4.0} harvests  total {:>12}",
            i + 1,
            plant.name,
            format_currency(plant.cost, false),
            harvests,
            format_currency(lush_profit(plant) * harvests, false),
            width = max_name_len
        );
    }

    println!();
}

/// Sort order for the plant database listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlantSort {
    Name,
    Cost,
    #[default]
    Roi,
    Profit,
}

impl std::str::FromStr for PlantSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(PlantSort::Name),
            "cost" => Ok(PlantSort::Cost),
            "roi" => Ok(PlantSort::Roi),
            "profit" => Ok(PlantSort::Profit),
            other => Err(format!(
                "unknown sort '{other}' (expected name, cost, roi, or profit)"
            )),
        }
    }
}

/// Display the plant database, optionally filtered by rarity.
pub fn display_plants(plants: &[Plant], rarity: Option<&str>, sort: PlantSort) {
    let mut filtered: Vec<&Plant> = plants
        .iter()
        .filter(|p| {
            rarity
                .map(|r| p.rarity.as_str().eq_ignore_ascii_case(r))
                .unwrap_or(true)
        })
        .collect();

    match sort {
        PlantSort::Name => filtered.sort_by(|a, b| a.name.cmp(&b.name)),
        PlantSort::Cost => filtered.sort_by(|a, b| {
            a.cost.partial_cmp(&b.cost).unwrap_or(std::cmp::Ordering::Equal)
        }),
        PlantSort::Roi => filtered.sort_by(|a, b| {
            lush_roi(b)
                .partial_cmp(&lush_roi(a))
                .unwrap_or(std::cmp::Ordering::Equal)
        }),
        PlantSort::Profit => filtered.sort_by(|a, b| {
            lush_profit_per_hour(b)
                .partial_cmp(&lush_profit_per_hour(a))
                .unwrap_or(std::cmp::Ordering::Equal)
        }),
    }

    if filtered.is_empty() {
        println!("No plants match.");
        return;
    }

    println!();
    println!("=== Plant Database ({} plants) ===", filtered.len());
    println!();

    for plant in filtered {
        println!(
            "  {} [{}] - cost {}, base {}, grow {}, avg {} kg{}  ({} / {} / {:?})",
            plant.name,
            plant.rarity.as_str(),
            format_currency(plant.cost, false),
            format_currency(plant.base_value, false),
            format_time(plant.grow_time_sec),
            plant.avg_weight,
            if plant.multi_harvest { ", multi-harvest" } else { "" },
            plant.data_source,
            plant.last_verified_at,
            plant.confidence,
        );
    }

    println!();
}

/// Display the mutation catalog.
pub fn display_mutations(mutations: &[Mutation]) {
    if mutations.is_empty() {
        println!("No mutations in catalog.");
        return;
    }

    println!();
    println!("=== Mutations ({}) ===", mutations.len());
    println!();

    for m in mutations {
        let kind = if m.stackable { "stackable" } else { "exclusive" };
        let group = m
            .group
            .as_deref()
            .map(|g| format!(", group: {g}"))
            .unwrap_or_default();
        println!("  {} - x{} ({}{})", m.name, m.multiplier, kind, group);
        println!("      trigger: {}", m.trigger);
    }

    println!();
}

/// Display redeem codes.
pub fn display_codes(codes: &[RedeemCode]) {
    if codes.is_empty() {
        println!("No redeem codes in catalog.");
        return;
    }

    println!();
    println!("=== Redeem Codes ({}) ===", codes.len());
    println!();

    for code in codes {
        println!(
            "  {:<16} {:<10} {}  (verified {} by {})",
            code.code,
            code.status.as_str(),
            code.reward,
            code.last_verified_at,
            code.verified_by
        );
    }

    println!();
}

/// Display saved plans.
pub fn display_plans(plans: &[SavedPlan]) {
    if plans.is_empty() {
        println!("No saved plans.");
        return;
    }

    println!();
    println!("=== Saved Plans ({}) ===", plans.len());
    println!();

    for plan in plans {
        println!(
            "  [{}] {} - {} at {} | ROI {:.1}%, grade {}",
            plan.id,
            plan.name,
            plan.result.plant.name,
            plan.result.stage.as_str(),
            plan.result.roi,
            plan.result.grade.as_str()
        );
    }

    println!();
}

/// Display progress and achievements.
pub fn display_progress(progress: &UserProgress) {
    println!();
    println!("=== Progress ===");
    println!();
    println!("Calculations:  {}", progress.total_calculations);
    println!("Plans saved:   {}", progress.total_plans_saved);
    println!("Days active:   {}", progress.days_active);
    println!("Streak:        {} days", progress.streak);

    if let Some(top) = &progress.top_plant {
        println!("Best ROI:      {:.1}% ({})", progress.best_roi, top);
    }

    if !progress.achievements.is_empty() {
        println!();
        println!("Achievements:");
        for key in &progress.achievements {
            let (name, description) = achievement_info(key);
            println!("  {} - {}", name, description);
        }
    }

    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(250.0, true), "250 coins");
        assert_eq!(format_currency(250.0, false), "250");
        assert_eq!(format_currency(1500.0, false), "1.5K");
        assert_eq!(format_currency(2_500_000.0, true), "2.50M coins");
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(45.0), "45s");
        assert_eq!(format_time(90.0), "1m 30s");
        assert_eq!(format_time(5400.0), "1h 30m");
    }

    #[test]
    fn test_plant_sort_parsing() {
        assert_eq!("roi".parse::<PlantSort>().unwrap(), PlantSort::Roi);
        assert_eq!("Name".parse::<PlantSort>().unwrap(), PlantSort::Name);
        assert!("rarity".parse::<PlantSort>().is_err());
    }
}
