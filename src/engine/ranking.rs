use std::cmp::Ordering;

use crate::engine::calculations::calculate;
use crate::engine::constants::*;
use crate::models::{CalculationResult, Mutation, Plant, Stage};

/// Optimization goal for the budget/playtime recommender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Goal {
    ProfitPerHour,
    Roi,
    #[default]
    TotalProfit,
}

impl std::str::FromStr for Goal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "profit-per-hour" => Ok(Goal::ProfitPerHour),
            "roi" => Ok(Goal::Roi),
            "total-profit" => Ok(Goal::TotalProfit),
            other => Err(format!(
                "unknown goal '{other}' (expected profit-per-hour, roi, or total-profit)"
            )),
        }
    }
}

impl std::fmt::Display for Goal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Goal::ProfitPerHour => "profit-per-hour",
            Goal::Roi => "roi",
            Goal::TotalProfit => "total-profit",
        };
        f.write_str(s)
    }
}

/// Recommendation produced by [`next_best_action`].
#[derive(Debug, Clone, PartialEq)]
pub enum NextAction {
    /// Current stage is not lush; waiting unlocks `gap_pct` percent more profit.
    WaitForLush { gap_pct: f64 },
    /// Another plant beats the current ROI by more than the switch margin.
    SwitchPlant {
        slug: String,
        name: String,
        roi_delta: f64,
    },
    /// Nothing beats the current setup by enough to matter.
    Optimal,
}

/// Lush-stage profit per harvest, at nominal weight with no mutations.
///
/// Shared baseline for every ranking path so the ranking tables can never
/// drift from the calculator's own lush numbers.
#[inline]
pub fn lush_profit(plant: &Plant) -> f64 {
    plant.base_value * LUSH_MULT - plant.cost
}

/// Lush-stage ROI percentage, with the same zero-cost guard as the calculator.
#[inline]
pub fn lush_roi(plant: &Plant) -> f64 {
    if plant.cost <= 0.0 {
        return 0.0;
    }
    (lush_profit(plant) / plant.cost) * 100.0
}

/// Lush-stage profit per hour, guarded against non-positive grow times.
#[inline]
pub fn lush_profit_per_hour(plant: &Plant) -> f64 {
    if plant.grow_time_sec <= 0.0 {
        return 0.0;
    }
    lush_profit(plant) / (plant.grow_time_sec / SECONDS_PER_HOUR)
}

/// Sort descending by a metric, keeping catalog order on ties.
fn sort_desc_by<'a, F>(plants: &mut Vec<&'a Plant>, metric: F)
where
    F: Fn(&Plant) -> f64,
{
    plants.sort_by(|a, b| {
        metric(b)
            .partial_cmp(&metric(a))
            .unwrap_or(Ordering::Equal)
    });
}

/// Top plants by lush-stage ROI (no mutations, nominal weight).
pub fn rank_by_roi(plants: &[Plant], top_n: usize) -> Vec<&Plant> {
    let mut ranked: Vec<&Plant> = plants.iter().collect();
    sort_desc_by(&mut ranked, lush_roi);
    ranked.truncate(top_n);
    ranked
}

/// Top plants by lush-stage profit per hour (no mutations, nominal weight).
pub fn rank_by_profit_per_hour(plants: &[Plant], top_n: usize) -> Vec<&Plant> {
    let mut ranked: Vec<&Plant> = plants.iter().collect();
    sort_desc_by(&mut ranked, lush_profit_per_hour);
    ranked.truncate(top_n);
    ranked
}

/// Recommend plants under a budget and playtime window.
///
/// Keeps only plants with `0 < cost <= budget`, scores each by the selected
/// goal, and returns the best five. An empty result is a valid outcome when
/// nothing is affordable.
pub fn recommend(
    plants: &[Plant],
    budget: f64,
    playtime_seconds: f64,
    goal: Goal,
) -> Vec<&Plant> {
    let mut affordable: Vec<&Plant> = plants
        .iter()
        .filter(|p| p.cost > 0.0 && p.cost <= budget)
        .collect();

    let metric = move |plant: &Plant| -> f64 {
        match goal {
            Goal::ProfitPerHour => lush_profit_per_hour(plant),
            Goal::Roi => lush_roi(plant),
            Goal::TotalProfit => {
                let expected_harvests = if plant.grow_time_sec > 0.0 {
                    (playtime_seconds / plant.grow_time_sec).floor()
                } else {
                    0.0
                };
                lush_profit(plant) * expected_harvests
            }
        }
    };

    sort_desc_by(&mut affordable, metric);
    affordable.truncate(RECOMMEND_LIMIT);
    affordable
}

/// Best plant by lush-stage ROI under the given mutation set.
///
/// Full linear scan via the calculator. The baseline metric starts at 0, so
/// when every plant scores <= 0 the first catalog entry is returned unchanged;
/// only an empty catalog yields None.
pub fn best_plant_by_roi<'a>(plants: &'a [Plant], mutations: &[&Mutation]) -> Option<&'a Plant> {
    let mut best = plants.first()?;
    let mut best_roi = 0.0;

    for plant in plants {
        let result = calculate(plant, Stage::Lush, mutations, plant.avg_weight, false);
        if result.roi > best_roi {
            best_roi = result.roi;
            best = plant;
        }
    }

    Some(best)
}

/// Best plant by lush-stage profit per hour under the given mutation set.
pub fn best_plant_by_profit_per_hour<'a>(
    plants: &'a [Plant],
    mutations: &[&Mutation],
) -> Option<&'a Plant> {
    let mut best = plants.first()?;
    let mut best_pph = 0.0;

    for plant in plants {
        let result = calculate(plant, Stage::Lush, mutations, plant.avg_weight, false);
        if result.profit_per_hour > best_pph {
            best_pph = result.profit_per_hour;
            best = plant;
        }
    }

    Some(best)
}

/// Decision support: wait, switch plants, or stay put.
pub fn next_best_action(current: &CalculationResult, plants: &[Plant], mutations: &[&Mutation]) -> NextAction {
    if current.stage != Stage::Lush {
        return NextAction::WaitForLush {
            gap_pct: current.gap_to_best.unwrap_or(0.0),
        };
    }

    let Some(best) = best_plant_by_roi(plants, mutations) else {
        return NextAction::Optimal;
    };

    let best_roi = calculate(best, Stage::Lush, mutations, best.avg_weight, false).roi;
    if best_roi > current.roi + SWITCH_ROI_MARGIN {
        return NextAction::SwitchPlant {
            slug: best.slug.clone(),
            name: best.name.clone(),
            roi_delta: best_roi - current.roi,
        };
    }

    NextAction::Optimal
}
