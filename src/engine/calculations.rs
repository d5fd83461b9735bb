use crate::engine::constants::*;
use crate::models::{CalculationResult, Grade, Mutation, Plant, Stage};

/// Combine a set of mutations into one multiplier.
///
/// Stackable mutations add their bonuses on a neutral base of 1; non-stackable
/// mutations are exclusive, so only the highest multiplier among them counts.
/// The two contributions multiply. An empty set is exactly neutral.
pub fn mutation_multiplier(mutations: &[&Mutation]) -> f64 {
    if mutations.is_empty() {
        return 1.0;
    }

    let stackable: f64 = 1.0 + mutations
        .iter()
        .filter(|m| m.stackable)
        .map(|m| m.bonus())
        .sum::<f64>();

    let non_stackable = mutations
        .iter()
        .filter(|m| !m.stackable)
        .map(|m| m.multiplier)
        .reduce(f64::max)
        .unwrap_or(1.0);

    stackable * non_stackable
}

/// Fixed stage multiplier: unripe 0.5, ripened 1.0, lush 1.5.
#[inline]
pub fn stage_multiplier(stage: Stage) -> f64 {
    stage.multiplier()
}

/// Quadratic weight factor: (weight / avg_weight)^2.
///
/// Neutral (1.0) when disabled, or when either weight is non-positive.
pub fn weight_factor(weight: f64, avg_weight: f64, enabled: bool) -> f64 {
    if !enabled {
        return 1.0;
    }
    if weight <= 0.0 || avg_weight <= 0.0 {
        return 1.0;
    }
    (weight / avg_weight).powi(2)
}

/// Round to whole coins.
#[inline]
fn round_coins(value: f64) -> f64 {
    value.round()
}

/// Round a percentage to one decimal place.
#[inline]
fn round_pct(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Compute the full profitability result for one scenario.
///
/// Total over its input domain: degenerate costs and weights are absorbed by
/// neutral defaults instead of producing NaN or infinity. Rounding is applied
/// once, on the final derived values.
pub fn calculate(
    plant: &Plant,
    stage: Stage,
    mutations: &[&Mutation],
    weight: f64,
    use_weight_factor: bool,
) -> CalculationResult {
    let stage_mult = stage_multiplier(stage);
    let mutation_mult = mutation_multiplier(mutations);
    let weight_mult = weight_factor(weight, plant.avg_weight, use_weight_factor);

    let sell_price = plant.base_value * stage_mult * mutation_mult * weight_mult;
    let profit = sell_price - plant.cost;

    // Zero-cost protection: ROI resolves to exactly 0 instead of infinity.
    let roi = if plant.cost <= 0.0 {
        0.0
    } else {
        (profit / plant.cost) * 100.0
    };

    // Guarded the same way as cost, a deviation from the upstream data model
    // which assumes grow_time_sec > 0.
    let profit_per_hour = if plant.grow_time_sec <= 0.0 {
        0.0
    } else {
        profit * (SECONDS_PER_HOUR / plant.grow_time_sec)
    };

    let grade = if roi >= GRADE_A_ROI {
        Grade::A
    } else if roi >= GRADE_B_ROI {
        Grade::B
    } else {
        Grade::C
    };

    let (gap_to_best, loss_if_harvest_now) = if stage != Stage::Lush {
        let lush_price = plant.base_value * LUSH_MULT * mutation_mult * weight_mult;
        let loss = ((lush_price - sell_price) / lush_price) * 100.0;
        let gap = ((lush_price - sell_price) / sell_price) * 100.0;
        (Some(round_pct(gap)), Some(round_pct(loss)))
    } else {
        (None, None)
    };

    CalculationResult {
        plant: plant.clone(),
        stage,
        mutation_keys: mutations.iter().map(|m| m.key.clone()).collect(),
        weight,
        sell_price: round_coins(sell_price),
        profit: round_coins(profit),
        roi: round_pct(roi),
        profit_per_hour: round_coins(profit_per_hour),
        grade,
        gap_to_best,
        loss_if_harvest_now,
    }
}
