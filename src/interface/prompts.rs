use dialoguer::{Confirm, Input, MultiSelect, Select};
use strsim::jaro_winkler;

use crate::engine::Goal;
use crate::error::{GardenError, Result};
use crate::models::{Mutation, Plant, Stage};

/// Prompt for a plant by name, with fuzzy matching.
pub fn prompt_plant<'a>(plants: &'a [Plant]) -> Result<&'a Plant> {
    loop {
        let input: String = Input::new()
            .with_prompt("Which plant?")
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        // Try exact match first (case-insensitive, slug or name)
        let exact = plants.iter().find(|p| {
            p.key() == input.to_lowercase() || p.name.to_lowercase() == input.to_lowercase()
        });

        if let Some(plant) = exact {
            return Ok(plant);
        }

        // Try fuzzy matching
        let mut candidates: Vec<(&Plant, f64)> = plants
            .iter()
            .map(|p| (p, jaro_winkler(&p.name.to_lowercase(), &input.to_lowercase())))
            .filter(|(_, score)| *score > 0.7)
            .collect();

        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        if candidates.is_empty() {
            println!("No matching plant found for '{}'", input);
            continue;
        }

        if candidates.len() == 1 {
            let plant = candidates[0].0;
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", plant.name))
                .default(true)
                .interact()?;

            if confirm {
                return Ok(plant);
            }
            continue;
        }

        // Multiple matches - let user select
        let options: Vec<&Plant> = candidates.iter().take(5).map(|(p, _)| *p).collect();
        let mut labels: Vec<String> = options.iter().map(|p| p.name.clone()).collect();
        labels.push("None of these".to_string());

        let selection = Select::new()
            .with_prompt("Which did you mean?")
            .items(&labels)
            .default(0)
            .interact()?;

        if selection < options.len() {
            return Ok(options[selection]);
        }
    }
}

/// Prompt for the ripeness stage.
pub fn prompt_stage() -> Result<Stage> {
    let labels: Vec<String> = Stage::ALL
        .iter()
        .map(|s| format!("{} ({}x)", s.as_str(), s.multiplier()))
        .collect();

    let selection = Select::new()
        .with_prompt("Ripeness stage")
        .items(&labels)
        .default(2) // lush
        .interact()?;

    Ok(Stage::ALL[selection])
}

/// Prompt for active mutations.
///
/// Selection enforces the mutual-exclusion rule the engine itself does not:
/// at most one non-stackable mutation per group.
pub fn prompt_mutations<'a>(mutations: &'a [Mutation]) -> Result<Vec<&'a Mutation>> {
    if mutations.is_empty() {
        return Ok(Vec::new());
    }

    let labels: Vec<String> = mutations
        .iter()
        .map(|m| {
            let kind = if m.stackable { "stackable" } else { "exclusive" };
            format!("{} (x{}, {})", m.name, m.multiplier, kind)
        })
        .collect();

    loop {
        let picked = MultiSelect::new()
            .with_prompt("Active mutations (space to toggle, enter to confirm)")
            .items(&labels)
            .interact()?;

        let selected: Vec<&Mutation> = picked.iter().map(|&i| &mutations[i]).collect();

        if let Some(group) = conflicting_group(&selected) {
            println!("Only one '{}' mutation can be active at a time.", group);
            continue;
        }

        return Ok(selected);
    }
}

/// Find a mutual-exclusion group selected more than once, if any.
fn conflicting_group(selected: &[&Mutation]) -> Option<String> {
    for (i, a) in selected.iter().enumerate() {
        let Some(group) = &a.group else { continue };
        for b in &selected[i + 1..] {
            if b.group.as_deref() == Some(group.as_str()) {
                return Some(group.clone());
            }
        }
    }
    None
}

/// Prompt for harvest weight, defaulting to the plant's average.
pub fn prompt_weight(avg_weight: f64) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt("Harvest weight (kg)")
        .default(format!("{avg_weight}"))
        .interact_text()?;

    let weight: f64 = input
        .trim()
        .parse()
        .map_err(|_| GardenError::InvalidInput("Invalid weight".to_string()))?;

    if weight < 0.0 {
        return Err(GardenError::InvalidInput(
            "Weight must be >= 0".to_string(),
        ));
    }

    Ok(weight)
}

/// Prompt for the budget in coins.
pub fn prompt_budget() -> Result<f64> {
    let input: String = Input::new()
        .with_prompt("Budget (coins)")
        .default("1000".to_string())
        .interact_text()?;

    let budget: f64 = input
        .trim()
        .parse()
        .map_err(|_| GardenError::InvalidInput("Invalid budget".to_string()))?;

    if budget < 0.0 {
        return Err(GardenError::InvalidInput(
            "Budget must be >= 0".to_string(),
        ));
    }

    Ok(budget)
}

/// Prompt for playtime in hours.
pub fn prompt_playtime_hours() -> Result<f64> {
    let input: String = Input::new()
        .with_prompt("Playtime (hours)")
        .default("2".to_string())
        .interact_text()?;

    let hours: f64 = input
        .trim()
        .parse()
        .map_err(|_| GardenError::InvalidInput("Invalid playtime".to_string()))?;

    if hours <= 0.0 {
        return Err(GardenError::InvalidInput(
            "Playtime must be > 0".to_string(),
        ));
    }

    Ok(hours)
}

/// Prompt for the optimization goal.
pub fn prompt_goal() -> Result<Goal> {
    let goals = [Goal::TotalProfit, Goal::ProfitPerHour, Goal::Roi];
    let labels: Vec<String> = goals.iter().map(|g| g.to_string()).collect();

    let selection = Select::new()
        .with_prompt("Optimize for")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(goals[selection])
}

/// Prompt for a plan name.
pub fn prompt_plan_name() -> Result<String> {
    let name: String = Input::new()
        .with_prompt("Plan name")
        .interact_text()?;

    let name = name.trim().to_string();
    if name.is_empty() {
        return Err(GardenError::InvalidInput(
            "Plan name cannot be empty".to_string(),
        ));
    }

    Ok(name)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
