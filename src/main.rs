use clap::Parser;
use std::path::PathBuf;

use garden_horizons_rs::cli::{Cli, Command, Metric};
use garden_horizons_rs::engine::{
    calculate, next_best_action, rank_by_profit_per_hour, rank_by_roi, recommend, Goal,
};
use garden_horizons_rs::error::{GardenError, Result};
use garden_horizons_rs::interface::{
    display_codes, display_mutations, display_next_action, display_plans, display_plants,
    display_progress, display_ranking, display_recommendations, display_result, prompt_budget,
    prompt_goal, prompt_mutations, prompt_plan_name, prompt_plant, prompt_playtime_hours,
    prompt_stage, prompt_weight, prompt_yes_no, write_ranking_csv, PlantSort,
};
use garden_horizons_rs::models::Stage;
use garden_horizons_rs::state::{Catalog, PlanStore};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();
    let store = PlanStore::new(&cli.state_dir);

    match command {
        Command::Calc {
            plant,
            stage,
            mutations,
            weight,
            weight_factor,
            save,
        } => cmd_calc(
            &cli.data_dir,
            &store,
            plant,
            stage,
            mutations,
            weight,
            weight_factor,
            save,
        ),
        Command::Top { metric, count, csv } => cmd_top(&cli.data_dir, metric, count, csv),
        Command::Recommend {
            budget,
            hours,
            goal,
        } => cmd_recommend(&cli.data_dir, budget, hours, goal),
        Command::Plants { rarity, sort } => cmd_plants(&cli.data_dir, rarity, sort),
        Command::Mutations => cmd_mutations(&cli.data_dir),
        Command::Codes => cmd_codes(&cli.data_dir),
        Command::Plans { delete } => cmd_plans(&store, delete),
        Command::Progress => cmd_progress(&store),
        Command::Reset { plans, progress } => cmd_reset(&store, plans, progress),
    }
}

#[allow(clippy::too_many_arguments)]
fn cmd_calc(
    data_dir: &str,
    store: &PlanStore,
    plant_arg: Option<String>,
    stage_arg: Option<String>,
    mutation_args: Vec<String>,
    weight_arg: Option<f64>,
    weight_factor: bool,
    save_arg: Option<String>,
) -> Result<()> {
    let catalog = Catalog::load(data_dir)?;
    let interactive = plant_arg.is_none();

    let plant = match &plant_arg {
        Some(query) => catalog
            .find_plant(query)
            .ok_or_else(|| GardenError::PlantNotFound(query.clone()))?,
        None => prompt_plant(&catalog.plants)?,
    };

    let stage = match &stage_arg {
        Some(s) => Stage::parse_lenient(s),
        None if interactive => prompt_stage()?,
        None => Stage::Ripened,
    };

    let mutations = if !mutation_args.is_empty() {
        catalog.mutations_by_keys(&mutation_args)?
    } else if interactive {
        prompt_mutations(&catalog.mutations)?
    } else {
        Vec::new()
    };

    let weight = match weight_arg {
        Some(w) => w,
        None if interactive => prompt_weight(plant.avg_weight)?,
        None => plant.avg_weight,
    };

    let use_weight_factor = if interactive && weight_arg.is_none() {
        weight_factor || prompt_yes_no("Apply the quadratic weight factor?", false)?
    } else {
        weight_factor
    };

    let result = calculate(plant, stage, &mutations, weight, use_weight_factor);

    display_result(&result);
    display_next_action(&next_best_action(&result, &catalog.plants, &mutations));

    store.track_calculation(&result.plant.name, result.roi)?;

    let plan_name = if let Some(name) = save_arg {
        Some(name)
    } else if interactive && prompt_yes_no("Save this plan?", false)? {
        Some(prompt_plan_name()?)
    } else {
        None
    };

    if let Some(name) = plan_name {
        let plan = store.save_plan(&name, &result)?;
        store.track_plan_saved()?;
        println!("Saved plan '{}' (id {}).", plan.name, plan.id);
    }

    Ok(())
}

fn cmd_top(data_dir: &str, metric: Metric, count: usize, csv: Option<PathBuf>) -> Result<()> {
    let catalog = Catalog::load(data_dir)?;

    let (title, ranked) = match metric {
        Metric::Roi => ("Top Plants by ROI", rank_by_roi(&catalog.plants, count)),
        Metric::ProfitPerHour => (
            "Top Plants by Profit per Hour",
            rank_by_profit_per_hour(&catalog.plants, count),
        ),
    };

    display_ranking(title, &ranked);

    if let Some(path) = csv {
        write_ranking_csv(&path, &ranked)?;
        println!("Wrote ranking to {}", path.display());
    }

    Ok(())
}

fn cmd_recommend(
    data_dir: &str,
    budget_arg: Option<f64>,
    hours_arg: Option<f64>,
    goal_arg: Option<Goal>,
) -> Result<()> {
    let catalog = Catalog::load(data_dir)?;

    let budget = match budget_arg {
        Some(b) => b,
        None => prompt_budget()?,
    };
    let hours = match hours_arg {
        Some(h) => h,
        None => prompt_playtime_hours()?,
    };
    let goal = match goal_arg {
        Some(g) => g,
        None => prompt_goal()?,
    };

    if budget < 0.0 {
        return Err(GardenError::InvalidInput(
            "Budget must be >= 0".to_string(),
        ));
    }
    if hours <= 0.0 {
        return Err(GardenError::InvalidInput(
            "Playtime must be > 0".to_string(),
        ));
    }

    let picks = recommend(&catalog.plants, budget, hours * 3600.0, goal);
    display_recommendations(&picks, budget, hours, goal);

    Ok(())
}

fn cmd_plants(data_dir: &str, rarity: Option<String>, sort: PlantSort) -> Result<()> {
    let catalog = Catalog::load(data_dir)?;
    display_plants(&catalog.plants, rarity.as_deref(), sort);
    Ok(())
}

fn cmd_mutations(data_dir: &str) -> Result<()> {
    let catalog = Catalog::load(data_dir)?;
    display_mutations(&catalog.mutations);
    Ok(())
}

fn cmd_codes(data_dir: &str) -> Result<()> {
    let catalog = Catalog::load(data_dir)?;
    display_codes(&catalog.codes);
    Ok(())
}

fn cmd_plans(store: &PlanStore, delete: Option<String>) -> Result<()> {
    match delete {
        Some(id) => {
            store.delete_plan(&id)?;
            println!("Deleted plan {}.", id);
        }
        None => display_plans(&store.list_plans()),
    }
    Ok(())
}

fn cmd_progress(store: &PlanStore) -> Result<()> {
    display_progress(&store.progress());
    Ok(())
}

fn cmd_reset(store: &PlanStore, plans: bool, progress: bool) -> Result<()> {
    if !plans && !progress {
        println!("Please specify at least one reset option:");
        println!("  --plans     Delete all saved plans");
        println!("  --progress  Delete progress and achievements");
        return Ok(());
    }

    if plans {
        store.clear_plans()?;
        println!("Deleted all saved plans.");
    }

    if progress {
        store.clear_progress()?;
        println!("Deleted progress and achievements.");
    }

    Ok(())
}
