use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::engine::Goal;
use crate::interface::PlantSort;

/// GardenHorizons — a harvest profitability calculator and plant recommender.
#[derive(Parser, Debug)]
#[command(name = "garden_horizons")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Directory containing plants.json, mutations.json, and codes.json.
    #[arg(long, default_value = "data")]
    pub data_dir: String,

    /// Directory where saved plans and progress are stored.
    #[arg(long, default_value = ".garden_horizons")]
    pub state_dir: String,
}

/// Ranking metric for the `top` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Metric {
    Roi,
    ProfitPerHour,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Calculate profitability for one harvest scenario.
    ///
    /// Prompts interactively when --plant is omitted.
    Calc {
        /// Plant slug or name.
        #[arg(long)]
        plant: Option<String>,

        /// Ripeness stage: unripe, ripened, or lush.
        #[arg(long)]
        stage: Option<String>,

        /// Active mutation key; repeat for several.
        #[arg(long = "mutation")]
        mutations: Vec<String>,

        /// Harvest weight in kg (defaults to the plant's average).
        #[arg(long)]
        weight: Option<f64>,

        /// Apply the quadratic weight factor.
        #[arg(long)]
        weight_factor: bool,

        /// Save the result as a plan with this name.
        #[arg(long)]
        save: Option<String>,
    },

    /// Rank all plants by a lush-baseline metric.
    Top {
        #[arg(value_enum)]
        metric: Metric,

        /// Number of plants to show.
        #[arg(short = 'n', long, default_value_t = crate::engine::DEFAULT_TOP_N)]
        count: usize,

        /// Also write the full ranking to a CSV file.
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Recommend plants for a budget and playtime window.
    Recommend {
        /// Budget in coins.
        #[arg(long)]
        budget: Option<f64>,

        /// Playtime in hours.
        #[arg(long)]
        hours: Option<f64>,

        /// Optimization goal: total-profit, profit-per-hour, or roi.
        #[arg(long)]
        goal: Option<Goal>,
    },

    /// Browse the plant database.
    Plants {
        /// Filter by rarity (Common, Rare, Legendary, Mythical).
        #[arg(long)]
        rarity: Option<String>,

        /// Sort order: name, cost, roi, or profit.
        #[arg(long, default_value = "roi")]
        sort: PlantSort,
    },

    /// List all known mutations.
    Mutations,

    /// List redeem codes.
    Codes,

    /// List saved plans.
    Plans {
        /// Delete the plan with this id.
        #[arg(long)]
        delete: Option<String>,
    },

    /// Show progress and achievements.
    Progress,

    /// Clear stored state.
    Reset {
        /// Delete all saved plans.
        #[arg(long)]
        plans: bool,

        /// Delete progress and achievements.
        #[arg(long)]
        progress: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Calc {
            plant: None,
            stage: None,
            mutations: Vec::new(),
            weight: None,
            weight_factor: false,
            save: None,
        }
    }
}
