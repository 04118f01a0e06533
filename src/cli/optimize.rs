//! Handler for the `optimize` command.

use tracing::{debug, info};

use crate::application::squad::{SquadOptimizer, SquadOutcome};
use crate::cli::{output, OptimizeArgs};
use crate::domain::dataset::PlayerDataset;
use crate::error::Result;
use crate::infrastructure::config::Config;
use crate::infrastructure::factory::{dataset::build_player_source, solver::build_solver};
use crate::port::dataset::PlayerSource;

/// Execute the optimize command.
///
/// Returns the outcome so the caller can choose the exit code; an
/// infeasible selection is reported but is not an error.
pub fn execute(args: &OptimizeArgs) -> Result<SquadOutcome> {
    let mut config = Config::load_or_default(&args.config)?;
    apply_overrides(&mut config, args);
    config.validate()?;
    config.init_logging();

    let request = config.squad_request()?;
    let source = build_player_source(&config.data, args.data.as_deref());
    let records = source.load()?;
    debug!(source = source.name(), records = records.len(), "Player history loaded");

    let dataset = PlayerDataset::select_season(
        records,
        config.season(),
        &config.optimizer.exclude_players,
    )?;
    info!(
        season = config.season().unwrap_or("all"),
        players = dataset.len(),
        excluded = config.optimizer.exclude_players.len(),
        "Dataset selected"
    );

    let optimizer = SquadOptimizer::new(build_solver(&config.solver));
    let outcome = optimizer.optimize(&dataset, &request)?;

    match &outcome {
        SquadOutcome::Optimal { roster, summary } => {
            if args.json {
                println!("{}", output::squad_json(roster, summary)?);
            } else {
                output::squad(roster, summary);
            }
        }
        SquadOutcome::Infeasible => {
            output::error("No squad satisfies the formation, budget and team cap");
            output::warn("Try a larger --budget, a higher --team-cap or fewer exclusions");
        }
    }

    Ok(outcome)
}

/// Fold command-line flags into the loaded configuration.
fn apply_overrides(config: &mut Config, args: &OptimizeArgs) {
    if let Some(level) = &args.log_level {
        config.logging.level.clone_from(level);
    }
    if args.json_logs {
        config.logging.format = "json".to_string();
    }

    if let Some(formation) = args.formation {
        config.optimizer.formation = formation.to_string();
    }
    if let Some(budget) = args.budget {
        config.optimizer.budget = Some(budget);
    }
    if let Some(metric) = &args.optimise_on {
        config.optimizer.metric.clone_from(metric);
    }
    if let Some(basis) = args.selected_cost_basis() {
        config.optimizer.cost_basis = basis;
    }
    if let Some(cap) = args.team_cap {
        config.optimizer.team_cap = cap;
    }
    if args.all_seasons {
        config.optimizer.season = None;
    } else if let Some(season) = &args.season {
        config.optimizer.season = Some(season.clone());
    }
    config.optimizer.exclude_players.extend(args.excluded_names());

    if let Some(secs) = args.time_limit {
        config.solver.time_limit_secs = secs;
    }
}
