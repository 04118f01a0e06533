//! Handlers for `squadsolver check`.

use std::path::Path;

use crate::cli::output;
use crate::error::Result;
use crate::infrastructure::config::Config;

/// Validate a configuration file and print what it resolves to.
pub fn execute_config<P: AsRef<Path>>(config_path: P) -> Result<()> {
    let path = config_path.as_ref();
    output::section(&format!("Checking configuration: {}", path.display()));

    let config = Config::load(path)?;
    let request = config.squad_request()?;
    let budget = request
        .budget
        .unwrap_or_else(|| request.budget_policy.resolve(None, &request.formation));

    output::ok("Configuration file is valid");
    println!();
    output::key_value("Formation:", request.formation);
    output::key_value("Budget:", budget.normalize());
    output::key_value("Metric:", &request.metric);
    output::key_value("Cost basis:", request.cost_basis);
    output::key_value("Team cap:", request.team_cap);
    output::key_value("Season:", config.season().unwrap_or("all"));
    output::key_value("Data:", config.data.path.display());
    match config.solver.time_limit_secs {
        0 => output::key_value("Time limit:", "unlimited"),
        secs => output::key_value("Time limit:", format!("{secs}s")),
    }

    if !config.data.path.exists() {
        output::warn(&format!(
            "Player data not found at {}; pass --data to optimize",
            config.data.path.display()
        ));
    }
    if let Some(explicit) = config.optimizer.budget {
        let max = request.budget_policy.max_budget(&request.formation);
        if explicit > max {
            output::warn(&format!(
                "Budget {} exceeds {} ({} bench slots at {})",
                explicit.normalize(),
                max.normalize(),
                request.budget_policy.bench_slots(&request.formation),
                request.budget_policy.min_bench_cost.normalize()
            ));
        }
    }

    Ok(())
}
