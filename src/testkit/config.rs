//! Canonical configurations for tests.

use std::path::Path;

use crate::infrastructure::config::Config;

/// TOML for a full `2-5-5-3` selection over `data_path`, with costs already in
/// tenths as written by [`to_history_csv`](super::dataset::to_history_csv).
pub fn scenario_toml(data_path: &Path) -> String {
    format!(
        r#"[logging]
level = "warn"

[optimizer]
formation = "2-5-5-3"
metric = "total_points"
season = "{season}"
team_cap = 3

[solver]
time_limit_secs = 30

[data]
path = "{path}"
cost_divisor = 10
"#,
        season = super::dataset::SEASON,
        path = data_path.display().to_string().replace('\\', "/"),
    )
}

/// [`scenario_toml`] parsed into a [`Config`].
pub fn scenario_config(data_path: &Path) -> Config {
    Config::parse_toml(&scenario_toml(data_path)).expect("scenario config is valid")
}
