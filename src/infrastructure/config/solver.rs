//! Solver backend configuration.

use std::time::Duration;

use serde::Deserialize;

use crate::port::solver::SolverOptions;

/// Solver run limits.
#[derive(Debug, Clone, Deserialize)]
pub struct SolverConfig {
    /// Wall-clock limit for one solve in seconds (0 = unlimited).
    #[serde(default = "default_time_limit_secs")]
    pub time_limit_secs: u64,
    /// Print the backend's own progress log.
    #[serde(default)]
    pub verbose: bool,
}

const fn default_time_limit_secs() -> u64 {
    60
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            time_limit_secs: default_time_limit_secs(),
            verbose: false,
        }
    }
}

impl From<&SolverConfig> for SolverOptions {
    fn from(config: &SolverConfig) -> Self {
        Self {
            time_limit: (config.time_limit_secs > 0)
                .then(|| Duration::from_secs(config.time_limit_secs)),
            verbose: config.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_time_limit_means_unlimited() {
        let config = SolverConfig {
            time_limit_secs: 0,
            verbose: true,
        };
        let options = SolverOptions::from(&config);
        assert_eq!(options.time_limit, None);
        assert!(options.verbose);
    }

    #[test]
    fn default_limit_is_one_minute() {
        let options = SolverOptions::from(&SolverConfig::default());
        assert_eq!(options.time_limit, Some(Duration::from_secs(60)));
    }
}
