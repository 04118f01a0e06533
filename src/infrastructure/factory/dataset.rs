//! Player source factory.

use std::path::Path;

use crate::adapter::dataset::CsvPlayerSource;
use crate::infrastructure::config::data::DataConfig;

/// Build the CSV player source, reading `path` instead of the configured
/// file when given.
pub fn build_player_source(config: &DataConfig, path: Option<&Path>) -> CsvPlayerSource {
    let path = path.unwrap_or(&config.path);
    CsvPlayerSource::new(path).with_cost_divisor(config.cost_divisor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn override_path_wins() {
        let config = DataConfig::default();
        let source = build_player_source(&config, Some(Path::new("other.csv")));
        assert_eq!(source.path(), Path::new("other.csv"));
    }

    #[test]
    fn falls_back_to_configured_path() {
        let config = DataConfig {
            path: PathBuf::from("data/history.csv"),
            ..DataConfig::default()
        };
        let source = build_player_source(&config, None);
        assert_eq!(source.path(), Path::new("data/history.csv"));
    }
}
