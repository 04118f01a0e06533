//! CSV player history reader.
//!
//! Reads the joined history file written by the data fetch tooling: one row
//! per player per season, costs stored in tenths of a currency unit.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::{debug, info};

use crate::domain::player::{PlayerRecord, Position};
use crate::error::{DatasetError, Result};
use crate::port::dataset::PlayerSource;

const PLAYER_ID: &str = "player_id";
const FULL_NAME: &str = "full_name";
const TEAM_ID: &str = "team_id";
const POSITION: &str = "position";
const SEASON: &str = "season_name";
const START_COST: &str = "start_cost";
const NOW_COST: &str = "now_cost";
const END_COST: &str = "end_cost";

const REQUIRED: [&str; 6] = [PLAYER_ID, FULL_NAME, TEAM_ID, POSITION, SEASON, START_COST];
const NON_METRIC: [&str; 8] = [
    PLAYER_ID, FULL_NAME, TEAM_ID, POSITION, SEASON, START_COST, NOW_COST, END_COST,
];

/// Player history stored as a CSV file with a header row.
#[derive(Debug, Clone)]
pub struct CsvPlayerSource {
    path: PathBuf,
    cost_divisor: Decimal,
}

impl CsvPlayerSource {
    /// Read from `path`, treating cost columns as tenths.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cost_divisor: dec!(10),
        }
    }

    /// Override the unit of the cost columns (1 for whole units).
    #[must_use]
    pub fn with_cost_divisor(mut self, divisor: Decimal) -> Self {
        self.cost_divisor = divisor;
        self
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PlayerSource for CsvPlayerSource {
    fn name(&self) -> &str {
        "csv"
    }

    fn load(&self) -> Result<Vec<PlayerRecord>> {
        let file = File::open(&self.path).map_err(DatasetError::Io)?;
        let records = read_players(file, self.cost_divisor)?;
        info!(
            path = %self.path.display(),
            records = records.len(),
            "Loaded player history"
        );
        Ok(records)
    }
}

/// Column positions resolved from the header row.
struct Columns {
    index: BTreeMap<String, usize>,
    metrics: Vec<(String, usize)>,
}

impl Columns {
    fn resolve(headers: &csv::StringRecord) -> std::result::Result<Self, DatasetError> {
        let index: BTreeMap<String, usize> = headers
            .iter()
            .enumerate()
            .map(|(i, h)| (h.trim().to_string(), i))
            .collect();

        for column in REQUIRED {
            if !index.contains_key(column) {
                return Err(DatasetError::MissingColumn {
                    column: column.to_string(),
                });
            }
        }

        let metrics = index
            .iter()
            .filter(|(name, _)| !NON_METRIC.contains(&name.as_str()) && !name.is_empty())
            .map(|(name, i)| (name.clone(), *i))
            .collect();

        Ok(Self { index, metrics })
    }

    fn get<'r>(&self, record: &'r csv::StringRecord, column: &str) -> Option<&'r str> {
        self.index
            .get(column)
            .and_then(|i| record.get(*i))
            .map(str::trim)
            .filter(|v| !v.is_empty())
    }
}

/// Parse player records from CSV content.
///
/// Non-numeric or empty metric cells are left out of a record's metrics, so
/// a metric that is not numeric for every player is rejected later, when a
/// model is built on it.
pub fn read_players<R: Read>(reader: R, cost_divisor: Decimal) -> Result<Vec<PlayerRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(reader);

    let headers = csv_reader.headers().map_err(DatasetError::Csv)?.clone();
    let columns = Columns::resolve(&headers)?;
    debug!(metrics = columns.metrics.len(), "Resolved CSV columns");

    let mut players = Vec::new();
    for (row, result) in csv_reader.records().enumerate() {
        let record = result.map_err(DatasetError::Csv)?;
        // header is line 1
        let line = row + 2;

        let required = |column: &'static str| {
            columns
                .get(&record, column)
                .ok_or(DatasetError::InvalidField {
                    line,
                    column,
                    value: String::new(),
                })
        };
        let parse_cost = |column: &'static str, raw: &str| {
            Decimal::from_str(raw)
                .ok()
                .and_then(|v| v.checked_div(cost_divisor))
                .ok_or_else(|| DatasetError::InvalidField {
                    line,
                    column,
                    value: raw.to_string(),
                })
        };

        let position_raw = required(POSITION)?;
        let position =
            Position::from_str(position_raw).map_err(|_| DatasetError::InvalidField {
                line,
                column: POSITION,
                value: position_raw.to_string(),
            })?;

        let mut player = PlayerRecord::new(
            required(PLAYER_ID)?,
            required(FULL_NAME)?,
            position,
            required(TEAM_ID)?,
            parse_cost(START_COST, required(START_COST)?)?,
        )
        .with_season(required(SEASON)?);

        if let Some(raw) = columns.get(&record, NOW_COST) {
            player.now_cost = Some(parse_cost(NOW_COST, raw)?);
        }
        if let Some(raw) = columns.get(&record, END_COST) {
            player.end_cost = Some(parse_cost(END_COST, raw)?);
        }

        for (name, idx) in &columns.metrics {
            let value = record
                .get(*idx)
                .map(str::trim)
                .and_then(|raw| Decimal::from_str(raw).ok());
            if let Some(value) = value {
                player.metrics.insert(name.clone(), value);
            }
        }

        players.push(player);
    }

    Ok(players)
}
