//! In-memory view of one season's player records.

use std::collections::{BTreeMap, HashMap};

use super::error::DomainError;
use super::id::{PlayerId, TeamId};
use super::player::{PlayerRecord, Position};

/// A validated slice of player records.
///
/// Every player id is unique within a dataset, so the id can serve as the
/// identity of a decision variable.
#[derive(Debug, Clone, Default)]
pub struct PlayerDataset {
    players: Vec<PlayerRecord>,
}

impl PlayerDataset {
    /// Build a dataset, rejecting duplicate player ids.
    pub fn try_new(players: Vec<PlayerRecord>) -> Result<Self, DomainError> {
        let mut seen: HashMap<&PlayerId, &str> = HashMap::with_capacity(players.len());
        for player in &players {
            if let Some(first) = seen.insert(&player.id, &player.name) {
                return Err(DomainError::DuplicatePlayer {
                    id: player.id.clone(),
                    first: first.to_string(),
                    second: player.name.clone(),
                });
            }
        }
        Ok(Self { players })
    }

    /// Select one season from a multi-season history, dropping excluded players.
    ///
    /// Exclusions match display names exactly. With `season = None` every
    /// record is kept, which is only valid when the input already holds one
    /// season.
    pub fn select_season<I>(
        records: I,
        season: Option<&str>,
        excluded_names: &[String],
    ) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = PlayerRecord>,
    {
        let players = records
            .into_iter()
            .filter(|r| season.map_or(true, |s| r.season == s))
            .filter(|r| !excluded_names.iter().any(|name| name == &r.name))
            .collect();
        Self::try_new(players)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Records in insertion order.
    #[must_use]
    pub fn players(&self) -> &[PlayerRecord] {
        &self.players
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlayerRecord> {
        self.players.iter()
    }

    /// Number of players available at a position.
    #[must_use]
    pub fn count_at(&self, position: Position) -> usize {
        self.players.iter().filter(|p| p.position == position).count()
    }

    /// Indices of players grouped by team, one entry per distinct team.
    #[must_use]
    pub fn indices_by_team(&self) -> BTreeMap<&TeamId, Vec<usize>> {
        let mut teams: BTreeMap<&TeamId, Vec<usize>> = BTreeMap::new();
        for (idx, player) in self.players.iter().enumerate() {
            teams.entry(&player.team_id).or_default().push(idx);
        }
        teams
    }
}
