//! Squad formation: the required number of players per position.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::player::Position;

/// Target counts per position.
///
/// Written compactly as `goalkeepers-defenders-midfielders-forwards`, e.g. `2-5-5-3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Formation {
    pub goalkeepers: u32,
    pub defenders: u32,
    pub midfielders: u32,
    pub forwards: u32,
}

impl Formation {
    #[must_use]
    pub const fn new(goalkeepers: u32, defenders: u32, midfielders: u32, forwards: u32) -> Self {
        Self {
            goalkeepers,
            defenders,
            midfielders,
            forwards,
        }
    }

    /// Required count for a position.
    #[must_use]
    pub const fn count(&self, position: Position) -> u32 {
        match position {
            Position::Goalkeeper => self.goalkeepers,
            Position::Defender => self.defenders,
            Position::Midfielder => self.midfielders,
            Position::Forward => self.forwards,
        }
    }

    /// Total number of players the formation selects.
    ///
    /// Saturates at `u32::MAX`; such a formation exceeds any squad size.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.goalkeepers
            .saturating_add(self.defenders)
            .saturating_add(self.midfielders)
            .saturating_add(self.forwards)
    }
}

impl Default for Formation {
    fn default() -> Self {
        Self::new(2, 5, 5, 3)
    }
}

impl fmt::Display for Formation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}-{}",
            self.goalkeepers, self.defenders, self.midfielders, self.forwards
        )
    }
}

impl FromStr for Formation {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: String| DomainError::InvalidFormation {
            formation: s.to_string(),
            reason,
        };

        let parts: Vec<&str> = s.trim().split('-').map(str::trim).collect();
        if parts.len() != 4 {
            return Err(invalid(format!(
                "expected 4 dash-separated counts, found {}",
                parts.len()
            )));
        }

        let mut counts = [0u32; 4];
        for (slot, part) in counts.iter_mut().zip(&parts) {
            *slot = part
                .parse::<u32>()
                .map_err(|_| invalid(format!("'{part}' is not a non-negative integer")))?;
        }

        if counts
            .iter()
            .try_fold(0u32, |sum, &count| sum.checked_add(count))
            .is_none()
        {
            return Err(invalid("counts overflow the total player count".to_string()));
        }

        Ok(Self::new(counts[0], counts[1], counts[2], counts[3]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_standard_formation() {
        let formation: Formation = "2-5-5-3".parse().unwrap();
        assert_eq!(formation, Formation::new(2, 5, 5, 3));
        assert_eq!(formation.total(), 15);
        assert_eq!(formation.count(Position::Midfielder), 5);
    }

    #[test]
    fn parses_with_whitespace_and_zero_counts() {
        let formation: Formation = " 1 - 4 - 0 - 2 ".parse().unwrap();
        assert_eq!(formation, Formation::new(1, 4, 0, 2));
        assert_eq!(formation.total(), 7);
    }

    #[test]
    fn rejects_wrong_arity() {
        assert!(matches!(
            "2-5-5".parse::<Formation>(),
            Err(DomainError::InvalidFormation { .. })
        ));
        assert!("2-5-5-3-1".parse::<Formation>().is_err());
    }

    #[test]
    fn rejects_negative_and_non_numeric_counts() {
        // a leading minus sign adds an extra, empty part
        assert!("2--1-5-3".parse::<Formation>().is_err());
        assert!("2-x-5-3".parse::<Formation>().is_err());
        assert!("".parse::<Formation>().is_err());
    }

    #[test]
    fn rejects_counts_whose_total_overflows() {
        assert!(matches!(
            "4294967295-1-0-0".parse::<Formation>(),
            Err(DomainError::InvalidFormation { .. })
        ));

        let largest: Formation = "4294967295-0-0-0".parse().unwrap();
        assert_eq!(largest.total(), u32::MAX);
    }

    #[test]
    fn total_saturates_instead_of_overflowing() {
        let formation = Formation::new(u32::MAX, 1, 1, 1);
        assert_eq!(formation.total(), u32::MAX);
    }

    #[test]
    fn display_round_trips_compact_form() {
        assert_eq!(Formation::default().to_string(), "2-5-5-3");
    }
}
