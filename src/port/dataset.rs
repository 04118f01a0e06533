//! Player data port.

use crate::domain::player::PlayerRecord;
use crate::error::Result;

/// A source of player history records.
///
/// Records may span several seasons; callers slice them with
/// [`PlayerDataset::select_season`](crate::domain::PlayerDataset::select_season).
pub trait PlayerSource {
    /// Source name for logging.
    fn name(&self) -> &str;

    /// Load every record the source holds.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying data cannot be read or a required
    /// field is missing or malformed.
    fn load(&self) -> Result<Vec<PlayerRecord>>;
}
