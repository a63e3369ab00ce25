//! Station types.

use serde::{Deserialize, Serialize};

/// A station as resolved by the transit-data provider.
///
/// `id` is the provider's global identifier (e.g. `de:09162:350`) and is
/// what departure queries are keyed on. `place` is the locality, such as
/// `München`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationInfo {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub place: String,
}

impl StationInfo {
    /// Create a new station.
    pub fn new(id: impl Into<String>, name: impl Into<String>, place: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            place: place.into(),
        }
    }
}
