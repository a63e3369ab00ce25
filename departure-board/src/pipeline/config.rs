//! Board configuration.

use super::filter::DepartureFilter;

/// Station the board watches by default.
pub const DEFAULT_STATION: &str = "Olympiazentrum";

/// Line the board shows by default.
pub const DEFAULT_LINE: &str = "180";

/// Destination fragment the board filters on by default.
pub const DEFAULT_DIRECTION: &str = "Berduxstraße";

/// Number of departures requested from MVG by default.
pub const DEFAULT_LIMIT: usize = 50;

/// Which departures the board shows.
///
/// Constant for a deployment; every invocation reads the same config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    /// Station name, resolved through station search on every invocation.
    pub station_name: String,

    /// Line label, compared exactly (`"180"`, not `180`).
    pub line: String,

    /// Fragment that must appear in a departure's destination.
    pub direction: String,

    /// Maximum number of departures to request from the provider.
    /// Filtering happens after this limit is applied.
    pub limit: usize,
}

impl BoardConfig {
    /// Create a new config with the default limit.
    pub fn new(
        station_name: impl Into<String>,
        line: impl Into<String>,
        direction: impl Into<String>,
    ) -> Self {
        Self {
            station_name: station_name.into(),
            line: line.into(),
            direction: direction.into(),
            limit: DEFAULT_LIMIT,
        }
    }

    /// Set the departure limit.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// The line/direction filter for this board.
    pub fn filter(&self) -> DepartureFilter {
        DepartureFilter::new(self.line.clone(), self.direction.clone())
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new(DEFAULT_STATION, DEFAULT_LINE, DEFAULT_DIRECTION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = BoardConfig::default();
        assert_eq!(config.station_name, "Olympiazentrum");
        assert_eq!(config.line, "180");
        assert_eq!(config.direction, "Berduxstraße");
        assert_eq!(config.limit, 50);
    }

    #[test]
    fn builder() {
        let config = BoardConfig::new("Marienplatz", "52", "Alter Messeplatz").with_limit(20);
        assert_eq!(config.limit, 20);

        let filter = config.filter();
        assert_eq!(filter.line(), "52");
        assert_eq!(filter.direction(), "Alter Messeplatz");
    }
}
