//! Line and direction filtering.

use crate::domain::RawDeparture;

/// Keeps departures of one line heading in one direction.
///
/// A departure matches when its line equals the configured line exactly
/// and its destination contains the direction fragment. Both comparisons
/// are case-sensitive and compare code points as given: `"Berduxstraße"`
/// does not match `"Berduxstrasse"` or a decomposed `ß`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartureFilter {
    line: String,
    direction: String,
}

impl DepartureFilter {
    pub fn new(line: impl Into<String>, direction: impl Into<String>) -> Self {
        Self {
            line: line.into(),
            direction: direction.into(),
        }
    }

    pub fn line(&self) -> &str {
        &self.line
    }

    pub fn direction(&self) -> &str {
        &self.direction
    }

    /// Whether a departure belongs on the board.
    ///
    /// A departure without a line never matches. A missing destination is
    /// treated as empty.
    pub fn matches(&self, departure: &RawDeparture) -> bool {
        departure.line.as_deref() == Some(self.line.as_str())
            && departure.destination_str().contains(self.direction.as_str())
    }

    /// Keep matching departures, preserving their order.
    pub fn apply(&self, departures: Vec<RawDeparture>) -> Vec<RawDeparture> {
        departures.into_iter().filter(|d| self.matches(d)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn filter() -> DepartureFilter {
        DepartureFilter::new("180", "Berduxstraße")
    }

    #[test]
    fn line_must_match_exactly() {
        let f = filter();
        assert!(f.matches(&RawDeparture::new("180", "Berduxstraße")));
        assert!(!f.matches(&RawDeparture::new("1800", "Berduxstraße")));
        assert!(!f.matches(&RawDeparture::new("N180", "Berduxstraße")));
        assert!(!f.matches(&RawDeparture::new(" 180", "Berduxstraße")));
    }

    #[test]
    fn direction_is_a_substring() {
        let f = filter();
        assert!(f.matches(&RawDeparture::new("180", "Westfriedhof über Berduxstraße")));
        assert!(f.matches(&RawDeparture::new("180", "Berduxstraße Nord")));
        assert!(!f.matches(&RawDeparture::new("180", "Olympiazentrum")));
    }

    #[test]
    fn direction_is_case_and_form_sensitive() {
        let f = filter();
        assert!(!f.matches(&RawDeparture::new("180", "berduxstraße")));
        assert!(!f.matches(&RawDeparture::new("180", "Berduxstrasse")));
        // Mis-decoded UTF-8 does not match either.
        assert!(!f.matches(&RawDeparture::new("180", "Berduxstra√üe")));
    }

    #[test]
    fn missing_fields() {
        let f = filter();

        let no_line = RawDeparture {
            destination: Some("Berduxstraße".into()),
            ..RawDeparture::default()
        };
        assert!(!f.matches(&no_line));

        let no_destination = RawDeparture {
            line: Some("180".into()),
            ..RawDeparture::default()
        };
        assert!(!f.matches(&no_destination));

        // An empty direction matches any destination, including a missing one.
        let any = DepartureFilter::new("180", "");
        assert!(any.matches(&no_destination));
    }

    #[test]
    fn apply_preserves_order() {
        let departures = vec![
            RawDeparture::new("180", "Berduxstraße").with_time(3),
            RawDeparture::new("100", "Y").with_time(1),
            RawDeparture::new("180", "X Berduxstraße").with_time(2),
        ];

        let kept = filter().apply(departures);
        let times: Vec<_> = kept.iter().map(|d| d.time.clone()).collect();
        assert_eq!(
            times,
            vec![
                Some(crate::domain::DepartureTime::Unix(3)),
                Some(crate::domain::DepartureTime::Unix(2)),
            ]
        );
    }

    fn arb_departure() -> impl Strategy<Value = RawDeparture> {
        let line = prop_oneof![
            Just("180".to_string()),
            Just("18".to_string()),
            Just("U3".to_string()),
        ];
        let destination = prop_oneof![
            Just("Berduxstraße".to_string()),
            Just("Westfriedhof über Berduxstraße".to_string()),
            Just("Berduxstrasse".to_string()),
            Just("Kieferngarten".to_string()),
            "[a-zA-Zß ]{0,12}",
        ];
        (line, destination, any::<i64>()).prop_map(|(line, destination, time)| {
            RawDeparture::new(line, destination).with_time(time)
        })
    }

    proptest! {
        #[test]
        fn keeps_exactly_the_matching_records(
            departures in prop::collection::vec(arb_departure(), 0..30)
        ) {
            let kept = filter().apply(departures.clone());
            let expected: Vec<_> = departures
                .into_iter()
                .filter(|d| {
                    d.line.as_deref() == Some("180")
                        && d.destination_str().contains("Berduxstraße")
                })
                .collect();
            prop_assert_eq!(kept, expected);
        }

        #[test]
        fn filtering_is_idempotent(departures in prop::collection::vec(arb_departure(), 0..30)) {
            let once = filter().apply(departures);
            let twice = filter().apply(once.clone());
            prop_assert_eq!(once, twice);
        }
    }
}
