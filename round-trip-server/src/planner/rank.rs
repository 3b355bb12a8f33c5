//! Ordering of round-trip results.

use std::collections::HashSet;

use super::compose::RoundTripPattern;

/// Order fixed-destination patterns.
///
/// Patterns are sorted by:
/// 1. Outbound departure (earlier first)
/// 2. Dwell at the destination (shorter first)
pub fn rank_by_departure(mut patterns: Vec<RoundTripPattern>) -> Vec<RoundTripPattern> {
    patterns.sort_by(|a, b| {
        a.outbound
            .departure_mins
            .cmp(&b.outbound.departure_mins)
            .then(a.dwell_mins.cmp(&b.dwell_mins))
    });
    patterns
}

/// Order open-destination patterns.
///
/// Patterns are sorted by:
/// 1. Distance from the origin (farthest first)
/// 2. Outbound departure (earlier first)
///
/// The sort is stable, so remaining ties keep insertion order.
pub fn rank_by_distance(mut patterns: Vec<RoundTripPattern>) -> Vec<RoundTripPattern> {
    patterns.sort_by(|a, b| {
        b.distance
            .cmp(&a.distance)
            .then(a.outbound.departure_mins.cmp(&b.outbound.departure_mins))
    });
    patterns
}

/// Destination names in order of first appearance.
pub fn distinct_destinations(patterns: &[RoundTripPattern]) -> Vec<String> {
    let mut seen = HashSet::new();
    patterns
        .iter()
        .filter(|p| seen.insert(p.destination.as_str()))
        .map(|p| p.destination.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::TripLeg;

    fn leg(number: &str, dep: i64, arr: i64) -> TripLeg {
        TripLeg {
            train_number: number.to_string(),
            service_type: "普通".to_string(),
            departure_clock: crate::domain::format_clock(dep),
            arrival_clock: crate::domain::format_clock(arr),
            departure_mins: dep,
            arrival_mins: arr,
        }
    }

    fn pattern(dest: &str, distance: usize, out_dep: i64, dwell: i64) -> RoundTripPattern {
        let outbound = leg("1", out_dep, out_dep + 30);
        let ret_dep = outbound.arrival_mins + dwell;
        let inbound = leg("2", ret_dep, ret_dep + 30);
        RoundTripPattern::new(outbound, inbound, dest.to_string(), distance)
    }

    fn summary(patterns: &[RoundTripPattern]) -> Vec<(&str, i64, i64)> {
        patterns
            .iter()
            .map(|p| {
                (
                    p.destination.as_str(),
                    p.outbound.departure_mins,
                    p.dwell_mins,
                )
            })
            .collect()
    }

    #[test]
    fn departure_then_dwell() {
        let ranked = rank_by_departure(vec![
            pattern("B", 1, 600, 30),
            pattern("B", 1, 540, 60),
            pattern("B", 1, 600, 10),
        ]);

        assert_eq!(
            summary(&ranked),
            vec![("B", 540, 60), ("B", 600, 10), ("B", 600, 30)]
        );
    }

    #[test]
    fn farthest_first_then_departure() {
        let ranked = rank_by_distance(vec![
            pattern("B", 1, 540, 10),
            pattern("D", 3, 600, 10),
            pattern("C", 2, 500, 10),
            pattern("D", 3, 560, 10),
        ]);

        assert_eq!(
            summary(&ranked),
            vec![("D", 560, 10), ("D", 600, 10), ("C", 500, 10), ("B", 540, 10)]
        );
    }

    #[test]
    fn distance_ties_across_stations_keep_insertion_order() {
        // Two stations equidistant on either side of the origin
        let ranked = rank_by_distance(vec![
            pattern("West", 2, 600, 10),
            pattern("East", 2, 600, 20),
        ]);

        assert_eq!(ranked[0].destination, "West");
        assert_eq!(ranked[1].destination, "East");
    }

    #[test]
    fn distinct_destinations_first_occurrence() {
        let patterns = vec![
            pattern("D", 3, 560, 10),
            pattern("D", 3, 600, 10),
            pattern("B", 1, 500, 10),
            pattern("D", 3, 700, 10),
            pattern("C", 2, 540, 10),
        ];

        assert_eq!(distinct_destinations(&patterns), vec!["D", "B", "C"]);
    }

    #[test]
    fn empty_inputs() {
        assert!(rank_by_departure(Vec::new()).is_empty());
        assert!(rank_by_distance(Vec::new()).is_empty());
        assert!(distinct_destinations(&[]).is_empty());
    }
}
