//! Journey search: depth-bounded exhaustive enumeration over the
//! departure index.
//!
//! Finds every itinerary from origin to destination whose legs all sit
//! inside the relevance window, whose connection count stays within the
//! configured bound, and whose layovers fit the connection-wait bound.

use chrono::{Duration, NaiveDate};

use crate::domain::{Airport, FlightEvent, Journey};

use super::config::SearchConfig;
use super::filter::{DepartureIndex, build_departure_index};

/// Search for all journeys from `origin` to `destination` on `date`.
///
/// The search is total: any input, including an empty event list or an
/// origin with no service, yields a (possibly empty) list, never an
/// error. Enumeration is exhaustive, not shortest-path; every qualifying
/// itinerary is reported, in the deterministic order induced by the
/// input event order.
///
/// Cost is exponential in branching factor and connection bound; callers
/// needing a latency ceiling must impose their own deadline around the
/// call.
pub fn find_journeys(
    events: &[FlightEvent],
    date: NaiveDate,
    origin: Airport,
    destination: Airport,
    config: &SearchConfig,
) -> Vec<Journey> {
    let index = build_departure_index(events, date, config);

    let mut journeys = Vec::new();

    let Some(candidates) = index.get(&origin) else {
        // No eligible outbound events at the origin: no journeys.
        return journeys;
    };

    for &event in candidates {
        if event.to_airport == destination {
            push_journey(vec![event.clone()], &mut journeys);
        } else {
            extend(
                &index,
                destination,
                config,
                vec![event.clone()],
                &mut journeys,
            );
        }
    }

    journeys
}

/// Recursively extend `path` from its frontier airport.
///
/// Recursion depth is bounded by `max_connections + 1`, which also rules
/// out unbounded cycles: airports may be revisited, but only within the
/// connection budget.
fn extend(
    index: &DepartureIndex<'_>,
    destination: Airport,
    config: &SearchConfig,
    path: Vec<FlightEvent>,
    journeys: &mut Vec<Journey>,
) {
    let Some(last) = path.last() else {
        return;
    };
    let frontier = last.to_airport;
    let previous_arrival = last.arrival_time;

    let Some(candidates) = index.get(&frontier) else {
        return;
    };

    for &candidate in candidates {
        // Connection-count guard: the path already holds as many legs as
        // the bound permits, so every remaining candidate at this depth
        // is equally disqualified.
        if path.len() > config.max_connections {
            break;
        }

        // Connection-wait guard: per-candidate. A candidate that boards
        // before the previous leg lands, or after too long a layover, is
        // skipped, but may still suit another predecessor elsewhere in
        // the search tree.
        let wait = candidate.departure_time - previous_arrival;
        if wait < Duration::zero() || wait > config.max_connection_wait() {
            continue;
        }

        let mut extended = path.clone();
        extended.push(candidate.clone());

        if candidate.to_airport == destination {
            push_journey(extended, journeys);
        } else {
            extend(index, destination, config, extended, journeys);
        }
    }
}

/// Record a completed path as a journey.
///
/// Construction cannot fail here (each extension appends an event
/// departing from the frontier airport), but the validated constructor
/// is used anyway rather than bypassing it.
fn push_journey(path: Vec<FlightEvent>, journeys: &mut Vec<Journey>) {
    if let Ok(journey) = Journey::new(path) {
        journeys.push(journey);
    }
}


#[cfg(test)]
mod proptests {
    //! Property tests for the universally-quantified search guarantees:
    //! whatever the input, every reported journey is connected, within
    //! the connection and wait bounds, and inside the duration window.

    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use proptest::prelude::*;

    const AIRPORTS: [&str; 5] = ["AAA", "BBB", "CCC", "DDD", "EEE"];

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2021, 12, 31).unwrap()
    }

    fn base() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2021, 12, 31, 0, 0, 0).unwrap()
    }

    prop_compose! {
        /// An arbitrary event between the small airport alphabet, with
        /// times straddling the relevance window on purpose (departures
        /// from 12h before midnight, durations up to 10h).
        fn arb_event()(
            from in 0..AIRPORTS.len(),
            to in 0..AIRPORTS.len(),
            number in 0u32..100,
            dep_offset_mins in -720i64..2160,
            duration_mins in 30i64..600,
        ) -> FlightEvent {
            let dep = base() + chrono::Duration::minutes(dep_offset_mins);
            FlightEvent::new(
                format!("FL{number:03}"),
                Airport::parse(AIRPORTS[from]).unwrap(),
                Airport::parse(AIRPORTS[to]).unwrap(),
                dep,
                dep + chrono::Duration::minutes(duration_mins),
            )
        }
    }

    proptest! {
        #[test]
        fn journeys_satisfy_all_constraints(
            events in prop::collection::vec(arb_event(), 0..25),
            max_connections in 0usize..3,
        ) {
            let config = SearchConfig::new(max_connections, 4, 24);
            let origin = Airport::parse("AAA").unwrap();
            let destination = Airport::parse("EEE").unwrap();

            let journeys = find_journeys(&events, date(), origin, destination, &config);

            let window_end = base() + config.max_journey_duration();

            for journey in &journeys {
                // Endpoints match the request.
                prop_assert_eq!(journey.origin(), origin);
                prop_assert_eq!(journey.destination(), destination);

                // Connection bound.
                prop_assert!(journey.connections() <= config.max_connections);

                // Connectivity, chronology, and wait bound per leg pair.
                for pair in journey.path().windows(2) {
                    prop_assert_eq!(pair[0].to_airport, pair[1].from_airport);
                    let wait = pair[1].departure_time - pair[0].arrival_time;
                    prop_assert!(wait >= chrono::Duration::zero());
                    prop_assert!(wait <= config.max_connection_wait());
                }

                // Every leg sits inside the relevance window.
                for leg in journey.path() {
                    prop_assert!(leg.departure_time >= base());
                    prop_assert!(leg.arrival_time <= window_end);
                }
            }
        }

        #[test]
        fn search_is_deterministic(
            events in prop::collection::vec(arb_event(), 0..20),
        ) {
            let config = SearchConfig::default();
            let origin = Airport::parse("AAA").unwrap();
            let destination = Airport::parse("EEE").unwrap();

            let first = find_journeys(&events, date(), origin, destination, &config);
            let second = find_journeys(&events, date(), origin, destination, &config);

            prop_assert_eq!(first, second);
        }
    }
}
