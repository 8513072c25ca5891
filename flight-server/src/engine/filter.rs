//! Relevance filter: reduces the raw event list to the events that could
//! appear in some journey for this search, indexed by departure airport.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::domain::{Airport, FlightEvent};

use super::config::SearchConfig;

/// Departure-airport index over the events relevant to one search call.
///
/// Built fresh per search and discarded when the call returns. Events
/// within each airport's bucket keep their input order.
pub type DepartureIndex<'a> = HashMap<Airport, Vec<&'a FlightEvent>>;

/// Start of the search window: midnight UTC on the search date.
pub fn window_start(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// Build the departure index for one search call.
///
/// An event is relevant iff it departs at or after the window start and
/// arrives no later than window start plus the maximum journey duration.
/// An event outside those bounds cannot appear in any leg of any valid
/// journey for this search: either it leaves before the requested date,
/// or any itinerary containing it would overrun the duration cap.
///
/// Airports with no relevant outbound events simply have no entry.
pub fn build_departure_index<'a>(
    events: &'a [FlightEvent],
    date: NaiveDate,
    config: &SearchConfig,
) -> DepartureIndex<'a> {
    let start = window_start(date);
    let end = start + config.max_journey_duration();

    let mut index: DepartureIndex<'a> = HashMap::new();

    for event in events {
        if event.departure_time >= start && event.arrival_time <= end {
            index.entry(event.from_airport).or_default().push(event);
        }
    }

    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn airport(s: &str) -> Airport {
        Airport::parse(s).unwrap()
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2021, 12, 31).unwrap()
    }

    fn dec31(h: u32, m: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2021, 12, 31, h, m, s).unwrap()
    }

    fn jan1(h: u32, m: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2022, 1, 1, h, m, s).unwrap()
    }

    fn event(number: &str, from: &str, to: &str, dep: DateTime<Utc>, arr: DateTime<Utc>) -> FlightEvent {
        FlightEvent::new(number, airport(from), airport(to), dep, arr)
    }

    #[test]
    fn keeps_in_window_events() {
        let events = vec![event(
            "IB1234",
            "MAD",
            "BUE",
            dec31(10, 0, 0),
            dec31(12, 0, 0),
        )];

        let index = build_departure_index(&events, date(), &SearchConfig::default());

        assert_eq!(index.len(), 1);
        assert_eq!(index[&airport("MAD")].len(), 1);
    }

    #[test]
    fn keeps_departure_at_last_second_of_day() {
        // 23:59:59 departure is on the date; a 48h cap admits the
        // next-day noon arrival.
        let events = vec![event(
            "IB1234",
            "MAD",
            "BUE",
            dec31(23, 59, 59),
            jan1(12, 0, 0),
        )];

        let config = SearchConfig::new(1, 4, 48);
        let index = build_departure_index(&events, date(), &config);

        assert_eq!(index[&airport("MAD")].len(), 1);
    }

    #[test]
    fn discards_departure_before_window() {
        let events = vec![event(
            "IB1234",
            "MAD",
            "BUE",
            Utc.with_ymd_and_hms(2021, 12, 30, 22, 0, 0).unwrap(),
            dec31(2, 0, 0),
        )];

        let index = build_departure_index(&events, date(), &SearchConfig::default());

        assert!(index.is_empty());
    }

    #[test]
    fn discards_arrival_past_duration_cap() {
        // Arrives one second past the 24h window end.
        let events = vec![event(
            "IB1234",
            "MAD",
            "BUE",
            dec31(22, 0, 0),
            jan1(0, 0, 1),
        )];

        let index = build_departure_index(&events, date(), &SearchConfig::default());

        assert!(index.is_empty());
    }

    #[test]
    fn keeps_arrival_exactly_at_window_end() {
        let events = vec![event(
            "IB1234",
            "MAD",
            "BUE",
            dec31(22, 0, 0),
            jan1(0, 0, 0),
        )];

        let index = build_departure_index(&events, date(), &SearchConfig::default());

        assert_eq!(index[&airport("MAD")].len(), 1);
    }

    #[test]
    fn groups_by_departure_airport_preserving_order() {
        let events = vec![
            event("IB1", "MAD", "BOG", dec31(8, 0, 0), dec31(10, 0, 0)),
            event("IB2", "BOG", "BUE", dec31(11, 0, 0), dec31(13, 0, 0)),
            event("IB3", "MAD", "BUE", dec31(9, 0, 0), dec31(14, 0, 0)),
        ];

        let index = build_departure_index(&events, date(), &SearchConfig::default());

        let from_mad: Vec<&str> = index[&airport("MAD")]
            .iter()
            .map(|e| e.flight_number.as_str())
            .collect();
        assert_eq!(from_mad, vec!["IB1", "IB3"]);
        assert_eq!(index[&airport("BOG")].len(), 1);
        assert!(!index.contains_key(&airport("BUE")));
    }

    #[test]
    fn empty_input_gives_empty_index() {
        let index = build_departure_index(&[], date(), &SearchConfig::default());
        assert!(index.is_empty());
    }
}
