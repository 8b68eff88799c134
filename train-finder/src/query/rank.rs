//! Ordering of query results.
//!
//! Each criterion maps to one comparator. Sorting is stable, so records
//! with equal keys keep their timetable order.

use std::cmp::Ordering;

use crate::domain::{Criterion, TrainRecord};

/// Comparison function used to order records.
pub type Comparator = fn(&TrainRecord, &TrainRecord) -> Ordering;

/// Select the comparator for a criterion.
pub fn comparator(criterion: Criterion) -> Comparator {
    match criterion {
        Criterion::Price => by_price,
        Criterion::ArrivalTime => by_arrival_time,
        Criterion::DepartureTime => by_departure_time,
    }
}

/// Stable sort of `records` by `criterion`, best first.
pub fn rank(records: &mut [&TrainRecord], criterion: Criterion) {
    let cmp = comparator(criterion);
    records.sort_by(|a, b| cmp(a, b));
}

/// The first `n` results, or all of them if there are fewer.
pub fn top_n<T>(results: &[T], n: usize) -> &[T] {
    &results[..n.min(results.len())]
}

fn by_price(a: &TrainRecord, b: &TrainRecord) -> Ordering {
    price_key(a.price).total_cmp(&price_key(b.price))
}

fn by_arrival_time(a: &TrainRecord, b: &TrainRecord) -> Ordering {
    a.arrival_time.cmp(&b.arrival_time)
}

fn by_departure_time(a: &TrainRecord, b: &TrainRecord) -> Ordering {
    a.departure_time.cmp(&b.departure_time)
}

/// -0.0 and 0.0 must tie so stability decides their order.
fn price_key(price: f64) -> f64 {
    if price == 0.0 { 0.0 } else { price }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{StationId, TimeOfDay};

    fn time(s: &str) -> TimeOfDay {
        TimeOfDay::parse_hhmmss(s).unwrap()
    }

    fn train(id: i64, price: f64, arrival: &str, departure: &str) -> TrainRecord {
        TrainRecord {
            train_id: id,
            departure_station: StationId::new(10),
            arrival_station: StationId::new(20),
            price,
            arrival_time: time(arrival),
            departure_time: time(departure),
        }
    }

    fn ids(records: &[&TrainRecord]) -> Vec<i64> {
        records.iter().map(|r| r.train_id).collect()
    }

    #[test]
    fn price_ascending() {
        let a = train(1, 50.0, "09:00:00", "08:00:00");
        let b = train(2, 30.0, "10:00:00", "08:30:00");
        let c = train(3, 45.5, "11:00:00", "07:00:00");

        let mut records = vec![&a, &b, &c];
        rank(&mut records, Criterion::Price);
        assert_eq!(ids(&records), vec![2, 3, 1]);
    }

    #[test]
    fn arrival_time_ascending() {
        let a = train(1, 50.0, "09:00:00", "08:00:00");
        let b = train(2, 30.0, "10:00:00", "08:30:00");
        let c = train(3, 45.5, "00:15:00", "23:50:00");

        let mut records = vec![&b, &a, &c];
        rank(&mut records, Criterion::ArrivalTime);
        assert_eq!(ids(&records), vec![3, 1, 2]);
    }

    #[test]
    fn departure_time_ascending() {
        let a = train(1, 50.0, "09:00:00", "08:00:00");
        let b = train(2, 30.0, "10:00:00", "08:30:00");
        let c = train(3, 45.5, "11:00:00", "07:59:59");

        let mut records = vec![&a, &b, &c];
        rank(&mut records, Criterion::DepartureTime);
        assert_eq!(ids(&records), vec![3, 1, 2]);
    }

    #[test]
    fn equal_keys_keep_input_order() {
        let a = train(3, 40.0, "12:00:00", "11:00:00");
        let b = train(4, 40.0, "12:00:00", "11:00:00");
        let c = train(5, 10.0, "12:00:00", "11:00:00");

        for criterion in Criterion::ALL {
            let mut records = vec![&a, &b, &c];
            rank(&mut records, criterion);
            let ranked = ids(&records);
            let pos3 = ranked.iter().position(|&id| id == 3).unwrap();
            let pos4 = ranked.iter().position(|&id| id == 4).unwrap();
            assert!(pos3 < pos4, "{criterion}: {ranked:?}");
        }
    }

    #[test]
    fn negative_prices_sort_normally() {
        let a = train(1, 0.0, "09:00:00", "08:00:00");
        let b = train(2, -5.0, "09:00:00", "08:00:00");
        let c = train(3, 5.0, "09:00:00", "08:00:00");

        let mut records = vec![&a, &b, &c];
        rank(&mut records, Criterion::Price);
        assert_eq!(ids(&records), vec![2, 1, 3]);
    }

    #[test]
    fn signed_zero_prices_tie() {
        let a = train(1, 0.0, "09:00:00", "08:00:00");
        let b = train(2, -0.0, "09:00:00", "08:00:00");

        let mut records = vec![&a, &b];
        rank(&mut records, Criterion::Price);
        assert_eq!(ids(&records), vec![1, 2]);
    }

    #[test]
    fn nan_price_sorts_last() {
        let a = train(1, f64::NAN, "09:00:00", "08:00:00");
        let b = train(2, 99.0, "09:00:00", "08:00:00");

        let mut records = vec![&a, &b];
        rank(&mut records, Criterion::Price);
        assert_eq!(ids(&records), vec![2, 1]);
    }

    #[test]
    fn comparator_matches_criterion() {
        let cheap_late = train(1, 1.0, "23:00:00", "22:00:00");
        let dear_early = train(2, 99.0, "01:00:00", "00:30:00");

        let by_price = comparator(Criterion::Price);
        assert_eq!(by_price(&cheap_late, &dear_early), Ordering::Less);

        let by_arrival = comparator(Criterion::ArrivalTime);
        assert_eq!(by_arrival(&cheap_late, &dear_early), Ordering::Greater);

        let by_departure = comparator(Criterion::DepartureTime);
        assert_eq!(by_departure(&dear_early, &cheap_late), Ordering::Less);
    }

    #[test]
    fn top_n_truncates() {
        let values = [1, 2, 3, 4, 5];
        assert_eq!(top_n(&values, 3), &[1, 2, 3]);
        assert_eq!(top_n(&values, 5), &values);
    }

    #[test]
    fn top_n_short_input() {
        let values = [1, 2];
        assert_eq!(top_n(&values, 3), &[1, 2]);

        let empty: [i32; 0] = [];
        assert!(top_n(&empty, 3).is_empty());
        assert!(top_n(&values, 0).is_empty());
    }

    #[test]
    fn empty_input() {
        let mut records: Vec<&TrainRecord> = vec![];
        rank(&mut records, Criterion::Price);
        assert!(records.is_empty());
    }
}
