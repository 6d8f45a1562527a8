//! Property tests for encoding, matching and window statistics.

use chrono::{TimeZone, Utc};
use pattern_echo::pattern::{encode_closes, find_matches, Direction, DirectionPattern};
use pattern_echo::window::{leading_window, mean_difference, trailing_window};
use pattern_echo::{config::Granularity, PriceSeries};
use proptest::prelude::*;

fn closes_strategy(min: usize, max: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(1.0f64..1000.0, min..max)
}

fn pattern_strategy(min: usize, max: usize) -> impl Strategy<Value = DirectionPattern> {
    prop::collection::vec(any::<bool>(), min..max).prop_map(|bits| {
        bits.into_iter()
            .map(|up| if up { Direction::Up } else { Direction::Down })
            .collect()
    })
}

fn series(closes: &[f64]) -> PriceSeries {
    let start = Utc.with_ymd_and_hms(2018, 1, 1, 0, 0, 0).unwrap();
    PriceSeries::from_closes(Granularity::Daily, start, closes).unwrap()
}

proptest! {
    #[test]
    fn encode_length_and_tie_break(closes in closes_strategy(2, 200)) {
        let p = encode_closes(&closes).unwrap();
        prop_assert_eq!(p.len(), closes.len() - 1);
        for i in 0..p.len() {
            prop_assert_eq!(p[i].is_up(), closes[i + 1] >= closes[i]);
        }
    }

    #[test]
    fn matches_are_sound_and_complete(
        needle in pattern_strategy(1, 5),
        haystack in pattern_strategy(0, 80),
    ) {
        let found = find_matches(&needle, &haystack).unwrap();
        let n = needle.len();
        let expected: Vec<usize> = if haystack.len() < n {
            Vec::new()
        } else {
            (0..=haystack.len() - n)
                .filter(|&k| haystack.as_slice()[k..k + n] == *needle.as_slice())
                .collect()
        };
        prop_assert_eq!(found, expected);
    }

    #[test]
    fn pattern_matches_itself_at_zero(p in pattern_strategy(1, 30)) {
        let found = find_matches(&p, &p).unwrap();
        prop_assert_eq!(found, vec![0]);
    }

    #[test]
    fn trailing_sign_follows_next_price(closes in closes_strategy(2, 60)) {
        let s = series(&closes);
        let w = trailing_window(&s, 0, closes.len() - 1).unwrap();
        for (i, e) in w.iter().enumerate() {
            if closes[i] >= closes[i + 1] {
                prop_assert!(e.percentage_difference >= 0.0);
            } else {
                prop_assert!(e.percentage_difference < 0.0);
            }
        }
    }

    #[test]
    fn leading_average_is_order_independent(closes in closes_strategy(15, 60)) {
        let s = series(&closes);
        let start = closes.len() - 1;
        let mut w = leading_window(&s, start, 13).unwrap();
        let forward = mean_difference(&w).unwrap();
        w.reverse();
        let backward = mean_difference(&w).unwrap();
        prop_assert!((forward - backward).abs() < 1e-9);

        let manual = w.iter().map(|e| e.percentage_difference).sum::<f64>() / w.len() as f64;
        prop_assert!((forward - manual).abs() < 1e-9);
    }
}
