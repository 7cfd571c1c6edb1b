mod common;

use common::{ev, frame};
use oly_core::EventsRepository;
use oly_core::data_utils::{dedup_by_keys, round_to};
use proptest::prelude::*;

fn arb_row() -> impl Strategy<Value = common::TestRow> {
    (
        1_i64..6,
        prop::sample::select(vec!["M", "F"]),
        prop::sample::select(vec!["USA", "SWE", "GER", "KEN"]),
        prop::sample::select(vec!["2012 Summer", "2014 Winter", "2016 Summer"]),
        prop::sample::select(vec!["Swimming", "Basketball", "Alpine Skiing"]),
        prop::sample::select(vec!["Event A", "Event B", "Event C"]),
        prop::sample::select(vec![None, Some("Gold"), Some("Silver"), Some("Bronze")]),
    )
        .prop_map(|(id, sex, noc, games, sport, event, medal)| {
            ev(id, sex, noc, games, sport, event, medal)
        })
}

proptest! {
    #[test]
    fn dedup_is_idempotent(rows in prop::collection::vec(arb_row(), 0..40)) {
        let df = frame(&rows);
        let keys = ["Event", "Games", "Medal", "NOC"];
        let once = dedup_by_keys(&df, &keys).unwrap();
        let twice = dedup_by_keys(&once, &keys).unwrap();
        prop_assert!(once.equals_missing(&twice));
    }

    #[test]
    fn dedup_never_grows_the_frame(rows in prop::collection::vec(arb_row(), 0..40)) {
        let df = frame(&rows);
        let deduped = dedup_by_keys(&df, &["Games", "ID"]).unwrap();
        prop_assert!(deduped.height() <= df.height());
    }

    #[test]
    fn usa_views_never_exceed_world_views(rows in prop::collection::vec(arb_row(), 0..40)) {
        let repo = EventsRepository::from_frame(frame(&rows)).unwrap();
        prop_assert!(repo.usa().height() <= repo.world().height());
        prop_assert!(repo.usa_medals().height() <= repo.world_medals().height());
        prop_assert!(
            repo.unique_participants_usa().height()
                <= repo.unique_participants_world().height()
        );
    }

    #[test]
    fn rounding_is_sign_symmetric(value in -1.0e6_f64..1.0e6, decimals in 0_u32..4) {
        prop_assert_eq!(round_to(-value, decimals), -round_to(value, decimals));
    }

    #[test]
    fn rounding_stays_within_half_a_step(value in -1.0e6_f64..1.0e6, decimals in 0_u32..4) {
        let step = 10_f64.powi(-(decimals as i32));
        // small slack for float error in the scale/unscale round trip
        prop_assert!((round_to(value, decimals) - value).abs() <= step / 2.0 + 1e-6);
    }
}
