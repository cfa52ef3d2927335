//! Property tests for the range generator and the beats relation.

use proptest::prelude::*;

use parlor_games::{Choice, GameRng, MatchConfig, MatchState, RoundResult, Throw};

fn any_choice() -> impl Strategy<Value = Choice> {
    prop_oneof![Just(Choice::Rock), Just(Choice::Paper), Just(Choice::Scissors)]
}

fn any_result() -> impl Strategy<Value = RoundResult> {
    prop_oneof![
        Just(RoundResult::Tie),
        Just(RoundResult::Win),
        Just(RoundResult::Loss)
    ]
}

proptest! {
    #[test]
    fn gen_in_range_stays_in_bounds(seed in any::<u64>(), a in any::<i64>(), b in any::<i64>()) {
        let (min, max) = if a <= b { (a, b) } else { (b, a) };
        let mut rng = GameRng::new(seed);

        for _ in 0..16 {
            let value = rng.gen_in_range(min, max).unwrap();
            prop_assert!(min <= value && value <= max);
        }
    }

    #[test]
    fn gen_in_range_small_ranges(seed in any::<u64>(), min in -1000i64..1000, width in 0i64..20) {
        let max = min + width;
        let mut rng = GameRng::new(seed);

        let value = rng.gen_in_range(min, max).unwrap();
        prop_assert!((min..=max).contains(&value));
    }

    #[test]
    fn gen_in_range_single_value(seed in any::<u64>(), bound in any::<i64>()) {
        let mut rng = GameRng::new(seed);
        prop_assert_eq!(rng.gen_in_range(bound, bound).unwrap(), bound);
    }

    #[test]
    fn gen_in_range_rejects_inverted(seed in any::<u64>(), a in any::<i64>(), b in any::<i64>()) {
        prop_assume!(a != b);
        let (min, max) = if a < b { (a, b) } else { (b, a) };
        let mut rng = GameRng::new(seed);

        prop_assert!(rng.gen_in_range(max, min).is_err());
    }

    #[test]
    fn beats_is_asymmetric(a in any_choice(), b in any_choice()) {
        prop_assert!(!(a.beats(b) && b.beats(a)));
    }

    #[test]
    fn distinct_hands_have_exactly_one_winner(a in any_choice(), b in any_choice()) {
        prop_assume!(a != b);
        prop_assert!(a.beats(b) ^ b.beats(a));
    }

    #[test]
    fn invalid_never_wins_or_ties(opponent in any_choice()) {
        prop_assert!(!Throw::Invalid.beats(opponent));
        prop_assert_eq!(RoundResult::resolve(Throw::Invalid, opponent), RoundResult::Loss);
    }

    #[test]
    fn match_completes_after_three_decisive_rounds(results in prop::collection::vec(any_result(), 0..40)) {
        let mut state = MatchState::new(&MatchConfig::default());
        let mut decisive = 0;

        for result in results {
            if state.is_complete() {
                break;
            }
            state.record(result);
            if result != RoundResult::Tie {
                decisive += 1;
            }
            prop_assert_eq!(state.rounds(), decisive);
            prop_assert_eq!(state.is_complete(), decisive == 3);
        }

        if state.is_complete() {
            prop_assert_eq!(state.wins() + state.losses(), 3);
            prop_assert_eq!(state.player_won(), state.wins() >= 2);
        }
    }
}
