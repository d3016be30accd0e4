use autodeck_engine::cards::{CardKind, CATALOG_SIZE};
use autodeck_engine::engine::{Engine, MAX_TURNS};
use autodeck_engine::events::{MatchEvent, NullSink};
use autodeck_engine::game::{EndReason, Outcome};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn every_seed_terminates_with_conserved_cards(seed in any::<u64>()) {
        let mut eng = Engine::new(seed);
        while !eng.is_over() {
            eng.play_turn(&mut NullSink).unwrap();
            let owned: usize = eng.players().iter().map(|p| p.deck().total_cards()).sum();
            prop_assert_eq!(owned + eng.supply().total_remaining(), CATALOG_SIZE);
            for p in eng.players() {
                prop_assert!(p.deck().played().is_empty());
                prop_assert!(p.hand().len() <= 5);
            }
        }
        let result = eng.result().unwrap();
        prop_assert!(result.turns <= MAX_TURNS);
        prop_assert_eq!(result.reason, EndReason::FrameworksExhausted);
        prop_assert!(eng.supply().is_empty(CardKind::Framework));
    }

    #[test]
    fn replay_is_deterministic(seed in any::<u64>()) {
        let mut a: Vec<MatchEvent> = Vec::new();
        let mut b: Vec<MatchEvent> = Vec::new();
        let ra = Engine::new(seed).run(&mut a).unwrap();
        let rb = Engine::new(seed).run(&mut b).unwrap();
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(ra, rb);
    }

    #[test]
    fn winner_has_strictly_more_points(seed in any::<u64>()) {
        let result = Engine::new(seed).run(&mut NullSink).unwrap();
        let (p0, p1) = (result.scores[0].points, result.scores[1].points);
        match result.outcome {
            Outcome::Winner(p) if p.0 == 0 => prop_assert!(p0 > p1),
            Outcome::Winner(_) => prop_assert!(p1 > p0),
            Outcome::Tie => prop_assert_eq!(p0, p1),
        }
    }
}
