use autodeck_engine::cards::{Card, CardId, CardKind};
use autodeck_engine::engine::Engine;
use autodeck_engine::errors::GameError;
use autodeck_engine::events::{MatchEvent, NullSink};

#[test]
fn duplicated_card_halts_the_match() {
    let mut eng = Engine::new(10);
    let stolen = eng.players()[0].hand()[0];
    eng.players_mut()[1].deck_mut().receive_purchased(stolen);

    assert_eq!(
        eng.verify_invariants(),
        Err(GameError::DuplicateCard { card: stolen.id })
    );
    let err = eng.play_turn(&mut NullSink).unwrap_err();
    assert!(matches!(err, GameError::DuplicateCard { .. }));
    assert!(!eng.is_over());
}

#[test]
fn conjured_card_breaks_conservation() {
    let mut eng = Engine::new(10);
    eng.players_mut()[0]
        .deck_mut()
        .receive_purchased(Card::new(CardId(10_000), CardKind::Framework));
    assert_eq!(
        eng.verify_invariants(),
        Err(GameError::CardConservation {
            expected: 160,
            actual: 161
        })
    );
    let mut events: Vec<MatchEvent> = Vec::new();
    assert!(eng.run(&mut events).is_err());
    assert!(!events
        .iter()
        .any(|e| matches!(e, MatchEvent::MatchEnded { .. })));
}

#[test]
fn error_messages_are_descriptive() {
    let e = GameError::CardConservation {
        expected: 160,
        actual: 159,
    };
    assert_eq!(
        e.to_string(),
        "Card conservation broken: expected 160 cards, found 159"
    );
    assert_eq!(GameError::MatchOver.to_string(), "Match is already over");
}
