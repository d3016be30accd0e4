use std::fs;

use autodeck_engine::engine::Engine;
use autodeck_engine::events::MatchEvent;
use autodeck_engine::logger::{format_match_id, MatchLogger, MatchRecord};
use tempfile::tempdir;

fn finished_record(seed: u64, id: String) -> MatchRecord {
    let mut events: Vec<MatchEvent> = Vec::new();
    Engine::new(seed).run(&mut events).unwrap();
    MatchRecord::from_events(id, Some(seed), events).expect("complete event stream")
}

#[test]
fn match_ids_are_sequential() {
    let mut logger = MatchLogger::with_seq_for_test("20261019");
    assert_eq!(logger.next_id(), "20261019-000001");
    assert_eq!(logger.next_id(), "20261019-000002");
    assert_eq!(format_match_id("20260101", 123), "20260101-000123");
}

#[test]
fn record_summarizes_event_stream() {
    let mut events: Vec<MatchEvent> = Vec::new();
    let result = Engine::new(88).run(&mut events).unwrap();
    let rec = MatchRecord::from_events("20261019-000001".into(), Some(88), events.clone()).unwrap();

    assert_eq!(rec.turns, result.turns);
    assert_eq!(rec.scores, result.scores);
    assert_eq!(rec.outcome, result.outcome);
    assert_eq!(rec.reason, result.reason);
    assert_eq!(rec.events.len(), events.len());
    assert!(rec.ts.is_none());
}

#[test]
fn incomplete_stream_yields_no_record() {
    let mut eng = Engine::new(3);
    let mut events: Vec<MatchEvent> = Vec::new();
    eng.play_turn(&mut events).unwrap();
    assert!(MatchRecord::from_events("x".into(), Some(3), events).is_none());
    assert!(MatchRecord::from_events("x".into(), None, Vec::new()).is_none());
}

#[test]
fn writes_jsonl_with_lf_and_timestamp() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("matches.jsonl");
    let mut logger = MatchLogger::create(&path).unwrap();

    for seed in [1u64, 2] {
        let id = logger.next_id();
        logger.write(&finished_record(seed, id)).unwrap();
    }

    let content = fs::read_to_string(&path).unwrap();
    assert!(!content.contains('\r'));
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    for (i, line) in lines.iter().enumerate() {
        let rec: MatchRecord = serde_json::from_str(line).unwrap();
        assert!(rec.match_id.ends_with(&format!("-{:06}", i + 1)));
        let ts = rec.ts.expect("timestamp injected");
        assert!(ts.ends_with('Z'));
        assert!(matches!(
            rec.events.last(),
            Some(MatchEvent::MatchEnded { .. })
        ));
    }
}

#[test]
fn existing_timestamp_is_kept() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("one.jsonl");
    let mut logger = MatchLogger::create(&path).unwrap();
    let mut rec = finished_record(4, "20260101-000001".into());
    rec.ts = Some("2026-01-01T00:00:00Z".into());
    logger.write(&rec).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let back: MatchRecord = serde_json::from_str(content.trim_end()).unwrap();
    assert_eq!(back, rec);
}

#[test]
fn append_keeps_earlier_records() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("log.jsonl");
    for seed in [10u64, 11] {
        let mut logger = MatchLogger::append(&path).unwrap();
        let id = logger.next_id();
        logger.write(&finished_record(seed, id)).unwrap();
    }
    let content = fs::read_to_string(&path).unwrap();
    let records: Vec<MatchRecord> = content
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    let seeds: Vec<Option<u64>> = records.iter().map(|r| r.seed).collect();
    assert_eq!(seeds, vec![Some(10), Some(11)]);
    // a reopened logger continues the sequence instead of reusing ids
    assert!(records[0].match_id.ends_with("-000001"));
    assert!(records[1].match_id.ends_with("-000002"));
    assert_eq!(records[0].match_id[..8], records[1].match_id[..8]);
}
