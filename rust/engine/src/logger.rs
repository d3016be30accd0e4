use serde::{Deserialize, Serialize};

use crate::events::MatchEvent;
use crate::game::{EndReason, Outcome, PlayerScore};
use crate::player::PlayerId;

/// Complete record of one match: setup, every event, and the final tally.
/// Written one per line (JSONL) for later inspection.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Unique identifier for this match (format: YYYYMMDD-NNNNNN)
    pub match_id: String,
    /// RNG seed the match was played with
    pub seed: Option<u64>,
    /// Seat that took the first turn
    pub starting_player: PlayerId,
    /// Completed turns
    pub turns: u32,
    /// Chronological event stream
    pub events: Vec<MatchEvent>,
    /// Final AP per player
    pub scores: Vec<PlayerScore>,
    pub outcome: Outcome,
    pub reason: EndReason,
    /// Timestamp when the record was written (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

impl MatchRecord {
    /// Build a record from a finished match's event stream.
    /// Returns `None` if the stream lacks the start or end event.
    pub fn from_events(
        match_id: String,
        seed: Option<u64>,
        events: Vec<MatchEvent>,
    ) -> Option<Self> {
        let starting_player = events.iter().find_map(|e| match e {
            MatchEvent::MatchStarted { starting_player } => Some(*starting_player),
            _ => None,
        })?;
        let (scores, outcome, reason) = events.iter().rev().find_map(|e| match e {
            MatchEvent::MatchEnded {
                scores,
                outcome,
                reason,
            } => Some((scores.clone(), *outcome, *reason)),
            _ => None,
        })?;
        let turns = events
            .iter()
            .filter(|e| matches!(e, MatchEvent::TurnEnded { .. }))
            .count() as u32;
        Some(Self {
            match_id,
            seed,
            starting_player,
            turns,
            events,
            scores,
            outcome,
            reason,
            ts: None,
        })
    }
}

pub fn format_match_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

fn ensure_parent(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Highest `NNNNNN` among `match_id`s of the form `{date}-NNNNNN` in a JSONL file.
/// Lines that are not records are skipped.
fn last_seq_for_date(path: &Path, date: &str) -> std::io::Result<u32> {
    let content = std::fs::read_to_string(path)?;
    let prefix = format!("{}-", date);
    let last = content
        .lines()
        .filter_map(|l| serde_json::from_str::<serde_json::Value>(l).ok())
        .filter_map(|v| {
            v.get("match_id")?
                .as_str()?
                .strip_prefix(&prefix)?
                .parse::<u32>()
                .ok()
        })
        .max();
    Ok(last.unwrap_or(0))
}

pub struct MatchLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl MatchLogger {
    /// Open `path` for writing, creating parent directories as needed.
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        ensure_parent(path.as_ref())?;
        Ok(Self::from_file(File::create(path)?))
    }

    /// Like [`MatchLogger::create`] but keeps existing records and appends after them.
    /// Ids continue after the highest sequence already recorded for today.
    pub fn append<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let path = path.as_ref();
        ensure_parent(path)?;
        let f = OpenOptions::new().create(true).append(true).open(path)?;
        let mut logger = Self::from_file(f);
        logger.seq = last_seq_for_date(path, &logger.date)?;
        Ok(logger)
    }

    fn from_file(f: File) -> Self {
        Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        }
    }

    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_match_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &MatchRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}
