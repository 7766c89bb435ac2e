use serde::{Deserialize, Serialize};

use crate::player::PlayerId;

/// A single observable match occurrence, journaled in call order.
/// Built by the embedding layer from transition results; the match core
/// itself never touches a clock or a file.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum MatchEvent {
    /// A slot was filled
    PlayerJoined { player: PlayerId, slot: usize },
    /// Second join: the match went active
    MatchStarted { first_turn: PlayerId },
    /// A card resolved against the opponent
    CardPlayed {
        player: PlayerId,
        index: usize,
        card_id: u32,
        damage: u32,
        opponent_hp: u32,
    },
    /// A winner was declared; the match is terminal
    MatchEnded { winner: PlayerId },
}

/// Complete journal of one match, serialized to JSONL for storage and
/// replay.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Unique identifier for this match (format: YYYYMMDD-NNNNNN)
    pub match_id: String,
    /// Shuffle seed when the shuffled deal policy was used
    pub seed: Option<u64>,
    /// Chronological event journal
    pub events: Vec<MatchEvent>,
    /// Result summary (winner, final hp, etc.)
    pub result: Option<String>,
    /// Timestamp when the record was written (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
    /// Additional metadata (extensible JSON object)
    #[serde(default)]
    pub meta: Option<serde_json::Value>,
}

pub fn format_match_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

pub struct MatchLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl MatchLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                let _ = create_dir_all(parent);
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: "19700101".to_string(),
            seq: 0,
        })
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
