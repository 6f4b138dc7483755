use serde::{Deserialize, Serialize};

use crate::game::{Outcome, TurnAction};

/// One entry of a game's move history.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Turn number the action belongs to (1-based)
    pub turn: u32,
    /// Seat that acted (0 or 1)
    pub player: usize,
    pub action: TurnAction,
    /// Whether the action completed a sequence
    #[serde(default)]
    pub sequence: bool,
}

/// Complete record of a finished (or abandoned) game.
/// Serialized one per line as JSONL.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Unique identifier (format: YYYYMMDD-NNNNNN)
    pub game_id: String,
    /// Seed of board layout and deck order
    pub seed: u64,
    pub players: [String; 2],
    /// Chronological list of actions
    pub moves: Vec<MoveRecord>,
    /// Completed sequences per seat
    pub scores: [u8; 2],
    #[serde(default)]
    pub outcome: Option<Outcome>,
    /// Timestamp in RFC3339 format
    #[serde(default)]
    pub ts: Option<String>,
}

pub fn format_game_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

pub struct GameLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl GameLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
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
        format_game_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &GameRecord) -> std::io::Result<()> {
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
