//! yh-logging: NDJSON game events + atomic snapshot persistence.
//!
//! Scope: append-only NDJSON logs for session post-mortems, and the
//! structured save/resume encoding a host may use for in-flight games.

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;
use thiserror::Error;

use yh_core::{Category, GameSnapshot, Totals, NUM_DICE};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Event schema version for every V1 record below.
pub const EVENT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum GameLogError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn now_ms() -> u64 {
    let d = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    d.as_millis() as u64
}

/// Stable hash of a config's serialized bytes, for reproducibility fields.
pub fn hash_config_bytes(bytes: &[u8]) -> String {
    blake3::hash(bytes).to_hex().to_string()
}

/// First line of every session log.
#[derive(Debug, Clone, Serialize)]
pub struct SessionStartV1 {
    pub event: &'static str,
    pub schema_version: u32,
    pub ts_ms: u64,
    pub engine_version: &'static str,
    pub seed: Option<u64>,
    pub config_hash: Option<String>,
}

impl SessionStartV1 {
    pub fn new(seed: Option<u64>, config_hash: Option<String>) -> Self {
        Self {
            event: "session_start",
            schema_version: EVENT_SCHEMA_VERSION,
            ts_ms: now_ms(),
            engine_version: yh_core::VERSION,
            seed,
            config_hash,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RollEventV1 {
    pub event: &'static str,
    pub ts_ms: u64,
    pub round: u8,
    pub roll: u8,
    pub dice: [u8; NUM_DICE],
    pub holds: [bool; NUM_DICE],
}

impl RollEventV1 {
    pub fn new(round: u8, roll: u8, dice: [u8; NUM_DICE], holds: [bool; NUM_DICE]) -> Self {
        Self {
            event: "roll",
            ts_ms: now_ms(),
            round,
            roll,
            dice,
            holds,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CommitEventV1 {
    pub event: &'static str,
    pub ts_ms: u64,
    pub round: u8,
    pub category: Category,
    pub value: i32,
    pub totals: Totals,
}

impl CommitEventV1 {
    pub fn new(round: u8, category: Category, value: i32, totals: Totals) -> Self {
        Self {
            event: "commit",
            ts_ms: now_ms(),
            round,
            category,
            value,
            totals,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GameOverEventV1 {
    pub event: &'static str,
    pub ts_ms: u64,
    pub totals: Totals,
}

impl GameOverEventV1 {
    pub fn new(totals: Totals) -> Self {
        Self {
            event: "game_over",
            ts_ms: now_ms(),
            totals,
        }
    }
}

/// Append-only NDJSON writer.
///
/// Contract: each call writes exactly one JSON object followed by a newline.
pub struct NdjsonWriter {
    w: BufWriter<File>,
    lines_since_flush: u64,
    flush_every_lines: u64,
}

impl NdjsonWriter {
    /// Open a file for append. Creates it if it doesn't exist.
    pub fn open_append(path: impl AsRef<Path>) -> Result<Self, GameLogError> {
        Self::open_append_with_flush(path, 0)
    }

    /// `flush_every_lines=0` disables periodic flushing.
    pub fn open_append_with_flush(
        path: impl AsRef<Path>,
        flush_every_lines: u64,
    ) -> Result<Self, GameLogError> {
        let f = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;
        Ok(Self {
            w: BufWriter::new(f),
            lines_since_flush: 0,
            flush_every_lines,
        })
    }

    pub fn write_event<T: Serialize>(&mut self, event: &T) -> Result<(), GameLogError> {
        let mut buf = serde_json::to_vec(event)?;
        buf.push(b'\n');
        self.w.write_all(&buf)?;
        self.lines_since_flush += 1;
        if self.flush_every_lines > 0 && self.lines_since_flush >= self.flush_every_lines {
            self.flush()?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), GameLogError> {
        self.w.flush()?;
        self.lines_since_flush = 0;
        Ok(())
    }
}

/// Write a game snapshot via tmp-file + rename so a crash never leaves a
/// half-written snapshot behind.
pub fn write_snapshot_atomic(
    path: impl AsRef<Path>,
    snapshot: &GameSnapshot,
) -> Result<(), GameLogError> {
    let path = path.as_ref();
    let tmp = path.with_extension("json.tmp");
    let bytes = serde_json::to_vec_pretty(snapshot)?;
    std::fs::write(&tmp, bytes)?;
    std::fs::rename(&tmp, path)?;
    Ok(())
}

pub fn read_snapshot(path: impl AsRef<Path>) -> Result<GameSnapshot, GameLogError> {
    let bytes = std::fs::read(path)?;
    Ok(serde_json::from_slice::<GameSnapshot>(&bytes)?)
}
