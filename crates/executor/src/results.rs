use std::path::{Path, PathBuf};

use game_harness_shared::result::{Seed, TrialOutcome};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum MalformedResultError {
    #[error("Failed to read result file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse result file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Result file {} has no entry for {field}", path.display())]
    MissingEntry { path: PathBuf, field: &'static str },
    #[error("Result file {} reports place {place}, expected 1 or more", path.display())]
    InvalidPlace { path: PathBuf, place: i64 },
}

#[derive(Deserialize)]
struct RawResultFile {
    seed: Seed,
    players: Vec<RawPlayer>,
    results: RawResults,
}

#[derive(Deserialize)]
struct RawPlayer {
    crashed: bool,
}

#[derive(Deserialize)]
struct RawResults {
    players: Vec<RawStanding>,
}

#[derive(Deserialize)]
struct RawStanding {
    score: IntLike,
    place: IntLike,
    units_alive: IntLike,
}

/// Integer that the engine may have written as a number, a float or a string.
#[derive(Debug, Clone, Copy)]
struct IntLike(i64);

impl<'de> Deserialize<'de> for IntLike {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        coerce_int(&value).map(IntLike).ok_or_else(|| {
            serde::de::Error::custom(format!("expected an integer-like value, got {}", value))
        })
    }
}

// Values outside i64 (a u64 above i64::MAX, or a float like 1.8e19) are rejected as malformed.
fn coerce_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.abs() < i64::MAX as f64)
                .map(|f| f.trunc() as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        Value::Bool(b) => Some(i64::from(*b)),
        _ => None,
    }
}

/// Read the engine's result file and extract the tracked participant's outcome.
pub fn parse_result_file(path: &Path) -> Result<TrialOutcome, MalformedResultError> {
    let text = std::fs::read_to_string(path).map_err(|source| MalformedResultError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_result_str(&text, path)
}

/// Parse result JSON already in memory. `path` is only used for error messages.
pub fn parse_result_str(text: &str, path: &Path) -> Result<TrialOutcome, MalformedResultError> {
    let raw: RawResultFile =
        serde_json::from_str(text).map_err(|source| MalformedResultError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    // Index 0 is always the strategy under test.
    let player = raw
        .players
        .first()
        .ok_or_else(|| MalformedResultError::MissingEntry {
            path: path.to_path_buf(),
            field: "players[0]",
        })?;
    let standing = raw
        .results
        .players
        .first()
        .ok_or_else(|| MalformedResultError::MissingEntry {
            path: path.to_path_buf(),
            field: "results.players[0]",
        })?;

    let place = match u32::try_from(standing.place.0) {
        Ok(place) if place >= 1 => place,
        _ => {
            return Err(MalformedResultError::InvalidPlace {
                path: path.to_path_buf(),
                place: standing.place.0,
            })
        }
    };

    Ok(TrialOutcome {
        crashed: player.crashed,
        score: standing.score.0,
        seed: raw.seed,
        place,
        survived_to_end: standing.units_alive.0 > 0,
    })
}
