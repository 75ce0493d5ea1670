use std::fmt;

use serde::Deserialize;

use crate::config::WIN_PLACE_CUTOFF;

/// Seed reported by the engine. Kept exactly as written so a trial can be replayed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Seed {
    Number(serde_json::Number),
    Text(String),
}

impl From<u64> for Seed {
    fn from(value: u64) -> Self {
        Seed::Number(value.into())
    }
}

impl From<&str> for Seed {
    fn from(value: &str) -> Self {
        Seed::Text(value.to_string())
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seed::Number(n) => write!(f, "{}", n),
            Seed::Text(s) => f.write_str(s),
        }
    }
}

/// Outcome of one engine run, as seen from the tracked participant (player 0).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrialOutcome {
    pub crashed: bool,
    pub score: i64,
    pub seed: Seed,
    /// Final ranking, 1 = winner. Never zero.
    pub place: u32,
    pub survived_to_end: bool,
}

impl TrialOutcome {
    /// Top-2 finishes count as wins.
    pub fn is_win(&self) -> bool {
        self.place < WIN_PLACE_CUTOFF
    }

    pub fn is_first(&self) -> bool {
        self.place == 1
    }
}

#[derive(Debug, Clone, Default)]
pub struct TrialBatch {
    outcomes: Vec<TrialOutcome>,
}

impl TrialBatch {
    pub fn from_outcomes(outcomes: Vec<TrialOutcome>) -> Self {
        Self { outcomes }
    }

    pub fn outcomes(&self) -> &[TrialOutcome] {
        &self.outcomes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TrialOutcome> {
        self.outcomes.iter()
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn wins(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_win()).count()
    }

    pub fn crashes(&self) -> usize {
        self.outcomes.iter().filter(|o| o.crashed).count()
    }
}

impl<'a> IntoIterator for &'a TrialBatch {
    type Item = &'a TrialOutcome;
    type IntoIter = std::slice::Iter<'a, TrialOutcome>;

    fn into_iter(self) -> Self::IntoIter {
        self.outcomes.iter()
    }
}
