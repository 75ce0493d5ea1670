use std::fmt;

use game_harness_shared::result::{TrialBatch, TrialOutcome};

/// Why a batch did not pass. A crash is reported ahead of a missed threshold.
#[derive(Debug, Clone, PartialEq)]
pub enum Failure {
    Crashed { crashed: usize, total: usize },
    BelowThreshold { actual: f64, required: f64 },
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Failure::Crashed { crashed, total } => {
                write!(f, "Strategy crashed in {} out of {} trials", crashed, total)
            }
            Failure::BelowThreshold { actual, required } => write!(
                f,
                "Strategy won {:.1}% of trials which is less than required {}%",
                actual, required
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    pub total: usize,
    pub wins: usize,
    pub win_percentage: f64,
    pub crash_count: usize,
    pub win_threshold: f64,
    /// Computed even when a crash already fails the batch.
    pub threshold_met: bool,
    pub passed: bool,
}

impl Verdict {
    pub fn evaluate(batch: &TrialBatch, win_threshold: f64) -> Self {
        let total = batch.len();
        let wins = batch.wins();
        let win_percentage = if total == 0 {
            0.0
        } else {
            wins as f64 / total as f64 * 100.0
        };
        let crash_count = batch.crashes();
        let threshold_met = win_percentage >= win_threshold;

        Self {
            total,
            wins,
            win_percentage,
            crash_count,
            win_threshold,
            threshold_met,
            passed: crash_count == 0 && threshold_met,
        }
    }

    pub fn failure(&self) -> Option<Failure> {
        if self.crash_count > 0 {
            Some(Failure::Crashed {
                crashed: self.crash_count,
                total: self.total,
            })
        } else if !self.threshold_met {
            Some(Failure::BelowThreshold {
                actual: self.win_percentage,
                required: self.win_threshold,
            })
        } else {
            None
        }
    }

    pub fn summary_line(&self) -> String {
        format!(
            "Won {} of {} trials ({:.1}%, required {}%), crashed in {}",
            self.wins, self.total, self.win_percentage, self.win_threshold, self.crash_count
        )
    }
}

/// One report line per trial, numbered from 1 in execution order.
pub fn trial_lines(batch: &TrialBatch) -> Vec<String> {
    batch
        .iter()
        .enumerate()
        .map(|(i, outcome)| trial_line(i + 1, outcome))
        .collect()
}

pub fn trial_line(index: usize, outcome: &TrialOutcome) -> String {
    format!(
        "Trial {}: place {} ({}), winner {}, survived {}, score {}, crashed {}, seed {}",
        index,
        outcome.place,
        if outcome.is_win() { "win" } else { "loss" },
        outcome.is_first(),
        outcome.survived_to_end,
        outcome.score,
        outcome.crashed,
        outcome.seed,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_harness_shared::result::Seed;

    fn batch(trials: &[(u32, bool)]) -> TrialBatch {
        TrialBatch::from_outcomes(
            trials
                .iter()
                .enumerate()
                .map(|(i, &(place, crashed))| TrialOutcome {
                    crashed,
                    score: 100 - place as i64,
                    seed: Seed::from(i as u64),
                    place,
                    survived_to_end: place == 1,
                })
                .collect(),
        )
    }

    #[test]
    fn test_top_two_rate_passes_threshold() {
        let batch = batch(&[(1, false), (2, false), (3, false), (1, false), (2, false)]);
        let verdict = Verdict::evaluate(&batch, 60.0);
        assert_eq!(verdict.wins, 4);
        assert!((verdict.win_percentage - 80.0).abs() < 1e-9);
        assert_eq!(verdict.crash_count, 0);
        assert!(verdict.passed);
        assert_eq!(verdict.failure(), None);
    }

    #[test]
    fn test_crash_fails_regardless_of_wins() {
        let batch = batch(&[(1, true), (1, false), (2, false)]);
        let verdict = Verdict::evaluate(&batch, 0.0);
        assert_eq!(verdict.crash_count, 1);
        assert!((verdict.win_percentage - 100.0).abs() < 1e-9);
        assert!(verdict.threshold_met);
        assert!(!verdict.passed);
        assert_eq!(
            verdict.failure(),
            Some(Failure::Crashed {
                crashed: 1,
                total: 3
            })
        );
    }

    #[test]
    fn test_crash_message_takes_precedence() {
        let batch = batch(&[(4, true), (5, false)]);
        let verdict = Verdict::evaluate(&batch, 50.0);
        assert!(!verdict.threshold_met, "threshold miss is still recorded");
        let failure = verdict.failure().unwrap();
        assert_eq!(failure.to_string(), "Strategy crashed in 1 out of 2 trials");
    }

    #[test]
    fn test_below_threshold() {
        let batch = batch(&[(1, false), (3, false), (4, false), (2, false)]);
        let verdict = Verdict::evaluate(&batch, 100.0);
        assert!((verdict.win_percentage - 50.0).abs() < 1e-9);
        assert!(!verdict.passed);
        let failure = verdict.failure().unwrap();
        assert_eq!(
            failure.to_string(),
            "Strategy won 50.0% of trials which is less than required 100%"
        );
    }

    #[test]
    fn test_percentage_bounds() {
        let none = Verdict::evaluate(&batch(&[(3, false), (7, false)]), 0.0);
        assert_eq!(none.win_percentage, 0.0);
        assert!(none.passed, "a zero threshold accepts any crash-free batch");

        let all = Verdict::evaluate(&batch(&[(1, false), (2, false)]), 100.0);
        assert_eq!(all.win_percentage, 100.0);
        assert!(all.passed);

        let empty = Verdict::evaluate(&TrialBatch::default(), 50.0);
        assert_eq!(empty.win_percentage, 0.0);
        assert!(!empty.passed);
    }

    #[test]
    fn test_trial_lines_are_numbered_from_one() {
        let lines = trial_lines(&batch(&[(1, false), (3, true)]));
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "Trial 1: place 1 (win), winner true, survived true, score 99, crashed false, seed 0"
        );
        assert_eq!(
            lines[1],
            "Trial 2: place 3 (loss), winner false, survived false, score 97, crashed true, seed 1"
        );
    }

    #[test]
    fn test_summary_line() {
        let verdict = Verdict::evaluate(&batch(&[(1, false), (3, false), (2, true)]), 60.0);
        assert_eq!(
            verdict.summary_line(),
            "Won 2 of 3 trials (66.7%, required 60%), crashed in 1"
        );
    }
}
