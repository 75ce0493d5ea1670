pub mod runner;
pub mod verdict;

pub use runner::{run_trials, RunError, TrialRunner};
pub use verdict::{trial_line, trial_lines, Failure, Verdict};
