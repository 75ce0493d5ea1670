use game_harness_shared::result::TrialBatch;
use game_harness_trials::{trial_lines, Verdict};
use std::time::Duration;

pub fn print_results(batch: &TrialBatch, verdict: &Verdict, elapsed: Duration) {
    println!();
    for line in trial_lines(batch) {
        println!("{}", line);
    }

    println!("\n========================================");
    println!("  Trials:      {}", verdict.total);
    println!("  Time:        {:.2}s", elapsed.as_secs_f64());
    println!("  {}", verdict.summary_line());
    println!("========================================");
}
