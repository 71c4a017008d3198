//! Outcome reporting at the process boundary
//!
//! Maps poll outcomes to exit codes and marks fatal errors on the pipeline
//! step with a GitHub Actions `::error::` workflow command.

use statusgate_core::PollOutcome;

/// Exit code for a finished poll
pub fn exit_code(outcome: PollOutcome) -> u8 {
    match outcome {
        PollOutcome::Success => 0,
        PollOutcome::Failed { .. } => 1,
        PollOutcome::Exhausted { .. } => 1,
    }
}

/// Exit code for a fatal error
pub const FATAL_EXIT_CODE: u8 = 1;

/// Format an error workflow command, escaping as the runner expects
pub fn error_command(message: &str) -> String {
    let escaped = message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A");
    format!("::error::{escaped}")
}

/// Mark the step as failed; the runner reads workflow commands from stdout
pub fn set_failed(message: &str) {
    println!("{}", error_command(message));
}
