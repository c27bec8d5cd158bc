//! Run command handler
//!
//! Feeds standard input through the command language and reports failures.

use gradebook::config::Config;
use gradebook::core::script::Runner;
use gradebook::{error, info, verbose};
use std::io::{self, BufWriter, Write};

/// Run commands from stdin against a fresh gradebook.
///
/// # Returns
/// `true` when every command succeeded.
pub fn run(config: &Config) -> bool {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let mut runner = Runner::new()
        .with_precision(config.report.average_precision)
        .with_fail_fast(config.report.fail_fast);

    let summary = runner.run(stdin.lock(), &mut out);
    let flushed = out.flush();

    for failure in &summary.failures {
        error!("Command failed on {failure}");
        eprintln!("✗ {failure}");
    }
    if let Some(e) = &summary.io_error {
        error!("I/O failure while running commands: {e}");
        eprintln!("✗ I/O failure, remaining commands were not run: {e}");
    }
    if let Err(e) = flushed {
        eprintln!("✗ Failed to flush output: {e}");
        return false;
    }
    if summary.aborted {
        eprintln!("✗ Stopped after the first failure (fail_fast)");
    }

    verbose!(
        "✓ {} command(s) succeeded, {} failed",
        summary.executed,
        summary.failures.len()
    );
    info!(
        "Run complete ({} students in final gradebook)",
        runner.session().gradebook().map_or(0, |book| book.len())
    );

    summary.is_success()
}
