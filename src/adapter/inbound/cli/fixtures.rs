//! Handler for the `fixtures` command, the scorer's debug entry point.

use serde_json::json;

use crate::adapter::inbound::cli::output;
use crate::application::fixture::{run_reference_fixtures, FixtureReport, FIXTURE_TOLERANCE};
use crate::error::{Error, Result};
use crate::infrastructure::config::settings::Config;

/// Execute `brierly fixtures`.
///
/// Fails when any fixture does not reproduce its pinned scores.
pub fn execute(config: &Config) -> Result<()> {
    let reports = run_reference_fixtures();
    let failed = reports.iter().filter(|r| !r.passed()).count();

    if output::is_json() {
        output::json_output(json!({
            "command": "fixtures",
            "tolerance": FIXTURE_TOLERANCE,
            "passed": reports.len() - failed,
            "failed": failed,
            "fixtures": reports,
        }));
    } else {
        output::header(env!("CARGO_PKG_VERSION"));
        output::section("Reference fixtures");
        for report in &reports {
            print_report(report, config.output.precision);
        }
        output::section("Summary");
        output::field("Passed", reports.len() - failed);
        output::field("Failed", failed);
    }

    if failed > 0 {
        return Err(Error::Fixture(format!(
            "{failed} of {} fixtures failed",
            reports.len()
        )));
    }
    Ok(())
}

fn print_report(report: &FixtureReport, precision: usize) {
    if let Some(error) = &report.error {
        output::failure(&format!("{}: {error}", report.name));
        return;
    }

    if report.passed() {
        output::success(report.name);
    } else {
        output::failure(report.name);
    }

    if output::verbosity() > 0 || !report.passed() {
        for check in &report.checks {
            let actual = check
                .actual
                .map_or_else(|| "missing".to_string(), |a| format!("{a:+.precision$}"));
            output::note(&format!(
                "{}: expected {:+.precision$}, got {actual}",
                check.participant_id, check.expected
            ));
        }
    }
}
