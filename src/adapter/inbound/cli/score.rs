//! Handler for the `score` command.

use std::sync::Arc;

use serde_json::json;
use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::command::ScoreArgs;
use crate::adapter::inbound::cli::output;
use crate::adapter::outbound::file::QuestionDocument;
use crate::adapter::outbound::memory::MemoryStore;
use crate::domain::{Question, ScoreBreakdown, ScoreResult};
use crate::error::Result;
use crate::infrastructure::bootstrap::build_resolution_service;
use crate::infrastructure::config::settings::Config;
use crate::port::ForecastStore;

#[derive(Tabled)]
struct ScoreRow {
    #[tabled(rename = "Rank")]
    rank: usize,
    #[tabled(rename = "Participant")]
    participant: String,
    #[tabled(rename = "Brier")]
    absolute: String,
    #[tabled(rename = "Relative")]
    relative: String,
}

#[derive(Tabled)]
struct DayRow {
    #[tabled(rename = "Day")]
    day: usize,
    #[tabled(rename = "Start")]
    start: String,
    #[tabled(rename = "Forecasters")]
    forecasters: usize,
    #[tabled(rename = "Median")]
    median: String,
}

/// Execute `brierly score`.
pub async fn execute(args: &ScoreArgs, config: &Config) -> Result<()> {
    let document = QuestionDocument::load(&args.file)?;
    let question = document.question.clone();

    let store = Arc::new(MemoryStore::new());
    document.seed(&store);
    let service = build_resolution_service(config, Arc::clone(&store));
    let result = service.resolve(question.id()).await?;

    let breakdown = if args.breakdown {
        let forecasts = store.forecasts(question.id()).await?;
        Some(ScoreBreakdown::compute(&question, &forecasts)?)
    } else {
        None
    };

    let precision = config.output.precision;
    if output::is_json() {
        print_json(&question, &result, breakdown.as_ref());
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::section("Question");
    output::field("ID", output::highlight(question.id()));
    output::field("Resolution", question.resolution());
    output::field("Created", question.created_at().to_rfc3339());
    output::field("Resolved", question.resolved_at().to_rfc3339());
    if let Some(winner) = result.winner() {
        output::field(
            "Leader",
            format!(
                "{} ({})",
                winner.participant_id,
                output::signed(winner.relative_score, precision)
            ),
        );
    }

    output::section("Scores");
    output::lines(&score_table(&result, precision));

    if let Some(breakdown) = breakdown {
        output::section("Daily medians");
        output::lines(&day_table(&breakdown, precision));
    }

    Ok(())
}

fn score_table(result: &ScoreResult, precision: usize) -> String {
    let rows: Vec<ScoreRow> = result
        .iter()
        .map(|s| ScoreRow {
            rank: s.rank,
            participant: s.participant_id.to_string(),
            absolute: format!("{:.precision$}", s.absolute_score),
            relative: format!("{:+.precision$}", s.relative_score),
        })
        .collect();
    Table::new(rows).to_string()
}

fn day_table(breakdown: &ScoreBreakdown, precision: usize) -> String {
    let rows: Vec<DayRow> = breakdown
        .schedule()
        .intervals()
        .iter()
        .zip(breakdown.intervals())
        .enumerate()
        .map(|(day, (interval, scores))| DayRow {
            day,
            start: interval.start().format("%Y-%m-%d %H:%M").to_string(),
            forecasters: scores.defined_count(),
            median: format!("{:.precision$}", scores.median()),
        })
        .collect();
    Table::new(rows).to_string()
}

fn print_json(question: &Question, result: &ScoreResult, breakdown: Option<&ScoreBreakdown>) {
    let medians: Option<Vec<f64>> =
        breakdown.map(|b| b.intervals().iter().map(|i| i.median()).collect());
    output::json_output(json!({
        "command": "score",
        "question_id": question.id(),
        "resolution": question.resolution(),
        "scores": result.as_slice(),
        "daily_medians": medians,
    }));
}
