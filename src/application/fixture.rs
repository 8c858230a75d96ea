//! Reference fixtures with known scores.
//!
//! The debug entry point (`brierly fixtures`) scores each fixture and checks
//! the relative scores against values pinned from the production system.

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::Serialize;
use tracing::debug;

use crate::domain::{score, Forecast, ParticipantId, Question, QuestionId, Resolution};

/// Absolute tolerance when comparing scores with pinned values.
pub const FIXTURE_TOLERANCE: f64 = 1e-4;

/// A question, its forecasts and the expected relative score per participant.
#[derive(Debug, Clone)]
pub struct Fixture {
    pub name: &'static str,
    pub question: Question,
    pub forecasts: Vec<Forecast>,
    pub expected: Vec<(ParticipantId, f64)>,
}

/// Outcome of checking one participant of one fixture.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FixtureCheck {
    pub participant_id: ParticipantId,
    pub expected: f64,
    pub actual: Option<f64>,
}

impl FixtureCheck {
    /// Whether the actual score matches within [`FIXTURE_TOLERANCE`].
    #[must_use]
    pub fn passed(&self) -> bool {
        self.actual
            .is_some_and(|actual| (actual - self.expected).abs() <= FIXTURE_TOLERANCE)
    }
}

/// Result of running one fixture.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FixtureReport {
    pub name: &'static str,
    pub checks: Vec<FixtureCheck>,
    /// Set when the scorer rejected the fixture outright.
    pub error: Option<String>,
}

impl FixtureReport {
    /// True when scoring succeeded and every check matched.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.error.is_none() && self.checks.iter().all(FixtureCheck::passed)
    }
}

impl Fixture {
    /// Score the fixture and compare against the expected values.
    #[must_use]
    pub fn run(&self) -> FixtureReport {
        match score(&self.question, &self.forecasts) {
            Ok(result) => {
                let checks = self
                    .expected
                    .iter()
                    .map(|(participant_id, expected)| FixtureCheck {
                        participant_id: participant_id.clone(),
                        expected: *expected,
                        actual: result.get(participant_id).map(|s| s.relative_score),
                    })
                    .collect();
                let report = FixtureReport {
                    name: self.name,
                    checks,
                    error: None,
                };
                debug!(fixture = self.name, passed = report.passed(), "Fixture scored");
                report
            }
            Err(e) => FixtureReport {
                name: self.name,
                checks: Vec::new(),
                error: Some(e.to_string()),
            },
        }
    }
}

fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 6, 1, 9, 30, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

fn question(name: &str, lifetime: Duration, resolution: Resolution) -> Question {
    let t0 = epoch();
    Question::new(QuestionId::new(name), t0, t0 + lifetime, resolution)
}

fn forecast(who: &str, probability: f64, offset: Duration) -> Forecast {
    Forecast::new(who, probability, epoch() + offset)
}

fn expect(pairs: &[(&str, f64)]) -> Vec<(ParticipantId, f64)> {
    pairs
        .iter()
        .map(|(who, score)| (ParticipantId::new(*who), *score))
        .collect()
}

/// The built-in reference fixtures.
#[must_use]
pub fn reference_fixtures() -> Vec<Fixture> {
    vec![
        Fixture {
            name: "three-forecasters",
            question: question("three-forecasters", Duration::days(7), Resolution::Yes),
            forecasts: vec![
                forecast("A", 0.9, Duration::zero()),
                forecast("A", 0.95, Duration::days(3)),
                forecast("B", 0.25, Duration::zero()),
                forecast("B", 0.2, Duration::days(2)),
                forecast("C", 0.99, Duration::days(5)),
            ],
            expected: expect(&[("A", -0.43), ("B", 0.7943), ("C", -0.00137)]),
        },
        Fixture {
            name: "single-forecaster",
            question: question("single-forecaster", Duration::days(7), Resolution::Yes),
            forecasts: vec![
                forecast("A", 0.9, Duration::zero()),
                forecast("A", 0.95, Duration::days(3)),
            ],
            expected: expect(&[("A", 0.0114)]),
        },
        Fixture {
            name: "single-forecaster-no",
            question: question("single-forecaster-no", Duration::days(7), Resolution::No),
            forecasts: vec![
                forecast("A", 0.1, Duration::zero()),
                forecast("A", 0.05, Duration::days(3)),
            ],
            expected: expect(&[("A", 0.0114)]),
        },
        Fixture {
            name: "fractional-day",
            question: question(
                "fractional-day",
                Duration::milliseconds(69_120_000),
                Resolution::Yes,
            ),
            forecasts: vec![forecast("A", 0.9, Duration::zero())],
            expected: expect(&[("A", 0.02)]),
        },
        Fixture {
            // B's revision lands exactly on the day-1 boundary and must hold
            // that whole day; A and B then trade places on day 1.
            name: "boundary-revision",
            question: question("boundary-revision", Duration::days(2), Resolution::Yes),
            forecasts: vec![
                forecast("A", 0.6, Duration::zero()),
                forecast("B", 0.5, Duration::zero()),
                forecast("B", 1.0, Duration::days(1)),
            ],
            // Day 0: A 0.32, B 0.5, median 0.41. Day 1: A 0.32, B 0.0, median 0.16.
            expected: expect(&[("A", 0.035), ("B", -0.035)]),
        },
    ]
}

/// Run every reference fixture.
#[must_use]
pub fn run_reference_fixtures() -> Vec<FixtureReport> {
    reference_fixtures().iter().map(Fixture::run).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_reference_fixture_passes() {
        for report in run_reference_fixtures() {
            assert!(report.passed(), "fixture {} failed: {report:?}", report.name);
        }
    }

    #[test]
    fn mismatch_is_detected() {
        let mut fixture = reference_fixtures().remove(1);
        fixture.expected = expect(&[("A", 0.5)]);
        assert!(!fixture.run().passed());
    }

    #[test]
    fn missing_participant_fails_check() {
        let mut fixture = reference_fixtures().remove(1);
        fixture.expected = expect(&[("nobody", 0.0)]);
        let report = fixture.run();
        assert_eq!(report.checks[0].actual, None);
        assert!(!report.passed());
    }

    #[test]
    fn scorer_rejection_is_reported() {
        let mut fixture = reference_fixtures().remove(0);
        fixture.forecasts.clear();
        let report = fixture.run();
        assert!(report.error.is_some());
        assert!(!report.passed());
    }
}
