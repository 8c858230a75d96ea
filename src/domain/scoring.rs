//! Relative Brier scoring of a resolved binary question.
//!
//! The pipeline runs in three stages over immutable intermediates:
//!
//! 1. [`IntervalSchedule`] cuts the question's lifetime into daily windows.
//! 2. [`ForecastHistory::representative_belief`] reduces each participant's
//!    forecasts to one probability per window.
//! 3. Each window's beliefs become Brier scores; the window's median score is
//!    subtracted to get relative scores, and both series are time-averaged
//!    into one [`ParticipantScore`] per participant.
//!
//! # Examples
//!
//! ```
//! use brierly::domain::forecast::Forecast;
//! use brierly::domain::id::{ParticipantId, QuestionId};
//! use brierly::domain::question::{Question, Resolution};
//! use brierly::domain::scoring::score;
//! use chrono::{Duration, TimeZone, Utc};
//!
//! let t0 = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
//! let question = Question::new(QuestionId::new("q"), t0, t0 + Duration::days(7), Resolution::Yes);
//! let forecasts = vec![
//!     Forecast::new("alice", 0.9, t0),
//!     Forecast::new("bob", 0.25, t0),
//! ];
//!
//! let result = score(&question, &forecasts).unwrap();
//! assert_eq!(result.winner().unwrap().participant_id, ParticipantId::new("alice"));
//! ```

use std::cmp::Ordering;
use std::collections::HashMap;

use super::belief::ForecastHistory;
use super::error::ScoringError;
use super::forecast::Forecast;
use super::id::ParticipantId;
use super::interval::IntervalSchedule;
use super::question::Question;
use super::result::{ParticipantScore, ScoreResult};

/// Brier score of `probability` against a binary truth value.
///
/// Kept in its two-term form (YES error plus NO error) rather than the
/// equivalent `2 * (p - t)^2`. The result lies in `[0, 2]`.
#[must_use]
pub fn absolute_score(probability: f64, true_value: f64) -> f64 {
    (probability - true_value).powi(2) + ((1.0 - probability) - (1.0 - true_value)).powi(2)
}

/// Median of `values`; 0 for an empty slice.
#[must_use]
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    }
}

/// Absolute scores of every participant over one interval.
///
/// Entries are indexed like [`ScoreBreakdown::participants`]; `None` means
/// the participant had no belief yet.
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalScores {
    absolute: Vec<Option<f64>>,
    median: f64,
}

impl IntervalScores {
    fn new(absolute: Vec<Option<f64>>) -> Self {
        let defined: Vec<f64> = absolute.iter().flatten().copied().collect();
        let median = median(&defined);
        Self { absolute, median }
    }

    /// Absolute scores per participant.
    #[must_use]
    pub fn absolute(&self) -> &[Option<f64>] {
        &self.absolute
    }

    /// Median of the defined absolute scores.
    #[must_use]
    pub const fn median(&self) -> f64 {
        self.median
    }

    /// Relative score of the participant at `index`.
    #[must_use]
    pub fn relative(&self, index: usize) -> Option<f64> {
        self.absolute
            .get(index)
            .copied()
            .flatten()
            .map(|abs| abs - self.median)
    }

    /// Relative scores of the participants that had a belief.
    pub fn relative_scores(&self) -> impl Iterator<Item = f64> + '_ {
        self.absolute.iter().flatten().map(|abs| abs - self.median)
    }

    /// Number of participants with a belief in this interval.
    #[must_use]
    pub fn defined_count(&self) -> usize {
        self.absolute.iter().flatten().count()
    }
}

/// Per-interval scoring of a question, before temporal aggregation.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBreakdown {
    schedule: IntervalSchedule,
    participants: Vec<ParticipantId>,
    intervals: Vec<IntervalScores>,
}

impl ScoreBreakdown {
    /// Validate the inputs and score every interval.
    ///
    /// Participants are kept in the order they first appear in `forecasts`;
    /// that order breaks ranking ties. Participants whose forecasts all come
    /// at or after resolution never hold a belief and are dropped.
    pub fn compute(question: &Question, forecasts: &[Forecast]) -> Result<Self, ScoringError> {
        let true_value = question.validate()?;
        if forecasts.is_empty() {
            return Err(ScoringError::NoForecasts);
        }
        for forecast in forecasts {
            forecast.validate()?;
        }

        let (ids, histories) = group_by_participant(forecasts);
        let schedule = IntervalSchedule::build(question.created_at(), question.resolved_at());

        // Beliefs persist once formed, so a participant scored anywhere is
        // scored in the last interval.
        let Some(last) = schedule.intervals().last() else {
            return Err(ScoringError::NoForecastsBeforeResolution);
        };
        let (participants, histories): (Vec<_>, Vec<_>) = ids
            .into_iter()
            .zip(histories)
            .filter(|(_, history)| history.representative_belief(last).is_some())
            .unzip();
        if participants.is_empty() {
            return Err(ScoringError::NoForecastsBeforeResolution);
        }

        let intervals = schedule
            .intervals()
            .iter()
            .map(|interval| {
                let absolute = histories
                    .iter()
                    .map(|history| {
                        history
                            .representative_belief(interval)
                            .map(|belief| absolute_score(belief, true_value))
                    })
                    .collect();
                IntervalScores::new(absolute)
            })
            .collect();

        Ok(Self {
            schedule,
            participants,
            intervals,
        })
    }

    /// The interval schedule the scores were computed over.
    #[must_use]
    pub const fn schedule(&self) -> &IntervalSchedule {
        &self.schedule
    }

    /// Scored participants in first-appearance order.
    #[must_use]
    pub fn participants(&self) -> &[ParticipantId] {
        &self.participants
    }

    /// Scores per interval, in chronological order.
    #[must_use]
    pub fn intervals(&self) -> &[IntervalScores] {
        &self.intervals
    }

    /// Average each participant's series over time and rank them.
    ///
    /// With a single participant there is no peer group, and the relative
    /// score is reported equal to the absolute score.
    #[must_use]
    pub fn into_result(self) -> ScoreResult {
        let single = self.participants.len() == 1;

        let mut scores: Vec<ParticipantScore> = self
            .participants
            .iter()
            .enumerate()
            .map(|(index, participant_id)| {
                let absolute: Vec<f64> = self
                    .intervals
                    .iter()
                    .filter_map(|interval| interval.absolute.get(index).copied().flatten())
                    .collect();
                let relative: Vec<f64> = self
                    .intervals
                    .iter()
                    .filter_map(|interval| interval.relative(index))
                    .collect();

                let absolute_score = self.schedule.average_for_score_resolution(&absolute);
                let relative_score = if single {
                    absolute_score
                } else {
                    self.schedule.average_for_score_resolution(&relative)
                };

                ParticipantScore {
                    participant_id: participant_id.clone(),
                    absolute_score,
                    relative_score,
                    rank: 0,
                }
            })
            .collect();

        scores.sort_by(|a, b| {
            a.relative_score
                .partial_cmp(&b.relative_score)
                .unwrap_or(Ordering::Equal)
        });
        for (position, score) in scores.iter_mut().enumerate() {
            score.rank = position + 1;
        }

        ScoreResult::from_ranked(scores)
    }
}

/// Score a resolved binary question.
///
/// Fails with a [`ScoringError`] on malformed input instead of returning a
/// score that could be silently wrong.
pub fn score(question: &Question, forecasts: &[Forecast]) -> Result<ScoreResult, ScoringError> {
    ScoreBreakdown::compute(question, forecasts).map(ScoreBreakdown::into_result)
}

/// Split forecasts into per-participant histories, in first-appearance order.
fn group_by_participant(forecasts: &[Forecast]) -> (Vec<ParticipantId>, Vec<ForecastHistory>) {
    let mut order: Vec<ParticipantId> = Vec::new();
    let mut grouped: HashMap<&ParticipantId, Vec<&Forecast>> = HashMap::new();

    for forecast in forecasts {
        let entry = grouped.entry(forecast.participant_id()).or_default();
        if entry.is_empty() {
            order.push(forecast.participant_id().clone());
        }
        entry.push(forecast);
    }

    let histories = order
        .iter()
        .map(|id| {
            grouped
                .remove(id)
                .map(ForecastHistory::new)
                .unwrap_or_default()
        })
        .collect();

    (order, histories)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::id::QuestionId;
    use crate::domain::question::Resolution;
    use chrono::{DateTime, Duration, TimeZone, Utc};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    fn question(length: Duration, resolution: Resolution) -> Question {
        Question::new(QuestionId::new("q"), t0(), t0() + length, resolution)
    }

    fn forecast(who: &str, p: f64, offset: Duration) -> Forecast {
        Forecast::new(who, p, t0() + offset)
    }

    #[test]
    fn absolute_score_two_term_form() {
        assert_eq!(absolute_score(1.0, 1.0), 0.0);
        assert_eq!(absolute_score(0.0, 1.0), 2.0);
        assert_eq!(absolute_score(0.5, 0.0), 0.5);
        assert!((absolute_score(0.9, 1.0) - 0.02).abs() < 1e-12);
    }

    #[test]
    fn median_handles_odd_even_and_empty() {
        assert_eq!(median(&[]), 0.0);
        assert_eq!(median(&[3.0, 1.0, 2.0]), 2.0);
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), 2.5);
        assert_eq!(median(&[7.0]), 7.0);
    }

    #[test]
    fn no_outcome_flips_truth_value() {
        let q = question(Duration::days(1), Resolution::No);
        let result = score(&q, &[forecast("a", 0.1, Duration::zero())]).unwrap();
        let a = result.get(&"a".into()).unwrap();
        assert!((a.absolute_score - 0.02).abs() < 1e-12);
    }

    #[test]
    fn participants_after_resolution_are_excluded() {
        let q = question(Duration::days(2), Resolution::Yes);
        let forecasts = vec![
            forecast("early", 0.6, Duration::zero()),
            forecast("late", 0.9, Duration::days(2)),
        ];

        let result = score(&q, &forecasts).unwrap();
        assert_eq!(result.len(), 1);
        assert!(result.get(&"late".into()).is_none());
    }

    #[test]
    fn only_late_forecasts_is_an_error() {
        let q = question(Duration::days(2), Resolution::Yes);
        let err = score(&q, &[forecast("late", 0.9, Duration::days(3))]).unwrap_err();
        assert_eq!(err, ScoringError::NoForecastsBeforeResolution);
    }

    #[test]
    fn invalid_probability_is_rejected() {
        let q = question(Duration::days(2), Resolution::Yes);
        let err = score(&q, &[forecast("a", 1.5, Duration::zero())]).unwrap_err();
        assert!(matches!(err, ScoringError::ProbabilityOutOfRange { .. }));
    }

    #[test]
    fn ties_keep_first_appearance_order() {
        let q = question(Duration::days(3), Resolution::Yes);
        let forecasts = vec![
            forecast("zed", 0.7, Duration::zero()),
            forecast("amy", 0.7, Duration::zero()),
        ];

        let result = score(&q, &forecasts).unwrap();
        let ranked: Vec<&str> = result.iter().map(|s| s.participant_id.as_str()).collect();
        assert_eq!(ranked, vec!["zed", "amy"]);
        assert_eq!(result.as_slice()[0].rank, 1);
        assert_eq!(result.as_slice()[1].rank, 2);
    }

    #[test]
    fn undefined_belief_contributes_no_entry() {
        let q = question(Duration::days(4), Resolution::Yes);
        let forecasts = vec![
            forecast("a", 0.5, Duration::zero()),
            forecast("b", 0.5, Duration::days(2)),
        ];

        let breakdown = ScoreBreakdown::compute(&q, &forecasts).unwrap();
        let defined: Vec<usize> = breakdown
            .intervals()
            .iter()
            .map(IntervalScores::defined_count)
            .collect();
        assert_eq!(defined, vec![1, 1, 2, 2]);

        let result = breakdown.into_result();
        let b = result.get(&"b".into()).unwrap();
        // Two days at 0.5 over a four-day question.
        assert!((b.absolute_score - 0.25).abs() < 1e-12);
    }

    #[test]
    fn zero_length_question_scores_latest_forecast() {
        let q = question(Duration::zero(), Resolution::Yes);
        let forecasts = vec![
            forecast("a", 0.8, Duration::zero()),
            forecast("b", 0.4, Duration::zero()),
        ];

        let result = score(&q, &forecasts).unwrap();
        let a = result.get(&"a".into()).unwrap();
        assert!((a.absolute_score - 0.08).abs() < 1e-12);
        assert_eq!(a.rank, 1);
    }
}
