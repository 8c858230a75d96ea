//! Time-weighted belief reconstruction.
//!
//! A participant's forecasts define a step function: from each submission
//! until the next one, their belief is that submission's probability. For a
//! scoring interval we need a single number, the time-average of that step
//! function over the interval.
//!
//! The belief entering an interval is the last forecast strictly before its
//! start. Forecasts inside `[start, end)` then move the step. A participant
//! with neither has no belief for the interval and is left out of its scoring.

use chrono::{DateTime, Utc};

use super::forecast::Forecast;
use super::interval::{days_between, DailyInterval};

/// One step of a participant's belief function.
#[derive(Debug, Clone, Copy, PartialEq)]
struct BeliefPoint {
    at: DateTime<Utc>,
    probability: f64,
}

/// One participant's forecasts in submission order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ForecastHistory {
    points: Vec<BeliefPoint>,
}

impl ForecastHistory {
    /// Build a history from one participant's forecasts, in any order.
    ///
    /// Ties on the timestamp keep their input order, so the later-submitted
    /// record is the one that holds.
    pub fn new<'a>(forecasts: impl IntoIterator<Item = &'a Forecast>) -> Self {
        let mut points: Vec<BeliefPoint> = forecasts
            .into_iter()
            .map(|f| BeliefPoint {
                at: f.submitted_at(),
                probability: f.probability(),
            })
            .collect();
        points.sort_by_key(|p| p.at);
        Self { points }
    }

    /// Number of forecasts in the history.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when the participant never forecast.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The most recent forecast at or before `at`.
    fn latest_at_or_before(&self, at: DateTime<Utc>) -> Option<BeliefPoint> {
        let upto = self.points.partition_point(|p| p.at <= at);
        upto.checked_sub(1).map(|i| self.points[i])
    }

    /// Representative probability of this participant over `interval`.
    ///
    /// Returns `None` when the participant had not forecast by the end of the
    /// interval. The step function is averaged over the part of the interval
    /// in which the participant held a belief: the whole interval when a
    /// forecast preceded it, otherwise from their first forecast onwards. The
    /// result always lies within the range of the contributing probabilities.
    ///
    /// An empty interval (a question resolved the instant it was created)
    /// takes the latest forecast at or before its end, so a submission at
    /// exactly `resolved_at` counts there. For every other interval the end
    /// is exclusive.
    #[must_use]
    pub fn representative_belief(&self, interval: &DailyInterval) -> Option<f64> {
        if interval.is_empty() {
            return self.latest_at_or_before(interval.end()).map(|p| p.probability);
        }

        let from = self.points.partition_point(|p| p.at < interval.start());
        let upto = self.points.partition_point(|p| p.at < interval.end());
        let prior = from.checked_sub(1).map(|i| self.points[i]);
        let within = &self.points[from..upto];

        let (seed, remaining) = match (prior, within.split_first()) {
            (None, None) => return None,
            (Some(prior), None) => return Some(prior.probability),
            (Some(prior), Some(_)) => (
                BeliefPoint {
                    at: interval.start(),
                    probability: prior.probability,
                },
                within,
            ),
            (None, Some((first, rest))) => (*first, rest),
        };

        let mut held = seed;
        let mut integral = 0.0;
        for next in remaining {
            integral = accumulate(integral, held, next.at);
            held = *next;
        }
        integral = accumulate(integral, held, interval.end());

        let span = days_between(seed.at, interval.end());
        Some((integral / span).clamp(0.0, 1.0))
    }
}

/// Add the area of `held` up to `until` to the running integral.
///
/// A segment weighing exactly one day means `held` spans the whole window on
/// its own, so anything accumulated before it is dropped.
fn accumulate(integral: f64, held: BeliefPoint, until: DateTime<Utc>) -> f64 {
    let weight = days_between(held.at, until);
    let carried = if weight == 1.0 { 0.0 } else { integral };
    carried + weight * held.probability
}
