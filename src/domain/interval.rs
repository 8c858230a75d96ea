//! Daily partition of a question's lifetime.
//!
//! A question open from `created_at` to `resolved_at` is cut into consecutive
//! 24 hour windows starting at `created_at`. All windows but the last are a
//! full day long; the last one ends at `resolved_at` and may be shorter (the
//! fractional day).
//!
//! # Examples
//!
//! ```
//! use brierly::domain::interval::IntervalSchedule;
//! use chrono::{Duration, TimeZone, Utc};
//!
//! let created = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
//! let resolved = created + Duration::hours(60);
//!
//! let schedule = IntervalSchedule::build(created, resolved);
//! assert_eq!(schedule.len(), 3);
//! assert_eq!(schedule.total_full_days(), 2);
//! assert!((schedule.fractional_day() - 0.5).abs() < 1e-9);
//! ```

use chrono::{DateTime, Duration, Utc};

/// Milliseconds in one scoring day.
pub const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Fractional days at or below this are treated as zero.
pub const FRACTIONAL_DAY_TOLERANCE: f64 = 1e-4;

/// Signed length of `[start, end)` in days, at millisecond resolution.
#[must_use]
pub fn days_between(start: DateTime<Utc>, end: DateTime<Utc>) -> f64 {
    (end - start).num_milliseconds() as f64 / MILLIS_PER_DAY
}

/// One half-open scoring window `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyInterval {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl DailyInterval {
    /// Create an interval. `end` must not precede `start`.
    #[must_use]
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        debug_assert!(end >= start, "interval end precedes start");
        Self { start, end }
    }

    /// Inclusive lower bound.
    #[must_use]
    pub const fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Exclusive upper bound.
    #[must_use]
    pub const fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Length in days (1.0 for every interval but possibly the last).
    #[must_use]
    pub fn length_days(&self) -> f64 {
        days_between(self.start, self.end)
    }

    /// True for the degenerate interval of a question created and resolved
    /// at the same instant.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether `at` falls within `[start, end)`.
    #[must_use]
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.start <= at && at < self.end
    }
}

/// The ordered windows covering a question's lifetime, plus the day counts
/// used to weight them.
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalSchedule {
    intervals: Vec<DailyInterval>,
    total_days: f64,
    total_full_days: usize,
    fractional_day: f64,
}

impl IntervalSchedule {
    /// Partition `[created_at, resolved_at]` into daily intervals.
    ///
    /// Callers validate `resolved_at >= created_at` first. A zero-length
    /// lifetime still yields exactly one interval.
    #[must_use]
    pub fn build(created_at: DateTime<Utc>, resolved_at: DateTime<Utc>) -> Self {
        let total_days = days_between(created_at, resolved_at).max(0.0);
        let total_full_days = total_days.floor() as usize;
        let fractional_day = total_days - total_days.floor();
        let count = (total_days.ceil() as usize).max(1);

        let intervals = (0..count)
            .map(|i| {
                let day = i64::try_from(i).unwrap_or(i64::MAX);
                let start = created_at + Duration::days(day);
                let end = (start + Duration::days(1)).min(resolved_at);
                DailyInterval::new(start, end)
            })
            .collect();

        Self {
            intervals,
            total_days,
            total_full_days,
            fractional_day,
        }
    }

    /// The intervals in chronological order.
    #[must_use]
    pub fn intervals(&self) -> &[DailyInterval] {
        &self.intervals
    }

    /// Number of intervals.
    #[must_use]
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Always false; a schedule holds at least one interval.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Lifetime of the question in days.
    #[must_use]
    pub const fn total_days(&self) -> f64 {
        self.total_days
    }

    /// `floor(total_days)`.
    #[must_use]
    pub const fn total_full_days(&self) -> usize {
        self.total_full_days
    }

    /// `total_days - floor(total_days)`.
    #[must_use]
    pub const fn fractional_day(&self) -> f64 {
        self.fractional_day
    }

    /// True when the last interval is a partial day worth weighting separately.
    #[must_use]
    pub fn has_fractional_day(&self) -> bool {
        self.fractional_day > FRACTIONAL_DAY_TOLERANCE
    }

    /// Time-weighted average of a per-interval score series.
    ///
    /// The series holds one entry per interval in which the participant had a
    /// belief, so it may be shorter than the schedule. Its last entry always
    /// belongs to the last interval, which is the one weighted by the
    /// fractional day. The denominator is the question's whole lifetime, so
    /// late forecasters are not credited for days they skipped.
    #[must_use]
    pub fn average_for_score_resolution(&self, series: &[f64]) -> f64 {
        let Some((last, head)) = series.split_last() else {
            return 0.0;
        };

        if self.total_full_days == 0 {
            return series.iter().sum::<f64>() / 1.0;
        }

        let full_days = self.total_full_days as f64;
        if self.has_fractional_day() {
            let head_sum: f64 = head.iter().sum();
            (head_sum + last * self.fractional_day) / (full_days + self.fractional_day)
        } else {
            series.iter().sum::<f64>() / full_days
        }
    }
}
