use brierly::domain::scoring::{absolute_score, median};
use brierly::domain::{score, Forecast, Resolution, ScoreBreakdown, ScoringError};
use brierly::testkit::domain::{assert_near, forecast, participant, question};

const TOLERANCE: f64 = 1e-4;

fn three_forecasters() -> Vec<Forecast> {
    vec![
        forecast("A", 0.9, 0.0),
        forecast("A", 0.95, 3.0),
        forecast("B", 0.25, 0.0),
        forecast("B", 0.2, 2.0),
        forecast("C", 0.99, 5.0),
    ]
}

#[test]
fn three_forecasters_match_reference_scores() {
    let result = score(&question(7.0, Resolution::Yes), &three_forecasters()).unwrap();

    let relative = |id: &str| result.get(&participant(id)).unwrap().relative_score;
    assert_near(relative("A"), -0.43, TOLERANCE);
    assert_near(relative("B"), 0.7943, TOLERANCE);
    assert_near(relative("C"), -0.00137, TOLERANCE);

    let ranked: Vec<&str> = result.iter().map(|s| s.participant_id.as_str()).collect();
    assert_eq!(ranked, vec!["A", "C", "B"]);
}

#[test]
fn late_forecaster_average_spans_whole_question() {
    let result = score(&question(7.0, Resolution::Yes), &three_forecasters()).unwrap();
    let c = result.get(&participant("C")).unwrap();

    // Two days at 0.99, divided over all seven.
    assert_near(c.absolute_score, 2.0 * 0.0002 / 7.0, 1e-12);
}

#[test]
fn single_forecaster_relative_equals_absolute() {
    let forecasts = vec![forecast("A", 0.9, 0.0), forecast("A", 0.95, 3.0)];
    let result = score(&question(7.0, Resolution::Yes), &forecasts).unwrap();

    let a = result.get(&participant("A")).unwrap();
    assert_near(a.relative_score, 0.0114, TOLERANCE);
    assert_eq!(a.relative_score, a.absolute_score);
    assert_eq!(a.rank, 1);
}

#[test]
fn fractional_day_question() {
    let result = score(
        &question(0.8, Resolution::Yes),
        &[forecast("A", 0.9, 0.0)],
    )
    .unwrap();

    assert_near(
        result.get(&participant("A")).unwrap().relative_score,
        0.02,
        TOLERANCE,
    );
}

#[test]
fn fractional_tail_is_weighted_by_its_length() {
    // 2.5 days; B only forecasts for the final half day.
    let forecasts = vec![forecast("A", 0.5, 0.0), forecast("B", 1.0, 2.0)];
    let result = score(&question(2.5, Resolution::Yes), &forecasts).unwrap();

    let a = result.get(&participant("A")).unwrap();
    let b = result.get(&participant("B")).unwrap();
    assert_near(a.absolute_score, 0.5, 1e-12);
    assert_near(b.absolute_score, 0.0, 1e-12);
    // Last day: median 0.25, B relative -0.25 weighted by 0.5 over 2.5 days.
    assert_near(b.relative_score, -0.25 * 0.5 / 2.5, 1e-12);
}

#[test]
fn late_confident_forecast_is_not_diluted_by_the_unheld_hours() {
    // One-day NO question: an honest 0.01 from the start against a wrong 0.99
    // submitted an hour before resolution.
    let forecasts = vec![
        forecast("honest", 0.01, 0.0),
        forecast("late_wrong", 0.99, 23.0 / 24.0),
    ];
    let result = score(&question(1.0, Resolution::No), &forecasts).unwrap();

    let honest = result.get(&participant("honest")).unwrap();
    let late = result.get(&participant("late_wrong")).unwrap();
    assert_near(honest.absolute_score, absolute_score(0.01, 0.0), 1e-9);
    assert_near(late.absolute_score, absolute_score(0.99, 0.0), 1e-9);
    assert_eq!(honest.rank, 1);
    assert!(late.relative_score > 0.9, "late forecaster scored {}", late.relative_score);
}

#[test]
fn empty_forecasts_are_rejected() {
    let err = score(&question(7.0, Resolution::Yes), &[]).unwrap_err();
    assert_eq!(err, ScoringError::NoForecasts);
}

#[test]
fn ambiguous_resolution_is_rejected() {
    let err = score(
        &question(7.0, Resolution::Ambiguous),
        &[forecast("A", 0.5, 0.0)],
    )
    .unwrap_err();
    assert!(matches!(err, ScoringError::NonBinaryResolution { .. }));
}

#[test]
fn scores_and_beliefs_stay_in_range() {
    let forecasts = vec![
        forecast("A", 0.0, 0.1),
        forecast("A", 1.0, 0.7),
        forecast("B", 1.0, 0.0),
        forecast("B", 0.0, 1.3),
        forecast("C", 0.5, 2.9),
        forecast("C", 0.01, 3.05),
    ];

    for resolution in [Resolution::Yes, Resolution::No] {
        let breakdown = ScoreBreakdown::compute(&question(4.2, resolution), &forecasts).unwrap();
        for interval in breakdown.intervals() {
            for abs in interval.absolute().iter().flatten() {
                assert!((0.0..=2.0).contains(abs), "absolute score {abs} out of range");
            }
        }
        for s in &breakdown.into_result() {
            assert!((0.0..=2.0).contains(&s.absolute_score));
        }
    }
}

#[test]
fn ranks_form_a_permutation() {
    let forecasts: Vec<Forecast> = (0..9)
        .map(|i| forecast(&format!("p{i}"), f64::from(i) / 8.0, f64::from(i) * 0.4))
        .collect();
    let result = score(&question(5.0, Resolution::No), &forecasts).unwrap();

    let mut ranks: Vec<usize> = result.iter().map(|s| s.rank).collect();
    ranks.sort_unstable();
    assert_eq!(ranks, (1..=9).collect::<Vec<_>>());
    assert_eq!(result.len(), 9);
}

#[test]
fn relative_scores_are_median_centred_per_interval() {
    let breakdown =
        ScoreBreakdown::compute(&question(7.0, Resolution::Yes), &three_forecasters()).unwrap();

    for interval in breakdown.intervals() {
        if interval.defined_count() < 2 {
            continue;
        }
        let relative: Vec<f64> = interval.relative_scores().collect();
        assert_near(median(&relative), 0.0, 1e-12);
    }
}

#[test]
fn single_day_average_is_not_diluted() {
    let forecasts = vec![forecast("A", 0.7, 0.0), forecast("B", 0.4, 0.0)];
    let question = question(0.5, Resolution::Yes);

    let breakdown = ScoreBreakdown::compute(&question, &forecasts).unwrap();
    assert_eq!(breakdown.intervals().len(), 1);
    let day = breakdown.intervals()[0].clone();

    let result = breakdown.into_result();
    let a = result.get(&participant("A")).unwrap();
    assert_eq!(Some(a.absolute_score), day.absolute()[0]);
    assert_eq!(Some(a.relative_score), day.relative(0));
}

#[test]
fn revision_on_day_boundary_holds_the_whole_day() {
    // B revises exactly at the start of day 1; the held 0.5 gets no weight
    // that day.
    let forecasts = vec![
        forecast("A", 0.6, 0.0),
        forecast("B", 0.5, 0.0),
        forecast("B", 1.0, 1.0),
    ];
    let breakdown = ScoreBreakdown::compute(&question(2.0, Resolution::Yes), &forecasts).unwrap();

    assert_eq!(breakdown.intervals()[1].absolute()[1], Some(0.0));
    let result = breakdown.into_result();
    assert_near(result.get(&participant("A")).unwrap().relative_score, 0.035, 1e-12);
    assert_near(result.get(&participant("B")).unwrap().relative_score, -0.035, 1e-12);
}

#[test]
fn absolute_score_matches_two_term_brier() {
    for p in [0.0, 0.13, 0.5, 0.77, 1.0] {
        let yes = absolute_score(p, 1.0);
        let no = absolute_score(p, 0.0);
        assert_near(yes, 2.0 * (p - 1.0) * (p - 1.0), 1e-15);
        assert_near(no, 2.0 * p * p, 1e-15);
    }
}

#[test]
fn scoring_is_deterministic() {
    let q = question(7.0, Resolution::Yes);
    let first = score(&q, &three_forecasters()).unwrap();
    let second = score(&q, &three_forecasters()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn forecast_order_does_not_change_scores() {
    let q = question(7.0, Resolution::Yes);
    let mut shuffled = three_forecasters();
    shuffled.reverse();

    let forward = score(&q, &three_forecasters()).unwrap();
    let backward = score(&q, &shuffled).unwrap();
    for s in &forward {
        let other = backward.get(&s.participant_id).unwrap();
        assert_eq!(s.relative_score, other.relative_score);
        assert_eq!(s.rank, other.rank);
    }
}
