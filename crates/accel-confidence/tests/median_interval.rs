//! Behavioural tests for the bootstrap median interval

use accel_confidence::{
    bootstrap_median_ci, bootstrap_median_ci_seeded, Bootstrap, ConfidenceInterval,
};
use accel_core::{Error, MISSING};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn seeded(n_resamples: usize, level: f64, seed: u64) -> Bootstrap {
    Bootstrap::new()
        .with_resamples(n_resamples)
        .with_confidence_level(level)
        .with_seed(seed)
}

#[test]
fn test_constant_sample_gives_degenerate_interval() {
    let sample = [3.25; 17];
    for (n_resamples, level) in [(1, 0.5), (10, 0.8), (1000, 0.95), (333, 0.999)] {
        let ci = seeded(n_resamples, level, 11).median_interval(&sample).unwrap();
        assert_eq!((ci.lower, ci.upper), (3.25, 3.25));
        assert_eq!(ci.estimate, 3.25);
    }
}

#[test]
fn test_constant_sample_with_missing_values() {
    let sample = [MISSING, 2.0, 2.0, MISSING, 2.0];
    let ci = bootstrap_median_ci(&sample, 500).unwrap();
    assert_eq!(ci.bounds(), (2.0, 2.0));
}

#[test]
fn test_seeded_runs_are_identical() {
    let sample = [5.1, 2.3, 8.8, 1.0, 4.4, 9.9, 3.3, 7.2];
    let a = bootstrap_median_ci_seeded(&sample, 2000, 0.9, 1234).unwrap();
    let b = bootstrap_median_ci_seeded(&sample, 2000, 0.9, 1234).unwrap();
    assert_eq!(a, b);

    let dist_a = seeded(500, 0.9, 99).median_distribution(&sample).unwrap();
    let dist_b = seeded(500, 0.9, 99).median_distribution(&sample).unwrap();
    assert_eq!(dist_a.medians, dist_b.medians);
}

#[test]
fn test_caller_supplied_generator_is_reproducible() {
    let sample = [0.5, 1.5, 2.5, 3.5, 4.5, 5.5];
    let bootstrap = Bootstrap::new().with_resamples(800);

    let mut rng_a = ChaCha8Rng::seed_from_u64(2024);
    let mut rng_b = ChaCha8Rng::seed_from_u64(2024);
    let a = bootstrap.median_interval_with_rng(&sample, &mut rng_a).unwrap();
    let b = bootstrap.median_interval_with_rng(&sample, &mut rng_b).unwrap();
    assert_eq!(a, b);
    assert!(a.lower <= a.upper);
}

#[test]
fn test_interval_widens_with_confidence_level() {
    let sample: Vec<f64> = (0..40).map(|i| ((i * 37) % 23) as f64 + 0.5).collect();
    let levels = [0.5, 0.6, 0.7, 0.8, 0.9, 0.95, 0.99];

    let intervals: Vec<ConfidenceInterval> = levels
        .iter()
        .map(|&level| seeded(1000, level, 77).median_interval(&sample).unwrap())
        .collect();

    for pair in intervals.windows(2) {
        assert!(pair[1].lower <= pair[0].lower, "{} vs {}", pair[0], pair[1]);
        assert!(pair[1].upper >= pair[0].upper, "{} vs {}", pair[0], pair[1]);
    }
}

#[test]
fn test_interval_covers_true_median_across_seeds() {
    let sample = [1.0, 2.0, 3.0, 4.0, 5.0];
    let covered = (0..50u64)
        .filter(|&seed| {
            bootstrap_median_ci_seeded(&sample, 1000, 0.95, seed)
                .unwrap()
                .contains(3.0)
        })
        .count();
    assert!(covered >= 45, "only {covered}/50 intervals contained the median");
}

#[test]
fn test_missing_values_do_not_leak_into_bounds() {
    let sample = [MISSING, 10.0, 12.0, MISSING, 11.0, 13.0, MISSING, 9.0];
    let result = seeded(1000, 0.95, 3).median_distribution(&sample).unwrap();

    assert!(result.medians.iter().all(|m| m.is_finite()));
    assert!(result.interval.lower >= 9.0);
    assert!(result.interval.upper <= 13.0);
    assert_eq!(result.interval.estimate, 11.0);
}

#[test]
fn test_option_encoded_sample() {
    let sample = [Some(1.0), None, Some(2.0), Some(3.0)];
    let ci = seeded(300, 0.95, 8).median_interval(&sample).unwrap();
    assert!(ci.lower >= 1.0 && ci.upper <= 3.0);
}

#[test]
fn test_single_resample_is_clamped() {
    let sample = [1.0, 2.0, 3.0, 4.0];
    let result = seeded(1, 0.95, 5).median_distribution(&sample).unwrap();
    assert_eq!((result.lower_index, result.upper_index), (0, 0));
    assert_eq!(result.interval.lower, result.interval.upper);
}

#[test]
fn test_invalid_input_is_reported() {
    assert!(matches!(
        bootstrap_median_ci::<f64>(&[], 100),
        Err(Error::InvalidInput(_))
    ));
    assert!(matches!(
        bootstrap_median_ci(&[1.0, 2.0], 0),
        Err(Error::InvalidInput(_))
    ));
    assert!(matches!(
        bootstrap_median_ci_seeded(&[1.0, 2.0], 100, 1.0, 1),
        Err(Error::InvalidInput(_))
    ));
    assert!(matches!(
        bootstrap_median_ci_seeded(&[1.0, 2.0], 100, 0.0, 1),
        Err(Error::InvalidInput(_))
    ));
    assert!(matches!(
        bootstrap_median_ci(&[MISSING; 4], 100),
        Err(Error::InvalidInput(_))
    ));
}

#[test]
fn test_opposite_infinities_are_rejected() {
    let sample = [f64::INFINITY, f64::NEG_INFINITY];
    assert!(matches!(
        seeded(200, 0.95, 1).median_distribution(&sample),
        Err(Error::InvalidInput(_))
    ));
    assert!(matches!(
        bootstrap_median_ci(&[1.0, MISSING, f64::INFINITY], 100),
        Err(Error::InvalidInput(_))
    ));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_lower_never_exceeds_upper(
        sample in prop::collection::vec(-1e4f64..1e4, 1..60),
        n_resamples in 1usize..300,
        level in 0.01f64..0.999,
        seed in any::<u64>(),
    ) {
        let ci = seeded(n_resamples, level, seed).median_interval(&sample).unwrap();
        prop_assert!(ci.lower <= ci.upper);

        let lo = sample.iter().copied().fold(f64::INFINITY, f64::min);
        let hi = sample.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        prop_assert!(lo <= ci.lower && ci.upper <= hi);
    }
}
