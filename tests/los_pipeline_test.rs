use camino::Utf8PathBuf;
use rand::rngs::StdRng;
use rand::SeedableRng;

use sightline::{write_los_results, LosEstimation, LosParams, SkyCatalog};

#[test]
fn test_coincident_secondary_saturates_probability() {
    // A secondary sitting exactly on the target, with an effectively infinite
    // companion threshold: every trial is a hit.
    let unknown_binaries = SkyCatalog::from_degrees(&[10.0], &[41.0]);
    let secondaries = SkyCatalog::from_degrees(&[10.0], &[41.0]);

    let params = LosParams::builder()
        .n_trials(10_000)
        .dist_los(9999999.0)
        .survey_radius(5.0)
        .build()
        .unwrap();
    let mut rng = StdRng::seed_from_u64(7);

    let results = unknown_binaries.estimate_all_los(&secondaries, &mut rng, &params);
    assert_eq!(results, vec![1.0]);
}

#[test]
fn test_no_secondaries_is_exactly_zero() {
    let unknown_binaries = SkyCatalog::from_degrees(&[10.0], &[41.0]);
    let secondaries = SkyCatalog::new();

    let params = LosParams::builder()
        .n_trials(10_000)
        .dist_los(9999999.0)
        .survey_radius(5.0)
        .build()
        .unwrap();

    // Deterministically zero for any seed and trial count.
    for seed in [0_u64, 7, 123456] {
        let mut rng = StdRng::seed_from_u64(seed);
        let results = unknown_binaries.estimate_all_los(&secondaries, &mut rng, &params);
        assert_eq!(results, vec![0.0]);
    }
}

#[test]
fn test_distant_secondaries_give_zero_for_every_target() {
    let unknown_binaries = SkyCatalog::from_degrees(&[10.0, 20.0], &[41.0, -10.0]);
    // All field stars sit far outside both 5 arcminute regions.
    let secondaries = SkyCatalog::from_degrees(&[120.0, 130.0, 140.0], &[5.0, -60.0, 75.0]);

    let mut rng = StdRng::seed_from_u64(21);
    let results = unknown_binaries.estimate_all_los(&secondaries, &mut rng, &LosParams::default());
    assert_eq!(results, vec![0.0, 0.0]);
}

#[test]
fn test_identical_seeds_give_bit_identical_batches() {
    let unknown_binaries = SkyCatalog::from_degrees(&[10.0, 10.05, 20.0], &[41.0, 41.02, -10.0]);
    let secondaries = SkyCatalog::from_degrees(
        &[10.01, 10.02, 10.06, 19.99, 20.01],
        &[41.01, 40.99, 41.03, -10.01, -9.98],
    );
    let params = LosParams::builder()
        .n_trials(2_000)
        .dist_los(60.0)
        .build()
        .unwrap();

    let mut rng_a = StdRng::seed_from_u64(2024);
    let mut rng_b = StdRng::seed_from_u64(2024);
    let results_a = unknown_binaries.estimate_all_los(&secondaries, &mut rng_a, &params);
    let results_b = unknown_binaries.estimate_all_los(&secondaries, &mut rng_b, &params);

    assert_eq!(results_a.len(), results_b.len());
    for (a, b) in results_a.iter().zip(&results_b) {
        assert_eq!(a.to_bits(), b.to_bits());
    }
}

#[test]
fn test_csv_tables_through_the_full_pipeline() {
    let dir = tempfile::tempdir().unwrap();
    let binaries_path = Utf8PathBuf::from_path_buf(dir.path().join("binaries.csv")).unwrap();
    let secondaries_path = Utf8PathBuf::from_path_buf(dir.path().join("secondaries.csv")).unwrap();
    let results_path = Utf8PathBuf::from_path_buf(dir.path().join("los_results.csv")).unwrap();

    std::fs::write(&binaries_path, "10.0,41.0\n20.0,-10.0\n").unwrap();
    std::fs::write(&secondaries_path, "10.0,41.0\n120.0,5.0\n").unwrap();

    let unknown_binaries = SkyCatalog::from_csv(&binaries_path).unwrap();
    let secondaries = SkyCatalog::from_csv(&secondaries_path).unwrap();
    assert_eq!(unknown_binaries.len(), 2);
    assert_eq!(secondaries.len(), 2);

    let params = LosParams::builder()
        .n_trials(1_000)
        .dist_los(9999999.0)
        .survey_radius(5.0)
        .build()
        .unwrap();
    let mut rng = StdRng::seed_from_u64(5);

    let results = unknown_binaries.estimate_all_los(&secondaries, &mut rng, &params);
    // First target coincides with a secondary, second has none in range.
    assert_eq!(results, vec![1.0, 0.0]);

    write_los_results(&results_path, &results).unwrap();
    let contents = std::fs::read_to_string(&results_path).unwrap();
    let written: Vec<f64> = contents
        .lines()
        .map(|line| line.parse().unwrap())
        .collect();
    assert_eq!(written, results);
}
