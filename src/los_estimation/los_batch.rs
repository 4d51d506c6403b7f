//! # Batch line-of-sight estimation
//!
//! The [`LosEstimation`] trait drives the full pipeline once per target in an
//! unknown-binary catalog: region bounds, secondary selection, Monte Carlo
//! sampling. Targets are independent of each other; the only state shared
//! across iterations is the caller's generator stream, so the output is
//! reproducible end to end under a fixed seed.
//!
//! Example
//! -----------------
//! ```rust
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use sightline::catalog::SkyCatalog;
//! use sightline::los_estimation::los_batch::LosEstimation;
//! use sightline::los_estimation::LosParams;
//!
//! let unknown_binaries = SkyCatalog::from_degrees(&[10.0], &[41.0]);
//! let secondaries = SkyCatalog::from_degrees(&[10.01, 10.02], &[41.01, 40.99]);
//!
//! let params = LosParams::builder().n_trials(1_000).build().unwrap();
//! let mut rng = StdRng::seed_from_u64(42);
//!
//! let results = unknown_binaries.estimate_all_los(&secondaries, &mut rng, &params);
//! assert_eq!(results.len(), 1);
//! assert!((0.0..=1.0).contains(&results[0]));
//! ```

use rand::Rng;

use crate::catalog::SkyCatalog;
use crate::constants::LosResults;
use crate::los_estimation::monte_carlo::estimate_los_fraction;
use crate::los_estimation::LosParams;
use crate::region::RegionBounds;

#[cfg(feature = "progress")]
use indicatif::{ProgressBar, ProgressStyle};
#[cfg(feature = "progress")]
use std::time::Duration;

/// Batch estimation over a catalog of candidate binaries.
pub trait LosEstimation {
    /// Estimate the chance-alignment probability of every target, in catalog
    /// order.
    ///
    /// Arguments
    /// -----------------
    /// * `secondaries`: the full field-star catalog; each target sees only
    ///   the subset inside its own region
    /// * `rng`: generator shared across the batch; seed it for reproducible
    ///   results
    /// * `params`: validated simulation parameters
    ///
    /// Return
    /// ----------
    /// * One probability in `[0.0, 1.0]` per target, same length and order as
    ///   the target catalog. Targets with no secondaries in range contribute
    ///   0.0.
    fn estimate_all_los(
        &self,
        secondaries: &SkyCatalog,
        rng: &mut impl Rng,
        params: &LosParams,
    ) -> LosResults;
}

impl LosEstimation for SkyCatalog {
    #[cfg(feature = "progress")]
    fn estimate_all_los(
        &self,
        secondaries: &SkyCatalog,
        rng: &mut impl Rng,
        params: &LosParams,
    ) -> LosResults {
        let pb = ProgressBar::new(self.len().max(1) as u64);
        pb.set_style(
            ProgressStyle::with_template(
                "{bar:40.cyan/blue} {pos}/{len} ({percent:>3}%) | {per_sec} | ETA {eta_precise}",
            )
            .expect("indicatif template"),
        );
        pb.enable_steady_tick(Duration::from_millis(200));

        let mut results = Vec::with_capacity(self.len());
        for target in self.iter() {
            let bounds = RegionBounds::around(target.ra, target.dec, params.survey_radius);
            let local_secondaries = secondaries.select_within(&bounds);
            results.push(estimate_los_fraction(
                &bounds,
                &local_secondaries,
                params.n_trials,
                params.dist_los,
                rng,
            ));
            pb.inc(1);
        }

        pb.finish_and_clear();
        results
    }

    #[cfg(not(feature = "progress"))]
    fn estimate_all_los(
        &self,
        secondaries: &SkyCatalog,
        rng: &mut impl Rng,
        params: &LosParams,
    ) -> LosResults {
        let mut results = Vec::with_capacity(self.len());

        for target in self.iter() {
            let bounds = RegionBounds::around(target.ra, target.dec, params.survey_radius);
            let local_secondaries = secondaries.select_within(&bounds);
            results.push(estimate_los_fraction(
                &bounds,
                &local_secondaries,
                params.n_trials,
                params.dist_los,
                rng,
            ));
        }

        results
    }
}

#[cfg(test)]
mod los_batch_test {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_one_result_per_target_in_order() {
        // First target sits on a secondary, second target has none in range:
        // with a generous threshold the pair of outcomes is (1.0, 0.0).
        let unknown_binaries = SkyCatalog::from_degrees(&[10.0, 20.0], &[41.0, -10.0]);
        let secondaries = SkyCatalog::from_degrees(&[10.0], &[41.0]);

        let params = LosParams::builder()
            .n_trials(500)
            .dist_los(9999999.0)
            .build()
            .unwrap();
        let mut rng = StdRng::seed_from_u64(3);

        let results = unknown_binaries.estimate_all_los(&secondaries, &mut rng, &params);
        assert_eq!(results, vec![1.0, 0.0]);
    }

    #[test]
    fn test_empty_target_catalog() {
        let unknown_binaries = SkyCatalog::new();
        let secondaries = SkyCatalog::from_degrees(&[10.0], &[41.0]);
        let mut rng = StdRng::seed_from_u64(3);

        let results =
            unknown_binaries.estimate_all_los(&secondaries, &mut rng, &LosParams::default());
        assert!(results.is_empty());
    }

    #[test]
    fn test_secondaries_outside_region_never_hit() {
        // All secondaries are well beyond the 5 arcminute region of both
        // targets, so the local selection is empty and the result is exactly
        // zero regardless of trials or seed.
        let unknown_binaries = SkyCatalog::from_degrees(&[10.0, 20.0], &[41.0, -10.0]);
        let secondaries = SkyCatalog::from_degrees(&[100.0, 150.0, 200.0], &[0.0, 30.0, -45.0]);

        let params = LosParams::builder().n_trials(200).build().unwrap();
        let mut rng = StdRng::seed_from_u64(11);

        let results = unknown_binaries.estimate_all_los(&secondaries, &mut rng, &params);
        assert_eq!(results, vec![0.0, 0.0]);
    }
}
