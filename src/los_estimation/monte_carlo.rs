//! # Monte Carlo chance-alignment sampling
//!
//! The statistical core of the crate: estimate how often a star placed
//! uniformly at random in a target's local sky region would land within the
//! companion threshold of a real secondary. That hit fraction is the
//! empirical probability that an apparent pair of this local density is a
//! chance line-of-sight alignment rather than a physical binary.
//!
//! Randomness
//! -----------------
//! The generator is an injected [`rand::Rng`], never owned here. Runs are
//! reproducible bit-for-bit when the caller seeds it (e.g.
//! `StdRng::seed_from_u64`); uniformity is required, cryptographic strength
//! is not. Callers parallelizing over targets must give each worker its own
//! generator stream.

use rand::Rng;

use crate::catalog::SkyCatalog;
use crate::constants::{ArcSec, ARCSEC_PER_DEG};
use crate::flat_sky::nearest_separation;
use crate::region::RegionBounds;

/// Estimate the chance-alignment fraction for one target region.
///
/// Runs exactly `n_trials` placements drawn uniformly in `bounds` (RA and Dec
/// independently) and counts a hit whenever the nearest entry of
/// `secondaries` lies strictly closer than `dist_los` arcseconds under the
/// flat-sky metric.
///
/// Arguments
/// -----------------
/// * `bounds`: sampling region, normally the box used to select `secondaries`
/// * `secondaries`: field stars local to the region; an empty catalog is a
///   valid input for which no trial can hit and the result is 0.0
/// * `n_trials`: number of placements; must be >= 1, which
///   [`LosParamsBuilder::build`](crate::los_estimation::LosParamsBuilder::build)
///   enforces for parameters built through it (`n_trials = 0` divides zero by
///   zero and yields NaN)
/// * `dist_los`: companion threshold in arcseconds
/// * `rng`: source of uniform randomness, seeded by the caller for
///   reproducible runs
///
/// Return
/// ----------
/// * The hit fraction in `[0.0, 1.0]`.
///
/// See also
/// ------------
/// * [`nearest_separation`] – per-trial distance to the closest secondary.
/// * [`LosEstimation::estimate_all_los`](crate::los_estimation::los_batch::LosEstimation::estimate_all_los) – drives this once per target.
pub fn estimate_los_fraction(
    bounds: &RegionBounds,
    secondaries: &SkyCatalog,
    n_trials: usize,
    dist_los: ArcSec,
    rng: &mut impl Rng,
) -> f64 {
    let mut hits = 0_usize;

    for _ in 0..n_trials {
        let ra_rand = rng.random_range(bounds.min_ra..=bounds.max_ra);
        let dec_rand = rng.random_range(bounds.min_dec..=bounds.max_dec);

        // No secondaries in range means no nearest neighbour: the trial
        // cannot hit.
        if let Some(nearest) = nearest_separation(ra_rand, dec_rand, secondaries) {
            if nearest * ARCSEC_PER_DEG < dist_los {
                hits += 1;
            }
        }
    }

    hits as f64 / n_trials as f64
}
