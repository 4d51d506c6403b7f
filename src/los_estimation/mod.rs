//! # Line-of-sight estimation parameters
//!
//! This module defines the [`LosParams`] configuration struct and its
//! builder, which control the Monte Carlo estimation of chance-alignment
//! probabilities.
//!
//! ## Purpose
//!
//! [`LosParams`] centralizes the three knobs of the pipeline:
//!
//! - `n_trials` – how many random placements are drawn per target,
//! - `dist_los` – the separation (arcseconds) below which a placement counts
//!   as a line-of-sight companion,
//! - `survey_radius` – the half-size (arcminutes) of the local region used
//!   both to select nearby secondaries and as the sampling domain.
//!
//! ## Pipeline overview
//!
//! For each target in the unknown-binary catalog:
//!
//! 1. A rectangular region of `survey_radius` around the target is computed
//!    ([`RegionBounds::around`](crate::region::RegionBounds::around)).
//! 2. The secondary catalog is restricted to that region
//!    ([`SkyCatalog::select_within`](crate::catalog::SkyCatalog::select_within)).
//! 3. `n_trials` uniform placements inside the region are tested against the
//!    local secondaries
//!    ([`estimate_los_fraction`](crate::los_estimation::monte_carlo::estimate_los_fraction));
//!    the hit fraction is the target's estimate.
//!
//! ## Example
//!
//! ```rust
//! use sightline::los_estimation::LosParams;
//!
//! let params = LosParams::builder()
//!     .n_trials(20_000)
//!     .dist_los(0.5)
//!     .survey_radius(4.0)
//!     .build()
//!     .unwrap();
//! assert_eq!(params.n_trials, 20_000);
//! ```
//!
//! ## See also
//!
//! * [`LosEstimation::estimate_all_los`](crate::los_estimation::los_batch::LosEstimation::estimate_all_los) – batch entry point consuming these parameters.
use std::cmp::Ordering::Greater;
use std::fmt;

use crate::constants::{ArcMin, ArcSec};
use crate::sightline_errors::SightlineError;

pub mod los_batch;
pub mod monte_carlo;

/// Configuration parameters for the Monte Carlo line-of-sight estimation.
///
/// Fields
/// -----------------
/// * `n_trials` – number of random placements per target; at least 1.
/// * `dist_los` – separation threshold in arcseconds below which a placement
///   counts as a chance companion; strictly positive and finite.
/// * `survey_radius` – half-size of the local sky region in arcminutes, used
///   for both secondary selection and placement sampling; strictly positive
///   and finite.
///
/// Defaults
/// -----------------
/// The [`Default`] implementation carries the reference survey configuration:
/// 10 000 trials, a 0.75 arcsecond companion threshold, and a 5 arcminute
/// region radius.
///
/// Construct custom values through [`LosParams::builder`], which validates
/// the fields and fails fast on a misconfiguration instead of letting a bad
/// trial count or threshold propagate into the sampling loop.
#[derive(Debug, Clone, PartialEq)]
pub struct LosParams {
    /// Number of Monte Carlo placements per target.
    pub n_trials: usize,
    /// Companion separation threshold in arcseconds.
    pub dist_los: ArcSec,
    /// Local region half-size in arcminutes.
    pub survey_radius: ArcMin,
}

impl LosParams {
    /// Construct a new [`LosParams`] with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new [`LosParamsBuilder`] to configure custom parameters.
    pub fn builder() -> LosParamsBuilder {
        LosParamsBuilder::new()
    }
}

impl Default for LosParams {
    fn default() -> Self {
        LosParams {
            n_trials: 10_000,
            dist_los: 0.75,
            survey_radius: 5.0,
        }
    }
}

impl fmt::Display for LosParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LosParams(n_trials={}, dist_los={:.3} arcsec, survey_radius={:.3} arcmin)",
            self.n_trials, self.dist_los, self.survey_radius
        )
    }
}

/// Builder for [`LosParams`], with validation.
#[derive(Debug, Clone)]
pub struct LosParamsBuilder {
    params: LosParams,
}

impl Default for LosParamsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LosParamsBuilder {
    /// Create a new builder initialized with default values.
    pub fn new() -> Self {
        Self {
            params: LosParams::default(),
        }
    }

    pub fn n_trials(mut self, v: usize) -> Self {
        self.params.n_trials = v;
        self
    }
    pub fn dist_los(mut self, v: ArcSec) -> Self {
        self.params.dist_los = v;
        self
    }
    pub fn survey_radius(mut self, v: ArcMin) -> Self {
        self.params.survey_radius = v;
        self
    }

    /// Return true iff x is finite, comparable, and strictly positive.
    #[inline]
    fn finite_gt0(x: f64) -> bool {
        x.is_finite() && x.partial_cmp(&0.0) == Some(Greater)
    }

    /// Finalize the builder and produce a [`LosParams`] instance.
    ///
    /// Validation rules
    /// -----------------
    /// * `n_trials >= 1` – the hit fraction divides by the trial count.
    /// * `dist_los > 0` and finite.
    /// * `survey_radius > 0` and finite – a non-positive radius would give a
    ///   degenerate sampling region.
    ///
    /// Returns
    /// -----------------
    /// * `Ok(LosParams)` if all values are valid.
    /// * `Err(SightlineError::InvalidSimulationParameter)` naming the first
    ///   violated rule otherwise.
    pub fn build(self) -> Result<LosParams, SightlineError> {
        let p = &self.params;

        if p.n_trials < 1 {
            return Err(SightlineError::InvalidSimulationParameter(
                "n_trials must be >= 1".into(),
            ));
        }
        if !Self::finite_gt0(p.dist_los) {
            return Err(SightlineError::InvalidSimulationParameter(
                "dist_los must be finite and > 0".into(),
            ));
        }
        if !Self::finite_gt0(p.survey_radius) {
            return Err(SightlineError::InvalidSimulationParameter(
                "survey_radius must be finite and > 0".into(),
            ));
        }

        Ok(self.params)
    }
}
