//! # Sky-plane region bounds
//!
//! Rectangular RA/Dec bounding boxes around a target position, used both to
//! restrict the secondary catalog to the target's neighbourhood and as the
//! sampling domain for the Monte Carlo trials.
//!
//! Units & conventions
//! -----------------
//! * All box edges are in **decimal degrees**.
//! * The survey radius is given in **arcminutes** and converted once at
//!   construction.
//! * The RA half-width carries a `cos(dec)` scaling of the radius, since the
//!   angular size of one RA degree shrinks toward the celestial poles.

use crate::constants::{ArcMin, Degree, ARCMIN_PER_DEG, RADEG};

/// Rectangular RA/Dec region around a target position.
///
/// Built only by [`RegionBounds::around`]; by construction `min_ra <= max_ra`
/// and `min_dec <= max_dec`, with both strict for any positive radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionBounds {
    pub min_ra: Degree,
    pub max_ra: Degree,
    pub min_dec: Degree,
    pub max_dec: Degree,
}

impl RegionBounds {
    /// Compute the bounding box around a target at a given angular radius.
    ///
    /// Arguments
    /// -----------------
    /// * `ra`: right ascension of the target in decimal degrees
    /// * `dec`: declination of the target in decimal degrees
    /// * `radius`: half-size of the region in arcminutes; must be positive for
    ///   a non-degenerate box
    ///
    /// Return
    /// ----------
    /// * A [`RegionBounds`] whose RA edges are widened by the radius scaled by
    ///   `cos(dec)` and whose Dec edges span `dec ± radius`.
    ///
    /// See also
    /// ------------
    /// * [`SkyCatalog::select_within`](crate::catalog::SkyCatalog::select_within) – restricts a catalog to these bounds.
    pub fn around(ra: Degree, dec: Degree, radius: ArcMin) -> Self {
        let radius_deg = radius / ARCMIN_PER_DEG;

        let half_ra = radius_deg * (dec * RADEG).cos();

        // Which candidate is the lower edge is not known up front once the
        // declination goes negative: sort explicitly instead of assuming.
        let dec_a = dec - radius_deg;
        let dec_b = dec + radius_deg;
        let (min_dec, max_dec) = if dec_a < dec_b {
            (dec_a, dec_b)
        } else {
            (dec_b, dec_a)
        };

        RegionBounds {
            min_ra: ra - half_ra,
            max_ra: ra + half_ra,
            min_dec,
            max_dec,
        }
    }
}

#[cfg(test)]
mod region_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_bounds_never_inverted() {
        let cases = [
            (10.0, 41.0, 5.0),
            (0.0, 0.0, 5.0),
            (20.0, -10.0, 5.0),
            (359.9, -89.0, 2.5),
            (180.0, 0.02, 5.0),
        ];
        for (ra, dec, radius) in cases {
            let bounds = RegionBounds::around(ra, dec, radius);
            assert!(
                bounds.min_ra < bounds.max_ra,
                "RA inverted for ({ra}, {dec}, {radius})"
            );
            assert!(
                bounds.min_dec < bounds.max_dec,
                "Dec inverted for ({ra}, {dec}, {radius})"
            );
        }
    }

    #[test]
    fn test_ra_width_scales_with_cos_dec() {
        // At dec = 60 deg, cos(dec) = 0.5: the RA half-width is half the
        // radius expressed in degrees.
        let bounds = RegionBounds::around(100.0, 60.0, 6.0);
        let radius_deg = 6.0 / 60.0;
        assert_relative_eq!(bounds.max_ra - 100.0, radius_deg * 0.5, epsilon = 1e-12);
        assert_relative_eq!(100.0 - bounds.min_ra, radius_deg * 0.5, epsilon = 1e-12);
        // Dec edges are unscaled.
        assert_relative_eq!(bounds.max_dec - bounds.min_dec, 2.0 * radius_deg, epsilon = 1e-12);
    }

    #[test]
    fn test_bounds_span_zero_declination() {
        let bounds = RegionBounds::around(50.0, 0.02, 5.0);
        assert!(bounds.min_dec < 0.0);
        assert!(bounds.max_dec > 0.0);
        assert_relative_eq!(bounds.min_dec, 0.02 - 5.0 / 60.0, epsilon = 1e-12);
        assert_relative_eq!(bounds.max_dec, 0.02 + 5.0 / 60.0, epsilon = 1e-12);
    }

    #[test]
    fn test_bounds_negative_declination() {
        let bounds = RegionBounds::around(20.0, -10.0, 5.0);
        assert_relative_eq!(bounds.min_dec, -10.0 - 5.0 / 60.0, epsilon = 1e-12);
        assert_relative_eq!(bounds.max_dec, -10.0 + 5.0 / 60.0, epsilon = 1e-12);
    }
}
