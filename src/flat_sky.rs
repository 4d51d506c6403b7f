//! # Flat-sky angular separations
//!
//! Separations between a query position and the entries of a [`SkyCatalog`],
//! computed with a planar Euclidean metric:
//!
//! ```text
//! d_i = sqrt(((ra - ra_i) * cos(dec))^2 + (dec - dec_i)^2)
//! ```
//!
//! The cosine correction uses the **query point's** declination for every
//! catalog entry. Together with the planar metric itself, this is a deliberate
//! small-angle approximation: all points compared here lie within a few
//! arcminutes of each other, where the error against great-circle separations
//! is negligible. Callers needing arcseconds multiply by
//! [`ARCSEC_PER_DEG`](crate::constants::ARCSEC_PER_DEG).

use itertools::izip;
use ordered_float::OrderedFloat;

use crate::catalog::SkyCatalog;
use crate::constants::{Degree, RADEG};

/// Separation between `(ra, dec)` and every entry of `targets`, in decimal
/// degrees, in catalog order. An empty catalog yields an empty vector.
pub fn flat_sky_distances(ra: Degree, dec: Degree, targets: &SkyCatalog) -> Vec<Degree> {
    let cos_dec = (dec * RADEG).cos();
    izip!(&targets.ra, &targets.dec)
        .map(|(&ra_i, &dec_i)| {
            let d_ra = (ra - ra_i) * cos_dec;
            let d_dec = dec - dec_i;
            (d_ra * d_ra + d_dec * d_dec).sqrt()
        })
        .collect()
}

/// Smallest separation between `(ra, dec)` and the entries of `targets`, in
/// decimal degrees, or `None` when the catalog is empty.
///
/// Same per-entry formula as [`flat_sky_distances`], without materializing the
/// full distance vector.
pub fn nearest_separation(ra: Degree, dec: Degree, targets: &SkyCatalog) -> Option<Degree> {
    let cos_dec = (dec * RADEG).cos();
    izip!(&targets.ra, &targets.dec)
        .map(|(&ra_i, &dec_i)| {
            let d_ra = (ra - ra_i) * cos_dec;
            let d_dec = dec - dec_i;
            OrderedFloat((d_ra * d_ra + d_dec * d_dec).sqrt())
        })
        .min()
        .map(OrderedFloat::into_inner)
}
