//! # Sky coordinate catalogs
//!
//! This module provides the [`SkyCatalog`] container used for both input
//! tables of the estimation pipeline: the candidate ("unknown") binaries and
//! the secondary field-star population.
//!
//! Data model
//! -----------------
//! A catalog stores right ascension and declination as two parallel vectors
//! (structure-of-arrays), which keeps the per-trial distance sweep over the
//! secondary population a pair of contiguous scans. [`SkyPoint`] is the
//! row-wise view handed out by iteration and indexing.
//!
//! Invariants
//! -----------------
//! * `ra.len() == dec.len()` at all times.
//! * Coordinates are decimal degrees; catalogs are positions only, with no
//!   identity beyond them.
//! * Storage order is preserved by every operation; for the unknown-binary
//!   catalog it defines the order of the batch results.
//!
//! Ingestion
//! -----------------
//! * [`SkyCatalog::from_degrees`] / [`SkyCatalog::push`] – in-memory construction.
//! * [`SkyCatalog::from_csv`](crate::catalog::csv_reader) – two-column delimited coordinate files.

use itertools::izip;

use crate::constants::Degree;
use crate::region::RegionBounds;

pub mod csv_reader;
pub mod results_file;

/// A single sky position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkyPoint {
    pub ra: Degree,
    pub dec: Degree,
}

/// Ordered set of sky positions stored as parallel RA/Dec vectors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkyCatalog {
    /// Right ascensions in decimal degrees.
    pub ra: Vec<Degree>,
    /// Declinations in decimal degrees, same length as `ra`.
    pub dec: Vec<Degree>,
}

impl SkyCatalog {
    /// Empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty catalog with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        SkyCatalog {
            ra: Vec::with_capacity(capacity),
            dec: Vec::with_capacity(capacity),
        }
    }

    /// Build a catalog from parallel coordinate slices.
    ///
    /// Panics if the slices differ in length.
    pub fn from_degrees(ra: &[Degree], dec: &[Degree]) -> Self {
        assert_eq!(
            ra.len(),
            dec.len(),
            "RA and Dec slices must have the same length"
        );
        SkyCatalog {
            ra: ra.to_vec(),
            dec: dec.to_vec(),
        }
    }

    /// Append one position.
    pub fn push(&mut self, ra: Degree, dec: Degree) {
        self.ra.push(ra);
        self.dec.push(dec);
    }

    /// Number of positions.
    pub fn len(&self) -> usize {
        self.ra.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ra.is_empty()
    }

    /// Position at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<SkyPoint> {
        match (self.ra.get(index), self.dec.get(index)) {
            (Some(&ra), Some(&dec)) => Some(SkyPoint { ra, dec }),
            _ => None,
        }
    }

    /// Iterate positions in storage order.
    pub fn iter(&self) -> impl Iterator<Item = SkyPoint> + '_ {
        izip!(&self.ra, &self.dec).map(|(&ra, &dec)| SkyPoint { ra, dec })
    }

    /// Subset of the catalog lying inside `bounds`, preserving relative order.
    ///
    /// Comparisons are strict on all four sides: a point sitting exactly on a
    /// box edge does not survive. An empty result is a valid outcome.
    ///
    /// See also
    /// ------------
    /// * [`RegionBounds::around`] – builds the box around a target.
    pub fn select_within(&self, bounds: &RegionBounds) -> SkyCatalog {
        let mut selected = SkyCatalog::new();
        for point in self.iter() {
            if point.ra > bounds.min_ra
                && point.ra < bounds.max_ra
                && point.dec > bounds.min_dec
                && point.dec < bounds.max_dec
            {
                selected.push(point.ra, point.dec);
            }
        }
        selected
    }
}

impl FromIterator<SkyPoint> for SkyCatalog {
    fn from_iter<I: IntoIterator<Item = SkyPoint>>(iter: I) -> Self {
        let mut catalog = SkyCatalog::new();
        for point in iter {
            catalog.push(point.ra, point.dec);
        }
        catalog
    }
}
