//! # Delimited coordinate-table ingestion
//!
//! Readers for the two-column `RA,Dec` files consumed by the estimation
//! pipeline: one row per object, decimal degrees, comma-separated, no header.
//!
//! Error semantics
//! -----------------
//! * I/O and malformed-field failures are propagated as
//!   [`SightlineError::IoError`] / [`SightlineError::CsvError`].
//! * Rows that parse but carry a non-finite coordinate (NaN, ±inf) are
//!   rejected with [`SightlineError::InvalidCoordinateRecord`]; the rest of
//!   the pipeline assumes finite positions.

use std::fs::File;
use std::io::Read;

use camino::Utf8Path;
use serde::Deserialize;

use crate::catalog::SkyCatalog;
use crate::constants::Degree;
use crate::sightline_errors::SightlineError;

/// One `RA,Dec` row of a coordinate table, bound by column position.
#[derive(Debug, Deserialize)]
struct CoordRecord {
    ra: Degree,
    dec: Degree,
}

impl SkyCatalog {
    /// Load a catalog from a two-column `RA,Dec` CSV file.
    ///
    /// Arguments
    /// -----------------
    /// * `path`: UTF-8 path to a headerless comma-delimited file with one
    ///   `RA,Dec` pair per row, in decimal degrees
    ///
    /// Return
    /// ----------
    /// * The catalog with rows in file order, or a [`SightlineError`] on I/O
    ///   failure, malformed rows, or non-finite coordinates.
    pub fn from_csv(path: &Utf8Path) -> Result<Self, SightlineError> {
        let file = File::open(path)?;
        Self::from_csv_reader(file)
    }

    /// Same as [`SkyCatalog::from_csv`] over any byte reader.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, SightlineError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut catalog = SkyCatalog::new();
        for (row, record) in csv_reader.deserialize::<CoordRecord>().enumerate() {
            let record = record?;
            if !record.ra.is_finite() || !record.dec.is_finite() {
                return Err(SightlineError::InvalidCoordinateRecord {
                    row,
                    reason: format!(
                        "non-finite coordinate ({}, {})",
                        record.ra, record.dec
                    ),
                });
            }
            catalog.push(record.ra, record.dec);
        }
        Ok(catalog)
    }
}
