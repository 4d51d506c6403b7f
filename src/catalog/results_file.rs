//! Persistence of batch estimation results: one probability per line, in the
//! same order as the unknown-binary catalog they were computed from.

use camino::Utf8Path;

use crate::sightline_errors::SightlineError;

/// Write the estimated line-of-sight probabilities to a delimited file, one
/// value per line.
pub fn write_los_results(path: &Utf8Path, results: &[f64]) -> Result<(), SightlineError> {
    let mut writer = csv::Writer::from_path(path)?;
    for value in results {
        writer.serialize(value)?;
    }
    writer.flush()?;
    Ok(())
}
