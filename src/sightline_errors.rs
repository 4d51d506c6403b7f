use thiserror::Error;

#[derive(Error, Debug)]
pub enum SightlineError {
    #[error("Unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV read/write error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Invalid coordinate record at row {row}: {reason}")]
    InvalidCoordinateRecord { row: usize, reason: String },

    #[error("Invalid simulation parameter: {0}")]
    InvalidSimulationParameter(String),
}
