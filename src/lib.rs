pub mod catalog;
pub mod constants;
pub mod flat_sky;
pub mod los_estimation;
pub mod region;
pub mod sightline_errors;

pub use catalog::results_file::write_los_results;
pub use catalog::{SkyCatalog, SkyPoint};
pub use constants::{ArcMin, ArcSec, Degree, LosResults, Radian};
pub use los_estimation::los_batch::LosEstimation;
pub use los_estimation::monte_carlo::estimate_los_fraction;
pub use los_estimation::{LosParams, LosParamsBuilder};
pub use region::RegionBounds;
pub use sightline_errors::SightlineError;
