pub mod constants;
pub mod coordinates;
pub mod filename;
pub mod progress;

pub use constants::*;
pub use coordinates::{haversine_distance, validate_coordinates};
pub use filename::temperature_export_filename;
pub use progress::ProgressReporter;
