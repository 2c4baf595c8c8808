pub mod converter;
pub mod exporter;

pub use converter::{csv_to_line, join_line};
pub use exporter::{TemperatureExporter, WindowExport};
