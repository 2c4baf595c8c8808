pub mod column_reader;
pub mod daily_reader;
pub mod station_reader;

pub use column_reader::ColumnReader;
pub use daily_reader::DailyReader;
pub use station_reader::StationReader;

use crate::error::Result;
use flate2::read::GzDecoder;
use std::io::Read;

/// Decompress a gzip payload into memory
pub(crate) fn gunzip(compressed: &[u8]) -> Result<Vec<u8>> {
    let mut decoder = GzDecoder::new(compressed);
    let mut out = Vec::new();
    decoder.read_to_end(&mut out)?;
    Ok(out)
}
