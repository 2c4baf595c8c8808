pub mod daily;
pub mod point;
pub mod station;
pub mod window;

pub use daily::{DailyRecord, DailySeries};
pub use point::GeoPoint;
pub use station::{find_by_name, Station};
pub use window::DateWindow;
