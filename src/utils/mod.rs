pub mod colors;
pub mod formatting;
pub mod path;
pub mod table;
pub mod time;

pub use formatting::format_duration;
pub use time::{minutes_to_time, time_to_minutes};
