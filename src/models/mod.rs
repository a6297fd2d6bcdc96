pub mod interval;
pub mod job;
pub mod result;
pub mod shift;

pub use interval::{BREAK_LABEL, CalculatedInterval, IntervalKind};
pub use job::{Job, JobColor};
pub use result::CalculationResult;
pub use shift::{BREAK_MINUTES, ShiftConfig};
