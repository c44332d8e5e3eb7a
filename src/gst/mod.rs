pub mod convert;
pub mod rate;

pub use convert::{GstBreakdown, GstError, Rounding};
pub use rate::GstRate;
