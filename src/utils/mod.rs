pub mod dates;
pub mod error;
pub mod geometry;
pub mod logger;
pub mod units;
pub mod validation;
