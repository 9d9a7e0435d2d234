//! Pay period resolution.
//!
//! A pay period is an inclusive date range. The default flow anchors it to
//! calendar month boundaries; arbitrary ranges are allowed as long as the
//! start does not come after the end.

pub mod error;
pub mod resolver;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::PeriodError;
pub use resolver::PeriodResolver;
pub use types::PayPeriod;
