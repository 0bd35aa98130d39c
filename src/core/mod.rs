pub mod service;
pub mod weeks;

pub use crate::domain::model::{Country, Holiday, Lookup, MonthView, QuarterView, SourceOutcome};
pub use crate::domain::ports::{ConfigProvider, HolidaySource};
pub use crate::utils::error::Result;
