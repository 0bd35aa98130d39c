pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod http;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::toml_config::TomlConfig;
pub use core::service::HolidayService;
pub use core::weeks::{build_month_view, build_quarter_view, filter_month, quarter_months};
pub use domain::model::{Country, Day, Holiday, MonthView, QuarterView, Week, WeekColor};
pub use utils::error::{CalendarError, Result};
