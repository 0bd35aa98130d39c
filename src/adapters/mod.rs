// Adapters layer: concrete holiday sources for external systems.

pub mod builtin;
pub mod nager;

pub use builtin::BuiltinCountries;
pub use nager::{NagerDateSource, DEFAULT_NAGER_ENDPOINT};

use crate::domain::ports::{ConfigProvider, HolidaySource, SourceKind};
use crate::utils::error::Result;
use std::sync::Arc;
use std::time::Duration;

/// Instantiates the configured source chain, in order.
pub fn build_sources(config: &dyn ConfigProvider) -> Result<Vec<Arc<dyn HolidaySource>>> {
    config
        .sources()
        .into_iter()
        .map(|settings| -> Result<Arc<dyn HolidaySource>> {
            tracing::debug!(name = %settings.name, kind = ?settings.kind, "configuring holiday source");
            let source: Arc<dyn HolidaySource> = match settings.kind {
                SourceKind::Nager => Arc::new(NagerDateSource::new(
                    &settings.name,
                    &settings.endpoint,
                    Duration::from_secs(settings.timeout_seconds),
                    &settings.headers,
                )?),
                SourceKind::Builtin => Arc::new(BuiltinCountries::new(&settings.name)),
            };
            Ok(source)
        })
        .collect()
}
