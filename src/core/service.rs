use crate::core::weeks::{build_month_view, build_quarter_view, filter_month};
use crate::domain::model::{Country, Holiday, Lookup, MonthView, QuarterView, SourceOutcome};
use crate::domain::ports::HolidaySource;
use crate::utils::error::{CalendarError, Result};
use std::sync::Arc;

/// Fetches holidays through an ordered chain of sources and shapes them into
/// month and quarter views.
#[derive(Clone)]
pub struct HolidayService {
    sources: Vec<Arc<dyn HolidaySource>>,
}

impl HolidayService {
    pub fn new(sources: Vec<Arc<dyn HolidaySource>>) -> Self {
        Self { sources }
    }

    pub fn source_names(&self) -> Vec<&str> {
        self.sources.iter().map(|source| source.name()).collect()
    }

    /// Holidays of a whole year from the first source that answers.
    ///
    /// Never fails: when every source is unavailable the result is an empty
    /// list with no source attached.
    pub async fn year_holidays(&self, country_code: &str, year: i32) -> Lookup<Vec<Holiday>> {
        for source in &self.sources {
            match source.public_holidays(country_code, year).await {
                SourceOutcome::Success(holidays) => {
                    tracing::debug!(
                        source = source.name(),
                        country_code,
                        year,
                        count = holidays.len(),
                        "holidays fetched"
                    );
                    return Lookup {
                        value: holidays,
                        source: Some(source.name().to_string()),
                    };
                }
                SourceOutcome::Unavailable(reason) => {
                    tracing::warn!(source = source.name(), country_code, year, %reason, "holiday source unavailable");
                }
            }
        }

        tracing::warn!(country_code, year, "all holiday sources unavailable, serving empty calendar");
        Lookup {
            value: Vec::new(),
            source: None,
        }
    }

    pub async fn month_view(&self, country_code: &str, year: i32, month: u32) -> Lookup<MonthView> {
        self.year_holidays(country_code, year)
            .await
            .map(|holidays| build_month_view(&filter_month(&holidays, month), year, month))
    }

    pub async fn quarter_view(&self, country_code: &str, year: i32, quarter: u32) -> Lookup<QuarterView> {
        self.year_holidays(country_code, year)
            .await
            .map(|holidays| build_quarter_view(&holidays, year, quarter))
    }

    /// Country list from the first source that answers, sorted by name.
    pub async fn supported_countries(&self) -> Result<Lookup<Vec<Country>>> {
        let mut reasons = Vec::new();

        for source in &self.sources {
            match source.available_countries().await {
                SourceOutcome::Success(mut countries) => {
                    countries.sort_by(|a, b| {
                        a.name
                            .to_lowercase()
                            .cmp(&b.name.to_lowercase())
                            .then_with(|| a.code.cmp(&b.code))
                    });
                    return Ok(Lookup {
                        value: countries,
                        source: Some(source.name().to_string()),
                    });
                }
                SourceOutcome::Unavailable(reason) => {
                    tracing::warn!(source = source.name(), %reason, "country source unavailable");
                    reasons.push(format!("{}: {}", source.name(), reason));
                }
            }
        }

        Err(CalendarError::SourceUnavailable {
            message: if reasons.is_empty() {
                "no sources configured".to_string()
            } else {
                reasons.join("; ")
            },
        })
    }
}
