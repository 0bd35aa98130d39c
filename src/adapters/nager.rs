use crate::domain::model::{Country, Holiday, SourceOutcome};
use crate::domain::ports::HolidaySource;
use crate::utils::error::{CalendarError, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_NAGER_ENDPOINT: &str = "https://date.nager.at/api/v3";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PublicHolidayDto {
    date: String,
    #[serde(default)]
    local_name: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    global: Option<bool>,
    #[serde(default)]
    types: Option<Vec<String>>,
    #[serde(default, rename = "type")]
    kind: Option<String>,
}

impl PublicHolidayDto {
    /// `None` when the date cannot be read as `YYYY-MM-DD`.
    fn into_holiday(self) -> Option<Holiday> {
        let date = match NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d") {
            Ok(date) => date,
            Err(e) => {
                tracing::warn!(date = %self.date, error = %e, "dropping holiday with unparseable date");
                return None;
            }
        };

        let name = self
            .name
            .clone()
            .filter(|n| !n.trim().is_empty())
            .or_else(|| self.local_name.clone().filter(|n| !n.trim().is_empty()))
            .unwrap_or_else(|| "Unnamed holiday".to_string());
        let local_name = self
            .local_name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| name.clone());
        let kind = self
            .types
            .and_then(|types| types.into_iter().next())
            .or(self.kind)
            .unwrap_or_else(|| "Public".to_string());

        Some(Holiday {
            date,
            name,
            local_name,
            global: self.global.unwrap_or(true),
            kind,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CountryDto {
    country_code: String,
    name: String,
}

/// Client for the Nager.Date public holiday API.
#[derive(Debug, Clone)]
pub struct NagerDateSource {
    name: String,
    base_url: String,
    client: Client,
}

impl NagerDateSource {
    pub fn new(
        name: &str,
        base_url: &str,
        timeout: Duration,
        headers: &[(String, String)],
    ) -> Result<Self> {
        let mut header_map = HeaderMap::new();
        for (key, value) in headers {
            let header_name = HeaderName::from_bytes(key.as_bytes()).map_err(|e| {
                CalendarError::InvalidConfigValueError {
                    field: "sources.headers".to_string(),
                    value: key.clone(),
                    reason: e.to_string(),
                }
            })?;
            let header_value = HeaderValue::from_str(value).map_err(|e| {
                CalendarError::InvalidConfigValueError {
                    field: format!("sources.headers.{}", key),
                    value: "<redacted>".to_string(),
                    reason: e.to_string(),
                }
            })?;
            header_map.insert(header_name, header_value);
        }

        let client = Client::builder()
            .timeout(timeout)
            .default_headers(header_map)
            .build()?;

        Ok(Self {
            name: name.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> SourceOutcome<T> {
        let url = format!("{}/{}", self.base_url, path);
        tracing::debug!("Making API request to: {}", url);

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => return SourceOutcome::Unavailable(format!("request failed: {}", e)),
        };

        tracing::debug!("API response status: {}", response.status());
        if !response.status().is_success() {
            return SourceOutcome::Unavailable(format!("HTTP {} from {}", response.status(), url));
        }

        match response.json::<T>().await {
            Ok(body) => SourceOutcome::Success(body),
            Err(e) => SourceOutcome::Unavailable(format!("invalid response body: {}", e)),
        }
    }
}

#[async_trait]
impl HolidaySource for NagerDateSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn public_holidays(&self, country_code: &str, year: i32) -> SourceOutcome<Vec<Holiday>> {
        let path = format!("publicholidays/{}/{}", year, country_code);
        match self.get_json::<Vec<PublicHolidayDto>>(&path).await {
            SourceOutcome::Success(records) => SourceOutcome::Success(
                records
                    .into_iter()
                    .filter_map(PublicHolidayDto::into_holiday)
                    .collect(),
            ),
            SourceOutcome::Unavailable(reason) => SourceOutcome::Unavailable(reason),
        }
    }

    async fn available_countries(&self) -> SourceOutcome<Vec<Country>> {
        match self.get_json::<Vec<CountryDto>>("availablecountries").await {
            SourceOutcome::Success(records) => SourceOutcome::Success(
                records
                    .into_iter()
                    .map(|c| Country {
                        code: c.country_code,
                        name: c.name,
                    })
                    .collect(),
            ),
            SourceOutcome::Unavailable(reason) => SourceOutcome::Unavailable(reason),
        }
    }
}
