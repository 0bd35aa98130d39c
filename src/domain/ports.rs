use crate::domain::model::{Country, Holiday, SourceOutcome};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A provider of holiday data, tried in order by the holiday service.
#[async_trait]
pub trait HolidaySource: Send + Sync {
    fn name(&self) -> &str;

    /// Every holiday of `year` for `country_code`.
    async fn public_holidays(&self, country_code: &str, year: i32) -> SourceOutcome<Vec<Holiday>>;

    async fn available_countries(&self) -> SourceOutcome<Vec<Country>>;
}

/// Kind of holiday source a config entry describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Nager,
    Builtin,
}

/// Resolved settings for one entry of the source chain.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceSettings {
    pub name: String,
    pub kind: SourceKind,
    pub endpoint: String,
    pub timeout_seconds: u64,
    pub headers: Vec<(String, String)>,
}

pub trait ConfigProvider: Send + Sync {
    fn host(&self) -> &str;
    fn port(&self) -> u16;
    fn sources(&self) -> Vec<SourceSettings>;
}
