use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A public or observed holiday as delivered by a holiday source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holiday {
    pub date: NaiveDate,
    pub name: String,
    pub local_name: String,
    /// Nationwide (`true`) or regional holiday.
    pub global: bool,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Holiday {
    pub fn new(date: NaiveDate, name: &str) -> Self {
        Self {
            date,
            name: name.to_string(),
            local_name: name.to_string(),
            global: true,
            kind: "Public".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Day {
    pub date: NaiveDate,
    pub day_of_week: String,
    pub is_in_month: bool,
    pub holidays: Vec<Holiday>,
}

/// Holiday density of a week, used for colour-coding in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeekColor {
    #[serde(rename = "normal")]
    Normal,
    #[serde(rename = "green")]
    Single,
    #[serde(rename = "dark-green")]
    Multiple,
}

impl WeekColor {
    pub fn classify(holiday_count: usize) -> Self {
        match holiday_count {
            0 => WeekColor::Normal,
            1 => WeekColor::Single,
            _ => WeekColor::Multiple,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Week {
    pub week_number: u32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days: Vec<Day>,
    pub holidays: Vec<Holiday>,
    pub holiday_count: usize,
    pub week_color: WeekColor,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthView {
    pub year: i32,
    pub month: u32,
    pub month_name: String,
    /// Length of `holidays`, duplicates included.
    pub total_holidays: usize,
    pub holidays: Vec<Holiday>,
    pub weeks: Vec<Week>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuarterView {
    pub quarter: u32,
    pub year: i32,
    pub months: Vec<MonthView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub code: String,
    pub name: String,
}

impl Country {
    pub fn new(code: &str, name: &str) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
        }
    }
}

/// Result of a single attempt against one holiday source.
#[derive(Debug, Clone, PartialEq)]
pub enum SourceOutcome<T> {
    Success(T),
    Unavailable(String),
}

/// A value together with the name of the source that produced it.
///
/// `source` is `None` when every source was unavailable and `value` is the
/// degraded (empty) result.
#[derive(Debug, Clone, PartialEq)]
pub struct Lookup<T> {
    pub value: T,
    pub source: Option<String>,
}

impl<T> Lookup<T> {
    pub fn is_degraded(&self) -> bool {
        self.source.is_none()
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Lookup<U> {
        Lookup {
            value: f(self.value),
            source: self.source,
        }
    }
}
