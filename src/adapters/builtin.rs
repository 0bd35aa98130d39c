use crate::domain::model::{Country, Holiday, SourceOutcome};
use crate::domain::ports::HolidaySource;
use async_trait::async_trait;

const COUNTRIES: [(&str, &str); 7] = [
    ("IN", "India"),
    ("US", "United States"),
    ("GB", "United Kingdom"),
    ("CA", "Canada"),
    ("AU", "Australia"),
    ("DE", "Germany"),
    ("FR", "France"),
];

/// Last-resort source: a fixed country list and no holiday data.
#[derive(Debug, Clone)]
pub struct BuiltinCountries {
    name: String,
}

impl BuiltinCountries {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

#[async_trait]
impl HolidaySource for BuiltinCountries {
    fn name(&self) -> &str {
        &self.name
    }

    async fn public_holidays(&self, _country_code: &str, _year: i32) -> SourceOutcome<Vec<Holiday>> {
        SourceOutcome::Unavailable("built-in source carries no holiday data".to_string())
    }

    async fn available_countries(&self) -> SourceOutcome<Vec<Country>> {
        SourceOutcome::Success(
            COUNTRIES
                .iter()
                .map(|(code, name)| Country::new(code, name))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_builtin_lists_countries_only() {
        let source = BuiltinCountries::new("builtin");

        let SourceOutcome::Success(countries) = source.available_countries().await else {
            panic!("builtin countries must always succeed");
        };
        assert_eq!(countries.len(), 7);
        assert!(countries.contains(&Country::new("IN", "India")));

        assert!(matches!(
            source.public_holidays("IN", 2025).await,
            SourceOutcome::Unavailable(_)
        ));
    }
}
