use crate::common::TickerError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;

/// Accept an identifier sent either as a JSON number or a string.
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrInt {
        String(String),
        Int(i64),
    }

    match StringOrInt::deserialize(deserializer)? {
        StringOrInt::String(s) => Ok(s),
        StringOrInt::Int(i) => Ok(i.to_string()),
    }
}

fn deserialize_error_code<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de;

    let id = deserialize_id(deserializer)?;
    id.parse().map_err(de::Error::custom)
}

// `null` and absent both mean "empty"
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|ts| ts.with_timezone(&Utc))
}

/// Response envelope of `/v1/cryptocurrency/listings/latest`.
#[derive(Debug, Deserialize)]
pub struct ListingsResponse {
    #[serde(default)]
    pub status: Option<Status>,
    #[serde(default)]
    pub data: Option<Vec<Asset>>,
}

impl ListingsResponse {
    /// Unwrap the listed assets, surfacing API-side errors and a missing `data` field.
    pub fn into_assets(self) -> Result<Vec<Asset>, TickerError> {
        if let Some(status) = &self.status {
            if status.error_code != 0 {
                return Err(TickerError::ApiError(format!(
                    "CoinMarketCap API error {}: {}",
                    status.error_code,
                    status.error_message.clone().unwrap_or_default()
                )));
            }
        }

        self.data
            .ok_or_else(|| <serde_json::Error as serde::de::Error>::missing_field("data").into())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Status {
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default, deserialize_with = "deserialize_error_code")]
    pub error_code: i64,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub elapsed: Option<i64>,
    #[serde(default)]
    pub credit_count: Option<i64>,
    #[serde(default)]
    pub notice: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Platform {
    #[serde(default, deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub token_address: String,
}

/// Per-currency price snapshot.
#[derive(Debug, Clone, Deserialize)]
pub struct Quote {
    pub price: f64,
    #[serde(default)]
    pub volume_24h: Option<f64>,
    #[serde(default)]
    pub percent_change_1h: Option<f64>,
    #[serde(default)]
    pub percent_change_24h: Option<f64>,
    #[serde(default)]
    pub percent_change_7d: Option<f64>,
    #[serde(default)]
    pub percent_change_30d: Option<f64>,
    #[serde(default)]
    pub percent_change_60d: Option<f64>,
    #[serde(default)]
    pub percent_change_90d: Option<f64>,
    #[serde(default)]
    pub market_cap: Option<f64>,
    #[serde(default)]
    pub market_cap_dominance: Option<f64>,
    #[serde(default)]
    pub fully_diluted_market_cap: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub last_updated: String,
}

impl Quote {
    /// 24h percent change; an unreported change counts as flat.
    pub fn change_24h(&self) -> f64 {
        self.percent_change_24h.unwrap_or(0.0)
    }

    /// 7d percent change; an unreported change counts as flat.
    pub fn change_7d(&self) -> f64 {
        self.percent_change_7d.unwrap_or(0.0)
    }

    pub fn last_updated_at(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.last_updated)
    }
}

/// One cryptocurrency listing.
#[derive(Debug, Clone, Deserialize)]
pub struct Asset {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    pub symbol: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub slug: String,
    #[serde(default)]
    pub num_market_pairs: Option<u32>,
    #[serde(default)]
    pub cmc_rank: Option<u32>,
    #[serde(default)]
    pub date_added: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub last_updated: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub max_supply: Option<f64>,
    #[serde(default)]
    pub circulating_supply: Option<f64>,
    #[serde(default)]
    pub total_supply: Option<f64>,
    #[serde(default)]
    pub platform: Option<Platform>,
    pub quote: HashMap<String, Quote>,
}

impl Asset {
    /// Quote keyed by `currency`, e.g. "USD".
    pub fn quote_in(&self, currency: &str) -> Result<&Quote, TickerError> {
        self.quote
            .get(currency)
            .ok_or_else(|| TickerError::MissingQuote {
                symbol: self.symbol.clone(),
                currency: currency.to_string(),
            })
    }

    pub fn usd_quote(&self) -> Result<&Quote, TickerError> {
        self.quote_in("USD")
    }

    pub fn platform_name(&self) -> Option<&str> {
        self.platform.as_ref().map(|p| p.name.as_str())
    }

    pub fn date_added_at(&self) -> Option<DateTime<Utc>> {
        self.date_added.as_deref().and_then(parse_timestamp)
    }

    pub fn last_updated_at(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.last_updated)
    }
}
