mod types;
use crate::common::{ListingsProvider, ListingsRequest, Settings, TickerError, create_http_client};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
pub use types::{Asset, ListingsResponse, Platform, Quote, Status};

const COINMARKETCAP_API_BASE: &str = "https://pro-api.coinmarketcap.com";
const LISTINGS_LATEST_ENDPOINT: &str = "v1/cryptocurrency/listings/latest";
const API_KEY_HEADER: &str = "X-CMC_PRO_API_KEY";

pub struct CoinMarketCap {
    client: reqwest::Client,
    api_key: String,
    api_base: String,
}

impl CoinMarketCap {
    pub fn new(api_key: impl Into<String>) -> Result<Self, TickerError> {
        Ok(Self {
            client: create_http_client()?,
            api_key: api_key.into(),
            api_base: COINMARKETCAP_API_BASE.to_string(),
        })
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, TickerError> {
        let provider = Self::new(settings.api_key.clone())?;
        Ok(match &settings.api_base {
            Some(api_base) => provider.with_base_url(api_base.clone()),
            None => provider,
        })
    }

    /// Point the client at another host (mock servers, proxies).
    pub fn with_base_url(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> Result<T, TickerError> {
        let url = format!("{}/{}", self.api_base.trim_end_matches('/'), endpoint);
        debug!(%url, ?query, "sending request");

        let response = self
            .client
            .get(&url)
            .query(query)
            .header("Accepts", "application/json")
            .header(reqwest::header::ACCEPT, "application/json")
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(%status, "request rejected");
            return Err(TickerError::ApiError(format!(
                "{} API error: {} - {}",
                self.provider_name(),
                status,
                error_text
            )));
        }

        // Decode from text so malformed bodies surface as DecodeError.
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl ListingsProvider for CoinMarketCap {
    fn provider_name(&self) -> &str {
        "CoinMarketCap"
    }

    async fn get_listings(&self, request: &ListingsRequest) -> Result<Vec<Asset>, TickerError> {
        let response: ListingsResponse = self
            .get(LISTINGS_LATEST_ENDPOINT, &request.query_pairs())
            .await?;
        let mut assets = response.into_assets()?;

        let window = request.limit as usize;
        if assets.len() > window {
            warn!(
                returned = assets.len(),
                limit = window,
                "provider returned more listings than requested, truncating"
            );
            assets.truncate(window);
        }

        let newest = assets.iter().filter_map(|a| a.last_updated_at()).max();
        debug!(count = assets.len(), ?newest, "decoded listings");

        Ok(assets)
    }
}
