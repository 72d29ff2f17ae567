use crate::coinmarketcap::Asset;
use crate::common::TickerError;
use async_trait::async_trait;

pub const DEFAULT_START: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 20;
pub const DEFAULT_CONVERT: &str = "USD";

/// Window of listings to request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingsRequest {
    /// 1-based offset into the ranking.
    pub start: u32,
    pub limit: u32,
    /// Conversion currency code the quotes are keyed by.
    pub convert: String,
}

impl Default for ListingsRequest {
    fn default() -> Self {
        Self {
            start: DEFAULT_START,
            limit: DEFAULT_LIMIT,
            convert: DEFAULT_CONVERT.to_string(),
        }
    }
}

impl ListingsRequest {
    pub fn query_pairs(&self) -> [(&'static str, String); 3] {
        [
            ("start", self.start.to_string()),
            ("limit", self.limit.to_string()),
            ("convert", self.convert.clone()),
        ]
    }
}

// Common listings provider trait definition
#[async_trait]
pub trait ListingsProvider: Send + Sync {
    fn provider_name(&self) -> &str;

    /// Fetch the latest listings, in the order the provider ranks them.
    async fn get_listings(&self, request: &ListingsRequest) -> Result<Vec<Asset>, TickerError>;
}
