pub mod client;
pub mod config;
pub mod errors;
pub mod provider;

// Re-export
pub use client::create_http_client;
pub use config::{API_BASE_VAR, API_KEY_VAR, Settings, load_dotenv};
pub use errors::TickerError;
pub use provider::{
    DEFAULT_CONVERT, DEFAULT_LIMIT, DEFAULT_START, ListingsProvider, ListingsRequest,
};
