//! `cmc-ticker`
//!
//! Fetch the latest CoinMarketCap listings and print a colorized one-line summary per asset.
//!
//! ## Quickstart
//!
//! ```no_run
//! use cmc_ticker::{CoinMarketCap, ListingsRequest, Palette, Settings, run};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), cmc_ticker::TickerError> {
//! let settings = Settings::from_env()?;
//! let provider = CoinMarketCap::from_settings(&settings)?;
//! let printed = run(
//!     &provider,
//!     &ListingsRequest::default(),
//!     &mut anstream::stdout(),
//!     &Palette::colored(),
//! )
//! .await?;
//! println!("{} listings", printed);
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod coinmarketcap;
pub mod common;
pub mod display;

// Re-export common types
pub use app::run;
pub use coinmarketcap::{Asset, CoinMarketCap, ListingsResponse, Platform, Quote, Status};
pub use common::{
    API_BASE_VAR, API_KEY_VAR, DEFAULT_CONVERT, DEFAULT_LIMIT, DEFAULT_START, ListingsProvider,
    ListingsRequest, Settings, TickerError, create_http_client, load_dotenv,
};
pub use display::{Palette, Trend, render_asset, write_listings};
