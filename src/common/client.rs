use crate::common::TickerError;

const DEFAULT_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(10);

pub fn create_http_client() -> Result<reqwest::Client, TickerError> {
    let client = reqwest::Client::builder()
        .timeout(DEFAULT_TIMEOUT)
        .user_agent(concat!("cmc-ticker/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}
