#[derive(thiserror::Error, Debug)]
pub enum TickerError {
    #[error("Missing credential: {0} is not set in the environment")]
    MissingCredential(String),

    #[error("Transport error: {0}")]
    TransportError(#[from] reqwest::Error),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Decode error: {0}")]
    DecodeError(#[from] serde_json::Error),

    #[error("Missing {currency} quote for {symbol}")]
    MissingQuote { symbol: String, currency: String },

    #[error("Output error: {0}")]
    OutputError(#[from] std::io::Error),
}

impl TickerError {
    /// Process exit status for this failure. Every failure ends the run.
    pub fn exit_code(&self) -> u8 {
        match self {
            TickerError::MissingCredential(_)
            | TickerError::TransportError(_)
            | TickerError::ApiError(_)
            | TickerError::DecodeError(_)
            | TickerError::MissingQuote { .. }
            | TickerError::OutputError(_) => 1,
        }
    }

    /// Whether the failure happened before or during the network exchange
    /// rather than while interpreting its result.
    pub fn is_transport(&self) -> bool {
        matches!(self, TickerError::TransportError(_))
    }
}
