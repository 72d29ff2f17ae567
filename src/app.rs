use crate::common::{ListingsProvider, ListingsRequest, TickerError};
use crate::display::{Palette, write_listings};
use std::io::Write;
use tracing::debug;

/// Fetch one window of listings and print it.
///
/// Nothing is written to `out` unless the whole window was fetched and decoded.
/// Returns the number of assets printed.
pub async fn run<P, W>(
    provider: &P,
    request: &ListingsRequest,
    out: &mut W,
    palette: &Palette,
) -> Result<usize, TickerError>
where
    P: ListingsProvider + ?Sized,
    W: Write,
{
    debug!(
        provider = provider.provider_name(),
        start = request.start,
        limit = request.limit,
        convert = %request.convert,
        "fetching listings"
    );

    let assets = provider.get_listings(request).await?;
    write_listings(out, &assets, &request.convert, palette)
}
