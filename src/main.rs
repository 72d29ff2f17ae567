use cmc_ticker::{
    API_KEY_VAR, CoinMarketCap, ListingsRequest, Palette, Settings, TickerError, load_dotenv, run,
};
use std::process::ExitCode;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Logs go to stderr; set RUST_LOG=debug to see request details
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    load_dotenv();

    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            let red = Palette::colored().down;
            anstream::eprintln!(
                "{red}Error, coinmarketcap key not set to {API_KEY_VAR} in env{red:#}"
            );
            return ExitCode::from(e.exit_code());
        }
    };

    match fetch_and_print(&settings).await {
        Ok(printed) => {
            debug!(printed, "done");
            ExitCode::SUCCESS
        }
        Err(e) => {
            if e.is_transport() {
                eprintln!("error contacting server");
            }
            error!("{}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

async fn fetch_and_print(settings: &Settings) -> Result<usize, TickerError> {
    let provider = CoinMarketCap::from_settings(settings)?;
    // Strips styling unless stdout is a color-capable terminal
    let mut stdout = anstream::stdout();
    run(
        &provider,
        &ListingsRequest::default(),
        &mut stdout,
        &Palette::colored(),
    )
    .await
}
