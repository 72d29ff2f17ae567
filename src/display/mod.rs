//! Terminal rendering of listings.
//!
//! Each asset becomes one line:
//!
//! ```text
//! Bitcoin: $50000.12, 24h: 2.5%, 7d: -1.1%
//! ```
//!
//! The name and price segment is highlighted, and each percent-change
//! segment is green when the change is strictly positive and red otherwise.
//! Lines always carry ANSI styling; write them through an
//! [`anstream::AutoStream`] to drop it on non-terminals, `NO_COLOR`,
//! `TERM=dumb` and the like.

use crate::coinmarketcap::Asset;
use crate::common::TickerError;
use anstyle::{AnsiColor, Style};
use std::io::Write;

/// Direction of a percent change. Zero is not an increase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    pub fn of(change: f64) -> Self {
        if change > 0.0 { Trend::Up } else { Trend::Down }
    }
}

/// Styles applied to each line segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub name: Style,
    pub up: Style,
    pub down: Style,
}

impl Default for Palette {
    fn default() -> Self {
        Self::colored()
    }
}

impl Palette {
    pub fn colored() -> Self {
        Self {
            name: AnsiColor::Black.on(AnsiColor::Cyan),
            up: AnsiColor::Green.on_default(),
            down: AnsiColor::Red.on_default(),
        }
    }

    /// No escape sequences at all, for callers that compare rendered text.
    pub fn plain() -> Self {
        Self {
            name: Style::new(),
            up: Style::new(),
            down: Style::new(),
        }
    }

    pub fn trend(&self, trend: Trend) -> Style {
        match trend {
            Trend::Up => self.up,
            Trend::Down => self.down,
        }
    }
}

/// Render one asset as a single newline-terminated line.
pub fn render_asset(
    asset: &Asset,
    currency: &str,
    palette: &Palette,
) -> Result<String, TickerError> {
    let quote = asset.quote_in(currency)?;
    let day = quote.change_24h();
    let week = quote.change_7d();

    let name = palette.name;
    let day_style = palette.trend(Trend::of(day));
    let week_style = palette.trend(Trend::of(week));

    Ok(format!(
        "{name}{}: ${}{name:#}{day_style}, 24h: {}%, {day_style:#}{week_style}7d: {}%{week_style:#}\n",
        asset.name, quote.price, day, week
    ))
}

/// Write every asset in order. Returns the number of lines written.
///
/// All lines are rendered before the first write, so a missing quote
/// leaves `out` untouched.
pub fn write_listings<W: Write>(
    out: &mut W,
    assets: &[Asset],
    currency: &str,
    palette: &Palette,
) -> Result<usize, TickerError> {
    let lines = assets
        .iter()
        .map(|asset| render_asset(asset, currency, palette))
        .collect::<Result<Vec<_>, _>>()?;

    for line in &lines {
        out.write_all(line.as_bytes())?;
    }
    out.flush()?;
    Ok(lines.len())
}
