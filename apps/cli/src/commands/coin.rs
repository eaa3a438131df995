//! The coin detail command: quote, stat cards, performance, price chart.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crypto_monitor_core::{CoinQuoteView, PriceHistoryView};

use crate::config::Config;
use crate::render;

use super::build_state;

pub async fn run(
    config: &Config,
    symbol: &str,
    days: u32,
    chart_out: Option<PathBuf>,
) -> Result<()> {
    let state = build_state(config)?;

    let quote = CoinQuoteView::new(
        state.client.clone(),
        state.fetcher.clone(),
        symbol,
        &config.currency,
    );
    let history = PriceHistoryView::new(
        state.client.clone(),
        state.fetcher.clone(),
        symbol,
        &config.currency,
        days,
    );

    println!("Loading {}…", quote.symbol());
    let (quote_state, history_state) = tokio::join!(quote.refresh(), history.refresh());

    render::coin_detail(&quote_state, quote.symbol(), quote.currency());

    let chart = history.sparkline().await;
    render::price_chart(&history_state, chart.as_ref(), history.days());

    if let Some(path) = chart_out {
        match &chart {
            Some(chart) => {
                std::fs::write(&path, chart.to_svg())
                    .with_context(|| format!("Failed to write chart to {}", path.display()))?;
                println!("Chart written to {}", path.display());
            }
            None => println!("No chart written: the price series has fewer than two points."),
        }
    }

    Ok(())
}
