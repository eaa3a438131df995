//! Terminal output for the dashboard panels and the coin detail view.
//!
//! Pure presentation: every number arrives pre-derived from the view layer,
//! this module only decides placement and the live/stale/failed framing.

use crypto_monitor_core::constants::{DETAIL_PRICE_DECIMALS, MOVER_PRICE_DECIMALS};
use crypto_monitor_core::format::{
    format_change, format_grouped, format_percent2, format_price, DASH,
};
use crypto_monitor_core::sparkline::{SparklineGeometry, Trend};
use crypto_monitor_core::{
    detail_stats, performance_rows, stat_items, Mover, TableControls, ViewState,
};
use crypto_monitor_market_data::{Coin, GlobalStats, MarketDataError};

/// Shown whenever a panel renders a cached snapshot instead of live data.
const STALE_NOTICE: &str = "Live data unavailable or limited. Showing last cached snapshot.";

fn arrow(up: bool) -> char {
    if up {
        '▲'
    } else {
        '▼'
    }
}

/// Picks the failure to show as a panel's whole body. A failure with a
/// cached snapshot to fall back on is not terminal; the stale notice
/// covers that case.
fn terminal_error<T>(state: &ViewState<T>) -> Option<&MarketDataError> {
    if state.data.is_none() {
        state.error.as_ref()
    } else {
        None
    }
}

pub fn global_stats(state: &ViewState<GlobalStats>, currency: &str) {
    println!("Global Market");
    if state.stale {
        println!("  {}", STALE_NOTICE);
    }
    match (&state.data, &state.error) {
        (Some(stats), _) => {
            for item in stat_items(stats, currency) {
                println!("  {:<18} {}", item.label, item.value);
            }
        }
        (None, Some(e)) => println!("  Failed to load global stats: {}", e),
        (None, None) => println!("  Loading global market stats..."),
    }
    println!();
}

pub fn top_movers(state: &ViewState<Vec<Coin>>, movers: &[Mover]) {
    println!("Top Movers (24h)");
    if let Some(e) = terminal_error(state) {
        println!("  Failed to load coins: {}", e);
        println!();
        return;
    }
    if state.stale {
        println!("  {}", STALE_NOTICE);
    }
    for mover in movers {
        println!(
            "  {:<28} {:>14}  {} {:>8}%   Market Cap: ${}",
            format!("{} ({})", mover.name, mover.symbol),
            format!("${}", format_price(mover.price, MOVER_PRICE_DECIMALS)),
            arrow(mover.change >= 0.0),
            format_change(Some(mover.change)),
            format_grouped(mover.market_cap.unwrap_or(0.0), 3),
        );
    }
    println!();
}

pub fn market_table(
    state: &ViewState<Vec<Coin>>,
    rows: &[Coin],
    currency: &str,
    controls: &TableControls,
) {
    println!("Market Overview");
    if let Some(e) = terminal_error(state) {
        println!("  Failed to load market: {}", e);
        println!();
        return;
    }
    if state.data.is_none() {
        println!("  Loading...");
        println!();
        return;
    }
    if state.stale {
        println!("  {}", STALE_NOTICE);
    }

    println!(
        "  {:>4}  {:<26} {:>18} {:>12} {:>20} {:>20}",
        "#", "Name", "Price", "24h %", "Market Cap", "Volume (24h)"
    );
    for (i, coin) in rows.iter().enumerate() {
        let quote = coin.quote_in(currency).cloned().unwrap_or_default();
        let change = coin.change_24h(currency);
        println!(
            "  {:>4}  {:<26} {:>18} {:>12} {:>20} {:>20}",
            i + 1,
            format!("{} {}", coin.name, coin.symbol),
            format!("${}", format_price(quote.price, DETAIL_PRICE_DECIMALS)),
            format!("{} {}", arrow(change >= 0.0), format_percent2(Some(change))),
            format!("${}", format_grouped(quote.market_cap.unwrap_or(0.0), 3)),
            format!("${}", format_grouped(quote.volume_24h.unwrap_or(0.0), 3)),
        );
    }
    if rows.is_empty() && !controls.filter().trim().is_empty() {
        println!("  No coins match \"{}\"", controls.filter().trim());
    }
    println!();
}

pub fn coin_detail(state: &ViewState<Coin>, symbol: &str, currency: &str) {
    if state.stale {
        println!("{}", STALE_NOTICE);
    }
    let coin = match (&state.data, &state.error) {
        (Some(coin), _) => coin,
        (None, Some(MarketDataError::SymbolNotFound(_))) | (None, None) => {
            println!("No data found for {}", symbol);
            return;
        }
        (None, Some(e)) => {
            println!("Failed to load: {}", e);
            return;
        }
    };

    let quote = coin.quote_in(currency).cloned().unwrap_or_default();
    let change = coin.change_24h(currency);
    println!("{} {}", coin.name, coin.symbol);
    println!(
        "${}",
        format_grouped(quote.price.unwrap_or(0.0), DETAIL_PRICE_DECIMALS)
    );
    println!(
        "{} {} (24h)",
        arrow(change >= 0.0),
        format_percent2(Some(change))
    );
    println!();

    for item in detail_stats(coin, currency) {
        println!("  {:<18} {}", item.label, item.value);
    }
    println!();

    println!("Price Performance");
    for row in performance_rows(coin, currency) {
        let value = match row.change {
            Some(change) => format_percent2(Some(change)),
            None => DASH.to_string(),
        };
        println!("  {:<4} {} {}", row.label, arrow(row.is_up()), value);
    }
}

pub fn price_chart(state: &ViewState<Vec<f64>>, chart: Option<&SparklineGeometry>, days: u32) {
    println!();
    println!("Price Chart ({}d)", days);
    if state.stale {
        println!("  {}", STALE_NOTICE);
    }
    let chart = match chart {
        Some(chart) => chart,
        None => {
            match terminal_error(state) {
                Some(e) => println!("  Failed to load: {}", e),
                None => println!("  Not enough data to chart."),
            }
            println!();
            return;
        }
    };

    let prices = state.data.as_deref().unwrap_or_default();
    let low = prices.iter().copied().fold(f64::INFINITY, f64::min);
    let high = prices.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let first = prices.first().copied().unwrap_or(0.0);
    let last = prices.last().copied().unwrap_or(0.0);
    println!(
        "  {} {} → {}  (low {}, high {}, {} points)",
        arrow(chart.trend == Trend::Up),
        format_grouped(first, DETAIL_PRICE_DECIMALS),
        format_grouped(last, DETAIL_PRICE_DECIMALS),
        format_grouped(low, DETAIL_PRICE_DECIMALS),
        format_grouped(high, DETAIL_PRICE_DECIMALS),
        prices.len(),
    );
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_without_a_snapshot_is_terminal() {
        let state: ViewState<Vec<f64>> = ViewState {
            data: None,
            stale: false,
            error: Some(MarketDataError::Status { status: 502 }),
            loading: false,
        };

        assert_eq!(
            terminal_error(&state),
            Some(&MarketDataError::Status { status: 502 })
        );
    }

    #[test]
    fn test_failure_with_a_cached_snapshot_is_not_terminal() {
        let state = ViewState {
            data: Some(vec![1.0]),
            stale: true,
            error: Some(MarketDataError::Status { status: 502 }),
            loading: false,
        };

        assert!(terminal_error(&state).is_none());
    }

    #[test]
    fn test_loading_without_a_failure_has_no_terminal_error() {
        let state: ViewState<Vec<f64>> = ViewState {
            data: None,
            stale: false,
            error: None,
            loading: true,
        };

        assert!(terminal_error(&state).is_none());
    }
}
