//! The dashboard command: global stats, top movers, and the market table.

use std::time::Duration;

use anyhow::Result;

use crypto_monitor_core::constants::TOP_MOVERS_COUNT;
use crypto_monitor_core::{
    GlobalStatsView, MarketTableView, SortKey, SortOrder, TableControls, TopMoversView,
};

use crate::config::Config;
use crate::render;

use super::build_state;

pub async fn run(
    config: &Config,
    filter: Option<String>,
    sort_key: SortKey,
    sort_order: SortOrder,
    refresh: Option<u64>,
) -> Result<()> {
    let state = build_state(config)?;

    let global = GlobalStatsView::new(
        state.client.clone(),
        state.fetcher.clone(),
        &config.currency,
    );
    let movers = TopMoversView::new(
        state.client.clone(),
        state.fetcher.clone(),
        &config.currency,
        config.limit,
    );
    let table = MarketTableView::new(
        state.client.clone(),
        state.fetcher.clone(),
        &config.currency,
        config.limit,
    );
    let controls = TableControls::new(filter.unwrap_or_default(), sort_key, sort_order);

    loop {
        // The three panels load independently; one failing endpoint must not
        // hold up the others.
        let (global_state, movers_state, table_state) =
            tokio::join!(global.refresh(), movers.refresh(), table.refresh());

        render::global_stats(&global_state, global.currency());
        render::top_movers(&movers_state, &movers.movers(TOP_MOVERS_COUNT).await);
        render::market_table(
            &table_state,
            &table.rows(&controls).await,
            table.currency(),
            &controls,
        );

        match refresh {
            Some(secs) => tokio::time::sleep(Duration::from_secs(secs)).await,
            None => break,
        }
        println!();
    }

    Ok(())
}
