//! Dashboard views.
//!
//! Each view pairs one API call with one cache key and owns a
//! generation-guarded state cell. A `refresh` runs the fallback fetch and
//! commits the outcome; the rest of each module derives display-ready
//! values (rankings, table rows, stat cards) from the committed payload.
//!
//! Two views share the listings payload. The request coalescer collapses
//! their concurrent fetches into one network call, and their cache writes
//! land under the same key, so the last writer wins with an identical
//! value.

mod cell;
pub mod coin_detail;
pub mod global_stats;
pub mod history;
pub mod market_table;
pub mod movers;

pub use cell::ViewState;
pub use coin_detail::{detail_stats, performance_rows, CoinQuoteView, PerfItem};
pub use global_stats::{stat_items, GlobalStatsView};
pub use history::PriceHistoryView;
pub use market_table::{filter_and_sort, MarketTableView, SortKey, SortOrder, TableControls};
pub use movers::{top_movers, Mover, TopMoversView};

/// One labeled value card.
#[derive(Clone, Debug, PartialEq)]
pub struct StatItem {
    pub label: &'static str,
    pub value: String,
}
