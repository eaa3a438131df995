/// Default quote currency for every view
pub const DEFAULT_CURRENCY: &str = "USD";

/// Number of coins requested from the listings endpoint.
/// Feeds both the top movers grid and the market table.
pub const DEFAULT_LISTING_LIMIT: u32 = 200;

/// Number of coins the top movers grid shows
pub const TOP_MOVERS_COUNT: usize = 12;

/// Trailing window for the detail price chart, in days
pub const DEFAULT_HISTORY_DAYS: u32 = 7;

/// Sparkline viewport width, in SVG user units
pub const SPARKLINE_WIDTH: f64 = 240.0;

/// Sparkline viewport height, in SVG user units
pub const SPARKLINE_HEIGHT: f64 = 64.0;

/// Inset between the sparkline geometry and the viewport edge
pub const SPARKLINE_PADDING: f64 = 4.0;

/// Decimal precision for mover prices
pub const MOVER_PRICE_DECIMALS: usize = 6;

/// Decimal precision for table and detail prices
pub const DETAIL_PRICE_DECIMALS: usize = 8;
