use serde::{Deserialize, Serialize};

/// One sample of a price series: epoch-millisecond timestamp and price.
///
/// Serialized as a two-element JSON array, matching the history endpoint's
/// `[[ts, price], ...]` wire shape.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint(pub i64, pub f64);

impl HistoryPoint {
    /// Epoch-millisecond timestamp of the sample.
    pub fn timestamp(&self) -> i64 {
        self.0
    }

    /// Price at that instant.
    pub fn price(&self) -> f64 {
        self.1
    }
}

/// Chronologically ordered price history for one coin.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PriceHistory {
    /// Samples in ascending timestamp order
    pub points: Vec<HistoryPoint>,
}

impl PriceHistory {
    /// The price series alone, in sample order. Feeds the sparkline.
    pub fn prices(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.price()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_deserialization() {
        let json = r#"{"points": [[1717000000000, 67234.1], [1717086400000, 68102.9]]}"#;

        let history: PriceHistory = serde_json::from_str(json).unwrap();
        assert_eq!(history.points.len(), 2);
        assert_eq!(history.points[0].timestamp(), 1717000000000);
        assert_eq!(history.points[1].price(), 68102.9);
        assert_eq!(history.prices(), vec![67234.1, 68102.9]);
    }

    #[test]
    fn test_empty_history() {
        let json = r#"{"points": []}"#;

        let history: PriceHistory = serde_json::from_str(json).unwrap();
        assert!(history.prices().is_empty());
    }
}
