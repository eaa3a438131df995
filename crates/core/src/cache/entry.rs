use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Envelope for one cached payload: capture time plus the data itself.
///
/// Stored as JSON `{"at": <epoch millis>, "data": <payload>}`. Entries are
/// overwritten in place on every successful fetch and never expire; an entry
/// that no longer decodes is treated as absent by the fetch layer.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CacheEntry<T> {
    /// Capture time, milliseconds since the Unix epoch
    pub at: i64,

    /// The cached payload
    pub data: T,
}

impl<T> CacheEntry<T> {
    /// Wrap a payload captured now.
    pub fn capture(data: T) -> Self {
        Self {
            at: Utc::now().timestamp_millis(),
            data,
        }
    }
}

impl<T: Serialize> CacheEntry<T> {
    /// The JSON form persisted to the store.
    pub fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl<T: DeserializeOwned> CacheEntry<T> {
    /// Decode a persisted entry. Failure means the slot is unusable, which
    /// callers treat the same as an empty slot.
    pub fn decode(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_decode_round_trip() {
        let entry = CacheEntry {
            at: 1717000000000,
            data: vec![1.5, 2.5],
        };

        let encoded = entry.encode().unwrap();
        let decoded: CacheEntry<Vec<f64>> = CacheEntry::decode(&encoded).unwrap();
        assert_eq!(decoded.at, 1717000000000);
        assert_eq!(decoded.data, vec![1.5, 2.5]);
    }

    #[test]
    fn test_wire_shape() {
        let entry = CacheEntry { at: 42, data: 7 };
        assert_eq!(entry.encode().unwrap(), r#"{"at":42,"data":7}"#);
    }

    #[test]
    fn test_capture_stamps_current_time() {
        let before = Utc::now().timestamp_millis();
        let entry = CacheEntry::capture("payload");
        let after = Utc::now().timestamp_millis();
        assert!(entry.at >= before && entry.at <= after);
    }

    #[test]
    fn test_corrupt_entry_fails_decode() {
        assert!(CacheEntry::<i64>::decode("{\"at\": 1}").is_err());
        assert!(CacheEntry::<i64>::decode("not json").is_err());
    }
}
