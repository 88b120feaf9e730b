use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Error;

/// Serialize a value to the textual form kept in device storage.
pub fn encode<T: Serialize>(value: &T) -> Result<String, Error> {
    serde_json::to_string(value).map_err(|e| Error::MalformedData(e.to_string()))
}

/// Deserialize a value from its stored textual form.
pub fn decode<T: DeserializeOwned>(text: &str) -> Result<T, Error> {
    serde_json::from_str(text).map_err(|e| Error::MalformedData(e.to_string()))
}

/// Deserialize a stored value, falling back to the default when the key is
/// absent or the stored text is corrupt. Corrupt data must never propagate
/// a parse fault past this point.
pub fn decode_or_default<T: DeserializeOwned + Default>(text: Option<&str>) -> T {
    match text {
        Some(raw) => decode(raw).unwrap_or_default(),
        None => T::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn counts_round_trip_exactly() {
        let mut counts: HashMap<String, u32> = HashMap::new();
        counts.insert("art-1".to_string(), 42);
        counts.insert("مقال-عربي".to_string(), 7);
        counts.insert("k".to_string(), 0);

        let text = encode(&counts).unwrap();
        let back: HashMap<String, u32> = decode(&text).unwrap();
        assert_eq!(back, counts);
    }

    #[test]
    fn flags_round_trip_exactly() {
        let mut flags: HashMap<String, bool> = HashMap::new();
        flags.insert("a1".to_string(), true);
        flags.insert("معرف".to_string(), false);

        let text = encode(&flags).unwrap();
        let back: HashMap<String, bool> = decode(&text).unwrap();
        assert_eq!(back, flags);
    }

    #[test]
    fn empty_map_round_trips() {
        let counts: HashMap<String, u32> = HashMap::new();
        let text = encode(&counts).unwrap();
        let back: HashMap<String, u32> = decode(&text).unwrap();
        assert!(back.is_empty());
    }

    #[test]
    fn corrupt_text_decodes_to_default() {
        let back: HashMap<String, u32> = decode_or_default(Some("{not json"));
        assert!(back.is_empty());

        let back: HashMap<String, bool> = decode_or_default(Some("[1,2,3]"));
        assert!(back.is_empty());
    }

    #[test]
    fn absent_value_decodes_to_default() {
        let back: HashMap<String, u32> = decode_or_default(None);
        assert!(back.is_empty());
    }
}
