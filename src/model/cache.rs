use std::collections::HashMap;
use std::sync::Arc;

/// Flat league-code to model-bytes map. Entries are inserted lazily and
/// never evicted; the cache holds the canonical copy and hands out shared
/// immutable views.
#[derive(Debug, Default)]
pub struct ModelCache {
    entries: HashMap<String, Arc<[u8]>>,
}

impl ModelCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, league_code: &str) -> Option<Arc<[u8]>> {
        self.entries.get(league_code).cloned()
    }

    pub fn insert(&mut self, league_code: String, bytes: Arc<[u8]>) {
        self.entries.insert(league_code, bytes);
    }

    pub fn contains(&self, league_code: &str) -> bool {
        self.entries.contains_key(league_code)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bytes(data: &[u8]) -> Arc<[u8]> {
        data.into()
    }

    #[test]
    fn starts_empty() {
        let cache = ModelCache::new();
        assert!(cache.is_empty());
        assert_eq!(cache.len(), 0);
        assert!(cache.get("E0").is_none());
    }

    #[test]
    fn insert_then_get_returns_same_bytes() {
        let mut cache = ModelCache::new();
        cache.insert("E0".to_string(), bytes(b"Hello"));

        let got = cache.get("E0").unwrap();
        assert_eq!(&got[..], b"Hello");
        assert!(cache.contains("E0"));
    }

    #[test]
    fn keys_are_independent() {
        let mut cache = ModelCache::new();
        cache.insert("E0".to_string(), bytes(&[1, 2, 3]));

        assert!(cache.contains("E0"));
        assert!(!cache.contains("E1"));
        assert!(cache.get("E1").is_none());
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn insert_overwrites_existing_entry() {
        // Last write wins, matching the accepted concurrent-miss race.
        let mut cache = ModelCache::new();
        cache.insert("E0".to_string(), bytes(&[1]));
        cache.insert("E0".to_string(), bytes(&[2]));

        assert_eq!(&cache.get("E0").unwrap()[..], &[2]);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn get_hands_out_shared_view() {
        let mut cache = ModelCache::new();
        cache.insert("E0".to_string(), bytes(b"model"));

        let a = cache.get("E0").unwrap();
        let b = cache.get("E0").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
