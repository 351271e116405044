use snip_core::ShortId;
use std::collections::HashMap;

/// The in-memory mapping from identifier to URL, plus the allocator
/// high-water mark.
///
/// `current_max` is the highest identifier ever observed, either handed
/// out by [`next_id`](Self::next_id) during normal operation or seen in
/// the log during replay. Every identifier in the map is `<= current_max`.
#[derive(Debug, Default)]
pub struct Index {
    entries: HashMap<u64, String>,
    current_max: u64,
}

impl Index {
    pub fn new() -> Self {
        Self::default()
    }

    /// The identifier the next `save` will be assigned.
    pub fn next_id(&self) -> ShortId {
        ShortId::new(self.current_max + 1)
    }

    /// Inserts a mapping and advances the high-water mark if needed.
    ///
    /// Replay may feed identifiers out of order or more than once; a
    /// later insert for the same identifier wins, and the high-water
    /// mark only ever moves up.
    pub fn insert(&mut self, id: ShortId, url: String) {
        self.entries.insert(id.value(), url);
        if id.value() > self.current_max {
            self.current_max = id.value();
        }
    }

    pub fn get(&self, id: ShortId) -> Option<&str> {
        self.entries.get(&id.value()).map(String::as_str)
    }

    pub fn current_max(&self) -> u64 {
        self.current_max
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

    #[test]
    fn empty_index_starts_at_zero() {
        let index = Index::new();
        assert_eq!(index.current_max(), 0);
        assert_eq!(index.next_id(), ShortId::new(1));
        assert!(index.is_empty());
    }

    #[test]
    fn insert_advances_high_water_mark() {
        let mut index = Index::new();
        index.insert(ShortId::new(1), "https://a".into());
        index.insert(ShortId::new(2), "https://b".into());
        assert_eq!(index.current_max(), 2);
        assert_eq!(index.next_id(), ShortId::new(3));
    }

    #[test]
    fn out_of_order_insert_keeps_max() {
        let mut index = Index::new();
        index.insert(ShortId::new(5), "https://a".into());
        index.insert(ShortId::new(2), "https://b".into());
        assert_eq!(index.current_max(), 5);
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn duplicate_insert_last_wins() {
        let mut index = Index::new();
        index.insert(ShortId::new(1), "https://old".into());
        index.insert(ShortId::new(1), "https://new".into());
        assert_eq!(index.get(ShortId::new(1)), Some("https://new"));
        assert_eq!(index.len(), 1);
        assert_eq!(index.current_max(), 1);
    }

    #[test]
    fn get_missing_is_none() {
        let index = Index::new();
        assert_eq!(index.get(ShortId::new(1)), None);
    }
}
