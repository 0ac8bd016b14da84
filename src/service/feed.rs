use parking_lot::RwLock;
use std::collections::VecDeque;
use zino::{Cluster, prelude::*};

/// A capped list of the most recent click events.
///
/// New events are prepended and the oldest entries are dropped once the
/// capacity is reached; a running counter keeps the overall total.
#[derive(Debug)]
pub struct ClickFeed {
    /// Most recent events, newest first.
    entries: VecDeque<Map>,
    /// Total number of recorded events.
    total: u64,
    /// Maximum number of retained events.
    capacity: usize,
}

impl ClickFeed {
    /// Creates a new instance.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            total: 0,
            capacity,
        }
    }

    /// Prepends an event, dropping the oldest entry beyond the capacity.
    pub fn push(&mut self, entry: Map) {
        self.entries.push_front(entry);
        self.entries.truncate(self.capacity);
        self.total += 1;
    }

    /// Returns the retained events and the running total.
    pub fn snapshot(&self) -> Map {
        let entries = self.entries.iter().cloned().collect::<Vec<_>>();
        let mut data = Map::new();
        data.upsert("total", self.total);
        data.upsert("entries", entries);
        data
    }
}

/// Records a click event in the shared feed.
pub fn record(entry: Map) {
    LIVE_FEED.write().push(entry);
}

/// Returns a snapshot of the shared feed.
pub fn snapshot() -> Map {
    LIVE_FEED.read().snapshot()
}

/// Shared feed of recent click events.
static LIVE_FEED: LazyLock<RwLock<ClickFeed>> = LazyLock::new(|| {
    let capacity = Cluster::config()
        .get_table("webshopguiden")
        .and_then(|config| config.get_usize("feed-capacity"))
        .unwrap_or(20);
    RwLock::new(ClickFeed::new(capacity))
});

#[cfg(test)]
mod tests {
    use super::ClickFeed;
    use zino::prelude::*;

    #[test]
    fn it_prepends_events_newest_first() {
        let mut feed = ClickFeed::new(10);
        feed.push(Map::from_entry("shop_id", 1));
        feed.push(Map::from_entry("shop_id", 2));

        let snapshot = feed.snapshot();
        let entries = snapshot.get_array("entries").unwrap();
        assert_eq!(entries.len(), 2);
        let newest = entries[0].as_object().unwrap();
        assert_eq!(newest.get_i64("shop_id"), Some(2));
        let oldest = entries[1].as_object().unwrap();
        assert_eq!(oldest.get_i64("shop_id"), Some(1));
    }

    #[test]
    fn it_caps_the_feed_but_keeps_counting() {
        let mut feed = ClickFeed::new(3);
        for i in 0..5 {
            feed.push(Map::from_entry("shop_id", i));
        }

        let snapshot = feed.snapshot();
        assert_eq!(snapshot.get_u64("total"), Some(5));
        let entries = snapshot.get_array("entries").unwrap();
        assert_eq!(entries.len(), 3);
        let newest = entries[0].as_object().unwrap();
        assert_eq!(newest.get_i64("shop_id"), Some(4));
        let oldest = entries[2].as_object().unwrap();
        assert_eq!(oldest.get_i64("shop_id"), Some(2));
    }
}
