//! Approximate min-priority queue built from fixed-width cost buckets.
//!
//! Entries with priority `p` live in bucket `p / width`. Popping walks the
//! buckets upward to the first non-empty one and linearly scans it for the
//! smallest exact priority, so the result is always a true minimum. The cost
//! per pop is not logarithmic: a pop may scan every empty bucket below the
//! minimum plus every entry of the minimum's bucket. That is fine for small
//! clustered edge weights such as the maze's 1 and 1000 and would degrade
//! badly with wide, sparse priorities.

use std::collections::HashMap;
use std::hash::Hash;

/// Bucket width used by the maze search
pub const DEFAULT_BUCKET_WIDTH: u64 = 100;

#[derive(Debug, Clone)]
pub struct BucketQueue<T> {
    width: u64,
    buckets: Vec<HashMap<T, u64>>,
    /// Bucket index of every queued item
    location: HashMap<T, usize>,
    /// No bucket below this index holds entries
    lowest: usize,
}

impl<T> BucketQueue<T>
where
    T: Copy + Eq + Hash + Ord,
{
    /// # Panics
    ///
    /// If `width` is zero.
    pub fn new(width: u64) -> Self {
        assert!(width > 0, "bucket width must be positive");
        Self {
            width,
            buckets: Vec::new(),
            location: HashMap::new(),
            lowest: 0,
        }
    }

    fn bucket_index(&self, priority: u64) -> usize {
        usize::try_from(priority / self.width).unwrap_or(usize::MAX)
    }

    /// Queue `item` at `priority`, replacing any entry it already has.
    ///
    /// Callers only ever lower an item's priority; raising it is a logic
    /// error and is caught in debug builds.
    pub fn insert_or_update(&mut self, item: T, priority: u64) {
        if let Some(old) = self.remove(&item) {
            debug_assert!(
                priority <= old,
                "priority of a queued item raised from {old} to {priority}"
            );
        }

        let index = self.bucket_index(priority);
        if index >= self.buckets.len() {
            self.buckets.resize_with(index + 1, HashMap::new);
        }
        self.buckets[index].insert(item, priority);
        self.location.insert(item, index);
        self.lowest = self.lowest.min(index);
    }

    /// Drop `item` from the queue, returning the priority it had
    pub fn remove(&mut self, item: &T) -> Option<u64> {
        let index = self.location.remove(item)?;
        self.buckets[index].remove(item)
    }

    /// Remove and return the entry with the smallest priority.
    ///
    /// Equal priorities come out in `T`'s order.
    pub fn pop_min(&mut self) -> Option<(T, u64)> {
        while let Some(bucket) = self.buckets.get(self.lowest) {
            let min = bucket
                .iter()
                .min_by(|a, b| a.1.cmp(b.1).then_with(|| a.0.cmp(b.0)))
                .map(|(&item, &priority)| (item, priority));

            match min {
                Some((item, priority)) => {
                    self.remove(&item);
                    return Some((item, priority));
                }
                None => self.lowest += 1,
            }
        }
        None
    }

    /// Smallest priority currently queued, without removing it
    pub fn peek_priority(&self) -> Option<u64> {
        self.buckets[self.lowest.min(self.buckets.len())..]
            .iter()
            .find_map(|bucket| bucket.values().min().copied())
    }

    pub fn priority_of(&self, item: &T) -> Option<u64> {
        let index = self.location.get(item)?;
        self.buckets[*index].get(item).copied()
    }

    pub fn contains(&self, item: &T) -> bool {
        self.location.contains_key(item)
    }

    pub fn len(&self) -> usize {
        self.location.len()
    }

    pub fn is_empty(&self) -> bool {
        self.location.is_empty()
    }

    /// Number of entries in each bucket, lowest bucket first
    pub fn occupancy(&self) -> Vec<usize> {
        self.buckets.iter().map(HashMap::len).collect()
    }
}

impl<T> Default for BucketQueue<T>
where
    T: Copy + Eq + Hash + Ord,
{
    fn default() -> Self {
        Self::new(DEFAULT_BUCKET_WIDTH)
    }
}
