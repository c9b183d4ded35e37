//! # Token Frequency Counting

use hashbrown::HashMap;

#[derive(Debug, Clone, Copy)]
struct CountSlot {
    count: u64,

    /// Rank of the token's first observation.
    first_seen: u64,
}

/// Accumulates token occurrence counts across observed token sequences.
///
/// The map itself is unordered; ranked order is produced on demand by
/// [`TokenCounter::most_common`], which breaks count ties by
/// first-insertion order. The tie-break decides which tokens survive
/// truncation to a target size, so it is part of the contract.
#[derive(Debug, Clone, Default)]
pub struct TokenCounter {
    counts: HashMap<String, CountSlot>,
    total: u64,
}

impl TokenCounter {
    /// Create a new empty counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Update counts from a token sequence.
    ///
    /// Every occurrence increments independently, duplicates within the
    /// sequence included.
    pub fn observe<I>(
        &mut self,
        tokens: I,
    ) where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for token in tokens {
            let first_seen = self.counts.len() as u64;
            let slot = self
                .counts
                .entry_ref(token.as_ref())
                .or_insert(CountSlot {
                    count: 0,
                    first_seen,
                });
            slot.count += 1;
            self.total += 1;
        }
    }

    /// The n highest-count entries, as `(token, count)` pairs.
    ///
    /// Ties are broken by first-insertion order.
    pub fn most_common(
        &self,
        n: usize,
    ) -> Vec<(String, u64)> {
        let mut entries: Vec<(&String, &CountSlot)> = self.counts.iter().collect();
        entries.sort_by(|a, b| {
            b.1.count
                .cmp(&a.1.count)
                .then(a.1.first_seen.cmp(&b.1.first_seen))
        });
        entries.truncate(n);
        entries
            .into_iter()
            .map(|(token, slot)| (token.clone(), slot.count))
            .collect()
    }

    /// The count observed for a token.
    pub fn count(
        &self,
        token: &str,
    ) -> u64 {
        self.counts.get(token).map_or(0, |slot| slot.count)
    }

    /// The grand total of observations.
    pub fn total_observations(&self) -> u64 {
        self.total
    }

    /// The number of distinct tokens observed.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check if no tokens have been observed.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
