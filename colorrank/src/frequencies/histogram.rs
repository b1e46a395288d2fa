// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Frequency histogram implementation.

use std::collections::HashMap;
use std::hash::Hash;

use log::trace;

/// Result row for ranking queries.
///
/// Each row pairs an item with its exact count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row<T> {
    item: T,
    count: u64,
}

impl<T> Row<T> {
    /// Returns the item value.
    pub fn item(&self) -> &T {
        &self.item
    }

    /// Returns the number of times the item was added.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Consumes the row and returns the item value.
    pub fn into_item(self) -> T {
        self.item
    }
}

/// Cached ranking state.
///
/// A valid ranking with no items is meaningful (for example `top(0)`), so staleness is its
/// own state rather than an empty vector.
#[derive(Debug, Clone)]
enum Ranking<T> {
    Stale,
    Valid { items: Vec<T> },
}

impl<T> Ranking<T> {
    /// Returns true if this ranking can answer a query for `len` items.
    fn covers(&self, len: usize) -> bool {
        match self {
            Ranking::Stale => false,
            Ranking::Valid { items } => items.len() >= len,
        }
    }

    fn prefix(&self, len: usize) -> &[T] {
        match self {
            Ranking::Stale => &[],
            Ranking::Valid { items } => &items[..len.min(items.len())],
        }
    }
}

/// Exact histogram over items of type `T` with a cached top-K ranking.
///
/// See [`crate::frequencies`] for an overview and the tie semantics of the ranking.
#[derive(Debug, Clone)]
pub struct TopKHistogram<T> {
    counts: HashMap<T, u64>,
    total_weight: u64,
    ranking: Ranking<T>,
}

impl<T> Default for TopKHistogram<T> {
    fn default() -> Self {
        Self {
            counts: HashMap::new(),
            total_weight: 0,
            ranking: Ranking::Stale,
        }
    }
}

impl<T: Eq + Hash> TopKHistogram<T> {
    /// Creates an empty histogram.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty histogram with room for at least `capacity` distinct items.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            counts: HashMap::with_capacity(capacity),
            ..Self::default()
        }
    }

    /// Returns true if nothing has been added.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Returns the number of distinct items.
    pub fn num_distinct(&self) -> usize {
        self.counts.len()
    }

    /// Returns the total number of additions, summed over all items.
    pub fn total_weight(&self) -> u64 {
        self.total_weight
    }

    /// Returns the exact count for an item, or zero if it was never added.
    pub fn count(&self, item: &T) -> u64 {
        self.counts.get(item).copied().unwrap_or(0)
    }

    /// Returns an iterator over `(item, count)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&T, u64)> {
        self.counts.iter().map(|(item, count)| (item, *count))
    }

    /// Adds one occurrence of `item`.
    pub fn add(&mut self, item: T) {
        self.add_with_count(item, 1);
    }

    /// Adds `count` occurrences of `item`.
    ///
    /// A count of zero is a no-op and leaves any cached ranking in place.
    pub fn add_with_count(&mut self, item: T, count: u64) {
        if count == 0 {
            return;
        }
        *self.counts.entry(item).or_insert(0) += count;
        self.total_weight += count;
        self.ranking = Ranking::Stale;
    }

    /// Adds every count of `other` into this histogram.
    pub fn merge(&mut self, other: &Self)
    where
        T: Clone,
    {
        for (item, count) in other.iter() {
            self.add_with_count(item.clone(), count);
        }
    }

    /// Resets the histogram to an empty state.
    pub fn reset(&mut self) {
        self.counts.clear();
        self.total_weight = 0;
        self.ranking = Ranking::Stale;
    }

    /// Returns the `k` most frequent items in descending order of count.
    ///
    /// The result has `min(k, self.num_distinct())` items. Items with equal counts appear in
    /// unspecified order, and when a tied group does not fit entirely, an unspecified subset
    /// of it is returned.
    ///
    /// The ranking is cached until the next mutation; asking again for the same or a smaller
    /// `k` reuses it.
    pub fn top(&mut self, k: usize) -> &[T]
    where
        T: Clone,
    {
        let len = k.min(self.counts.len());
        if !self.ranking.covers(len) {
            trace!(
                "recomputing top-{len} ranking over {} distinct items",
                self.counts.len()
            );
            self.ranking = Ranking::Valid {
                items: rank(&self.counts, len),
            };
        }
        self.ranking.prefix(len)
    }

    /// Returns the same ranking as [`TopKHistogram::top`], paired with counts.
    pub fn top_rows(&mut self, k: usize) -> Vec<Row<T>>
    where
        T: Clone,
    {
        let len = self.top(k).len();
        self.ranking
            .prefix(len)
            .iter()
            .map(|item| Row {
                item: item.clone(),
                count: self.count(item),
            })
            .collect()
    }
}

impl<T: Eq + Hash> Extend<T> for TopKHistogram<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<T: Eq + Hash> FromIterator<T> for TopKHistogram<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut histogram = Self::new();
        histogram.extend(iter);
        histogram
    }
}

/// Builds a ranking of `len` items by bounded insertion.
///
/// A candidate enters only if it beats the current last entry, and is placed after every
/// entry with a count at least as large. The entry pushed past `len` is evicted.
fn rank<T: Clone>(counts: &HashMap<T, u64>, len: usize) -> Vec<T> {
    if len == 0 {
        return Vec::new();
    }
    let mut ranked: Vec<(&T, u64)> = Vec::with_capacity(len + 1);
    for (item, &count) in counts {
        if ranked.len() == len && count <= ranked[len - 1].1 {
            continue;
        }
        let pos = ranked.partition_point(|&(_, ranked_count)| ranked_count >= count);
        ranked.insert(pos, (item, count));
        ranked.truncate(len);
    }
    ranked.into_iter().map(|(item, _)| item.clone()).collect()
}
