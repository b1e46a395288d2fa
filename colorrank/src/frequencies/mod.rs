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

//! Exact frequency histograms with cached top-K rankings.
//!
//! # Overview
//!
//! [`TopKHistogram`] counts every distinct item it is given and answers "which `k` items
//! were seen most often?". Counts are exact: every item ever added is retained, so the
//! structure is meant for bounded inputs such as the pixels of a single image.
//!
//! The ranking returned by [`TopKHistogram::top`] is cached and reused until the next
//! mutation. A later query for a smaller `k` is served by trimming the cached ranking.
//!
//! # Ties
//!
//! Items are ordered by descending count. Among items with equal counts the order is
//! unspecified, and when a group of tied items straddles the `k`-th position, any subset of
//! that group that fills the remaining slots may be returned. What is guaranteed is the
//! threshold property: every returned item has a count at least as large as every item that
//! was left out.
//!
//! # Examples
//!
//! ```
//! # use colorrank::frequencies::TopKHistogram;
//! let mut histogram = TopKHistogram::new();
//! for item in ["a", "b", "a", "c", "a", "b"] {
//!     histogram.add(item);
//! }
//! assert_eq!(histogram.top(2), &["a", "b"]);
//! assert_eq!(histogram.count(&"c"), 1);
//! ```

mod histogram;

pub use self::histogram::Row;
pub use self::histogram::TopKHistogram;
