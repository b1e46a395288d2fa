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

use std::collections::HashSet;

use colorrank::color::Rgb;
use colorrank::frequencies::TopKHistogram;
use googletest::prelude::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn histogram_of(items: &[char]) -> TopKHistogram<char> {
    items.iter().copied().collect()
}

/// Checks the size law and the threshold law for `top(k)`.
fn assert_valid_top(histogram: &mut TopKHistogram<char>, k: usize) {
    let top = histogram.top(k).to_vec();
    assert_eq!(top.len(), k.min(histogram.num_distinct()));

    let selected: HashSet<char> = top.iter().copied().collect();
    assert_eq!(selected.len(), top.len(), "duplicate item in {top:?}");

    let counts: Vec<u64> = top.iter().map(|item| histogram.count(item)).collect();
    assert!(
        counts.windows(2).all(|w| w[0] >= w[1]),
        "not in descending order: {counts:?}"
    );

    let min_selected = counts.last().copied().unwrap_or(u64::MAX);
    for (item, count) in histogram.iter() {
        if !selected.contains(item) {
            assert!(
                count <= min_selected,
                "{item:?} with count {count} was left out of {top:?}"
            );
        }
    }
}

#[test]
fn test_empty() {
    let mut histogram = TopKHistogram::<char>::new();
    assert!(histogram.is_empty());
    assert_eq!(histogram.num_distinct(), 0);
    assert_eq!(histogram.total_weight(), 0);
    assert_eq!(histogram.count(&'a'), 0);
    assert!(histogram.top(0).is_empty());
    assert!(histogram.top(3).is_empty());
    assert!(histogram.top_rows(3).is_empty());
}

#[gtest]
fn test_counts_match_additions() {
    let histogram = histogram_of(&['a', 'b', 'a', 'c', 'a', 'b']);
    expect_that!(histogram.count(&'a'), eq(3u64));
    expect_that!(histogram.count(&'b'), eq(2u64));
    expect_that!(histogram.count(&'c'), eq(1u64));
    expect_that!(histogram.count(&'d'), eq(0u64));
    expect_that!(histogram.num_distinct(), eq(3usize));
    expect_that!(histogram.total_weight(), eq(6u64));
    expect_that!(histogram.is_empty(), eq(false));
}

#[test]
fn test_tie_at_the_boundary() {
    let mut histogram = histogram_of(&['A', 'A', 'A', 'B', 'B', 'B', 'C']);

    let top2: HashSet<char> = histogram.top(2).iter().copied().collect();
    assert_eq!(top2, HashSet::from(['A', 'B']));

    assert!(histogram.top(0).is_empty());

    let top5 = histogram.top(5).to_vec();
    assert_eq!(top5.len(), 3);
    assert_eq!(top5[2], 'C');
    let leaders: HashSet<char> = top5[..2].iter().copied().collect();
    assert_eq!(leaders, HashSet::from(['A', 'B']));
}

#[test]
fn test_partial_tie_group_returns_any_member() {
    let mut histogram = histogram_of(&['x', 'x', 'x', 'a', 'a', 'b', 'b', 'c', 'c']);
    let top = histogram.top(2).to_vec();
    assert_eq!(top[0], 'x');
    assert!(['a', 'b', 'c'].contains(&top[1]), "unexpected {top:?}");
    assert_valid_top(&mut histogram, 2);
}

#[test]
fn test_top_larger_than_distinct() {
    let mut histogram = histogram_of(&['a', 'b', 'b']);
    assert_eq!(histogram.top(10), &['b', 'a']);
    assert_eq!(histogram.top(usize::MAX), &['b', 'a']);
}

#[test]
fn test_repeated_queries_agree() {
    let mut histogram = histogram_of(&['a', 'b', 'c', 'c', 'd', 'd', 'e', 'e', 'e']);
    let first: Vec<u64> = histogram.top_rows(3).iter().map(|row| row.count()).collect();
    let second: Vec<u64> = histogram.top_rows(3).iter().map(|row| row.count()).collect();
    assert_eq!(first, second);
    assert_eq!(first, vec![3, 2, 2]);
}

#[test]
fn test_smaller_query_trims_cached_ranking() {
    let mut histogram = histogram_of(&['a', 'a', 'a', 'b', 'b', 'c']);
    assert_eq!(histogram.top(3), &['a', 'b', 'c']);
    assert_eq!(histogram.top(1), &['a']);
    assert_eq!(histogram.top(2), &['a', 'b']);
    assert_eq!(histogram.top(3), &['a', 'b', 'c']);
}

#[test]
fn test_larger_query_recomputes() {
    let mut histogram = histogram_of(&['a', 'a', 'a', 'b', 'b', 'c']);
    assert_eq!(histogram.top(1), &['a']);
    assert_eq!(histogram.top(3), &['a', 'b', 'c']);
}

#[test]
fn test_add_invalidates_ranking() {
    let mut histogram = histogram_of(&['a', 'a', 'b', 'b', 'c']);
    let top2: HashSet<char> = histogram.top(2).iter().copied().collect();
    assert_eq!(top2, HashSet::from(['a', 'b']));

    histogram.add('c');
    histogram.add('c');
    assert_eq!(histogram.top(2)[0], 'c');
    assert!(histogram.top(2).contains(&'c'));

    histogram.add('d');
    assert_eq!(histogram.top(4).len(), 4);
    assert_eq!(histogram.top(4)[3], 'd');
}

#[test]
fn test_add_after_empty_ranking() {
    let mut histogram = TopKHistogram::<char>::new();
    assert!(histogram.top(2).is_empty());
    histogram.add('z');
    assert_eq!(histogram.top(2), &['z']);
}

#[test]
fn test_add_with_count() {
    let mut histogram = TopKHistogram::new();
    histogram.add_with_count('a', 5);
    histogram.add_with_count('b', 7);
    histogram.add_with_count('c', 0);
    assert_eq!(histogram.count(&'a'), 5);
    assert_eq!(histogram.count(&'c'), 0);
    assert_eq!(histogram.num_distinct(), 2);
    assert_eq!(histogram.total_weight(), 12);
    assert_eq!(histogram.top(2), &['b', 'a']);

    // Zero-count additions leave the ranking alone.
    histogram.add_with_count('a', 0);
    assert_eq!(histogram.top(2), &['b', 'a']);

    histogram.add_with_count('a', 3);
    assert_eq!(histogram.top(2), &['a', 'b']);
}

#[test]
fn test_merge() {
    let mut left = histogram_of(&['a', 'b', 'b']);
    let right = histogram_of(&['a', 'a', 'c']);
    assert_eq!(left.top(1), &['b']);

    left.merge(&right);
    assert_eq!(left.count(&'a'), 3);
    assert_eq!(left.count(&'b'), 2);
    assert_eq!(left.count(&'c'), 1);
    assert_eq!(left.total_weight(), 6);
    assert_eq!(left.top(1), &['a']);
}

#[test]
fn test_reset() {
    let mut histogram = histogram_of(&['a', 'b']);
    assert_eq!(histogram.top(2).len(), 2);
    histogram.reset();
    assert!(histogram.is_empty());
    assert_eq!(histogram.total_weight(), 0);
    assert!(histogram.top(2).is_empty());
}

#[test]
fn test_with_capacity_starts_empty() {
    let mut histogram = TopKHistogram::<char>::with_capacity(64);
    assert!(histogram.is_empty());
    assert!(histogram.top(1).is_empty());
    histogram.extend(['q', 'r', 'q']);
    assert_eq!(histogram.num_distinct(), 2);
    assert_eq!(histogram.top(1), &['q']);
}

#[test]
fn test_top_rows_into_items() {
    let mut histogram = histogram_of(&['m', 'n', 'n', 'o', 'o', 'o']);
    let items: Vec<char> = histogram
        .top_rows(2)
        .into_iter()
        .map(|row| row.into_item())
        .collect();
    assert_eq!(items, vec!['o', 'n']);
}

#[test]
fn test_top_rows_render() {
    let mut histogram = TopKHistogram::new();
    histogram.add_with_count(Rgb::new(255, 0, 0), 3);
    histogram.add_with_count(Rgb::new(0, 255, 0), 2);
    histogram.add_with_count(Rgb::new(0, 0, 255), 1);
    let rendered = histogram
        .top_rows(3)
        .iter()
        .map(|row| format!("{}={}", row.item(), row.count()))
        .collect::<Vec<_>>()
        .join(" ");
    insta::assert_snapshot!(rendered, @"#FF0000=3 #00FF00=2 #0000FF=1");
}

#[test]
fn test_random_streams_satisfy_ranking_laws() {
    let mut rng = StdRng::seed_from_u64(9001);
    let alphabet: Vec<char> = ('a'..='p').collect();
    for _ in 0..50 {
        let mut histogram = TopKHistogram::new();
        let mut expected = std::collections::HashMap::new();
        for _ in 0..rng.random_range(0..200) {
            // Skew toward the front of the alphabet so ties and gaps both occur.
            let first = rng.random_range(0..alphabet.len());
            let second = rng.random_range(0..alphabet.len());
            let item = alphabet[first.min(second)];
            histogram.add(item);
            *expected.entry(item).or_insert(0u64) += 1;

            if rng.random_bool(0.1) {
                let k = rng.random_range(0..=alphabet.len() + 2);
                assert_valid_top(&mut histogram, k);
            }
        }
        for (item, count) in &expected {
            assert_eq!(histogram.count(item), *count);
        }
        for k in 0..=alphabet.len() + 2 {
            assert_valid_top(&mut histogram, k);
        }
    }
}
