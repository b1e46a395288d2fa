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

//! # colorrank
//!
//! Exact color histograms with cached top-K rankings.
//!
//! The heart of the crate is [`TopKHistogram`](frequencies::TopKHistogram), which counts
//! arbitrary hashable items and reports the most frequent ones. The remaining modules feed it:
//!
//! * [`color`]: the [`Rgb`](color::Rgb) item type and its `#RRGGBB` codec.
//! * [`scan`]: decode an image and count the color of every pixel.
//! * [`lines`]: read newline-delimited sources, such as a list of image URLs.
//!
//! # Examples
//!
//! ```
//! # use colorrank::color::Rgb;
//! # use colorrank::frequencies::TopKHistogram;
//! let red = Rgb::new(255, 0, 0);
//! let blue = Rgb::new(0, 0, 255);
//! let mut histogram: TopKHistogram<Rgb> = [red, blue, red].into_iter().collect();
//! assert_eq!(histogram.top(1), &[red]);
//! ```

#![deny(missing_docs)]

pub mod color;
pub mod error;
pub mod frequencies;
pub mod lines;
pub mod scan;
