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

//! Building color histograms from images.
//!
//! Pixels are visited in row-major order: rows top to bottom, and columns left to right
//! within each row. Every pixel is counted exactly once.

use std::path::Path;

use image::GenericImageView;
use image::Pixel;
use log::debug;

use crate::color::Rgb;
use crate::error::Error;
use crate::frequencies::TopKHistogram;

/// Counts the colors of every pixel in `image`.
///
/// Channels wider than 8 bits are reduced to their most significant byte, and alpha is
/// ignored.
pub fn scan_image<I>(image: &I) -> TopKHistogram<Rgb>
where
    I: GenericImageView,
    I::Pixel: Pixel<Subpixel = u8>,
{
    let (width, height) = image.dimensions();
    debug!("scanning {width}x{height} image");
    let mut histogram = TopKHistogram::new();
    for y in 0..height {
        for x in 0..width {
            histogram.add(Rgb::from(image.get_pixel(x, y).to_rgb()));
        }
    }
    histogram
}

/// Decodes `bytes` as an image in any supported format and counts its colors.
///
/// # Errors
///
/// Returns an [`ErrorKind::Decode`](crate::error::ErrorKind::Decode) error if the format is
/// not recognized or the data is corrupt.
pub fn scan_bytes(bytes: &[u8]) -> Result<TopKHistogram<Rgb>, Error> {
    let decoded = image::load_from_memory(bytes).map_err(Error::decode)?;
    debug!("decoded {} bytes as {:?}", bytes.len(), decoded.color());
    let histogram = match decoded {
        image::DynamicImage::ImageRgb8(buffer) => scan_image(&buffer),
        image::DynamicImage::ImageRgba8(buffer) => scan_image(&buffer),
        other if other.color().bytes_per_pixel() / other.color().channel_count() > 1 => {
            scan_wide(&other.into_rgb16())
        }
        other => scan_image(&other.into_rgb8()),
    };
    Ok(histogram)
}

/// Reads the file at `path` and counts the colors of the image it holds.
///
/// # Errors
///
/// Returns an [`ErrorKind::Io`](crate::error::ErrorKind::Io) error if the file cannot be read,
/// or an [`ErrorKind::Decode`](crate::error::ErrorKind::Decode) error if it is not an image.
pub fn scan_path(path: impl AsRef<Path>) -> Result<TopKHistogram<Rgb>, Error> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)
        .map_err(|err| Error::io("image file", err).with_context("path", path.display()))?;
    scan_bytes(&bytes).map_err(|err| err.with_context("path", path.display()))
}

fn scan_wide(image: &image::ImageBuffer<image::Rgb<u16>, Vec<u16>>) -> TopKHistogram<Rgb> {
    let (width, height) = image.dimensions();
    debug!("scanning {width}x{height} 16-bit image");
    let mut histogram = TopKHistogram::new();
    for y in 0..height {
        for x in 0..width {
            histogram.add(Rgb::from(*image.get_pixel(x, y)));
        }
    }
    histogram
}
