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

//! 24-bit RGB colors and their `#RRGGBB` text form.
//!
//! ```
//! # use colorrank::color::Rgb;
//! let red: Rgb = "#ff0000".parse().unwrap();
//! assert_eq!((red.r(), red.g(), red.b()), (255, 0, 0));
//! assert_eq!(red.to_string(), "#FF0000");
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A 24-bit color, 8 bits each of red, green, and blue.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rgb {
    r: u8,
    g: u8,
    b: u8,
}

impl Rgb {
    /// Creates a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Returns the red channel.
    pub const fn r(&self) -> u8 {
        self.r
    }

    /// Returns the green channel.
    pub const fn g(&self) -> u8 {
        self.g
    }

    /// Returns the blue channel.
    pub const fn b(&self) -> u8 {
        self.b
    }

    /// Parses a `#RRGGBB` string. Hex digits are case-insensitive.
    ///
    /// # Errors
    ///
    /// Returns an [`ErrorKind::InvalidFormat`](crate::error::ErrorKind::InvalidFormat) error if
    /// the input is not exactly `#` followed by six hex digits.
    pub fn parse(s: &str) -> Result<Self, Error> {
        let digits = match s.as_bytes() {
            [b'#', digits @ ..] if digits.len() == 6 => digits,
            _ => return Err(Error::invalid_format(s)),
        };
        let channel = |i: usize| -> Result<u8, Error> {
            match (hex_value(digits[i]), hex_value(digits[i + 1])) {
                (Some(hi), Some(lo)) => Ok((hi << 4) | lo),
                _ => Err(Error::invalid_format(s)),
            }
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Reduces 16-bit channels to their most significant byte.
    pub const fn from_rgb16(r: u16, g: u16, b: u16) -> Self {
        Self::new((r >> 8) as u8, (g >> 8) as u8, (b >> 8) as u8)
    }
}

fn hex_value(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'a'..=b'f' => Some(digit - b'a' + 10),
        b'A'..=b'F' => Some(digit - b'A' + 10),
        _ => None,
    }
}

impl FromStr for Rgb {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(color: Rgb) -> Self {
        [color.r, color.g, color.b]
    }
}

impl From<image::Rgb<u8>> for Rgb {
    fn from(pixel: image::Rgb<u8>) -> Self {
        Self::from(pixel.0)
    }
}

// Alpha is dropped.
impl From<image::Rgba<u8>> for Rgb {
    fn from(pixel: image::Rgba<u8>) -> Self {
        let [r, g, b, _] = pixel.0;
        Self::new(r, g, b)
    }
}

impl From<image::Rgb<u16>> for Rgb {
    fn from(pixel: image::Rgb<u16>) -> Self {
        let [r, g, b] = pixel.0;
        Self::from_rgb16(r, g, b)
    }
}

impl From<image::Rgba<u16>> for Rgb {
    fn from(pixel: image::Rgba<u16>) -> Self {
        let [r, g, b, _] = pixel.0;
        Self::from_rgb16(r, g, b)
    }
}
