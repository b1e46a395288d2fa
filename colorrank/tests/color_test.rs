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

use colorrank::color::Rgb;
use colorrank::error::ErrorKind;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn test_parse_valid() {
    let cases = [
        ("#010101", Rgb::new(0x01, 0x01, 0x01)),
        ("#AABBCC", Rgb::new(0xAA, 0xBB, 0xCC)),
        ("#ab0194", Rgb::new(0xAB, 0x01, 0x94)),
        ("#FF0000", Rgb::new(0xFF, 0, 0)),
        ("#00FE00", Rgb::new(0, 0xFE, 0)),
        ("#0000BB", Rgb::new(0, 0, 0xBB)),
        ("#aBcDeF", Rgb::new(0xAB, 0xCD, 0xEF)),
    ];
    for (input, expected) in cases {
        let parsed = Rgb::parse(input).unwrap();
        assert_eq!(parsed, expected, "input {input}");
    }
}

#[test]
fn test_parse_red() {
    let red: Rgb = "#ff0000".parse().unwrap();
    assert_eq!((red.r(), red.g(), red.b()), (255, 0, 0));
    assert_eq!(red.to_string(), "#FF0000");
}

#[test]
fn test_parse_invalid() {
    let cases = [
        "", "#", "invalid", "1234", "9123", "#zz0000", "#12345", "#1234567", "ff0000#",
        "123456", " #123456", "#123456 ", "#12 456", "#+12345", "#ééé",
    ];
    for input in cases {
        let err = Rgb::parse(input).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidFormat, "input {input:?}");
        assert!(
            err.message().contains("#RRGGBB"),
            "unexpected message: {err}"
        );
    }
}

#[test]
fn test_format_is_uppercase() {
    assert_eq!(Rgb::new(0xAB, 0xCD, 0xEF).to_string(), "#ABCDEF");
    assert_eq!(Rgb::new(0, 0, 0).to_string(), "#000000");
    assert_eq!(Rgb::default().to_string(), "#000000");
}

#[test]
fn test_format_then_parse() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut samples: Vec<[u8; 3]> = vec![[0, 0, 0], [255, 255, 255], [0x0F, 0xF0, 0x80]];
    for _ in 0..1000 {
        samples.push([rng.random(), rng.random(), rng.random()]);
    }
    for bytes in samples {
        let color = Rgb::from(bytes);
        let parsed: Rgb = color.to_string().parse().unwrap();
        assert_eq!(parsed, color);
        assert_eq!(<[u8; 3]>::from(parsed), bytes);
    }
}

#[test]
fn test_from_image_pixels() {
    assert_eq!(Rgb::from(image::Rgb([1u8, 2, 3])), Rgb::new(1, 2, 3));
    assert_eq!(Rgb::from(image::Rgba([1u8, 2, 3, 0])), Rgb::new(1, 2, 3));
    assert_eq!(
        Rgb::from(image::Rgb([0x1234u16, 0xFF00, 0x00FF])),
        Rgb::new(0x12, 0xFF, 0x00)
    );
    assert_eq!(
        Rgb::from(image::Rgba([0xABCDu16, 0, 0xFFFF, 0x8000])),
        Rgb::new(0xAB, 0x00, 0xFF)
    );
}
