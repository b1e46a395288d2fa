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
use colorrank::frequencies::Row;

use crate::source::Source;

/// Renders one output line: `<index>: <source> <color>...`.
///
/// With `counts`, each color is followed by `=<pixel count>`.
pub fn render(index: usize, source: &Source, rows: &[Row<Rgb>], counts: bool) -> String {
    let mut line = format!("{index}: {source}");
    for row in rows {
        line.push(' ');
        line.push_str(&row.item().to_string());
        if counts {
            line.push('=');
            line.push_str(&row.count().to_string());
        }
    }
    line
}
