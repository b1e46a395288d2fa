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

//! Newline-delimited text input.

use std::io::BufRead;

use crate::error::Error;

/// Iterator over the lines of a buffered reader.
///
/// Each item is one line without its trailing `\n` or `\r\n`. The iterator ends at end of
/// stream, or right after yielding the first read error.
#[derive(Debug)]
pub struct LineReader<R> {
    reader: R,
    buf: String,
    done: bool,
}

impl<R: BufRead> LineReader<R> {
    /// Creates a line reader over `reader`.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: String::new(),
            done: false,
        }
    }

    /// Consumes the line reader, returning the underlying reader.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: BufRead> Iterator for LineReader<R> {
    type Item = Result<String, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        self.buf.clear();
        match self.reader.read_line(&mut self.buf) {
            Ok(0) => {
                self.done = true;
                None
            }
            Ok(_) => {
                let line = self.buf.strip_suffix('\n').unwrap_or(self.buf.as_str());
                let line = line.strip_suffix('\r').unwrap_or(line);
                Some(Ok(line.to_string()))
            }
            Err(err) => {
                self.done = true;
                Some(Err(Error::io("line", err)))
            }
        }
    }
}

impl<R: BufRead> std::iter::FusedIterator for LineReader<R> {}

/// Returns an iterator over the lines of `reader`.
pub fn read_lines<R: BufRead>(reader: R) -> LineReader<R> {
    LineReader::new(reader)
}
