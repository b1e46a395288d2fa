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

//! Prints the most frequent colors of images read from files or HTTP(S) URLs.
//!
//! Sources are taken from the command line, or one per line from stdin when none are given.
//! Each source produces one line on stdout: `<index>: <source> <#RRGGBB>...`.

mod fetch;
mod report;
mod source;

use std::cell::OnceCell;
use std::io;
use std::io::Write;
use std::path::Path;

use anyhow::Context;
use anyhow::Result;
use clap::Parser;
use colorrank::color::Rgb;
use colorrank::frequencies::TopKHistogram;
use colorrank::lines::read_lines;
use colorrank::scan::scan_bytes;
use colorrank::scan::scan_path;
use log::debug;

use crate::fetch::Fetcher;
use crate::report::render;
use crate::source::Source;

#[derive(Debug, Parser)]
#[command(name = "colorrank", version, about = "Print the most frequent colors of images.")]
struct Args {
    /// Number of colors to print for each image.
    #[arg(short = 'n', long, default_value_t = 3)]
    top: usize,

    /// Print the pixel count next to each color.
    #[arg(long)]
    counts: bool,

    /// Image files or http(s):// URLs. Read one per line from stdin when omitted.
    sources: Vec<String>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    debug!("{args:?}");
    if let Err(err) = run(&args) {
        exit(err);
    }
}

fn run(args: &Args) -> Result<()> {
    let fetcher = OnceCell::new();
    let mut out = io::stdout().lock();
    let mut index = 0;
    let mut report = |raw: &str| -> Result<()> {
        index += 1;
        let source = Source::classify(raw);
        let mut histogram = load(&fetcher, &source)?;
        let rows = histogram.top_rows(args.top);
        writeln!(out, "{}", render(index, &source, &rows, args.counts))
            .context("failed to write to stdout")?;
        Ok(())
    };

    if !args.sources.is_empty() {
        for raw in &args.sources {
            report(raw)?;
        }
        return Ok(());
    }

    for line in read_lines(io::stdin().lock()) {
        let line = line.context("failed to read sources from stdin")?;
        let raw = line.trim();
        if !raw.is_empty() {
            report(raw)?;
        }
    }
    Ok(())
}

/// Scans `source`. The fetcher is only created once a URL shows up.
fn load(fetcher: &OnceCell<Fetcher>, source: &Source) -> Result<TopKHistogram<Rgb>> {
    debug!("loading {source}");
    let histogram = match source {
        Source::Url(url) => {
            let fetcher = match fetcher.get() {
                Some(fetcher) => fetcher,
                None => {
                    let created = Fetcher::new()?;
                    fetcher.get_or_init(|| created)
                }
            };
            let bytes = fetcher.fetch(url)?;
            scan_bytes(&bytes).with_context(|| format!("failed to decode image from {url}"))?
        }
        Source::Path(path) => scan_path(path)?,
    };
    debug!(
        "{source}: {} pixels, {} distinct colors",
        histogram.total_weight(),
        histogram.num_distinct()
    );
    Ok(histogram)
}

fn exit(err: anyhow::Error) -> ! {
    let program = std::env::args()
        .next()
        .as_deref()
        .and_then(|arg0| Path::new(arg0).file_stem())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "colorrank".to_string());
    eprintln!("{program}: {err:#}");
    std::process::exit(1);
}
