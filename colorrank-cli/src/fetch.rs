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

use anyhow::Context;
use anyhow::Result;
use anyhow::bail;
use hyper::Body;
use hyper::Client;
use hyper::Uri;
use hyper::client::HttpConnector;
use hyper_rustls::HttpsConnector;
use hyper_rustls::HttpsConnectorBuilder;
use log::debug;
use tokio::runtime::Runtime;

/// Blocking HTTP(S) fetcher backed by a current-thread runtime.
///
/// TLS certificates are verified against the bundled webpki roots.
pub struct Fetcher {
    runtime: Runtime,
    client: Client<HttpsConnector<HttpConnector>>,
}

impl Fetcher {
    pub fn new() -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .context("failed to start the async runtime")?;
        let connector = HttpsConnectorBuilder::new()
            .with_webpki_roots()
            .https_or_http()
            .enable_http1()
            .build();
        Ok(Self {
            runtime,
            client: Client::builder().build::<_, Body>(connector),
        })
    }

    /// Downloads the body of `url`. Redirects are not followed and are reported as errors.
    pub fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        self.runtime.block_on(self.get(url))
    }

    async fn get(&self, url: &str) -> Result<Vec<u8>> {
        let uri: Uri = url.parse().with_context(|| format!("invalid URL {url}"))?;
        let supported = uri.scheme_str().is_some_and(|scheme| {
            scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https")
        });
        if !supported {
            bail!("unsupported URL {url}: expected an http:// or https:// URL");
        }

        debug!("GET {uri}");
        let resp = self
            .client
            .get(uri)
            .await
            .with_context(|| format!("failed to fetch {url}"))?;
        let status = resp.status();
        if !status.is_success() {
            bail!("failed to fetch {url}: server returned {status}");
        }

        let body = hyper::body::to_bytes(resp.into_body())
            .await
            .with_context(|| format!("failed to read response body of {url}"))?;
        debug!("fetched {} bytes from {url}", body.len());
        Ok(body.to_vec())
    }
}
