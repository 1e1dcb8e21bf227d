use super::{AsyncTransport, Method, RawResponse, RequestParts, SyncTransport, TransportError};
use async_trait::async_trait;
use std::env;
use std::time::Duration;

// Minimal production-friendly defaults (env-overridable).
fn timeout_override(default: Duration) -> Duration {
    env::var("WAVECAST_HTTP_TIMEOUT_SECS")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .map(Duration::from_secs)
        .unwrap_or(default)
}

fn pool_max_idle_per_host() -> usize {
    env::var("WAVECAST_HTTP_POOL_MAX_IDLE_PER_HOST")
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(32)
}

fn pool_idle_timeout() -> Duration {
    Duration::from_secs(
        env::var("WAVECAST_HTTP_POOL_IDLE_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(90),
    )
}

/// Reactor-driven transport backed by a pooled `reqwest::Client`.
pub struct AsyncHttpTransport {
    client: reqwest::Client,
}

impl AsyncHttpTransport {
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        let mut builder = reqwest::Client::builder()
            .timeout(timeout_override(timeout))
            .pool_max_idle_per_host(pool_max_idle_per_host())
            .pool_idle_timeout(Some(pool_idle_timeout()));

        if let Ok(proxy_url) = env::var("WAVECAST_PROXY_URL") {
            if let Ok(proxy) = reqwest::Proxy::all(&proxy_url) {
                builder = builder.proxy(proxy);
            }
        }

        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait]
impl AsyncTransport for AsyncHttpTransport {
    async fn request(&self, parts: RequestParts) -> Result<RawResponse, TransportError> {
        let mut req = match parts.method {
            Method::Get => self.client.get(parts.url),
            Method::Post => self.client.post(parts.url),
        };

        for (name, value) in &parts.headers {
            req = req.header(name, value);
        }
        req = req.query(&parts.query);
        if let Some(body) = parts.body {
            req = req.body(body);
        }

        let response = req.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(RawResponse { status, body })
    }
}

/// Blocking transport backed by a pooled `reqwest::blocking::Client`.
pub struct BlockingHttpTransport {
    client: reqwest::blocking::Client,
}

impl BlockingHttpTransport {
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        let mut builder = reqwest::blocking::Client::builder()
            .timeout(timeout_override(timeout))
            .pool_max_idle_per_host(pool_max_idle_per_host())
            .pool_idle_timeout(Some(pool_idle_timeout()));

        if let Ok(proxy_url) = env::var("WAVECAST_PROXY_URL") {
            if let Ok(proxy) = reqwest::Proxy::all(&proxy_url) {
                builder = builder.proxy(proxy);
            }
        }

        Ok(Self {
            client: builder.build()?,
        })
    }
}

impl SyncTransport for BlockingHttpTransport {
    fn request(&self, parts: RequestParts) -> Result<RawResponse, TransportError> {
        let mut req = match parts.method {
            Method::Get => self.client.get(parts.url),
            Method::Post => self.client.post(parts.url),
        };

        for (name, value) in &parts.headers {
            req = req.header(name, value);
        }
        req = req.query(&parts.query);
        if let Some(body) = parts.body {
            req = req.body(body.to_vec());
        }

        let response = req.send()?;
        let status = response.status().as_u16();
        let body = response.text()?;

        Ok(RawResponse { status, body })
    }
}
