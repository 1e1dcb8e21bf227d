//! Signed request construction and dual-mode dispatch.

use crate::client::Client;
use crate::error::Error;
use crate::pending::PendingCall;
use crate::response::{self, Outcome};
use crate::transport::{Method, RequestParts};
use crate::Result;
use bytes::Bytes;
use md5::{Digest, Md5};
use std::collections::BTreeMap;
use tokio::sync::oneshot;
use tracing::debug;
use url::Url;
use uuid::Uuid;

/// One signed, transport-ready API call.
///
/// Construction injects the body checksum, signs the parameter set and
/// freezes the result; nothing mutates after that, and dispatch mode has no
/// influence on what goes over the wire. A `Request` is call-scoped: build
/// it, dispatch it, drop it.
pub struct Request<'a> {
    client: &'a Client,
    method: Method,
    url: Url,
    params: BTreeMap<String, String>,
    body: Option<Bytes>,
    headers: BTreeMap<String, String>,
    request_id: String,
}

impl<'a> Request<'a> {
    /// Build and sign a request. If a non-empty body is given, its MD5 hex
    /// digest lands in the params as `body_md5` *before* signing, and the
    /// body's media type is declared.
    pub fn new(
        client: &'a Client,
        method: Method,
        url: Url,
        mut params: BTreeMap<String, String>,
        body: Option<Bytes>,
    ) -> Self {
        let mut headers = BTreeMap::new();
        let request_id = Uuid::new_v4().to_string();
        headers.insert("X-Request-Id".to_string(), request_id.clone());

        if let Some(body) = body.as_ref().filter(|b| !b.is_empty()) {
            params.insert("body_md5".to_string(), hex::encode(Md5::digest(body)));
            headers.insert("Content-Type".to_string(), "application/json".to_string());
        }

        let params = client.token().sign(method.as_str(), url.path(), &params);

        Self {
            client,
            method,
            url,
            params,
            body,
            headers,
            request_id,
        }
    }

    /// The final, signed parameter set.
    pub fn params(&self) -> &BTreeMap<String, String> {
        &self.params
    }

    pub fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    pub fn body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }

    /// Dispatch on the calling thread and block until the exchange finishes.
    ///
    /// Transport faults propagate unchanged (as [`Error::Network`]); nothing
    /// is retried or suppressed here.
    pub fn send_sync(&self) -> Result<Outcome> {
        let transport = self.client.sync_transport()?;
        let response = transport.request(self.parts())?;

        debug!(
            method = self.method.as_str(),
            url = %self.url,
            status = response.status,
            request_id = %self.request_id,
            "dispatched"
        );

        response::classify(
            response.status,
            response::chomp(&response.body),
            self.url.path(),
        )
    }

    /// Dispatch on the client's reactor and return a [`PendingCall`] that
    /// resolves on a later reactor turn.
    ///
    /// Fails immediately with [`Error::Configuration`] when the client has no
    /// reactor — there is no silent fallback to blocking behavior. Protocol
    /// errors reject the returned handle; they are never raised into the
    /// reactor.
    pub fn send_async(&self) -> Result<PendingCall> {
        let reactor = self.client.reactor().ok_or_else(|| {
            Error::Configuration(
                "no reactor is active; inject a runtime handle to dispatch asynchronously"
                    .to_string(),
            )
        })?;

        let transport = self.client.async_transport();
        let parts = self.parts();
        let path = self.url.path().to_string();
        let request_id = self.request_id.clone();
        let (tx, rx) = oneshot::channel();

        reactor.spawn(async move {
            let result = match transport.request(parts).await {
                Ok(response) => {
                    debug!(
                        status = response.status,
                        request_id = %request_id,
                        "asynchronous dispatch completed"
                    );
                    response::classify(response.status, response::chomp(&response.body), &path)
                }
                Err(err) => {
                    debug!(error = %err, request_id = %request_id, "asynchronous dispatch failed");
                    Err(Error::Network(format!(
                        "error connecting to the API ({err})"
                    )))
                }
            };
            // The receiver may have been dropped; the request still ran.
            let _ = tx.send(result);
        });

        Ok(PendingCall::new(rx))
    }

    fn parts(&self) -> RequestParts {
        RequestParts {
            method: self.method,
            url: self.url.clone(),
            headers: self.headers.clone(),
            query: self.params.clone(),
            body: self.body.clone(),
        }
    }
}
