//! Domain-level resource wrapper.
//!
//! A [`Resource`] shapes what [`Request`](crate::Request) needs: query
//! parameter maps for GET, a JSON body (with empty query params) for POST.
//! It resolves its URL once, through the owning client, and keeps it for its
//! lifetime — path-to-URL resolution has no side effects.

use crate::client::Client;
use crate::pending::PendingCall;
use crate::request::Request;
use crate::response::Outcome;
use crate::transport::Method;
use crate::Result;
use bytes::Bytes;
use once_cell::unsync::OnceCell;
use serde::Serialize;
use std::collections::BTreeMap;
use url::Url;

/// One API resource path, e.g. `/channels` or `/events`.
pub struct Resource<'a> {
    client: &'a Client,
    path: String,
    url: OnceCell<Url>,
}

impl<'a> Resource<'a> {
    pub(crate) fn new(client: &'a Client, path: impl Into<String>) -> Self {
        Self {
            client,
            path: path.into(),
            url: OnceCell::new(),
        }
    }

    /// GET this resource, blocking until the outcome is known.
    pub fn get(&self, params: BTreeMap<String, String>) -> Result<Outcome> {
        self.request(Method::Get, params, None)?.send_sync()
    }

    /// GET this resource on the client's reactor.
    pub fn get_async(&self, params: BTreeMap<String, String>) -> Result<PendingCall> {
        self.request(Method::Get, params, None)?.send_async()
    }

    /// POST `params` as a JSON body, blocking until the outcome is known.
    pub fn post<T: Serialize + ?Sized>(&self, params: &T) -> Result<Outcome> {
        self.request(Method::Post, BTreeMap::new(), Some(serialize(params)?))?
            .send_sync()
    }

    /// POST `params` as a JSON body on the client's reactor.
    pub fn post_async<T: Serialize + ?Sized>(&self, params: &T) -> Result<PendingCall> {
        self.request(Method::Post, BTreeMap::new(), Some(serialize(params)?))?
            .send_async()
    }

    fn request(
        &self,
        method: Method,
        params: BTreeMap<String, String>,
        body: Option<Bytes>,
    ) -> Result<Request<'a>> {
        Ok(Request::new(
            self.client,
            method,
            self.url()?.clone(),
            params,
            body,
        ))
    }

    fn url(&self) -> Result<&Url> {
        self.url.get_or_try_init(|| self.client.url(&self.path))
    }
}

fn serialize<T: Serialize + ?Sized>(params: &T) -> Result<Bytes> {
    Ok(Bytes::from(serde_json::to_vec(params)?))
}
