//! # wavecast
//!
//! Client core for the Wavecast realtime events HTTP API. Every API call is
//! cryptographically signed; this crate builds the signed request, dispatches
//! it either on the calling thread or on a reactor, and classifies the
//! response into a typed outcome.
//!
//! ## Overview
//!
//! - **Signed by construction**: a [`Request`] computes the body checksum and
//!   the HMAC-SHA256 query signature when it is built, and is immutable from
//!   then on.
//! - **Dual-mode dispatch**: `send_sync` blocks the calling thread;
//!   `send_async` submits the exchange to an injected reactor handle and
//!   returns a [`PendingCall`] that resolves exactly once, on a later reactor
//!   turn.
//! - **One classification path**: both modes map status + body through the
//!   same table, so a 401 looks identical whether you blocked on it or
//!   awaited it.
//! - **Capability seams**: transports and the reactor are injected, so tests
//!   substitute them instead of probing the environment.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use wavecast::Client;
//!
//! fn main() -> wavecast::Result<()> {
//!     let client = Client::builder()
//!         .key("your-key")
//!         .secret("your-secret")
//!         .app_id("1042")
//!         .build()?;
//!
//!     // Blocking publish; returns once the API accepts the event.
//!     client.trigger(&["my-channel"], "greeting", &serde_json::json!({
//!         "message": "hello"
//!     }))?;
//!
//!     Ok(())
//! }
//! ```
//!
//! Asynchronous dispatch needs a reactor handle injected at build time:
//!
//! ```rust,no_run
//! use wavecast::Client;
//!
//! #[tokio::main]
//! async fn main() -> wavecast::Result<()> {
//!     let client = Client::builder()
//!         .key("your-key")
//!         .secret("your-secret")
//!         .app_id("1042")
//!         .reactor(tokio::runtime::Handle::current())
//!         .build()?;
//!
//!     let pending = client.trigger_async(&["my-channel"], "greeting", &"hi")?;
//!     pending.await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Client configuration, builder and the convenience surface |
//! | [`resource`] | Per-path resource wrappers (param/body shaping) |
//! | [`request`] | Signed request construction and dual-mode dispatch |
//! | [`response`] | Status-code-to-outcome classification |
//! | [`pending`] | Single-resolution futures for in-flight async requests |
//! | [`auth`] | HMAC-SHA256 request signing |
//! | [`transport`] | Transport capability traits and the reqwest defaults |

pub mod auth;
pub mod client;
pub mod pending;
pub mod request;
pub mod resource;
pub mod response;
pub mod transport;

// Re-export main types for convenience
pub use auth::Token;
pub use client::{Client, ClientBuilder};
pub use pending::PendingCall;
pub use request::Request;
pub use resource::Resource;
pub use response::{Outcome, ResponseMap};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::Error;
