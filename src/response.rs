//! Response classification.
//!
//! Both dispatch modes funnel their raw status + body through [`classify`],
//! so sync and async callers observe identical outcomes for identical
//! responses.

use crate::error::Error;
use crate::Result;
use serde_json::Value;

/// The first level of a decoded JSON response body, lifted into a typed map.
/// Nested values stay as decoded [`Value`]s, untouched.
pub type ResponseMap = serde_json::Map<String, Value>;

/// Classified result of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// 200: the decoded body.
    Success(ResponseMap),
    /// 202: the API accepted the request and returns nothing.
    Accepted,
}

impl Outcome {
    /// The decoded body of a `Success`, if that is what this is.
    pub fn into_map(self) -> Option<ResponseMap> {
        match self {
            Outcome::Success(map) => Some(map),
            Outcome::Accepted => None,
        }
    }
}

/// Map a status code and body to an [`Outcome`] or the protocol error the
/// status stands for. `path` is only used for the 404 message and is the URL
/// path, never the query string.
pub(crate) fn classify(status: u16, body: &str, path: &str) -> Result<Outcome> {
    match status {
        200 => {
            let value: Value =
                serde_json::from_str(body).map_err(|err| Error::Decode(err.to_string()))?;
            Ok(Outcome::Success(first_level(value)?))
        }
        202 => Ok(Outcome::Accepted),
        400 => Err(Error::BadRequest(body.to_string())),
        401 => Err(Error::Authentication(body.to_string())),
        404 => Err(Error::NotFound(path.to_string())),
        407 => Err(Error::ProxyAuthRequired),
        _ => Err(Error::Unknown {
            status,
            body: body.to_string(),
        }),
    }
}

/// Lift the top level of a decoded body into a [`ResponseMap`]. The API
/// always answers 200s with a JSON object; anything else is a protocol error.
fn first_level(value: Value) -> Result<ResponseMap> {
    match value {
        Value::Object(fields) => Ok(fields),
        other => Err(Error::Decode(format!(
            "expected a JSON object at the top level, got: {other}"
        ))),
    }
}

/// Strip one trailing line terminator, if any.
pub(crate) fn chomp(body: &str) -> &str {
    body.strip_suffix("\r\n")
        .or_else(|| body.strip_suffix('\n'))
        .or_else(|| body.strip_suffix('\r'))
        .unwrap_or(body)
}
