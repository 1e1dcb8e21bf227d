//! Request signing.
//!
//! Every API call carries four auth query parameters: `auth_key`,
//! `auth_timestamp`, `auth_version` and `auth_signature`. The signature is an
//! HMAC-SHA256 over the uppercased verb, the URL path (no scheme, host or
//! query) and the lexicographically sorted parameter string. The signature
//! parameter itself is never part of what gets signed.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::collections::BTreeMap;
use std::time::{SystemTime, UNIX_EPOCH};

type HmacSha256 = Hmac<Sha256>;

pub(crate) const AUTH_VERSION: &str = "1.0";

/// Application credentials: a public key id and a shared secret.
///
/// Read-only once constructed, so a single token is safe to share across
/// concurrently in-flight requests.
#[derive(Debug, Clone)]
pub struct Token {
    key: String,
    secret: String,
}

impl Token {
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            secret: secret.into(),
        }
    }

    /// The public key id.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Sign `(method, path, params)` and return the params augmented with the
    /// auth fields, timestamped with the current time.
    pub fn sign(
        &self,
        method: &str,
        path: &str,
        params: &BTreeMap<String, String>,
    ) -> BTreeMap<String, String> {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        self.sign_at(method, path, params, timestamp)
    }

    /// Deterministic variant of [`Token::sign`] with an explicit timestamp.
    pub fn sign_at(
        &self,
        method: &str,
        path: &str,
        params: &BTreeMap<String, String>,
        timestamp: u64,
    ) -> BTreeMap<String, String> {
        let mut signed = params.clone();
        signed.insert("auth_key".to_string(), self.key.clone());
        signed.insert("auth_timestamp".to_string(), timestamp.to_string());
        signed.insert("auth_version".to_string(), AUTH_VERSION.to_string());

        let mut mac = HmacSha256::new_from_slice(self.secret.as_bytes())
            .expect("HMAC accepts keys of any length");
        mac.update(string_to_sign(method, path, &signed).as_bytes());
        let signature = hex::encode(mac.finalize().into_bytes());

        signed.insert("auth_signature".to_string(), signature);
        signed
    }
}

/// The canonical string the signature covers: verb, path and `k=v` pairs
/// joined with `&`. Keys are lowercased and sorted; `auth_signature` is
/// excluded.
fn string_to_sign(method: &str, path: &str, params: &BTreeMap<String, String>) -> String {
    let mut pairs: Vec<(String, &str)> = params
        .iter()
        .filter(|(key, _)| !key.eq_ignore_ascii_case("auth_signature"))
        .map(|(key, value)| (key.to_ascii_lowercase(), value.as_str()))
        .collect();
    pairs.sort();

    let parameter_string = pairs
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&");

    format!(
        "{}\n{}\n{}",
        method.to_ascii_uppercase(),
        path,
        parameter_string
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token() -> Token {
        Token::new("278d425bdf160c739803", "7ad3773142a6692b25b8")
    }

    fn params(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn signing_adds_all_auth_fields() {
        let signed = token().sign("get", "/apps/3/channels", &params(&[]));

        assert_eq!(signed.get("auth_key").unwrap(), "278d425bdf160c739803");
        assert_eq!(signed.get("auth_version").unwrap(), AUTH_VERSION);
        assert!(signed.contains_key("auth_timestamp"));
        let signature = signed.get("auth_signature").unwrap();
        assert_eq!(signature.len(), 64);
        assert!(signature.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn signing_is_deterministic_for_a_fixed_timestamp() {
        let input = params(&[("filter_by_prefix", "presence-")]);
        let a = token().sign_at("GET", "/apps/3/channels", &input, 1_353_088_179);
        let b = token().sign_at("GET", "/apps/3/channels", &input, 1_353_088_179);
        assert_eq!(a, b);
    }

    #[test]
    fn signature_covers_the_input_params() {
        let a = token().sign_at("GET", "/apps/3/channels", &params(&[("a", "1")]), 1);
        let b = token().sign_at("GET", "/apps/3/channels", &params(&[("a", "2")]), 1);
        assert_ne!(a.get("auth_signature"), b.get("auth_signature"));
    }

    #[test]
    fn signature_covers_verb_and_path_but_not_query_encoding() {
        let input = params(&[]);
        let get = token().sign_at("GET", "/apps/3/events", &input, 1);
        let post = token().sign_at("POST", "/apps/3/events", &input, 1);
        assert_ne!(get.get("auth_signature"), post.get("auth_signature"));

        let other_path = token().sign_at("GET", "/apps/3/channels", &input, 1);
        assert_ne!(get.get("auth_signature"), other_path.get("auth_signature"));
    }

    #[test]
    fn signature_never_covers_itself() {
        let clean = token().sign_at("POST", "/apps/3/events", &params(&[]), 42);

        // Re-signing params that already carry a (stale) signature must yield
        // the same signature value.
        let mut tainted = params(&[]);
        tainted.insert("auth_signature".to_string(), "feedface".repeat(8));
        let resigned = token().sign_at("POST", "/apps/3/events", &tainted, 42);

        assert_eq!(clean.get("auth_signature"), resigned.get("auth_signature"));
    }

    #[test]
    fn verb_case_does_not_matter() {
        let lower = token().sign_at("post", "/apps/3/events", &params(&[]), 7);
        let upper = token().sign_at("POST", "/apps/3/events", &params(&[]), 7);
        assert_eq!(lower.get("auth_signature"), upper.get("auth_signature"));
    }
}
