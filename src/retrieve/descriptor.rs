//! # Request Descriptor
//!
//! The resolved, ready-to-send form of one operation invocation.

use reqwest::Url;
use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use crate::core::error::NasaError;
use crate::registry::Operation;
use crate::retrieve::params::{PathParams, QueryParams};

/// Query parameter carrying the shared key on `api.nasa.gov`.
pub const API_KEY_PARAM: &str = "api_key";

/// Immutable request shape built fresh for every call.
#[derive(Clone, PartialEq)]
pub struct RequestDescriptor {
    operation: &'static str,
    url: Url,
    query: BTreeMap<String, String>,
    timeout: Duration,
}

impl RequestDescriptor {
    /// Resolves `op` against `base_url`.
    ///
    /// Query precedence, lowest first: operation defaults, caller values,
    /// then the API key when the operation requires one.
    pub fn build(
        op: &'static Operation,
        base_url: &str,
        path: &PathParams,
        query: &QueryParams,
        api_key: Option<&str>,
        timeout: Duration,
    ) -> Result<Self, NasaError> {
        let invalid_base = || NasaError::InvalidBaseUrl {
            provider: op.provider.slug().to_string(),
            url: base_url.to_string(),
        };

        let mut url = Url::parse(base_url).map_err(|_| invalid_base())?;
        let segments = op
            .path
            .trim_start_matches('/')
            .split('/')
            .map(|segment| fill_segment(op, segment, path))
            .collect::<Result<Vec<_>, _>>()?;
        {
            let mut parts = url.path_segments_mut().map_err(|_| invalid_base())?;
            parts.pop_if_empty();
            for segment in &segments {
                parts.push(segment);
            }
        }
        url.set_query(None);

        let mut merged: BTreeMap<String, String> = op
            .defaults
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        for (k, v) in query.iter() {
            merged.insert(k.to_string(), v.to_string());
        }
        if op.requires_key {
            merged.insert(API_KEY_PARAM.to_string(), api_key.unwrap_or_default().to_string());
        }

        Ok(Self {
            operation: op.name,
            url,
            query: merged,
            timeout,
        })
    }

    pub fn operation(&self) -> &'static str {
        self.operation
    }

    /// Resolved URL without the query string.
    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn query(&self) -> &BTreeMap<String, String> {
        &self.query
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// URL with the encoded query string, as sent on the wire.
    pub fn full_url(&self) -> Url {
        let mut url = self.url.clone();
        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(self.query.iter());
        }
        url
    }
}

impl fmt::Debug for RequestDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let query: BTreeMap<&str, &str> = self
            .query
            .iter()
            .map(|(k, v)| {
                let shown = if k == API_KEY_PARAM { "***" } else { v.as_str() };
                (k.as_str(), shown)
            })
            .collect();
        f.debug_struct("RequestDescriptor")
            .field("operation", &self.operation)
            .field("url", &self.url.as_str())
            .field("query", &query)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Replaces every `{name}` in one path segment.
///
/// A filled segment of `.` or `..` is rejected: URL normalization would
/// drop it and the request would reach a different endpoint.
fn fill_segment(op: &Operation, segment: &str, path: &PathParams) -> Result<String, NasaError> {
    let mut out = String::with_capacity(segment.len());
    let mut rest = segment;
    let mut filled: Option<&str> = None;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return Ok(out);
        };
        let name = &after[..close];
        match path.get(name) {
            Some(v) if !v.is_empty() => {
                out.push_str(v);
                filled = Some(name);
            }
            _ => {
                return Err(NasaError::MissingPathParam {
                    operation: op.name.to_string(),
                    param: name.to_string(),
                });
            }
        }
        rest = &after[close + 1..];
    }
    out.push_str(rest);

    if let Some(param) = filled {
        if out == "." || out == ".." {
            return Err(NasaError::InvalidPathParam {
                operation: op.name.to_string(),
                param: param.to_string(),
                value: out,
            });
        }
    }
    Ok(out)
}
