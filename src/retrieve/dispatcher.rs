//! src/retrieve/dispatcher.rs
//!
//! Dispatcher: turns a registered operation plus parameters into one HTTP GET
//! and a classified [`ResponseEnvelope`]. Injects the API key for key-gated
//! operations, applies the instance timeout, and never retries.
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::configs::NasaConfig;
use crate::core::error::NasaError;
use crate::loggers::Logger;
use crate::registry::EndpointRegistry;
use crate::retrieve::descriptor::RequestDescriptor;
use crate::retrieve::envelope::{ErrorKind, NormalizedError, ResponseEnvelope};
use crate::retrieve::params::{PathParams, QueryParams};
use crate::{info, warn};

/// Key sent when no key is configured; accepted by `api.nasa.gov` at a low rate limit.
pub const DEFAULT_API_KEY: &str = "DEMO_KEY";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// DispatcherOptions
///
/// Fixed at construction; there is no per-call override.
#[derive(Clone)]
pub struct DispatcherOptions {
    /// Shared key attached to every key-gated operation.
    pub api_key: String,

    /// Timeout applied to every request issued by this instance.
    pub timeout: Duration,
}

impl Default for DispatcherOptions {
    fn default() -> Self {
        Self {
            api_key: DEFAULT_API_KEY.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Dispatcher
///
/// Cheap to clone; clones share the connection pool and the registry.
#[derive(Clone)]
pub struct Dispatcher {
    client: Client,
    logger: Logger,
    registry: Arc<EndpointRegistry>,
    opts: DispatcherOptions,
}

impl Dispatcher {
    pub fn new(logger: Logger, registry: EndpointRegistry) -> Self {
        Self::new_with_opts(logger, registry, None)
    }

    pub fn new_with_opts(logger: Logger, registry: EndpointRegistry, opts: Option<DispatcherOptions>) -> Self {
        let opts = opts.unwrap_or_default();
        let client = Client::builder()
            .timeout(opts.timeout)
            .connect_timeout(opts.timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            logger,
            registry: Arc::new(registry),
            opts,
        }
    }

    /// Builds a dispatcher from loaded configuration.
    ///
    /// Applies host overrides, the key and the timeout, and sets `logger` (and
    /// every clone of it) to the configured `log_level`.
    ///
    /// # Arguments
    /// * `logger` - A [`Logger`] handle; its level is overwritten.
    /// * `config` - A loaded [`NasaConfig`].
    pub fn from_config(logger: Logger, config: &NasaConfig) -> Result<Self, NasaError> {
        logger.set_level(config.log_level);
        let registry = EndpointRegistry::standard().with_host_overrides(&config.hosts)?;
        let opts = DispatcherOptions {
            api_key: config.api_key.clone(),
            timeout: config.timeout(),
        };
        Ok(Self::new_with_opts(logger, registry, Some(opts)))
    }

    pub fn registry(&self) -> &EndpointRegistry {
        &self.registry
    }

    pub fn timeout(&self) -> Duration {
        self.opts.timeout
    }

    /// Builds the request descriptor for `operation` without sending it.
    pub fn describe(
        &self,
        operation: &str,
        path: &PathParams,
        query: &QueryParams,
    ) -> Result<RequestDescriptor, NasaError> {
        let op = self.registry.resolve(operation)?;
        RequestDescriptor::build(
            op,
            self.registry.base_url(op.provider),
            path,
            query,
            Some(self.opts.api_key.as_str()),
            self.opts.timeout,
        )
    }

    /// Sends one GET for `operation`.
    ///
    /// `Err` only for caller defects (unknown operation, unresolved path
    /// placeholder, bad base URL). Every remote failure comes back as an
    /// envelope with `success == false`.
    pub async fn send(
        &self,
        operation: &str,
        path: &PathParams,
        query: &QueryParams,
    ) -> Result<ResponseEnvelope, NasaError> {
        let descriptor = self.describe(operation, path, query)?;
        Ok(self.execute(&descriptor).await)
    }

    async fn execute(&self, descriptor: &RequestDescriptor) -> ResponseEnvelope {
        let started = Instant::now();

        let envelope = match self
            .client
            .get(descriptor.full_url())
            .timeout(descriptor.timeout())
            .send()
            .await
        {
            Ok(resp) => {
                let status = resp.status();
                match resp.text().await {
                    Ok(body) => classify_response(status, &body),
                    Err(e) => ResponseEnvelope::failed(transport_error(e, descriptor.timeout())),
                }
            }
            Err(e) => ResponseEnvelope::failed(transport_error(e, descriptor.timeout())),
        };

        // The URL is never logged: it carries the key.
        let duration_ms = started.elapsed().as_millis() as u64;
        let status = envelope.status().unwrap_or(0);
        match envelope.error() {
            None => info!(
                self.logger,
                "Request complete",
                "operation" => descriptor.operation(),
                "status" => status,
                "duration_ms" => duration_ms,
                "success" => true
            ),
            Some(err) => warn!(
                self.logger,
                "Request failed",
                "operation" => descriptor.operation(),
                "status" => status,
                "duration_ms" => duration_ms,
                "success" => false,
                "kind" => err.kind.as_str(),
                "message" => &err.message
            ),
        }

        envelope
    }
}

/// Maps a reqwest failure to `timeout` or `network-unreachable`.
fn transport_error(e: reqwest::Error, timeout: Duration) -> NormalizedError {
    if e.is_timeout() {
        return NormalizedError::new(
            ErrorKind::Timeout,
            format!("Request timed out after {} ms", timeout.as_millis()),
            None,
        );
    }
    let e = e.without_url();
    NormalizedError::new(ErrorKind::NetworkUnreachable, format!("Network error: {}", e), None)
}

/// Classifies a received response body by status and JSON validity.
pub(crate) fn classify_response(status: StatusCode, body: &str) -> ResponseEnvelope {
    let code = status.as_u16();

    if code >= 400 {
        let message = extract_error_message(body)
            .unwrap_or_else(|| format!("Request failed with status {}", code));
        return ResponseEnvelope::failed(NormalizedError::new(ErrorKind::from_status(code), message, Some(code)));
    }

    match serde_json::from_str::<Value>(body) {
        Ok(payload) => ResponseEnvelope::ok(code, payload),
        Err(e) => ResponseEnvelope::failed(NormalizedError::new(
            ErrorKind::MalformedResponse,
            format!("Response body is not valid JSON: {}", e),
            Some(code),
        )),
    }
}

/// Pulls a provider error message out of a JSON error body.
///
/// Providers disagree on the field; the first non-empty string among
/// `error_message`, `error.message`, `error`, `message`, `msg` wins.
pub fn extract_error_message(body: &str) -> Option<String> {
    let json: Value = serde_json::from_str(body).ok()?;
    let candidates = [
        json.get("error_message"),
        json.get("error").and_then(|e| e.get("message")),
        json.get("error"),
        json.get("message"),
        json.get("msg"),
    ];
    candidates
        .into_iter()
        .flatten()
        .filter_map(Value::as_str)
        .find(|s| !s.trim().is_empty())
        .map(str::to_string)
}
