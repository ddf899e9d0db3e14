use std::time::Duration;

// tokio::time::sleep is only available on non-WASM targets.
#[cfg(not(target_arch = "wasm32"))]
use tokio::time::sleep;

use crate::{GeoArtError, Result, RetryPolicy};

/// Immutable description of one outbound GET request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestSpec {
    /// Fully-formed target URL.
    pub url: String,
    /// Per-request timeout in milliseconds.
    pub timeout_ms: u64,
}

impl RequestSpec {
    pub fn new(url: impl Into<String>, timeout_ms: u64) -> Self {
        Self {
            url: url.into(),
            timeout_ms,
        }
    }
}

/// Response from a successful attempt: status plus eagerly-read body text.
#[derive(Clone, Debug)]
pub struct FetchResponse {
    status: u16,
    body: String,
}

impl FetchResponse {
    /// HTTP status code.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Raw body text.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Decodes the body as JSON.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_str(&self.body).map_err(|err| {
            GeoArtError::Decode(format!("invalid response JSON: {err}; body: {}", self.body))
        })
    }
}

/// Executes `spec` up to `policy.max_attempts` times with exponential backoff
/// between attempts.
///
/// The first success response is returned immediately with no further
/// attempts or delay. When every attempt fails, only the final attempt's
/// failure is reported, wrapped in [`GeoArtError::Exhausted`]; earlier
/// failures are discarded. At most `max_attempts` physical requests are
/// issued and no delay follows the final attempt.
pub async fn fetch_with_retry(
    http: &reqwest::Client,
    spec: &RequestSpec,
    policy: &RetryPolicy,
) -> Result<FetchResponse> {
    let attempts = policy.attempts();
    let mut attempt = 0u32;
    loop {
        match issue(http, spec).await {
            Ok(response) => return Ok(response),
            Err(cause) => {
                if attempt + 1 >= attempts {
                    return Err(GeoArtError::Exhausted {
                        attempts,
                        cause: Box::new(cause),
                    });
                }
                wait_before_retry(policy, attempt).await;
                attempt += 1;
            }
        }
    }
}

/// Issues one physical attempt.
///
/// Transport failures (connect, DNS, timeout, body read) and non-success
/// statuses are both attempt failures; whether a failure is retryable or
/// terminal is decided positionally by the caller's loop.
async fn issue(http: &reqwest::Client, spec: &RequestSpec) -> Result<FetchResponse> {
    // On WASM, reqwest uses AbortController for timeout; the `.timeout()`
    // method is available on both targets.
    let response = http
        .get(&spec.url)
        .timeout(Duration::from_millis(spec.timeout_ms))
        .send()
        .await
        .map_err(GeoArtError::Transport)?;

    let status = response.status();
    let body = response.text().await.map_err(GeoArtError::Transport)?;

    if !status.is_success() {
        return Err(GeoArtError::Http {
            status: status.as_u16(),
            body,
        });
    }

    Ok(FetchResponse {
        status: status.as_u16(),
        body,
    })
}

/// Waits before the next retry attempt.
///
/// On native targets: exponential backoff sleep via `tokio::time::sleep`.
/// On WASM targets: no-op — `tokio::time::sleep` is not available in
/// browser runtimes, so retries there run back to back.
async fn wait_before_retry(policy: &RetryPolicy, attempt: u32) {
    let delay = policy.backoff_delay(attempt);

    #[cfg(feature = "tracing")]
    tracing::debug!("retrying request after {} ms", delay.as_millis());

    #[cfg(not(target_arch = "wasm32"))]
    sleep(delay).await;

    // WASM: no sleep implementation — suppress unused variable warning.
    #[cfg(target_arch = "wasm32")]
    let _ = delay;
}
