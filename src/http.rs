// src/http.rs
// Shared HTTP client for the outbound Gemini call

use std::time::Duration;

/// Default connect timeout
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Create the shared HTTP client with the given request timeout.
///
/// This client should be created once at startup and handed to the Gemini
/// client. It pools connections internally and is safe to use from any
/// number of concurrent requests. A builder failure is returned to the
/// caller; there is no fallback to an unbounded client.
pub fn create_shared_client(request_timeout: Duration) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(request_timeout)
        .connect_timeout(CONNECT_TIMEOUT.min(request_timeout))
        .pool_max_idle_per_host(10)
        .build()
}
