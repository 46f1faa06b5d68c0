//! HTTP adapters - production implementations of the ports.
//!
//! All three share one `reqwest::Client`, carrying a per-request deadline
//! so a stalled collaborator cannot hold a cycle (and therefore a
//! shutdown) hostage indefinitely.

pub mod gateway;
pub mod gemini;
pub mod status;

use std::time::Duration;

pub use self::gateway::HttpCommandGateway;
pub use self::gemini::GeminiClient;
pub use self::status::HttpStatusProvider;

/// Default per-request deadline.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Shared client with the given per-request deadline.
pub fn client_with_timeout(timeout: Duration) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder().timeout(timeout).build()
}

/// Join a base URL and a path without doubling the slash.
fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_url_normalizes_slashes() {
        assert_eq!(
            join_url("http://host:5000/api/", "/ai/status"),
            "http://host:5000/api/ai/status"
        );
        assert_eq!(
            join_url("http://host:5000/api", "ai/control"),
            "http://host:5000/api/ai/control"
        );
    }
}
