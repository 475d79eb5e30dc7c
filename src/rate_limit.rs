use axum::http::HeaderMap;
use dashmap::DashMap;
use std::net::SocketAddr;
use std::time::{Duration, Instant};

// Sliding window rate limiter - tracks request timestamps per client key.
// The map lives for the lifetime of the process; stale timestamps are
// pruned each time a key is touched.
pub struct RateLimiter {
    hits: DashMap<String, Vec<Instant>>,
    limit: usize,
    window: Duration,
}

impl RateLimiter {
    pub fn new(limit: u32, window: Duration) -> Self {
        Self {
            hits: DashMap::new(),
            limit: limit as usize,
            window,
        }
    }

    // Record a request for `key` and report whether it is still under the
    // limit. The new timestamp counts toward the window, so with a limit of
    // N the (N+1)-th request inside the window is the first one rejected.
    pub fn check(&self, key: &str) -> bool {
        let now = Instant::now();
        let mut calls = self.hits.entry(key.to_string()).or_default();
        calls.push(now);
        calls.retain(|t| now.duration_since(*t) < self.window);
        calls.len() <= self.limit
    }
}

// Derive the rate limit key: first x-forwarded-for hop if present,
// otherwise the peer address.
pub fn client_key(headers: &HeaderMap, addr: SocketAddr) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| addr.ip().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use std::thread::sleep;

    #[test]
    fn rejects_request_over_limit() {
        let limiter = RateLimiter::new(3, Duration::from_secs(60));

        for _ in 0..3 {
            assert!(limiter.check("1.2.3.4"));
        }
        assert!(!limiter.check("1.2.3.4"));
    }

    #[test]
    fn counts_clients_independently() {
        let limiter = RateLimiter::new(1, Duration::from_secs(60));

        assert!(limiter.check("1.2.3.4"));
        assert!(!limiter.check("1.2.3.4"));
        assert!(limiter.check("5.6.7.8"));
    }

    #[test]
    fn admits_again_after_window_expires() {
        let limiter = RateLimiter::new(1, Duration::from_millis(50));

        assert!(limiter.check("1.2.3.4"));
        assert!(!limiter.check("1.2.3.4"));

        sleep(Duration::from_millis(60));
        assert!(limiter.check("1.2.3.4"));
    }

    #[test]
    fn key_prefers_forwarded_for_header() {
        let addr: SocketAddr = "10.0.0.1:9999".parse().unwrap();

        let mut headers = HeaderMap::new();
        headers.insert(
            "x-forwarded-for",
            HeaderValue::from_static("203.0.113.7, 10.0.0.2"),
        );
        assert_eq!(client_key(&headers, addr), "203.0.113.7");

        assert_eq!(client_key(&HeaderMap::new(), addr), "10.0.0.1");
    }
}
