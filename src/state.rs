use crate::completion::CompletionClient;
use crate::config::Args;
use crate::rate_limit::RateLimiter;
use std::time::Duration;

// App's shared state
pub struct AppState {
    pub completion: CompletionClient,
    pub rate_limiter: RateLimiter,
}

impl AppState {
    pub fn new(args: &Args, api_key: Option<String>) -> Self {
        Self {
            completion: CompletionClient::new(
                args.openai_url.clone(),
                api_key,
                args.model.clone(),
                Duration::from_secs(args.timeout),
            ),
            rate_limiter: RateLimiter::new(args.rate_limit, Duration::from_secs(args.rate_window)),
        }
    }
}
