use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, warn};
use yapper::build_app;
use yapper::config::{Args, api_key_from_env};
use yapper::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    // Parse cli arguments
    let args = Args::parse();

    let api_key = api_key_from_env();
    if api_key.is_none() {
        warn!("OPENAI_API_KEY is not set, suggestion requests will fail with 500");
    }

    // Creating shared state
    let state = Arc::new(AppState::new(&args, api_key));
    let app = build_app(state);

    let addr = format!("0.0.0.0:{}", args.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("bind failed");

    info!("Yapper running on http://localhost:{}", args.port);
    info!("Forwarding to completion API at {}", args.openai_url);
    info!(
        "Rate limit: {} requests per {} seconds",
        args.rate_limit, args.rate_window
    );

    // connect info feeds the rate limit key when no forwarded-for header is set
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .expect("server failed");
}
