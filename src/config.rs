use clap::Parser;
use std::env;

// CLI argument structure
#[derive(Parser, Debug, Clone)]
#[command(name = "yapper")]
#[command(about = "Writing feedback service backed by a chat completion API")]
pub struct Args {
    // Port to run the server on
    #[arg(short, long, default_value_t = 3000)]
    pub port: u16,

    // Base URL of the OpenAI-compatible API
    #[arg(long, default_value = "https://api.openai.com/v1")]
    pub openai_url: String,

    // Model to request completions from
    #[arg(long, default_value = "gpt-3.5-turbo")]
    pub model: String,

    // Rate limit max requests per window
    #[arg(long, default_value_t = 10)]
    pub rate_limit: u32,

    // Rate limit window in seconds
    #[arg(long, default_value_t = 60)]
    pub rate_window: u64,

    // Upstream request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,
}

// The key only comes from the environment, never the CLI
pub fn api_key_from_env() -> Option<String> {
    env::var("OPENAI_API_KEY").ok().filter(|k| !k.is_empty())
}
