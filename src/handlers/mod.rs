mod health;
mod index;
mod suggestions;

pub use health::health_handler;
pub use index::index_handler;
pub use suggestions::suggestions_handler;
