pub mod analyzer;
pub mod config;
pub mod error;
pub mod normalize;
pub mod prompt;
pub mod providers;
pub mod schema;
pub mod server;

// Load env from .env if present, silently ignore if missing.
pub fn load_env() {
    let _ = dotenvy::dotenv();
}
