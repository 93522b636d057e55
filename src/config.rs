use dotenvy::dotenv;
use once_cell::sync::Lazy;
use std::env;

pub static CONFIG: Lazy<Config> = Lazy::new(|| {
    dotenv().ok(); // Load .env file if present
    Config {
        bind_addr: get_env_or_default("STORK_BIND_ADDR", "127.0.0.1:3000"),
        static_dir: get_env_or_default("STORK_STATIC_DIR", "static"),
    }
});

pub struct Config {
    pub bind_addr: String,
    /// Served under `/` next to the render API.
    pub static_dir: String,
}

fn get_env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
