use std::env;

/// Runtime settings. Everything has a default, so the binary runs with a
/// bare environment.
#[derive(Clone, Debug)]
pub struct Config {
    /// Listen address, from `CALLIOPE_ADDR`.
    pub address: String,
    /// Seed file path, from `CALLIOPE_DATA`.
    pub data_file: String,
}

impl Config {
    pub fn from_env() -> Config {
        Config {
            address: env::var("CALLIOPE_ADDR").unwrap_or_else(|_| "0.0.0.0:5002".to_string()),
            data_file: env::var("CALLIOPE_DATA")
                .unwrap_or_else(|_| "data/blog_posts.json".to_string()),
        }
    }
}
