//! Process-wide configuration, read once at startup.

use std::sync::OnceLock;

pub struct Config {
    /// CMS origin, without a trailing slash.
    pub base_url: String,
    /// Optional bearer token for the CMS API.
    pub token: Option<&'static str>,
}

/// CMS origin and API token, baked in at build time and never mutated.
pub fn config() -> &'static Config {
    static CONFIG: OnceLock<Config> = OnceLock::new();
    CONFIG.get_or_init(|| Config {
        base_url: option_env!("KAPINET_CMS_URL")
            .unwrap_or("http://localhost:1337")
            .trim_end_matches('/')
            .to_string(),
        token: option_env!("KAPINET_CMS_TOKEN"),
    })
}
