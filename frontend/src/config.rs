pub struct Config;

impl Config {
    pub fn api_base_url() -> String {
        // In development, Trunk serves the frontend and proxies /api/ to the profile service.
        // In production, the reverse proxy in front of the static files does the same,
        // so relative URLs work in both cases.
        "".to_string()
    }

    pub fn log_level() -> log::Level {
        if cfg!(debug_assertions) {
            log::Level::Debug
        } else {
            log::Level::Info
        }
    }
}
