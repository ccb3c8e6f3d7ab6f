use std::str::FromStr;

/// Backend origin. Empty means the API is served from the same origin as the SPA.
pub const API_BASE_URL: &str = match option_env!("API_BASE_URL") {
    Some(url) => url,
    None => "",
};

const LOG_LEVEL: Option<&str> = option_env!("SPA_LOG_LEVEL");

pub fn log_level() -> log::Level {
    LOG_LEVEL
        .and_then(|level| log::Level::from_str(level).ok())
        .unwrap_or(log::Level::Info)
}

pub fn api_url(path: &str) -> String {
    format!("{}{path}", API_BASE_URL.trim_end_matches('/'))
}
