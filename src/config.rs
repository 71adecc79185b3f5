use std::{env, fs, io::ErrorKind, path::Path, path::PathBuf};

use reqwest::Url;
use serde::Deserialize;
use tracing::{info, warn};

use crate::app::remote::DEFAULT_API_BASE_URL;

pub const DEFAULT_CONFIG_FILE: &str = "config.json";
pub const CONFIG_PATH_ENV_VAR: &str = "MOVIEDESK_CONFIG";
pub const API_URL_ENV_VAR: &str = "MOVIEDESK_API_URL";
pub const DEFAULT_WINDOW_TITLE: &str = "Movies App";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub user_agent: String,
    pub window_title: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            user_agent: concat!("moviedesk/", env!("CARGO_PKG_VERSION")).to_string(),
            window_title: DEFAULT_WINDOW_TITLE.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(alias = "api_url")]
    api_base_url: Option<String>,
    user_agent: Option<String>,
    window_title: Option<String>,
}

pub fn config_path() -> PathBuf {
    env::var_os(CONFIG_PATH_ENV_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}

/// Reads `config.json` (or `$MOVIEDESK_CONFIG`), then applies `$MOVIEDESK_API_URL`.
pub fn load_config() -> AppConfig {
    let mut cfg = load_config_from(&config_path());
    apply_api_url_override(&mut cfg, env::var(API_URL_ENV_VAR).ok());
    cfg
}

pub fn load_config_from(cfg_path: &Path) -> AppConfig {
    let mut cfg = AppConfig::default();

    match fs::read_to_string(cfg_path) {
        Ok(raw) => match serde_json::from_str::<RawConfig>(&raw) {
            Ok(parsed) => {
                if let Some(url) = parsed.api_base_url {
                    if is_usable_base_url(&url) {
                        cfg.api_base_url = url.trim().to_string();
                    } else {
                        warn!("Ignoring invalid api_base_url `{url}` in {}", cfg_path.display());
                    }
                }
                if let Some(ua) = parsed.user_agent.filter(|s| !s.trim().is_empty()) {
                    cfg.user_agent = ua;
                }
                if let Some(title) = parsed.window_title.filter(|s| !s.trim().is_empty()) {
                    cfg.window_title = title;
                }
                info!("Loaded config from {}", cfg_path.display());
            }
            Err(err) => {
                warn!("Failed to parse {} ({}). Using defaults.", cfg_path.display(), err);
            }
        },
        Err(err) if err.kind() == ErrorKind::NotFound => {
            info!("No {} found; using defaults", cfg_path.display());
        }
        Err(err) => {
            warn!("Failed to read {} ({}). Using defaults.", cfg_path.display(), err);
        }
    }

    cfg
}

fn apply_api_url_override(cfg: &mut AppConfig, value: Option<String>) {
    let Some(url) = value else { return };
    if is_usable_base_url(&url) {
        info!("{API_URL_ENV_VAR} overrides api_base_url");
        cfg.api_base_url = url.trim().to_string();
    } else {
        warn!("Ignoring invalid {API_URL_ENV_VAR} `{url}`");
    }
}

fn is_usable_base_url(s: &str) -> bool {
    Url::parse(s.trim())
        .map(|u| matches!(u.scheme(), "http" | "https") && u.has_host())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_cfg(body: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(body.as_bytes()).unwrap();
        file
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_config_from(&dir.path().join("config.json"));
        assert_eq!(cfg, AppConfig::default());
        assert_eq!(cfg.api_base_url, "http://localhost:8080/api/movies");
    }

    #[test]
    fn reads_all_fields() {
        let file = write_cfg(
            r#"{"api_base_url":"https://movies.example.com/api/movies","user_agent":"ua/1","window_title":"Catalog"}"#,
        );
        let cfg = load_config_from(file.path());
        assert_eq!(cfg.api_base_url, "https://movies.example.com/api/movies");
        assert_eq!(cfg.user_agent, "ua/1");
        assert_eq!(cfg.window_title, "Catalog");
    }

    #[test]
    fn accepts_short_url_key() {
        let file = write_cfg(r#"{"api_url":"http://10.0.0.2:9000/api/movies"}"#);
        assert_eq!(load_config_from(file.path()).api_base_url, "http://10.0.0.2:9000/api/movies");
    }

    #[test]
    fn bad_json_falls_back_to_defaults() {
        let file = write_cfg("{ not json");
        assert_eq!(load_config_from(file.path()), AppConfig::default());
    }

    #[test]
    fn invalid_url_is_ignored() {
        let file = write_cfg(r#"{"api_base_url":"ftp://nope","window_title":"Kept"}"#);
        let cfg = load_config_from(file.path());
        assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(cfg.window_title, "Kept");
    }

    #[test]
    fn url_is_stored_trimmed() {
        let file = write_cfg(r#"{"api_base_url":"  http://host:8080/api/movies \n"}"#);
        assert_eq!(load_config_from(file.path()).api_base_url, "http://host:8080/api/movies");

        let mut cfg = AppConfig::default();
        apply_api_url_override(&mut cfg, Some(" https://backend/api/movies ".into()));
        assert_eq!(cfg.api_base_url, "https://backend/api/movies");
    }

    #[test]
    fn unreadable_path_falls_back_to_defaults() {
        // A directory exists but can't be read as a file.
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load_config_from(dir.path()), AppConfig::default());
    }

    #[test]
    fn env_style_override() {
        let mut cfg = AppConfig::default();
        apply_api_url_override(&mut cfg, None);
        assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);

        apply_api_url_override(&mut cfg, Some("not a url".into()));
        assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);

        apply_api_url_override(&mut cfg, Some("http://backend:8080/api/movies".into()));
        assert_eq!(cfg.api_base_url, "http://backend:8080/api/movies");
    }
}
