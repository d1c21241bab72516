use std::path::PathBuf;

use playbook::{ActiveFilter, Feedback, PageLocation};
use serde::{Deserialize, Serialize};

/// Overrides `[site]` with a full page URL.
pub const SITE_URL_ENV: &str = "PLAYBOOK_SITE_URL";

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub browser: BrowserConfig,
}

/// Where the published playbook lives; share links point here.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SiteConfig {
    #[serde(default = "default_origin")]
    pub origin: String,
    #[serde(default = "default_base_path")]
    pub base_path: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            origin: default_origin(),
            base_path: default_base_path(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BrowserConfig {
    /// Filter the browser opens with (`all`, a category, or a tag).
    #[serde(default = "default_filter")]
    pub initial_filter: String,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            initial_filter: default_filter(),
        }
    }
}

fn default_origin() -> String {
    "https://vk-systems.github.io".into()
}

fn default_base_path() -> String {
    "/system-design-playbook/".into()
}

fn default_filter() -> String {
    playbook::filter::ALL.into()
}

impl AppConfig {
    /// Page location for share links. A `site_url` that parses wins over `[site]`.
    pub fn location(&self, site_url: Option<&str>) -> PageLocation {
        site_url
            .map(str::trim)
            .and_then(PageLocation::from_url)
            .unwrap_or_else(|| PageLocation::new(&self.site.origin, &self.site.base_path))
    }

    pub fn initial_filter(&self) -> ActiveFilter {
        ActiveFilter::parse(&self.browser.initial_filter)
    }
}

/// Config file path: `~/.config/playbook/config.toml`
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("playbook").join("config.toml"))
}

/// Parse config text. Returns defaults plus a warning when the text is invalid.
pub fn parse_config(contents: &str, origin: &str) -> (AppConfig, Option<Feedback>) {
    match toml::from_str::<AppConfig>(contents) {
        Ok(config) => (config, None),
        Err(e) => (
            AppConfig::default(),
            Some(Feedback::warning(format!(
                "failed to parse config at {origin}, using defaults: {e}"
            ))),
        ),
    }
}

/// Load config from file, falling back to defaults if missing or invalid.
pub fn load_config() -> AppConfig {
    let Some(path) = config_path() else {
        return AppConfig::default();
    };
    let Ok(contents) = std::fs::read_to_string(&path) else {
        return AppConfig::default();
    };

    let (config, warning) = parse_config(&contents, &path.display().to_string());
    if let Some(warning) = warning {
        eprintln!("{warning}");
    }
    config
}
