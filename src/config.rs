//! Application Configuration
//!
//! Compile-time defaults (`RECIPE_API_BASE`, `RECIPE_LOG_LEVEL`) that the host
//! page may override with `<meta name="recipe-api-base" content="...">` and
//! `<meta name="recipe-log-level" content="...">`.

use log::LevelFilter;

/// Maximum characters of a cleaned summary before the ellipsis
pub const SUMMARY_LIMIT: usize = 300;

/// Ingredient badges shown per card section before "+N more"
pub const BADGE_LIMIT: usize = 3;

pub const CARD_PLACEHOLDER: &str = "https://via.placeholder.com/300x200?text=No+Image";
pub const DETAIL_PLACEHOLDER: &str = "https://via.placeholder.com/800x400?text=No+Image";

const API_BASE_META: &str = "recipe-api-base";
const LOG_LEVEL_META: &str = "recipe-log-level";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Prefix for `/api/recipes`; empty means same origin
    pub api_base: String,
    pub log_level: LevelFilter,
    pub card_placeholder: String,
    pub detail_placeholder: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: normalize_base(option_env!("RECIPE_API_BASE").unwrap_or("")),
            log_level: option_env!("RECIPE_LOG_LEVEL")
                .and_then(parse_level)
                .unwrap_or(LevelFilter::Info),
            card_placeholder: CARD_PLACEHOLDER.to_string(),
            detail_placeholder: DETAIL_PLACEHOLDER.to_string(),
        }
    }
}

impl AppConfig {
    /// Defaults overlaid with whatever the host document declares
    pub fn load() -> Self {
        let mut config = Self::default();
        if let Some(base) = read_meta(API_BASE_META) {
            config.api_base = normalize_base(&base);
        }
        if let Some(level) = read_meta(LOG_LEVEL_META).as_deref().and_then(parse_level) {
            config.log_level = level;
        }
        config
    }
}

fn read_meta(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document
        .query_selector(&format!(r#"meta[name="{}"]"#, name))
        .ok()??;
    element.get_attribute("content")
}

fn normalize_base(base: &str) -> String {
    base.trim().trim_end_matches('/').to_string()
}

fn parse_level(level: &str) -> Option<LevelFilter> {
    level.trim().parse().ok()
}
