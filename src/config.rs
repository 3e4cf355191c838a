//! Admin UI Configuration
//!
//! Defaults can be overridden by an inline JSON block in the host page:
//! `<script type="application/json" id="admin-config">{ ... }</script>`

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::sanitize::DEFAULT_ALLOWED_TAGS;

/// Element id of the optional inline config block
pub const CONFIG_ELEMENT_ID: &str = "admin-config";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    /// Base path of the admin posts endpoint
    pub posts_api: String,
    /// chrono format string for `createdAt`
    pub date_format: String,
    /// Number of visible lines in the post excerpt
    pub excerpt_lines: u8,
    /// Tags kept in post content, everything else is stripped
    pub allowed_tags: Vec<String>,
    pub log_level: LevelFilter,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            posts_api: "/api/admin/posts".to_string(),
            date_format: "%Y-%m-%d".to_string(),
            excerpt_lines: 3,
            allowed_tags: DEFAULT_ALLOWED_TAGS.iter().map(|t| t.to_string()).collect(),
            log_level: LevelFilter::Info,
        }
    }
}

impl AdminConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Read the inline config block, falling back to defaults.
    ///
    /// Returns the parse error alongside the defaults so the caller can log
    /// it once the logger is installed.
    pub fn load() -> (Self, Option<String>) {
        let text = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match text {
            Some(json) if !json.trim().is_empty() => match Self::from_json(&json) {
                Ok(config) => (config, None),
                Err(e) => (Self::default(), Some(format!("Invalid #{}: {}", CONFIG_ELEMENT_ID, e))),
            },
            _ => (Self::default(), None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AdminConfig::default();
        assert_eq!(config.posts_api, "/api/admin/posts");
        assert_eq!(config.excerpt_lines, 3);
        assert_eq!(config.allowed_tags, vec!["b", "strong", "i", "em", "u", "br"]);
    }

    #[test]
    fn test_partial_override() {
        let config = AdminConfig::from_json(r#"{"excerpt_lines": 5, "log_level": "debug"}"#)
            .expect("Failed to parse config");
        assert_eq!(config.excerpt_lines, 5);
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.date_format, "%Y-%m-%d");
    }

    #[test]
    fn test_bad_json_is_an_error() {
        assert!(AdminConfig::from_json("{excerpt_lines: ").is_err());
    }
}
