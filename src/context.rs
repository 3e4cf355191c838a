//! Application Context
//!
//! Shared, read-only services provided via Leptos Context API.

use std::sync::Arc;

use crate::api::HttpPostApi;
use crate::config::AdminConfig;
use crate::sanitize::{sanitize_or_empty, SafeHtml, Sanitizer};

/// App-wide services provided via context
#[derive(Clone)]
pub struct AdminContext {
    pub config: Arc<AdminConfig>,
    /// `None` when the configured allow-list was rejected; excerpts render empty
    sanitizer: Option<Sanitizer>,
    pub api: HttpPostApi,
}

impl AdminContext {
    pub fn new(config: AdminConfig) -> Self {
        let sanitizer = match Sanitizer::new(&config.allowed_tags) {
            Ok(sanitizer) => Some(sanitizer),
            Err(e) => {
                log::error!("Post content sanitizer disabled: {}", e);
                None
            }
        };
        let api = HttpPostApi::new(config.posts_api.clone());
        Self { config: Arc::new(config), sanitizer, api }
    }

    /// Sanitized post body, or nothing if sanitizing is unavailable
    pub fn excerpt_html(&self, content: &str) -> SafeHtml {
        sanitize_or_empty(self.sanitizer.as_ref(), content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excerpt_uses_configured_allow_list() {
        let config = AdminConfig { allowed_tags: vec!["em".to_string()], ..AdminConfig::default() };
        let ctx = AdminContext::new(config);
        assert_eq!(ctx.excerpt_html("<b>a</b><em>b</em>").as_ref(), "a<em>b</em>");
    }

    #[test]
    fn test_rejected_allow_list_renders_nothing() {
        let config = AdminConfig {
            allowed_tags: vec!["b".to_string(), "script".to_string()],
            ..AdminConfig::default()
        };
        let ctx = AdminContext::new(config);
        assert_eq!(ctx.excerpt_html("<b>a</b>").as_ref(), "");
    }
}
