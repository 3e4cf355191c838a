//! Post Content Sanitizer
//!
//! Two-step pipeline for author-supplied HTML:
//! - `Sanitizer::clean` turns untrusted markup into `SafeHtml`
//! - components inject `SafeHtml` with `inner_html`
//!
//! Only tags on the configured allow-list survive. All attributes are
//! dropped, and `<script>`/`<style>` are removed together with their text.

use std::collections::{HashMap, HashSet};

use thiserror::Error;

/// Default allow-list: inline formatting and line breaks
pub const DEFAULT_ALLOWED_TAGS: &[&str] = &["b", "strong", "i", "em", "u", "br"];

/// Tags that can never be allowed, whatever the configuration says
const FORBIDDEN_TAGS: &[&str] = &[
    "script", "style", "iframe", "object", "embed", "frame", "frameset", "link", "meta", "base",
    "form", "svg", "math", "template",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SanitizeError {
    #[error("tag <{0}> cannot be allowed in post content")]
    ForbiddenTag(String),

    #[error("invalid tag name {0:?} in allow-list")]
    InvalidTagName(String),
}

/// Markup that has been through a `Sanitizer`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SafeHtml(String);

impl SafeHtml {
    pub fn empty() -> Self {
        Self(String::new())
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for SafeHtml {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Allow-list based HTML cleaner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sanitizer {
    allowed_tags: HashSet<String>,
}

impl Sanitizer {
    pub fn new<I, S>(allowed_tags: I) -> Result<Self, SanitizeError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tags = HashSet::new();
        for tag in allowed_tags {
            let tag = tag.as_ref().trim().to_ascii_lowercase();
            if tag.is_empty() || !tag.chars().all(|c| c.is_ascii_alphanumeric()) {
                return Err(SanitizeError::InvalidTagName(tag));
            }
            if FORBIDDEN_TAGS.contains(&tag.as_str()) {
                return Err(SanitizeError::ForbiddenTag(tag));
            }
            tags.insert(tag);
        }
        Ok(Self { allowed_tags: tags })
    }

    pub fn clean(&self, untrusted: &str) -> SafeHtml {
        let tags: HashSet<&str> = self.allowed_tags.iter().map(String::as_str).collect();

        let mut builder = ammonia::Builder::default();
        builder
            .tags(tags)
            .tag_attributes(HashMap::new())
            .generic_attributes(HashSet::new())
            .link_rel(None)
            .strip_comments(true);

        SafeHtml(builder.clean(untrusted).to_string())
    }
}

impl Default for Sanitizer {
    fn default() -> Self {
        Self {
            allowed_tags: DEFAULT_ALLOWED_TAGS.iter().map(|t| t.to_string()).collect(),
        }
    }
}

/// Clean `untrusted` if a sanitizer is available, otherwise render nothing.
pub fn sanitize_or_empty(sanitizer: Option<&Sanitizer>, untrusted: &str) -> SafeHtml {
    match sanitizer {
        Some(sanitizer) => sanitizer.clean(untrusted),
        None => SafeHtml::empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_tags_are_preserved() {
        let sanitizer = Sanitizer::default();
        let input = "<b>bold</b> <strong>strong</strong> <i>italic</i> <em>em</em> <u>under</u><br>next";
        assert_eq!(sanitizer.clean(input).as_ref(), input);
    }

    #[test]
    fn test_script_is_removed_with_its_body() {
        let sanitizer = Sanitizer::default();
        let out = sanitizer.clean("before<script>alert('x')</script>after");
        assert_eq!(out.as_ref(), "beforeafter");
    }

    #[test]
    fn test_event_handlers_and_attributes_are_removed() {
        let sanitizer = Sanitizer::default();

        let out = sanitizer.clean(r#"<img src="x" onerror="alert(1)">text"#);
        assert_eq!(out.as_ref(), "text");

        let out = sanitizer.clean(r#"<b onclick="steal()" style="color:red" class="x">hi</b>"#);
        assert_eq!(out.as_ref(), "<b>hi</b>");
    }

    #[test]
    fn test_disallowed_tags_are_unwrapped() {
        let sanitizer = Sanitizer::default();
        let out = sanitizer.clean(r#"<p>one <a href="javascript:evil()">link</a></p><div>two</div>"#);
        assert!(!out.as_ref().contains('<'), "unexpected markup in {:?}", out);
        assert!(out.as_ref().contains("one link"));
        assert!(out.as_ref().contains("two"));
    }

    #[test]
    fn test_malformed_input_does_not_leak_markup() {
        let sanitizer = Sanitizer::default();
        let out = sanitizer.clean("<b>unclosed <img src=x onerror=alert(1) <script");
        assert!(!out.as_ref().contains("onerror"));
        assert!(!out.as_ref().contains("<img"));
        assert!(!out.as_ref().contains("<script"));
    }

    #[test]
    fn test_allow_list_is_normalized() {
        let sanitizer = Sanitizer::new([" B ", "Br"]).expect("valid allow-list");
        assert_eq!(sanitizer.clean("<B>x</B><br><i>y</i>").as_ref(), "<b>x</b><br>y");
    }

    #[test]
    fn test_forbidden_tags_are_rejected() {
        assert_eq!(
            Sanitizer::new(["b", "script"]),
            Err(SanitizeError::ForbiddenTag("script".to_string()))
        );
        assert_eq!(
            Sanitizer::new(["b onclick"]),
            Err(SanitizeError::InvalidTagName("b onclick".to_string()))
        );
    }

    #[test]
    fn test_missing_sanitizer_renders_nothing() {
        let out = sanitize_or_empty(None, "<b>raw</b><script>alert(1)</script>");
        assert_eq!(out, SafeHtml::empty());

        let sanitizer = Sanitizer::default();
        let out = sanitize_or_empty(Some(&sanitizer), "<b>raw</b>");
        assert_eq!(out.as_ref(), "<b>raw</b>");
    }
}
