//! URL builders for API endpoints and navigation links.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::models::RecordId;

/// Characters that may not appear raw inside a single path segment
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

fn segment(id: &RecordId) -> String {
    match id {
        RecordId::Int(n) => n.to_string(),
        RecordId::Str(s) => utf8_percent_encode(s, SEGMENT).to_string(),
    }
}

pub fn admin_post_api(posts_api: &str, id: &RecordId) -> String {
    format!("{}/{}", posts_api.trim_end_matches('/'), segment(id))
}

pub fn category_admin_page(id: &RecordId) -> String {
    format!("/admin/categories/{}", segment(id))
}

pub fn public_post_page(id: &RecordId) -> String {
    format!("/posts/{}", segment(id))
}

pub fn post_edit_page(id: &RecordId) -> String {
    format!("/admin/posts/{}", segment(id))
}
