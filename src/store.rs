//! Admin Post List State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use reactive_stores::Store;

use crate::models::Post;

/// State owned by the post list container
#[derive(Clone, Debug, Default, Store)]
pub struct AdminState {
    /// Posts currently shown, replaced wholesale on reload
    pub posts: Vec<Post>,
    /// A delete request is running; list controls are disabled
    pub is_submitting: bool,
}

pub type AdminStore = Store<AdminState>;
