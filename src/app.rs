//! Admin Posts App
//!
//! Post list container: owns the post list and the submitting flag, and
//! hands each `PostSummary` a reload action plus a submitting setter.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::PostSummary;
use crate::config::AdminConfig;
use crate::context::AdminContext;
use crate::services::PostApi;
use crate::store::{AdminState, AdminStateStoreFields, AdminStore};
use crate::workflow::ReloadAction;

fn list_class(submitting: bool) -> &'static str {
    if submitting { "admin-post-list submitting" } else { "admin-post-list" }
}

#[component]
pub fn App(config: AdminConfig) -> impl IntoView {
    let ctx = AdminContext::new(config);
    let store: AdminStore = reactive_stores::Store::new(AdminState::default());

    provide_context(ctx.clone());

    let api = ctx.api.clone();
    let reload = ReloadAction::new(move || {
        let api = api.clone();
        async move {
            match api.list_posts().await {
                Ok(posts) => {
                    log::info!("Loaded {} posts", posts.len());
                    *store.posts().write() = posts;
                }
                Err(e) => log::error!("Failed to load posts: {}", e),
            }
        }
    });

    let set_is_submitting = Callback::new(move |value: bool| *store.is_submitting().write() = value);

    // Load posts on mount
    let initial = reload.clone();
    Effect::new(move |_| {
        let initial = initial.clone();
        spawn_local(async move {
            initial.run().await;
        });
    });


    view! {
        <main class="admin-posts">
            <h1>"Posts"</h1>

            <Show when=move || store.is_submitting().get()>
                <p class="admin-status">"Deleting..."</p>
            </Show>

            // `inert` blocks clicks and focus on every post while a delete runs
            <div
                class=move || list_class(store.is_submitting().get())
                inert=move || store.is_submitting().get()
            >
                <For
                    each=move || store.posts().get()
                    key=|post| post.id.clone()
                    children=move |post| {
                        view! {
                            <PostSummary
                                post=post
                                reload_action=reload.clone()
                                set_is_submitting=set_is_submitting
                            />
                        }
                    }
                />
            </div>

            <p class="post-count">{move || format!("{} posts", store.posts().get().len())}</p>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_class_follows_submitting_flag() {
        assert_eq!(list_class(false), "admin-post-list");
        assert_eq!(list_class(true), "admin-post-list submitting");
    }
}
