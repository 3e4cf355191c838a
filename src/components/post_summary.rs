//! Post Summary Component
//!
//! One post in the admin list: date, category badges, title, an actions
//! menu and a sanitized excerpt of the body.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{CategoryBadges, PostMenu};
use crate::context::AdminContext;
use crate::dates::format_created_at;
use crate::dialogs::BrowserDialogs;
use crate::models::Post;
use crate::routes;
use crate::workflow::{self, InFlight, ParentHooks, ReloadAction, SetSubmitting};

/// Open/closed state of the actions menu
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }
}

/// Inline style clamping the excerpt to `lines` visible lines
pub fn line_clamp_style(lines: u8) -> String {
    format!(
        "display: -webkit-box; -webkit-box-orient: vertical; -webkit-line-clamp: {0}; line-clamp: {0}; overflow: hidden;",
        lines
    )
}

/// Admin summary card for a single post
///
/// # Arguments
/// * `post` - Post to show; never modified here
/// * `reload_action` - Re-fetches the list after a successful delete
/// * `set_is_submitting` - Parent's submitting flag, raised while a delete runs
#[component]
pub fn PostSummary(
    post: Post,
    reload_action: ReloadAction,
    #[prop(into)] set_is_submitting: Callback<bool>,
) -> impl IntoView {
    let ctx = use_context::<AdminContext>().expect("AdminContext should be provided");
    let menu = RwSignal::new(MenuState::default());
    let in_flight = InFlight::default();

    let created = format_created_at(&post.created_at, &ctx.config.date_format);
    let excerpt = ctx.excerpt_html(&post.content).into_string();
    let clamp = line_clamp_style(ctx.config.excerpt_lines);
    let post_href = routes::public_post_page(&post.id);
    let edit_href = routes::post_edit_page(&post.id);
    let title = post.title.clone();
    let categories = post.categories.clone();

    let hooks = ParentHooks {
        reload: reload_action,
        set_submitting: SetSubmitting::new(move |value| set_is_submitting.run(value)),
    };
    let api = ctx.api.clone();

    let on_delete = Callback::new(move |_: ()| {
        let post = post.clone();
        let api = api.clone();
        let hooks = hooks.clone();
        let in_flight = in_flight.clone();
        spawn_local(async move {
            let outcome = workflow::delete_post(&post, &api, &BrowserDialogs, &hooks, &in_flight).await;
            log::debug!("Delete post {} finished: {:?}", post.id, outcome);
        });
    });

    view! {
        <div class="post-summary">
            // Date and categories
            <div class="post-summary-meta">
                <div class="post-date">{created}</div>
                <CategoryBadges categories=categories />
            </div>

            // Title and menu toggle
            <div class="post-summary-header">
                <a href=post_href class="post-title">{title}</a>
                <button
                    type="button"
                    class="post-menu-toggle"
                    on:click=move |_| menu.update(|m| m.toggle())
                >
                    "..."
                </button>
            </div>

            <Show when=move || menu.get().is_open()>
                <PostMenu edit_href=edit_href.clone() on_delete=on_delete />
            </Show>

            <div class="post-excerpt" style=clamp inner_html=excerpt></div>
        </div>
    }
}
