//! Post Actions Menu
//!
//! Dropdown with "Edit" and "Delete" entries.

use leptos::prelude::*;

#[component]
pub fn PostMenu(
    #[prop(into)] edit_href: String,
    on_delete: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="post-menu">
            <div class="post-menu-item">
                <a href=edit_href>"Edit"</a>
            </div>
            <div
                class="post-menu-item danger"
                on:click=move |ev| {
                    ev.stop_propagation();
                    on_delete.run(());
                }
            >
                "Delete"
            </div>
        </div>
    }
}
