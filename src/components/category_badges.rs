use leptos::prelude::*;

use crate::models::Category;
use crate::routes;

/// Horizontal list of category links
#[component]
pub fn CategoryBadges(categories: Vec<Category>) -> impl IntoView {
    view! {
        <div class="category-badges">
            {categories
                .into_iter()
                .map(|category| {
                    let href = routes::category_admin_page(&category.id);
                    view! {
                        <div class="category-badge">
                            <a href=href>{category.name}</a>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
