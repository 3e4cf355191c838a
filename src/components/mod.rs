//! UI Components
//!
//! Leptos components for the admin post list.

mod category_badges;
mod post_menu;
mod post_summary;

pub use category_badges::CategoryBadges;
pub use post_menu::PostMenu;
pub use post_summary::PostSummary;
