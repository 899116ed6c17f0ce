//! PageFrame: root wrapper of a page.
//!
//! Puts `id` and `data-page-category` on the root element so pages can be
//! told apart in the DOM:
//! ```rust,ignore
//! view! {
//!     <PageFrame page_id="a001_merch--list" category="list">
//!         <div class="page__content">...</div>
//!     </PageFrame>
//! }
//! ```

use leptos::prelude::*;

#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`
    page_id: &'static str,
    category: &'static str,
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let full_class = if class.is_empty() {
        "page".to_string()
    } else {
        format!("page {class}")
    };

    view! {
        <div
            id=page_id
            class=full_class
            data-page-category=category
        >
            {children()}
        </div>
    }
}
