//! Page layout blocks

use leptos::prelude::*;

use crate::models::SectionId;
use crate::utils::class_names;

/// Anchored, vertically padded page block
#[component]
pub fn Section(
    id: SectionId,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <section id=id.id() class=class_names(&["relative scroll-mt-16 py-20 md:py-28", class.as_str()])>
            {children()}
        </section>
    }
}

/// Centered max-width container
#[component]
pub fn Wrapper(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! { <div class=class_names(&["mx-auto max-w-6xl px-6", class.as_str()])>{children()}</div> }
}
