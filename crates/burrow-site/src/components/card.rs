//! Card primitive: a bordered container with header, title, and content regions

use leptos::prelude::*;

use crate::utils::class_names;

pub const CARD_CLASSES: &str = "rounded-2xl border border-white/10 bg-[var(--moss)]/60 shadow-[0_8px_30px_rgba(0,0,0,0.25)] backdrop-blur";
pub const CARD_HEADER_CLASSES: &str = "flex flex-col gap-2 p-5";
pub const CARD_TITLE_CLASSES: &str = "font-semibold text-lg text-white";
pub const CARD_CONTENT_CLASSES: &str = "p-5 pt-0 text-sm text-white/80";

#[component]
pub fn Card(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! { <div class=class_names(&[CARD_CLASSES, class.as_str()])>{children()}</div> }
}

#[component]
pub fn CardHeader(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! { <div class=class_names(&[CARD_HEADER_CLASSES, class.as_str()])>{children()}</div> }
}

#[component]
pub fn CardTitle(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! { <h3 class=class_names(&[CARD_TITLE_CLASSES, class.as_str()])>{children()}</h3> }
}

#[component]
pub fn CardContent(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! { <div class=class_names(&[CARD_CONTENT_CLASSES, class.as_str()])>{children()}</div> }
}
