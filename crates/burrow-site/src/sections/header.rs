//! Sticky navigation header

use leptos::prelude::*;

use crate::components::{Logo, Wrapper};
use crate::models::NAV_LINKS;
use crate::models::content::BRAND;

#[component]
pub fn NavHeader() -> impl IntoView {
    view! {
        <header class="sticky top-0 z-40 border-b border-white/10 backdrop-blur supports-[backdrop-filter]:bg-[#2F3B2FCC]">
            <Wrapper class="flex items-center justify-between py-3">
                <a href="#" class="flex items-center gap-3">
                    <Logo class="h-9 w-9" />
                    <span class="font-semibold tracking-wide">{BRAND}</span>
                </a>
                <nav class="hidden items-center gap-8 text-sm md:flex" aria-label="Primary">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.target.href()
                                    class="transition-colors hover:text-[var(--copper)]"
                                >
                                    {link.label}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </nav>
            </Wrapper>
        </header>
    }
}
