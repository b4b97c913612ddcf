//! Footer with brand mark, repeated navigation, and copyright

use leptos::prelude::*;

use crate::clock::{copyright_line, current_year};
use crate::components::{Logo, Wrapper};
use crate::models::NAV_LINKS;
use crate::models::content::{BRAND, TAGLINE};

/// Page footer; `year` defaults to the current calendar year
#[component]
pub fn Footer(#[prop(default = current_year())] year: i32) -> impl IntoView {
    view! {
        <footer class="border-t border-white/10">
            <Wrapper class="grid gap-6 py-10 text-sm text-white/70 md:grid-cols-3">
                <div class="flex items-center gap-3">
                    <Logo class="h-8 w-8" />
                    <div>
                        <p class="font-semibold text-white">{BRAND}</p>
                        <p>{TAGLINE}</p>
                    </div>
                </div>
                <nav class="grid grid-cols-3 gap-3" aria-label="Footer">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a href=link.target.href() class="transition-colors hover:text-[var(--copper)]">
                                    {link.label}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </nav>
                <p class="md:text-right">{copyright_line(year)}</p>
            </Wrapper>
        </footer>
    }
}
