//! Hero: headline, call to action, and the studio summary panel

use leptos::prelude::*;

use crate::components::{Button, ButtonVariant, Icon, IconSvg, Wrapper};
use crate::models::content::{COLLABORATION_TOOLS, FOCUS_AREAS, TAGLINE};
use crate::models::{SectionId, THEME};
use crate::motion::stagger_delay;

/// Layered radial gradients giving the hero its warm glow
pub fn hero_glow() -> String {
    format!(
        "background: radial-gradient(60% 60% at 50% 35%, {} 0%, {} 65%), radial-gradient(40% 40% at 80% 10%, rgba(255, 255, 255, 0.06) 0%, rgba(0, 0, 0, 0) 70%);",
        THEME.copper.to_rgba(0.16),
        THEME.moss.to_rgba(0.0),
    )
}

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="relative">
            <div aria-hidden="true" class="pointer-events-none absolute inset-0" style=hero_glow()></div>
            <Wrapper>
                <div class="grid items-center gap-10 py-24 md:grid-cols-2 md:py-32">
                    <div class="motion-rise">
                        <div class="flex items-center gap-3 text-[var(--copper)]">
                            <IconSvg icon=Icon::Leaf class="h-5 w-5" />
                            <span class="text-xs uppercase tracking-widest">{TAGLINE}</span>
                        </div>
                        <h1 class="mt-4 text-4xl font-extrabold leading-tight md:text-6xl">
                            "Quiet code."
                            <span class="text-[var(--copper)]">" Crafted deep."</span>
                        </h1>
                        <p class="mt-4 max-w-xl text-lg text-white/80">
                            "We design and build small, robust software systems shaped with the patience of hand tools and the precision of modern engineering."
                        </p>
                        <div class="mt-8 flex flex-wrap gap-4">
                            <a href=SectionId::Apps.href()>
                                <Button variant=ButtonVariant::Glow class="rounded-2xl px-6">
                                    "Explore our apps"
                                </Button>
                            </a>
                            <a href=SectionId::About.href()>
                                <Button variant=ButtonVariant::Ghost class="rounded-2xl px-6">
                                    "Meet the team"
                                </Button>
                            </a>
                        </div>
                    </div>

                    <SummaryPanel />
                </div>
            </Wrapper>
        </div>
    }
}

/// Decorative panel listing focus areas and how we collaborate
#[component]
fn SummaryPanel() -> impl IntoView {
    view! {
        <div class="motion-settle relative overflow-hidden rounded-3xl border border-white/10 bg-[var(--bark)]/60 p-8 shadow-lg">
            <div class="absolute inset-0 bg-gradient-to-br from-white/5 to-transparent"></div>
            <div class="relative grid gap-6">
                <div>
                    <h2 class="text-2xl font-semibold text-white">"Small teams, deep focus"</h2>
                    <p class="mt-2 text-sm text-white/75">
                        "Each engagement pairs you with senior practitioners who stay close to the work. No hand-offs, no mystery layers."
                    </p>
                </div>
                <ul class="grid gap-4">
                    {FOCUS_AREAS
                        .iter()
                        .enumerate()
                        .map(|(index, area)| {
                            view! {
                                <li
                                    class="motion-rise flex items-center gap-3 rounded-2xl border border-white/10 bg-black/10 p-4 transition-colors hover:border-[var(--copper)]/40"
                                    style=format!("animation-delay: {}ms;", stagger_delay(index.saturating_add(3)))
                                >
                                    <IconSvg icon=area.icon class="h-6 w-6 text-[var(--copper)]" />
                                    <span class="text-sm text-white/80">{area.label}</span>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
                <div class="flex items-center justify-between rounded-2xl border border-white/10 bg-black/20 p-4">
                    <div>
                        <p class="text-xs uppercase tracking-widest text-white/60">"Collaboration"</p>
                        <p class="text-sm text-white/80">{COLLABORATION_TOOLS}</p>
                    </div>
                    <Button class="rounded-2xl px-5 py-2 text-xs uppercase tracking-wide">
                        "Start a project"
                    </Button>
                </div>
            </div>
        </div>
    }
}
