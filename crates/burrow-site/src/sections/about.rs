//! About section: who we are, the tools we use, and how we got here

use leptos::prelude::*;

use crate::components::{Logo, Section, Wrapper};
use crate::models::SectionId;
use crate::models::content::{BRAND, TAGS, TIMELINE, TimelineEntry};
use crate::motion::{Reveal, stagger_delay};

#[component]
pub fn AboutSection(
    #[prop(default = TAGS)] tags: &'static [&'static str],
    #[prop(default = TIMELINE)] timeline: &'static [TimelineEntry],
) -> impl IntoView {
    view! {
        <Section id=SectionId::About class="bg-[#243024]">
            <Wrapper>
                <div class="grid gap-8 md:grid-cols-5 md:items-center">
                    <Reveal class="md:col-span-3">
                        <h2 class="text-3xl font-bold md:text-4xl">{format!("About {BRAND}")}</h2>
                        <p class="mt-4 max-w-prose text-white/80">
                            "We're a small, senior team that enjoys the quiet work of making good software: the kind you can maintain, extend, and trust. Our process is hands-on and transparent. We build carefully toward where you need to go."
                        </p>
                        <ul class="mt-6 flex flex-wrap gap-3 text-xs" aria-label="Tools and practices">
                            {tags
                                .iter()
                                .map(|tag| {
                                    view! {
                                        <li class="rounded-full border border-white/10 bg-white/5 px-3 py-1 transition-colors hover:border-[var(--copper)]/60 hover:text-[var(--copper)]">
                                            {*tag}
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </ul>
                    </Reveal>
                    <Reveal class="rounded-3xl border border-white/10 bg-[var(--bark)]/50 p-6 md:col-span-2">
                        <h3 class="text-lg font-semibold">"Why \"Burrow\"?"</h3>
                        <p class="mt-2 text-sm text-white/80">
                            "We like the underground work: the tunnels, the foundations, the parts you do not see but rely on. We build from the ground in, with care."
                        </p>
                        <div class="mt-4 flex items-center gap-3">
                            <Logo class="h-10 w-10" />
                            <p class="text-sm text-white/70">"Small bits. Deep builds."</p>
                        </div>
                    </Reveal>
                </div>

                <Timeline entries=timeline />
            </Wrapper>
        </Section>
    }
}

/// Vertical list of dated milestones, oldest first
#[component]
pub fn Timeline(entries: &'static [TimelineEntry]) -> impl IntoView {
    view! {
        <ol class="relative mt-16 grid gap-8 border-l border-white/10 pl-8" aria-label="Our story">
            {entries
                .iter()
                .enumerate()
                .map(|(index, entry)| {
                    view! {
                        <li class="relative">
                            <span class="absolute -left-[2.4rem] top-1.5 h-3 w-3 rounded-full border-2 border-[var(--copper)] bg-[var(--moss)]"></span>
                            <Reveal delay_ms=stagger_delay(index)>
                                <p class="text-xs uppercase tracking-widest text-[var(--copper)]">{entry.year}</p>
                                <h3 class="mt-1 text-lg font-semibold text-white">{entry.title}</h3>
                                <p class="mt-1 text-sm text-white/75">{entry.detail}</p>
                            </Reveal>
                        </li>
                    }
                })
                .collect::<Vec<_>>()}
        </ol>
    }
}
