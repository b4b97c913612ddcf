//! Features section: how we build, and the principles behind it

use leptos::prelude::*;

use crate::components::{Card, CardContent, CardHeader, CardTitle, IconSvg, Section, Wrapper};
use crate::models::SectionId;
use crate::models::content::{FEATURES, FeatureCard, PRINCIPLES};
use crate::motion::{Reveal, stagger_delay};

#[component]
pub fn FeaturesSection(
    #[prop(default = FEATURES)] features: &'static [FeatureCard],
    #[prop(default = PRINCIPLES)] principles: &'static [&'static str],
) -> impl IntoView {
    view! {
        <Section id=SectionId::Features>
            <Wrapper class="grid gap-10 md:grid-cols-[1.2fr_1fr]">
                <div class="grid gap-6">
                    <Reveal>
                        <h2 class="text-3xl font-bold md:text-4xl">"How we build"</h2>
                        <p class="mt-4 max-w-prose text-white/80">
                            "Our approach pairs considered design with reliable engineering. We build with people, not for them. Everything runs lean, observable, and inclusive."
                        </p>
                    </Reveal>
                    <div class="grid gap-4 md:grid-cols-2">
                        {features
                            .iter()
                            .enumerate()
                            .map(|(index, feature)| {
                                view! {
                                    <Reveal delay_ms=stagger_delay(index)>
                                        <Card class="h-full transition duration-300 hover:-translate-y-1 hover:border-[var(--copper)]/40">
                                            <CardHeader class="flex-row items-center gap-3">
                                                <span class="text-[var(--copper)]">
                                                    <IconSvg icon=feature.icon class="h-5 w-5" />
                                                </span>
                                                <CardTitle class="text-lg">{feature.title}</CardTitle>
                                            </CardHeader>
                                            <CardContent class="text-sm text-white/80">
                                                {feature.description}
                                            </CardContent>
                                        </Card>
                                    </Reveal>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
                <Reveal class="rounded-3xl border border-white/10 bg-[var(--bark)]/50 p-6">
                    <h3 class="text-xl font-semibold">"Principles we work by"</h3>
                    <ul class="mt-4 grid gap-3 text-sm text-white/85" aria-label="Principles">
                        {principles
                            .iter()
                            .map(|principle| {
                                view! {
                                    <li class="flex gap-3">
                                        <span class="mt-1 h-2 w-2 shrink-0 rounded-full bg-[var(--copper)]"></span>
                                        <span>{*principle}</span>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                </Reveal>
            </Wrapper>
        </Section>
    }
}
