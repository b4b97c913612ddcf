//! Apps section: product cards and outbound profile links

use leptos::prelude::*;

use crate::components::{
    Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, IconSvg, Section, Wrapper,
};
use crate::models::content::{APPS, AppCard};
use crate::models::{EXTERNAL_LINKS, SectionId};
use crate::motion::{Reveal, stagger_delay};

/// Renders `apps` as cards, one per entry, in the given order
#[component]
pub fn AppsSection(#[prop(default = APPS)] apps: &'static [AppCard]) -> impl IntoView {
    view! {
        <Section id=SectionId::Apps class="bg-[#243024]">
            <Wrapper>
                <Reveal class="flex flex-col gap-6 md:flex-row md:items-center md:justify-between">
                    <div>
                        <h2 class="text-3xl font-bold md:text-4xl">"Living product experiments"</h2>
                        <p class="mt-2 max-w-xl text-white/80">
                            "Bit Burrow builds small, purposeful apps that favor clarity over clutter. Everything ships with real instrumentation, generous docs, and careful polish."
                        </p>
                    </div>
                    <div class="flex gap-3">
                        {EXTERNAL_LINKS
                            .iter()
                            .enumerate()
                            .map(|(index, link)| {
                                let variant = if index == 0 {
                                    ButtonVariant::Outline
                                } else {
                                    ButtonVariant::Solid
                                };
                                view! {
                                    <a href=link.href target="_blank" rel="noreferrer">
                                        <Button variant=variant class="flex items-center gap-2 rounded-2xl px-5">
                                            <IconSvg icon=link.icon class="h-4 w-4" />
                                            {link.label}
                                        </Button>
                                    </a>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </Reveal>

                <div class="mt-12 grid gap-6 md:grid-cols-3">
                    {apps
                        .iter()
                        .enumerate()
                        .map(|(index, app)| {
                            view! {
                                <Reveal delay_ms=stagger_delay(index)>
                                    <Card class="h-full bg-[var(--bark)]/50 transition duration-300 hover:-translate-y-1 hover:border-[var(--copper)]/40">
                                        <CardHeader>
                                            <CardTitle>{app.title}</CardTitle>
                                        </CardHeader>
                                        <CardContent>{app.description}</CardContent>
                                    </Card>
                                </Reveal>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </Wrapper>
        </Section>
    }
}
