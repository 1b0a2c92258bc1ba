use leptos::prelude::*;
use leptos_meta::Title;

use super::content::{self, Role};
use super::lazy::LazySection;
use super::ui::{Card, CardVariant};

#[component]
pub fn ExperiencePage() -> impl IntoView {
    let history = content::work_history();

    view! {
        <Title text="Experience" />
        <div class="experience-page page-enter mx-auto w-full max-w-4xl px-4 py-8 sm:px-6 lg:px-8">
            <section class="header mb-8 text-center">
                <h1 class="text-3xl font-bold">"Professional Experience"</h1>
                <p class="subtitle mt-2 text-gray-600">
                    "A track record of operational impact across strategy, coordination, and execution"
                </p>
            </section>

            <div class="experience-timeline space-y-8">
                {history
                    .into_iter()
                    .map(|role| {
                        view! {
                            <LazySection threshold=0.1 root_margin="0px" min_height=160>
                                <RoleCard role=role.clone() />
                            </LazySection>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn RoleCard(role: Role) -> impl IntoView {
    view! {
        <div class="animate-fade-in">
            <Card variant=CardVariant::Bordered class="experience-card">
                <div class="mb-4 flex flex-col justify-between gap-1 sm:flex-row sm:items-start">
                    <div>
                        <h2 class="text-xl font-bold">{role.title}</h2>
                        <p class="company text-gray-600">{role.company}</p>
                    </div>
                    <div class="dates shrink-0 font-bold text-gray-500">{role.dates}</div>
                </div>
                <ul class="achievements list-disc space-y-2 pl-5 text-gray-700">
                    {role
                        .achievements
                        .into_iter()
                        .map(|a| view! { <li>{a}</li> })
                        .collect_view()}
                </ul>
            </Card>
        </div>
    }
}
