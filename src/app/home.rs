use leptos::prelude::*;
use leptos_meta::Title;

use super::lazy::{LazyImage, LazySection, Srcset};
use super::ui::{Card, CardVariant, Section, SectionBackground, SectionSpacing};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Home" />
        <div class="home-page page-enter">
            <Hero />

            <LazySection threshold=0.1 root_margin="100px">
                <Section
                    background=SectionBackground::Secondary
                    spacing=SectionSpacing::Lg
                    class="introduction text-center"
                    aria_label="Introduction".to_string()
                >
                    <h2 class="mb-4 text-2xl font-bold">"Welcome"</h2>
                    <p class="mx-auto max-w-3xl leading-relaxed text-gray-600">
                        "I'm Anabel, an Operational Strategist with a strong foundation in Business Administration and a passion for optimizing processes and driving organizational success."
                    </p>
                </Section>
            </LazySection>

            <LazySection threshold=0.1 root_margin="100px">
                <Section spacing=SectionSpacing::Lg class="highlights">
                    <h2 class="mb-8 text-center text-2xl font-bold">"Key Strengths"</h2>
                    <div class="highlights-grid grid grid-cols-1 gap-6 md:grid-cols-3">
                        <Card variant=CardVariant::Elevated hoverable=true class="highlight-card">
                            <h3 class="mb-2 font-bold">"Strategic Operations"</h3>
                            <p class="text-gray-600">
                                "Expertise in developing and implementing operational strategies that drive efficiency"
                            </p>
                        </Card>
                        <Card variant=CardVariant::Elevated hoverable=true class="highlight-card">
                            <h3 class="mb-2 font-bold">"Business Administration"</h3>
                            <p class="text-gray-600">
                                "Strong academic foundation with practical management experience"
                            </p>
                        </Card>
                        <Card variant=CardVariant::Elevated hoverable=true class="highlight-card">
                            <h3 class="mb-2 font-bold">"Virtual Assistance"</h3>
                            <p class="text-gray-600">
                                "Skilled in remote collaboration and digital workflow optimization"
                            </p>
                        </Card>
                    </div>
                </Section>
            </LazySection>
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    // above the fold, so the avatar skips the visibility gate entirely
    let srcset = Srcset::new()
        .candidate("/avatar-placeholder.svg", 250)
        .candidate("/avatar-placeholder.svg", 350)
        .candidate("/avatar-placeholder.svg", 400);

    view! {
        <section class="hero mx-auto flex max-w-6xl flex-col-reverse items-center gap-8 px-4 py-16 lg:flex-row lg:justify-between">
            <div class="hero-content max-w-2xl">
                <h1 class="headline mb-4 text-4xl font-bold leading-tight">
                    "Transforming Operations Into Competitive Advantages"
                </h1>
                <p class="subheadline mb-8 text-lg leading-relaxed text-gray-600">
                    "Operational Strategist with Business Administration expertise who turns complex processes into streamlined systems that scale. Ready to drive efficiency and growth at top-tier organizations."
                </p>
                <div class="cta-buttons flex flex-wrap gap-4">
                    <a href="/projects" class="btn btn-primary">
                        "View My Work"
                    </a>
                    <a href="/contact" class="btn btn-secondary">
                        "Get In Touch"
                    </a>
                </div>
            </div>
            <div class="hero-image flex-shrink-0">
                <LazyImage
                    src="/avatar-placeholder.svg"
                    srcset=srcset
                    sizes="(max-width: 480px) 250px, (max-width: 768px) 350px, 400px".to_string()
                    alt="Anabel - Operational Strategist and Business Administrator"
                    width=400
                    height=400
                    priority=true
                    placeholder=false
                    class="avatar-image rounded-full"
                />
            </div>
        </section>
    }
}
