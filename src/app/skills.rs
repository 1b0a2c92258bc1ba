use leptos::prelude::*;
use leptos_meta::Title;

use super::content::{self, Skill, SkillCategory};
use super::lazy::LazySection;

#[component]
pub fn SkillsPage() -> impl IntoView {
    let categories = content::skill_categories();

    view! {
        <Title text="Skills" />
        <div class="skills-page page-enter mx-auto w-full max-w-4xl px-4 py-8 sm:px-6 lg:px-8">
            <section class="header mb-8 text-center">
                <h1 class="text-3xl font-bold">"Skills & Expertise"</h1>
                <p class="subtitle mt-2 text-gray-600">
                    "A comprehensive toolkit for operational excellence"
                </p>
            </section>

            <div class="skills-categories space-y-10">
                {categories
                    .into_iter()
                    .map(|category| {
                        view! {
                            <LazySection threshold=0.1>
                                <CategorySection category=category.clone() />
                            </LazySection>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn CategorySection(category: SkillCategory) -> impl IntoView {
    view! {
        <section class="skill-category animate-fade-in">
            <h2 class="mb-4 text-xl font-bold">{category.category}</h2>
            <div class="skills-grid grid grid-cols-1 gap-x-8 gap-y-4 md:grid-cols-2">
                {category
                    .skills
                    .into_iter()
                    .map(|skill| view! { <SkillMeter skill /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn SkillMeter(skill: Skill) -> impl IntoView {
    view! {
        <div class="skill">
            <div class="mb-1 flex items-baseline justify-between">
                <span class="skill-name font-medium">{skill.name}</span>
                <span class="skill-level text-sm text-gray-500">
                    {format!("{}%", skill.level)}
                </span>
            </div>
            <div class="skill-bar-container">
                <div class="skill-bar-fill" style:width=format!("{}%", skill.level)></div>
            </div>
            <p class="skill-description mt-1 text-sm text-gray-500">{skill.description}</p>
        </div>
    }
}
