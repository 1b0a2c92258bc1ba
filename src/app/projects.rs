use leptos::prelude::*;
use leptos_meta::Title;

use super::content::{self, Project};
use super::metrics::extract_metrics;
use super::modal::{MetricBar, ProjectModal};
use super::ui::{Button, ButtonVariant, Card, CardVariant};

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let projects = content::projects();
    let categories = content::project_categories(&projects);
    let projects = StoredValue::new(projects);
    let (active_filter, set_active_filter) = signal("All");
    let (selected, set_selected) = signal(None::<Project>);

    let filtered = Memo::new(move |_| {
        let filter = active_filter.get();
        projects.with_value(|all| {
            all.iter()
                .filter(|p| filter == "All" || p.category == filter)
                .copied()
                .collect::<Vec<_>>()
        })
    });

    view! {
        <Title text="Projects" />
        <div class="projects-page page-enter mx-auto w-full max-w-6xl px-4 py-8 sm:px-6 lg:px-8">
            <section class="header mb-8 text-center">
                <h1 class="text-3xl font-bold">"Projects & Case Studies"</h1>
                <p class="subtitle mt-2 text-gray-600">
                    "Demonstrating operational strategy through real-world impact"
                </p>
                <div class="visual-legend mt-2 flex flex-wrap justify-center gap-4 text-sm text-gray-500">
                    <span class="legend-item">"📊 Charts show quantifiable results"</span>
                    <span class="legend-item">"🎯 Icons represent project focus"</span>
                </div>
            </section>

            <section class="filter-section mb-8">
                <div class="filter-label mb-2 font-medium">"Filter by category:"</div>
                <div class="filter-buttons flex flex-wrap gap-2">
                    {categories
                        .into_iter()
                        .map(|category| {
                            view! {
                                <Button
                                    variant=ButtonVariant::Filter
                                    active=Signal::derive(move || active_filter.get() == category)
                                    attr:aria-pressed=move || {
                                        (active_filter.get() == category).to_string()
                                    }
                                    on_click=Callback::new(move |_| set_active_filter(category))
                                >
                                    {category}
                                </Button>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="filter-count mt-2 text-sm text-gray-500">
                    {move || {
                        let count = filtered.get().len();
                        format!(
                            "Showing {} {}",
                            count,
                            if count == 1 { "project" } else { "projects" },
                        )
                    }}
                </div>
            </section>

            <section class="projects-grid grid grid-cols-1 gap-6 md:grid-cols-2">
                {move || {
                    filtered
                        .get()
                        .into_iter()
                        .map(|project| {
                            view! {
                                <ProjectCard
                                    project
                                    on_view=Callback::new(move |p| set_selected(Some(p)))
                                />
                            }
                        })
                        .collect_view()
                }}
            </section>

            {move || {
                selected
                    .get()
                    .map(|project| {
                        view! {
                            <ProjectModal
                                project
                                on_close=Callback::new(move |_| set_selected(None))
                            />
                        }
                    })
            }}
        </div>
    }
}

#[component]
fn ProjectCard(project: Project, on_view: Callback<Project>) -> impl IntoView {
    let metrics = extract_metrics(project.impact);
    let badges = metrics
        .iter()
        .map(|m| {
            view! {
                <div class="metric-badge rounded-md bg-gray-50 px-3 py-2 text-center">
                    <div class="metric-value font-bold">{format!("{}%", m.value)}</div>
                    <div class="metric-icon text-sm">"📊"</div>
                </div>
            }
        })
        .collect_view();
    let bars = metrics
        .iter()
        .cloned()
        .map(|metric| view! { <MetricBar metric /> })
        .collect_view();
    let has_metrics = !metrics.is_empty();

    view! {
        <Card variant=CardVariant::Elevated hoverable=true class="project-card flex flex-col">
            <div class="project-header-visual mb-4 flex items-center justify-between">
                <div class="project-visual text-4xl">{project.visual}</div>
                <div class="project-category text-sm text-gray-500">{project.category}</div>
            </div>

            <h2 class="project-title mb-4 text-xl font-bold">{project.title}</h2>

            {has_metrics
                .then(|| {
                    view! { <div class="metrics-summary mb-4 flex flex-wrap gap-2">{badges}</div> }
                })}

            <div class="project-section problem mb-4">
                <div class="section-header mb-1 flex items-center gap-2">
                    <span class="section-icon">"⚠️"</span>
                    <h3 class="font-bold">"Problem"</h3>
                </div>
                <p>{project.problem}</p>
            </div>

            <div class="project-section solution mb-4">
                <div class="section-header mb-1 flex items-center gap-2">
                    <span class="section-icon">"💡"</span>
                    <h3 class="font-bold">"Solution"</h3>
                </div>
                <p>{project.solution}</p>
            </div>

            <div class="project-section impact mb-4">
                <div class="section-header mb-1 flex items-center gap-2">
                    <span class="section-icon">"📈"</span>
                    <h3 class="font-bold">"Impact & Results"</h3>
                </div>
                <p>{project.impact}</p>

                {has_metrics
                    .then(|| {
                        view! {
                            <div class="metrics-visualization mt-4">
                                <h4 class="metrics-title mb-2 font-medium">"Key Improvements"</h4>
                                {bars}
                            </div>
                        }
                    })}
            </div>

            <Button
                variant=ButtonVariant::Gradient
                full_width=true
                class="view-details-btn mt-auto"
                aria_label=format!("View details for {}", project.title)
                on_click=Callback::new(move |_| on_view.run(project))
            >
                "View Full Details"
            </Button>
        </Card>
    }
}
