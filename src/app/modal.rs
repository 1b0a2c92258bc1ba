use leptos::{ev::MouseEvent, prelude::*};
use leptos_use::{use_document, use_event_listener};

use super::content::Project;
use super::metrics::{extract_metrics, Metric};
use super::ui::{set_body_scroll_locked, Button, ButtonVariant};

/// Horizontal bar for one extracted metric, shared by the project cards and
/// the detail modal.
#[component]
pub fn MetricBar(metric: Metric) -> impl IntoView {
    let width = format!("{}%", metric.bar_width());
    view! {
        <div class="metric-bar mb-3">
            <div class="metric-bar-header flex items-baseline justify-between text-sm">
                <span class="metric-label font-bold">{format!("{}%", metric.value)}</span>
                <span class="metric-description text-gray-500">{metric.label}</span>
            </div>
            <div class="metric-bar-container">
                <div class="metric-bar-fill" style:width=width></div>
            </div>
        </div>
    }
}

/// Full-screen project detail dialog. Closes on Escape, on backdrop click,
/// and via the close button; locks body scroll for its lifetime.
#[component]
pub fn ProjectModal(project: Project, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let _ = use_event_listener(use_document(), leptos::ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            on_close.run(());
        }
    });

    Effect::new(move |_| set_body_scroll_locked(true));
    on_cleanup(|| set_body_scroll_locked(false));

    // only a direct backdrop click closes, not clicks inside the dialog
    let backdrop_click = move |ev: MouseEvent| {
        if ev.target() == ev.current_target() {
            on_close.run(());
        }
    };

    let metrics = extract_metrics(project.impact);
    let metric_cards = metrics
        .iter()
        .map(|m| {
            view! {
                <div class="metric-card rounded-md bg-gray-50 p-4 text-center">
                    <div class="metric-card-value text-2xl font-bold">
                        {format!("{}%", m.value)}
                    </div>
                    <div class="metric-card-label text-sm text-gray-500">{m.label.clone()}</div>
                </div>
            }
        })
        .collect_view();
    let metric_bars = metrics
        .iter()
        .cloned()
        .map(|metric| view! { <MetricBar metric /> })
        .collect_view();
    let has_metrics = !metrics.is_empty();

    view! {
        <div class="modal-backdrop" on:click=backdrop_click>
            <div class="modal-content" role="dialog" aria-modal="true" aria-labelledby="modal-title">
                <Button
                    variant=ButtonVariant::Close
                    class="modal-close"
                    aria_label="Close modal".to_string()
                    on_click=on_close
                >
                    "✕"
                </Button>

                <div class="modal-header mb-6 flex items-center gap-4">
                    <div class="modal-visual text-4xl">{project.visual}</div>
                    <div class="modal-header-text">
                        <h2 id="modal-title" class="modal-title text-2xl font-bold">
                            {project.title}
                        </h2>
                        <span class="modal-category text-sm text-gray-500">{project.category}</span>
                    </div>
                </div>

                {has_metrics
                    .then(|| {
                        view! {
                            <div class="modal-metrics-highlight mb-6">
                                <h3 class="metrics-highlight-title mb-2 font-bold">"Key Results"</h3>
                                <div class="metrics-grid grid grid-cols-2 gap-4 sm:grid-cols-3">
                                    {metric_cards}
                                </div>
                            </div>
                        }
                    })}

                <div class="modal-body space-y-6">
                    <section class="modal-section problem-section">
                        <div class="section-header mb-2 flex items-center gap-2">
                            <span class="section-icon">"⚠️"</span>
                            <h3 class="font-bold">"The Challenge"</h3>
                        </div>
                        <p class="section-content">{project.problem}</p>
                    </section>

                    <section class="modal-section solution-section">
                        <div class="section-header mb-2 flex items-center gap-2">
                            <span class="section-icon">"💡"</span>
                            <h3 class="font-bold">"The Solution"</h3>
                        </div>
                        <p class="section-content">{project.solution}</p>
                    </section>

                    <section class="modal-section impact-section">
                        <div class="section-header mb-2 flex items-center gap-2">
                            <span class="section-icon">"📈"</span>
                            <h3 class="font-bold">"Impact & Results"</h3>
                        </div>
                        <p class="section-content">{project.impact}</p>

                        {has_metrics
                            .then(|| {
                                view! {
                                    <div class="modal-metrics-visualization mt-4">
                                        <h4 class="metrics-viz-title mb-2 font-medium">
                                            "Detailed Improvements"
                                        </h4>
                                        {metric_bars}
                                    </div>
                                }
                            })}
                    </section>
                </div>
            </div>
        </div>
    }
}
