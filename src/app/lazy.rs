mod gate;
mod media;

pub use gate::{GateConfig, GateCore};
pub use media::{LoadOutcome, LoadTracker, Srcset};

use leptos::{either::Either, html, prelude::*};
use thiserror::Error;

#[cfg(feature = "hydrate")]
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

/// Failures the lazy-reveal components can hit.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LazyLoadError {
    #[error("viewport intersection observer is unavailable; revealing content immediately")]
    ObserverUnavailable,
    #[error("failed to load image resource `{0}`")]
    ResourceLoadFailed(String),
}

#[cfg(feature = "hydrate")]
fn observer_supported() -> bool {
    web_sys::window().is_some_and(|w| w.get("IntersectionObserver").is_some())
}

/// Wires a one-shot visibility gate to `target`.
///
/// The returned signal starts false for non-eager gates and flips true at
/// most once, on the first qualifying intersection. The server never
/// observes; unrevealed HTML is handed to the client, which attaches the
/// observer during hydration.
pub fn use_visibility_gate(target: NodeRef<html::Div>, config: GateConfig) -> ReadSignal<bool> {
    // both server and client render the same initial state, so hydration
    // never sees a mismatch
    let (revealed, set_revealed) = signal(config.eager);

    #[cfg(feature = "hydrate")]
    {
        let gate = GateCore::new(&config, observer_supported());
        if gate.revealed() && !config.eager {
            // watcher is missing; fail open right after hydration rather
            // than leave the content permanently hidden
            log::warn!("{}", LazyLoadError::ObserverUnavailable);
            Effect::new(move |_| set_revealed.set(true));
        } else if gate.wants_observation() {
            let gate = StoredValue::new(gate);
            let _ = use_intersection_observer_with_options(
                target,
                move |entries, observer| {
                    let mut fired = false;
                    gate.update_value(|gate| {
                        for entry in &entries {
                            fired |= gate.on_intersection(
                                entry.is_intersecting(),
                                entry.intersection_ratio(),
                            );
                        }
                    });
                    if fired {
                        set_revealed.set(true);
                        observer.disconnect();
                    }
                },
                UseIntersectionObserverOptions::default()
                    .root_margin(config.root_margin.clone())
                    .thresholds(vec![config.threshold]),
            );
            on_cleanup(move || {
                gate.update_value(|gate| {
                    gate.on_unmount();
                });
            });
        }
    }

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (&target, &set_revealed);
    }

    revealed
}

/// Image that defers its fetch until the surrounding region scrolls into
/// view, with a sized placeholder while pending and a visible affordance on
/// failure. `priority` skips observation for above-the-fold media.
#[component]
pub fn LazyImage(
    #[prop(into)] src: String,
    #[prop(optional)] srcset: Srcset,
    #[prop(optional, into)] sizes: Option<String>,
    #[prop(into)] alt: String,
    #[prop(optional)] width: Option<u32>,
    #[prop(optional)] height: Option<u32>,
    #[prop(default = true)] placeholder: bool,
    #[prop(optional)] priority: bool,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] on_load: Option<Callback<()>>,
    #[prop(optional, into)] on_error: Option<Callback<LazyLoadError>>,
) -> impl IntoView {
    let container = NodeRef::<html::Div>::new();
    let config = if priority {
        GateConfig::eager()
    } else {
        // low threshold + margin so the fetch starts just before entry
        GateConfig::new(0.01, "50px")
    };
    let revealed = use_visibility_gate(container, config);

    let tracker = StoredValue::new(LoadTracker::default());
    let (outcome, set_outcome) = signal(LoadOutcome::Pending);

    let handle_load = move |_| {
        let mut first = false;
        tracker.update_value(|t| first = t.on_load());
        if first {
            set_outcome.set(LoadOutcome::Loaded);
            if let Some(cb) = on_load {
                cb.run(());
            }
        }
    };
    let err_src = src.clone();
    let handle_error = move |_| {
        let mut first = false;
        tracker.update_value(|t| first = t.on_error());
        if first {
            let err = LazyLoadError::ResourceLoadFailed(err_src.clone());
            log::error!("{err}");
            set_outcome.set(LoadOutcome::Failed);
            if let Some(cb) = on_error {
                cb.run(err);
            }
        }
    };

    let block_height = format!("{}px", height.unwrap_or(200));
    let placeholder_height = block_height.clone();
    let srcset_attr = srcset.attr();
    let img_class = class.clone();

    view! {
        <div node_ref=container class=format!("lazy-image-container {class}")>
            {move || {
                (placeholder && outcome.get() == LoadOutcome::Pending)
                    .then(|| {
                        view! {
                            <div
                                class="image-placeholder animate-pulse"
                                style:min-height=placeholder_height.clone()
                            ></div>
                        }
                    })
            }}
            {move || {
                (outcome.get() == LoadOutcome::Failed)
                    .then(|| {
                        view! {
                            <div
                                class="image-error flex items-center justify-center"
                                style:min-height=block_height.clone()
                            >
                                <span>"Failed to load image"</span>
                            </div>
                        }
                    })
            }}
            {move || {
                revealed
                    .get()
                    .then(|| {
                        view! {
                            <img
                                src=src.clone()
                                srcset=srcset_attr.clone()
                                sizes=sizes.clone()
                                alt=alt.clone()
                                width=width
                                height=height
                                loading=if priority { "eager" } else { "lazy" }
                                decoding="async"
                                fetchpriority=priority.then_some("high")
                                class=format!("transition-opacity duration-300 {img_class}")
                                class=("opacity-0", move || outcome.get() != LoadOutcome::Loaded)
                                class=("hidden", move || outcome.get() == LoadOutcome::Failed)
                                on:load=handle_load
                                on:error=handle_error.clone()
                            />
                        }
                    })
            }}
        </div>
    }
}

/// Defers rendering of its children until the placeholder region scrolls
/// into view. One-shot: once revealed, children stay mounted even if the
/// region leaves the viewport again.
#[component]
pub fn LazySection(
    #[prop(default = 0.1)] threshold: f64,
    #[prop(into, default = String::from("50px"))] root_margin: String,
    #[prop(default = 200)] min_height: u32,
    children: ChildrenFn,
) -> impl IntoView {
    let container = NodeRef::<html::Div>::new();
    let revealed = use_visibility_gate(
        container,
        GateConfig {
            threshold,
            root_margin,
            eager: false,
        },
    );
    let placeholder_height = format!("{min_height}px");

    view! {
        <div node_ref=container>
            {move || {
                if revealed.get() {
                    Either::Left(children())
                } else {
                    Either::Right(
                        view! { <div style:min-height=placeholder_height.clone()></div> },
                    )
                }
            }}
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    fn with_owner<T>(f: impl FnOnce() -> T) -> T {
        let owner = Owner::new();
        owner.set();
        f()
    }

    #[test]
    fn lazy_section_hides_children_until_reveal() {
        let html = with_owner(|| {
            view! {
                <LazySection>
                    <p>"deferred content"</p>
                </LazySection>
            }
            .to_html()
        });
        assert!(html.contains("min-height"));
        assert!(html.contains("200px"));
        assert!(!html.contains("deferred content"));
    }

    #[test]
    fn lazy_section_honors_min_height_override() {
        let html = with_owner(|| {
            view! {
                <LazySection min_height=320>
                    <p>"deferred content"</p>
                </LazySection>
            }
            .to_html()
        });
        assert!(html.contains("320px"));
    }

    #[test]
    fn priority_image_renders_immediately() {
        let html = with_owner(|| {
            view! { <LazyImage src="/avatar.jpg" alt="portrait" priority=true placeholder=false /> }
                .to_html()
        });
        assert!(html.contains("<img"));
        assert!(html.contains("fetchpriority"));
    }

    #[test]
    fn deferred_image_renders_placeholder_only() {
        let html =
            with_owner(|| view! { <LazyImage src="/avatar.jpg" alt="portrait" /> }.to_html());
        assert!(!html.contains("<img"));
        assert!(html.contains("image-placeholder"));
    }

    #[test]
    fn srcset_attribute_reaches_markup() {
        let srcset = Srcset::new().candidate("/avatar-250.webp", 250);
        let html = with_owner(|| {
            view! { <LazyImage src="/avatar.jpg" alt="portrait" srcset=srcset priority=true /> }
                .to_html()
        });
        assert!(html.contains("/avatar-250.webp 250w"));
    }
}
