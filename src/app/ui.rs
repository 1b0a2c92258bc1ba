//! Shared presentational components. Styling variants map to the class
//! layer defined in `input.css`.

use leptos::{either::Either, ev::KeyboardEvent, prelude::*};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Gradient,
    Filter,
    Close,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Secondary => "btn-secondary",
            ButtonVariant::Gradient => "btn-gradient",
            ButtonVariant::Filter => "btn-filter",
            ButtonVariant::Close => "btn-close",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    fn class(self) -> &'static str {
        match self {
            ButtonSize::Sm => "btn-sm",
            ButtonSize::Md => "",
            ButtonSize::Lg => "btn-lg",
        }
    }
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional)] full_width: bool,
    #[prop(optional, into)] active: Signal<bool>,
    #[prop(optional)] disabled: bool,
    #[prop(default = "button")] button_type: &'static str,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] on_click: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let classes = ["btn", variant.class(), size.class(), &class]
        .iter()
        .filter(|c| !c.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ");

    view! {
        <button
            type=button_type
            class=classes
            class=("btn-full", full_width)
            class=("active", move || active.get())
            disabled=disabled
            aria-label=aria_label
            on:click=move |_| {
                if let Some(cb) = on_click {
                    cb.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardVariant {
    #[default]
    Default,
    Elevated,
    Bordered,
    Flat,
}

impl CardVariant {
    fn class(self) -> &'static str {
        match self {
            CardVariant::Default => "card-default",
            CardVariant::Elevated => "card-elevated",
            CardVariant::Bordered => "card-bordered",
            CardVariant::Flat => "card-flat",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardPadding {
    None,
    Sm,
    #[default]
    Md,
    Lg,
}

impl CardPadding {
    fn class(self) -> &'static str {
        match self {
            CardPadding::None => "card-padding-none",
            CardPadding::Sm => "card-padding-sm",
            CardPadding::Md => "card-padding-md",
            CardPadding::Lg => "card-padding-lg",
        }
    }
}

/// Card container. Clickable cards act as buttons, including Enter/Space
/// keyboard activation.
#[component]
pub fn Card(
    #[prop(optional)] variant: CardVariant,
    #[prop(optional)] padding: CardPadding,
    #[prop(optional)] hoverable: bool,
    #[prop(optional)] clickable: bool,
    #[prop(optional, into)] on_click: Option<Callback<()>>,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let classes = [
        "card",
        variant.class(),
        padding.class(),
        if hoverable { "card-hoverable" } else { "" },
        if clickable { "card-clickable" } else { "" },
        &class,
    ]
    .iter()
    .filter(|c| !c.is_empty())
    .copied()
    .collect::<Vec<_>>()
    .join(" ");

    let activate = move || {
        if clickable {
            if let Some(cb) = on_click {
                cb.run(());
            }
        }
    };

    view! {
        <div
            class=classes
            role=clickable.then_some("button")
            tabindex=clickable.then_some(0)
            on:click=move |_| activate()
            on:keydown=move |ev: KeyboardEvent| {
                if clickable && (ev.key() == "Enter" || ev.key() == " ") {
                    ev.prevent_default();
                    activate();
                }
            }
        >
            {children()}
        </div>
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SectionBackground {
    #[default]
    Default,
    Secondary,
    Gradient,
    Dark,
}

impl SectionBackground {
    fn class(self) -> &'static str {
        match self {
            SectionBackground::Default => "section-bg-default",
            SectionBackground::Secondary => "section-bg-secondary",
            SectionBackground::Gradient => "section-bg-gradient",
            SectionBackground::Dark => "section-bg-dark",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SectionSpacing {
    None,
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

impl SectionSpacing {
    fn class(self) -> &'static str {
        match self {
            SectionSpacing::None => "section-spacing-none",
            SectionSpacing::Sm => "section-spacing-sm",
            SectionSpacing::Md => "section-spacing-md",
            SectionSpacing::Lg => "section-spacing-lg",
            SectionSpacing::Xl => "section-spacing-xl",
        }
    }
}

/// Semantic section wrapper with consistent spacing and backgrounds.
#[component]
pub fn Section(
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional)] background: SectionBackground,
    #[prop(optional)] spacing: SectionSpacing,
    #[prop(default = true)] contained: bool,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let classes = ["section", background.class(), spacing.class(), &class]
        .iter()
        .filter(|c| !c.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ");

    view! {
        <section id=id class=classes aria-label=aria_label>
            {if contained {
                Either::Left(
                    view! {
                        <div class="section-container mx-auto w-full max-w-6xl px-4 sm:px-6 lg:px-8">
                            {children()}
                        </div>
                    },
                )
            } else {
                Either::Right(children())
            }}
        </section>
    }
}

/// Locks or unlocks body scrolling, used while the mobile menu or a modal is
/// open. No-op during server rendering.
pub fn set_body_scroll_locked(locked: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(body) = document().body() {
            let class_list = body.class_list();
            let res = if locked {
                class_list.add_1("overflow-hidden")
            } else {
                class_list.remove_1("overflow-hidden")
            };
            let _ = res;
        }
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = locked;
}
