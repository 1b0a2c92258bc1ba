use leptos::prelude::*;
use leptos_router::{components::*, hooks::use_location};
use leptos_use::use_window_scroll;

use super::ui::set_body_scroll_locked;

const NAV_LINKS: [(&str, &str); 6] = [
    ("/", "Home"),
    ("/about", "About"),
    ("/experience", "Experience"),
    ("/projects", "Projects"),
    ("/skills", "Skills"),
    ("/contact", "Contact"),
];

#[component]
pub fn Header() -> impl IntoView {
    let pathname = use_location().pathname;
    let (menu_open, set_menu_open) = signal(false);

    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = Memo::new(move |_| scroll_y.get() > 10.0);

    // close the menu when navigation changes the path
    Effect::watch(
        move || pathname.get(),
        move |_, _, _| set_menu_open(false),
        false,
    );

    // the page behind an open menu must not scroll
    Effect::new(move |_| set_body_scroll_locked(menu_open.get()));
    on_cleanup(|| set_body_scroll_locked(false));

    let is_active = move |path: &'static str| pathname.get() == path;

    view! {
        <div
            class="mobile-overlay"
            class=("visible", move || menu_open.get())
            on:click=move |_| set_menu_open(false)
            aria-hidden="true"
        ></div>

        <header
            class="site-header sticky top-0 z-40 bg-white"
            class=("scrolled", move || is_scrolled.get())
        >
            <div class="header-container mx-auto flex max-w-6xl items-center justify-between px-4 py-4 sm:px-6 lg:px-8">
                <A href="/" attr:class="logo text-xl font-bold text-gray-900">
                    <span class="logo-text">"Anabel"</span>
                </A>

                <button
                    class="hamburger md:hidden"
                    class=("active", move || menu_open.get())
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    aria-label="Toggle navigation menu"
                    aria-expanded=move || menu_open.get().to_string()
                >
                    <span class="hamburger-line"></span>
                    <span class="hamburger-line"></span>
                    <span class="hamburger-line"></span>
                </button>

                <nav class="main-nav" class=("open", move || menu_open.get())>
                    <ul class="nav-list flex flex-col gap-2 md:flex-row md:gap-6">
                        {NAV_LINKS
                            .into_iter()
                            .map(|(path, label)| {
                                view! {
                                    <li>
                                        <A
                                            href=path
                                            attr:class=move || {
                                                if is_active(path) {
                                                    "nav-link active"
                                                } else {
                                                    "nav-link"
                                                }
                                            }
                                            on:click=move |_| set_menu_open(false)
                                        >
                                            {label}
                                        </A>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </nav>
            </div>
        </header>
    }
}
