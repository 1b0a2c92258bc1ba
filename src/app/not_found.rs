use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::*;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <Title text="Page Not Found" />
        <div class="not-found-page page-enter mx-auto flex max-w-2xl flex-col items-center px-4 py-24 text-center">
            <h1 class="mb-4 text-5xl font-bold">"404"</h1>
            <p class="mb-8 text-lg text-gray-600">
                "The page you're looking for doesn't exist or has been moved."
            </p>
            <A href="/" attr:class="btn btn-primary">
                "Back to Home"
            </A>
        </div>
    }
}
