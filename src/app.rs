mod about;
mod contact;
pub mod content;
mod experience;
mod footer;
mod header;
mod home;
pub mod lazy;
mod metrics;
mod modal;
mod not_found;
mod projects;
mod skills;
pub mod ui;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use about::AboutPage;
use contact::ContactPage;
use experience::ExperiencePage;
use footer::Footer;
use header::Header;
use home::HomePage;
use not_found::NotFound;
use projects::ProjectsPage;
use skills::SkillsPage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans bg-white text-gray-800">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // sets the document title
        <Title formatter=|title| format!("Anabel - {title}") />

        <Router>
            <div class="layout flex min-h-screen flex-col">
                <Header />
                <main class="main-content flex w-full flex-grow flex-col">
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/about") view=AboutPage />
                        <Route path=path!("/experience") view=ExperiencePage />
                        <Route path=path!("/projects") view=ProjectsPage />
                        <Route path=path!("/skills") view=SkillsPage />
                        <Route path=path!("/contact") view=ContactPage />
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
    }
}
