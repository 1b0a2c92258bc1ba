use leptos::prelude::*;
use leptos_router::components::*;

// rfc3339 build stamp; the copyright year is its first four characters
const BUILD_TIME: &str = env!("BUILD_TIME");

#[component]
pub fn Footer() -> impl IntoView {
    let year = &BUILD_TIME[..4];

    view! {
        <footer class="site-footer mt-auto bg-gray-900 text-gray-300">
            <div class="footer-container mx-auto max-w-6xl px-4 py-12 sm:px-6 lg:px-8">
                <div class="footer-content grid grid-cols-1 gap-8 md:grid-cols-3">
                    <div class="footer-section">
                        <h3 class="mb-2 text-lg font-bold text-white">"Anabel"</h3>
                        <p>"Operational Strategist & Business Administrator"</p>
                    </div>

                    <div class="footer-section">
                        <h4 class="mb-2 font-bold text-white">"Quick Links"</h4>
                        <ul class="footer-links space-y-1">
                            <li>
                                <A href="/">"Home"</A>
                            </li>
                            <li>
                                <A href="/about">"About"</A>
                            </li>
                            <li>
                                <A href="/experience">"Experience"</A>
                            </li>
                            <li>
                                <A href="/projects">"Projects"</A>
                            </li>
                            <li>
                                <A href="/skills">"Skills"</A>
                            </li>
                            <li>
                                <A href="/contact">"Contact"</A>
                            </li>
                        </ul>
                    </div>

                    <div class="footer-section">
                        <h4 class="mb-2 font-bold text-white">"Connect"</h4>
                        <ul class="footer-links space-y-1">
                            <li>
                                <a
                                    href="mailto:anabel@example.com"
                                    target="_blank"
                                    rel="noopener noreferrer"
                                >
                                    "Email"
                                </a>
                            </li>
                            <li>
                                <a
                                    href="https://linkedin.com/in/anabel"
                                    target="_blank"
                                    rel="noopener noreferrer"
                                >
                                    "LinkedIn"
                                </a>
                            </li>
                        </ul>
                    </div>
                </div>

                <div class="footer-bottom mt-8 border-t border-gray-700 pt-4 text-center text-sm">
                    <p>"© " {year} " Anabel. All rights reserved."</p>
                </div>
            </div>
        </footer>
    }
}
