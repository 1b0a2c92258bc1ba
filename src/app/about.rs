use leptos::prelude::*;
use leptos_meta::Title;

use super::lazy::LazySection;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <Title text="About Me" />
        <div class="about-page page-enter mx-auto w-full max-w-3xl px-4 py-8 sm:px-6 lg:px-8">
            <section class="intro mb-12 text-center">
                <h1 class="text-3xl font-bold">"About Me"</h1>
                <p class="lead mt-2 text-lg text-gray-600">
                    "Passionate about transforming operational challenges into strategic opportunities"
                </p>
            </section>

            <section class="story mb-12">
                <h2 class="mb-6 text-2xl font-bold">"My Professional Journey"</h2>
                <div class="story-content space-y-8">
                    <div class="story-paragraph">
                        <h3 class="mb-2 font-bold">"The Challenge"</h3>
                        <p class="leading-relaxed text-gray-700">
                            "Early in my career, I witnessed firsthand how even well-intentioned organizations struggle with operational inefficiencies: disconnected processes, unclear workflows, and missed opportunities for optimization. I realized that the gap between strategic vision and operational execution was where many businesses lost momentum and resources."
                        </p>
                    </div>

                    <div class="story-paragraph">
                        <h3 class="mb-2 font-bold">"The Growth"</h3>
                        <p class="mb-4 leading-relaxed text-gray-700">
                            "This realization sparked my passion for operational strategy. Through my Business Administration education and hands-on management experience at university, I developed a systematic approach to identifying bottlenecks, streamlining processes, and aligning operations with strategic goals."
                        </p>
                        <p class="leading-relaxed text-gray-700">
                            "My management roles taught me the critical importance of clear communication, stakeholder alignment, and data-driven decision-making. The best solutions come from deeply understanding the people and processes involved, then designing systems that work with how teams naturally operate."
                        </p>
                    </div>

                    <div class="story-paragraph">
                        <h3 class="mb-2 font-bold">"Current Focus"</h3>
                        <p class="leading-relaxed text-gray-700">
                            "Today, I bring this comprehensive operational mindset to every project I undertake. Whether I'm optimizing workflows, coordinating complex projects, or providing strategic virtual assistance, my goal is the same: transform operational challenges into competitive advantages that deliver real, measurable impact."
                        </p>
                    </div>
                </div>
            </section>

            <LazySection threshold=0.1 root_margin="100px">
                <section class="education mb-12 animate-fade-in">
                    <h2 class="mb-6 text-2xl font-bold">"Education"</h2>
                    <div class="education-item">
                        <div class="degree-header flex flex-col justify-between gap-1 sm:flex-row sm:items-baseline">
                            <h3 class="font-bold">"Bachelor of Business Administration"</h3>
                            <p class="graduation-year font-bold text-gray-500">"2020 - 2024"</p>
                        </div>
                        <p class="institution mb-4 text-gray-600">"University of Excellence"</p>

                        <div class="education-details space-y-4">
                            <div class="focus-area">
                                <h4 class="font-medium">"Concentration"</h4>
                                <p class="text-gray-700">
                                    "Operational Management & Strategic Planning"
                                </p>
                            </div>

                            <div class="coursework">
                                <h4 class="mb-1 font-medium">"Relevant Coursework"</h4>
                                <ul class="list-disc space-y-1 pl-5 text-gray-700">
                                    <li>"Operations Management & Process Optimization"</li>
                                    <li>"Strategic Business Planning & Analysis"</li>
                                    <li>"Organizational Behavior & Leadership"</li>
                                    <li>"Project Management & Execution"</li>
                                    <li>"Business Analytics & Data-Driven Decision Making"</li>
                                    <li>"Supply Chain & Logistics Management"</li>
                                </ul>
                            </div>

                            <div class="achievements">
                                <h4 class="mb-1 font-medium">"Academic Achievements"</h4>
                                <ul class="list-disc space-y-1 pl-5 text-gray-700">
                                    <li>"Dean's List for Academic Excellence (3 consecutive semesters)"</li>
                                    <li>
                                        "Led capstone project on operational efficiency improvement, achieving 25% cost reduction in simulated business scenario"
                                    </li>
                                    <li>"Completed advanced certification in Business Process Management"</li>
                                    <li>"Active member of Business Strategy Club and Operations Management Society"</li>
                                </ul>
                            </div>
                        </div>
                    </div>
                </section>
            </LazySection>

            <LazySection threshold=0.1 root_margin="100px">
                <section class="management-background animate-fade-in">
                    <h2 class="mb-6 text-2xl font-bold">"Management Experience"</h2>
                    <p class="management-intro mb-6 leading-relaxed text-gray-700">
                        "During my time at university, I gained valuable hands-on management experience through leadership roles in student organizations and collaborative projects. These experiences taught me the importance of clear communication, team coordination, and strategic decision-making in real-world contexts."
                    </p>

                    <div class="management-role">
                        <h3 class="font-bold">"Student Organization Leadership"</h3>
                        <p class="role-title text-gray-600">"Vice President, Business Strategy Club"</p>
                        <p class="role-period mb-2 font-bold text-gray-500">"2022 - 2024"</p>
                        <ul class="role-achievements list-disc space-y-1 pl-5 text-gray-700">
                            <li>"Led a team of 15+ members in organizing monthly workshops and networking events"</li>
                            <li>"Coordinated with faculty and industry professionals to deliver 12+ educational sessions"</li>
                            <li>"Managed annual budget of $5,000, ensuring efficient resource allocation"</li>
                            <li>"Increased club membership by 40% through strategic outreach initiatives"</li>
                        </ul>
                    </div>
                </section>
            </LazySection>
        </div>
    }
}
