use leptos::prelude::*;
use leptos_meta::Title;

use crate::profile::{CERTIFICATIONS, EDUCATION, JOURNEY, SKILLS};

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <Title text="About" />
        <About />
    }
}

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="py-20 bg-gray-50 dark:bg-gray-800">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center">
                    <h2 class="text-3xl font-extrabold sm:text-4xl">"About Me"</h2>
                    <p class="mt-4 max-w-2xl mx-auto text-xl text-gray-500 dark:text-gray-400">
                        "Get to know more about me and my skills"
                    </p>
                </div>
                <div class="mt-16 grid gap-12 lg:grid-cols-2">
                    <div>
                        <h3 class="text-2xl font-bold mb-6">"My Journey"</h3>
                        <div class="space-y-4 text-gray-600 dark:text-gray-300">
                            {JOURNEY.iter().map(|p| view! { <p>{*p}</p> }).collect_view()}
                        </div>
                        <h3 class="text-2xl font-bold mt-10 mb-6">"Education"</h3>
                        <div class="space-y-3">
                            {EDUCATION
                                .iter()
                                .map(|e| {
                                    view! {
                                        <div class="p-4 bg-white dark:bg-gray-700 rounded-lg shadow-sm">
                                            <p>{*e}</p>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <div>
                        <h3 class="text-2xl font-bold mb-6">"My Skills"</h3>
                        <div class="grid grid-cols-2 sm:grid-cols-3 gap-4">
                            {SKILLS
                                .iter()
                                .map(|skill| {
                                    view! {
                                        <div class="flex flex-col items-center p-4 bg-white dark:bg-gray-700 rounded-lg shadow-sm hover:scale-105 transition-transform duration-200">
                                            <i class=format!("{} text-4xl", skill.icon)></i>
                                            <span class="mt-2 text-sm font-medium">{skill.name}</span>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <h3 class="text-2xl font-bold mt-10 mb-6">"Certifications"</h3>
                        {CERTIFICATIONS
                            .iter()
                            .map(|c| {
                                view! {
                                    <div class="mt-4 p-4 bg-white dark:bg-gray-700 rounded-lg shadow-md flex items-center">
                                        <span class="text-indigo-600 dark:text-indigo-400 text-xl">"✔"</span>
                                        <h4 class="ml-3 text-lg font-medium">{*c}</h4>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
