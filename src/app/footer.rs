use chrono::{DateTime, Datelike, Utc};
use leptos::prelude::*;

use crate::config::{BUILD_TIME, SITE_OWNER};
use crate::profile::SOCIALS;

#[component]
pub fn Footer() -> impl IntoView {
    let year = Utc::now().year();
    let built = DateTime::parse_from_rfc3339(BUILD_TIME)
        .map(|t| t.format("%b %e, %Y").to_string())
        .unwrap_or_default();

    view! {
        <footer class="bg-white dark:bg-gray-800 py-8">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex flex-col md:flex-row justify-between items-center">
                    <div class="mb-4 md:mb-0">
                        <p class="text-gray-600 dark:text-gray-300">
                            {format!("© {year} {SITE_OWNER}. All rights reserved.")}
                        </p>
                        <p class="text-xs text-gray-400">"Last built " {built}</p>
                    </div>
                    <div class="flex space-x-6">
                        {SOCIALS
                            .iter()
                            .map(|social| {
                                view! {
                                    <a
                                        href=social.href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="text-gray-500 hover:text-indigo-600 dark:text-gray-400 dark:hover:text-indigo-400 text-2xl"
                                        aria-label=social.label
                                    >
                                        <span class="sr-only">{social.label}</span>
                                        <i class=social.icon></i>
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </footer>
    }
}
