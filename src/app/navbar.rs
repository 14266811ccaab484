use leptos::prelude::*;
use leptos_router::components::*;

use crate::config::SITE_OWNER;

const LINKS: [(&str, &str); 4] = [
    ("/", "Home"),
    ("/about", "About"),
    ("/projects", "Projects"),
    ("/contact", "Contact"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    let (is_open, set_is_open) = signal(false);
    let toggle_menu = move || set_is_open.update(|open| *open = !*open);

    view! {
        <nav class="fixed w-full bg-white shadow-md dark:bg-gray-800 z-50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between h-16">
                    <div class="flex-shrink-0 flex items-center">
                        <A href="/" attr:class="text-2xl font-bold text-indigo-600 dark:text-indigo-400">
                            {SITE_OWNER}
                        </A>
                    </div>
                    <div class="hidden md:ml-6 md:flex md:items-center md:space-x-4">
                        {LINKS
                            .into_iter()
                            .map(|(href, label)| {
                                view! {
                                    <A
                                        href=href
                                        attr:class="px-3 py-2 rounded-md text-sm font-medium text-gray-700 hover:text-indigo-600 dark:text-gray-300 dark:hover:text-indigo-400"
                                    >
                                        {label}
                                    </A>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="md:hidden flex items-center">
                        <button
                            on:click=move |_| toggle_menu()
                            aria-expanded=move || is_open.get().to_string()
                            class="inline-flex items-center justify-center p-2 rounded-md text-gray-400 hover:text-indigo-600 hover:bg-gray-100 dark:hover:bg-gray-700 focus:outline-none focus:ring-2 focus:ring-inset focus:ring-indigo-500"
                        >
                            <span class="sr-only">"Open main menu"</span>
                            <span class="text-2xl leading-none">
                                {move || if is_open.get() { "✕" } else { "☰" }}
                            </span>
                        </button>
                    </div>
                </div>
            </div>
            <Show when=move || is_open.get()>
                <div class="md:hidden">
                    <div class="px-2 pt-2 pb-3 space-y-1 sm:px-3 bg-white dark:bg-gray-800">
                        {LINKS
                            .into_iter()
                            .map(|(href, label)| {
                                view! {
                                    <A
                                        href=href
                                        on:click=move |_| set_is_open.set(false)
                                        attr:class="block px-3 py-2 rounded-md text-base font-medium text-gray-700 hover:text-indigo-600 hover:bg-gray-50 dark:text-gray-300 dark:hover:bg-gray-700"
                                    >
                                        {label}
                                    </A>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </Show>
        </nav>
    }
}
