use leptos::{html, prelude::*};
use leptos_router::components::*;
use leptos_use::{use_window_size, UseWindowSizeReturn};

use crate::config::SITE_OWNER;
use crate::profile::{portrait_frame, TAGLINE};

const PROFILE_IMAGE: &str = "/profile-image.jpg";

#[component]
pub fn Hero() -> impl IntoView {
    let UseWindowSizeReturn { width, .. } = use_window_size();
    let (aspect_ratio, set_aspect_ratio) = signal(1.0_f64);
    let image_ref = NodeRef::<html::Img>::new();

    let read_ratio = move || {
        let Some(img) = image_ref.get_untracked() else {
            return;
        };
        let (w, h) = (img.natural_width(), img.natural_height());
        if w > 0 && h > 0 {
            set_aspect_ratio.set(w as f64 / h as f64);
        }
    };

    // cached images can finish loading before hydration attaches on:load
    Effect::new(move |_| {
        if image_ref.get().is_some_and(|img| img.complete()) {
            read_ratio();
        }
    });

    let frame = move || portrait_frame(width.get(), aspect_ratio.get());

    view! {
        <section class="relative overflow-hidden bg-gradient-to-br from-indigo-50 to-white dark:from-gray-900 dark:to-gray-800 py-20">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex flex-col lg:flex-row items-center gap-12">
                    <div class="flex-1 text-center lg:text-left">
                        <h1 class="text-4xl sm:text-5xl md:text-6xl font-extrabold tracking-tight">
                            <span class="block">"Hi, I'm"</span>
                            <span class="block text-indigo-600 dark:text-indigo-400">
                                {SITE_OWNER}
                            </span>
                        </h1>
                        <p class="mt-6 text-lg text-gray-600 dark:text-gray-300 max-w-xl mx-auto lg:mx-0">
                            {TAGLINE}
                        </p>
                        <div class="mt-8 flex flex-col sm:flex-row gap-4 justify-center lg:justify-start">
                            <A
                                href="/projects"
                                attr:class="px-8 py-3 rounded-md text-white bg-indigo-600 hover:bg-indigo-700 font-medium"
                            >
                                "View Projects"
                            </A>
                            <A
                                href="/contact"
                                attr:class="px-8 py-3 rounded-md text-indigo-700 bg-indigo-100 hover:bg-indigo-200 font-medium"
                            >
                                "Contact Me"
                            </A>
                        </div>
                    </div>
                    <div class="flex-1 flex justify-center">
                        <div
                            class="relative rounded-2xl overflow-hidden shadow-2xl"
                            style:width=move || format!("{}px", frame().width)
                            style:height=move || format!("{}px", frame().height)
                            style:max-width="100%"
                        >
                            <img
                                node_ref=image_ref
                                src=PROFILE_IMAGE
                                alt=format!("{SITE_OWNER} - Software Developer")
                                class="w-full h-full object-cover"
                                on:load=move |_| read_ratio()
                            />
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
