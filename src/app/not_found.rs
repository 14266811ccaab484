use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="Page Not Found" />
        <div class="min-h-[60vh] flex flex-col items-center justify-center px-4 text-center">
            <h1 class="text-6xl font-extrabold text-indigo-600 dark:text-indigo-400">"404"</h1>
            <h2 class="mt-4 text-2xl font-bold">"Page Not Found"</h2>
            <p class="mt-2 text-gray-600 dark:text-gray-300">
                "The page you're looking for doesn't exist or has been moved."
            </p>
            <A
                href="/"
                attr:class="mt-8 px-6 py-3 rounded-md text-white bg-indigo-600 hover:bg-indigo-700 font-medium"
            >
                "Go Home"
            </A>
        </div>
    }
}
