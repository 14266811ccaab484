use std::time::Duration;

use leptos::leptos_dom::helpers::{set_interval_with_handle, IntervalHandle};
use leptos::prelude::*;
use leptos_router::components::*;

use crate::projects::{DisclosureModal, Project, StatusPanel, PROGRESS_TICK_MS};

/// Overlay with the status panel for the selected project.
///
/// Owns the progress interval: it runs only while the modal reports it is
/// ticking, and is cleared on close, on status change and on unmount.
#[component]
pub fn ProjectDetails(modal: RwSignal<DisclosureModal<'static>>) -> impl IntoView {
    let ticking = Memo::new(move |_| modal.with(DisclosureModal::is_ticking));
    let interval = StoredValue::new(None::<IntervalHandle>);

    let stop = move || {
        if let Some(handle) = interval.try_update_value(Option::take).flatten() {
            handle.clear();
        }
    };

    Effect::new(move |_| {
        stop();
        if !ticking.get() {
            return;
        }
        let started = set_interval_with_handle(
            move || {
                modal.try_update(|m| m.tick());
            },
            Duration::from_millis(PROGRESS_TICK_MS),
        );
        match started {
            Ok(handle) => interval.set_value(Some(handle)),
            Err(e) => log::warn!("could not start progress interval: {e:?}"),
        }
    });

    on_cleanup(stop);

    let close = move || modal.update(DisclosureModal::close);

    view! {
        <Show when=move || modal.with(DisclosureModal::is_open)>
            <div class="fixed inset-0 z-50 flex items-center justify-center p-4">
                <div
                    class="absolute inset-0 bg-black/60 backdrop-blur-sm"
                    on:click=move |_| close()
                ></div>
                <div class="relative w-full max-w-2xl bg-white dark:bg-gray-800 rounded-xl shadow-2xl overflow-hidden">
                    <button
                        on:click=move |_| close()
                        class="absolute top-3 right-3 z-10 p-2 rounded-full bg-black/40 text-white hover:bg-black/60"
                        aria-label="Close"
                    >
                        "✕"
                    </button>
                    {move || modal.with(|m| m.item()).map(header)}
                    <div class="p-6">
                        {move || {
                            let (item, panel, progress) = modal
                                .with(|m| (m.item(), m.panel(), m.progress()));
                            match (item, panel) {
                                (Some(item), Some(StatusPanel::PrivateAccess)) => {
                                    private_access(item).into_any()
                                }
                                (Some(item), Some(StatusPanel::UnderDevelopment)) => {
                                    under_development(item, progress).into_any()
                                }
                                _ => ().into_any(),
                            }
                        }}
                    </div>
                </div>
            </div>
        </Show>
    }
}

fn header(item: &'static Project) -> impl IntoView {
    view! {
        <div class="relative h-48">
            <img src=item.image alt=item.title class="w-full h-full object-cover" />
            <div class="absolute inset-0 bg-gradient-to-t from-black/70 to-transparent"></div>
            <h3 class="absolute bottom-4 left-6 text-2xl font-bold text-white">{item.title}</h3>
        </div>
    }
}

fn private_access(item: &'static Project) -> impl IntoView {
    view! {
        <div class="space-y-4">
            <h4 class="text-xl font-semibold text-indigo-600 dark:text-indigo-400">
                "Private Project Access"
            </h4>
            <p class="text-gray-600 dark:text-gray-300">
                "This project is in a private repository. The source code is available on request, and you can explore other work in the Projects Lab."
            </p>
            <Links item=item code_label="Request Repository Access" />
        </div>
    }
}

fn under_development(item: &'static Project, progress: u8) -> impl IntoView {
    view! {
        <div class="space-y-4">
            <h4 class="text-xl font-semibold text-amber-600 dark:text-amber-400">
                "Under Development"
            </h4>
            <p class="text-gray-600 dark:text-gray-300">
                "This project is actively being worked on. New features and improvements are on the way."
            </p>
            <div class="w-full h-3 bg-gray-200 dark:bg-gray-700 rounded-full overflow-hidden">
                <div
                    class="h-full bg-indigo-600 transition-all duration-100"
                    style:width=format!("{progress}%")
                ></div>
            </div>
            <p class="text-sm text-gray-500 dark:text-gray-400">
                {format!("Estimated completion: {progress}%")}
            </p>
            <Links item=item code_label="View Current Code" />
        </div>
    }
}

#[component]
fn Links(item: &'static Project, code_label: &'static str) -> impl IntoView {
    view! {
        <div class="flex flex-wrap gap-4 pt-2">
            <a
                href=item.github
                target="_blank"
                rel="noopener noreferrer"
                class="px-4 py-2 rounded-md bg-gray-900 text-white hover:bg-gray-700 dark:bg-gray-700 dark:hover:bg-gray-600"
            >
                {code_label}
            </a>
            <A
                href="/projects-lab"
                attr:class="px-4 py-2 rounded-md bg-indigo-100 text-indigo-700 hover:bg-indigo-200"
            >
                "Visit Projects Lab"
            </A>
        </div>
    }
}
