use leptos::prelude::*;
use leptos_meta::Title;

use super::project_details::ProjectDetails;
use crate::projects::{DisclosureModal, Project, ProjectStatus, PROJECTS};

#[component]
pub fn ProjectsPage() -> impl IntoView {
    view! {
        <Title text="Projects" />
        <Projects />
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    let modal = RwSignal::new(DisclosureModal::new());

    view! {
        <section id="projects" class="py-20 bg-white dark:bg-gray-900">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center">
                    <h2 class="text-3xl font-extrabold sm:text-4xl">"My Projects"</h2>
                    <p class="mt-4 max-w-2xl mx-auto text-xl text-gray-500 dark:text-gray-400">
                        "Some of my recent work"
                    </p>
                </div>
                <div class="mt-16 grid gap-8 md:grid-cols-2">
                    {PROJECTS
                        .iter()
                        .map(|project| view! { <ProjectCard project modal /> })
                        .collect_view()}
                </div>
            </div>
            <ProjectDetails modal />
        </section>
    }
}

#[component]
fn ProjectCard(
    project: &'static Project,
    modal: RwSignal<DisclosureModal<'static>>,
) -> impl IntoView {
    let open_details =
        move |_| modal.update(|m| m.open(project, ProjectStatus::from(project.status)));

    view! {
        <div class="bg-white dark:bg-gray-800 rounded-lg shadow-lg overflow-hidden hover:-translate-y-1 transition-transform duration-200">
            <div class="h-48 overflow-hidden">
                <img
                    src=project.image
                    alt=project.title
                    class="w-full h-full object-cover hover:scale-105 transition-transform duration-300"
                />
            </div>
            <div class="p-6">
                <h3 class="text-xl font-bold">{project.title}</h3>
                <p class="mt-2 text-gray-600 dark:text-gray-300">{project.description}</p>
                <div class="mt-4 flex flex-wrap gap-2">
                    {project
                        .tags
                        .iter()
                        .map(|tag| {
                            view! {
                                <span class="px-3 py-1 text-xs font-medium rounded-full bg-indigo-100 text-indigo-800 dark:bg-indigo-900 dark:text-indigo-200">
                                    {*tag}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="mt-6 flex items-center gap-4">
                    <a
                        href=project.github
                        target="_blank"
                        rel="noopener noreferrer"
                        class="text-gray-700 hover:text-indigo-600 dark:text-gray-300 dark:hover:text-indigo-400"
                    >
                        <i class="devicon-github-plain mr-1"></i>
                        "Code"
                    </a>
                    <a
                        href=project.demo
                        target="_blank"
                        rel="noopener noreferrer"
                        class="text-gray-700 hover:text-indigo-600 dark:text-gray-300 dark:hover:text-indigo-400"
                    >
                        "Live Demo"
                    </a>
                    <button
                        on:click=open_details
                        class="ml-auto px-4 py-2 rounded-md text-sm font-medium text-white bg-indigo-600 hover:bg-indigo-700"
                    >
                        "Details"
                    </button>
                </div>
            </div>
        </div>
    }
}
