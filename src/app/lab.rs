use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::*;

struct Phase {
    title: &'static str,
    icon: &'static str,
    body: &'static str,
}

static PHASES: [Phase; 3] = [
    Phase {
        title: "Ideation",
        icon: "💡",
        body: "Every great project starts with an idea. In this phase, I'm brainstorming concepts, researching technologies, and planning the architecture for upcoming projects.",
    },
    Phase {
        title: "Development",
        icon: "⏱",
        body: "From concept to code, this is where I build the foundation and bring ideas to life. Currently developing innovative solutions with cutting-edge technologies.",
    },
    Phase {
        title: "Launch",
        icon: "🚀",
        body: "The final destination, where projects are polished, tested, and deployed. Check back soon to see my latest launches!",
    },
];

#[component]
pub fn ProjectsLab() -> impl IntoView {
    view! {
        <Title text="Projects Lab" />
        <div class="min-h-screen bg-gray-50 dark:bg-gray-900">
            <div class="max-w-4xl mx-auto px-4 py-10">
                <A
                    href="/projects"
                    attr:class="inline-flex items-center text-gray-700 dark:text-gray-200 hover:text-indigo-600 dark:hover:text-indigo-400 font-medium"
                >
                    "← Back to portfolio"
                </A>
                <div class="text-center my-16">
                    <h1 class="text-4xl font-extrabold sm:text-5xl mb-4">"Project Lab"</h1>
                    <p class="text-xl text-gray-600 dark:text-gray-400 max-w-2xl mx-auto">
                        "Welcome to my creative workspace where ideas transform into amazing projects"
                    </p>
                </div>
                <ol class="relative border-l-4 border-indigo-600 ml-5 space-y-12 mb-20">
                    {PHASES
                        .iter()
                        .enumerate()
                        .map(|(i, phase)| {
                            view! {
                                <li class="ml-10">
                                    <span class="absolute -left-5 flex items-center justify-center w-10 h-10 rounded-full bg-white dark:bg-gray-800 border-4 border-indigo-600 font-bold text-indigo-600 dark:text-indigo-400">
                                        {i + 1}
                                    </span>
                                    <div class="bg-white dark:bg-gray-800 p-6 rounded-lg shadow-lg">
                                        <h3 class="text-xl font-bold mb-3">
                                            <span class="mr-3">{phase.icon}</span>
                                            {phase.title}
                                        </h3>
                                        <p class="text-gray-700 dark:text-gray-300">{phase.body}</p>
                                    </div>
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>
                <div class="text-center p-8 rounded-lg bg-gradient-to-r from-indigo-600 to-purple-600 text-white">
                    <h3 class="text-2xl font-bold mb-4">"Want to collaborate?"</h3>
                    <p class="mb-6 max-w-2xl mx-auto">
                        "I'm always open to new opportunities and creative collaborations. If you have an exciting project or idea, let's build something amazing together!"
                    </p>
                    <A
                        href="/contact"
                        attr:class="inline-block bg-white text-indigo-600 px-6 py-3 rounded-md font-medium shadow-md"
                    >
                        "Get in touch"
                    </A>
                </div>
            </div>
        </div>
    }
}
