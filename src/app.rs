mod about;
mod contact;
mod footer;
mod hero;
mod homepage;
mod lab;
mod navbar;
mod not_found;
mod project_details;
mod projects;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::config::SITE_OWNER;

use about::AboutPage;
use contact::ContactPage;
use footer::Footer;
use homepage::HomePage;
use lab::ProjectsLab;
use navbar::Navbar;
use not_found::NotFoundPage;
use projects::ProjectsPage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans bg-gray-50 text-gray-900 dark:bg-gray-900 dark:text-white">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{SITE_OWNER} - {title}") />

        <Router>
            <div class="flex flex-col min-h-screen">
                <Navbar />
                <main class="flex-grow pt-16">
                    <Routes fallback=NotFoundPage>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/about") view=AboutPage />
                        <Route path=path!("/projects") view=ProjectsPage />
                        <Route path=path!("/contact") view=ContactPage />
                        <Route path=path!("/projects-lab") view=ProjectsLab />
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
    }
}
