use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use futures::channel::oneshot;
use leptos::{ev::SubmitEvent, prelude::*, task::spawn_local};
use leptos_meta::Title;

use crate::config::MailConfig;
use crate::contact::{
    ContactForm, EmailJsMailer, Executor, FailureReason, FormField, InputKind,
    SubmissionController, SubmissionState,
};
use crate::profile::{EMAIL, LOCATION, PHONE};

impl crate::contact::FormStore for RwSignal<ContactForm> {
    fn update<R>(&self, f: impl FnOnce(&mut ContactForm) -> R) -> Option<R> {
        self.try_update(f)
    }
}

/// Runs controller work on the browser event loop.
#[derive(Debug, Clone, Copy)]
struct BrowserExecutor;

impl Executor for BrowserExecutor {
    fn spawn(&self, fut: impl Future<Output = ()> + 'static) {
        spawn_local(fut);
    }

    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + 'static {
        let (tx, rx) = oneshot::channel();
        set_timeout(
            move || {
                let _ = tx.send(());
            },
            duration,
        );
        async move {
            let _ = rx.await;
        }
    }

    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

type BrowserController = SubmissionController<EmailJsMailer, BrowserExecutor, RwSignal<ContactForm>>;

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <Title text="Contact" />
        <Contact />
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id="contact" class="py-20 bg-gray-50 dark:bg-gray-800">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center">
                    <h2 class="text-3xl font-extrabold sm:text-4xl">"Get In Touch"</h2>
                    <p class="mt-4 max-w-2xl mx-auto text-xl text-gray-500 dark:text-gray-400">
                        "Have a question or want to work together? Feel free to reach out!"
                    </p>
                </div>
                <div class="mt-16 grid gap-12 lg:grid-cols-3">
                    <div class="space-y-6">
                        <InfoCard title="Email" value=EMAIL href=Some(format!("mailto:{EMAIL}")) />
                        <InfoCard
                            title="Phone"
                            value=PHONE
                            href=Some(format!("tel:{}", PHONE.replace(' ', "")))
                        />
                        <InfoCard title="Location" value=LOCATION href=None />
                    </div>
                    <div class="lg:col-span-2">
                        <ContactFormView />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn InfoCard(title: &'static str, value: &'static str, href: Option<String>) -> impl IntoView {
    view! {
        <div class="p-6 bg-white dark:bg-gray-700 rounded-lg shadow-md">
            <h3 class="text-lg font-medium">{title}</h3>
            {match href {
                Some(href) => {
                    view! {
                        <a
                            href=href
                            class="mt-1 block text-indigo-600 dark:text-indigo-400 hover:underline"
                        >
                            {value}
                        </a>
                    }
                        .into_any()
                }
                None => {
                    view! { <p class="mt-1 text-gray-600 dark:text-gray-300">{value}</p> }
                        .into_any()
                }
            }}
        </div>
    }
}

#[component]
fn ContactFormView() -> impl IntoView {
    let form = RwSignal::new(ContactForm::new());
    let config = MailConfig::from_env();
    if !config.is_complete() {
        log::warn!("EmailJS settings are missing, contact messages will not be delivered");
    }
    let controller: BrowserController =
        SubmissionController::new(Rc::new(EmailJsMailer::new(config)), BrowserExecutor, form);
    let controller = StoredValue::new_local(controller);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match controller.with_value(BrowserController::submit) {
            Ok(send) => spawn_local(async move {
                // delivery failures are already recorded on the form
                let _ = send.await;
            }),
            Err(e) => log::debug!("contact form not sent: {e}"),
        }
    };

    let succeeded = move || form.with(|f| *f.state() == SubmissionState::Succeeded);
    let submitting = move || form.with(ContactForm::is_submitting);

    view! {
        <Show
            when=succeeded
            fallback=move || {
                view! {
                    <form on:submit=on_submit class="space-y-6" novalidate>
                        <div class="grid gap-6 sm:grid-cols-2">
                            <FieldInput form field=FormField::Name />
                            <FieldInput form field=FormField::Email />
                        </div>
                        <FieldInput form field=FormField::Subject />
                        <FieldInput form field=FormField::Message />
                        {move || {
                            form.with(|f| f.failure().map(FailureReason::message))
                                .map(|message| {
                                    view! {
                                        <p class="text-sm text-red-600 dark:text-red-400" role="alert">
                                            {message}
                                        </p>
                                    }
                                })
                        }}
                        <button
                            type="submit"
                            disabled=submitting
                            class="w-full py-3 px-6 rounded-md text-white font-medium bg-indigo-600 hover:bg-indigo-700 disabled:opacity-60 disabled:cursor-not-allowed"
                        >
                            {move || if submitting() { "Sending..." } else { "Send Message" }}
                        </button>
                    </form>
                }
            }
        >
            <div class="p-8 bg-white dark:bg-gray-700 rounded-lg shadow-md text-center">
                <h3 class="text-2xl font-bold text-green-600 dark:text-green-400">"Thank you!"</h3>
                <p class="mt-2 text-gray-600 dark:text-gray-300">
                    "Your message has been sent. I'll get back to you soon."
                </p>
            </div>
        </Show>
    }
}

#[component]
fn FieldInput(form: RwSignal<ContactForm>, field: FormField) -> impl IntoView {
    let id = field.as_str();
    let value = move || form.with(|f| f.fields.value(field).to_string());
    let on_input = move |ev| form.update(|f| f.set_value(field, event_target_value(&ev)));
    let on_blur = move |_| form.update(|f| f.mark_touched(field));
    let has_error = move || form.with(|f| f.fields.shows_error(field));
    let class = move || {
        let border = if has_error() {
            "border-red-500 focus:ring-red-500"
        } else {
            "border-gray-300 dark:border-gray-600 focus:ring-indigo-500"
        };
        format!("mt-1 block w-full rounded-md border px-3 py-2 bg-white dark:bg-gray-800 focus:outline-none focus:ring-2 {border}")
    };

    let input = match field.input_kind() {
        InputKind::TextArea => view! {
            <textarea
                id=id
                name=id
                rows="5"
                class=class
                prop:value=value
                on:input=on_input
                on:blur=on_blur
            ></textarea>
        }
        .into_any(),
        kind => {
            let input_type = if kind == InputKind::Email { "email" } else { "text" };
            view! {
                <input
                    id=id
                    name=id
                    type=input_type
                    class=class
                    prop:value=value
                    on:input=on_input
                    on:blur=on_blur
                />
            }
            .into_any()
        }
    };

    view! {
        <div>
            <label for=id class="block text-sm font-medium text-gray-700 dark:text-gray-300">
                {field.label()}
            </label>
            {input}
            <Show when=has_error>
                <p class="mt-1 text-sm text-red-600 dark:text-red-400">{field.error_message()}</p>
            </Show>
        </div>
    }
}
