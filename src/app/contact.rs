use leptos::{either::Either, ev::SubmitEvent, prelude::*, task::spawn_local};

use crate::contact::{ContactFormState, Field, SubmissionError, SubmissionStatus, SUCCESS_DISPLAY};
use crate::content::{CONTACT_DETAILS, SOCIAL_LINKS};
use crate::nav::Anchor;

#[cfg(feature = "ssr")]
use crate::contact::{validate, ContactForm, DEFAULT_FAILURE_MESSAGE};
#[cfg(feature = "ssr")]
use crate::relay::{RelayClient, RelayConfig};

const INPUT_CLASS: &str = "w-full px-4 py-3 rounded-lg border focus:outline-none focus:ring-2 focus:ring-blue-500 bg-white dark:bg-gray-700 text-gray-900 dark:text-white";

/// Forward a contact message to the email relay.
///
/// Input is validated again here; the browser's checks are only a courtesy.
#[server]
pub async fn send_message(
    name: String,
    email: String,
    subject: String,
    message: String,
) -> Result<(), ServerFnError> {
    let form = validate(ContactForm {
        name,
        email,
        subject,
        message,
    })
    .map_err(|errors| {
        let first = errors
            .iter()
            .next()
            .map(|(_, msg)| msg)
            .unwrap_or(DEFAULT_FAILURE_MESSAGE);
        ServerFnError::new(first)
    })?;

    let relay = match use_context::<RelayClient>() {
        Some(relay) => relay,
        None => RelayClient::new(RelayConfig::from_env())
            .map_err(|e| ServerFnError::new(e.user_message()))?,
    };
    relay
        .send(&form)
        .await
        .map_err(|e| ServerFnError::new(e.user_message()))
}

fn submission_error(err: ServerFnError) -> SubmissionError {
    match err {
        ServerFnError::ServerError(message) => SubmissionError::new(message),
        other => {
            log::warn!("contact request failed: {other}");
            SubmissionError::default()
        }
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let state = RwSignal::new(ContactFormState::default());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(form) = state.try_update(|s| s.begin_submit()).flatten() else {
            return;
        };
        spawn_local(async move {
            let result = send_message(form.name, form.email, form.subject, form.message)
                .await
                .map_err(submission_error);
            let ticket = state.try_update(|s| s.finish(result)).flatten();
            if let Some(ticket) = ticket {
                set_timeout(
                    move || {
                        state.try_update(|s| s.expire_success(ticket));
                    },
                    SUCCESS_DISPLAY,
                );
            }
        });
    };

    let in_flight = move || state.with(|s| !s.is_submit_enabled());

    view! {
        <section id=Anchor::Contact.id() class="py-20 px-4 bg-white dark:bg-gray-800">
            <div class="max-w-5xl mx-auto">
                <div class="text-center mb-16">
                    <h2 class="text-3xl md:text-4xl font-bold mb-4">
                        "Get In " <span class="text-blue-600 dark:text-blue-400">"Touch"</span>
                    </h2>
                    <div class="w-20 h-1 bg-blue-600 dark:bg-blue-400 mx-auto mb-6"></div>
                    <p class="text-gray-700 dark:text-gray-300 text-lg max-w-2xl mx-auto">
                        "Have a project in mind or just want to chat? Feel free to reach out using the form below or through my contact details."
                    </p>
                </div>

                <div class="flex flex-col lg:flex-row gap-12">
                    <div class="lg:w-1/3">
                        <h3 class="text-2xl font-bold mb-6">"Contact Information"</h3>
                        <div class="space-y-6 mb-8">
                            {CONTACT_DETAILS
                                .into_iter()
                                .map(|detail| {
                                    view! {
                                        <div class="flex items-start">
                                            <i class=format!(
                                                "{} text-2xl text-blue-600 dark:text-blue-400 mt-1 mr-4",
                                                detail.icon,
                                            ) />
                                            <div>
                                                <h4 class="text-lg font-semibold">{detail.title}</h4>
                                                <a
                                                    href=detail.link
                                                    class="text-gray-700 dark:text-gray-300 hover:text-blue-600 dark:hover:text-blue-400"
                                                >
                                                    {detail.details}
                                                </a>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <h3 class="text-2xl font-bold mb-4">"Follow Me"</h3>
                        <div class="flex space-x-4">
                            {SOCIAL_LINKS
                                .into_iter()
                                .map(|link| {
                                    view! {
                                        <a
                                            href=link.href
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            aria-label=link.label
                                            class="p-3 bg-gray-100 dark:bg-gray-700 text-gray-700 dark:text-gray-300 rounded-full hover:bg-blue-100 dark:hover:bg-blue-900 hover:text-blue-600 dark:hover:text-blue-400"
                                        >
                                            <i class=link.icon />
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="lg:w-2/3">
                        <h3 class="text-2xl font-bold mb-6">"Send me a message"</h3>
                        {move || {
                            state
                                .with(|s| match s.status() {
                                    SubmissionStatus::Success => {
                                        Some(
                                            Either::Left(
                                                view! {
                                                    <div class="mb-6 p-4 bg-green-100 dark:bg-green-900 text-green-800 dark:text-green-200 rounded-lg">
                                                        <p>
                                                            "Your message has been sent successfully! I'll get back to you soon."
                                                        </p>
                                                    </div>
                                                },
                                            ),
                                        )
                                    }
                                    SubmissionStatus::Failure(reason) => {
                                        let reason = reason.clone();
                                        Some(
                                            Either::Right(
                                                view! {
                                                    <div class="mb-6 p-4 bg-red-100 dark:bg-red-900 text-red-800 dark:text-red-200 rounded-lg">
                                                        <p>{reason}</p>
                                                    </div>
                                                },
                                            ),
                                        )
                                    }
                                    SubmissionStatus::Idle | SubmissionStatus::InFlight => None,
                                })
                        }}
                        <form on:submit=on_submit class="space-y-6" novalidate=true>
                            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                                <FormField field=Field::Name state />
                                <FormField field=Field::Email state />
                            </div>
                            <FormField field=Field::Subject state />
                            <FormField field=Field::Message state />
                            <button
                                type="submit"
                                disabled=in_flight
                                class="px-6 py-3 bg-blue-600 hover:bg-blue-700 text-white rounded-lg font-medium shadow-md hover:shadow-lg flex items-center justify-center disabled:bg-blue-400 disabled:cursor-not-allowed"
                            >
                                {move || {
                                    if in_flight() {
                                        Either::Left(
                                            view! {
                                                <i class="extra-spinner animate-spin -ml-1 mr-2" />
                                                "Sending..."
                                            },
                                        )
                                    } else {
                                        Either::Right(
                                            view! {
                                                <i class="extra-send mr-2" />
                                                "Send Message"
                                            },
                                        )
                                    }
                                }}
                            </button>
                        </form>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn FormField(field: Field, state: RwSignal<ContactFormState>) -> impl IntoView {
    let error = move || state.with(|s| s.errors().get(field));
    let value = move || state.with(|s| s.form().get(field).to_string());
    let on_input = move |ev: leptos::ev::Event| {
        state.update(|s| s.set_field(field, event_target_value(&ev)));
    };
    let class = move || {
        if error().is_some() {
            format!("{INPUT_CLASS} border-red-500 dark:border-red-400")
        } else {
            format!("{INPUT_CLASS} border-gray-300 dark:border-gray-600")
        }
    };

    let control = if field == Field::Message {
        Either::Left(view! {
            <textarea
                id=field.id()
                rows=5
                class=class
                placeholder=field.placeholder()
                prop:value=value
                on:input=on_input
            ></textarea>
        })
    } else {
        let kind = if field == Field::Email { "email" } else { "text" };
        Either::Right(view! {
            <input
                id=field.id()
                type=kind
                class=class
                placeholder=field.placeholder()
                prop:value=value
                on:input=on_input
            />
        })
    };

    view! {
        <div>
            <label class="block text-gray-700 dark:text-gray-300 mb-2" for=field.id()>
                {field.label()}
            </label>
            {control}
            {move || {
                error()
                    .map(|message| {
                        view! { <p class="mt-1 text-red-600 dark:text-red-400 text-sm">{message}</p> }
                    })
            }}
        </div>
    }
}
