use leptos::prelude::*;

use super::browser;
use crate::content::{AVAILABILITY, OWNER_NAME, OWNER_ROLE, SOCIAL_LINKS};
use crate::nav::Anchor;

#[component]
pub fn HeroSection() -> impl IntoView {
    view! {
        <section
            id=Anchor::Home.id()
            class="relative min-h-screen flex items-center justify-center px-6 bg-white dark:bg-gray-950"
        >
            <div class="max-w-4xl mx-auto text-center">
                <div class="inline-flex items-center px-4 py-2 mb-8 bg-blue-50 dark:bg-blue-950/50 text-blue-700 dark:text-blue-300 rounded-full border border-blue-200 dark:border-blue-800">
                    <div class="w-2 h-2 bg-green-500 rounded-full mr-3 animate-pulse"></div>
                    <span class="text-sm font-medium">{AVAILABILITY}</span>
                </div>

                <h1 class="text-5xl md:text-6xl lg:text-7xl font-bold text-gray-900 dark:text-white mb-6 leading-tight">
                    {OWNER_NAME}
                </h1>
                <h2 class="text-2xl md:text-3xl text-gray-600 dark:text-gray-300 mb-4 font-light">
                    {OWNER_ROLE}
                </h2>
                <p class="text-lg md:text-xl text-gray-600 dark:text-gray-400 max-w-3xl mx-auto mb-4 leading-relaxed">
                    "I help businesses build fast, scalable web applications that drive results."
                </p>
                <p class="text-gray-500 max-w-2xl mx-auto mb-12">
                    "Specializing in React, Node.js, and modern web technologies with "
                    <strong class="text-gray-700 dark:text-gray-300">"proven track record"</strong>
                    " of delivering projects on time and on budget."
                </p>

                <div class="flex flex-col sm:flex-row gap-4 justify-center mb-16">
                    <button
                        on:click=move |_| {
                            browser::scroll_to(Anchor::Contact);
                        }
                        class="group inline-flex items-center justify-center px-8 py-4 bg-blue-600 hover:bg-blue-700 text-white rounded-lg font-semibold shadow-lg hover:shadow-xl"
                    >
                        <i class="extra-email mr-2" />
                        "Start a Project"
                        <i class="extra-arrow-right ml-2 group-hover:translate-x-1 transition-transform duration-200" />
                    </button>
                    <button
                        on:click=move |_| {
                            browser::scroll_to(Anchor::Projects);
                        }
                        class="inline-flex items-center justify-center px-8 py-4 bg-gray-100 dark:bg-gray-800 hover:bg-gray-200 dark:hover:bg-gray-700 text-gray-900 dark:text-white rounded-lg font-semibold"
                    >
                        "View Portfolio"
                    </button>
                </div>

                <div class="flex justify-center space-x-4">
                    {SOCIAL_LINKS
                        .into_iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label=link.label
                                    class="p-3 bg-gray-100 dark:bg-gray-800 hover:bg-gray-200 dark:hover:bg-gray-700 text-gray-700 dark:text-gray-300 rounded-lg transition-all duration-200 hover:scale-105"
                                >
                                    <i class=link.icon />
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="absolute bottom-8 left-1/2 transform -translate-x-1/2 text-center">
                <button
                    on:click=move |_| {
                        browser::scroll_to(Anchor::About);
                    }
                    class="text-gray-400 hover:text-gray-600 dark:hover:text-gray-300 animate-bounce"
                    aria-label="Scroll to learn more"
                >
                    <i class="extra-arrow-down" />
                </button>
            </div>
        </section>
    }
}
