use leptos::prelude::*;

use super::browser;
use crate::content::{CONTACT_DETAILS, FOOTER_BLURB, OWNER_NAME, SOCIAL_LINKS};
use crate::page::SECTIONS;

/// Year the site was built, set by build.rs
const COPYRIGHT_YEAR: &str = env!("BUILD_YEAR");

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-gray-900 text-white pt-16 pb-8 px-4">
            <div class="max-w-6xl mx-auto">
                <div class="grid md:grid-cols-3 gap-8 mb-12">
                    <div>
                        <div class="text-2xl font-bold text-blue-400 mb-4">{OWNER_NAME}</div>
                        <p class="text-gray-400 mb-6">{FOOTER_BLURB}</p>
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
                                            class="text-gray-400 hover:text-white text-xl"
                                        >
                                            <i class=link.icon />
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div>
                        <h3 class="text-xl font-bold mb-4">"Quick Links"</h3>
                        <ul class="space-y-2">
                            {SECTIONS
                                .into_iter()
                                .map(|anchor| {
                                    view! {
                                        <li>
                                            <button
                                                on:click=move |_| {
                                                    browser::scroll_to(anchor);
                                                }
                                                class="text-gray-400 hover:text-blue-400 transition-colors"
                                            >
                                                {anchor.label()}
                                            </button>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>

                    <div>
                        <h3 class="text-xl font-bold mb-4">"Contact Info"</h3>
                        <ul class="space-y-3 text-gray-400">
                            {CONTACT_DETAILS
                                .into_iter()
                                .map(|detail| {
                                    view! {
                                        <li>
                                            <a href=detail.link class="hover:text-blue-400">
                                                {detail.details}
                                            </a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                </div>

                <div class="border-t border-gray-800 pt-8 text-center text-gray-500">
                    <p>{format!("© {COPYRIGHT_YEAR} {OWNER_NAME}. All Rights Reserved.")}</p>
                </div>
            </div>
        </footer>
    }
}
