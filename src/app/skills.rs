use leptos::prelude::*;

use super::browser;
use crate::content::SkillCategory;
use crate::nav::Anchor;

const TAB_ACTIVE: &str =
    "flex items-center px-6 py-3 rounded-lg font-medium transition-all duration-200 bg-blue-600 text-white shadow-lg";
const TAB_IDLE: &str = "flex items-center px-6 py-3 rounded-lg font-medium transition-all duration-200 bg-white dark:bg-gray-800 text-gray-700 dark:text-gray-300 hover:bg-gray-100 dark:hover:bg-gray-700 border border-gray-200 dark:border-gray-700";

#[component]
pub fn SkillsSection() -> impl IntoView {
    let (active, set_active) = signal(SkillCategory::default());

    view! {
        <section id=Anchor::Skills.id() class="py-20 px-6 bg-gray-50 dark:bg-gray-900/50">
            <div class="max-w-6xl mx-auto">
                <div class="text-center mb-20">
                    <h2 class="text-4xl md:text-6xl font-bold mb-6">"Technical Expertise"</h2>
                    <div class="w-24 h-1.5 bg-gradient-to-r from-blue-600 to-purple-600 mx-auto mb-8 rounded-full"></div>
                    <p class="text-gray-600 dark:text-gray-300 text-xl max-w-3xl mx-auto leading-relaxed">
                        "Technologies and skills I use to build exceptional digital solutions"
                    </p>
                </div>

                <div class="flex flex-wrap justify-center gap-2 mb-12">
                    {SkillCategory::ALL
                        .into_iter()
                        .map(|category| {
                            view! {
                                <button
                                    on:click=move |_| set_active.set(category)
                                    class=move || {
                                        if active.get() == category { TAB_ACTIVE } else { TAB_IDLE }
                                    }
                                >
                                    <i class=format!("{} mr-2", category.icon()) />
                                    {category.title()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="bg-white dark:bg-gray-800 rounded-2xl p-8 shadow-lg border border-gray-200 dark:border-gray-700">
                    {move || {
                        let category = active.get();
                        view! {
                            <div class="text-center mb-8">
                                <div class="flex items-center justify-center mb-4">
                                    <div class="p-3 bg-blue-100 dark:bg-blue-900/30 rounded-xl text-blue-600 dark:text-blue-400">
                                        <i class=category.icon() />
                                    </div>
                                </div>
                                <h3 class="text-2xl font-bold mb-2">{category.title()}</h3>
                                <p class="text-gray-600 dark:text-gray-400">{category.description()}</p>
                            </div>
                            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4">
                                {category
                                    .skills()
                                    .iter()
                                    .map(|skill| {
                                        view! {
                                            <div class="group flex items-center p-4 bg-gray-50 dark:bg-gray-700/50 rounded-lg border border-gray-200 dark:border-gray-600 hover:border-blue-300 dark:hover:border-blue-700">
                                                <i class="extra-chevron-right text-blue-600 dark:text-blue-400 mr-3" />
                                                <span class="text-gray-800 dark:text-gray-200 font-medium">
                                                    {*skill}
                                                </span>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                    }}
                </div>

                <div class="text-center mt-16">
                    <h3 class="text-2xl font-bold mb-4">"Ready to Build Something Great?"</h3>
                    <p class="text-gray-600 dark:text-gray-400 mb-6 max-w-2xl mx-auto">
                        "Let's discuss how these skills can help solve your business challenges and create exceptional digital experiences."
                    </p>
                    <button
                        on:click=move |_| {
                            browser::scroll_to(Anchor::Contact);
                        }
                        class="inline-flex items-center px-8 py-3 bg-blue-600 hover:bg-blue-700 text-white rounded-lg font-semibold shadow-lg hover:shadow-xl"
                    >
                        "Let's Collaborate"
                        <i class="extra-chevron-right ml-2" />
                    </button>
                </div>
            </div>
        </section>
    }
}
