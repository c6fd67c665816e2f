use leptos::prelude::*;

use crate::content::{CORE_COMPETENCIES, SERVICES, STATS, TIMELINE};
use crate::nav::Anchor;

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section id=Anchor::About.id() class="py-20 px-6 bg-gray-50 dark:bg-gray-900/50">
            <div class="max-w-6xl mx-auto">
                <div class="text-center mb-20">
                    <h2 class="text-4xl md:text-6xl font-bold mb-6">"About Me"</h2>
                    <div class="w-24 h-1.5 bg-gradient-to-r from-blue-600 to-purple-600 mx-auto mb-8 rounded-full"></div>
                    <p class="text-gray-600 dark:text-gray-300 text-xl max-w-3xl mx-auto leading-relaxed">
                        "Passionate developer focused on creating exceptional digital solutions for businesses."
                    </p>
                </div>

                <div class="grid grid-cols-2 md:grid-cols-4 gap-8 mb-20">
                    {STATS
                        .into_iter()
                        .map(|stat| {
                            view! {
                                <div class="text-center">
                                    <div class="text-3xl md:text-4xl font-bold text-blue-600 dark:text-blue-400 mb-2">
                                        {stat.number}
                                    </div>
                                    <div class="text-gray-600 dark:text-gray-400 font-medium">
                                        {stat.label}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="grid lg:grid-cols-2 gap-16 mb-20">
                    <div class="space-y-6">
                        <h3 class="text-2xl font-bold mb-4 flex items-center">
                            <i class="extra-briefcase mr-3 text-blue-600 dark:text-blue-400" />
                            "Professional Background"
                        </h3>
                        <p class="text-gray-700 dark:text-gray-300 leading-relaxed">
                            "I'm a passionate Full-Stack Developer with expertise in modern web technologies. I specialize in building scalable applications that solve real business problems and deliver exceptional user experiences."
                        </p>
                        <p class="text-gray-700 dark:text-gray-300 leading-relaxed">
                            "My approach combines technical excellence with business understanding, ensuring every project delivers measurable value and meets client objectives."
                        </p>
                        <h4 class="text-xl font-semibold mb-3">"Core Competencies"</h4>
                        <div class="flex flex-wrap gap-2">
                            {CORE_COMPETENCIES
                                .into_iter()
                                .map(|skill| {
                                    view! {
                                        <span class="px-3 py-1 bg-blue-100 dark:bg-blue-900/30 text-blue-800 dark:text-blue-200 rounded-full text-sm font-medium">
                                            {skill}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div>
                        <h3 class="text-2xl font-bold mb-6 flex items-center">
                            <i class="extra-graduation mr-3 text-blue-600 dark:text-blue-400" />
                            "Experience & Education"
                        </h3>
                        <div class="space-y-6">
                            {TIMELINE
                                .into_iter()
                                .map(|step| {
                                    let dot = if step.current {
                                        "absolute -left-2 top-0 w-4 h-4 bg-blue-600 dark:bg-blue-400 rounded-full"
                                    } else {
                                        "absolute -left-2 top-0 w-4 h-4 bg-gray-400 rounded-full"
                                    };
                                    view! {
                                        <div class="relative pl-8 border-l-2 border-blue-200 dark:border-blue-800">
                                            <div class=dot></div>
                                            <div class="bg-white dark:bg-gray-800 p-4 rounded-lg shadow-sm">
                                                <h4 class="text-lg font-semibold">{step.title}</h4>
                                                <p class="text-blue-600 dark:text-blue-400 font-medium mb-2">
                                                    {step.period}
                                                </p>
                                                <p class="text-gray-700 dark:text-gray-300 mb-2">
                                                    {step.place}
                                                </p>
                                                <p class="text-gray-600 dark:text-gray-400 text-sm">
                                                    {step.note}
                                                </p>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>

                <h3 class="text-3xl font-bold mb-12 text-center">"What I Can Do For You"</h3>
                <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-6">
                    {SERVICES
                        .into_iter()
                        .map(|service| {
                            view! {
                                <div class="group bg-white dark:bg-gray-800 p-6 rounded-xl shadow-sm hover:shadow-lg border border-gray-200 dark:border-gray-700 transition-all duration-300 hover:-translate-y-1">
                                    <div class="w-12 h-12 bg-blue-100 dark:bg-blue-900/30 rounded-lg flex items-center justify-center mb-4 text-blue-600 dark:text-blue-400 group-hover:bg-blue-600 group-hover:text-white">
                                        <i class=service.icon />
                                    </div>
                                    <h4 class="text-lg font-semibold mb-3">{service.title}</h4>
                                    <p class="text-gray-600 dark:text-gray-400 text-sm leading-relaxed">
                                        {service.description}
                                    </p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
