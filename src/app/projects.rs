use leptos::{either::Either, prelude::*};

use crate::content::{filter_projects, Project, ProjectFilter, REPOSITORIES_URL};
use crate::nav::Anchor;

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let (filter, set_filter) = signal(ProjectFilter::default());

    view! {
        <section id=Anchor::Projects.id() class="py-20 px-4 bg-gray-50 dark:bg-gray-900">
            <div class="max-w-6xl mx-auto">
                <div class="text-center mb-16">
                    <h2 class="text-3xl md:text-4xl font-bold mb-4">
                        "My " <span class="text-blue-600 dark:text-blue-400">"Projects"</span>
                    </h2>
                    <div class="w-20 h-1 bg-blue-600 dark:bg-blue-400 mx-auto mb-6"></div>
                    <p class="text-gray-700 dark:text-gray-300 text-lg max-w-2xl mx-auto">
                        "Here are some of my recent projects. Each one was built to solve a specific problem or explore new technologies."
                    </p>
                </div>

                <div class="flex flex-wrap justify-center gap-3 mb-12">
                    {ProjectFilter::ALL
                        .into_iter()
                        .map(|option| {
                            view! {
                                <button
                                    on:click=move |_| set_filter.set(option)
                                    class=move || {
                                        if filter.get() == option {
                                            "px-4 py-2 rounded-full font-medium bg-blue-600 text-white shadow-md"
                                        } else {
                                            "px-4 py-2 rounded-full font-medium bg-white dark:bg-gray-800 text-gray-700 dark:text-gray-300 hover:bg-gray-100 dark:hover:bg-gray-700 border border-gray-200 dark:border-gray-700"
                                        }
                                    }
                                >
                                    {option.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {move || {
                        let projects = filter_projects(filter.get());
                        if projects.is_empty() {
                            Either::Left(
                                view! {
                                    <div class="col-span-full text-center text-gray-600 dark:text-gray-300 text-lg">
                                        "No projects found in this category."
                                    </div>
                                },
                            )
                        } else {
                            Either::Right(
                                projects
                                    .into_iter()
                                    .map(|project| view! { <ProjectCard project /> })
                                    .collect_view(),
                            )
                        }
                    }}
                </div>

                <div class="mt-16 text-center">
                    <a
                        href=REPOSITORIES_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class="inline-block px-8 py-3 bg-blue-600 hover:bg-blue-700 text-white rounded-full font-medium shadow-md hover:shadow-lg"
                    >
                        "View More Projects"
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    let hidden = project.hidden_tags();
    view! {
        <div class="bg-white dark:bg-gray-800 rounded-xl overflow-hidden shadow-lg hover:-translate-y-2 transition-transform">
            <div class="relative overflow-hidden h-48">
                <img
                    src=project.image
                    alt=project.title
                    class="w-full h-full object-cover transition-transform duration-500 hover:scale-110"
                />
            </div>
            <div class="p-6">
                <div class="flex flex-wrap gap-2 mb-3">
                    {project
                        .visible_tags()
                        .iter()
                        .map(|tag| {
                            view! {
                                <span class="text-xs font-semibold bg-blue-100 dark:bg-blue-900 text-blue-800 dark:text-blue-200 px-2 py-1 rounded-full">
                                    {*tag}
                                </span>
                            }
                        })
                        .collect_view()}
                    {(hidden > 0)
                        .then(|| {
                            view! {
                                <span class="text-xs font-semibold bg-gray-100 dark:bg-gray-700 text-gray-800 dark:text-gray-200 px-2 py-1 rounded-full">
                                    {format!("+{hidden}")}
                                </span>
                            }
                        })}
                </div>
                <h3 class="text-xl font-bold mb-2">{project.title}</h3>
                <p class="text-gray-700 dark:text-gray-300 mb-4 line-clamp-3">{project.description}</p>
                <div class="flex justify-between">
                    {project
                        .demo_link
                        .map(|href| {
                            view! {
                                <a
                                    href=href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="flex items-center text-blue-600 dark:text-blue-400 hover:text-blue-800 dark:hover:text-blue-300 font-medium"
                                >
                                    <i class="extra-external-link mr-1" />
                                    "Demo"
                                </a>
                            }
                        })}
                    <a
                        href=project.code_link
                        target="_blank"
                        rel="noopener noreferrer"
                        class="flex items-center text-gray-700 dark:text-gray-300 hover:text-gray-900 dark:hover:text-white font-medium"
                    >
                        <i class="devicon-github-plain mr-1" />
                        "Code"
                    </a>
                </div>
            </div>
        </div>
    }
}
