use leptos::prelude::*;
use leptos_use::use_window_scroll;

use super::browser;
use super::ThemeContext;
use crate::content::OWNER_NAME;
use crate::nav::{self, Anchor, NAV_LINKS};

#[component]
pub fn Header() -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let (menu_open, set_menu_open) = signal(false);

    let go = move |anchor: Anchor| {
        if browser::scroll_to(anchor) {
            set_menu_open.set(false);
        }
    };

    let header_class = move || {
        if nav::is_scrolled(scroll_y.get()) {
            "fixed top-0 left-0 w-full z-50 transition-all duration-300 py-4 bg-white/90 dark:bg-gray-900/90 backdrop-blur-md border-b border-gray-200/10 dark:border-gray-800/10"
        } else {
            "fixed top-0 left-0 w-full z-50 transition-all duration-300 py-6 bg-transparent"
        }
    };

    view! {
        <header class=header_class>
            <div class="max-w-6xl mx-auto px-6 flex justify-between items-center">
                <button
                    on:click=move |_| go(Anchor::Home)
                    class="text-xl font-semibold text-gray-900 dark:text-white hover:text-gray-600 dark:hover:text-gray-300 transition-colors duration-200"
                >
                    {OWNER_NAME}
                </button>

                <nav class="hidden md:flex items-center space-x-8">
                    {NAV_LINKS
                        .into_iter()
                        .map(|link| {
                            view! {
                                <button
                                    on:click=move |_| go(link.anchor)
                                    class="relative group text-gray-600 dark:text-gray-300 hover:text-gray-900 dark:hover:text-white font-medium transition-colors duration-200"
                                >
                                    {link.label}
                                    <span class="absolute bottom-0 left-0 w-0 h-0.5 bg-gray-900 dark:bg-white group-hover:w-full transition-all duration-200"></span>
                                </button>
                            }
                        })
                        .collect_view()}
                    <ThemeToggle />
                </nav>

                <div class="flex items-center md:hidden space-x-2">
                    <ThemeToggle />
                    <button
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        class="p-2 rounded-full text-gray-600 dark:text-gray-300 hover:bg-gray-100 dark:hover:bg-gray-800 transition-all duration-200"
                        aria-label="Toggle menu"
                    >
                        <i class=move || if menu_open.get() { "extra-close" } else { "extra-menu" } />
                    </button>
                </div>
            </div>
        </header>

        <Show when=move || menu_open.get()>
            <div
                class="fixed inset-0 bg-black/20 backdrop-blur-sm z-40 md:hidden"
                on:click=move |_| set_menu_open.set(false)
            />
            <div class="fixed top-0 right-0 h-full w-72 bg-white dark:bg-gray-900 z-50 pt-20 px-6 shadow-xl md:hidden">
                <nav class="flex flex-col space-y-1">
                    {NAV_LINKS
                        .into_iter()
                        .map(|link| {
                            view! {
                                <button
                                    class="text-left py-4 px-2 text-lg font-medium text-gray-700 dark:text-gray-300 hover:text-gray-900 dark:hover:text-white border-b border-gray-100 dark:border-gray-800 last:border-b-0"
                                    on:click=move |_| go(link.anchor)
                                >
                                    {link.label}
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>
                <div class="absolute bottom-8 left-6 right-6 text-center text-sm text-gray-400">
                    "Let's build something great together"
                </div>
            </div>
        </Show>
    }
}

#[component]
fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<ThemeContext>();
    view! {
        <button
            on:click=move |_| theme.toggle()
            class="p-2 rounded-full text-gray-600 dark:text-gray-300 hover:text-gray-900 dark:hover:text-white hover:bg-gray-100 dark:hover:bg-gray-800 transition-all duration-200"
            aria-label="Toggle theme"
        >
            <i class=move || theme.theme().toggle_icon() />
        </button>
    }
}
