mod about;
mod browser;
mod contact;
mod footer;
mod header;
mod hero;
mod projects;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::content::OWNER_NAME;
use crate::nav::Anchor;
use crate::page::{ShellPhase, SECTIONS, SPLASH_DURATION};
use crate::theme::{Theme, ThemeStore};

use about::AboutSection;
use browser::PageStorage;
use contact::ContactSection;
use footer::Footer;
use header::Header;
use hero::HeroSection;
use projects::ProjectsSection;
use skills::SkillsSection;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans">
                <App />
            </body>
        </html>
    }
}

/// Shared view of the active theme. The only write path is [`ThemeContext::toggle`].
#[derive(Clone, Copy)]
pub struct ThemeContext {
    theme: ReadSignal<Theme>,
    set_theme: WriteSignal<Theme>,
    store: StoredValue<ThemeStore<PageStorage>>,
}

impl ThemeContext {
    fn new() -> Self {
        let store = ThemeStore::new(browser::page_storage());
        let (theme, set_theme) = signal(store.get_theme());
        Self {
            theme,
            set_theme,
            store: StoredValue::new(store),
        }
    }

    /// Tracked read of the active theme.
    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    pub fn toggle(&self) {
        let set_theme = self.set_theme;
        self.store.update_value(|store| {
            let next = store.toggle_theme();
            log::debug!("theme switched to {next}");
            set_theme.set(next);
        });
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let theme = ThemeContext::new();
    provide_context(theme);
    Effect::new(move |_| browser::apply_theme_class(theme.theme()));

    view! {
        <Title formatter=|title| format!("{OWNER_NAME} - {title}") />
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=PageShell />
            </Routes>
        </Router>
    }
}

/// Holds the page behind the splash until the gate opens.
#[component]
fn PageShell() -> impl IntoView {
    let (phase, set_phase) = signal(ShellPhase::Loading);
    let UseTimeoutFnReturn { start, .. } = use_timeout_fn(
        move |_: ()| set_phase.update(|p| *p = p.advance()),
        SPLASH_DURATION.as_millis() as f64,
    );
    Effect::new(move |_| start(()));

    view! {
        <Show when=move || phase.get().is_ready() fallback=|| view! { <Splash /> }>
            <HomePage />
        </Show>
    }
}

#[component]
fn Splash() -> impl IntoView {
    view! {
        <div class="fixed inset-0 flex items-center justify-center bg-blue-600 dark:bg-gray-900 z-50">
            <div class="text-4xl md:text-6xl font-bold text-white animate-pulse">{OWNER_NAME}</div>
        </div>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <div class="min-h-screen bg-gray-50 text-gray-900 dark:bg-gray-900 dark:text-gray-100 transition-colors duration-300">
            <Header />
            <main>{SECTIONS.into_iter().map(section).collect_view()}</main>
            <Footer />
        </div>
    }
}

fn section(anchor: Anchor) -> AnyView {
    match anchor {
        Anchor::Home => view! { <HeroSection /> }.into_any(),
        Anchor::About => view! { <AboutSection /> }.into_any(),
        Anchor::Skills => view! { <SkillsSection /> }.into_any(),
        Anchor::Projects => view! { <ProjectsSection /> }.into_any(),
        Anchor::Contact => view! { <ContactSection /> }.into_any(),
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <Title text="Page Not Found" />
        <div class="min-h-screen flex flex-col items-center justify-center text-center p-4">
            <h1 class="text-4xl md:text-6xl font-bold mb-6">"404 - Page Not Found"</h1>
            <p class="text-xl text-gray-700 dark:text-gray-300 mb-8">
                "The page you're looking for doesn't exist or has been moved."
            </p>
            <a
                href="/"
                class="px-6 py-3 bg-blue-600 hover:bg-blue-700 text-white rounded-lg font-medium shadow-md"
            >
                "Go Home"
            </a>
        </div>
    }
}
