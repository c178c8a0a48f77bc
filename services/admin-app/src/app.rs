//! Top-level dashboard shell

use leptos::prelude::*;

use crate::components::jokes_page::JokesPage;
use crate::components::overview_page::OverviewPage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Overview,
    Jokes,
}

#[component]
pub fn App() -> impl IntoView {
    let tab = RwSignal::new(Tab::Overview);

    let tab_style = move |target: Tab| {
        if tab.get() == target {
            "padding: 0.5rem 1rem; border: none; border-bottom: 2px solid #0A408A; background: none; font-weight: 600; cursor: pointer;"
        } else {
            "padding: 0.5rem 1rem; border: none; background: none; color: #6c757d; cursor: pointer;"
        }
    };

    view! {
        <main style="font-family: system-ui, sans-serif; max-width: 1100px; margin: 0 auto; padding: 1rem; background: #f8f9fa; min-height: 100vh; box-sizing: border-box;">
            <header style="display: flex; align-items: center; gap: 1.5rem; margin-bottom: 1.5rem;">
                <h1 style="margin: 0; font-size: 1.25rem;">"JokeHub Admin"</h1>
                <nav style="display: flex; gap: 0.5rem;">
                    <button
                        style=move || tab_style(Tab::Overview)
                        on:click=move |_| tab.set(Tab::Overview)
                    >
                        "Overview"
                    </button>
                    <button
                        style=move || tab_style(Tab::Jokes)
                        on:click=move |_| tab.set(Tab::Jokes)
                    >
                        "Jokes"
                    </button>
                </nav>
            </header>
            {move || match tab.get() {
                Tab::Overview => view! { <OverviewPage /> }.into_any(),
                Tab::Jokes => view! { <JokesPage /> }.into_any(),
            }}
        </main>
    }
}
