//! Placeholder blocks shown during the very first load

use leptos::prelude::*;

const SHIMMER: &str = "background: #e9ecef; border-radius: 0.75rem;";

/// Grid of placeholder cards for the jokes page
#[component]
pub fn SkeletonGrid() -> impl IntoView {
    view! {
        <div style="display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 1.5rem;">
            {(0..8)
                .map(|_| view! { <div style=format!("height: 20rem; {}", SHIMMER)></div> })
                .collect::<Vec<_>>()}
        </div>
    }
}

/// Placeholder layout for the overview page
#[component]
pub fn SkeletonOverview() -> impl IntoView {
    view! {
        <div style="display: flex; flex-direction: column; gap: 1.5rem;">
            <div style="display: grid; grid-template-columns: repeat(4, 1fr); gap: 1rem;">
                {(0..4)
                    .map(|_| view! { <div style=format!("height: 6rem; {}", SHIMMER)></div> })
                    .collect::<Vec<_>>()}
            </div>
            <div style=format!("height: 20rem; {}", SHIMMER)></div>
            <div style=format!("height: 24rem; {}", SHIMMER)></div>
        </div>
    }
}
