//! Numeric overview card

use leptos::prelude::*;

#[component]
pub fn StatCard(label: &'static str, value: String, accent: &'static str) -> impl IntoView {
    view! {
        <div style="display: flex; align-items: center; justify-content: space-between; padding: 1.5rem; border-radius: 0.75rem; background: white; box-shadow: 0 1px 3px rgba(0,0,0,0.1);">
            <div>
                <p style="margin: 0; font-size: 1.5rem; font-weight: 700;">{value}</p>
                <p style="margin: 0; font-size: 0.85rem; color: #6c757d;">{label}</p>
            </div>
            <div style=format!(
                "width: 3rem; height: 3rem; border-radius: 50%; background: {};",
                accent
            )></div>
        </div>
    }
}
