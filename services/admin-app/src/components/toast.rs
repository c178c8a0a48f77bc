//! Toast list rendering

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastQueue};

/// Fixed-position stack of transient notifications
#[component]
pub fn ToastList(toasts: RwSignal<ToastQueue>) -> impl IntoView {
    view! {
        <div style="position: fixed; bottom: 1rem; right: 1rem; display: flex; flex-direction: column; gap: 0.5rem; z-index: 100;">
            {move || {
                toasts.with(|queue| {
                    queue
                        .iter()
                        .map(|(id, toast)| {
                            let id = *id;
                            let (color, bg) = match toast.kind {
                                ToastKind::Success => ("#155724", "#d4edda"),
                                ToastKind::Error => ("#721c24", "#f8d7da"),
                            };
                            let style = format!(
                                "display: flex; align-items: center; gap: 0.75rem; padding: 0.6rem 1rem; \
                                 border-radius: 0.5rem; font-size: 0.9rem; color: {}; background-color: {};",
                                color, bg
                            );
                            view! {
                                <div style=style>
                                    <span>{toast.message.clone()}</span>
                                    <button
                                        style="border: none; background: none; cursor: pointer; font-weight: 700;"
                                        on:click=move |_| toasts.update(|q| q.dismiss(id))
                                    >
                                        "x"
                                    </button>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                })
            }}
        </div>
    }
}
