//! Two-step delete confirmation dialog

use leptos::prelude::*;

/// Confirmation dialog. Nothing touches the network until Confirm; Cancel
/// closes without any request. Confirm is disabled and relabeled while the
/// delete is in flight.
#[component]
pub fn DeleteDialog(
    open: Signal<bool>,
    deleting: Signal<bool>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        {move || {
            if !open.get() {
                return ().into_any();
            }
            view! {
                <div style="position: fixed; inset: 0; background: rgba(0,0,0,0.4); display: flex; align-items: center; justify-content: center; z-index: 50;">
                    <div style="background: white; border-radius: 0.75rem; padding: 1.5rem; max-width: 24rem; width: 100%;">
                        <h3 style="margin: 0 0 0.5rem 0;">"Delete this joke?"</h3>
                        <p style="margin: 0 0 1.25rem 0; color: #6c757d; font-size: 0.9rem;">
                            "This action cannot be undone. This will permanently delete the selected joke."
                        </p>
                        <div style="display: flex; justify-content: flex-end; gap: 0.5rem;">
                            <button
                                style="padding: 0.5rem 1rem; border-radius: 0.5rem; border: 1px solid #dee2e6; background: white; cursor: pointer;"
                                disabled=move || deleting.get()
                                on:click=move |_| on_cancel.run(())
                            >
                                "Cancel"
                            </button>
                            <button
                                style="padding: 0.5rem 1rem; border-radius: 0.5rem; border: none; background: #dc3545; color: white; cursor: pointer;"
                                disabled=move || deleting.get()
                                on:click=move |_| on_confirm.run(())
                            >
                                {move || if deleting.get() { "Deleting..." } else { "Delete" }}
                            </button>
                        </div>
                    </div>
                </div>
            }
            .into_any()
        }}
    }
}
