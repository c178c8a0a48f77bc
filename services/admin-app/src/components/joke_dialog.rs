//! Create/edit joke dialog

use jokehub_api::models::{Joke, JokePayload};
use leptos::prelude::*;

/// Form dialog for creating a new joke or editing an existing one. The
/// fields reset whenever the dialog is reopened for a different record.
#[component]
pub fn JokeDialog(
    open: Signal<bool>,
    editing: Signal<Option<Joke>>,
    saving: Signal<bool>,
    on_save: Callback<JokePayload>,
    on_close: Callback<()>,
) -> impl IntoView {
    let text = RwSignal::new(String::new());
    let answer = RwSignal::new(String::new());
    let image_url = RwSignal::new(String::new());

    Effect::new(move |_| {
        match editing.get() {
            Some(joke) => {
                text.set(joke.text);
                answer.set(joke.joke_answer);
                image_url.set(joke.image_url.unwrap_or_default());
            }
            None => {
                text.set(String::new());
                answer.set(String::new());
                image_url.set(String::new());
            }
        }
    });

    let submit = move |_| {
        let url = image_url.get();
        on_save.run(JokePayload {
            text: text.get(),
            joke_answer: answer.get(),
            image_url: if url.is_empty() { None } else { Some(url) },
            image: None,
        });
    };

    let field_style = "width: 100%; padding: 0.6rem; border: 1px solid #dee2e6; border-radius: 0.5rem; font-size: 0.95rem; box-sizing: border-box;";

    view! {
        {move || {
            if !open.get() {
                return ().into_any();
            }
            let title = if editing.with(|e| e.is_some()) {
                "Edit Joke"
            } else {
                "Add Joke"
            };
            view! {
                <div style="position: fixed; inset: 0; background: rgba(0,0,0,0.4); display: flex; align-items: center; justify-content: center; z-index: 50;">
                    <div style="background: white; border-radius: 0.75rem; padding: 1.5rem; max-width: 28rem; width: 100%;">
                        <h3 style="margin: 0 0 1rem 0;">{title}</h3>
                        <div style="display: flex; flex-direction: column; gap: 0.75rem;">
                            <label style="font-size: 0.85rem; color: #6c757d;">
                                "Joke"
                                <input
                                    style=field_style
                                    prop:value=move || text.get()
                                    on:input=move |ev| text.set(event_target_value(&ev))
                                />
                            </label>
                            <label style="font-size: 0.85rem; color: #6c757d;">
                                "Answer"
                                <input
                                    style=field_style
                                    prop:value=move || answer.get()
                                    on:input=move |ev| answer.set(event_target_value(&ev))
                                />
                            </label>
                            <label style="font-size: 0.85rem; color: #6c757d;">
                                "Image URL (optional)"
                                <input
                                    style=field_style
                                    prop:value=move || image_url.get()
                                    on:input=move |ev| image_url.set(event_target_value(&ev))
                                />
                            </label>
                        </div>
                        <div style="display: flex; justify-content: flex-end; gap: 0.5rem; margin-top: 1.25rem;">
                            <button
                                style="padding: 0.5rem 1rem; border-radius: 0.5rem; border: 1px solid #dee2e6; background: white; cursor: pointer;"
                                disabled=move || saving.get()
                                on:click=move |_| on_close.run(())
                            >
                                "Cancel"
                            </button>
                            <button
                                style="padding: 0.5rem 1rem; border-radius: 0.5rem; border: none; background: #0A408A; color: white; cursor: pointer;"
                                disabled=move || saving.get()
                                on:click=submit
                            >
                                {move || if saving.get() { "Saving..." } else { "Save" }}
                            </button>
                        </div>
                    </div>
                </div>
            }
            .into_any()
        }}
    }
}
