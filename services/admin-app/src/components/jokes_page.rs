//! Jokes management page
//!
//! Paginated card grid with client-side search, a create/edit dialog, and
//! a confirmed delete. All fetch results go through the list state machine
//! so stale responses never clobber the visible page.

use jokehub_api::models::{Joke, JokePayload};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::delete_dialog::DeleteDialog;
use crate::components::joke_dialog::JokeDialog;
use crate::components::skeleton::SkeletonGrid;
use crate::components::toast::ToastList;
use crate::fetch;
use crate::state::list::{FetchKey, ListView, MutationOutcome, Phase};
use crate::state::toast::ToastQueue;

fn run_fetch(list: RwSignal<ListView<Joke>>, key: FetchKey) {
    spawn_local(async move {
        let result = fetch::fetch_jokes_page(key.page).await;
        list.update(|l| {
            l.resolve_fetch(key, result);
        });
    });
}

fn dispatch(list: RwSignal<ListView<Joke>>, toasts: RwSignal<ToastQueue>, outcome: MutationOutcome) {
    if let Some(toast) = outcome.toast {
        toasts.update(|q| {
            q.push(toast);
        });
    }
    if let Some(key) = outcome.refetch {
        run_fetch(list, key);
    }
}

#[component]
pub fn JokesPage() -> impl IntoView {
    let list = RwSignal::new(ListView::<Joke>::new("joke", fetch::PAGE_LIMIT));
    let toasts = RwSignal::new(ToastQueue::new(4));

    Effect::new(move |mounted: Option<()>| {
        if mounted.is_none() {
            if let Some(key) = list.try_update(|l| l.load_page()) {
                run_fetch(list, key);
            }
        }
    });

    let on_save = Callback::new(move |payload: JokePayload| {
        let started = list.try_update(|l| {
            if !l.begin_save() {
                return None;
            }
            Some(l.editing().map(|j| j.id.clone()))
        });
        let Some(Some(editing_id)) = started else {
            return;
        };
        spawn_local(async move {
            let result = match &editing_id {
                Some(id) => fetch::update_joke(id, &payload).await,
                None => fetch::create_joke(&payload).await,
            };
            if let Some(outcome) = list.try_update(|l| l.finish_save(result)) {
                dispatch(list, toasts, outcome);
            }
        });
    });

    let on_confirm_delete = Callback::new(move |()| {
        let Some(Some(id)) = list.try_update(|l| l.begin_delete()) else {
            return;
        };
        spawn_local(async move {
            let result = fetch::delete_joke(&id).await;
            if let Some(outcome) = list.try_update(|l| l.finish_delete(result)) {
                dispatch(list, toasts, outcome);
            }
        });
    });

    let button_style = "padding: 0.5rem 1rem; border-radius: 0.5rem; border: 1px solid #dee2e6; background: white; cursor: pointer;";

    view! {
        <section>
            <div style="display: flex; align-items: center; justify-content: space-between; margin-bottom: 1rem;">
                <h2 style="margin: 0;">"Jokes"</h2>
                <button
                    style="padding: 0.5rem 1rem; border-radius: 0.5rem; border: none; background: #0A408A; color: white; cursor: pointer;"
                    on:click=move |_| list.update(|l| l.open_create())
                >
                    "Add Joke"
                </button>
            </div>

            <input
                style="width: 100%; max-width: 24rem; padding: 0.6rem; border: 1px solid #dee2e6; border-radius: 0.5rem; margin-bottom: 1.5rem; box-sizing: border-box;"
                placeholder="Search jokes..."
                prop:value=move || list.with(|l| l.search().to_string())
                on:input=move |ev| list.update(|l| l.set_search(event_target_value(&ev)))
            />

            {move || {
                let phase = list.with(|l| l.phase().clone());
                match phase {
                    Phase::Loading => view! { <SkeletonGrid /> }.into_any(),
                    Phase::Error(message) => view! {
                        <div style="padding: 2rem; border-radius: 0.75rem; background: #f8d7da; color: #721c24;">
                            <p style="margin: 0 0 1rem 0;">{format!("Failed to load jokes: {}", message)}</p>
                            <button
                                style=button_style
                                on:click=move |_| {
                                    if let Some(key) = list.try_update(|l| l.load_page()) {
                                        run_fetch(list, key);
                                    }
                                }
                            >
                                "Retry"
                            </button>
                        </div>
                    }
                    .into_any(),
                    Phase::Loaded { .. } => {
                        let jokes = list.with(|l| l.filtered());
                        if jokes.is_empty() {
                            return view! {
                                <p style="color: #6c757d; text-align: center; padding: 3rem 0;">
                                    "No jokes found"
                                </p>
                            }
                            .into_any();
                        }
                        view! {
                            <div style="display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 1.5rem;">
                                {jokes
                                    .into_iter()
                                    .map(|joke| {
                                        let edit_target = joke.clone();
                                        let delete_id = joke.id.clone();
                                        view! {
                                            <div style="display: flex; flex-direction: column; gap: 0.5rem; padding: 1rem; border-radius: 0.75rem; background: white; box-shadow: 0 1px 3px rgba(0,0,0,0.1);">
                                                {joke
                                                    .image_url
                                                    .as_ref()
                                                    .map(|url| view! {
                                                        <img
                                                            src=url.clone()
                                                            style="width: 100%; height: 8rem; object-fit: cover; border-radius: 0.5rem;"
                                                        />
                                                    })}
                                                <p style="margin: 0; font-weight: 600;">{joke.text.clone()}</p>
                                                <p style="margin: 0; color: #6c757d; font-size: 0.9rem;">
                                                    {joke.joke_answer.clone()}
                                                </p>
                                                <div style="display: flex; gap: 0.5rem; margin-top: auto;">
                                                    <button
                                                        style=button_style
                                                        on:click=move |_| {
                                                            list.update(|l| l.open_edit(edit_target.clone()))
                                                        }
                                                    >
                                                        "Edit"
                                                    </button>
                                                    <button
                                                        style="padding: 0.5rem 1rem; border-radius: 0.5rem; border: 1px solid #dc3545; color: #dc3545; background: white; cursor: pointer;"
                                                        on:click=move |_| {
                                                            list.update(|l| l.request_delete(delete_id.clone()))
                                                        }
                                                    >
                                                        "Delete"
                                                    </button>
                                                </div>
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                        .into_any()
                    }
                }
            }}

            <div style="display: flex; align-items: center; justify-content: center; gap: 1rem; margin-top: 1.5rem;">
                <button
                    style=button_style
                    disabled=move || !list.with(|l| l.can_prev())
                    on:click=move |_| {
                        if let Some(key) = list.try_update(|l| l.prev_page()).flatten() {
                            run_fetch(list, key);
                        }
                    }
                >
                    "Previous"
                </button>
                <span style="color: #6c757d; font-size: 0.9rem;">
                    {move || list.with(|l| format!("Page {} of {}", l.page(), l.total_pages()))}
                </span>
                <button
                    style=button_style
                    disabled=move || !list.with(|l| l.can_next())
                    on:click=move |_| {
                        if let Some(key) = list.try_update(|l| l.next_page()).flatten() {
                            run_fetch(list, key);
                        }
                    }
                >
                    "Next"
                </button>
            </div>

            <JokeDialog
                open=Signal::derive(move || list.with(|l| l.dialog_open()))
                editing=Signal::derive(move || list.with(|l| l.editing().cloned()))
                saving=Signal::derive(move || list.with(|l| l.is_saving()))
                on_save=on_save
                on_close=Callback::new(move |()| list.update(|l| l.close_dialog()))
            />
            <DeleteDialog
                open=Signal::derive(move || list.with(|l| l.pending_delete().is_some()))
                deleting=Signal::derive(move || list.with(|l| l.is_deleting()))
                on_confirm=on_confirm_delete
                on_cancel=Callback::new(move |()| list.update(|l| l.cancel_delete()))
            />
            <ToastList toasts=toasts />
        </section>
    }
}
