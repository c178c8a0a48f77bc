//! Overview/statistics page
//!
//! Aggregate cards and charts for a selected reporting range. Each range
//! change issues one fetch; the arriving snapshot replaces the previous
//! one wholesale.

use jokehub_api::models::Range;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::charts::{AreaChart, BarChart, DonutLegend};
use crate::components::skeleton::SkeletonOverview;
use crate::components::stat_card::StatCard;
use crate::fetch;
use crate::state::overview::{OverviewFetch, OverviewPhase, OverviewView};

fn run_fetch(view: RwSignal<OverviewView>, fetch_key: OverviewFetch) {
    spawn_local(async move {
        let result = fetch::fetch_overview(fetch_key.range).await;
        view.update(|v| {
            v.resolve(fetch_key, result);
        });
    });
}

#[component]
pub fn OverviewPage() -> impl IntoView {
    let overview = RwSignal::new(OverviewView::new(Range::Daily));

    Effect::new(move |mounted: Option<()>| {
        if mounted.is_none() {
            if let Some(key) = overview.try_update(|v| v.start()) {
                run_fetch(overview, key);
            }
        }
    });

    view! {
        <section>
            <div style="display: flex; align-items: center; justify-content: space-between; margin-bottom: 1.5rem;">
                <h2 style="margin: 0;">"Overview"</h2>
                <select
                    style="padding: 0.5rem 1rem; border-radius: 0.5rem; border: 1px solid #dee2e6; background: white; cursor: pointer;"
                    on:change=move |ev| {
                        let selected = event_target_value(&ev);
                        let Some(range) = Range::ALL
                            .iter()
                            .copied()
                            .find(|r| r.as_str() == selected)
                        else {
                            return;
                        };
                        if let Some(key) = overview.try_update(|v| v.set_range(range)).flatten() {
                            run_fetch(overview, key);
                        }
                    }
                >
                    {Range::ALL
                        .iter()
                        .copied()
                        .map(|range| {
                            view! {
                                <option
                                    value=range.as_str()
                                    selected=move || overview.with(|v| v.range()) == range
                                >
                                    {range.label()}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()}
                </select>
            </div>

            {move || {
                let phase = overview.with(|v| v.phase().clone());
                match phase {
                    OverviewPhase::Loading => view! { <SkeletonOverview /> }.into_any(),
                    OverviewPhase::Error(message) => view! {
                        <div style="padding: 2rem; border-radius: 0.75rem; background: #f8d7da; color: #721c24;">
                            <p style="margin: 0 0 1rem 0;">
                                {format!("Failed to load overview: {}", message)}
                            </p>
                            <button
                                style="padding: 0.5rem 1rem; border-radius: 0.5rem; border: 1px solid #dee2e6; background: white; cursor: pointer;"
                                on:click=move |_| {
                                    if let Some(key) = overview.try_update(|v| v.retry()) {
                                        run_fetch(overview, key);
                                    }
                                }
                            >
                                "Try again"
                            </button>
                        </div>
                    }
                    .into_any(),
                    OverviewPhase::Loaded(snapshot) => view! {
                        <div style="display: flex; flex-direction: column; gap: 1.5rem;">
                            <div style="display: grid; grid-template-columns: repeat(auto-fit, minmax(180px, 1fr)); gap: 1rem;">
                                <StatCard
                                    label="Total Users"
                                    value=snapshot.cards.total_users.to_string()
                                    accent="#FFD66B"
                                />
                                <StatCard
                                    label="Total Quizzes"
                                    value=snapshot.cards.total_quizzes.to_string()
                                    accent="#A5C2FF"
                                />
                                <StatCard
                                    label="Active Subscriptions"
                                    value=snapshot.cards.active_subscriptions.to_string()
                                    accent="#FFD66B"
                                />
                                <StatCard
                                    label="Monthly Revenue"
                                    value=format!("${}", snapshot.cards.total_revenue_estimate_monthly)
                                    accent="#A5C2FF"
                                />
                            </div>

                            <div style="display: grid; grid-template-columns: 2fr 1fr; gap: 1.5rem;">
                                <div style="padding: 1.5rem; border-radius: 0.75rem; background: white; box-shadow: 0 1px 3px rgba(0,0,0,0.1);">
                                    <h3 style="margin: 0 0 1rem 0;">"Quiz Attendance"</h3>
                                    <BarChart series=snapshot.quiz_attendance.by_weekday.clone() />
                                </div>
                                <div style="padding: 1.5rem; border-radius: 0.75rem; background: white; box-shadow: 0 1px 3px rgba(0,0,0,0.1);">
                                    <h3 style="margin: 0 0 1rem 0;">"Survey Subscription"</h3>
                                    <DonutLegend
                                        free=snapshot.survey_subscription.free_users
                                        premium=snapshot.survey_subscription.premium_users
                                    />
                                </div>
                            </div>

                            <div style="padding: 1.5rem; border-radius: 0.75rem; background: white; box-shadow: 0 1px 3px rgba(0,0,0,0.1);">
                                <h3 style="margin: 0 0 1rem 0;">"User Joining Overview"</h3>
                                <AreaChart series=snapshot.user_joining_overview.by_month.clone() />
                            </div>
                        </div>
                    }
                    .into_any(),
                }
            }}
        </section>
    }
}
