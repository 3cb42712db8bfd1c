use contracts::dashboards::DashboardSummary;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api_utils::get_json;
use crate::system::auth::context::use_auth;

/// Landing view with aggregate counts for the signed-in user.
#[component]
pub fn DashboardView() -> impl IntoView {
    let (auth_state, _) = use_auth();

    let (summary, set_summary) = signal(None::<DashboardSummary>);
    let (error, set_error) = signal(None::<String>);

    Effect::new(move |_| {
        let Some(access_token) = auth_state.get().access_token else {
            return;
        };

        spawn_local(async move {
            match get_json::<DashboardSummary>("/api/d400/summary", &access_token).await {
                Ok(data) => set_summary.set(Some(data)),
                Err(e) => {
                    log::error!("Failed to load dashboard summary: {}", e);
                    set_error.set(Some(e));
                }
            }
        });
    });

    view! {
        <div class="dashboard-view">
            <h2>"Overview"</h2>
            {move || {
                error
                    .get()
                    .map(|msg| view! { <div class="form-error">{msg}</div> })
            }}
            {move || match summary.get() {
                Some(data) => {
                    view! {
                        <div class="stat-cards">
                            <StatCard label="Projects" value=data.projects />
                            <StatCard label="Datasets" value=data.datasets />
                            <StatCard label="Generations" value=data.generations />
                        </div>
                    }
                        .into_any()
                }
                None => view! { <div class="loading">"Loading..."</div> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn StatCard(label: &'static str, value: u64) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-value">{value}</div>
            <div class="stat-label">{label}</div>
        </div>
    }
}
