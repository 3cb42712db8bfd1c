use contracts::domain::a003_generation::metrics::GenerationWithMetrics;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::report_text::{render_report_text, report_filename};
use crate::shared::api_utils::get_json;
use crate::shared::export::download_text_file;
use crate::system::auth::context::use_auth;

/// Past generation runs with metrics detail and report download.
#[component]
pub fn ResultsView() -> impl IntoView {
    let (auth_state, _) = use_auth();

    let (items, set_items) = signal(Vec::<GenerationWithMetrics>::new());
    let (selected_id, set_selected_id) = signal(None::<String>);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);

    Effect::new(move |_| {
        let Some(access_token) = auth_state.get().access_token else {
            return;
        };

        spawn_local(async move {
            match get_json::<Vec<GenerationWithMetrics>>("/api/generation", &access_token).await {
                Ok(list) => set_items.set(list),
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    });

    let selected = move || {
        let id = selected_id.get()?;
        items
            .get()
            .into_iter()
            .find(|item| item.generation.id.as_string() == id)
    };

    view! {
        <div class="results-view">
            <h2>"Results"</h2>

            {move || {
                error
                    .get()
                    .map(|msg| view! { <div class="form-error">{msg}</div> })
            }}

            {move || {
                if loading.get() {
                    view! { <div class="loading">"Loading..."</div> }.into_any()
                } else if items.get().is_empty() {
                    view! {
                        <div class="empty-state">"No generation runs yet."</div>
                    }
                        .into_any()
                } else {
                    view! {
                        <ul class="generation-list">
                            {items
                                .get()
                                .into_iter()
                                .map(|item| {
                                    let id = item.generation.id.as_string();
                                    let row_id = id.clone();
                                    let is_selected = {
                                        let id = id.clone();
                                        move || selected_id.get().as_deref() == Some(id.as_str())
                                    };
                                    view! {
                                        <li
                                            class="generation-row"
                                            class:selected=is_selected
                                            on:click=move |_| set_selected_id.set(Some(row_id.clone()))
                                        >
                                            <div class="generation-title">
                                                {item.generation.model_type.display_name()}
                                                " · "
                                                {item.dataset_name.clone()}
                                            </div>
                                            <div class="generation-meta">
                                                {item.generation.row_count}
                                                " rows · "
                                                {item.generation.status.clone()}
                                                " · "
                                                {item
                                                    .generation
                                                    .completed_at
                                                    .format("%Y-%m-%d %H:%M")
                                                    .to_string()}
                                            </div>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    }
                        .into_any()
                }
            }}

            {move || selected().map(|item| view! { <GenerationDetail item=item /> })}
        </div>
    }
}

#[component]
fn GenerationDetail(item: GenerationWithMetrics) -> impl IntoView {
    let (download_error, set_download_error) = signal(None::<String>);

    let download_item = item.clone();
    let on_download = move |_| {
        let text = render_report_text(&download_item);
        let filename = report_filename(&download_item.generation.id.as_string());
        if let Err(e) = download_text_file(&text, &filename) {
            log::error!("Report download failed: {}", e);
            set_download_error.set(Some(e));
        }
    };

    view! {
        <div class="generation-detail">
            <h3>"Run detail"</h3>

            {move || {
                download_error
                    .get()
                    .map(|msg| view! { <div class="form-error">{msg}</div> })
            }}

            {item
                .privacy
                .as_ref()
                .map(|privacy| {
                    view! {
                        <div class="metric-block">
                            <h4>"Privacy"</h4>
                            <div>"Risk score: " {format!("{:.4}", privacy.privacy_risk_score)}</div>
                            <div>
                                "Leakage probability: "
                                {format!("{:.4}", privacy.leakage_probability)}
                            </div>
                            <div>"Epsilon used: " {privacy.epsilon_used}</div>
                            <div>"k-anonymity achieved: " {privacy.k_anonymity_achieved}</div>
                        </div>
                    }
                })}

            {item
                .utility
                .as_ref()
                .map(|utility| {
                    view! {
                        <div class="metric-block">
                            <h4>"Utility"</h4>
                            <div>"Fidelity: " {format!("{:.4}", utility.fidelity_score)}</div>
                            <div>"Similarity: " {format!("{:.4}", utility.similarity_score)}</div>
                            <div>
                                "Correlation preservation: "
                                {format!("{:.4}", utility.correlation_preservation)}
                            </div>
                            <div>
                                "Distribution similarity: "
                                {format!("{:.4}", utility.distribution_similarity)}
                            </div>
                            <div>"ML efficacy: " {format!("{:.4}", utility.ml_efficacy_score)}</div>
                        </div>
                    }
                })}

            {item
                .report
                .as_ref()
                .map(|report| {
                    view! {
                        <div class="metric-block">
                            <h4>"Compliance"</h4>
                            <div>"Status: " {report.compliance_status.clone()}</div>
                            <div>{report.privacy_budget.clone()}</div>
                            <div>{report.anonymity_guarantee.clone()}</div>
                            <div>"Recommendation: " {report.recommendation.clone()}</div>
                            <div>
                                "Valid until: " {report.valid_until.format("%Y-%m-%d").to_string()}
                            </div>
                        </div>
                    }
                })}

            <button on:click=on_download>"Download report"</button>
        </div>
    }
}
