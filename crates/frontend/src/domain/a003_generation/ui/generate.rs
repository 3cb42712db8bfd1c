use contracts::domain::a003_generation::aggregate::{GenerationRequest, ModelType};
use contracts::domain::a003_generation::metrics::GenerationWithMetrics;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::layout::workspace_context::{use_workspace, WorkspaceTab};
use crate::shared::api_utils::post_json;
use crate::system::auth::context::use_auth;

/// Generation parameter form for the currently selected dataset.
#[component]
pub fn GenerateView() -> impl IntoView {
    let workspace = use_workspace();
    let (auth_state, _) = use_auth();

    let (model_type, set_model_type) = signal(ModelType::Ctgan);
    let (row_count, set_row_count) = signal("1000".to_string());
    let (epsilon, set_epsilon) = signal("1.0".to_string());
    let (k_anonymity, set_k_anonymity) = signal("5".to_string());
    let (error, set_error) = signal(None::<String>);
    let (busy, set_busy) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let Some(dataset_id) = workspace.selected_dataset_id.get_untracked() else {
            return;
        };
        let Some(access_token) = auth_state.get_untracked().access_token else {
            return;
        };

        let request = match build_request(
            dataset_id,
            model_type.get_untracked(),
            &row_count.get_untracked(),
            &epsilon.get_untracked(),
            &k_anonymity.get_untracked(),
        ) {
            Ok(request) => request,
            Err(e) => {
                set_error.set(Some(e));
                return;
            }
        };

        set_busy.set(true);
        set_error.set(None);

        spawn_local(async move {
            match post_json::<GenerationRequest, GenerationWithMetrics>(
                "/api/generation",
                &access_token,
                &request,
            )
            .await
            {
                Ok(_) => {
                    workspace.active_tab.set(WorkspaceTab::Results);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_busy.set(false);
        });
    };

    view! {
        <div class="generate-view">
            <h2>"Generate Synthetic Data"</h2>

            <Show
                when=move || workspace.selected_dataset_id.get().is_some()
                fallback=|| {
                    view! {
                        <div class="empty-state">
                            "Upload or pick a dataset first to configure a generation run."
                        </div>
                    }
                }
            >
                {move || {
                    error
                        .get()
                        .map(|msg| view! { <div class="form-error">{msg}</div> })
                }}

                <form class="create-form" on:submit=on_submit>
                    <label>
                        "Model"
                        <select on:change=move |ev| {
                            if let Ok(parsed) = ModelType::parse(&event_target_value(&ev)) {
                                set_model_type.set(parsed);
                            }
                        }>
                            <option value="ctgan">{ModelType::Ctgan.display_name()}</option>
                            <option value="tvae">{ModelType::Tvae.display_name()}</option>
                            <option value="gaussian_copula">
                                {ModelType::GaussianCopula.display_name()}
                            </option>
                        </select>
                    </label>
                    <label>
                        "Rows to generate (min 100)"
                        <input
                            type="number"
                            min="100"
                            prop:value=row_count
                            on:input=move |ev| set_row_count.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Privacy budget ε (0.1 - 10)"
                        <input
                            type="number"
                            min="0.1"
                            max="10"
                            step="0.1"
                            prop:value=epsilon
                            on:input=move |ev| set_epsilon.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "k-anonymity (2 - 20)"
                        <input
                            type="number"
                            min="2"
                            max="20"
                            prop:value=k_anonymity
                            on:input=move |ev| set_k_anonymity.set(event_target_value(&ev))
                        />
                    </label>
                    <button type="submit" disabled=busy>
                        {move || if busy.get() { "Generating..." } else { "Start generation" }}
                    </button>
                </form>
            </Show>
        </div>
    }
}

fn build_request(
    dataset_id: String,
    model_type: ModelType,
    row_count: &str,
    epsilon: &str,
    k_anonymity: &str,
) -> Result<GenerationRequest, String> {
    let row_count: i64 = row_count
        .trim()
        .parse()
        .map_err(|_| "Row count must be a whole number".to_string())?;
    let epsilon: f64 = epsilon
        .trim()
        .parse()
        .map_err(|_| "Epsilon must be a number".to_string())?;
    let k_anonymity: i64 = k_anonymity
        .trim()
        .parse()
        .map_err(|_| "k-anonymity must be a whole number".to_string())?;

    let request = GenerationRequest {
        dataset_id,
        model_type,
        row_count,
        epsilon,
        k_anonymity,
    };
    request.params().validate()?;
    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_request_parses_form_values() {
        let request = build_request("ds-1".into(), ModelType::Tvae, " 1000 ", "1.0", "5");
        assert!(request.is_ok());
        let request = request.unwrap();
        assert_eq!(request.row_count, 1000);
        assert_eq!(request.k_anonymity, 5);
    }

    #[test]
    fn test_build_request_rejects_bad_input() {
        assert!(build_request("ds-1".into(), ModelType::Ctgan, "abc", "1.0", "5").is_err());
        assert!(build_request("ds-1".into(), ModelType::Ctgan, "99", "1.0", "5").is_err());
        assert!(build_request("ds-1".into(), ModelType::Ctgan, "100", "11", "5").is_err());
    }
}
