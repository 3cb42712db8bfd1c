use contracts::domain::a002_dataset::aggregate::{Dataset, TemplateRequest};
use contracts::domain::common::AggregateId;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use crate::layout::workspace_context::{use_workspace, WorkspaceTab};
use crate::shared::api_utils::{get_json, post_form, post_json};
use crate::system::auth::context::use_auth;

// Brief pause after a successful upload so the status line is visible
// before the workspace jumps to the generation step.
const PROCESSING_PAUSE_MS: u32 = 800;

/// CSV upload and template selection for the currently selected project.
#[component]
pub fn UploadView() -> impl IntoView {
    let workspace = use_workspace();
    let (auth_state, _) = use_auth();

    let (datasets, set_datasets) = signal(Vec::<Dataset>::new());
    let (error, set_error) = signal(None::<String>);
    let (status, set_status) = signal(None::<String>);
    let (busy, set_busy) = signal(false);

    let (name, set_name) = signal(String::new());
    let (description, set_description) = signal(String::new());
    // web_sys::File is not Send + Sync, keep it in local storage
    let picked_file = StoredValue::new_local(None::<web_sys::File>);

    // Reload the dataset list whenever the selected project changes
    Effect::new(move |_| {
        let Some(project_id) = workspace.selected_project_id.get() else {
            set_datasets.set(Vec::new());
            return;
        };
        let Some(access_token) = auth_state.get().access_token else {
            return;
        };

        spawn_local(async move {
            let path = format!("/api/dataset/by-project/{}", project_id);
            match get_json::<Vec<Dataset>>(&path, &access_token).await {
                Ok(list) => set_datasets.set(list),
                Err(e) => set_error.set(Some(e)),
            }
        });
    });

    let finish_with_dataset = move |dataset_id: String| {
        spawn_local(async move {
            set_status.set(Some("Processing dataset...".to_string()));
            TimeoutFuture::new(PROCESSING_PAUSE_MS).await;
            workspace.selected_dataset_id.set(Some(dataset_id));
            workspace.active_tab.set(WorkspaceTab::Generate);
        });
    };

    let on_file_change = move |ev: leptos::ev::Event| {
        set_error.set(None);
        let input = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok());
        let file = input.and_then(|i| i.files()).and_then(|list| list.get(0));

        let Some(file) = file else {
            picked_file.set_value(None);
            return;
        };

        // Only comma-separated text files are accepted
        let is_csv = file.name().to_lowercase().ends_with(".csv") || file.type_() == "text/csv";
        if !is_csv {
            picked_file.set_value(None);
            set_error.set(Some("Please choose a .csv file".to_string()));
            return;
        }

        if name.get_untracked().trim().is_empty() {
            set_name.set(file.name());
        }
        picked_file.set_value(Some(file));
    };

    let on_upload = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let Some(project_id) = workspace.selected_project_id.get_untracked() else {
            return;
        };
        let Some(access_token) = auth_state.get_untracked().access_token else {
            return;
        };
        let Some(file) = picked_file.get_value() else {
            set_error.set(Some("Please choose a .csv file".to_string()));
            return;
        };

        set_busy.set(true);
        set_error.set(None);

        spawn_local(async move {
            let result = upload_dataset(
                &access_token,
                &project_id,
                &name.get_untracked(),
                &description.get_untracked(),
                &file,
            )
            .await;

            match result {
                Ok(dataset) => {
                    let id = dataset.id.as_string();
                    set_datasets.update(|list| list.insert(0, dataset));
                    picked_file.set_value(None);
                    set_name.set(String::new());
                    set_description.set(String::new());
                    finish_with_dataset(id);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_busy.set(false);
        });
    };

    let use_template = move |template: &'static str| {
        let Some(project_id) = workspace.selected_project_id.get_untracked() else {
            return;
        };
        let Some(access_token) = auth_state.get_untracked().access_token else {
            return;
        };

        set_busy.set(true);
        set_error.set(None);

        spawn_local(async move {
            let request = TemplateRequest {
                project_id,
                template: template.to_string(),
            };
            match post_json::<TemplateRequest, Dataset>("/api/dataset/template", &access_token, &request)
                .await
            {
                Ok(dataset) => {
                    let id = dataset.id.as_string();
                    set_datasets.update(|list| list.insert(0, dataset));
                    finish_with_dataset(id);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_busy.set(false);
        });
    };

    view! {
        <div class="upload-view">
            <h2>"Upload Data"</h2>

            <Show
                when=move || workspace.selected_project_id.get().is_some()
                fallback=|| {
                    view! {
                        <div class="empty-state">
                            "Select or create a project first to upload data."
                        </div>
                    }
                }
            >
                {move || {
                    error
                        .get()
                        .map(|msg| view! { <div class="form-error">{msg}</div> })
                }}
                {move || {
                    status
                        .get()
                        .map(|msg| view! { <div class="form-status">{msg}</div> })
                }}

                <form class="create-form" on:submit=on_upload>
                    <label>
                        "CSV file"
                        <input type="file" accept=".csv,text/csv" on:change=on_file_change />
                    </label>
                    <label>
                        "Name"
                        <input
                            type="text"
                            prop:value=name
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Description"
                        <input
                            type="text"
                            prop:value=description
                            on:input=move |ev| set_description.set(event_target_value(&ev))
                        />
                    </label>
                    <button type="submit" disabled=busy>
                        {move || if busy.get() { "Uploading..." } else { "Upload" }}
                    </button>
                </form>

                <div class="template-row">
                    <span>"Or start from a template:"</span>
                    <button class="btn-link" disabled=busy on:click=move |_| use_template("customer")>
                        "Customer records"
                    </button>
                    <button
                        class="btn-link"
                        disabled=busy
                        on:click=move |_| use_template("transactions")
                    >
                        "Transactions"
                    </button>
                </div>

                <h3>"Datasets in this project"</h3>
                {move || {
                    let list = datasets.get();
                    if list.is_empty() {
                        view! { <div class="empty-state">"No datasets yet."</div> }.into_any()
                    } else {
                        view! {
                            <ul class="dataset-list">
                                {list
                                    .into_iter()
                                    .map(|dataset| {
                                        let id = dataset.id.as_string();
                                        let selected_dataset_id = workspace.selected_dataset_id;
                                        view! {
                                            <li class="dataset-row">
                                                <div class="dataset-name">{dataset.name.clone()}</div>
                                                <div class="dataset-meta">
                                                    {dataset.schema.len()}
                                                    " columns · "
                                                    {dataset.row_count}
                                                    " rows · "
                                                    {dataset.status.clone()}
                                                </div>
                                                <button
                                                    class="btn-link"
                                                    on:click=move |_| {
                                                        selected_dataset_id.set(Some(id.clone()));
                                                        workspace.active_tab.set(WorkspaceTab::Generate);
                                                    }
                                                >
                                                    "Generate from this dataset"
                                                </button>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        }
                            .into_any()
                    }
                }}
            </Show>
        </div>
    }
}

async fn upload_dataset(
    access_token: &str,
    project_id: &str,
    name: &str,
    description: &str,
    file: &web_sys::File,
) -> Result<Dataset, String> {
    let form = web_sys::FormData::new().map_err(|e| format!("Failed to build form: {:?}", e))?;
    form.append_with_str("project_id", project_id)
        .map_err(|e| format!("Failed to build form: {:?}", e))?;
    form.append_with_str("name", name)
        .map_err(|e| format!("Failed to build form: {:?}", e))?;
    form.append_with_str("description", description)
        .map_err(|e| format!("Failed to build form: {:?}", e))?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|e| format!("Failed to build form: {:?}", e))?;

    post_form::<Dataset>("/api/dataset/upload", access_token, &form).await
}
