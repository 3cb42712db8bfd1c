use contracts::domain::a001_project::aggregate::{Project, ProjectDto};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::layout::workspace_context::{use_workspace, WorkspaceTab};
use crate::shared::api_utils::{get_json, post_json};
use crate::system::auth::context::use_auth;

/// Project list plus a creation form. Creating or selecting a project
/// moves the workspace on to the upload step.
#[component]
pub fn ProjectsView() -> impl IntoView {
    let workspace = use_workspace();
    let (auth_state, _) = use_auth();

    let (projects, set_projects) = signal(Vec::<Project>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);

    let (name, set_name) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (industry, set_industry) = signal(String::new());
    let (saving, set_saving) = signal(false);

    // Newest first, as returned by the backend
    Effect::new(move |_| {
        let Some(access_token) = auth_state.get().access_token else {
            return;
        };

        spawn_local(async move {
            match get_json::<Vec<Project>>("/api/project", &access_token).await {
                Ok(list) => set_projects.set(list),
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    });

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let Some(access_token) = auth_state.get_untracked().access_token else {
            return;
        };
        if name.get().trim().is_empty() {
            set_error.set(Some("Project name cannot be empty".to_string()));
            return;
        }

        let dto = ProjectDto {
            name: name.get(),
            description: description.get(),
            industry: industry.get(),
        };

        set_saving.set(true);
        set_error.set(None);

        spawn_local(async move {
            match post_json::<ProjectDto, Project>("/api/project", &access_token, &dto).await {
                Ok(created) => {
                    let id = created.id.as_string();
                    set_projects.update(|list| list.insert(0, created));
                    set_name.set(String::new());
                    set_description.set(String::new());
                    set_industry.set(String::new());
                    workspace.selected_project_id.set(Some(id));
                    workspace.active_tab.set(WorkspaceTab::Upload);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="projects-view">
            <h2>"Projects"</h2>

            {move || {
                error
                    .get()
                    .map(|msg| view! { <div class="form-error">{msg}</div> })
            }}

            <form class="create-form" on:submit=on_create>
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
                <label>
                    "Industry"
                    <select on:change=move |ev| set_industry.set(event_target_value(&ev))>
                        <option value="">"Select industry"</option>
                        <option value="finance">"Finance"</option>
                        <option value="healthcare">"Healthcare"</option>
                        <option value="retail">"Retail"</option>
                        <option value="telecom">"Telecom"</option>
                        <option value="other">"Other"</option>
                    </select>
                </label>
                <button type="submit" disabled=saving>
                    {move || if saving.get() { "Creating..." } else { "Create project" }}
                </button>
            </form>

            {move || {
                if loading.get() {
                    view! { <div class="loading">"Loading..."</div> }.into_any()
                } else if projects.get().is_empty() {
                    view! { <div class="empty-state">"No projects yet. Create one above."</div> }
                        .into_any()
                } else {
                    view! {
                        <ul class="project-list">
                            {projects
                                .get()
                                .into_iter()
                                .map(|project| {
                                    let id = project.id.as_string();
                                    let select_id = id.clone();
                                    let selected_project_id = workspace.selected_project_id;
                                    let is_selected = {
                                        let id = id.clone();
                                        move || selected_project_id.get().as_deref() == Some(id.as_str())
                                    };
                                    view! {
                                        <li class="project-row" class:selected=is_selected>
                                            <div class="project-name">{project.name.clone()}</div>
                                            <div class="project-meta">
                                                {project.industry.clone()}
                                                " · "
                                                {project.created_at.format("%Y-%m-%d").to_string()}
                                            </div>
                                            <div class="project-description">
                                                {project.description.clone()}
                                            </div>
                                            <button
                                                class="btn-link"
                                                on:click=move |_| {
                                                    selected_project_id.set(Some(select_id.clone()));
                                                    workspace.active_tab.set(WorkspaceTab::Upload);
                                                }
                                            >
                                                "Select"
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
        </div>
    }
}
