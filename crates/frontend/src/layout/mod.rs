pub mod workspace_context;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::dashboards::DashboardView;
use crate::domain::a001_project::ui::ProjectsView;
use crate::domain::a002_dataset::ui::UploadView;
use crate::domain::a003_generation::ui::generate::GenerateView;
use crate::domain::a003_generation::ui::results::ResultsView;
use crate::system::auth::context::{do_logout, use_auth};
use workspace_context::{use_workspace, WorkspaceTab};

/// Application shell: header, tab bar and the active view.
#[component]
pub fn Shell() -> impl IntoView {
    let workspace = use_workspace();
    let (auth_state, set_auth_state) = use_auth();

    let user_email = move || {
        auth_state
            .get()
            .user_info
            .map(|u| u.email)
            .unwrap_or_default()
    };

    let on_sign_out = move |_| {
        spawn_local(async move {
            let _ = do_logout(set_auth_state).await;
        });
    };

    view! {
        <div class="app-shell">
            <header class="app-header">
                <h1>"Synthetic Data Studio"</h1>
                <div class="header-user">
                    <span class="user-email">{user_email}</span>
                    <button class="btn-link" on:click=on_sign_out>"Sign out"</button>
                </div>
            </header>
            <nav class="tab-bar">
                {WorkspaceTab::ALL
                    .into_iter()
                    .map(|tab| {
                        let active_tab = workspace.active_tab;
                        view! {
                            <button
                                class="tab"
                                class:active=move || active_tab.get() == tab
                                on:click=move |_| active_tab.set(tab)
                            >
                                {tab.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
            <main class="app-content">
                {move || match workspace.active_tab.get() {
                    WorkspaceTab::Dashboard => view! { <DashboardView /> }.into_any(),
                    WorkspaceTab::Projects => view! { <ProjectsView /> }.into_any(),
                    WorkspaceTab::Upload => view! { <UploadView /> }.into_any(),
                    WorkspaceTab::Generate => view! { <GenerateView /> }.into_any(),
                    WorkspaceTab::Results => view! { <ResultsView /> }.into_any(),
                }}
            </main>
        </div>
    }
}
