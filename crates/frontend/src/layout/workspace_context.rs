use leptos::prelude::*;

/// The five workspace views. The shell renders exactly one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkspaceTab {
    Dashboard,
    Projects,
    Upload,
    Generate,
    Results,
}

impl WorkspaceTab {
    pub const ALL: [WorkspaceTab; 5] = [
        WorkspaceTab::Dashboard,
        WorkspaceTab::Projects,
        WorkspaceTab::Upload,
        WorkspaceTab::Generate,
        WorkspaceTab::Results,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            WorkspaceTab::Dashboard => "Dashboard",
            WorkspaceTab::Projects => "Projects",
            WorkspaceTab::Upload => "Upload Data",
            WorkspaceTab::Generate => "Generate",
            WorkspaceTab::Results => "Results",
        }
    }
}

/// Cross-view selection state shared through the component tree.
///
/// Views that depend on a selection (upload needs a project, generate
/// needs a dataset) read these signals and render an empty state when
/// nothing is selected.
#[derive(Clone, Copy)]
pub struct WorkspaceContext {
    pub active_tab: RwSignal<WorkspaceTab>,
    pub selected_project_id: RwSignal<Option<String>>,
    pub selected_dataset_id: RwSignal<Option<String>>,
}

impl WorkspaceContext {
    pub fn new() -> Self {
        Self {
            active_tab: RwSignal::new(WorkspaceTab::Dashboard),
            selected_project_id: RwSignal::new(None),
            selected_dataset_id: RwSignal::new(None),
        }
    }
}

impl Default for WorkspaceContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to access the workspace context
pub fn use_workspace() -> WorkspaceContext {
    use_context::<WorkspaceContext>().expect("WorkspaceContext not found in component tree")
}
