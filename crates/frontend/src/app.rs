use leptos::prelude::*;

use crate::layout::workspace_context::WorkspaceContext;
use crate::layout::Shell;
use crate::system::auth::context::AuthProvider;
use crate::system::auth::guard::RequireAuth;

#[component]
pub fn App() -> impl IntoView {
    // Selected project/dataset and the active tab are threaded through
    // this context instead of ambient globals.
    provide_context(WorkspaceContext::new());

    view! {
        <AuthProvider>
            <RequireAuth>
                <Shell />
            </RequireAuth>
        </AuthProvider>
    }
}
