use crate::layout::context::AppShellContext;
use crate::layout::Shell;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppShellContext store to the whole app via context.
    let ctx = AppShellContext::new();
    provide_context(ctx);

    // Restore the active view from the URL and keep the two in sync.
    ctx.init_url_integration();

    view! {
        <Shell />
    }
}
