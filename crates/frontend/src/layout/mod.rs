pub mod context;
pub mod sidebar;
pub mod topbar;

use context::{AppShellContext, ViewKey};
use leptos::prelude::*;
use sidebar::Sidebar;
use topbar::TopBar;

use crate::views;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |                 TopBar                    |
/// +------------------------------------------+
/// |  Sidebar  |          Content             |
/// +------------------------------------------+
/// ```
///
/// The content pane renders exactly one view, picked by the active
/// [`ViewKey`]. Every view keeps its own local state; switching views
/// drops it unless the view stashed it in `form_states`.
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_context::<AppShellContext>().expect("AppShellContext context not found");

    let content = move || match ctx.active.get() {
        ViewKey::Dashboard => view! { <views::dashboard::DashboardView /> }.into_any(),
        ViewKey::Suppliers => view! { <views::suppliers::SuppliersView /> }.into_any(),
        ViewKey::Alerts => view! { <views::alerts::AlertsView /> }.into_any(),
        ViewKey::Compliance => view! { <views::compliance::ComplianceView /> }.into_any(),
        ViewKey::Documents => view! { <views::documents::DocumentsView /> }.into_any(),
        ViewKey::Workflows => view! { <views::workflows::WorkflowsView /> }.into_any(),
        ViewKey::Search => view! { <views::search::SearchView /> }.into_any(),
        ViewKey::Audit => view! { <views::audit::AuditView /> }.into_any(),
        ViewKey::Notifications => view! { <views::notifications::NotificationsView /> }.into_any(),
        ViewKey::Reports => view! { <views::reports::ReportsView /> }.into_any(),
        ViewKey::Users => view! { <views::users::UsersView /> }.into_any(),
        ViewKey::Analytics => view! { <views::analytics::AnalyticsView /> }.into_any(),
        ViewKey::Settings => view! { <views::settings::SettingsView /> }.into_any(),
    };

    view! {
        <div class="app-layout">
            <TopBar />
            <div class="app-body">
                <Sidebar />
                <main class="app-main">{content}</main>
            </div>
        </div>
    }
}
