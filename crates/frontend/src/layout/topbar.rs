use crate::layout::context::{AppShellContext, ViewKey};
use crate::shared::icons::icon;
use contracts::domain::notification::NotificationStatus;
use contracts::fixtures;
use leptos::prelude::*;

#[component]
pub fn TopBar() -> impl IntoView {
    let ctx = use_context::<AppShellContext>().expect("AppShellContext context not found");

    // Fixture data is static, so the unread count never changes at runtime.
    let unread = fixtures::notifications::all()
        .iter()
        .filter(|n| {
            matches!(
                n.status,
                NotificationStatus::Unread | NotificationStatus::Pending
            )
        })
        .count();

    view! {
        <header class="topbar">
            <button
                class="topbar__toggle"
                aria-label="Toggle navigation"
                on:click=move |_| ctx.toggle_sidebar()
            >
                {icon("menu")}
            </button>
            <div class="topbar__brand">
                {icon("shield")}
                <span class="topbar__title">"Supplier Compliance"</span>
            </div>
            <div class="topbar__actions">
                <button
                    class="topbar__bell"
                    aria-label="Notifications"
                    on:click=move |_| ctx.activate(ViewKey::Notifications)
                >
                    {icon("bell")}
                    <Show when=move || (unread > 0)>
                        <span class="topbar__bell-count">{unread}</span>
                    </Show>
                </button>
            </div>
        </header>
    }
}
