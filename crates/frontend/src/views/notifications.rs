use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{Badge, Button, Select};
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use contracts::domain::notification::{
    Notification, NotificationKind, NotificationStatus, Priority,
};
use contracts::fixtures;
use contracts::shared::filter::{filter_records, FilterCriteria, ALL};
use leptos::prelude::*;

fn kind_options() -> Vec<(String, String)> {
    let mut options = vec![(ALL.to_string(), "All Types".to_string())];
    options.extend(
        NotificationKind::ALL
            .iter()
            .map(|k| (k.key().to_string(), k.label().to_string())),
    );
    options
}

fn status_options() -> Vec<(String, String)> {
    let mut options = vec![(ALL.to_string(), "All Statuses".to_string())];
    options.extend(
        NotificationStatus::ALL
            .iter()
            .map(|s| (s.key().to_string(), s.label().to_string())),
    );
    options
}

fn priority_options() -> Vec<(String, String)> {
    let mut options = vec![(ALL.to_string(), "All Priorities".to_string())];
    options.extend(
        Priority::ALL
            .iter()
            .map(|p| (p.key().to_string(), p.label().to_string())),
    );
    options
}

/// Outbound notification log plus the reusable templates. Narrowing is by
/// dropdowns only; this view has no free-text search.
#[component]
pub fn NotificationsView() -> impl IntoView {
    let (notifications, set_notifications) = signal(fixtures::notifications::all());
    let templates = StoredValue::new(fixtures::notifications::templates());
    let (show_templates, set_show_templates) = signal(false);

    let (kind, set_kind) = signal(ALL.to_string());
    let (status, set_status) = signal(ALL.to_string());
    let (priority, set_priority) = signal(ALL.to_string());

    let filtered = Memo::new(move |_| {
        let criteria = FilterCriteria::new()
            .with_field("type", kind.get())
            .with_field("status", status.get())
            .with_field("priority", priority.get());
        notifications.with(|list| filter_records(list, &criteria))
    });

    let resend = move |id: String| {
        set_notifications.update(|list| {
            if let Some(n) = list.iter_mut().find(|n| n.id == id) {
                n.status = NotificationStatus::Pending;
                log::info!("notification {} queued for resend", n.id);
            }
        });
    };

    view! {
        <div class="page">
            <PageHeader title="Notifications" subtitle="Outbound messages and templates">
                <Button
                    variant="secondary"
                    on_click=Callback::new(move |_| set_show_templates.update(|v| *v = !*v))
                >
                    {move || if show_templates.get() { "Hide Templates" } else { "Templates" }}
                </Button>
            </PageHeader>

            <Show when=move || show_templates.get()>
                <section class="panel">
                    <h2 class="panel__title">"Message Templates"</h2>
                    <ul class="template-list">
                        {templates
                            .with_value(|list| list.clone())
                            .into_iter()
                            .map(|template| {
                                view! {
                                    <li class="template-list__item">
                                        <div class="template-list__name">{template.name.clone()}</div>
                                        <div class="template-list__subject">
                                            {template.subject.clone()}
                                        </div>
                                        <div class="template-list__meta">
                                            {template.category.clone()}
                                            " · variables: "
                                            {template.variables.join(", ")}
                                        </div>
                                        <div class="template-list__channels">
                                            {template
                                                .channels
                                                .iter()
                                                .map(|channel| icon(channel.icon()))
                                                .collect_view()}
                                        </div>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </section>
            </Show>

            <div class="list-toolbar">
                <Select
                    value=kind
                    options=kind_options()
                    on_change=Callback::new(move |v| set_kind.set(v))
                />
                <Select
                    value=status
                    options=status_options()
                    on_change=Callback::new(move |v| set_status.set(v))
                />
                <Select
                    value=priority
                    options=priority_options()
                    on_change=Callback::new(move |v| set_priority.set(v))
                />
            </div>

            <div class="list-count">
                {move || {
                    let shown = filtered.get().len();
                    let total = notifications.with(|list| list.len());
                    format!("Showing {} of {} notifications", shown, total)
                }}
            </div>

            <ul class="notification-list">
                <For
                    each=move || filtered.get()
                    key=|n: &Notification| (n.id.clone(), n.status)
                    children=move |n| {
                        let id = n.id.clone();
                        let failed = n.status == NotificationStatus::Failed;
                        view! {
                            <li class="notification-list__item">
                                <div class="notification-list__body">
                                    <div class="notification-list__title">{n.title.clone()}</div>
                                    <div class="notification-list__message">{n.message.clone()}</div>
                                    <div class="notification-list__meta">
                                        {format!("To: {}", n.recipient)}
                                        " · "
                                        {format_datetime(&n.created_at)}
                                        <span class="notification-list__channels">
                                            {n
                                                .channels
                                                .iter()
                                                .map(|channel| icon(channel.icon()))
                                                .collect_view()}
                                        </span>
                                    </div>
                                </div>
                                <div class="notification-list__side">
                                    <Badge variant=n.kind.badge_variant()>{n.kind.label()}</Badge>
                                    <Badge variant=n.priority.badge_variant()>
                                        {n.priority.label()}
                                    </Badge>
                                    <Badge variant=n.status.badge_variant()>
                                        {n.status.label()}
                                    </Badge>
                                    <Show when=move || failed>
                                        <Button
                                            size="sm"
                                            variant="secondary"
                                            on_click=Callback::new({
                                                let id = id.clone();
                                                move |_| resend(id.clone())
                                            })
                                        >
                                            "Resend"
                                        </Button>
                                    </Show>
                                </div>
                            </li>
                        }
                    }
                />
            </ul>

            <Show when=move || filtered.get().is_empty()>
                <div class="empty-state">"No notifications match the current filters."</div>
            </Show>
        </div>
    }
}
