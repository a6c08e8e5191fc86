use crate::shared::components::page_header::PageHeader;
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::ui::{Badge, Button, Select};
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use contracts::domain::audit::{AuditCategory, AuditLog, AuditOutcome, AuditSeverity};
use contracts::fixtures;
use contracts::shared::filter::{filter_records, FilterCriteria, ALL};
use leptos::prelude::*;

fn category_options() -> Vec<(String, String)> {
    let mut options = vec![(ALL.to_string(), "All Categories".to_string())];
    options.extend(
        AuditCategory::ALL
            .iter()
            .map(|c| (c.key().to_string(), c.label().to_string())),
    );
    options
}

fn severity_options() -> Vec<(String, String)> {
    let mut options = vec![(ALL.to_string(), "All Severities".to_string())];
    options.extend(
        AuditSeverity::ALL
            .iter()
            .map(|s| (s.key().to_string(), s.label().to_string())),
    );
    options
}

fn outcome_options() -> Vec<(String, String)> {
    let mut options = vec![(ALL.to_string(), "All Outcomes".to_string())];
    options.extend(
        AuditOutcome::ALL
            .iter()
            .map(|o| (o.key().to_string(), o.label().to_string())),
    );
    options
}

#[component]
pub fn AuditView() -> impl IntoView {
    let logs = StoredValue::new(fixtures::audit::all());

    let (query, set_query) = signal(String::new());
    let (category, set_category) = signal(ALL.to_string());
    let (severity, set_severity) = signal(ALL.to_string());
    let (outcome, set_outcome) = signal(ALL.to_string());

    let filtered = Memo::new(move |_| {
        let criteria = FilterCriteria::new()
            .with_query(query.get())
            .with_field("category", category.get())
            .with_field("severity", severity.get())
            .with_field("outcome", outcome.get());
        logs.with_value(|list| filter_records(list, &criteria))
    });

    view! {
        <div class="page">
            <PageHeader title="Audit Trail" subtitle="Every recorded user and system action">
                <Button variant="secondary" on_click=Callback::new(move |_| {
                    // Export needs a file sink; log the intent only.
                    let count = filtered.get_untracked().len();
                    log::info!("audit export requested for {} entries", count);
                })>
                    "Export"
                </Button>
            </PageHeader>

            <div class="list-toolbar">
                <SearchInput
                    value=query
                    on_change=Callback::new(move |v| set_query.set(v))
                    placeholder="Search by action, user, details..."
                />
                <Select
                    value=category
                    options=category_options()
                    on_change=Callback::new(move |v| set_category.set(v))
                />
                <Select
                    value=severity
                    options=severity_options()
                    on_change=Callback::new(move |v| set_severity.set(v))
                />
                <Select
                    value=outcome
                    options=outcome_options()
                    on_change=Callback::new(move |v| set_outcome.set(v))
                />
            </div>

            <div class="list-count">
                {move || {
                    let shown = filtered.get().len();
                    let total = logs.with_value(|list| list.len());
                    format!("Showing {} of {} entries", shown, total)
                }}
            </div>

            <ul class="audit-list">
                <For
                    each=move || filtered.get()
                    key=|entry: &AuditLog| entry.id.clone()
                    children=move |entry| {
                        view! {
                            <li class="audit-list__item">
                                <span class="audit-list__icon">{icon(entry.category.icon())}</span>
                                <div class="audit-list__body">
                                    <div class="audit-list__action">
                                        {entry.action.clone()}
                                        <span class="audit-list__outcome">
                                            {icon(entry.outcome.icon())}
                                        </span>
                                    </div>
                                    <div class="audit-list__details">{entry.details.clone()}</div>
                                    <div class="audit-list__meta">
                                        {format!("{} ({})", entry.user_name, entry.user_role)}
                                        " · "
                                        {format!("{}: {}", entry.resource, entry.resource_id)}
                                        " · "
                                        {entry.ip_address.clone()}
                                    </div>
                                </div>
                                <div class="audit-list__side">
                                    <Badge variant=entry.severity.badge_variant()>
                                        {entry.severity.label()}
                                    </Badge>
                                    <span class="audit-list__time">
                                        {format_datetime(&entry.timestamp)}
                                    </span>
                                </div>
                            </li>
                        }
                    }
                />
            </ul>

            <Show when=move || filtered.get().is_empty()>
                <div class="empty-state">"No audit entries match the current filters."</div>
            </Show>
        </div>
    }
}
