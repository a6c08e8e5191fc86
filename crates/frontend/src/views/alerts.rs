use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::ui::{Badge, Button};
use crate::shared::date_utils::format_date;
use contracts::domain::alert::{Alert, AlertStatus, Severity};
use contracts::fixtures;
use leptos::prelude::*;

/// Open findings across all suppliers. Status transitions happen in local
/// state only; reloading the page restores the fixture data.
#[component]
pub fn AlertsView() -> impl IntoView {
    let (alerts, set_alerts) = signal(fixtures::alerts::all());

    let count_by_severity = move |severity: Severity| {
        alerts.with(|list| {
            list.iter()
                .filter(|a| a.severity == severity && a.status != AlertStatus::Resolved)
                .count()
        })
    };

    let advance = move |id: String| {
        set_alerts.update(|list| {
            if let Some(alert) = list.iter_mut().find(|a| a.id == id) {
                alert.status = match alert.status {
                    AlertStatus::Open => AlertStatus::InProgress,
                    AlertStatus::InProgress => AlertStatus::Resolved,
                    AlertStatus::Resolved => AlertStatus::Resolved,
                };
                log::info!("alert {} moved to {}", alert.id, alert.status.label());
            }
        });
    };

    view! {
        <div class="page">
            <PageHeader title="Alerts" subtitle="Open compliance and risk findings">
                {()}
            </PageHeader>

            <div class="stat-grid">
                <StatCard
                    label="Critical".to_string()
                    icon_name="warning".to_string()
                    value=Signal::derive(move || count_by_severity(Severity::Critical).to_string())
                    variant="error"
                />
                <StatCard
                    label="High".to_string()
                    icon_name="warning".to_string()
                    value=Signal::derive(move || count_by_severity(Severity::High).to_string())
                    variant="warning"
                />
                <StatCard
                    label="Medium".to_string()
                    icon_name="clock".to_string()
                    value=Signal::derive(move || count_by_severity(Severity::Medium).to_string())
                />
                <StatCard
                    label="Low".to_string()
                    icon_name="check".to_string()
                    value=Signal::derive(move || count_by_severity(Severity::Low).to_string())
                    variant="success"
                />
            </div>

            <ul class="alert-list">
                <For
                    each=move || alerts.get()
                    key=|alert: &Alert| (alert.id.clone(), alert.status)
                    children=move |alert| {
                        let id = alert.id.clone();
                        let next_label = match alert.status {
                            AlertStatus::Open => Some("Start"),
                            AlertStatus::InProgress => Some("Resolve"),
                            AlertStatus::Resolved => None,
                        };
                        view! {
                            <li class="alert-list__item">
                                <div class="alert-list__main">
                                    <div class="alert-list__title">{alert.title.clone()}</div>
                                    <div class="alert-list__description">
                                        {alert.description.clone()}
                                    </div>
                                    <div class="alert-list__meta">
                                        <span>{alert.alert_type.label()}</span>
                                        <span>{format_date(&alert.created_date)}</span>
                                        {alert
                                            .assigned_to
                                            .clone()
                                            .map(|who| view! { <span>{format!("Assigned: {}", who)}</span> })}
                                    </div>
                                </div>
                                <div class="alert-list__side">
                                    <Badge variant=alert.severity.badge_variant()>
                                        {alert.severity.label()}
                                    </Badge>
                                    <Badge variant=alert.status.badge_variant()>
                                        {alert.status.label()}
                                    </Badge>
                                    {next_label
                                        .map(|label| {
                                            view! {
                                                <Button
                                                    size="sm"
                                                    variant="secondary"
                                                    on_click=Callback::new(move |_| advance(id.clone()))
                                                >
                                                    {label}
                                                </Button>
                                            }
                                        })}
                                </div>
                            </li>
                        }
                    }
                />
            </ul>
        </div>
    }
}
