use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::ui::{Badge, Button};
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use contracts::domain::alert::AlertStatus;
use contracts::domain::metrics::DashboardMetrics;
use contracts::fixtures;
use leptos::prelude::*;

/// Landing view: headline metrics, KPI trends and the freshest open alerts.
///
/// A background tick nudges the average compliance score every few seconds
/// to imitate a live feed; everything else stays static.
#[component]
pub fn DashboardView() -> impl IntoView {
    let (metrics, set_metrics) = signal::<DashboardMetrics>(fixtures::metrics::dashboard());
    let (live, set_live) = signal(true);

    wasm_bindgen_futures::spawn_local(async move {
        loop {
            gloo_timers::future::TimeoutFuture::new(5_000).await;
            // Signals go dead when the view unmounts; stop ticking then.
            match live.try_get_untracked() {
                None => break,
                Some(false) => continue,
                Some(true) => {}
            }
            if set_metrics
                .try_update(|m| {
                    let drift = (js_sys::Math::random() - 0.5) * 0.4;
                    m.avg_compliance_score = (m.avg_compliance_score + drift).clamp(0.0, 100.0);
                })
                .is_none()
            {
                break;
            }
        }
    });

    let open_alerts: Vec<_> = fixtures::alerts::all()
        .into_iter()
        .filter(|a| a.status != AlertStatus::Resolved)
        .take(4)
        .collect();

    let kpi_trends = move || metrics.get().kpi_trends;

    view! {
        <div class="page">
            <PageHeader
                title="Dashboard"
                subtitle="Supplier compliance at a glance"
            >
                <Button
                    variant="secondary"
                    on_click=Callback::new(move |_| set_live.update(|v| *v = !*v))
                >
                    {move || if live.get() { "Pause Live Data" } else { "Resume Live Data" }}
                </Button>
            </PageHeader>

            <div class="stat-grid">
                <StatCard
                    label="Total Suppliers".to_string()
                    icon_name="suppliers".to_string()
                    value=Signal::derive(move || metrics.get().total_suppliers.to_string())
                    subtitle=Signal::derive(move || {
                        Some(format!("{} active", metrics.get().active_suppliers))
                    })
                />
                <StatCard
                    label="Avg Compliance Score".to_string()
                    icon_name="shield".to_string()
                    value=Signal::derive(move || {
                        format!("{:.1}%", metrics.get().avg_compliance_score)
                    })
                    variant="success"
                />
                <StatCard
                    label="Critical Alerts".to_string()
                    icon_name="warning".to_string()
                    value=Signal::derive(move || metrics.get().critical_alerts.to_string())
                    variant="error"
                    subtitle=Signal::derive(move || {
                        Some(format!("{} suppliers at risk", metrics.get().suppliers_at_risk))
                    })
                />
                <StatCard
                    label="Documents Expiring".to_string()
                    icon_name="documents".to_string()
                    value=Signal::derive(move || {
                        metrics.get().documents_expiring_soon.to_string()
                    })
                    variant="warning"
                    subtitle=Signal::derive(|| Some("within 30 days".to_string()))
                />
            </div>

            <div class="dashboard-panels">
                <section class="panel">
                    <h2 class="panel__title">"KPI Trends"</h2>
                    <table class="table">
                        <thead>
                            <tr>
                                <th class="table__header">"Metric"</th>
                                <th class="table__header">"Current"</th>
                                <th class="table__header">"Previous"</th>
                                <th class="table__header">"Change"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=kpi_trends
                                key=|trend| trend.metric.clone()
                                children=move |trend| {
                                    let change_class = if trend.change >= 0.0 {
                                        "table__cell table__cell--positive"
                                    } else {
                                        "table__cell table__cell--negative"
                                    };
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{trend.metric.clone()}</td>
                                            <td class="table__cell">{format!("{:.1}", trend.current)}</td>
                                            <td class="table__cell">{format!("{:.1}", trend.previous)}</td>
                                            <td class=change_class>{format!("{:+.1}", trend.change)}</td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </section>

                <section class="panel">
                    <h2 class="panel__title">"Open Alerts"</h2>
                    <ul class="alert-feed">
                        {open_alerts
                            .into_iter()
                            .map(|alert| {
                                view! {
                                    <li class="alert-feed__item">
                                        <span class="alert-feed__icon">{icon("warning")}</span>
                                        <div class="alert-feed__body">
                                            <div class="alert-feed__title">{alert.title.clone()}</div>
                                            <div class="alert-feed__meta">
                                                {format_date(&alert.created_date)}
                                            </div>
                                        </div>
                                        <Badge variant=alert.severity.badge_variant()>
                                            {alert.severity.label()}
                                        </Badge>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </section>
            </div>
        </div>
    }
}
