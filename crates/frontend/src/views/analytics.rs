use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::ProgressBar;
use contracts::fixtures;
use leptos::prelude::*;

/// Historical series rendered as tables and CSS bars. The data is fixture
/// history; nothing here recomputes from the live entity lists.
#[component]
pub fn AnalyticsView() -> impl IntoView {
    let scores = fixtures::metrics::compliance_scores();
    let risk_slices = fixtures::metrics::risk_distribution();
    let performance = fixtures::metrics::supplier_performance();
    let risk_trends = fixtures::metrics::risk_trends();
    let compliance_metrics = fixtures::metrics::compliance_metrics();
    let audit_timeline = fixtures::metrics::audit_timeline();

    let risk_total: u32 = risk_slices.iter().map(|s| s.value).sum();

    view! {
        <div class="page">
            <PageHeader title="Analytics" subtitle="Trends across the supplier base">
                {()}
            </PageHeader>

            <div class="analytics-grid">
                <section class="panel">
                    <h2 class="panel__title">"Compliance Score vs Target"</h2>
                    <div class="bar-chart">
                        {scores
                            .iter()
                            .map(|month| {
                                view! {
                                    <div class="bar-chart__row">
                                        <span class="bar-chart__label">{month.month.clone()}</span>
                                        <div class="bar-chart__track">
                                            <div
                                                class="bar-chart__fill"
                                                style=format!("width: {}%", month.score)
                                            ></div>
                                            <div
                                                class="bar-chart__target"
                                                style=format!("left: {}%", month.target)
                                            ></div>
                                        </div>
                                        <span class="bar-chart__value">{month.score}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </section>

                <section class="panel">
                    <h2 class="panel__title">"Risk Distribution"</h2>
                    <div class="risk-donut">
                        {risk_slices
                            .iter()
                            .map(|slice| {
                                let share = if risk_total == 0 {
                                    0
                                } else {
                                    slice.value * 100 / risk_total
                                };
                                view! {
                                    <div class="risk-donut__row">
                                        <span
                                            class="risk-donut__swatch"
                                            style=format!("background: {}", slice.color)
                                        ></span>
                                        <span class="risk-donut__name">{slice.name.clone()}</span>
                                        <span class="risk-donut__value">
                                            {format!("{} ({}%)", slice.value, share)}
                                        </span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </section>

                <section class="panel">
                    <h2 class="panel__title">"Performance by Category"</h2>
                    <table class="table">
                        <thead>
                            <tr>
                                <th class="table__header">"Category"</th>
                                <th class="table__header">"Compliance"</th>
                                <th class="table__header">"Delivery"</th>
                                <th class="table__header">"Quality"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {performance
                                .iter()
                                .map(|row| {
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{row.category.clone()}</td>
                                            <td class="table__cell">{format!("{}%", row.compliance)}</td>
                                            <td class="table__cell">{format!("{}%", row.delivery)}</td>
                                            <td class="table__cell">{format!("{}%", row.quality)}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                </section>

                <section class="panel">
                    <h2 class="panel__title">"Risk Trends"</h2>
                    <table class="table">
                        <thead>
                            <tr>
                                <th class="table__header">"Month"</th>
                                <th class="table__header">"High"</th>
                                <th class="table__header">"Medium"</th>
                                <th class="table__header">"Low"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {risk_trends
                                .iter()
                                .map(|month| {
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{month.month.clone()}</td>
                                            <td class="table__cell">{month.high}</td>
                                            <td class="table__cell">{month.medium}</td>
                                            <td class="table__cell">{month.low}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                </section>

                <section class="panel">
                    <h2 class="panel__title">"Compliance Metrics"</h2>
                    <div class="metric-list">
                        {compliance_metrics
                            .iter()
                            .map(|metric| {
                                let trend_class = if metric.trend >= 0.0 {
                                    "metric-list__trend metric-list__trend--up"
                                } else {
                                    "metric-list__trend metric-list__trend--down"
                                };
                                view! {
                                    <div class="metric-list__row">
                                        <span class="metric-list__name">{metric.category.clone()}</span>
                                        <ProgressBar percent=metric.current />
                                        <span class="metric-list__value">
                                            {format!("{}% / {}%", metric.current, metric.target)}
                                        </span>
                                        <span class=trend_class>{format!("{:+.1}", metric.trend)}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </section>

                <section class="panel">
                    <h2 class="panel__title">"Audit Timeline"</h2>
                    <table class="table">
                        <thead>
                            <tr>
                                <th class="table__header">"Month"</th>
                                <th class="table__header">"Scheduled"</th>
                                <th class="table__header">"Completed"</th>
                                <th class="table__header">"Passed"</th>
                                <th class="table__header">"Failed"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {audit_timeline
                                .iter()
                                .map(|month| {
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{month.month.clone()}</td>
                                            <td class="table__cell">{month.scheduled}</td>
                                            <td class="table__cell">{month.completed}</td>
                                            <td class="table__cell">{month.passed}</td>
                                            <td class="table__cell">{month.failed}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                </section>
            </div>
        </div>
    }
}
