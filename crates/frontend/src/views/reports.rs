use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{Badge, Button};
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use contracts::domain::report::{Report, ReportStatus, ReportTemplate};
use contracts::fixtures;
use leptos::prelude::*;

/// Generated reports and the templates they come from. "Generate" fakes a
/// rendering service with a fixed delay, then marks the report completed.
#[component]
pub fn ReportsView() -> impl IntoView {
    let (reports, set_reports) = signal(fixtures::reports::all());
    let templates = StoredValue::new(fixtures::reports::templates());

    let generate = move |template: ReportTemplate| {
        let report_id = uuid::Uuid::new_v4().to_string();
        let now = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();
        set_reports.update(|list| {
            list.insert(
                0,
                Report {
                    id: report_id.clone(),
                    name: template.name.clone(),
                    description: template.description.clone(),
                    report_type: template.report_type,
                    format: contracts::domain::report::ReportFormat::Pdf,
                    status: ReportStatus::Generating,
                    created_at: now,
                    generated_at: None,
                    size: None,
                    download_url: None,
                    schedule: None,
                },
            );
        });
        log::info!("report generation started from template {}", template.id);

        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(3_000).await;
            let _ = set_reports.try_update(|list| {
                if let Some(report) = list.iter_mut().find(|r| r.id == report_id) {
                    report.status = ReportStatus::Completed;
                    report.generated_at =
                        Some(chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string());
                    report.size = Some("1.1 MB".to_string());
                    log::info!("report {} completed", report.id);
                }
            });
        });
    };

    view! {
        <div class="page">
            <PageHeader title="Reports" subtitle="Generated reports and templates">
                {()}
            </PageHeader>

            <section class="panel">
                <h2 class="panel__title">"Templates"</h2>
                <div class="template-grid">
                    {templates
                        .with_value(|list| list.clone())
                        .into_iter()
                        .map(|template| {
                            let for_generate = template.clone();
                            view! {
                                <div class="template-card">
                                    <div class="template-card__name">{template.name.clone()}</div>
                                    <div class="template-card__description">
                                        {template.description.clone()}
                                    </div>
                                    <div class="template-card__meta">
                                        {template.category.clone()}
                                        " · "
                                        {template.estimated_time.clone()}
                                    </div>
                                    <div class="template-card__sections">
                                        {template.sections.join(" · ")}
                                    </div>
                                    <Button
                                        size="sm"
                                        on_click=Callback::new(move |_| generate(for_generate.clone()))
                                    >
                                        "Generate"
                                    </Button>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="panel">
                <h2 class="panel__title">"Recent Reports"</h2>
                <table class="table">
                    <thead>
                        <tr>
                            <th class="table__header">"Report"</th>
                            <th class="table__header">"Type"</th>
                            <th class="table__header">"Format"</th>
                            <th class="table__header">"Status"</th>
                            <th class="table__header">"Generated"</th>
                            <th class="table__header">"Size"</th>
                            <th class="table__header">"Schedule"</th>
                            <th class="table__header"></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || reports.get()
                            key=|report: &Report| (report.id.clone(), report.status)
                            children=move |report| {
                                let downloadable =
                                    report.status == ReportStatus::Completed;
                                let report_id = report.id.clone();
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">
                                            <div class="table__cell-primary">{report.name.clone()}</div>
                                            <div class="table__cell-secondary">
                                                {report.description.clone()}
                                            </div>
                                        </td>
                                        <td class="table__cell">{report.report_type.label()}</td>
                                        <td class="table__cell">{report.format.label()}</td>
                                        <td class="table__cell">
                                            <Badge variant=report.status.badge_variant()>
                                                {report.status.label()}
                                            </Badge>
                                        </td>
                                        <td class="table__cell">
                                            {report
                                                .generated_at
                                                .as_deref()
                                                .map(format_datetime)
                                                .unwrap_or_else(|| "-".to_string())}
                                        </td>
                                        <td class="table__cell">
                                            {report.size.clone().unwrap_or_else(|| "-".to_string())}
                                        </td>
                                        <td class="table__cell">
                                            {report
                                                .schedule
                                                .as_ref()
                                                .map(|s| {
                                                    format!(
                                                        "{} (next {})",
                                                        s.frequency.label(),
                                                        crate::shared::date_utils::format_date(&s.next_run),
                                                    )
                                                })
                                                .unwrap_or_else(|| "-".to_string())}
                                        </td>
                                        <td class="table__cell">
                                            <Show when=move || downloadable>
                                                <Button
                                                    size="sm"
                                                    variant="ghost"
                                                    on_click=Callback::new({
                                                        let report_id = report_id.clone();
                                                        move |_| {
                                                            // No file server behind this; record the intent.
                                                            log::info!("download requested for report {}", report_id);
                                                        }
                                                    })
                                                >
                                                    {icon("download")}
                                                </Button>
                                            </Show>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </section>
        </div>
    }
}
