use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{Badge, Button};
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use contracts::domain::compliance::{ComplianceResult, RuleStatus};
use contracts::fixtures;
use leptos::prelude::*;

/// Per-supplier validation results with rules grouped by category.
///
/// "Run Validation" simulates a rule engine pass with a fixed delay and
/// re-stamps the validation time; the rule outcomes themselves are fixtures.
#[component]
pub fn ComplianceView() -> impl IntoView {
    let (results, set_results) = signal(fixtures::compliance::results());
    let (running, set_running) = signal(false);
    let (expanded, set_expanded) = signal::<Option<String>>(None);

    let run_validation = move |_| {
        if running.get() {
            return;
        }
        set_running.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            log::info!("compliance validation started");
            gloo_timers::future::TimeoutFuture::new(3_000).await;
            let _ = set_results.try_update(|list| {
                let stamp = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();
                for result in list.iter_mut() {
                    result.last_validated = stamp.clone();
                }
            });
            let _ = set_running.try_set(false);
            log::info!("compliance validation finished");
        });
    };

    let toggle_expanded = move |supplier_id: String| {
        set_expanded.update(|current| {
            if current.as_deref() == Some(supplier_id.as_str()) {
                *current = None;
            } else {
                *current = Some(supplier_id);
            }
        });
    };

    view! {
        <div class="page">
            <PageHeader title="Compliance" subtitle="Validation results by supplier">
                <Button disabled=Signal::derive(move || running.get()) on_click=Callback::new(run_validation)>
                    {move || if running.get() { "Validating..." } else { "Run Validation" }}
                </Button>
            </PageHeader>

            <div class="compliance-results">
                <For
                    each=move || results.get()
                    key=|result: &ComplianceResult| {
                        (result.supplier_id.clone(), result.last_validated.clone())
                    }
                    children=move |result| {
                        let supplier_id = result.supplier_id.clone();
                        let is_open = {
                            let supplier_id = supplier_id.clone();
                            move || expanded.get().as_deref() == Some(supplier_id.as_str())
                        };
                        let passed = result.count_by_status(RuleStatus::Passed);
                        let warnings = result.count_by_status(RuleStatus::Warning);
                        let failed = result.count_by_status(RuleStatus::Failed);
                        let groups = result
                            .rules_by_category()
                            .into_iter()
                            .map(|(category, rules)| (category, rules.into_iter().cloned().collect::<Vec<_>>()))
                            .collect::<Vec<_>>();
                        view! {
                            <section class="panel compliance-card">
                                <div
                                    class="compliance-card__header"
                                    on:click=move |_| toggle_expanded(supplier_id.clone())
                                >
                                    <div>
                                        <div class="compliance-card__name">
                                            {result.supplier_name.clone()}
                                        </div>
                                        <div class="compliance-card__meta">
                                            {format!(
                                                "{} passed, {} warnings, {} failed",
                                                passed,
                                                warnings,
                                                failed,
                                            )}
                                            " · last validated "
                                            {format_datetime(&result.last_validated)}
                                        </div>
                                    </div>
                                    <div class="compliance-card__side">
                                        <span class="compliance-card__score">
                                            {format!("{}%", result.overall_score)}
                                        </span>
                                        <Badge variant=result.status.badge_variant()>
                                            {result.status.label()}
                                        </Badge>
                                    </div>
                                </div>
                                <Show when=is_open>
                                    {groups
                                        .iter()
                                        .map(|(category, rules)| {
                                            view! {
                                                <div class="rule-group">
                                                    <h3 class="rule-group__title">
                                                        {icon(category.icon())}
                                                        {category.label()}
                                                    </h3>
                                                    {rules
                                                        .iter()
                                                        .map(|rule| {
                                                            let rule = rule.clone();
                                                            view! {
                                                                <div class="rule">
                                                                    <div class="rule__main">
                                                                        <span class="rule__name">{rule.name.clone()}</span>
                                                                        <span class="rule__description">
                                                                            {rule.description.clone()}
                                                                        </span>
                                                                        <ul class="rule__details">
                                                                            {rule
                                                                                .details
                                                                                .iter()
                                                                                .map(|d| view! { <li>{d.clone()}</li> })
                                                                                .collect_view()}
                                                                        </ul>
                                                                    </div>
                                                                    <div class="rule__side">
                                                                        <span class="rule__score">{format!("{}", rule.score)}</span>
                                                                        <Badge variant=rule.status.badge_variant()>
                                                                            {rule.status.label()}
                                                                        </Badge>
                                                                    </div>
                                                                </div>
                                                            }
                                                        })
                                                        .collect_view()}
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </Show>
                            </section>
                        }
                    }
                />
            </div>
        </div>
    }
}
