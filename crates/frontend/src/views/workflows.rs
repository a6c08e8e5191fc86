use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::ui::{Badge, Button, ProgressBar};
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use contracts::domain::workflow::{Workflow, WorkflowStatus};
use contracts::fixtures;
use leptos::prelude::*;

/// Automation workflows with their step pipelines. Pause/resume flips local
/// state only; no scheduler exists behind it.
#[component]
pub fn WorkflowsView() -> impl IntoView {
    let (workflows, set_workflows) = signal(fixtures::workflows::all());
    let (expanded, set_expanded) = signal::<Option<String>>(None);

    let toggle_status = move |id: String| {
        set_workflows.update(|list| {
            if let Some(workflow) = list.iter_mut().find(|w| w.id == id) {
                workflow.status = match workflow.status {
                    WorkflowStatus::Active => WorkflowStatus::Paused,
                    WorkflowStatus::Paused => WorkflowStatus::Active,
                    WorkflowStatus::Draft => WorkflowStatus::Active,
                };
                log::info!("workflow {} set to {}", workflow.id, workflow.status.label());
            }
        });
    };

    let toggle_expanded = move |id: String| {
        set_expanded.update(|current| {
            if current.as_deref() == Some(id.as_str()) {
                *current = None;
            } else {
                *current = Some(id);
            }
        });
    };

    let active_count = move || {
        workflows.with(|list| {
            list.iter()
                .filter(|w| w.status == WorkflowStatus::Active)
                .count()
        })
    };
    let avg_success = move || {
        workflows.with(|list| {
            if list.is_empty() {
                0
            } else {
                list.iter().map(|w| w.success_rate as usize).sum::<usize>() / list.len()
            }
        })
    };
    let steps_done = move || {
        workflows.with(|list| {
            let done: u32 = list.iter().map(|w| w.completed_steps).sum();
            let total: u32 = list.iter().map(|w| w.total_steps).sum();
            (done, total)
        })
    };

    view! {
        <div class="page">
            <PageHeader title="Workflows" subtitle="Automated compliance processes">
                {()}
            </PageHeader>

            <div class="stat-grid">
                <StatCard
                    label="Active Workflows".to_string()
                    icon_name="workflows".to_string()
                    value=Signal::derive(move || active_count().to_string())
                    variant="success"
                />
                <StatCard
                    label="Avg Success Rate".to_string()
                    icon_name="check".to_string()
                    value=Signal::derive(move || format!("{}%", avg_success()))
                />
                <StatCard
                    label="Steps Completed".to_string()
                    icon_name="clock".to_string()
                    value=Signal::derive(move || {
                        let (done, total) = steps_done();
                        format!("{}/{}", done, total)
                    })
                />
            </div>

            <div class="workflow-list">
                <For
                    each=move || workflows.get()
                    key=|workflow: &Workflow| (workflow.id.clone(), workflow.status)
                    children=move |workflow| {
                        let id = workflow.id.clone();
                        let id_for_toggle = workflow.id.clone();
                        let is_open = {
                            let id = workflow.id.clone();
                            move || expanded.get().as_deref() == Some(id.as_str())
                        };
                        let progress = workflow.progress_percent();
                        let action_icon = match workflow.status {
                            WorkflowStatus::Active => "pause",
                            _ => "play",
                        };
                        let steps = workflow.steps.clone();
                        view! {
                            <section class="panel workflow-card">
                                <div class="workflow-card__header" on:click=move |_| toggle_expanded(id.clone())>
                                    <div>
                                        <div class="workflow-card__name">{workflow.name.clone()}</div>
                                        <div class="workflow-card__description">
                                            {workflow.description.clone()}
                                        </div>
                                        <div class="workflow-card__meta">
                                            {format!("Trigger: {}", workflow.trigger)}
                                            " · last run "
                                            {format_datetime(&workflow.last_run)}
                                            {format!(" · {}% success rate", workflow.success_rate)}
                                        </div>
                                    </div>
                                    <div class="workflow-card__side">
                                        <Badge variant=workflow.status.badge_variant()>
                                            {workflow.status.label()}
                                        </Badge>
                                        <Button
                                            size="sm"
                                            variant="ghost"
                                            on_click=Callback::new(move |ev: leptos::ev::MouseEvent| {
                                                ev.stop_propagation();
                                                toggle_status(id_for_toggle.clone());
                                            })
                                        >
                                            {icon(action_icon)}
                                        </Button>
                                    </div>
                                </div>
                                <div class="workflow-card__progress">
                                    <span>
                                        {format!(
                                            "{}/{} steps",
                                            workflow.completed_steps,
                                            workflow.total_steps,
                                        )}
                                    </span>
                                    <ProgressBar percent=progress />
                                </div>
                                <Show when=is_open>
                                    <ol class="step-list">
                                        {steps
                                            .iter()
                                            .map(|step| {
                                                let step = step.clone();
                                                view! {
                                                    <li class="step-list__item">
                                                        <span class="step-list__icon">
                                                            {icon(step.step_type.icon())}
                                                        </span>
                                                        <div class="step-list__body">
                                                            <div class="step-list__name">{step.name.clone()}</div>
                                                            <div class="step-list__description">
                                                                {step.description.clone()}
                                                            </div>
                                                        </div>
                                                        {step
                                                            .assignee
                                                            .clone()
                                                            .map(|who| view! { <span class="step-list__assignee">{who}</span> })}
                                                        <Badge variant=step.status.badge_variant()>
                                                            {step.status.label()}
                                                        </Badge>
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ol>
                                </Show>
                            </section>
                        }
                    }
                />
            </div>
        </div>
    }
}
