use crate::shared::components::ui::{Badge, ProgressBar};
use contracts::domain::compliance::{ChecklistItem, ChecklistStatus};
use contracts::fixtures;
use leptos::prelude::*;

/// Onboarding checklist for the most recently registered supplier. Items can
/// be checked off locally; the change is not persisted anywhere.
#[component]
pub fn OnboardingChecklist() -> impl IntoView {
    let (items, set_items) = signal(fixtures::compliance::onboarding_checklist());

    let progress = Memo::new(move |_| {
        items.with(|list| {
            if list.is_empty() {
                return 0;
            }
            let done = list
                .iter()
                .filter(|item| item.status == ChecklistStatus::Completed)
                .count();
            (done * 100 / list.len()) as u32
        })
    });

    let toggle = move |id: String| {
        set_items.update(|list| {
            if let Some(item) = list.iter_mut().find(|item| item.id == id) {
                item.status = match item.status {
                    ChecklistStatus::Completed => ChecklistStatus::Pending,
                    _ => ChecklistStatus::Completed,
                };
            }
        });
    };

    view! {
        <div class="onboarding">
            <div class="onboarding__progress">
                <span class="onboarding__progress-label">
                    {move || format!("{}% complete", progress.get())}
                </span>
                <ProgressBar percent=progress />
            </div>

            <ul class="checklist">
                <For
                    each=move || items.get()
                    key=|item: &ChecklistItem| (item.id.clone(), item.status)
                    children=move |item| {
                        let id = item.id.clone();
                        let done = item.status == ChecklistStatus::Completed;
                        view! {
                            <li class="checklist__item">
                                <input
                                    type="checkbox"
                                    class="checklist__checkbox"
                                    checked=done
                                    on:change=move |_| toggle(id.clone())
                                />
                                <div class="checklist__body">
                                    <div class="checklist__title">{item.title.clone()}</div>
                                    <div class="checklist__description">{item.description.clone()}</div>
                                </div>
                                <span class="checklist__category">{item.category.label()}</span>
                                <Badge variant=item.status.badge_variant()>
                                    {item.status.label()}
                                </Badge>
                                <span class="checklist__priority">
                                    {format!("{} priority", item.priority.label())}
                                </span>
                            </li>
                        }
                    }
                />
            </ul>
        </div>
    }
}
