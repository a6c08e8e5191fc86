use crate::shared::components::search_input::SearchInput;
use crate::shared::components::ui::{Badge, Select};
use crate::shared::date_utils::format_date;
use contracts::domain::supplier::{RiskLevel, Supplier, SupplierCategory, SupplierStatus};
use contracts::fixtures;
use contracts::shared::filter::{filter_records, FilterCriteria, ALL};
use leptos::prelude::*;

fn status_options() -> Vec<(String, String)> {
    let mut options = vec![(ALL.to_string(), "All Statuses".to_string())];
    options.extend(
        SupplierStatus::ALL
            .iter()
            .map(|s| (s.label().to_string(), s.label().to_string())),
    );
    options
}

fn risk_options() -> Vec<(String, String)> {
    let mut options = vec![(ALL.to_string(), "All Risk Levels".to_string())];
    options.extend(
        RiskLevel::ALL
            .iter()
            .map(|r| (r.label().to_string(), r.label().to_string())),
    );
    options
}

fn category_options() -> Vec<(String, String)> {
    let mut options = vec![(ALL.to_string(), "All Categories".to_string())];
    options.extend(
        SupplierCategory::ALL
            .iter()
            .map(|c| (c.label().to_string(), c.label().to_string())),
    );
    options
}

#[component]
pub fn SupplierList() -> impl IntoView {
    let suppliers = StoredValue::new(fixtures::suppliers::all());

    let (query, set_query) = signal(String::new());
    let (status, set_status) = signal(ALL.to_string());
    let (risk, set_risk) = signal(ALL.to_string());
    let (category, set_category) = signal(ALL.to_string());

    let filtered = Memo::new(move |_| {
        let criteria = FilterCriteria::new()
            .with_query(query.get())
            .with_field("status", status.get())
            .with_field("risk", risk.get())
            .with_field("category", category.get());
        suppliers.with_value(|list| filter_records(list, &criteria))
    });

    view! {
        <div class="list-toolbar">
            <SearchInput
                value=query
                on_change=Callback::new(move |v| set_query.set(v))
                placeholder="Search by name or GSTIN..."
            />
            <Select
                value=status
                options=status_options()
                on_change=Callback::new(move |v| set_status.set(v))
            />
            <Select
                value=risk
                options=risk_options()
                on_change=Callback::new(move |v| set_risk.set(v))
            />
            <Select
                value=category
                options=category_options()
                on_change=Callback::new(move |v| set_category.set(v))
            />
        </div>

        <div class="list-count">
            {move || {
                let shown = filtered.get().len();
                let total = suppliers.with_value(|list| list.len());
                format!("Showing {} of {} suppliers", shown, total)
            }}
        </div>

        <table class="table">
            <thead>
                <tr>
                    <th class="table__header">"Name"</th>
                    <th class="table__header">"GSTIN"</th>
                    <th class="table__header">"Category"</th>
                    <th class="table__header">"Status"</th>
                    <th class="table__header">"Risk"</th>
                    <th class="table__header">"Score"</th>
                    <th class="table__header">"Last Audit"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || filtered.get()
                    key=|supplier: &Supplier| supplier.id.clone()
                    children=move |supplier| {
                        view! {
                            <tr class="table__row">
                                <td class="table__cell">
                                    <div class="table__cell-primary">{supplier.name.clone()}</div>
                                    <div class="table__cell-secondary">{supplier.email.clone()}</div>
                                </td>
                                <td class="table__cell table__cell--mono">{supplier.gstin.clone()}</td>
                                <td class="table__cell">{supplier.category.label()}</td>
                                <td class="table__cell">
                                    <Badge variant=supplier.status.badge_variant()>
                                        {supplier.status.label()}
                                    </Badge>
                                </td>
                                <td class="table__cell">
                                    <Badge variant=supplier.risk_level.badge_variant()>
                                        {supplier.risk_level.label()}
                                    </Badge>
                                </td>
                                <td class="table__cell">{format!("{}%", supplier.compliance_score)}</td>
                                <td class="table__cell">{format_date(&supplier.last_audit_date)}</td>
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>

        <Show when=move || filtered.get().is_empty()>
            <div class="empty-state">"No suppliers match the current filters."</div>
        </Show>
    }
}
