use crate::shared::components::page_header::PageHeader;
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::ui::{Badge, Select};
use crate::shared::icons::icon;
use contracts::fixtures;
use contracts::shared::filter::{filter_records, FilterCriteria, ALL};
use leptos::prelude::*;

/// Cross-entity search over suppliers, documents and users. One query is
/// applied to each collection's designated text fields; the scope dropdown
/// narrows which collections are consulted.
#[component]
pub fn SearchView() -> impl IntoView {
    let suppliers = StoredValue::new(fixtures::suppliers::all());
    let documents = StoredValue::new(fixtures::documents::all());
    let users = StoredValue::new(fixtures::users::all());

    let (query, set_query) = signal(String::new());
    let (scope, set_scope) = signal(ALL.to_string());

    let scope_options = vec![
        (ALL.to_string(), "All Entities".to_string()),
        ("suppliers".to_string(), "Suppliers".to_string()),
        ("documents".to_string(), "Documents".to_string()),
        ("users".to_string(), "Users".to_string()),
    ];

    let in_scope = move |name: &str| {
        let current = scope.get();
        current == ALL || current == name
    };

    let supplier_hits = Memo::new(move |_| {
        if !in_scope("suppliers") {
            return Vec::new();
        }
        let criteria = FilterCriteria::new().with_query(query.get());
        suppliers.with_value(|list| filter_records(list, &criteria))
    });
    let document_hits = Memo::new(move |_| {
        if !in_scope("documents") {
            return Vec::new();
        }
        let criteria = FilterCriteria::new().with_query(query.get());
        documents.with_value(|list| filter_records(list, &criteria))
    });
    let user_hits = Memo::new(move |_| {
        if !in_scope("users") {
            return Vec::new();
        }
        let criteria = FilterCriteria::new().with_query(query.get());
        users.with_value(|list| filter_records(list, &criteria))
    });

    let total_hits = Memo::new(move |_| {
        supplier_hits.get().len() + document_hits.get().len() + user_hits.get().len()
    });

    view! {
        <div class="page">
            <PageHeader title="Advanced Search" subtitle="Search across all records">
                {()}
            </PageHeader>

            <div class="list-toolbar">
                <SearchInput
                    value=query
                    on_change=Callback::new(move |v| set_query.set(v))
                    placeholder="Search suppliers, documents, users..."
                />
                <Select
                    value=scope
                    options=scope_options
                    on_change=Callback::new(move |v| set_scope.set(v))
                />
            </div>

            <div class="list-count">
                {move || format!("{} results", total_hits.get())}
            </div>

            <Show when=move || !supplier_hits.get().is_empty()>
                <section class="panel search-group">
                    <h2 class="panel__title">{icon("suppliers")} "Suppliers"</h2>
                    <ul class="search-results">
                        {move || {
                            supplier_hits
                                .get()
                                .into_iter()
                                .map(|s| {
                                    view! {
                                        <li class="search-results__item">
                                            <div class="search-results__title">{s.name.clone()}</div>
                                            <div class="search-results__meta">
                                                {s.gstin.clone()} " · " {s.category.label()}
                                            </div>
                                            <Badge variant=s.status.badge_variant()>
                                                {s.status.label()}
                                            </Badge>
                                        </li>
                                    }
                                })
                                .collect_view()
                        }}
                    </ul>
                </section>
            </Show>

            <Show when=move || !document_hits.get().is_empty()>
                <section class="panel search-group">
                    <h2 class="panel__title">{icon("documents")} "Documents"</h2>
                    <ul class="search-results">
                        {move || {
                            document_hits
                                .get()
                                .into_iter()
                                .map(|d| {
                                    view! {
                                        <li class="search-results__item">
                                            <div class="search-results__title">{d.name.clone()}</div>
                                            <div class="search-results__meta">
                                                {d.supplier_name.clone()} " · " {d.doc_type.clone()}
                                            </div>
                                            <Badge variant=d.status.badge_variant()>
                                                {d.status.label()}
                                            </Badge>
                                        </li>
                                    }
                                })
                                .collect_view()
                        }}
                    </ul>
                </section>
            </Show>

            <Show when=move || !user_hits.get().is_empty()>
                <section class="panel search-group">
                    <h2 class="panel__title">{icon("users")} "Users"</h2>
                    <ul class="search-results">
                        {move || {
                            user_hits
                                .get()
                                .into_iter()
                                .map(|u| {
                                    view! {
                                        <li class="search-results__item">
                                            <div class="search-results__title">{u.name.clone()}</div>
                                            <div class="search-results__meta">
                                                {u.email.clone()} " · " {u.role.clone()}
                                            </div>
                                            <Badge variant=u.status.badge_variant()>
                                                {u.status.label()}
                                            </Badge>
                                        </li>
                                    }
                                })
                                .collect_view()
                        }}
                    </ul>
                </section>
            </Show>

            <Show when=move || total_hits.get() == 0>
                <div class="empty-state">"No records match the query."</div>
            </Show>
        </div>
    }
}
