use crate::shared::components::page_header::PageHeader;
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::ui::{Badge, Button, Select};
use crate::shared::date_utils::format_date;
use contracts::domain::document::{Document, DocumentStatus};
use contracts::fixtures;
use contracts::shared::filter::{filter_records, FilterCriteria, ALL};
use leptos::prelude::*;

fn status_options() -> Vec<(String, String)> {
    let mut options = vec![(ALL.to_string(), "All Statuses".to_string())];
    options.extend(
        DocumentStatus::ALL
            .iter()
            .map(|s| (s.label().to_string(), s.label().to_string())),
    );
    options
}

fn type_options() -> Vec<(String, String)> {
    let mut options = vec![(ALL.to_string(), "All Types".to_string())];
    options.extend(
        fixtures::documents::types()
            .into_iter()
            .map(|t| (t.clone(), t)),
    );
    options
}

#[component]
pub fn DocumentsView() -> impl IntoView {
    let documents = StoredValue::new(fixtures::documents::all());

    let (query, set_query) = signal(String::new());
    let (status, set_status) = signal(ALL.to_string());
    let (doc_type, set_doc_type) = signal(ALL.to_string());

    let filtered = Memo::new(move |_| {
        let criteria = FilterCriteria::new()
            .with_query(query.get())
            .with_field("status", status.get())
            .with_field("type", doc_type.get());
        documents.with_value(|list| filter_records(list, &criteria))
    });

    let handle_upload = move |_| {
        // Upload needs a document store; log the intent only.
        log::info!("document upload requested");
    };

    view! {
        <div class="page">
            <PageHeader title="Documents" subtitle="Compliance documents by supplier">
                <Button on_click=Callback::new(handle_upload)>"Upload Document"</Button>
            </PageHeader>

            <div class="list-toolbar">
                <SearchInput
                    value=query
                    on_change=Callback::new(move |v| set_query.set(v))
                    placeholder="Search by name, supplier or type..."
                />
                <Select
                    value=status
                    options=status_options()
                    on_change=Callback::new(move |v| set_status.set(v))
                />
                <Select
                    value=doc_type
                    options=type_options()
                    on_change=Callback::new(move |v| set_doc_type.set(v))
                />
            </div>

            <div class="list-count">
                {move || {
                    let shown = filtered.get().len();
                    let total = documents.with_value(|list| list.len());
                    format!("Showing {} of {} documents", shown, total)
                }}
            </div>

            <table class="table">
                <thead>
                    <tr>
                        <th class="table__header">"Document"</th>
                        <th class="table__header">"Supplier"</th>
                        <th class="table__header">"Type"</th>
                        <th class="table__header">"Status"</th>
                        <th class="table__header">"Uploaded"</th>
                        <th class="table__header">"Expires"</th>
                        <th class="table__header">"Size"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || filtered.get()
                        key=|doc: &Document| doc.id.clone()
                        children=move |doc| {
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">
                                        <div class="table__cell-primary">{doc.name.clone()}</div>
                                        <div class="table__cell-secondary">
                                            {format!("v{} · {}", doc.version, doc.uploaded_by)}
                                        </div>
                                    </td>
                                    <td class="table__cell">{doc.supplier_name.clone()}</td>
                                    <td class="table__cell">{doc.doc_type.clone()}</td>
                                    <td class="table__cell">
                                        <Badge variant=doc.status.badge_variant()>
                                            {doc.status.label()}
                                        </Badge>
                                    </td>
                                    <td class="table__cell">{format_date(&doc.upload_date)}</td>
                                    <td class="table__cell">
                                        {doc
                                            .expiry_date
                                            .as_deref()
                                            .map(format_date)
                                            .unwrap_or_else(|| "-".to_string())}
                                    </td>
                                    <td class="table__cell">{doc.size.clone()}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>

            <Show when=move || filtered.get().is_empty()>
                <div class="empty-state">"No documents match the current filters."</div>
            </Show>
        </div>
    }
}
