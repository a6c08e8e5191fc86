use crate::shared::components::page_header::PageHeader;
use crate::shared::components::search_input::SearchInput;
use crate::shared::components::ui::{Badge, Button, Select};
use crate::shared::date_utils::format_datetime;
use contracts::domain::user::{User, UserStatus};
use contracts::fixtures;
use contracts::shared::filter::{filter_records, FilterCriteria, ALL};
use leptos::prelude::*;

fn status_options() -> Vec<(String, String)> {
    let mut options = vec![(ALL.to_string(), "All Statuses".to_string())];
    options.extend(
        UserStatus::ALL
            .iter()
            .map(|s| (s.key().to_string(), s.label().to_string())),
    );
    options
}

fn role_options() -> Vec<(String, String)> {
    let mut options = vec![(ALL.to_string(), "All Roles".to_string())];
    options.extend(
        fixtures::users::role_names()
            .into_iter()
            .map(|name| (name.clone(), name)),
    );
    options
}

#[component]
pub fn UsersView() -> impl IntoView {
    let users = StoredValue::new(fixtures::users::all());
    let roles = StoredValue::new(fixtures::users::roles());
    let (show_roles, set_show_roles) = signal(false);

    let (query, set_query) = signal(String::new());
    let (status, set_status) = signal(ALL.to_string());
    let (role, set_role) = signal(ALL.to_string());

    let filtered = Memo::new(move |_| {
        let criteria = FilterCriteria::new()
            .with_query(query.get())
            .with_field("status", status.get())
            .with_field("role", role.get());
        users.with_value(|list| filter_records(list, &criteria))
    });

    view! {
        <div class="page">
            <PageHeader title="Users" subtitle="Operator accounts and roles">
                <Button
                    variant="secondary"
                    on_click=Callback::new(move |_| set_show_roles.update(|v| *v = !*v))
                >
                    {move || if show_roles.get() { "Hide Roles" } else { "Roles" }}
                </Button>
                <Button on_click=Callback::new(|_| {
                    // Account creation needs an auth provider; log the intent only.
                    log::info!("user invite requested");
                })>
                    "Invite User"
                </Button>
            </PageHeader>

            <Show when=move || show_roles.get()>
                <section class="panel">
                    <h2 class="panel__title">"Roles"</h2>
                    <div class="role-grid">
                        {roles
                            .with_value(|list| list.clone())
                            .into_iter()
                            .map(|r| {
                                let summary = if r.grants_everything() {
                                    "Full access".to_string()
                                } else {
                                    format!("{} permissions", r.permissions.len())
                                };
                                let is_system = r.is_system;
                                view! {
                                    <div class="role-card">
                                        <div class="role-card__name">
                                            {r.name.clone()}
                                            <Show when=move || is_system>
                                                <Badge variant="primary">"System"</Badge>
                                            </Show>
                                        </div>
                                        <div class="role-card__description">
                                            {r.description.clone()}
                                        </div>
                                        <div class="role-card__meta">
                                            {summary} " · " {format!("{} users", r.user_count)}
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                    <h2 class="panel__title">"Permission Catalog"</h2>
                    <ul class="permission-list">
                        {fixtures::users::permissions()
                            .into_iter()
                            .map(|p| {
                                view! {
                                    <li class="permission-list__item">
                                        <span class="permission-list__name">{p.name.clone()}</span>
                                        <span class="permission-list__category">
                                            {p.category.clone()}
                                        </span>
                                        <span class="permission-list__description">
                                            {p.description.clone()}
                                        </span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </section>
            </Show>

            <div class="list-toolbar">
                <SearchInput
                    value=query
                    on_change=Callback::new(move |v| set_query.set(v))
                    placeholder="Search by name, email or role..."
                />
                <Select
                    value=status
                    options=status_options()
                    on_change=Callback::new(move |v| set_status.set(v))
                />
                <Select
                    value=role
                    options=role_options()
                    on_change=Callback::new(move |v| set_role.set(v))
                />
            </div>

            <div class="list-count">
                {move || {
                    let shown = filtered.get().len();
                    let total = users.with_value(|list| list.len());
                    format!("Showing {} of {} users", shown, total)
                }}
            </div>

            <table class="table">
                <thead>
                    <tr>
                        <th class="table__header">"User"</th>
                        <th class="table__header">"Role"</th>
                        <th class="table__header">"Department"</th>
                        <th class="table__header">"Status"</th>
                        <th class="table__header">"2FA"</th>
                        <th class="table__header">"Last Login"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || filtered.get()
                        key=|user: &User| user.id.clone()
                        children=move |user| {
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">
                                        <div class="table__cell-primary">{user.name.clone()}</div>
                                        <div class="table__cell-secondary">{user.email.clone()}</div>
                                    </td>
                                    <td class="table__cell">{user.role.clone()}</td>
                                    <td class="table__cell">{user.department.clone()}</td>
                                    <td class="table__cell">
                                        <Badge variant=user.status.badge_variant()>
                                            {user.status.label()}
                                        </Badge>
                                    </td>
                                    <td class="table__cell">
                                        {if user.two_factor_enabled { "Enabled" } else { "Disabled" }}
                                    </td>
                                    <td class="table__cell">
                                        {user
                                            .last_login
                                            .as_deref()
                                            .map(format_datetime)
                                            .unwrap_or_else(|| "Never".to_string())}
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>

            <Show when=move || filtered.get().is_empty()>
                <div class="empty-state">"No users match the current filters."</div>
            </Show>
        </div>
    }
}
