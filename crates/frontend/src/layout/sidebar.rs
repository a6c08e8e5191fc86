use crate::layout::context::{AppShellContext, ViewKey};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppShellContext>().expect("AppShellContext context not found");

    view! {
        <nav class=move || {
            if ctx.sidebar_open.get() {
                "sidebar"
            } else {
                "sidebar sidebar--collapsed"
            }
        }>
            <ul class="sidebar__list">
                {ViewKey::ALL
                    .into_iter()
                    .map(|view| {
                        let item_class = move || {
                            if ctx.active.get() == view {
                                "sidebar__item sidebar__item--active"
                            } else {
                                "sidebar__item"
                            }
                        };
                        view! {
                            <li class=item_class on:click=move |_| ctx.activate(view)>
                                {icon(view.icon_name())}
                                <span class="sidebar__label">{view.title()}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
