pub mod list;
pub mod onboarding;
pub mod registration;

use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::Button;
use leptos::prelude::*;

/// Sub-views of the supplier section. The list is the default; the other
/// two are reached from its header actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SupplierTab {
    List,
    Register,
    Onboarding,
}

#[component]
pub fn SuppliersView() -> impl IntoView {
    let (tab, set_tab) = signal(SupplierTab::List);

    let subtitle = move || match tab.get() {
        SupplierTab::List => "Manage supplier records and risk",
        SupplierTab::Register => "Register a new supplier",
        SupplierTab::Onboarding => "Onboarding checklist",
    };

    let content = move || match tab.get() {
        SupplierTab::List => view! { <list::SupplierList /> }.into_any(),
        SupplierTab::Register => {
            view! { <registration::SupplierRegistration on_done=Callback::new(move |_| set_tab.set(SupplierTab::List)) /> }
                .into_any()
        }
        SupplierTab::Onboarding => view! { <onboarding::OnboardingChecklist /> }.into_any(),
    };

    view! {
        <div class="page">
            <PageHeader title="Suppliers" subtitle=Signal::derive(move || subtitle().to_string())>
                <Button
                    variant="secondary"
                    on_click=Callback::new(move |_| set_tab.set(SupplierTab::List))
                >
                    "All Suppliers"
                </Button>
                <Button
                    variant="secondary"
                    on_click=Callback::new(move |_| set_tab.set(SupplierTab::Onboarding))
                >
                    "Onboarding"
                </Button>
                <Button on_click=Callback::new(move |_| set_tab.set(SupplierTab::Register))>
                    "Register Supplier"
                </Button>
            </PageHeader>
            {content}
        </div>
    }
}
