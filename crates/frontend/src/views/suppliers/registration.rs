use crate::shared::components::ui::{Button, Input, Select, Textarea};
use contracts::domain::supplier::{Supplier, SupplierCategory};
use leptos::prelude::*;

/// Registration form for a new supplier. Submitting builds a draft record
/// and logs it; there is no backend to send it to.
#[component]
pub fn SupplierRegistration(
    /// Called after a successful submit or on cancel
    on_done: Callback<()>,
) -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (gstin, set_gstin) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (phone, set_phone) = signal(String::new());
    let (address, set_address) = signal(String::new());
    let (category, set_category) = signal(SupplierCategory::ALL[0].label().to_string());
    let (error, set_error) = signal::<Option<String>>(None);

    let category_options: Vec<(String, String)> = SupplierCategory::ALL
        .iter()
        .map(|c| (c.label().to_string(), c.label().to_string()))
        .collect();

    let handle_submit = move |_| {
        if name.get().trim().is_empty()
            || gstin.get().trim().is_empty()
            || email.get().trim().is_empty()
        {
            set_error.set(Some(
                "Name, GSTIN and email are required fields.".to_string(),
            ));
            return;
        }

        let picked = SupplierCategory::ALL
            .iter()
            .copied()
            .find(|c| c.label() == category.get())
            .unwrap_or(SupplierCategory::Standard);

        let draft = Supplier::new_draft(
            name.get().trim().to_string(),
            gstin.get().trim().to_string(),
            email.get().trim().to_string(),
            phone.get().trim().to_string(),
            address.get().trim().to_string(),
            picked,
        );
        log::info!("registered supplier draft {} ({})", draft.name, draft.id);
        set_error.set(None);
        on_done.run(());
    };

    view! {
        <form class="form" on:submit=move |ev| ev.prevent_default()>
            {move || {
                error
                    .get()
                    .map(|message| view! { <div class="form__error">{message}</div> })
            }}
            <div class="form__row">
                <Input
                    label="Company Name"
                    value=name
                    required=true
                    on_input=Callback::new(move |v| set_name.set(v))
                />
                <Input
                    label="GSTIN"
                    value=gstin
                    required=true
                    placeholder="29ABCDE1234F1Z5"
                    on_input=Callback::new(move |v| set_gstin.set(v))
                />
            </div>
            <div class="form__row">
                <Input
                    label="Email"
                    input_type="email"
                    value=email
                    required=true
                    on_input=Callback::new(move |v| set_email.set(v))
                />
                <Input
                    label="Phone"
                    input_type="tel"
                    value=phone
                    on_input=Callback::new(move |v| set_phone.set(v))
                />
            </div>
            <Textarea
                label="Address"
                value=address
                on_input=Callback::new(move |v| set_address.set(v))
            />
            <Select
                label="Category"
                value=category
                options=category_options
                on_change=Callback::new(move |v| set_category.set(v))
            />
            <div class="form__actions">
                <Button variant="secondary" on_click=Callback::new(move |_| on_done.run(()))>
                    "Cancel"
                </Button>
                <Button button_type="submit" on_click=Callback::new(handle_submit)>
                    "Register"
                </Button>
            </div>
        </form>
    }
}
