use crate::layout::context::AppShellContext;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{Badge, Button, Input, Select};
use leptos::prelude::*;

/// Application settings. "Save" stashes a snapshot in the shell context so
/// the values survive switching views, but nothing persists across reloads.
#[component]
pub fn SettingsView() -> impl IntoView {
    let ctx = use_context::<AppShellContext>().expect("AppShellContext context not found");
    let saved = ctx.get_form_state("settings");

    let initial_str = |pointer: &str, default: &str| {
        saved
            .as_ref()
            .and_then(|v| v.pointer(pointer))
            .and_then(|v| v.as_str())
            .unwrap_or(default)
            .to_string()
    };
    let initial_bool = |pointer: &str, default: bool| {
        saved
            .as_ref()
            .and_then(|v| v.pointer(pointer))
            .and_then(|v| v.as_bool())
            .unwrap_or(default)
    };

    let (org_name, set_org_name) =
        signal(initial_str("/organization/name", "Acme Compliance Ltd"));
    let (org_email, set_org_email) =
        signal(initial_str("/organization/email", "compliance@acme.example"));
    let (timezone, set_timezone) = signal(initial_str("/organization/timezone", "UTC"));

    let (email_alerts, set_email_alerts) =
        signal(initial_bool("/notifications/emailAlerts", true));
    let (sms_alerts, set_sms_alerts) = signal(initial_bool("/notifications/smsAlerts", false));
    let (weekly_digest, set_weekly_digest) =
        signal(initial_bool("/notifications/weeklyDigest", true));

    let (require_2fa, set_require_2fa) = signal(initial_bool("/security/require2fa", true));
    let (session_timeout, set_session_timeout) =
        signal(initial_str("/security/sessionTimeoutMinutes", "30"));

    let timezone_options = vec![
        ("UTC".to_string(), "UTC".to_string()),
        ("Asia/Kolkata".to_string(), "Asia/Kolkata".to_string()),
        ("Europe/London".to_string(), "Europe/London".to_string()),
        ("America/New_York".to_string(), "America/New York".to_string()),
    ];

    let timeout_options = vec![
        ("15".to_string(), "15 minutes".to_string()),
        ("30".to_string(), "30 minutes".to_string()),
        ("60".to_string(), "1 hour".to_string()),
        ("240".to_string(), "4 hours".to_string()),
    ];

    let integrations = vec![
        ("GST Registry", "Connected"),
        ("Email Gateway", "Connected"),
        ("SMS Gateway", "Not Connected"),
        ("ERP Export", "Not Connected"),
    ];

    let handle_save = move |_| {
        let snapshot = serde_json::json!({
            "organization": {
                "name": org_name.get(),
                "email": org_email.get(),
                "timezone": timezone.get(),
            },
            "notifications": {
                "emailAlerts": email_alerts.get(),
                "smsAlerts": sms_alerts.get(),
                "weeklyDigest": weekly_digest.get(),
            },
            "security": {
                "require2fa": require_2fa.get(),
                "sessionTimeoutMinutes": session_timeout.get(),
            },
        });
        log::info!("settings saved: {}", snapshot);
        ctx.set_form_state("settings".to_string(), snapshot);
    };

    let toggle = move |label: &'static str,
                       value: ReadSignal<bool>,
                       setter: WriteSignal<bool>| {
        view! {
            <label class="toggle">
                <input
                    type="checkbox"
                    class="toggle__checkbox"
                    prop:checked=move || value.get()
                    on:change=move |ev| setter.set(event_target_checked(&ev))
                />
                <span class="toggle__label">{label}</span>
            </label>
        }
    };

    view! {
        <div class="page">
            <PageHeader title="Settings" subtitle="Organization and application preferences">
                <Button on_click=Callback::new(handle_save)>"Save Changes"</Button>
            </PageHeader>

            <div class="settings-grid">
                <section class="panel">
                    <h2 class="panel__title">"Organization"</h2>
                    <Input
                        label="Organization Name"
                        value=org_name
                        on_input=Callback::new(move |v| set_org_name.set(v))
                    />
                    <Input
                        label="Contact Email"
                        input_type="email"
                        value=org_email
                        on_input=Callback::new(move |v| set_org_email.set(v))
                    />
                    <Select
                        label="Timezone"
                        value=timezone
                        options=timezone_options
                        on_change=Callback::new(move |v| set_timezone.set(v))
                    />
                </section>

                <section class="panel">
                    <h2 class="panel__title">"Notifications"</h2>
                    {toggle("Email alerts", email_alerts, set_email_alerts)}
                    {toggle("SMS alerts", sms_alerts, set_sms_alerts)}
                    {toggle("Weekly digest", weekly_digest, set_weekly_digest)}
                </section>

                <section class="panel">
                    <h2 class="panel__title">"Security"</h2>
                    {toggle("Require two-factor authentication", require_2fa, set_require_2fa)}
                    <Select
                        label="Session Timeout"
                        value=session_timeout
                        options=timeout_options
                        on_change=Callback::new(move |v| set_session_timeout.set(v))
                    />
                </section>

                <section class="panel">
                    <h2 class="panel__title">"Integrations"</h2>
                    <ul class="integration-list">
                        {integrations
                            .into_iter()
                            .map(|(name, state)| {
                                let connected = state == "Connected";
                                view! {
                                    <li class="integration-list__item">
                                        <span class="integration-list__name">{name}</span>
                                        <Badge variant=if connected { "success" } else { "neutral" }>
                                            {state}
                                        </Badge>
                                        <Button
                                            size="sm"
                                            variant="secondary"
                                            on_click=Callback::new(move |_| {
                                                log::info!("integration '{}' configuration requested", name);
                                            })
                                        >
                                            {if connected { "Configure" } else { "Connect" }}
                                        </Button>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </section>
            </div>
        </div>
    }
}
