use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// The thirteen top-level views of the dashboard. Exactly one is active
/// at a time; there is no nested routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKey {
    Dashboard,
    Suppliers,
    Alerts,
    Compliance,
    Documents,
    Workflows,
    Search,
    Audit,
    Notifications,
    Reports,
    Users,
    Analytics,
    Settings,
}

impl ViewKey {
    pub const ALL: [ViewKey; 13] = [
        ViewKey::Dashboard,
        ViewKey::Suppliers,
        ViewKey::Alerts,
        ViewKey::Compliance,
        ViewKey::Documents,
        ViewKey::Workflows,
        ViewKey::Search,
        ViewKey::Audit,
        ViewKey::Notifications,
        ViewKey::Reports,
        ViewKey::Users,
        ViewKey::Analytics,
        ViewKey::Settings,
    ];

    /// Stable key used in the URL query string and as DOM ids.
    pub fn key(&self) -> &'static str {
        match self {
            ViewKey::Dashboard => "dashboard",
            ViewKey::Suppliers => "suppliers",
            ViewKey::Alerts => "alerts",
            ViewKey::Compliance => "compliance",
            ViewKey::Documents => "documents",
            ViewKey::Workflows => "workflows",
            ViewKey::Search => "search",
            ViewKey::Audit => "audit",
            ViewKey::Notifications => "notifications",
            ViewKey::Reports => "reports",
            ViewKey::Users => "users",
            ViewKey::Analytics => "analytics",
            ViewKey::Settings => "settings",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ViewKey::Dashboard => "Dashboard",
            ViewKey::Suppliers => "Suppliers",
            ViewKey::Alerts => "Alerts",
            ViewKey::Compliance => "Compliance",
            ViewKey::Documents => "Documents",
            ViewKey::Workflows => "Workflows",
            ViewKey::Search => "Advanced Search",
            ViewKey::Audit => "Audit Trail",
            ViewKey::Notifications => "Notifications",
            ViewKey::Reports => "Reports",
            ViewKey::Users => "Users",
            ViewKey::Analytics => "Analytics",
            ViewKey::Settings => "Settings",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            ViewKey::Dashboard => "dashboard",
            ViewKey::Suppliers => "suppliers",
            ViewKey::Alerts => "warning",
            ViewKey::Compliance => "shield",
            ViewKey::Documents => "documents",
            ViewKey::Workflows => "workflows",
            ViewKey::Search => "search",
            ViewKey::Audit => "audit",
            ViewKey::Notifications => "bell",
            ViewKey::Reports => "reports",
            ViewKey::Users => "users",
            ViewKey::Analytics => "chart",
            ViewKey::Settings => "settings",
        }
    }

    pub fn from_key(key: &str) -> Option<ViewKey> {
        ViewKey::ALL.iter().copied().find(|view| view.key() == key)
    }
}

#[derive(Clone, Copy)]
pub struct AppShellContext {
    pub active: RwSignal<ViewKey>,
    pub sidebar_open: RwSignal<bool>,
    pub form_states: RwSignal<HashMap<String, serde_json::Value>>,
}

impl AppShellContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(ViewKey::Dashboard),
            sidebar_open: RwSignal::new(true),
            form_states: RwSignal::new(HashMap::new()),
        }
    }

    pub fn activate(&self, view: ViewKey) {
        log::debug!("activate view '{}'", view.key());
        self.active.set(view);
    }

    pub fn toggle_sidebar(&self) {
        self.sidebar_open.update(|open| *open = !*open);
    }

    /// Per-view scratch state that survives switching views.
    pub fn get_form_state(&self, form_key: &str) -> Option<serde_json::Value> {
        self.form_states
            .with_untracked(|states| states.get(form_key).cloned())
    }

    pub fn set_form_state(&self, form_key: String, state: serde_json::Value) {
        self.form_states.update(|states| {
            states.insert(form_key, state);
        });
    }

    /// Reads `?view=...` on startup, then mirrors the active view back into
    /// the URL with replaceState so reloads land on the same view.
    pub fn init_url_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(view) = params.get("view").and_then(|key| ViewKey::from_key(key)) {
            self.active.set(view);
        }

        let this = *self;
        Effect::new(move |_| {
            let view = this.active.get();
            let query_string = serde_qs::to_string(&HashMap::from([(
                "view".to_string(),
                view.key().to_string(),
            )]))
            .unwrap_or_default();
            let new_url = format!("?{}", query_string);

            // Use untracked window access to avoid creating reactive dependencies
            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_view_round_trips_through_its_key() {
        for view in ViewKey::ALL {
            assert_eq!(ViewKey::from_key(view.key()), Some(view));
        }
    }

    #[test]
    fn unknown_key_maps_to_none() {
        assert_eq!(ViewKey::from_key("inventory"), None);
        assert_eq!(ViewKey::from_key(""), None);
    }
}
