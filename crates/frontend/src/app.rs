use crate::system::settings::ui::page::SettingsPage;
use leptos::prelude::*;
use leptos_router::components::Router;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <SettingsPage />
        </Router>
    }
}
