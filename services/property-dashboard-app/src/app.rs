//! Main App component

use crate::components::property_selector::PropertySelector;
use leptos::prelude::*;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <main style="font-family: system-ui, sans-serif; max-width: 1280px; margin: 0 auto; padding: 1rem;">
            <h1>"Property Management Dashboard"</h1>
            <PropertySelector />
        </main>
    }
}
