//! Property selector component

use crate::api::DashboardApi;
use crate::components::revenue_summary::RevenueSummary;
use crate::loader::PropertyLoader;
use crate::selection::{LoadPhase, SelectOption, SelectorState};
use crate::tenant::default_store;
use leptos::prelude::*;
use leptos::task::spawn_local;
use tokio_util::sync::CancellationToken;

/// Loads the user's properties once on mount and lets them pick one
#[component]
pub fn PropertySelector() -> impl IntoView {
    let state = RwSignal::new(SelectorState::default());

    let cancel = CancellationToken::new();
    on_cleanup({
        let cancel = cancel.clone();
        move || cancel.cancel()
    });

    let loader = PropertyLoader::new(DashboardApi::for_page_origin(), default_store());
    spawn_local(async move {
        if let Some(outcome) = loader.load(&cancel).await {
            state.update(|s| s.apply(outcome));
        }
    });

    // Selection changes only touch `selected`; phase and options stay put
    let phase = Memo::new(move |_| state.with(SelectorState::phase));
    let options = Memo::new(move |_| state.with(SelectorState::options));
    let selected = Memo::new(move |_| state.with(|s| s.selected().map(str::to_string)));

    move || match phase.get() {
        LoadPhase::Loading => view! { <div style="padding: 1rem;">"Loading..."</div> }.into_any(),
        LoadPhase::LoadedEmpty => {
            view! { <div style="padding: 1rem;">"No properties found"</div> }.into_any()
        }
        LoadPhase::LoadedWithData => view! {
            <section style="border: 1px solid #dee2e6; border-radius: 0.5rem; padding: 1rem;">
                <div style="display: flex; justify-content: space-between; align-items: flex-start; gap: 1rem; margin-bottom: 1.5rem;">
                    <div>
                        <h2>"Revenue Overview"</h2>
                        <p style="color: #6c757d;">"Monthly performance insights for your properties"</p>
                    </div>
                    <label style="display: flex; flex-direction: column; font-size: 0.75rem;">
                        "Select Property"
                        <select
                            style="min-width: 200px; padding: 0.5rem;"
                            prop:value=move || selected.get().unwrap_or_default()
                            on:change=move |ev| {
                                let id = event_target_value(&ev);
                                state.update(|s| {
                                    s.select(&id);
                                });
                            }
                        >
                            <For
                                each=move || options.get()
                                key=|opt| opt.key.clone()
                                children=move |opt: SelectOption| {
                                    let value = opt.value.clone();
                                    view! {
                                        <option
                                            value=opt.value
                                            selected=move || selected.get().as_deref() == Some(value.as_str())
                                        >
                                            {opt.label}
                                        </option>
                                    }
                                }
                            />
                        </select>
                    </label>
                </div>
                {move || selected.get().map(|id| view! { <RevenueSummary property_id=id /> })}
            </section>
        }
        .into_any(),
    }
}
