//! Revenue summary panel for one property

use crate::api::{DashboardApi, RevenueSummaryResponse};
use leptos::prelude::*;

/// Fetches /dashboard/summary for `property_id` and shows the totals
#[component]
pub fn RevenueSummary(property_id: String) -> impl IntoView {
    let api = DashboardApi::for_page_origin();
    let summary = LocalResource::new(move || {
        let api = api.clone();
        let property_id = property_id.clone();
        async move {
            api.fetch_summary(&property_id).await.map_err(|e| {
                tracing::error!("Failed to load summary for {}: {}", property_id, e);
                e.to_string()
            })
        }
    });

    view! {
        <div>
            <Suspense fallback=move || view! { <p>"Loading summary..."</p> }>
                {move || {
                    summary.get().map(|result| match result {
                        Ok(data) => summary_table(data).into_any(),
                        Err(_) => view! { <p>"Summary unavailable"</p> }.into_any(),
                    })
                }}
            </Suspense>
        </div>
    }
}

fn summary_table(data: RevenueSummaryResponse) -> impl IntoView {
    let total = format!("{:.2} {}", data.total_revenue, data.currency);
    view! {
        <table style="width: 100%; border-collapse: collapse;">
            <tbody>
                <tr style="border-bottom: 1px solid #dee2e6;">
                    <th style="padding: 0.5rem; text-align: left;">"Total Revenue"</th>
                    <td style="padding: 0.5rem;">{total}</td>
                </tr>
                <tr style="border-bottom: 1px solid #dee2e6;">
                    <th style="padding: 0.5rem; text-align: left;">"Reservations"</th>
                    <td style="padding: 0.5rem;">{data.reservations_count}</td>
                </tr>
            </tbody>
        </table>
    }
}
