use contracts::dashboards::d100_sales_report::dto::SalesReport;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::dashboards::d100_sales_report::api;
use crate::shared::components::stat_card::StatCard;
use crate::shared::icons::icon;
use crate::shared::notify::use_notifications;
use crate::system::session::use_session;

/// Sales figures by product. Numbers only; there is deliberately no
/// chart here.
#[component]
pub fn SalesDashboard() -> impl IntoView {
    let notify = use_notifications();
    let (session, _) = use_session();
    let (report, set_report) = signal::<Option<SalesReport>>(None);

    let fetch = move || {
        let session = session.get();
        spawn_local(async move {
            match api::fetch_sales_report(&session).await {
                Ok(data) => set_report.set(Some(data)),
                Err(e) => {
                    log::error!("Error fetching sales data: {}", e);
                    notify.error("Failed to fetch sales data.");
                }
            }
        });
    };

    fetch();

    let total_sales = Signal::derive(move || {
        report
            .get()
            .map(|r| format!("${:.2}", r.total_sales))
            .unwrap_or_else(|| "—".to_string())
    });
    let product_count = Signal::derive(move || {
        report
            .get()
            .map(|r| r.sales_data.len().to_string())
            .unwrap_or_else(|| "—".to_string())
    });

    view! {
        <div class="content">
            <div class="header">
                <h2>"Sales Dashboard"</h2>
                <div class="header__actions">
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        " Refresh"
                    </button>
                </div>
            </div>

            <div class="stat-card-row">
                <StatCard label="Total Sales" value=total_sales />
                <StatCard label="Products with Sales" value=product_count />
            </div>

            {move || match report.get() {
                Some(report) if !report.sales_data.is_empty() => view! {
                    <div class="table-container">
                        <table class="table__data table--striped">
                            <thead class="table__head">
                                <tr>
                                    <th class="table__header-cell">"Product"</th>
                                    <th class="table__header-cell">"Total Sales"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {report.sales_data.iter().map(|row| {
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{row.product_name.clone()}</td>
                                            <td class="table__cell">{format!("${:.2}", row.total_sales)}</td>
                                        </tr>
                                    }
                                }).collect_view()}
                            </tbody>
                        </table>
                    </div>
                }.into_any(),
                Some(_) => view! { <p>"No sales data available"</p> }.into_any(),
                None => view! { <div class="loading">"Loading..."</div> }.into_any(),
            }}
        </div>
    }
}
