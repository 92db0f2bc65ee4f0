use contracts::domain::purchase::Purchase;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::purchase::api;
use crate::shared::icons::icon;
use crate::shared::notify::use_notifications;
use crate::system::session::use_session;

fn format_timestamp(dt: chrono::DateTime<chrono::Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M:%S").to_string()
}

#[component]
pub fn PurchaseHistory() -> impl IntoView {
    let notify = use_notifications();
    let (session, _) = use_session();
    let (purchases, set_purchases) = signal::<Vec<Purchase>>(Vec::new());

    let fetch = move || {
        let session = session.get();
        spawn_local(async move {
            match api::fetch_purchases(&session).await {
                Ok(items) => set_purchases.set(items),
                Err(e) => {
                    log::error!("Error fetching purchase history: {}", e);
                    notify.error("Failed to fetch purchase history.");
                }
            }
        });
    };

    fetch();

    view! {
        <div class="content">
            <div class="header">
                <h2>"Purchase History"</h2>
                <div class="header__actions">
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        " Refresh"
                    </button>
                </div>
            </div>

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Product ID"</th>
                            <th class="table__header-cell">"Quantity"</th>
                            <th class="table__header-cell">"Unit Cost"</th>
                            <th class="table__header-cell">"Timestamp"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || purchases.get().into_iter().map(|purchase| {
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{purchase.product}</td>
                                    <td class="table__cell">{purchase.quantity}</td>
                                    <td class="table__cell">{format!("${:.2}", purchase.unit_cost)}</td>
                                    <td class="table__cell">{format_timestamp(purchase.timestamp)}</td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
