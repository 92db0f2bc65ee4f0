pub mod state;

use contracts::domain::product::Product;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use self::state::{create_state, matches_filters};
use crate::domain::product::api;
use crate::shared::csv_importer::widget::CsvImporter;
use crate::shared::export::export_to_csv;
use crate::shared::icons::icon;
use crate::shared::notify::use_notifications;
use crate::system::session::use_session;

#[component]
pub fn ProductsList() -> impl IntoView {
    let notify = use_notifications();
    let (session, _) = use_session();
    let state = create_state();
    let (products, set_products) = signal::<Vec<Product>>(Vec::new());

    let fetch = move || {
        let session = session.get();
        spawn_local(async move {
            match api::fetch_products(&session).await {
                Ok(items) => {
                    set_products.set(items);
                    state.update(|s| s.is_loaded = true);
                }
                Err(e) => {
                    // Keep the last known rows on a failed fetch
                    log::error!("Error fetching products: {}", e);
                    notify.error("Failed to fetch products.");
                }
            }
        });
    };

    let handle_export = move |_| match export_to_csv(&products.get(), "products.csv") {
        Ok(()) => notify.success("Exported to CSV successfully!"),
        Err(e) => notify.error(format!("Export failed: {}", e)),
    };

    let filtered_products = move || {
        let s = state.get();
        products
            .get()
            .into_iter()
            .filter(|p| matches_filters(p, &s))
            .collect::<Vec<_>>()
    };

    fetch();

    view! {
        <div class="content">
            <div class="header">
                <h2>"Products"</h2>
                <div class="header__actions">
                    <button class="button button--primary" on:click=handle_export>
                        {icon("download")}
                        " Export to CSV"
                    </button>
                    <CsvImporter on_done=Callback::new(move |_| fetch()) />
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        " Refresh"
                    </button>
                </div>
            </div>

            <div class="filter-panel">
                <input
                    type="text"
                    class="form__input"
                    placeholder="Search products..."
                    prop:value=move || state.get().search
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| s.search = value);
                    }
                />
                <input
                    type="number"
                    class="form__input"
                    placeholder="Min Price"
                    prop:value=move || state.get().min_price
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| s.min_price = value);
                    }
                />
                <input
                    type="number"
                    class="form__input"
                    placeholder="Max Price"
                    prop:value=move || state.get().max_price
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| s.max_price = value);
                    }
                />
                <input
                    type="number"
                    class="form__input"
                    placeholder="Min Rating"
                    prop:value=move || state.get().min_rating
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| s.min_rating = value);
                    }
                />
            </div>

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"ID"</th>
                            <th class="table__header-cell">"Product Name"</th>
                            <th class="table__header-cell">"Price"</th>
                            <th class="table__header-cell">"Rating"</th>
                            <th class="table__header-cell">"Stock Quantity"</th>
                            <th class="table__header-cell">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || filtered_products().into_iter().map(|product| {
                            let details_href = format!("/products/{}", product.id);
                            let details_href_action = details_href.clone();
                            let edit_href = format!("/edit-product/{}", product.id);
                            let rating = product
                                .rating
                                .map(|r| r.to_string())
                                .unwrap_or_else(|| "N/A".to_string());
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{product.id}</td>
                                    <td class="table__cell">
                                        <A href=details_href>{product.name.clone()}</A>
                                    </td>
                                    <td class="table__cell">{format!("${:.2}", product.price)}</td>
                                    <td class="table__cell">{rating}</td>
                                    <td class="table__cell">{product.stock_quantity}</td>
                                    <td class="table__cell">
                                        <A href=details_href_action>"View"</A>
                                        " | "
                                        <A href=edit_href>"Edit"</A>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
