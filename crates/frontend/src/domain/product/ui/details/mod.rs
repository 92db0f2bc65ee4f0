pub mod view;
pub mod view_model;

use contracts::domain::product::Product;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::domain::product::api;
use crate::shared::icons::icon;
use crate::shared::notify::use_notifications;
use crate::system::session::use_session;

/// Read-only product view with edit/delete actions.
#[component]
pub fn ProductDetailsPage() -> impl IntoView {
    let notify = use_notifications();
    let (session, _) = use_session();
    let navigate = use_navigate();
    let params = use_params_map();
    let id = params.with_untracked(|p| p.get("id").and_then(|v| v.parse::<i64>().ok()));

    let navigate_to_edit = navigate.clone();

    let (product, set_product) = signal::<Option<Product>>(None);
    let (is_loading, set_is_loading) = signal(id.is_some());

    if let Some(product_id) = id {
        let session = session.get_untracked();
        spawn_local(async move {
            match api::fetch_product(&session, product_id).await {
                Ok(item) => set_product.set(Some(item)),
                Err(e) => log::error!("Error fetching product details: {}", e),
            }
            set_is_loading.set(false);
        });
    }

    let handle_delete = move |_| {
        let Some(product_id) = id else {
            return;
        };
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message("Are you sure you want to delete this product?")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        let session = session.get();
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::delete_product(&session, product_id).await {
                Ok(()) => {
                    notify.success("Product deleted successfully!");
                    navigate("/products", Default::default());
                }
                Err(e) => {
                    log::error!("Error deleting product: {}", e);
                    notify.error("There was an error deleting the product.");
                }
            }
        });
    };

    view! {
        <div class="content content--narrow">
            {move || if is_loading.get() {
                view! { <div class="loading">"Loading..."</div> }.into_any()
            } else if let Some(product) = product.get() {
                let edit_href = format!("/edit-product/{}", product.id);
                let rating = product
                    .rating
                    .map(|r| r.to_string())
                    .unwrap_or_else(|| "N/A".to_string());
                let on_delete = handle_delete.clone();
                let on_edit = {
                    let navigate = navigate_to_edit.clone();
                    move |_| navigate(&edit_href, Default::default())
                };
                view! {
                    <div class="card">
                        <div class="card__body">
                            <h2 class="section-title">{product.name.clone()}</h2>
                            <p><strong>"ID: "</strong>{product.id}</p>
                            <p><strong>"Price: "</strong>{format!("${:.2}", product.price)}</p>
                            <p><strong>"Rating: "</strong>{rating}</p>
                            <p><strong>"Stock Quantity: "</strong>{product.stock_quantity}</p>

                            <div class="header__actions">
                                <button class="button button--primary" on:click=on_edit>
                                    {icon("edit")}
                                    " Edit Product"
                                </button>
                                <button class="button button--danger" on:click=on_delete>
                                    {icon("delete")}
                                    " Delete Product"
                                </button>
                            </div>
                        </div>
                    </div>
                }.into_any()
            } else {
                view! { <p>"Product not found."</p> }.into_any()
            }}
        </div>
    }
}
