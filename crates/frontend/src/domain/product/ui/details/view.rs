use std::rc::Rc;

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use super::view_model::ProductFormViewModel;
use crate::shared::notify::use_notifications;
use crate::system::session::use_session;

/// Add/edit product form. Create mode when `id` is absent.
#[component]
pub fn ProductForm(#[prop(optional_no_strip)] id: Option<i64>) -> impl IntoView {
    let notify = use_notifications();
    let (session, _) = use_session();
    let navigate = use_navigate();
    let vm = ProductFormViewModel::new();

    vm.load_if_needed(session.get_untracked(), id);

    let is_edit = id.is_some();
    let title = if is_edit { "Edit Product" } else { "Add New Product" };

    let form = vm.form;
    let error = vm.error;
    let is_saving = vm.is_saving;

    let handle_submit = {
        let vm = vm.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();

            let on_saved: Rc<dyn Fn()> = {
                let navigate = navigate.clone();
                Rc::new(move || {
                    if is_edit {
                        notify.success("Product updated successfully!");
                        navigate("/products", Default::default());
                    } else {
                        notify.success("Product added successfully!");
                        form.set(Default::default());
                    }
                })
            };

            vm.save_command(session.get(), on_saved);
        }
    };

    view! {
        <div class="content content--narrow">
            <div class="card">
                <div class="card__body">
                    <h2 class="section-title">{title}</h2>

                    {move || error.get().map(|e| view! {
                        <div class="warning-box warning-box--error">
                            <span class="warning-box__icon">"⚠"</span>
                            <span class="warning-box__text">{e}</span>
                        </div>
                    })}

                    <form on:submit=handle_submit>
                        <div class="form__group">
                            <label class="form__label" for="product-name">"Product Name"</label>
                            <input
                                id="product-name"
                                type="text"
                                class="form__input"
                                required=true
                                prop:value=move || form.get().name
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    form.update(|f| f.name = value);
                                }
                            />
                        </div>

                        <div class="form__group">
                            <label class="form__label" for="product-price">"Price"</label>
                            <input
                                id="product-price"
                                type="number"
                                class="form__input"
                                min="0"
                                step="0.01"
                                required=true
                                prop:value=move || form.get().price.to_string()
                                on:input=move |ev| {
                                    if let Ok(value) = event_target_value(&ev).parse::<f64>() {
                                        form.update(|f| f.price = value);
                                    }
                                }
                            />
                        </div>

                        <div class="form__group">
                            <label class="form__label" for="product-rating">"Rating"</label>
                            <input
                                id="product-rating"
                                type="number"
                                class="form__input"
                                min="0"
                                max="5"
                                step="0.1"
                                prop:value=move || {
                                    form.get().rating.map(|r| r.to_string()).unwrap_or_default()
                                }
                                on:input=move |ev| {
                                    let rating = event_target_value(&ev).parse::<f64>().ok();
                                    form.update(|f| f.rating = rating);
                                }
                            />
                        </div>

                        <div class="form__group">
                            <label class="form__label" for="product-stock">"Stock Quantity"</label>
                            <input
                                id="product-stock"
                                type="number"
                                class="form__input"
                                min="0"
                                required=true
                                prop:value=move || form.get().stock_quantity.to_string()
                                on:input=move |ev| {
                                    if let Ok(value) = event_target_value(&ev).parse::<u32>() {
                                        form.update(|f| f.stock_quantity = value);
                                    }
                                }
                            />
                        </div>

                        <button
                            type="submit"
                            class="button button--primary"
                            prop:disabled=move || is_saving.get()
                        >
                            {move || match (is_saving.get(), is_edit) {
                                (true, _) => "Saving...",
                                (false, true) => "Update Product",
                                (false, false) => "Add Product",
                            }}
                        </button>
                    </form>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn AddProductPage() -> impl IntoView {
    view! { <ProductForm /> }
}

#[component]
pub fn EditProductPage() -> impl IntoView {
    let params = use_params_map();
    let id = params.with_untracked(|p| p.get("id").and_then(|v| v.parse::<i64>().ok()));

    view! { <ProductForm id=id /> }
}
