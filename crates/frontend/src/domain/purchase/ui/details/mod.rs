use contracts::domain::purchase::PurchaseDto;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::purchase::api;
use crate::shared::notify::use_notifications;
use crate::system::session::use_session;

/// Record-purchase form.
#[component]
pub fn AddPurchase() -> impl IntoView {
    let notify = use_notifications();
    let (session, _) = use_session();

    let form = RwSignal::new(PurchaseDto::default());
    let (error, set_error) = signal::<Option<String>>(None);
    let (is_saving, set_is_saving) = signal(false);

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let current = form.get();
        if let Err(msg) = current.validate() {
            set_error.set(Some(msg));
            return;
        }

        let session = session.get();
        set_error.set(None);
        set_is_saving.set(true);
        spawn_local(async move {
            match api::create_purchase(&session, &current).await {
                Ok(_) => {
                    notify.success("Purchase recorded successfully!");
                    form.set(PurchaseDto::default());
                }
                Err(e) => {
                    log::error!("Error recording purchase: {}", e);
                    notify.error("Failed to record purchase.");
                }
            }
            set_is_saving.set(false);
        });
    };

    view! {
        <div class="content content--narrow">
            <div class="card">
                <div class="card__body">
                    <h2 class="section-title">"Record Purchase"</h2>

                    {move || error.get().map(|e| view! {
                        <div class="warning-box warning-box--error">
                            <span class="warning-box__icon">"⚠"</span>
                            <span class="warning-box__text">{e}</span>
                        </div>
                    })}

                    <form on:submit=handle_submit>
                        <div class="form__group">
                            <label class="form__label" for="purchase-product">"Product ID"</label>
                            <input
                                id="purchase-product"
                                type="number"
                                class="form__input"
                                min="1"
                                required=true
                                prop:value=move || {
                                    let id = form.get().product;
                                    if id > 0 { id.to_string() } else { String::new() }
                                }
                                on:input=move |ev| {
                                    let product = event_target_value(&ev).parse::<i64>().unwrap_or(0);
                                    form.update(|f| f.product = product);
                                }
                            />
                        </div>

                        <div class="form__group">
                            <label class="form__label" for="purchase-quantity">"Quantity"</label>
                            <input
                                id="purchase-quantity"
                                type="number"
                                class="form__input"
                                min="1"
                                required=true
                                prop:value=move || {
                                    let quantity = form.get().quantity;
                                    if quantity > 0 { quantity.to_string() } else { String::new() }
                                }
                                on:input=move |ev| {
                                    let quantity = event_target_value(&ev).parse::<u32>().unwrap_or(0);
                                    form.update(|f| f.quantity = quantity);
                                }
                            />
                        </div>

                        <div class="form__group">
                            <label class="form__label" for="purchase-unit-cost">"Unit Cost"</label>
                            <input
                                id="purchase-unit-cost"
                                type="number"
                                class="form__input"
                                min="0"
                                step="0.01"
                                required=true
                                prop:value=move || form.get().unit_cost.to_string()
                                on:input=move |ev| {
                                    if let Ok(unit_cost) = event_target_value(&ev).parse::<f64>() {
                                        form.update(|f| f.unit_cost = unit_cost);
                                    }
                                }
                            />
                        </div>

                        <button
                            type="submit"
                            class="button button--primary"
                            prop:disabled=move || is_saving.get()
                        >
                            {move || if is_saving.get() { "Saving..." } else { "Add Purchase" }}
                        </button>
                    </form>
                </div>
            </div>
        </div>
    }
}
