use std::rc::Rc;

use contracts::domain::product::ProductDto;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::product::api;
use crate::system::session::Session;

/// ViewModel for the product add/edit form
#[derive(Clone)]
pub struct ProductFormViewModel {
    pub form: RwSignal<ProductDto>,
    pub error: RwSignal<Option<String>>,
    pub is_saving: RwSignal<bool>,
}

impl ProductFormViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(ProductDto::default()),
            error: RwSignal::new(None),
            is_saving: RwSignal::new(false),
        }
    }

    /// Load form data from the server when editing an existing product
    pub fn load_if_needed(&self, session: Session, id: Option<i64>) {
        let Some(existing_id) = id else {
            return;
        };
        let form = self.form;
        let error = self.error;
        spawn_local(async move {
            match api::fetch_product(&session, existing_id).await {
                Ok(product) => form.set(ProductDto::from_product(&product)),
                Err(e) => error.set(Some(format!("Error fetching product details: {}", e))),
            }
        });
    }

    /// Save the form: create when `id` is absent, update otherwise
    pub fn save_command(&self, session: Session, on_saved: Rc<dyn Fn()>) {
        let current = self.form.get();

        if let Err(msg) = current.validate() {
            self.error.set(Some(msg));
            return;
        }

        let error = self.error;
        let is_saving = self.is_saving;
        is_saving.set(true);
        spawn_local(async move {
            let result = match current.id {
                Some(id) => api::update_product(&session, id, &current).await.map(|_| ()),
                None => api::create_product(&session, &current).await.map(|_| ()),
            };
            match result {
                Ok(()) => on_saved(),
                Err(e) => error.set(Some(e)),
            }
            is_saving.set(false);
        });
    }
}
