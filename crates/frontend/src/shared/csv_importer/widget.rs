use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use super::engine::{import_rows, ImportOutcome};
use super::parser::{parse_rows, read_text_from_file};
use crate::domain::product::api as product_api;
use crate::shared::icons::icon;
use crate::shared::notify::use_notifications;
use crate::system::session::{use_session, Session};

/// File-picker control for the bulk import.
///
/// On selection the file is parsed and its rows submitted one at a time;
/// once started the run goes to completion. Afterwards one aggregated
/// error notification and/or one success notification is shown and
/// `on_done` fires so the host can refresh its list, regardless of
/// outcome.
#[component]
pub fn CsvImporter(
    /// Invoked after every run, successful or not
    on_done: Callback<()>,
) -> impl IntoView {
    let notify = use_notifications();
    let (session, _) = use_session();
    let (is_importing, set_is_importing) = signal(false);

    let handle_file_select = move |ev: web_sys::Event| {
        if is_importing.get() {
            return;
        }

        let input = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());
        let Some(input) = input else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };

        // Clear the input so the same file can be re-selected later
        input.set_value("");

        let session = session.get();
        set_is_importing.set(true);
        spawn_local(async move {
            match run_import(file, &session).await {
                Ok(outcome) => {
                    if !outcome.errors.is_empty() {
                        notify.error(format!("Validation Errors:\n{}", outcome.errors.join("\n")));
                    }
                    if outcome.success_count > 0 {
                        notify.success(format!(
                            "{} products imported successfully!",
                            outcome.success_count
                        ));
                    }
                }
                Err(e) => notify.error(format!("Failed to import file: {}", e)),
            }
            set_is_importing.set(false);
            on_done.run(());
        });
    };

    view! {
        <label class="button button--secondary" for="csv-import-input">
            {icon("upload")}
            {move || if is_importing.get() { " Importing..." } else { " Upload CSV" }}
        </label>
        <input
            id="csv-import-input"
            type="file"
            accept=".csv"
            class="hidden"
            on:change=handle_file_select
            prop:disabled=move || is_importing.get()
        />
    }
}

async fn run_import(file: web_sys::File, session: &Session) -> Result<ImportOutcome, String> {
    let content = read_text_from_file(file).await?;
    let rows = parse_rows(&content)?;

    let outcome = import_rows(rows, |draft| {
        let session = session.clone();
        async move {
            product_api::create_product(&session, &draft)
                .await
                .map(|_| ())
        }
    })
    .await;

    Ok(outcome)
}
