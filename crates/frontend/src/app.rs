use leptos::prelude::*;

use crate::routes::routes::AppRoutes;
use crate::shared::notify::NotificationService;
use crate::system::session::SessionProvider;

#[component]
pub fn App() -> impl IntoView {
    // Provide the notification service to the whole app via context.
    provide_context(NotificationService::new());

    view! {
        <SessionProvider>
            <AppRoutes />
        </SessionProvider>
    }
}
