pub mod sidebar;

use leptos::prelude::*;

use self::sidebar::Sidebar;
use crate::shared::notify::NotificationHost;

/// Application shell: sidebar plus main content region, with the
/// notification overlay on top.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-shell">
            <Sidebar />
            <main class="app-shell__content">{children()}</main>
            <NotificationHost />
        </div>
    }
}
