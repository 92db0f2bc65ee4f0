use contracts::domain::notification::Notification;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::notification::api;
use crate::shared::icons::icon;
use crate::shared::notify::use_notifications;
use crate::system::session::use_session;

fn format_timestamp(dt: chrono::DateTime<chrono::Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M:%S").to_string()
}

#[component]
pub fn Notifications() -> impl IntoView {
    let notify = use_notifications();
    let (session, _) = use_session();
    let (notifications, set_notifications) = signal::<Vec<Notification>>(Vec::new());

    let fetch = move || {
        let session = session.get();
        spawn_local(async move {
            match api::fetch_notifications(&session).await {
                Ok(items) => set_notifications.set(items),
                Err(e) => {
                    log::error!("Error fetching notifications: {}", e);
                    notify.error("Failed to fetch notifications.");
                }
            }
        });
    };

    let handle_mark_as_read = move |id: i64| {
        let session = session.get();
        spawn_local(async move {
            match api::mark_as_read(&session, id).await {
                Ok(()) => fetch(),
                Err(e) => {
                    log::error!("Error marking notification as read: {}", e);
                    notify.error("Failed to mark notification as read.");
                }
            }
        });
    };

    fetch();

    view! {
        <div class="content content--narrow">
            <div class="header">
                <h2>"Notifications"</h2>
                <div class="header__actions">
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        " Refresh"
                    </button>
                </div>
            </div>

            <ul class="notification-list">
                {move || notifications.get().into_iter().map(|notification| {
                    let id = notification.id;
                    view! {
                        <li
                            class="notification-list__item"
                            class:notification-list__item--read=notification.is_read
                        >
                            <span class="notification-list__message">
                                {notification.message.clone()}
                                " - "
                                {format_timestamp(notification.created_at)}
                            </span>
                            <Show when=move || !notification.is_read>
                                <button
                                    class="button button--secondary"
                                    on:click=move |_| handle_mark_as_read(id)
                                >
                                    "Mark as read"
                                </button>
                            </Show>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </div>
    }
}
