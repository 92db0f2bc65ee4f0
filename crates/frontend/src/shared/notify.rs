//! Transient user notifications.
//!
//! Context-provided service; components call `success`/`error` and the
//! `NotificationHost` overlay renders the stack. Notices dismiss
//! themselves after a few seconds or on click.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::icons::icon;

const DISMISS_AFTER_MS: u32 = 6000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub text: String,
}

#[derive(Clone, Copy)]
pub struct NotificationService {
    notices: RwSignal<Vec<Notice>>,
    next_id: RwSignal<u64>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            notices: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
        }
    }

    pub fn notices(&self) -> ReadSignal<Vec<Notice>> {
        self.notices.read_only()
    }

    pub fn success(&self, text: impl Into<String>) {
        self.push(NoticeKind::Success, text.into());
    }

    pub fn error(&self, text: impl Into<String>) {
        self.push(NoticeKind::Error, text.into());
    }

    pub fn dismiss(&self, id: u64) {
        self.notices.update(|notices| notices.retain(|n| n.id != id));
    }

    fn push(&self, kind: NoticeKind, text: String) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.notices.update(|notices| notices.push(Notice { id, kind, text }));

        let notices = self.notices;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(DISMISS_AFTER_MS).await;
            notices.update(|n| n.retain(|x| x.id != id));
        });
    }
}

/// Hook to access the notification service
pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>().expect("NotificationService not found in context")
}

#[component]
pub fn NotificationHost() -> impl IntoView {
    let service = use_notifications();
    let notices = service.notices();

    view! {
        <div class="notification-stack">
            {move || notices.get().into_iter().map(|notice| {
                let box_class = match notice.kind {
                    NoticeKind::Success => "info-box notification-stack__item",
                    NoticeKind::Error => "warning-box warning-box--error notification-stack__item",
                };
                let badge = match notice.kind {
                    NoticeKind::Success => "✓",
                    NoticeKind::Error => "⚠",
                };
                let id = notice.id;
                view! {
                    <div class=box_class>
                        <span class="warning-box__icon">{badge}</span>
                        // Aggregated import errors arrive as one
                        // newline-separated message
                        <span class="warning-box__text" style="white-space: pre-line;">{notice.text}</span>
                        <button
                            class="notification-stack__close"
                            on:click=move |_| service.dismiss(id)
                        >
                            {icon("x")}
                        </button>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
