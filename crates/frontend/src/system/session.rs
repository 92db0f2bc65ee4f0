//! Explicit session object for authenticated requests.
//!
//! Every API function takes `&Session` and sources the bearer token from
//! it at call time; no component reads ambient auth state and no token is
//! ever embedded in code. The session is restored from localStorage on
//! mount.

use contracts::domain::product::DEFAULT_USER_ID;
use leptos::prelude::*;

const TOKEN_KEY: &str = "inventory_access_token";
const USER_KEY: &str = "inventory_user_id";

#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub access_token: Option<String>,
    pub user_id: i64,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            access_token: None,
            user_id: DEFAULT_USER_ID,
        }
    }
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Read the persisted session, falling back to the anonymous default.
pub fn load_session() -> Session {
    let Some(storage) = storage() else {
        return Session::default();
    };
    let access_token = storage.get_item(TOKEN_KEY).ok().flatten();
    let user_id = storage
        .get_item(USER_KEY)
        .ok()
        .flatten()
        .and_then(|v| v.parse::<i64>().ok())
        .unwrap_or(DEFAULT_USER_ID);
    Session {
        access_token,
        user_id,
    }
}

/// Persist the session so a reload keeps the credential.
pub fn save_session(session: &Session) {
    let Some(storage) = storage() else {
        return;
    };
    match session.access_token.as_deref() {
        Some(token) => _ = storage.set_item(TOKEN_KEY, token),
        None => _ = storage.remove_item(TOKEN_KEY),
    }
    _ = storage.set_item(USER_KEY, &session.user_id.to_string());
}

/// Session context provider component
#[component]
pub fn SessionProvider(children: ChildrenFn) -> impl IntoView {
    let (session, set_session) = signal(load_session());

    provide_context(session);
    provide_context(set_session);

    children()
}

/// Hook to access the current session
pub fn use_session() -> (ReadSignal<Session>, WriteSignal<Session>) {
    let session =
        use_context::<ReadSignal<Session>>().expect("SessionProvider not found in component tree");
    let set_session =
        use_context::<WriteSignal<Session>>().expect("SessionProvider not found in component tree");

    (session, set_session)
}
