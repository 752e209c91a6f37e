use crate::features::auth::state::use_auth;
use crate::routes::NotFoundContent;
use leptos::prelude::*;

/// Renders the children only for an authenticated session; anonymous
/// visitors see the not-found content. UX-only guard; real access control
/// must live on the backend.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();

    view! {
        <Show
            when=move || auth.is_authenticated.get()
            fallback=|| view! { <NotFoundContent /> }
        >
            {children()}
        </Show>
    }
}

/// Renders the children only for an admin session.
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();

    view! {
        <Show
            when=move || auth.is_admin.get()
            fallback=|| view! { <NotFoundContent /> }
        >
            {children()}
        </Show>
    }
}
