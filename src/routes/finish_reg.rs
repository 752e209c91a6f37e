//! Registration-completion page reached through the one-time link an
//! administrator hands out. The link carries `user_id` and `token` as query
//! parameters; the user picks a password and the backend starts a session.

use crate::app_lib::{dialog, nav};
use crate::components::AppShell;
use crate::components::ui::{Button, Spinner, classes};
use crate::features::auth::client;
use crate::features::auth::types::SetPasswordRequest;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

#[derive(Clone)]
struct FinishRegInput {
    user_id: String,
    token: String,
    request: SetPasswordRequest,
}

#[component]
pub fn FinishRegPage() -> impl IntoView {
    let query = use_query_map();
    let user_id = move || query.with(|map| map.get("user_id").unwrap_or_default());
    let token = move || query.with(|map| map.get("token").unwrap_or_default());
    let link_valid = move || !user_id().is_empty() && !token().is_empty();

    let (new_password, set_new_password) = signal(String::new());
    let (repeated_password, set_repeated_password) = signal(String::new());

    let finish_action = Action::new_local(|input: &FinishRegInput| {
        let input = input.clone();
        async move {
            client::finish_registration(&input.user_id, &input.token, &input.request).await
        }
    });

    Effect::new(move |_| {
        if let Some(result) = finish_action.value().get() {
            match result {
                Ok(()) => nav::redirect("/"),
                Err(err) => dialog::alert(&err.to_string()),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        match SetPasswordRequest::from_form(
            &new_password.get_untracked(),
            &repeated_password.get_untracked(),
        ) {
            Ok(request) => {
                finish_action.dispatch(FinishRegInput {
                    user_id: user_id(),
                    token: token(),
                    request,
                });
            }
            Err(err) => dialog::alert(&err.to_string()),
        }
    };

    view! {
        <AppShell>
            <Show
                when=link_valid
                fallback=|| view! {
                    <p class="text-center text-gray-500 dark:text-gray-400">
                        "This registration link is invalid."
                    </p>
                }
            >
                <form class="max-w-sm mx-auto" on:submit=on_submit>
                    <h1 class="text-2xl font-semibold text-gray-900 dark:text-white mb-6">
                        "Choose a password"
                    </h1>
                    <div class="mb-5">
                        <label class=classes::LABEL for="finish-password">"New password"</label>
                        <input
                            id="finish-password"
                            type="password"
                            class=classes::INPUT
                            autocomplete="new-password"
                            prop:value=new_password
                            on:input=move |event| set_new_password.set(event_target_value(&event))
                        />
                    </div>
                    <div class="mb-5">
                        <label class=classes::LABEL for="finish-repeated">"Repeat password"</label>
                        <input
                            id="finish-repeated"
                            type="password"
                            class=classes::INPUT
                            autocomplete="new-password"
                            prop:value=repeated_password
                            on:input=move |event| set_repeated_password.set(event_target_value(&event))
                        />
                    </div>
                    <Button button_type="submit" disabled=finish_action.pending()>
                        "Finish registration"
                    </Button>
                    {move || {
                        finish_action
                            .pending()
                            .get()
                            .then_some(view! { <div class="mt-4"><Spinner /></div> })
                    }}
                </form>
            </Show>
        </AppShell>
    }
}
