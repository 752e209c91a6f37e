//! Sign In and Sign Up dialogs owned by the app shell. Validation runs
//! before any request is built; a failed action surfaces exactly one alert
//! and a successful one reloads the page so the server re-injects the
//! session snapshot. Closing a dialog clears its fields.

use crate::app_lib::{dialog, nav};
use crate::components::ui::{Button, Modal, Spinner, classes};
use crate::features::auth::client;
use crate::features::auth::types::{LoginRequest, RegisterForm, RegisterRequest};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

#[component]
pub fn LoginDialog(open: RwSignal<bool>) -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let login_action = Action::new_local(|request: &LoginRequest| {
        let request = request.clone();
        async move { client::login(&request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(()) => nav::reload(),
                Err(err) => dialog::alert(&err.to_string()),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        match LoginRequest::from_form(&username.get_untracked(), &password.get_untracked()) {
            Ok(request) => {
                login_action.dispatch(request);
            }
            Err(err) => dialog::alert(&err.to_string()),
        }
    };

    let close = Callback::new(move |()| {
        set_username.set(String::new());
        set_password.set(String::new());
        open.set(false);
    });

    view! {
        <Modal open=open.into() title="Sign In" on_close=close>
            <form on:submit=on_submit>
                <div class="mb-5">
                    <label class=classes::LABEL for="login-username">"Username"</label>
                    <input
                        id="login-username"
                        type="text"
                        class=classes::INPUT
                        autocomplete="username"
                        prop:value=username
                        on:input=move |event| set_username.set(event_target_value(&event))
                    />
                </div>
                <div class="mb-5">
                    <label class=classes::LABEL for="login-password">"Password"</label>
                    <input
                        id="login-password"
                        type="password"
                        class=classes::INPUT
                        autocomplete="current-password"
                        prop:value=password
                        on:input=move |event| set_password.set(event_target_value(&event))
                    />
                </div>
                <Button button_type="submit" disabled=login_action.pending()>
                    "Sign In"
                </Button>
                {move || {
                    login_action
                        .pending()
                        .get()
                        .then_some(view! { <div class="mt-4"><Spinner /></div> })
                }}
            </form>
        </Modal>
    }
}

#[component]
pub fn RegisterDialog(open: RwSignal<bool>) -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (name, set_name) = signal(String::new());
    let (surname, set_surname) = signal(String::new());
    let (patronymic, set_patronymic) = signal(String::new());
    let (new_password, set_new_password) = signal(String::new());
    let (repeated_password, set_repeated_password) = signal(String::new());

    let register_action = Action::new_local(|request: &RegisterRequest| {
        let request = request.clone();
        async move { client::register(&request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = register_action.value().get() {
            match result {
                Ok(()) => {
                    open.set(false);
                    nav::reload();
                }
                Err(err) => dialog::alert(&err.to_string()),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        let form = RegisterForm {
            username: &username.get_untracked(),
            name: &name.get_untracked(),
            surname: &surname.get_untracked(),
            patronymic: &patronymic.get_untracked(),
            new_password: &new_password.get_untracked(),
            repeated_password: &repeated_password.get_untracked(),
        };
        match RegisterRequest::from_form(&form) {
            Ok(request) => {
                register_action.dispatch(request);
            }
            Err(err) => dialog::alert(&err.to_string()),
        }
    };

    let close = Callback::new(move |()| {
        set_username.set(String::new());
        set_name.set(String::new());
        set_surname.set(String::new());
        set_patronymic.set(String::new());
        set_new_password.set(String::new());
        set_repeated_password.set(String::new());
        open.set(false);
    });

    view! {
        <Modal open=open.into() title="Sign Up" on_close=close>
            <form on:submit=on_submit>
                <div class="mb-4">
                    <label class=classes::LABEL for="reg-username">"Username"</label>
                    <input
                        id="reg-username"
                        type="text"
                        class=classes::INPUT
                        autocomplete="username"
                        prop:value=username
                        on:input=move |event| set_username.set(event_target_value(&event))
                    />
                </div>
                <div class="mb-4">
                    <label class=classes::LABEL for="reg-name">"First name"</label>
                    <input
                        id="reg-name"
                        type="text"
                        class=classes::INPUT
                        prop:value=name
                        on:input=move |event| set_name.set(event_target_value(&event))
                    />
                </div>
                <div class="mb-4">
                    <label class=classes::LABEL for="reg-surname">"Last name"</label>
                    <input
                        id="reg-surname"
                        type="text"
                        class=classes::INPUT
                        prop:value=surname
                        on:input=move |event| set_surname.set(event_target_value(&event))
                    />
                </div>
                <div class="mb-4">
                    <label class=classes::LABEL for="reg-patronymic">"Patronymic (optional)"</label>
                    <input
                        id="reg-patronymic"
                        type="text"
                        class=classes::INPUT
                        prop:value=patronymic
                        on:input=move |event| set_patronymic.set(event_target_value(&event))
                    />
                </div>
                <div class="mb-4">
                    <label class=classes::LABEL for="reg-password">"Password"</label>
                    <input
                        id="reg-password"
                        type="password"
                        class=classes::INPUT
                        autocomplete="new-password"
                        prop:value=new_password
                        on:input=move |event| set_new_password.set(event_target_value(&event))
                    />
                </div>
                <div class="mb-5">
                    <label class=classes::LABEL for="reg-repeated-password">"Repeat password"</label>
                    <input
                        id="reg-repeated-password"
                        type="password"
                        class=classes::INPUT
                        autocomplete="new-password"
                        prop:value=repeated_password
                        on:input=move |event| set_repeated_password.set(event_target_value(&event))
                    />
                </div>
                <Button button_type="submit" disabled=register_action.pending()>
                    "Create account"
                </Button>
                {move || {
                    register_action
                        .pending()
                        .get()
                        .then_some(view! { <div class="mt-4"><Spinner /></div> })
                }}
            </form>
        </Modal>
    }
}
