//! Profile self-service: personal data, password change, ending other
//! sessions, and account deletion. Personal-data changes reload the page so
//! the server-injected snapshot stays authoritative.

use crate::app_lib::{dialog, nav};
use crate::components::AppShell;
use crate::components::ui::{Button, Spinner, classes};
use crate::features::auth::RequireAuth;
use crate::features::auth::state::use_auth;
use crate::features::auth::types::UserProfile;
use crate::features::profile::client;
use crate::features::profile::types::{ChangePasswordRequest, PersonalDataRequest};
use leptos::ev::SubmitEvent;
use leptos::{prelude::*, task::spawn_local};

#[component]
pub fn ProfilePage() -> impl IntoView {
    view! {
        <AppShell>
            <RequireAuth children=|| view! { <ProfileContent /> } />
        </AppShell>
    }
}

#[component]
fn ProfileContent() -> impl IntoView {
    let auth = use_auth();
    match auth.session.get_untracked() {
        Some(profile) => view! {
            <div class="max-w-xl mx-auto space-y-10">
                <PersonalDataSection profile=profile />
                <PasswordSection />
                <SessionsSection />
                <DangerSection />
            </div>
        }
        .into_any(),
        None => ().into_any(),
    }
}

#[component]
fn PersonalDataSection(profile: UserProfile) -> impl IntoView {
    let (username, set_username) = signal(profile.username.clone());
    let (name, set_name) = signal(profile.name.clone());
    let (surname, set_surname) = signal(profile.surname.clone());
    let (patronymic, set_patronymic) = signal(profile.patronymic.clone());
    let access_level = profile.access_level;

    let save_action = Action::new_local(|request: &PersonalDataRequest| {
        let request = request.clone();
        async move { client::change_personal_data(&request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = save_action.value().get() {
            match result {
                Ok(message) => {
                    dialog::alert(&message.detail);
                    nav::reload();
                }
                Err(err) => dialog::alert(&err.to_string()),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        match PersonalDataRequest::from_form(
            &username.get_untracked(),
            &name.get_untracked(),
            &surname.get_untracked(),
            &patronymic.get_untracked(),
        ) {
            Ok(request) => {
                save_action.dispatch(request);
            }
            Err(err) => dialog::alert(&err.to_string()),
        }
    };

    view! {
        <section>
            <h1 class="text-2xl font-semibold text-gray-900 dark:text-white mb-1">
                "Personal data"
            </h1>
            <p class="text-sm text-gray-500 dark:text-gray-400 mb-6">
                {format!("Access level: {access_level}")}
            </p>
            <form on:submit=on_submit>
                <div class="mb-4">
                    <label class=classes::LABEL for="profile-username">"Username"</label>
                    <input
                        id="profile-username"
                        type="text"
                        class=classes::INPUT
                        prop:value=username
                        on:input=move |event| set_username.set(event_target_value(&event))
                    />
                </div>
                <div class="mb-4">
                    <label class=classes::LABEL for="profile-name">"First name"</label>
                    <input
                        id="profile-name"
                        type="text"
                        class=classes::INPUT
                        prop:value=name
                        on:input=move |event| set_name.set(event_target_value(&event))
                    />
                </div>
                <div class="mb-4">
                    <label class=classes::LABEL for="profile-surname">"Last name"</label>
                    <input
                        id="profile-surname"
                        type="text"
                        class=classes::INPUT
                        prop:value=surname
                        on:input=move |event| set_surname.set(event_target_value(&event))
                    />
                </div>
                <div class="mb-5">
                    <label class=classes::LABEL for="profile-patronymic">"Patronymic"</label>
                    <input
                        id="profile-patronymic"
                        type="text"
                        class=classes::INPUT
                        prop:value=patronymic
                        on:input=move |event| set_patronymic.set(event_target_value(&event))
                    />
                </div>
                <Button button_type="submit" disabled=save_action.pending()>
                    "Save changes"
                </Button>
                {move || {
                    save_action
                        .pending()
                        .get()
                        .then_some(view! { <span class="ml-4"><Spinner /></span> })
                }}
            </form>
        </section>
    }
}

#[component]
fn PasswordSection() -> impl IntoView {
    let (password, set_password) = signal(String::new());
    let (new_password, set_new_password) = signal(String::new());
    let (repeated_password, set_repeated_password) = signal(String::new());

    let change_action = Action::new_local(|request: &ChangePasswordRequest| {
        let request = request.clone();
        async move { client::change_password(&request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = change_action.value().get() {
            match result {
                Ok(message) => {
                    dialog::alert(&message.detail);
                    set_password.set(String::new());
                    set_new_password.set(String::new());
                    set_repeated_password.set(String::new());
                }
                Err(err) => dialog::alert(&err.to_string()),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        match ChangePasswordRequest::from_form(
            &password.get_untracked(),
            &new_password.get_untracked(),
            &repeated_password.get_untracked(),
        ) {
            Ok(request) => {
                change_action.dispatch(request);
            }
            Err(err) => dialog::alert(&err.to_string()),
        }
    };

    view! {
        <section>
            <h2 class="text-xl font-semibold text-gray-900 dark:text-white mb-6">
                "Change password"
            </h2>
            <form on:submit=on_submit>
                <div class="mb-4">
                    <label class=classes::LABEL for="current-password">"Current password"</label>
                    <input
                        id="current-password"
                        type="password"
                        class=classes::INPUT
                        autocomplete="current-password"
                        prop:value=password
                        on:input=move |event| set_password.set(event_target_value(&event))
                    />
                </div>
                <div class="mb-4">
                    <label class=classes::LABEL for="new-password">"New password"</label>
                    <input
                        id="new-password"
                        type="password"
                        class=classes::INPUT
                        autocomplete="new-password"
                        prop:value=new_password
                        on:input=move |event| set_new_password.set(event_target_value(&event))
                    />
                </div>
                <div class="mb-5">
                    <label class=classes::LABEL for="repeated-new-password">"Repeat new password"</label>
                    <input
                        id="repeated-new-password"
                        type="password"
                        class=classes::INPUT
                        autocomplete="new-password"
                        prop:value=repeated_password
                        on:input=move |event| set_repeated_password.set(event_target_value(&event))
                    />
                </div>
                <Button button_type="submit" disabled=change_action.pending()>
                    "Change password"
                </Button>
            </form>
        </section>
    }
}

#[component]
fn SessionsSection() -> impl IntoView {
    let on_logout_all = move |_| {
        spawn_local(async move {
            match client::logout_all().await {
                Ok(()) => dialog::alert("All other sessions have been ended."),
                Err(err) => dialog::alert(&err.to_string()),
            }
        });
    };

    view! {
        <section>
            <h2 class="text-xl font-semibold text-gray-900 dark:text-white mb-2">
                "Sessions"
            </h2>
            <p class="text-sm text-gray-500 dark:text-gray-400 mb-4">
                "Sign out on every other device while keeping this session."
            </p>
            <Button on:click=on_logout_all>"End other sessions"</Button>
        </section>
    }
}

#[component]
fn DangerSection() -> impl IntoView {
    let on_delete = move |_| {
        if !dialog::confirm("Delete your account? This cannot be undone.") {
            return;
        }
        spawn_local(async move {
            match client::delete_account().await {
                Ok(()) => nav::redirect("/"),
                Err(err) => dialog::alert(&err.to_string()),
            }
        });
    };

    view! {
        <section>
            <h2 class="text-xl font-semibold text-red-700 dark:text-red-400 mb-2">
                "Delete account"
            </h2>
            <p class="text-sm text-gray-500 dark:text-gray-400 mb-4">
                "Removes your account and all of its sessions."
            </p>
            <button
                type="button"
                class="text-white bg-red-700 hover:bg-red-800 focus:ring-4 focus:outline-none focus:ring-red-300 font-medium rounded-lg text-sm px-5 py-2.5 text-center dark:bg-red-600 dark:hover:bg-red-700"
                on:click=on_delete
            >
                "Delete account"
            </button>
        </section>
    }
}
