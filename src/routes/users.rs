//! Admin user table: paginated list, role assignment, deletion with an
//! explicit confirmation, and invitation of new users through a generated
//! one-time registration link.

use crate::app_lib::{AppError, dialog, nav};
use crate::components::AppShell;
use crate::components::ui::{Button, Modal, Spinner, classes};
use crate::features::auth::RequireAdmin;
use crate::features::auth::types::AccessLevel;
use crate::features::users::client;
use crate::features::users::types::{CreateUserForm, CreateUserRequest, SetRightsRequest, UserRow};
use leptos::ev::SubmitEvent;
use leptos::{prelude::*, task::spawn_local};
use leptos_router::components::A;
use leptos_router::hooks::use_query_map;

#[component]
pub fn UsersAdminPage() -> impl IntoView {
    view! {
        <AppShell>
            <RequireAdmin children=|| view! { <UsersTable /> } />
        </AppShell>
    }
}

fn alert_for_role_error(err: &AppError) {
    match err.status() {
        Some(401) => dialog::alert("Authorization required."),
        Some(400) => dialog::alert("Provide a valid username."),
        _ => dialog::alert(&err.to_string()),
    }
}

#[component]
fn UsersTable() -> impl IntoView {
    let query = use_query_map();
    let page = move || {
        query.with(|map| {
            map.get("page")
                .and_then(|value| value.parse::<u32>().ok())
        })
    };
    let page_size = move || {
        query.with(|map| {
            map.get("page_size")
                .and_then(|value| value.parse::<u32>().ok())
        })
    };

    let users = LocalResource::new(move || {
        let page = page();
        let page_size = page_size();
        async move { client::list_users(page, page_size).await }
    });

    let create_open = RwSignal::new(false);
    let invite_url = RwSignal::new(None::<String>);

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <div class="space-y-1">
                    <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                        "Users"
                    </h1>
                    <p class="text-sm text-gray-500 dark:text-gray-400">
                        "Manage registered users and their access levels."
                    </p>
                </div>
                <Button on:click=move |_| create_open.set(true)>"Create user"</Button>
            </div>

            <div class="overflow-hidden bg-white dark:bg-gray-800 shadow-sm border border-gray-200 dark:border-gray-700 rounded-lg">
                <table class="min-w-full divide-y divide-gray-200 dark:divide-gray-700">
                    <thead class="bg-gray-50 dark:bg-gray-900/50">
                        <tr>
                            <th scope="col" class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                                "Username"
                            </th>
                            <th scope="col" class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                                "Full name"
                            </th>
                            <th scope="col" class="px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                                "Role"
                            </th>
                            <th scope="col" class="px-6 py-3 text-right text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider">
                                "Actions"
                            </th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-gray-200 dark:divide-gray-700">
                        <Suspense fallback=move || view! {
                            <tr>
                                <td colspan="4" class="px-6 py-12 text-center"><Spinner /></td>
                            </tr>
                        }>
                            {move || match users.get() {
                                Some(Ok(list)) if list.users.is_empty() => {
                                    view! {
                                        <tr>
                                            <td colspan="4" class="px-6 py-12 text-center text-sm text-gray-500 dark:text-gray-400">
                                                "No users found."
                                            </td>
                                        </tr>
                                    }.into_any()
                                }
                                Some(Ok(list)) => {
                                    let rows = list.users.clone();
                                    view! {
                                        <For
                                            each=move || rows.clone()
                                            key=|user| user.username.clone()
                                            children=|user| view! { <UserTableRow user=user /> }
                                        />
                                    }.into_any()
                                }
                                Some(Err(err)) => {
                                    view! {
                                        <tr>
                                            <td colspan="4" class="px-6 py-4 text-sm text-red-700 dark:text-red-400">
                                                {err.to_string()}
                                            </td>
                                        </tr>
                                    }.into_any()
                                }
                                None => view! {
                                    <tr>
                                        <td colspan="4" class="px-6 py-12 text-center"><Spinner /></td>
                                    </tr>
                                }.into_any(),
                            }}
                        </Suspense>
                    </tbody>
                </table>
            </div>

            {move || {
                users.get().and_then(|result| result.ok()).map(|list| {
                    view! { <Pager page=list.page max_page=list.max_page page_size=page_size() /> }
                })
            }}

            <CreateUserDialog open=create_open invite_url=invite_url />
            <InviteUrlDialog invite_url=invite_url />
        </div>
    }
}

#[component]
fn Pager(page: u32, max_page: u32, page_size: Option<u32>) -> impl IntoView {
    let prev = (page > 1).then(|| client::users_page_href(Some(page - 1), page_size));
    let next = (page < max_page).then(|| client::users_page_href(Some(page + 1), page_size));

    view! {
        <div class="flex items-center justify-between text-sm text-gray-500 dark:text-gray-400">
            <div>
                {prev
                    .map(|href| view! {
                        <A href=href {..} class="text-blue-600 hover:text-blue-800 dark:text-blue-400">
                            "Previous"
                        </A>
                    })}
            </div>
            <span>{format!("Page {page} of {max_page}")}</span>
            <div>
                {next
                    .map(|href| view! {
                        <A href=href {..} class="text-blue-600 hover:text-blue-800 dark:text-blue-400">
                            "Next"
                        </A>
                    })}
            </div>
        </div>
    }
}

#[component]
fn UserTableRow(user: UserRow) -> impl IntoView {
    let username = user.username.clone();
    let full_name = format!("{} {} {}", user.surname, user.name, user.patronymic)
        .trim()
        .to_string();
    let selected_level = RwSignal::new(user.access_level.as_i32().to_string());

    let apply_username = username.clone();
    let on_apply = move |_| {
        let Some(level) = AccessLevel::from_select(&selected_level.get_untracked()) else {
            dialog::alert("Choose an access level.");
            return;
        };
        let request = SetRightsRequest {
            username: apply_username.clone(),
            new_access_level: level,
        };
        spawn_local(async move {
            match client::set_rights(&request).await {
                Ok(()) => {
                    dialog::alert("Role assigned.");
                    nav::reload();
                }
                Err(err) => alert_for_role_error(&err),
            }
        });
    };

    let delete_username = username.clone();
    let on_delete = move |_| {
        let username = delete_username.clone();
        if !dialog::confirm(&format!("Delete user {username}?")) {
            return;
        }
        spawn_local(async move {
            match client::delete_user(&username).await {
                Ok(_) => nav::reload(),
                Err(err) => dialog::alert(&err.to_string()),
            }
        });
    };

    view! {
        <tr class="hover:bg-gray-50 dark:hover:bg-gray-700/50 transition-colors">
            <td class="px-6 py-4 whitespace-nowrap text-sm font-medium text-gray-900 dark:text-white">
                {username.clone()}
            </td>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500 dark:text-gray-400">
                {full_name}
            </td>
            <td class="px-6 py-4 whitespace-nowrap text-sm">
                <div class="flex items-center gap-2">
                    <select
                        class=classes::SELECT
                        prop:value=selected_level
                        on:change=move |event| selected_level.set(event_target_value(&event))
                    >
                        {AccessLevel::ALL
                            .into_iter()
                            .map(|level| {
                                view! {
                                    <option
                                        value=level.as_i32().to_string()
                                        selected=level == user.access_level
                                    >
                                        {level.name()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                    <button
                        type="button"
                        class="text-blue-600 hover:text-blue-800 dark:text-blue-400"
                        on:click=on_apply
                    >
                        "Apply"
                    </button>
                </div>
            </td>
            <td class="px-6 py-4 whitespace-nowrap text-right text-sm font-medium">
                <button
                    type="button"
                    class="text-red-600 hover:text-red-800 dark:text-red-400"
                    on:click=on_delete
                >
                    "Delete"
                </button>
            </td>
        </tr>
    }
}

#[component]
fn CreateUserDialog(open: RwSignal<bool>, invite_url: RwSignal<Option<String>>) -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (name, set_name) = signal(String::new());
    let (surname, set_surname) = signal(String::new());
    let (patronymic, set_patronymic) = signal(String::new());
    let (access_level, set_access_level) = signal(String::new());

    let clear = move || {
        set_username.set(String::new());
        set_name.set(String::new());
        set_surname.set(String::new());
        set_patronymic.set(String::new());
        set_access_level.set(String::new());
    };

    let create_action = Action::new_local(|request: &CreateUserRequest| {
        let request = request.clone();
        async move { client::create_user(&request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = create_action.value().get() {
            match result {
                Ok(response) => {
                    clear();
                    open.set(false);
                    invite_url.set(Some(response.url));
                }
                Err(err) => dialog::alert(&err.to_string()),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        let form = CreateUserForm {
            username: &username.get_untracked(),
            name: &name.get_untracked(),
            surname: &surname.get_untracked(),
            patronymic: &patronymic.get_untracked(),
            access_level: &access_level.get_untracked(),
        };
        match CreateUserRequest::from_form(&form) {
            Ok(request) => {
                create_action.dispatch(request);
            }
            Err(err) => dialog::alert(&err.to_string()),
        }
    };

    let close = Callback::new(move |()| {
        clear();
        open.set(false);
    });

    view! {
        <Modal open=open.into() title="Create user" on_close=close>
            <form on:submit=on_submit>
                <div class="mb-4">
                    <label class=classes::LABEL for="create-username">"Username"</label>
                    <input
                        id="create-username"
                        type="text"
                        class=classes::INPUT
                        prop:value=username
                        on:input=move |event| set_username.set(event_target_value(&event))
                    />
                </div>
                <div class="mb-4">
                    <label class=classes::LABEL for="create-name">"First name"</label>
                    <input
                        id="create-name"
                        type="text"
                        class=classes::INPUT
                        prop:value=name
                        on:input=move |event| set_name.set(event_target_value(&event))
                    />
                </div>
                <div class="mb-4">
                    <label class=classes::LABEL for="create-surname">"Last name"</label>
                    <input
                        id="create-surname"
                        type="text"
                        class=classes::INPUT
                        prop:value=surname
                        on:input=move |event| set_surname.set(event_target_value(&event))
                    />
                </div>
                <div class="mb-4">
                    <label class=classes::LABEL for="create-patronymic">"Patronymic (optional)"</label>
                    <input
                        id="create-patronymic"
                        type="text"
                        class=classes::INPUT
                        prop:value=patronymic
                        on:input=move |event| set_patronymic.set(event_target_value(&event))
                    />
                </div>
                <div class="mb-5">
                    <label class=classes::LABEL for="create-role">"Access level"</label>
                    <select
                        id="create-role"
                        class=classes::SELECT
                        prop:value=access_level
                        on:change=move |event| set_access_level.set(event_target_value(&event))
                    >
                        <option value="">"Choose a role"</option>
                        {AccessLevel::ALL
                            .into_iter()
                            .map(|level| {
                                view! {
                                    <option value=level.as_i32().to_string()>{level.name()}</option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>
                <Button button_type="submit" disabled=create_action.pending()>
                    "Create"
                </Button>
                {move || {
                    create_action
                        .pending()
                        .get()
                        .then_some(view! { <span class="ml-4"><Spinner /></span> })
                }}
            </form>
        </Modal>
    }
}

/// Shows the generated one-time registration link. Closing the dialog
/// reloads the list so the invited user appears.
#[component]
fn InviteUrlDialog(invite_url: RwSignal<Option<String>>) -> impl IntoView {
    let open = Signal::derive(move || invite_url.get().is_some());

    let on_copy = move |_| {
        let Some(url) = invite_url.get_untracked() else {
            return;
        };
        copy_to_clipboard(url);
    };

    let close = Callback::new(move |()| {
        invite_url.set(None);
        nav::reload();
    });

    view! {
        <Modal open=open title="Registration link" on_close=close>
            <p class="text-sm text-gray-500 dark:text-gray-400 mb-4">
                "Hand this one-time link to the new user so they can choose a password."
            </p>
            <input
                type="text"
                class=classes::INPUT
                readonly=true
                prop:value=move || invite_url.get().unwrap_or_default()
            />
            <div class="mt-5">
                <Button on:click=on_copy>"Copy link"</Button>
            </div>
        </Modal>
    }
}

fn copy_to_clipboard(text: String) {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen_futures::JsFuture;

        spawn_local(async move {
            let Some(window) = web_sys::window() else {
                return;
            };
            let promise = window.navigator().clipboard().write_text(&text);
            match JsFuture::from(promise).await {
                Ok(_) => dialog::alert("Link copied to clipboard."),
                Err(_) => {
                    log::error!("clipboard write failed");
                    dialog::alert("Could not copy the link.");
                }
            }
        });
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = text;
    }
}
