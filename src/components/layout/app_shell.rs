//! Shared layout wrapper with the auth-aware header, theme toggle, and the
//! background video. Exactly one of the Sign In/Sign Up and Profile/Sign Out
//! control groups is rendered, decided solely by the session snapshot.
//! Navigation remains client-side; the backend enforces access control.

use crate::app_lib::{nav, theme};
use crate::components::auth_dialogs::{LoginDialog, RegisterDialog};
use crate::components::ui::VideoBackground;
use crate::features::auth::client;
use crate::features::auth::state::{HeaderControls, use_auth};
use leptos::{prelude::*, task::spawn_local};
use leptos_router::components::A;

const NAV_LINK: &str = "block py-2 px-3 text-gray-900 rounded hover:bg-gray-100 md:hover:bg-transparent md:border-0 md:hover:text-blue-700 md:p-0 dark:text-white md:dark:hover:text-blue-500 dark:hover:bg-gray-700 dark:hover:text-white md:dark:hover:bg-transparent";

/// Wraps routes with the header and main content container.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let auth = use_auth();
    let controls = Signal::derive(move || HeaderControls::for_session(auth.session.get().as_ref()));
    let is_admin = auth.is_admin;

    let login_open = RwSignal::new(false);
    let register_open = RwSignal::new(false);

    let on_logout = move |_| {
        spawn_local(async move {
            // Navigate regardless of the outcome; the reload picks up
            // whatever session state the server still holds.
            if let Err(err) = client::logout().await {
                log::error!("logout request failed: {err}");
            }
            nav::reload_or_home();
        });
    };

    view! {
        <div class="min-h-screen flex flex-col">
            <VideoBackground />
            <header class="border-gray-200 dark:bg-gray-900">
                <div class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4">
                    <A href="/" {..} class="flex items-center space-x-3">
                        <span class="font-semibold whitespace-nowrap dark:text-white">
                            "EduReg"
                        </span>
                    </A>
                    <ul class="font-medium flex flex-row items-center space-x-6">
                        <Show when=move || controls.get().show_login>
                            <li>
                                <button type="button" class=NAV_LINK on:click=move |_| login_open.set(true)>
                                    "Sign In"
                                </button>
                            </li>
                        </Show>
                        <Show when=move || controls.get().show_register>
                            <li>
                                <button type="button" class=NAV_LINK on:click=move |_| register_open.set(true)>
                                    "Sign Up"
                                </button>
                            </li>
                        </Show>
                        <Show when=move || is_admin.get()>
                            <li>
                                <A href="/users" {..} class=NAV_LINK>"Users"</A>
                            </li>
                        </Show>
                        <Show when=move || controls.get().show_profile>
                            <li>
                                <A href="/profile" {..} class=NAV_LINK>
                                    {move || controls.get().profile_label}
                                </A>
                            </li>
                        </Show>
                        <Show when=move || controls.get().show_logout>
                            <li>
                                <button type="button" class=NAV_LINK on:click=on_logout>
                                    "Sign Out"
                                </button>
                            </li>
                        </Show>
                        <li>
                            <button
                                type="button"
                                class=NAV_LINK
                                aria-label="Toggle theme"
                                on:click=move |_| {
                                    theme::toggle();
                                }
                            >
                                "Theme"
                            </button>
                        </li>
                    </ul>
                </div>
            </header>
            <main class="flex-1">
                <div class="container mx-auto p-4 mt-6">
                    {children()}
                </div>
            </main>
            <LoginDialog open=login_open />
            <RegisterDialog open=register_open />
        </div>
    }
}
