use crate::components::AppShell;
use crate::features::auth::state::use_auth;
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth();
    let greeting = move || {
        auth.session
            .get()
            .map(|profile| format!("Signed in as {}.", profile.username))
            .unwrap_or_else(|| "Sign in to manage the registry.".to_string())
    };

    view! {
        <AppShell>
            <div class="max-w-xl mx-auto text-center space-y-4">
                <h1 class="text-3xl font-bold text-gray-900 dark:text-white">
                    "EduReg"
                </h1>
                <p class="text-gray-500 dark:text-gray-400">
                    "Registry of universities and their educational programs."
                </p>
                <p class="text-sm text-gray-500 dark:text-gray-400">{greeting}</p>
            </div>
        </AppShell>
    }
}
