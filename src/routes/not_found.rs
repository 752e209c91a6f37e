//! Minimal 404 page, also rendered by the route guards for sessions without
//! enough rights.

use crate::components::AppShell;
use leptos::prelude::*;
use leptos_router::components::A;

/// Renders the not-found page with the AppShell wrapper. Use this for
/// top-level route fallbacks.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <AppShell>
            <NotFoundContent />
        </AppShell>
    }
}

/// Inner 404 content without AppShell. Use inside guards where the page
/// component already provides the shell.
#[component]
pub fn NotFoundContent() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[50vh] text-center px-4">
            <h1 class="text-9xl font-black text-gray-100 dark:text-gray-800 select-none">"404"</h1>
            <p class="text-2xl font-bold text-gray-900 dark:text-white">"Page not found"</p>
            <div class="mt-4 space-y-6">
                <p class="text-gray-500 dark:text-gray-400 max-w-sm mx-auto">
                    "The resource you requested is missing or you don't have permission to view it."
                </p>
                <A
                    href="/"
                    {..}
                    class="inline-flex items-center px-5 py-2.5 text-sm font-medium text-white bg-blue-700 rounded-lg hover:bg-blue-800 dark:bg-blue-600 dark:hover:bg-blue-700"
                >
                    "Go Home"
                </A>
            </div>
        </div>
    }
}
