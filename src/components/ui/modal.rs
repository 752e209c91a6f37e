//! Dialog overlay shown and hidden by toggling its display state. Owners
//! clear their form fields in `on_close` before the dialog disappears.

use leptos::prelude::*;

#[component]
pub fn Modal(
    open: Signal<bool>,
    title: &'static str,
    on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="fixed inset-0 z-50 flex items-center justify-center bg-black/50 px-4">
                <div class="w-full max-w-md rounded-xl bg-white dark:bg-gray-800 border border-gray-200 dark:border-gray-700 shadow-lg">
                    <div class="flex items-center justify-between border-b border-gray-200 dark:border-gray-700 px-6 py-3">
                        <h2 class="text-lg font-semibold text-gray-900 dark:text-white">{title}</h2>
                        <button
                            type="button"
                            class="text-gray-400 hover:text-gray-900 dark:hover:text-white text-xl leading-none"
                            aria-label="Close"
                            on:click=move |_| on_close.run(())
                        >
                            "\u{00d7}"
                        </button>
                    </div>
                    <div class="p-6">{children()}</div>
                </div>
            </div>
        </Show>
    }
}
