use crate::app_lib::theme;
use crate::features::auth::state::AuthProvider;
use crate::routes::AppRoutes;
use leptos::prelude::*;
use leptos_router::components::Router;

#[component]
pub fn App() -> impl IntoView {
    // Apply the persisted theme before anything renders.
    theme::apply_stored();

    view! {
        <AuthProvider>
            <Router>
                <AppRoutes />
            </Router>
        </AuthProvider>
    }
}
