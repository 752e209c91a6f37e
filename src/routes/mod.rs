mod finish_reg;
mod health;
mod home;
mod not_found;
mod profile;
mod users;

pub(crate) use finish_reg::FinishRegPage;
pub(crate) use health::HealthPage;
pub(crate) use home::HomePage;
pub(crate) use not_found::{NotFoundContent, NotFoundPage};
pub(crate) use profile::ProfilePage;
pub(crate) use users::UsersAdminPage;

use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=HomePage />
            <Route path=path!("/health") view=HealthPage />
            <Route path=path!("/profile") view=ProfilePage />
            <Route path=path!("/users") view=UsersAdminPage />
            <Route path=path!("/users/finish-reg") view=FinishRegPage />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}
