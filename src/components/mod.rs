//! Shared UI components exported for routes and features.

pub(crate) mod auth_dialogs;
pub(crate) mod layout;
pub(crate) mod ui;

pub(crate) use layout::AppShell;
