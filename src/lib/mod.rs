//! Shared frontend utilities for API access, configuration, errors, theme
//! persistence, navigation, and build metadata.
//!
//! Session changes never mutate state in place: login, registration, and
//! logout reload the page (or redirect away from restricted paths) so the
//! server re-injects the session snapshot consumed at mount. Centralizing
//! these helpers keeps network behavior consistent and avoids duplicated
//! logic in routes and features.

pub(crate) mod api;
pub(crate) mod build_info;
pub(crate) mod config;
pub(crate) mod dialog;
pub(crate) mod errors;
pub(crate) mod nav;
pub(crate) mod query;
pub(crate) mod theme;

pub(crate) use api::{
    delete_empty_with_credentials, delete_json_with_credentials, get_json_with_credentials,
    post_empty_with_credentials, post_json_empty_with_credentials, post_json_with_credentials,
};
pub(crate) use errors::AppError;
