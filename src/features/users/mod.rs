//! User-administration feature: list, invite, delete, and role assignment.

pub(crate) mod client;
pub(crate) mod types;
