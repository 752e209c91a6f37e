//! Profile self-service: personal data, password changes, session cleanup,
//! and account deletion.

pub(crate) mod client;
pub(crate) mod types;
