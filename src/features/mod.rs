//! Domain-level frontend features (auth, users, profile) and their shared
//! logic. Routes import these modules to keep view code focused while API
//! handling stays in dedicated feature areas.

pub(crate) mod auth;
pub(crate) mod profile;
pub(crate) mod users;
