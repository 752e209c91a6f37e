//! Auth feature: the server-injected session snapshot, login/registration/
//! logout clients, and route guards. Session changes reload the page so the
//! snapshot stays authoritative; nothing here stores or logs credentials.

pub(crate) mod bootstrap;
pub(crate) mod client;
#[cfg(target_arch = "wasm32")]
mod guards;
pub(crate) mod state;
pub(crate) mod types;

#[cfg(target_arch = "wasm32")]
pub(crate) use guards::{RequireAdmin, RequireAuth};
