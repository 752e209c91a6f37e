//! Reads the server-injected session snapshot from `window.EDUREG_SESSION`.
//! The server renders this global before the bundle loads; an absent, null,
//! or malformed value means no session. The snapshot is read once at mount
//! and never mutated — session changes reload the page.

use crate::features::auth::types::UserProfile;

#[cfg(target_arch = "wasm32")]
pub fn session_snapshot() -> Option<UserProfile> {
    use crate::features::auth::types::AccessLevel;
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let value = Reflect::get(&window, &JsValue::from_str("EDUREG_SESSION")).ok()?;
    if value.is_null() || value.is_undefined() {
        return None;
    }
    let object = Object::from(value);

    let username = read_string(&object, "username")?;
    if username.trim().is_empty() {
        return None;
    }
    let access_level = Reflect::get(&object, &JsValue::from_str("access_level"))
        .ok()
        .and_then(|level| level.as_f64())
        .and_then(|level| AccessLevel::from_i32(level as i32))
        .unwrap_or(AccessLevel::Guest);

    Some(UserProfile {
        username,
        name: read_string(&object, "name").unwrap_or_default(),
        surname: read_string(&object, "surname").unwrap_or_default(),
        patronymic: read_string(&object, "patronymic").unwrap_or_default(),
        access_level,
    })
}

#[cfg(not(target_arch = "wasm32"))]
pub fn session_snapshot() -> Option<UserProfile> {
    None
}

#[cfg(target_arch = "wasm32")]
fn read_string(object: &js_sys::Object, key: &str) -> Option<String> {
    js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key))
        .ok()?
        .as_string()
}
