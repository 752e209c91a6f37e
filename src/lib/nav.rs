//! Page navigation helpers. Session changes are picked up by reloading the
//! page so the server can re-inject the session snapshot; leaving a
//! restricted page after logout redirects to the home path instead.

/// Path segments that require an authenticated session.
const RESTRICTED_SEGMENTS: [&str; 3] = ["profile", "edit", "users"];

/// Returns true when the path belongs to a page that needs a session.
pub fn is_restricted_path(path: &str) -> bool {
    RESTRICTED_SEGMENTS
        .iter()
        .any(|segment| path.contains(segment))
}

/// Reloads the current page.
pub fn reload() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if window.location().reload().is_err() {
                log::error!("failed to reload the page");
            }
        }
    }
}

/// Navigates to the given href with a full page load.
pub fn redirect(href: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if window.location().set_href(href).is_err() {
                log::error!("failed to navigate to {href}");
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = href;
    }
}

/// Current location pathname, empty outside a browser.
pub fn current_path() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|window| window.location().pathname().ok())
            .unwrap_or_default()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        String::new()
    }
}

/// After logout: leave restricted pages for the home path, reload elsewhere.
pub fn reload_or_home() {
    if is_restricted_path(&current_path()) {
        redirect("/");
    } else {
        reload();
    }
}

#[cfg(test)]
mod tests {
    use super::is_restricted_path;

    #[test]
    fn restricted_paths_are_detected() {
        assert!(is_restricted_path("/profile"));
        assert!(is_restricted_path("/users"));
        assert!(is_restricted_path("/edit/university/42"));
        assert!(is_restricted_path("/users/finish-reg"));
    }

    #[test]
    fn public_paths_are_not_restricted() {
        assert!(!is_restricted_path("/"));
        assert!(!is_restricted_path("/health"));
        assert!(!is_restricted_path("/universities/42"));
    }
}
