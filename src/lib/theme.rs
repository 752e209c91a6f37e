//! Light/dark theme preference persisted in `localStorage` under the `theme`
//! key. The dark theme is applied by toggling the `dark` class on `<body>`.
//! Requires a browser environment; helpers degrade to no-ops elsewhere.

#[cfg(target_arch = "wasm32")]
const STORAGE_KEY: &str = "theme";
#[cfg(target_arch = "wasm32")]
const DARK_CLASS: &str = "dark";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    /// Parses a stored value; anything but `dark` means the light theme.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => ThemePreference::Dark,
            _ => ThemePreference::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }
}

/// Reads the persisted preference from localStorage.
pub fn stored_preference() -> ThemePreference {
    #[cfg(target_arch = "wasm32")]
    {
        let stored = web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten());
        ThemePreference::from_stored(stored.as_deref())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        ThemePreference::Light
    }
}

/// Applies the persisted preference, called once at startup.
pub fn apply_stored() {
    apply(stored_preference());
}

/// Applies or removes the `dark` class on `<body>`.
pub fn apply(preference: ThemePreference) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(body) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.body())
        {
            let class_list = body.class_list();
            let result = match preference {
                ThemePreference::Dark => class_list.add_1(DARK_CLASS),
                ThemePreference::Light => class_list.remove_1(DARK_CLASS),
            };
            if result.is_err() {
                log::error!("failed to update theme class on <body>");
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = preference;
    }
}

/// Toggles the theme, applies it, and persists the new preference.
pub fn toggle() -> ThemePreference {
    let next = stored_preference().toggled();
    apply(next);
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(storage) =
            web_sys::window().and_then(|window| window.local_storage().ok().flatten())
        {
            let _ = storage.set_item(STORAGE_KEY, next.as_str());
        }
    }
    next
}

#[cfg(test)]
mod tests {
    use super::ThemePreference;

    #[test]
    fn stored_value_round_trips() {
        for preference in [ThemePreference::Light, ThemePreference::Dark] {
            assert_eq!(
                ThemePreference::from_stored(Some(preference.as_str())),
                preference
            );
        }
    }

    #[test]
    fn unknown_or_missing_values_default_to_light() {
        assert_eq!(
            ThemePreference::from_stored(None),
            ThemePreference::Light
        );
        assert_eq!(
            ThemePreference::from_stored(Some("solarized")),
            ThemePreference::Light
        );
    }

    #[test]
    fn toggled_flips_between_the_two_themes() {
        assert_eq!(ThemePreference::Light.toggled(), ThemePreference::Dark);
        assert_eq!(ThemePreference::Dark.toggled(), ThemePreference::Light);
    }
}
