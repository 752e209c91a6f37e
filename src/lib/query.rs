//! Query-string building for page and API URLs. Empty or absent parameters
//! are skipped and values are percent-encoded.

use url::form_urlencoded;

/// Appends the non-empty parameters to `base` as a query string. Returns the
/// base unchanged when every parameter is empty.
pub fn param_url(base: &str, params: &[(&str, Option<&str>)]) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    let mut any = false;
    for (key, value) in params {
        if let Some(value) = value {
            if !value.is_empty() {
                serializer.append_pair(key, value);
                any = true;
            }
        }
    }

    if any {
        format!("{base}?{}", serializer.finish())
    } else {
        base.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::param_url;

    #[test]
    fn skips_empty_and_absent_parameters() {
        let url = param_url(
            "/users",
            &[("page", Some("2")), ("search", Some("")), ("sort", None)],
        );
        assert_eq!(url, "/users?page=2");
    }

    #[test]
    fn returns_the_base_when_nothing_remains() {
        assert_eq!(param_url("/users", &[("page", None)]), "/users");
    }

    #[test]
    fn percent_encodes_values() {
        let url = param_url("/users/finish-reg", &[("token", Some("a b&c=d"))]);
        assert_eq!(url, "/users/finish-reg?token=a+b%26c%3Dd");
    }
}
