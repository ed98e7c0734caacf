//! Default URL builder.

use weave_core::contracts::UrlBuilding;

/// Resolves relative paths against an optional base URL.
///
/// Absolute URLs pass through untouched. Without a base URL, relative paths are
/// returned as given.
#[derive(Debug, Clone, Default)]
pub struct UrlBuilder {
    base_url: Option<String>,
}

impl UrlBuilder {
    /// A builder with no base URL.
    pub fn new() -> Self {
        Self::default()
    }

    /// A builder resolving against `base_url`.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: Some(base_url.into()),
        }
    }
}

impl UrlBuilding for UrlBuilder {
    fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    fn build(&self, path: &str) -> Option<String> {
        let path = path.trim();
        if path.is_empty() {
            return None;
        }
        let resolved = if path.contains("://") {
            path.to_owned()
        } else {
            match &self.base_url {
                Some(base) => format!(
                    "{}/{}",
                    base.trim_end_matches('/'),
                    path.trim_start_matches('/')
                ),
                None => path.to_owned(),
            }
        };
        Some(resolved.replace(' ', "%20"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_paths_join_base() {
        let builder = UrlBuilder::with_base_url("https://api.example.com/");
        assert_eq!(
            builder.build("/screens/home").as_deref(),
            Some("https://api.example.com/screens/home")
        );
        assert_eq!(
            builder.build("screens/home").as_deref(),
            Some("https://api.example.com/screens/home")
        );
    }

    #[test]
    fn test_absolute_urls_pass_through() {
        let builder = UrlBuilder::with_base_url("https://api.example.com");
        assert_eq!(
            builder.build("https://cdn.example.com/a b.png").as_deref(),
            Some("https://cdn.example.com/a%20b.png")
        );
    }

    #[test]
    fn test_no_base_and_empty_path() {
        let builder = UrlBuilder::new();
        assert_eq!(builder.build("/home").as_deref(), Some("/home"));
        assert_eq!(builder.build("   "), None);
        assert_eq!(builder.base_url(), None);
    }
}
