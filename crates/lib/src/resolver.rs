//! # Reference Resolution
//!
//! Catalogs publish service links either as absolute URLs or relative to the
//! catalog endpoint itself. These helpers turn the latter into absolute URLs using
//! the directory part of the catalog URL.

use crate::constants::ABSOLUTE_URL_PREFIX;
use crate::types::CatalogSearchContext;

/// Returns `url` up to, but excluding, its last `/`.
///
/// A `url` without any `/` has no directory part and yields the empty string.
pub fn base_directory(url: &str) -> &str {
    match url.rfind('/') {
        Some(index) => &url[..index],
        None => "",
    }
}

/// A URL is absolute when it starts with the literal `http` (covers `https`).
pub fn is_absolute(url: &str) -> bool {
    url.starts_with(ABSOLUTE_URL_PREFIX)
}

/// Resolves `url` against the catalog in `context`.
///
/// Relative URLs are kept unchanged when the context carries no base URL; use
/// [`ReferenceResolver::try_resolve`] to detect that case.
pub fn resolve(url: &str, context: &CatalogSearchContext) -> String {
    ReferenceResolver::new(context).resolve(url)
}

/// Resolves reference URLs against one catalog's base directory.
#[derive(Debug, Clone, Copy)]
pub struct ReferenceResolver<'a> {
    base_url: Option<&'a str>,
}

impl<'a> ReferenceResolver<'a> {
    pub fn new(context: &'a CatalogSearchContext) -> Self {
        Self {
            base_url: context.base_url(),
        }
    }

    /// Returns `url` prefixed with the catalog's base directory, or `None` if
    /// `url` is relative and there is no base URL to prefix.
    ///
    /// A base URL without any `/` has an empty directory, so the result is then
    /// still relative; callers check [`is_absolute`] on it.
    pub fn try_resolve(&self, url: &str) -> Option<String> {
        if is_absolute(url) {
            return Some(url.to_string());
        }
        self.base_url
            .map(|base| format!("{}{}", base_directory(base), url))
    }

    pub fn resolve(&self, url: &str) -> String {
        self.try_resolve(url).unwrap_or_else(|| url.to_string())
    }
}
