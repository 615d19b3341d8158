//! Deployment base path for the router.
//!
//! A compile-time `PUBLIC_URL` (e.g. `/play` for a subdirectory deploy) wins.
//! Otherwise the page's `<base href>` is used when it carries a path.

/// Base path for the router, or `None` to route from the site root.
#[must_use]
pub fn router_base() -> Option<String> {
    option_env!("PUBLIC_URL")
        .and_then(normalize_base)
        .or_else(|| crate::dom::base_href().as_deref().and_then(normalize_base))
}

/// Reduce a configured base (path or absolute URL) to a router basename.
fn normalize_base(base: &str) -> Option<String> {
    let base = base.trim();
    let path = match base.find("://") {
        Some(scheme_end) => {
            let rest = &base[scheme_end + 3..];
            rest.find('/').map_or("", |slash| &rest[slash..])
        }
        None => base,
    };
    let path = path.trim_end_matches('/');
    if path.is_empty() {
        None
    } else if path.starts_with('/') {
        Some(path.to_string())
    } else {
        Some(format!("/{path}"))
    }
}
