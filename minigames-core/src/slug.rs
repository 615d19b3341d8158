/// Derive an id-safe slug: lowercase ASCII alphanumerics joined by single hyphens.
///
/// Anything that is not an ASCII letter or digit separates words, so the result
/// may be empty.
#[must_use]
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::slugify;

    #[test]
    fn collapses_separators() {
        assert_eq!(slugify("Gem Garden 2"), "gem-garden-2");
        assert_eq!(slugify("Savannah's Edge"), "savannah-s-edge");
        assert_eq!(slugify("  --Deep   Crystal__Pit!! "), "deep-crystal-pit");
    }

    #[test]
    fn non_ascii_acts_as_separator() {
        assert_eq!(slugify("Café Mine"), "caf-mine");
        assert_eq!(slugify("日本"), "");
    }

    #[test]
    fn empty_and_symbol_only_names_yield_empty() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!! ---"), "");
    }
}
