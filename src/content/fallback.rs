//! Positional fallback rules shared by every section normalizer.
//!
//! Two list-merge flavors exist. Replace-style: a non-empty backend list is
//! used wholesale, each item still falling back field-by-field against the
//! default at the same position. Overlay-style: the defaults fix the length
//! and the Nth backend item (when present) overrides the Nth entry.

/// Trimmed backend text, or the compiled-in default when absent or blank.
pub fn text_or(value: Option<&str>, default: &str) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => default.to_string(),
    }
}

/// Trimmed backend text when non-empty; no compiled-in default.
pub fn opt_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Enum-like key validated against an allowed set; anything else falls back
/// to the positional default.
pub fn key_or(value: Option<&str>, allowed: &[&'static str], default: &'static str) -> &'static str {
    match value {
        Some(v) => allowed.iter().copied().find(|k| *k == v).unwrap_or(default),
        None => default,
    }
}

/// Replace-style merge. A non-empty backend list fully replaces the default
/// list (no element-wise splicing); `normalize` maps each backend item
/// against the default at the same index, the last default covering any
/// overflow. An empty or absent backend list yields the defaults via `seed`.
pub fn merge_replace<T, D, V>(
    items: Option<&[T]>,
    defaults: &[D],
    normalize: impl Fn(&T, &D) -> V,
    seed: impl Fn(&D) -> V,
) -> Vec<V> {
    match items {
        Some(items) if !items.is_empty() => items
            .iter()
            .enumerate()
            .filter_map(|(index, item)| {
                defaults
                    .get(index)
                    .or_else(|| defaults.last())
                    .map(|default| normalize(item, default))
            })
            .collect(),
        _ => defaults.iter().map(seed).collect(),
    }
}

/// Overlay-style merge. The output always has one entry per default; the Nth
/// backend item (when present) overrides the Nth entry field-by-field, and
/// missing trailing items keep their default counterparts.
pub fn merge_overlay<T, D, V>(
    items: Option<&[T]>,
    defaults: &[D],
    normalize: impl Fn(Option<&T>, &D) -> V,
) -> Vec<V> {
    defaults
        .iter()
        .enumerate()
        .map(|(index, default)| normalize(items.and_then(|s| s.get(index)), default))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_or() {
        assert_eq!(text_or(None, "fb"), "fb");
        assert_eq!(text_or(Some(""), "fb"), "fb");
        assert_eq!(text_or(Some("   "), "fb"), "fb");
        assert_eq!(text_or(Some("  real "), "fb"), "real");
    }

    #[test]
    fn test_opt_text() {
        assert_eq!(opt_text(None), None);
        assert_eq!(opt_text(Some("  ")), None);
        assert_eq!(opt_text(Some(" x ")), Some("x".to_string()));
    }

    #[test]
    fn test_key_or() {
        const ALLOWED: [&str; 2] = ["left", "right"];
        assert_eq!(key_or(Some("left"), &ALLOWED, "right"), "left");
        assert_eq!(key_or(Some("middle"), &ALLOWED, "right"), "right");
        assert_eq!(key_or(None, &ALLOWED, "right"), "right");
    }

    #[test]
    fn test_merge_replace_all_or_nothing() {
        let defaults = ["a", "b", "c"];
        let items = vec!["X"];
        let out = merge_replace(
            Some(items.as_slice()),
            &defaults,
            |item, d| format!("{item}/{d}"),
            |d| d.to_string(),
        );
        // One backend item fully replaces the three defaults.
        assert_eq!(out, vec!["X/a".to_string()]);
    }

    #[test]
    fn test_merge_replace_overflow_uses_last_default() {
        let defaults = ["a", "b"];
        let items = vec!["1", "2", "3"];
        let out = merge_replace(
            Some(items.as_slice()),
            &defaults,
            |item, d| format!("{item}/{d}"),
            |d| d.to_string(),
        );
        assert_eq!(out, vec!["1/a", "2/b", "3/b"]);
    }

    #[test]
    fn test_merge_replace_empty_yields_defaults() {
        let defaults = ["a", "b"];
        let empty: Vec<&str> = Vec::new();
        let out = merge_replace(
            Some(empty.as_slice()),
            &defaults,
            |item: &&str, d| format!("{item}/{d}"),
            |d| d.to_string(),
        );
        assert_eq!(out, vec!["a", "b"]);

        let out = merge_replace(
            None,
            &defaults,
            |item: &&str, d| format!("{item}/{d}"),
            |d| d.to_string(),
        );
        assert_eq!(out, vec!["a", "b"]);
    }

    #[test]
    fn test_merge_overlay_keeps_default_length() {
        let defaults = ["a", "b", "c"];
        let items = vec!["X"];
        let out = merge_overlay(Some(items.as_slice()), &defaults, |item, d| {
            item.map(|i| i.to_string()).unwrap_or_else(|| d.to_string())
        });
        assert_eq!(out, vec!["X", "b", "c"]);
    }
}
