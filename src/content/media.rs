//! Media references and URL resolution.
//!
//! The CMS emits media in one of two shapes depending on its schema version:
//! flattened (`{url, width, height, alternativeText}`) or nested
//! (`{data: {url, attributes: {...}}}`). Both shapes are accepted here and
//! resolved once, at the data-access boundary; downstream code only ever sees
//! an absolute URL or nothing.

use serde::Deserialize;

use crate::config::config;

/// A media object in either payload shape. Flattened fields live at the top
/// level; the nested shape wraps them under `data` and possibly `attributes`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct MediaRef {
    pub url: Option<String>,
    #[serde(rename = "alternativeText")]
    pub alternative_text: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub data: Option<MediaData>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct MediaData {
    pub url: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub attributes: Option<MediaAttributes>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct MediaAttributes {
    pub url: Option<String>,
    #[serde(rename = "alternativeText")]
    pub alternative_text: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl MediaRef {
    /// Raw URL as delivered by the backend: flattened shape first, then the
    /// nested wrapper, then the wrapper's `attributes`.
    pub fn raw_url(&self) -> Option<&str> {
        let flat = self.url.as_deref().filter(|u| !u.is_empty());
        if flat.is_some() {
            return flat;
        }
        let data = self.data.as_ref()?;
        let nested = data.url.as_deref().filter(|u| !u.is_empty());
        if nested.is_some() {
            return nested;
        }
        data.attributes
            .as_ref()?
            .url
            .as_deref()
            .filter(|u| !u.is_empty())
    }

    /// Absolute URL for this media, or `None` when no shape carries one.
    pub fn resolve(&self) -> Option<String> {
        let url = resolve_url(&config().base_url, self.raw_url());
        if url.is_empty() { None } else { Some(url) }
    }

    /// Alt text from whichever shape carries it.
    pub fn alt_text(&self) -> Option<&str> {
        self.alternative_text.as_deref().or_else(|| {
            self.data
                .as_ref()?
                .attributes
                .as_ref()?
                .alternative_text
                .as_deref()
        })
    }

    /// Pixel dimensions, falling back to the given defaults when the shape
    /// that carried the URL has none.
    pub fn dimensions_or(&self, default_w: u32, default_h: u32) -> (u32, u32) {
        if self.url.as_deref().is_some_and(|u| !u.is_empty()) {
            return (
                self.width.unwrap_or(default_w),
                self.height.unwrap_or(default_h),
            );
        }
        let (w, h) = match self.data.as_ref() {
            Some(data) => {
                let attrs = data.attributes.as_ref();
                (
                    data.width.or(attrs.and_then(|a| a.width)),
                    data.height.or(attrs.and_then(|a| a.height)),
                )
            }
            None => (None, None),
        };
        (w.unwrap_or(default_w), h.unwrap_or(default_h))
    }
}

/// Resolve a raw URL against the configured CMS origin.
pub fn media_url(url: Option<&str>) -> String {
    resolve_url(&config().base_url, url)
}

/// Resolve a possibly-relative media URL against the CMS origin.
///
/// Empty and placeholder inputs (`#`, `/#`) resolve to `""`. Absolute URLs
/// pass through unchanged, which also makes the function idempotent.
pub fn resolve_url(base: &str, url: Option<&str>) -> String {
    let Some(url) = url else {
        return String::new();
    };
    let trimmed = url.trim();
    if trimmed.is_empty() || trimmed == "#" || trimmed == "/#" {
        return String::new();
    }
    if trimmed.starts_with("http") {
        return trimmed.to_string();
    }
    if trimmed.starts_with('/') {
        format!("{base}{trimmed}")
    } else {
        format!("{base}/{trimmed}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://cms.example.com";

    #[test]
    fn test_resolve_url_empty_and_placeholder() {
        assert_eq!(resolve_url(BASE, None), "");
        assert_eq!(resolve_url(BASE, Some("")), "");
        assert_eq!(resolve_url(BASE, Some("   ")), "");
        assert_eq!(resolve_url(BASE, Some("#")), "");
        assert_eq!(resolve_url(BASE, Some("/#")), "");
    }

    #[test]
    fn test_resolve_url_absolute_passthrough() {
        assert_eq!(
            resolve_url(BASE, Some("https://x/y.png")),
            "https://x/y.png"
        );
        assert_eq!(resolve_url(BASE, Some("http://x/y.png")), "http://x/y.png");
    }

    #[test]
    fn test_resolve_url_relative() {
        assert_eq!(
            resolve_url(BASE, Some("/uploads/a.png")),
            "https://cms.example.com/uploads/a.png"
        );
        assert_eq!(
            resolve_url(BASE, Some("uploads/a.png")),
            "https://cms.example.com/uploads/a.png"
        );
    }

    #[test]
    fn test_resolve_url_idempotent() {
        let once = resolve_url(BASE, Some("/uploads/a.png"));
        assert_eq!(resolve_url(BASE, Some(&once)), once);
    }

    #[test]
    fn test_flattened_shape() {
        let media: MediaRef = serde_json::from_str(
            r#"{"url": "/uploads/logo.png", "alternativeText": "logo", "width": 200, "height": 80}"#,
        )
        .expect("flattened media");
        assert_eq!(media.raw_url(), Some("/uploads/logo.png"));
        assert_eq!(media.alt_text(), Some("logo"));
        assert_eq!(media.dimensions_or(180, 60), (200, 80));
    }

    #[test]
    fn test_nested_shape() {
        let media: MediaRef = serde_json::from_str(
            r#"{"data": {"attributes": {"url": "/uploads/logo.png", "width": 120}}}"#,
        )
        .expect("nested media");
        assert_eq!(media.raw_url(), Some("/uploads/logo.png"));
        assert_eq!(media.dimensions_or(180, 60), (120, 60));
    }

    #[test]
    fn test_nested_shape_url_on_data() {
        let media: MediaRef =
            serde_json::from_str(r#"{"data": {"url": "/uploads/direct.png"}}"#).expect("media");
        assert_eq!(media.raw_url(), Some("/uploads/direct.png"));
    }

    #[test]
    fn test_flattened_wins_over_nested() {
        let media: MediaRef = serde_json::from_str(
            r#"{"url": "/uploads/flat.png", "data": {"url": "/uploads/nested.png"}}"#,
        )
        .expect("media");
        assert_eq!(media.raw_url(), Some("/uploads/flat.png"));
    }

    #[test]
    fn test_absent_media_yields_nothing() {
        let media: MediaRef = serde_json::from_str(r#"{"data": null}"#).expect("media");
        assert_eq!(media.raw_url(), None);
    }
}
