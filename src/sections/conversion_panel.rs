use leptos::prelude::*;

use crate::content::fallback::text_or;
use crate::content::types::ConversionPanelData;
use crate::sections::icons::ArrowUpRight;

const FALLBACK_HEADING: &str = "Don't Lose Another Sale to a Broken Website!";
const FALLBACK_CTA_LABEL: &str = "Get Started";
const FALLBACK_CTA_URL: &str = "#";

#[derive(Debug, Clone, PartialEq)]
pub struct ConversionPanelView {
    pub heading: String,
    pub cta_label: String,
    pub cta_url: String,
}

fn normalize(data: Option<&ConversionPanelData>) -> ConversionPanelView {
    ConversionPanelView {
        heading: text_or(data.and_then(|d| d.heading.as_deref()), FALLBACK_HEADING),
        cta_label: text_or(data.and_then(|d| d.cta_label.as_deref()), FALLBACK_CTA_LABEL),
        cta_url: text_or(data.and_then(|d| d.cta_url.as_deref()), FALLBACK_CTA_URL),
    }
}

#[component]
pub fn ConversionPanel(data: Option<ConversionPanelData>) -> impl IntoView {
    let panel = normalize(data.as_ref());
    view! {
        <section class="conversion-panel">
            <div class="container">
                <div class="conversion-inner">
                    <h2 class="conversion-heading">{panel.heading}</h2>
                    <a href=panel.cta_url class="btn btn-light">
                        <span>{panel.cta_label}</span>
                        <span class="btn-arrow">
                            <ArrowUpRight/>
                        </span>
                    </a>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_null_is_all_fallback() {
        let view = normalize(None);
        assert_eq!(view.heading, FALLBACK_HEADING);
        assert_eq!(view.cta_label, FALLBACK_CTA_LABEL);
        assert_eq!(view.cta_url, FALLBACK_CTA_URL);
    }

    #[test]
    fn test_normalize_trims_backend_text() {
        let data = ConversionPanelData {
            heading: Some("  Act now  ".to_string()),
            cta_label: None,
            cta_url: Some("/signup".to_string()),
        };
        let view = normalize(Some(&data));
        assert_eq!(view.heading, "Act now");
        assert_eq!(view.cta_label, FALLBACK_CTA_LABEL);
        assert_eq!(view.cta_url, "/signup");
    }
}
