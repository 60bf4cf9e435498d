use leptos::prelude::*;

use crate::content::fallback::text_or;
use crate::content::types::HeroData;
use crate::sections::icons::ArrowUpRight;

const FALLBACK_BADGE: &str = "Website Error Monitoring";
const FALLBACK_HEADING: &str = "Never Lose Another Sale to a Broken Website";
const FALLBACK_SUBHEADING: &str = "Kapinet watches your website around the clock, catches broken \
    forms, slow pages and expired certificates, and walks you through fixing them before your \
    customers ever notice.";
const FALLBACK_CTA_LABEL: &str = "Get Started";
const FALLBACK_CTA_URL: &str = "#";

#[derive(Debug, Clone, PartialEq)]
pub struct HeroView {
    pub badge: String,
    pub heading: String,
    pub subheading: String,
    pub cta_label: String,
    pub cta_url: String,
}

fn normalize(data: Option<&HeroData>) -> HeroView {
    HeroView {
        badge: text_or(data.and_then(|d| d.badge_text.as_deref()), FALLBACK_BADGE),
        heading: text_or(data.and_then(|d| d.heading.as_deref()), FALLBACK_HEADING),
        subheading: text_or(
            data.and_then(|d| d.subheading.as_deref()),
            FALLBACK_SUBHEADING,
        ),
        cta_label: text_or(
            data.and_then(|d| d.primary_cta_label.as_deref()),
            FALLBACK_CTA_LABEL,
        ),
        cta_url: text_or(
            data.and_then(|d| d.primary_cta_url.as_deref()),
            FALLBACK_CTA_URL,
        ),
    }
}

#[component]
pub fn Hero(data: Option<HeroData>) -> impl IntoView {
    let hero = normalize(data.as_ref());
    view! {
        <section class="hero">
            <div class="container">
                <div class="hero-inner">
                    <span class="hero-badge">{hero.badge}</span>
                    <h1 class="hero-title">{hero.heading}</h1>
                    <p class="hero-subheading">{hero.subheading}</p>
                    <div class="hero-actions">
                        <a href=hero.cta_url class="btn btn-primary">
                            <span>{hero.cta_label}</span>
                            <span class="btn-arrow">
                                <ArrowUpRight/>
                            </span>
                        </a>
                    </div>
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
        assert_eq!(view.badge, FALLBACK_BADGE);
        assert_eq!(view.heading, FALLBACK_HEADING);
        assert_eq!(view.subheading, FALLBACK_SUBHEADING);
        assert_eq!(view.cta_label, FALLBACK_CTA_LABEL);
        assert_eq!(view.cta_url, FALLBACK_CTA_URL);
    }

    #[test]
    fn test_normalize_prefers_backend_text() {
        let data = HeroData {
            heading: Some("  Custom heading  ".to_string()),
            badge_text: Some("".to_string()),
            ..HeroData::default()
        };
        let view = normalize(Some(&data));
        assert_eq!(view.heading, "Custom heading");
        // Blank backend text falls back.
        assert_eq!(view.badge, FALLBACK_BADGE);
    }
}
