//! Typed CMS payloads, one entity per page section.
//!
//! Every field is independently optional; the backend may omit any of them.
//! Normalizers turn these into fully-populated view-models.

use serde::Deserialize;

use crate::content::media::MediaRef;

/// The CMS response envelope: `{ data: T | null, meta?: ... }`.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub data: Option<T>,
}

impl<T> Default for Envelope<T> {
    fn default() -> Self {
        Self { data: None }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct NavLink {
    pub label: Option<String>,
    pub url: Option<String>,
    pub open_new_tab: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct NavbarData {
    pub logo_text: Option<String>,
    pub logo: Option<MediaRef>,
    /// Pre-media-field era logo URL, still honored.
    pub logo_url: Option<String>,
    pub nav_links: Option<Vec<NavLink>>,
    pub primary_cta_label: Option<String>,
    pub primary_cta_url: Option<String>,
    pub secondary_cta_label: Option<String>,
    pub secondary_cta_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct HeroData {
    pub badge_text: Option<String>,
    pub heading: Option<String>,
    pub subheading: Option<String>,
    pub primary_cta_label: Option<String>,
    pub primary_cta_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct LogoItem {
    pub name: Option<String>,
    pub url: Option<String>,
    pub logo: Option<MediaRef>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct WorkWithData {
    pub heading: Option<String>,
    pub logo_items: Option<Vec<LogoItem>>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct PainPointCard {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<MediaRef>,
    pub icon_key: Option<String>,
    pub stat_label: Option<String>,
    pub stat_delta: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct PainPointsData {
    pub badge_text: Option<String>,
    pub heading: Option<String>,
    pub subheading: Option<String>,
    pub cards: Option<Vec<PainPointCard>>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct ImpactCard {
    pub icon_key: Option<String>,
    pub stat: Option<String>,
    pub label: Option<String>,
    pub description: Option<String>,
    pub image: Option<MediaRef>,
    pub image_position: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct BusinessImpactData {
    pub heading: Option<String>,
    pub subheading: Option<String>,
    pub cards: Option<Vec<ImpactCard>>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct StatsGroup {
    pub description_title: Option<String>,
    pub description_text: Option<String>,
    pub stat_value: Option<String>,
    pub stat_caption: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct StatsGridData {
    pub badge_text: Option<String>,
    pub heading: Option<String>,
    pub subheading: Option<String>,
    pub featured_image: Option<MediaRef>,
    pub groups: Option<Vec<StatsGroup>>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct HowItWorksStep {
    pub title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct HowItWorksData {
    pub badge_text: Option<String>,
    pub heading: Option<String>,
    pub subheading: Option<String>,
    pub steps: Option<Vec<HowItWorksStep>>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct TestimonialData {
    pub quote: Option<String>,
    pub rating: Option<f64>,
    pub author_name: Option<String>,
    /// Older payloads carried the author under `name`.
    pub name: Option<String>,
    pub role: Option<String>,
    pub company: Option<String>,
    pub avatar: Option<MediaRef>,
}

/// Plan price as the backend delivers it: a number, a preformatted string,
/// or absent ("contact us" style plans).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Number(f64),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct PricingPlanData {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Price>,
    pub interval: Option<String>,
    pub cta_label: Option<String>,
    pub cta_url: Option<String>,
    pub is_featured: Option<bool>,
    pub features: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct ResourceCard {
    pub category: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub link_label: Option<String>,
    pub link_url: Option<String>,
    pub image: Option<MediaRef>,
    pub icon_key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct ResourcesData {
    pub heading: Option<String>,
    pub subheading: Option<String>,
    pub cards: Option<Vec<ResourceCard>>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct FaqItem {
    pub question: Option<String>,
    pub answer: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct LandingFaqData {
    pub badge_text: Option<String>,
    pub heading: Option<String>,
    pub subheading: Option<String>,
    pub featured_image: Option<MediaRef>,
    pub faqs: Option<Vec<FaqItem>>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct ConversionPanelData {
    pub heading: Option<String>,
    pub cta_label: Option<String>,
    pub cta_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct FooterLink {
    pub label: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct FooterData {
    pub headline: Option<String>,
    pub cta_label: Option<String>,
    pub cta_url: Option<String>,
    pub quick_links: Option<Vec<FooterLink>>,
    pub resource_links: Option<Vec<FooterLink>>,
    pub service_links: Option<Vec<FooterLink>>,
    /// Legacy single flat list, sliced into the three columns when the
    /// per-column lists are absent.
    pub footer_links: Option<Vec<FooterLink>>,
}

/// One entry of the generic media-upload listing, used by the works-with
/// logo fallback scan.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct UploadFile {
    pub name: Option<String>,
    pub url: Option<String>,
    #[serde(rename = "alternativeText")]
    pub alternative_text: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_with_null_data() {
        let env: Envelope<HeroData> = serde_json::from_str(r#"{"data": null}"#).expect("envelope");
        assert!(env.data.is_none());
    }

    #[test]
    fn test_envelope_with_payload() {
        let env: Envelope<HeroData> =
            serde_json::from_str(r#"{"data": {"heading": "Hi"}, "meta": {}}"#).expect("envelope");
        assert_eq!(env.data.expect("data").heading.as_deref(), Some("Hi"));
    }

    #[test]
    fn test_price_number_or_text() {
        let plan: PricingPlanData =
            serde_json::from_str(r#"{"price": 29}"#).expect("numeric price");
        assert_eq!(plan.price, Some(Price::Number(29.0)));

        let plan: PricingPlanData =
            serde_json::from_str(r#"{"price": "29.99"}"#).expect("string price");
        assert_eq!(plan.price, Some(Price::Text("29.99".to_string())));

        let plan: PricingPlanData = serde_json::from_str(r#"{"price": null}"#).expect("no price");
        assert_eq!(plan.price, None);
    }

    #[test]
    fn test_partial_payload_defaults() {
        let data: PainPointsData =
            serde_json::from_str(r#"{"heading": "H", "cards": [{"title": "T"}]}"#)
                .expect("partial");
        assert_eq!(data.heading.as_deref(), Some("H"));
        assert!(data.badge_text.is_none());
        let cards = data.cards.expect("cards");
        assert_eq!(cards.len(), 1);
        assert!(cards[0].image.is_none());
    }
}
