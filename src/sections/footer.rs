use leptos::prelude::*;

use crate::content::fallback::text_or;
use crate::content::types::{FooterData, FooterLink};
use crate::sections::icons::ArrowUpRight;

const FALLBACK_HEADLINE: &str = "Helping your website stay fast, secure, and error-free. Never \
    miss a sale again.";
const FALLBACK_CTA_LABEL: &str = "Get Started";
const FALLBACK_CTA_URL: &str = "#";
const FALLBACK_LINK_URL: &str = "#";

const FALLBACK_QUICK_LINKS: [&str; 4] = ["Home", "About", "Support", "Agency"];
const FALLBACK_RESOURCE_LINKS: [&str; 4] = ["Blog", "Contact", "FAQs", "Terms of Service"];
const FALLBACK_SERVICE_LINKS: [&str; 4] = [
    "Website Monitoring",
    "Error Detection & Fixing",
    "SEO Performance Boost",
    "Compatibility Check",
];

/// Index ranges carving the legacy flat link list into the three columns.
const QUICK_RANGE: (usize, usize) = (0, 4);
const RESOURCE_RANGE: (usize, usize) = (4, 8);
const SERVICE_RANGE: (usize, usize) = (8, 12);

#[derive(Debug, Clone, PartialEq)]
pub struct FooterLinkView {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FooterView {
    pub headline: String,
    pub cta_label: String,
    pub cta_url: String,
    pub quick_links: Vec<FooterLinkView>,
    pub resource_links: Vec<FooterLinkView>,
    pub service_links: Vec<FooterLinkView>,
}

fn link_views(links: &[FooterLink], defaults: &[&str]) -> Vec<FooterLinkView> {
    links
        .iter()
        .enumerate()
        .map(|(index, link)| FooterLinkView {
            label: text_or(
                link.label.as_deref(),
                defaults
                    .get(index)
                    .or_else(|| defaults.last())
                    .copied()
                    .unwrap_or_default(),
            ),
            url: text_or(link.url.as_deref(), FALLBACK_LINK_URL),
        })
        .collect()
}

fn default_links(defaults: &[&str]) -> Vec<FooterLinkView> {
    defaults
        .iter()
        .map(|label| FooterLinkView {
            label: label.to_string(),
            url: FALLBACK_LINK_URL.to_string(),
        })
        .collect()
}

/// Column links, in precedence order: the column's own list, then the legacy
/// flat list sliced at the column's fixed range, then compiled-in defaults.
fn column_links(
    primary: Option<&[FooterLink]>,
    legacy: Option<&[FooterLink]>,
    range: (usize, usize),
    defaults: &[&str],
) -> Vec<FooterLinkView> {
    if let Some(links) = primary {
        if !links.is_empty() {
            return link_views(links, defaults);
        }
    }
    if let Some(legacy) = legacy {
        let from = range.0.min(legacy.len());
        let to = range.1.min(legacy.len());
        if from < to {
            return link_views(&legacy[from..to], defaults);
        }
    }
    default_links(defaults)
}

fn normalize(data: Option<&FooterData>) -> FooterView {
    let legacy = data.and_then(|d| d.footer_links.as_deref());
    FooterView {
        headline: text_or(data.and_then(|d| d.headline.as_deref()), FALLBACK_HEADLINE),
        cta_label: text_or(data.and_then(|d| d.cta_label.as_deref()), FALLBACK_CTA_LABEL),
        cta_url: text_or(data.and_then(|d| d.cta_url.as_deref()), FALLBACK_CTA_URL),
        quick_links: column_links(
            data.and_then(|d| d.quick_links.as_deref()),
            legacy,
            QUICK_RANGE,
            &FALLBACK_QUICK_LINKS,
        ),
        resource_links: column_links(
            data.and_then(|d| d.resource_links.as_deref()),
            legacy,
            RESOURCE_RANGE,
            &FALLBACK_RESOURCE_LINKS,
        ),
        service_links: column_links(
            data.and_then(|d| d.service_links.as_deref()),
            legacy,
            SERVICE_RANGE,
            &FALLBACK_SERVICE_LINKS,
        ),
    }
}

#[component]
fn LinkColumn(title: &'static str, links: Vec<FooterLinkView>) -> impl IntoView {
    view! {
        <div class="footer-column">
            <h3 class="footer-column-title">{title}</h3>
            <ul class="footer-links">
                {links
                    .into_iter()
                    .map(|link| {
                        view! {
                            <li>
                                <a href=link.url class="footer-link">
                                    {link.label}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
pub fn Footer(data: Option<FooterData>) -> impl IntoView {
    let footer = normalize(data.as_ref());
    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-layout">
                    <div class="footer-brand">
                        <h2 class="footer-headline">{footer.headline}</h2>
                        <a href=footer.cta_url class="btn btn-primary">
                            <span>{footer.cta_label}</span>
                            <span class="btn-arrow">
                                <ArrowUpRight/>
                            </span>
                        </a>
                    </div>

                    <div class="footer-columns">
                        <LinkColumn title="Quick Links" links=footer.quick_links/>
                        <LinkColumn title="Resources" links=footer.resource_links/>
                        <LinkColumn title="Services" links=footer.service_links/>
                    </div>
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(label: &str) -> FooterLink {
        FooterLink {
            label: Some(label.to_string()),
            url: Some(format!("/{}", label.to_lowercase())),
        }
    }

    #[test]
    fn test_normalize_null_is_all_fallback() {
        let view = normalize(None);
        assert_eq!(view.headline, FALLBACK_HEADLINE);
        assert_eq!(view.quick_links, default_links(&FALLBACK_QUICK_LINKS));
        assert_eq!(view.resource_links, default_links(&FALLBACK_RESOURCE_LINKS));
        assert_eq!(view.service_links, default_links(&FALLBACK_SERVICE_LINKS));
    }

    #[test]
    fn test_legacy_list_sliced_into_columns() {
        let legacy: Vec<FooterLink> = (0..12).map(|i| link(&format!("L{i}"))).collect();
        let data = FooterData {
            footer_links: Some(legacy),
            ..FooterData::default()
        };
        let view = normalize(Some(&data));
        let labels = |links: &[FooterLinkView]| -> Vec<String> {
            links.iter().map(|l| l.label.clone()).collect()
        };
        assert_eq!(labels(&view.quick_links), vec!["L0", "L1", "L2", "L3"]);
        assert_eq!(labels(&view.resource_links), vec!["L4", "L5", "L6", "L7"]);
        assert_eq!(labels(&view.service_links), vec!["L8", "L9", "L10", "L11"]);
    }

    #[test]
    fn test_short_legacy_list_leaves_tail_columns_on_defaults() {
        let legacy: Vec<FooterLink> = (0..6).map(|i| link(&format!("L{i}"))).collect();
        let data = FooterData {
            footer_links: Some(legacy),
            ..FooterData::default()
        };
        let view = normalize(Some(&data));
        assert_eq!(view.quick_links.len(), 4);
        // Partial slice for the second column, defaults for the third.
        assert_eq!(view.resource_links.len(), 2);
        assert_eq!(view.service_links, default_links(&FALLBACK_SERVICE_LINKS));
    }

    #[test]
    fn test_column_list_wins_over_legacy() {
        let data = FooterData {
            quick_links: Some(vec![link("Own")]),
            footer_links: Some((0..12).map(|i| link(&format!("L{i}"))).collect()),
            ..FooterData::default()
        };
        let view = normalize(Some(&data));
        assert_eq!(view.quick_links.len(), 1);
        assert_eq!(view.quick_links[0].label, "Own");
        assert_eq!(view.quick_links[0].url, "/own");
    }
}
