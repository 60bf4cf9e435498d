use leptos::prelude::*;

use crate::content::fallback::text_or;
use crate::content::types::HowItWorksData;
use crate::fx::{once_visible, typewriter};
use crate::sections::SITE_NAME;

const FALLBACK_BADGE: &str = "How It Works";
const FALLBACK_HEADING: &str = "Smart Monitoring. Instant Alerts. Zero Guesswork.";
const FALLBACK_SUBHEADING: &str = "Kapinet continuously scans your website from multiple \
    checkpoints to detect hidden issues before they affect your customers. From performance \
    drops to technical errors, we catch problems early and guide you step-by-step to fix them \
    fast.";

const ISSUES: [&str; 6] = [
    "Missing Inquiry Forms",
    "Poor Search Rank",
    "Pages With Errors",
    "Little Or No Online Reviews",
    "Website security vulnerabilities",
    "Expired SSL Certificates",
];

const FALLBACK_MONITORING_ITEMS: [&str; 6] = [
    "Technical SEO Monitoring",
    "Continuous Source Code Scans",
    "Error Detection and Repair",
    "Online Review Monitoring",
    "SSL Certificate Validation",
    "Email Reputation Monitoring",
];

/// At most this many monitoring pills fit the layout.
const MAX_ITEMS: usize = 6;

const TYPE_THRESHOLD: f64 = 0.35;
const TYPE_TICK_MS: u64 = 14;
const GRID_THRESHOLD: f64 = 1.0;

#[derive(Debug, Clone, PartialEq)]
pub struct HowItWorksView {
    pub badge: String,
    pub heading: String,
    pub subheading: String,
    pub monitoring_items: Vec<String>,
}

fn normalize(data: Option<&HowItWorksData>) -> HowItWorksView {
    let titles: Vec<String> = data
        .and_then(|d| d.steps.as_deref())
        .unwrap_or_default()
        .iter()
        .filter_map(|step| step.title.as_deref())
        .map(str::trim)
        .filter(|title| !title.is_empty())
        .map(str::to_string)
        .take(MAX_ITEMS)
        .collect();

    let monitoring_items = if titles.is_empty() {
        FALLBACK_MONITORING_ITEMS
            .iter()
            .map(|item| item.to_string())
            .collect()
    } else {
        titles
    };

    HowItWorksView {
        badge: text_or(data.and_then(|d| d.badge_text.as_deref()), FALLBACK_BADGE),
        heading: text_or(data.and_then(|d| d.heading.as_deref()), FALLBACK_HEADING),
        subheading: text_or(
            data.and_then(|d| d.subheading.as_deref()),
            FALLBACK_SUBHEADING,
        ),
        monitoring_items,
    }
}

#[component]
fn MonitoringPill(label: String) -> impl IntoView {
    view! {
        <span class="monitoring-pill">
            <span class="monitoring-dot"></span>
            {label}
        </span>
    }
}

#[component]
pub fn HowItWorks(data: Option<HowItWorksData>) -> impl IntoView {
    let section = normalize(data.as_ref());

    let subheading_anchor = NodeRef::<leptos::html::P>::new();
    let typing = once_visible(subheading_anchor, TYPE_THRESHOLD);
    let typed = typewriter(typing, section.subheading.clone(), TYPE_TICK_MS);

    let grid_anchor = NodeRef::<leptos::html::Div>::new();
    let grid_entered = once_visible(grid_anchor, GRID_THRESHOLD);

    let issue_pills = ISSUES
        .iter()
        .map(|issue| view! { <span class="issue-pill">{*issue}</span> })
        .collect_view();

    let monitoring_pills = section
        .monitoring_items
        .into_iter()
        .map(|item| view! { <MonitoringPill label=item/> })
        .collect_view();

    view! {
        <section class="how-it-works">
            <div class="container">
                <div class="section-header">
                    <span class="section-badge">{section.badge}</span>
                    <h2 class="section-title">{section.heading}</h2>
                    <p
                        class="section-subheading"
                        class:typing=move || typing.get()
                        node_ref=subheading_anchor
                    >
                        {move || typed.get()}
                    </p>
                </div>

                <div
                    class="pipeline-grid"
                    class:visible=move || grid_entered.get()
                    node_ref=grid_anchor
                >
                    <div class="pipeline-issues">{issue_pills}</div>
                    <div class="pipeline-hub">
                        <span class="pipeline-hub-label">{SITE_NAME}</span>
                    </div>
                    <div class="pipeline-monitoring">{monitoring_pills}</div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::types::HowItWorksStep;

    #[test]
    fn test_normalize_null_is_all_fallback() {
        let view = normalize(None);
        assert_eq!(view.badge, FALLBACK_BADGE);
        assert_eq!(view.heading, FALLBACK_HEADING);
        assert_eq!(view.subheading, FALLBACK_SUBHEADING);
        assert_eq!(view.monitoring_items, FALLBACK_MONITORING_ITEMS.to_vec());
    }

    fn step(title: &str) -> HowItWorksStep {
        HowItWorksStep {
            title: Some(title.to_string()),
        }
    }

    #[test]
    fn test_step_titles_become_monitoring_items() {
        let data = HowItWorksData {
            steps: Some(vec![step(" Uptime checks "), step(""), step("DNS watch")]),
            ..HowItWorksData::default()
        };
        let view = normalize(Some(&data));
        assert_eq!(view.monitoring_items, vec!["Uptime checks", "DNS watch"]);
    }

    #[test]
    fn test_step_titles_capped_at_layout_limit() {
        let steps: Vec<_> = (0..9).map(|i| step(&format!("Step {i}"))).collect();
        let data = HowItWorksData {
            steps: Some(steps),
            ..HowItWorksData::default()
        };
        let view = normalize(Some(&data));
        assert_eq!(view.monitoring_items.len(), MAX_ITEMS);
    }

    #[test]
    fn test_blank_titles_fall_back_entirely() {
        let data = HowItWorksData {
            steps: Some(vec![step("  "), step("")]),
            ..HowItWorksData::default()
        };
        let view = normalize(Some(&data));
        assert_eq!(view.monitoring_items, FALLBACK_MONITORING_ITEMS.to_vec());
    }
}
