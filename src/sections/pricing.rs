use leptos::prelude::*;

use crate::content::fallback::{merge_replace, opt_text, text_or};
use crate::content::types::{Price, PricingPlanData};
use crate::sections::icons::Check;

const HEADING: &str = "Simple, transparent pricing";
const SUBHEADING: &str = "Choose the plan that works best for you. No hidden fees, cancel \
    anytime.";
const CUSTOM_PRICE: &str = "Custom";
const FALLBACK_CTA_URL: &str = "#";

struct PlanDefaults {
    name: &'static str,
    description: &'static str,
    price: Option<&'static str>,
    interval: Option<&'static str>,
    cta_label: &'static str,
    featured: bool,
    features: [&'static str; 4],
}

const FALLBACK_PLANS: [PlanDefaults; 3] = [
    PlanDefaults {
        name: "Starter",
        description: "For a single website",
        price: Some("29"),
        interval: Some("monthly"),
        cta_label: "Start Free Trial",
        featured: false,
        features: [
            "Daily error scans",
            "Email alerts",
            "SSL certificate checks",
            "Monthly health report",
        ],
    },
    PlanDefaults {
        name: "Growth",
        description: "For growing businesses",
        price: Some("79"),
        interval: Some("monthly"),
        cta_label: "Start Free Trial",
        featured: true,
        features: [
            "Hourly scans",
            "Instant alerts",
            "SEO and review monitoring",
            "Priority support",
        ],
    },
    PlanDefaults {
        name: "Agency",
        description: "For agencies managing client sites",
        price: None,
        interval: None,
        cta_label: "Contact Sales",
        featured: false,
        features: [
            "Everything in Growth",
            "Unlimited client sites",
            "White-label reports",
            "Dedicated support",
        ],
    },
];

#[derive(Debug, Clone, PartialEq)]
pub struct PlanView {
    pub name: String,
    pub description: String,
    /// Display price including the currency sign, or "Custom".
    pub price_text: String,
    /// "/mo" or "/yr", shown only for priced interval plans.
    pub period: Option<&'static str>,
    pub interval: Option<String>,
    pub cta_label: String,
    pub cta_url: String,
    pub featured: bool,
    pub features: Vec<String>,
}

fn price_text(price: Option<&Price>) -> String {
    match price {
        None => CUSTOM_PRICE.to_string(),
        Some(Price::Text(text)) if text.trim().is_empty() => CUSTOM_PRICE.to_string(),
        Some(Price::Text(text)) => format!("${}", text.trim()),
        Some(Price::Number(value)) => format!("${value}"),
    }
}

fn period(price_text: &str, interval: Option<&str>) -> Option<&'static str> {
    if price_text == CUSTOM_PRICE {
        return None;
    }
    match interval {
        Some("monthly") => Some("/mo"),
        Some("yearly") => Some("/yr"),
        _ => None,
    }
}

fn normalize_one(plan: &PricingPlanData, default: &PlanDefaults) -> PlanView {
    let price = match &plan.price {
        Some(value) => price_text(Some(value)),
        None => default
            .price
            .map(|p| format!("${p}"))
            .unwrap_or_else(|| CUSTOM_PRICE.to_string()),
    };
    let interval =
        opt_text(plan.interval.as_deref()).or_else(|| default.interval.map(str::to_string));
    let features: Vec<String> = match plan.features.as_deref() {
        Some(features) if !features.is_empty() => features.to_vec(),
        _ => default.features.iter().map(|f| f.to_string()).collect(),
    };
    PlanView {
        name: text_or(plan.name.as_deref(), default.name),
        description: text_or(plan.description.as_deref(), default.description),
        period: period(&price, interval.as_deref()),
        price_text: price,
        interval,
        cta_label: text_or(plan.cta_label.as_deref(), default.cta_label),
        cta_url: text_or(plan.cta_url.as_deref(), FALLBACK_CTA_URL),
        featured: plan.is_featured.unwrap_or(default.featured),
        features,
    }
}

fn seed_one(default: &PlanDefaults) -> PlanView {
    let price = default
        .price
        .map(|p| format!("${p}"))
        .unwrap_or_else(|| CUSTOM_PRICE.to_string());
    PlanView {
        name: default.name.to_string(),
        description: default.description.to_string(),
        period: period(&price, default.interval),
        price_text: price,
        interval: default.interval.map(str::to_string),
        cta_label: default.cta_label.to_string(),
        cta_url: FALLBACK_CTA_URL.to_string(),
        featured: default.featured,
        features: default.features.iter().map(|f| f.to_string()).collect(),
    }
}

fn normalize(data: &[PricingPlanData]) -> Vec<PlanView> {
    merge_replace(Some(data), &FALLBACK_PLANS, normalize_one, seed_one)
}

#[component]
fn PlanCard(plan: PlanView) -> impl IntoView {
    let features = plan
        .features
        .into_iter()
        .map(|feature| {
            view! {
                <li class="plan-feature">
                    <Check/>
                    <span>{feature}</span>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="plan-card" class:featured=plan.featured>
            {plan.featured.then(|| view! { <span class="plan-flag">"Most Popular"</span> })}
            <div class="plan-head">
                <h3 class="plan-name">{plan.name}</h3>
                <p class="plan-description">{plan.description}</p>
            </div>
            <div class="plan-price">
                <span class="plan-amount">{plan.price_text}</span>
                {plan.period.map(|p| view! { <span class="plan-period">{p}</span> })}
            </div>
            <ul class="plan-features">{features}</ul>
            <a href=plan.cta_url class="btn btn-primary plan-cta">
                {plan.cta_label}
            </a>
        </div>
    }
}

#[component]
pub fn Pricing(data: Vec<PricingPlanData>) -> impl IntoView {
    let plans = normalize(&data);

    let has_monthly = plans.iter().any(|p| p.interval.as_deref() == Some("monthly"));
    let has_yearly = plans.iter().any(|p| p.interval.as_deref() == Some("yearly"));
    let show_toggle = has_monthly && has_yearly;

    let (interval, set_interval) = signal("monthly");

    let cards = move || {
        plans
            .iter()
            .filter(|plan| {
                !show_toggle
                    || plan.interval.is_none()
                    || plan.interval.as_deref() == Some(interval.get())
            })
            .cloned()
            .map(|plan| view! { <PlanCard plan=plan/> })
            .collect_view()
    };

    view! {
        <section class="pricing">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">{HEADING}</h2>
                    <p class="section-subheading">{SUBHEADING}</p>
                </div>

                {show_toggle.then(|| view! {
                    <div class="pricing-toggle">
                        <span class:active=move || interval.get() == "monthly">"Monthly"</span>
                        <button
                            class="toggle-switch"
                            class:on=move || interval.get() == "yearly"
                            aria-label="Toggle billing interval"
                            on:click=move |_| {
                                set_interval.update(|current| {
                                    *current = if *current == "monthly" { "yearly" } else { "monthly" };
                                })
                            }
                        >
                            <span class="toggle-knob"></span>
                        </button>
                        <span class:active=move || interval.get() == "yearly">
                            "Yearly" <span class="toggle-hint">"Save 20%"</span>
                        </span>
                    </div>
                })}

                <div class="plan-grid">{cards}</div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_empty_is_all_fallback() {
        let plans = normalize(&[]);
        assert_eq!(plans.len(), FALLBACK_PLANS.len());
        assert_eq!(plans[0].name, "Starter");
        assert_eq!(plans[0].price_text, "$29");
        assert_eq!(plans[0].period, Some("/mo"));
        assert_eq!(plans[2].price_text, CUSTOM_PRICE);
        assert_eq!(plans[2].period, None);
    }

    #[test]
    fn test_absent_or_blank_price_reads_custom() {
        let data = vec![
            PricingPlanData {
                name: Some("Quote".to_string()),
                price: Some(Price::Text("  ".to_string())),
                ..PricingPlanData::default()
            },
        ];
        let plans = normalize(&data);
        assert_eq!(plans[0].price_text, CUSTOM_PRICE);
    }

    #[test]
    fn test_numeric_price_formatted_with_sign() {
        let data = vec![PricingPlanData {
            price: Some(Price::Number(49.0)),
            interval: Some("yearly".to_string()),
            ..PricingPlanData::default()
        }];
        let plans = normalize(&data);
        assert_eq!(plans[0].price_text, "$49");
        assert_eq!(plans[0].period, Some("/yr"));
    }

    #[test]
    fn test_backend_plans_replace_wholesale() {
        let data = vec![PricingPlanData {
            name: Some("Solo".to_string()),
            ..PricingPlanData::default()
        }];
        let plans = normalize(&data);
        assert_eq!(plans.len(), 1);
        assert_eq!(plans[0].name, "Solo");
        // Remaining fields fall back against the first default plan.
        assert_eq!(plans[0].description, FALLBACK_PLANS[0].description);
    }
}
