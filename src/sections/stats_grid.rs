use leptos::prelude::*;

use crate::content::fallback::{merge_overlay, opt_text, text_or};
use crate::content::types::{StatsGridData, StatsGroup};
use crate::fx::{COUNT_UP_MS, format_stat, once_visible, parse_stat, run_count_up};

const FALLBACK_BADGE: &str = "Website Error Monitoring";
const FALLBACK_HEADING: &str = "Reduced Technical Errors Can Improve Your Bottom Line";
const FALLBACK_SUBHEADING: &str = "Your website could be losing customers without you even \
    knowing it.";

struct GroupDefaults {
    title: &'static str,
    text: &'static str,
    value: &'static str,
    caption: &'static str,
}

const FALLBACK_GROUPS: [GroupDefaults; 4] = [
    GroupDefaults {
        title: "Better HTTPS Configurations",
        text: "More than 95% of websites have undetected redirect or HTTPS configuration issues.",
        value: "95%",
        caption: "",
    },
    GroupDefaults {
        title: "Accurate Physical Address",
        text: "46% of consumers lose trust in a business after finding an incorrect address \
            online.",
        value: "46%",
        caption: "",
    },
    GroupDefaults {
        title: "More Organic Traffic",
        text: "Top 3 Google results capture over half of all clicks.",
        value: "40%",
        caption: "",
    },
    GroupDefaults {
        title: "Faster Page Loads",
        text: "Each extra second of load time can cost ecommerce stores significant revenue.",
        value: "$14,000",
        caption: "",
    },
];

const CARD_THRESHOLD: f64 = 0.2;
const STAGGER_MS: usize = 90;

#[derive(Debug, Clone, PartialEq)]
pub struct StatsGroupView {
    pub title: String,
    pub text: String,
    pub value: String,
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatsGridView {
    pub badge: String,
    pub heading: String,
    pub subheading: String,
    pub featured_image_url: Option<String>,
    pub groups: Vec<StatsGroupView>,
}

fn normalize_group(group: Option<&StatsGroup>, default: &GroupDefaults) -> StatsGroupView {
    StatsGroupView {
        title: text_or(
            group.and_then(|g| g.description_title.as_deref()),
            default.title,
        ),
        text: text_or(
            group.and_then(|g| g.description_text.as_deref()),
            default.text,
        ),
        value: text_or(group.and_then(|g| g.stat_value.as_deref()), default.value),
        caption: opt_text(group.and_then(|g| g.stat_caption.as_deref()))
            .unwrap_or_else(|| default.caption.to_string()),
    }
}

fn normalize(data: Option<&StatsGridData>) -> StatsGridView {
    StatsGridView {
        badge: text_or(data.and_then(|d| d.badge_text.as_deref()), FALLBACK_BADGE),
        heading: text_or(data.and_then(|d| d.heading.as_deref()), FALLBACK_HEADING),
        subheading: text_or(
            data.and_then(|d| d.subheading.as_deref()),
            FALLBACK_SUBHEADING,
        ),
        featured_image_url: data
            .and_then(|d| d.featured_image.as_ref())
            .and_then(|media| media.resolve()),
        groups: merge_overlay(
            data.and_then(|d| d.groups.as_deref()),
            &FALLBACK_GROUPS,
            normalize_group,
        ),
    }
}

/// A cell that slides in once its own anchor intersects the viewport.
#[component]
fn RevealCell(index: usize, children: Children) -> impl IntoView {
    let anchor = NodeRef::<leptos::html::Div>::new();
    let entered = once_visible(anchor, CARD_THRESHOLD);
    view! {
        <div
            node_ref=anchor
            class="stats-cell"
            class:visible=move || entered.get()
            style=format!("transition-delay: {}ms", index * STAGGER_MS)
        >
            {children()}
        </div>
    }
}

#[component]
fn DescriptionCard(title: String, text: String) -> impl IntoView {
    view! {
        <article class="stats-description-card">
            <span class="stats-dot"></span>
            <h3 class="card-title">{title}</h3>
            <p class="card-description">{text}</p>
        </article>
    }
}

/// Counts the stat value up from zero once the surrounding cell is visible.
/// Values without a numeric substring are shown verbatim, unanimated.
#[component]
fn StatisticCard(value: String, caption: String, animate: ReadSignal<bool>) -> impl IntoView {
    let display = match parse_stat(&value) {
        Some(parsed) => {
            let (display, set_display) = signal(format_stat(&parsed, 0.0));
            let started = StoredValue::new(false);
            Effect::new(move || {
                if !animate.get() || started.get_value() {
                    return;
                }
                started.set_value(true);
                run_count_up(parsed.clone(), COUNT_UP_MS, set_display);
            });
            Some(display)
        }
        None => None,
    };

    view! {
        <article class="stats-value-card">
            <p class="stats-value">
                {move || match display {
                    Some(display) => display.get(),
                    None => value.clone(),
                }}
            </p>
            {(!caption.is_empty()).then(|| view! { <p class="stats-caption">{caption}</p> })}
        </article>
    }
}

/// Statistic cell wiring its own visibility to the count-up trigger.
#[component]
fn StatisticCell(index: usize, value: String, caption: String) -> impl IntoView {
    let anchor = NodeRef::<leptos::html::Div>::new();
    let entered = once_visible(anchor, CARD_THRESHOLD);
    view! {
        <div
            node_ref=anchor
            class="stats-cell"
            class:visible=move || entered.get()
            style=format!("transition-delay: {}ms", index * STAGGER_MS)
        >
            <StatisticCard value=value caption=caption animate=entered/>
        </div>
    }
}

#[component]
pub fn StatsGrid(data: Option<StatsGridData>) -> impl IntoView {
    let section = normalize(data.as_ref());
    let group_count = section.groups.len();

    let featured = match section.featured_image_url {
        Some(url) => view! {
            <img src=url alt="Technical issue preview" class="stats-featured-image" loading="lazy"/>
        }
        .into_any(),
        None => view! {
            <div class="stats-featured-placeholder">
                <p>"Featured"<br/>"Image"</p>
            </div>
        }
        .into_any(),
    };

    let description_cells = section
        .groups
        .iter()
        .enumerate()
        .map(|(index, group)| {
            let title = group.title.clone();
            let text = group.text.clone();
            view! {
                <RevealCell index={index + 1}>
                    <DescriptionCard title=title text=text/>
                </RevealCell>
            }
        })
        .collect_view();

    let value_cells = section
        .groups
        .iter()
        .enumerate()
        .map(|(index, group)| {
            view! {
                <StatisticCell
                    index={index + group_count + 1}
                    value=group.value.clone()
                    caption=group.caption.clone()
                />
            }
        })
        .collect_view();

    view! {
        <section class="stats-grid">
            <div class="container">
                <div class="section-header">
                    <span class="section-badge">{section.badge}</span>
                    <h2 class="section-title">{section.heading}</h2>
                    <p class="section-subheading">{section.subheading}</p>
                </div>
                <div class="stats-layout">
                    <RevealCell index=0>
                        <article class="stats-featured-card">{featured}</article>
                    </RevealCell>
                    {description_cells}
                    {value_cells}
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fallback_view() -> StatsGridView {
        StatsGridView {
            badge: FALLBACK_BADGE.to_string(),
            heading: FALLBACK_HEADING.to_string(),
            subheading: FALLBACK_SUBHEADING.to_string(),
            featured_image_url: None,
            groups: FALLBACK_GROUPS
                .iter()
                .map(|d| StatsGroupView {
                    title: d.title.to_string(),
                    text: d.text.to_string(),
                    value: d.value.to_string(),
                    caption: d.caption.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_normalize_null_is_all_fallback() {
        assert_eq!(normalize(None), fallback_view());
    }

    #[test]
    fn test_groups_overlay_keeps_fallback_length() {
        let data = StatsGridData {
            groups: Some(vec![StatsGroup {
                stat_value: Some("88%".to_string()),
                ..StatsGroup::default()
            }]),
            ..StatsGridData::default()
        };
        let view = normalize(Some(&data));
        // One backend group overrides position 0; trailing defaults survive.
        assert_eq!(view.groups.len(), FALLBACK_GROUPS.len());
        assert_eq!(view.groups[0].value, "88%");
        assert_eq!(view.groups[0].title, FALLBACK_GROUPS[0].title);
        assert_eq!(view.groups[3].value, FALLBACK_GROUPS[3].value);
    }
}
