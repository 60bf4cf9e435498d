use leptos::prelude::*;

use crate::content::fallback::{merge_replace, text_or};
use crate::content::types::{ResourceCard, ResourcesData};
use crate::fx::{once_visible, typewriter};

const FALLBACK_HEADING: &str = "Latest Insights";
const FALLBACK_SUBHEADING: &str = "Expert perspectives on digital marketing, SEO, and business \
    growth strategies";
const FALLBACK_LINK_URL: &str = "#";

struct CardDefaults {
    category: &'static str,
    title: &'static str,
    description: &'static str,
    link_label: &'static str,
    icon: &'static str,
}

const FALLBACK_CARDS: [CardDefaults; 3] = [
    CardDefaults {
        category: "Guide",
        title: "How to Fix a Broken Contact Form in 5 Steps",
        description: "A step-by-step guide to diagnosing and resolving the most common contact \
            form issues.",
        link_label: "Read guide",
        icon: "book",
    },
    CardDefaults {
        category: "Case Study",
        title: "How Acme Co. Reduced Downtime by 85%",
        description: "Learn how a mid-sized e-commerce store used Kapinet to protect $120k in \
            monthly revenue.",
        link_label: "Read case study",
        icon: "chart",
    },
    CardDefaults {
        category: "Checklist",
        title: "The Ultimate Website Health Checklist",
        description: "12 things every business owner should check on their website every month \
            — with a downloadable PDF.",
        link_label: "Get checklist",
        icon: "check",
    },
];

const TYPE_THRESHOLD: f64 = 0.35;
const TYPE_TICK_MS: u64 = 28;
const CARDS_THRESHOLD: f64 = 0.2;
const STAGGER_MS: usize = 120;

#[derive(Debug, Clone, PartialEq)]
pub struct ResourceCardView {
    pub category: String,
    pub title: String,
    pub description: String,
    pub link_label: String,
    pub link_url: String,
    pub icon_key: String,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResourcesView {
    pub heading: String,
    pub subheading: String,
    pub cards: Vec<ResourceCardView>,
}

/// CSS class for a category pill; unknown categories get the neutral style.
fn category_class(category: &str) -> &'static str {
    match category {
        "Guide" => "category-pill guide",
        "Case Study" => "category-pill case-study",
        "Checklist" => "category-pill checklist",
        "Video" => "category-pill video",
        "Tutorial" => "category-pill tutorial",
        _ => "category-pill",
    }
}

fn normalize_card(card: &ResourceCard, default: &CardDefaults) -> ResourceCardView {
    ResourceCardView {
        category: text_or(card.category.as_deref(), default.category),
        title: text_or(card.title.as_deref(), default.title),
        description: text_or(card.description.as_deref(), default.description),
        link_label: text_or(card.link_label.as_deref(), default.link_label),
        link_url: text_or(card.link_url.as_deref(), FALLBACK_LINK_URL),
        icon_key: text_or(card.icon_key.as_deref(), default.icon),
        image_url: card.image.as_ref().and_then(|media| media.resolve()),
    }
}

fn seed_card(default: &CardDefaults) -> ResourceCardView {
    ResourceCardView {
        category: default.category.to_string(),
        title: default.title.to_string(),
        description: default.description.to_string(),
        link_label: default.link_label.to_string(),
        link_url: FALLBACK_LINK_URL.to_string(),
        icon_key: default.icon.to_string(),
        image_url: None,
    }
}

fn normalize(data: Option<&ResourcesData>) -> ResourcesView {
    ResourcesView {
        heading: text_or(data.and_then(|d| d.heading.as_deref()), FALLBACK_HEADING),
        subheading: text_or(
            data.and_then(|d| d.subheading.as_deref()),
            FALLBACK_SUBHEADING,
        ),
        cards: merge_replace(
            data.and_then(|d| d.cards.as_deref()),
            &FALLBACK_CARDS,
            normalize_card,
            seed_card,
        ),
    }
}

#[component]
fn ResourceIcon(icon_key: String) -> impl IntoView {
    let path = match icon_key.to_lowercase().as_str() {
        "book" => {
            "M12 6.253v13m0-13C10.832 5.477 9.246 5 7.5 5S4.168 5.477 3 6.253v13C4.168 \
             18.477 5.754 18 7.5 18s3.332.477 4.5 1.253m0-13C13.168 5.477 14.754 5 16.5 \
             5c1.747 0 3.332.477 4.5 1.253v13C19.832 18.477 18.247 18 16.5 18c-1.746 \
             0-3.332.477-4.5 1.253"
        }
        "chart" => {
            "M9 19v-6a2 2 0 00-2-2H5a2 2 0 00-2 2v6a2 2 0 002 2h2a2 2 0 002-2zm0 0V9a2 2 0 \
             012-2h2a2 2 0 012 2v10m-6 0a2 2 0 002 2h2a2 2 0 002-2m0 0V5a2 2 0 012-2h2a2 2 0 \
             012 2v14a2 2 0 01-2 2h-2a2 2 0 01-2-2z"
        }
        "check" => {
            "M9 5H7a2 2 0 00-2 2v12a2 2 0 002 2h10a2 2 0 002-2V7a2 2 0 00-2-2h-2M9 5a2 2 0 \
             002 2h2a2 2 0 002-2M9 5a2 2 0 012-2h2a2 2 0 012 2m-6 9l2 2 4-4"
        }
        "video" => {
            "M14.752 11.168l-3.197-2.132A1 1 0 0010 9.87v4.263a1 1 0 001.555.832l3.197-2.132a1 \
             1 0 000-1.664zM21 12a9 9 0 11-18 0 9 9 0 0118 0z"
        }
        _ => {
            "M9 12h6m-6 4h6m2 5H7a2 2 0 01-2-2V5a2 2 0 012-2h5.586a1 1 0 01.707.293l5.414 \
             5.414a1 1 0 01.293.707V19a2 2 0 01-2 2z"
        }
    };
    view! {
        <svg class="resource-icon" fill="none" viewBox="0 0 24 24" stroke="currentColor" stroke-width="2" aria-hidden="true">
            <path stroke-linecap="round" stroke-linejoin="round" d=path/>
        </svg>
    }
}

#[component]
pub fn Resources(data: Option<ResourcesData>) -> impl IntoView {
    let section = normalize(data.as_ref());

    let subheading_anchor = NodeRef::<leptos::html::P>::new();
    let typing = once_visible(subheading_anchor, TYPE_THRESHOLD);
    let typed = typewriter(typing, section.subheading.clone(), TYPE_TICK_MS);

    let cards_anchor = NodeRef::<leptos::html::Div>::new();
    let cards_entered = once_visible(cards_anchor, CARDS_THRESHOLD);

    let cards = section
        .cards
        .into_iter()
        .enumerate()
        .map(|(index, card)| {
            let delay = format!("transition-delay: {}ms", index * STAGGER_MS);
            let media = match card.image_url {
                Some(url) => view! {
                    <img src=url alt=card.title.clone() class="resource-image" loading="lazy"/>
                }
                .into_any(),
                None => view! {
                    <div class="resource-placeholder">
                        <ResourceIcon icon_key=card.icon_key/>
                    </div>
                }
                .into_any(),
            };
            view! {
                <article
                    class="resource-card"
                    class:visible=move || cards_entered.get()
                    style=delay
                >
                    {media}
                    <div class="resource-body">
                        <span class=category_class(&card.category)>{card.category.clone()}</span>
                        <h3 class="card-title">{card.title}</h3>
                        <p class="card-description">{card.description}</p>
                        <a href=card.link_url class="resource-link">
                            {card.link_label}
                        </a>
                    </div>
                </article>
            }
        })
        .collect_view();

    view! {
        <section class="resources">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">{section.heading}</h2>
                    <p class="section-subheading" node_ref=subheading_anchor>
                        {move || typed.get()}
                    </p>
                </div>
                <div class="card-grid" node_ref=cards_anchor>
                    {cards}
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fallback_view() -> ResourcesView {
        ResourcesView {
            heading: FALLBACK_HEADING.to_string(),
            subheading: FALLBACK_SUBHEADING.to_string(),
            cards: FALLBACK_CARDS.iter().map(seed_card).collect(),
        }
    }

    #[test]
    fn test_normalize_null_is_all_fallback() {
        assert_eq!(normalize(None), fallback_view());
    }

    #[test]
    fn test_category_class_known_and_unknown() {
        assert_eq!(category_class("Guide"), "category-pill guide");
        assert_eq!(category_class("Case Study"), "category-pill case-study");
        assert_eq!(category_class("Webinar"), "category-pill");
    }

    #[test]
    fn test_backend_cards_fall_back_per_field() {
        let data = ResourcesData {
            cards: Some(vec![ResourceCard {
                title: Some("Fresh title".to_string()),
                ..ResourceCard::default()
            }]),
            ..ResourcesData::default()
        };
        let view = normalize(Some(&data));
        assert_eq!(view.cards.len(), 1);
        assert_eq!(view.cards[0].title, "Fresh title");
        assert_eq!(view.cards[0].category, FALLBACK_CARDS[0].category);
        assert_eq!(view.cards[0].link_url, FALLBACK_LINK_URL);
    }
}
