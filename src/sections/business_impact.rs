use leptos::prelude::*;

use crate::content::fallback::{key_or, merge_replace, opt_text, text_or};
use crate::content::types::{BusinessImpactData, ImpactCard};
use crate::fx::{once_visible, typewriter};

const FALLBACK_HEADING: &str = "Real Business Consequences";
const FALLBACK_SUBHEADING: &str = "Broken flows quietly cost trust and revenue. Kapinet helps \
    teams catch issues early and avoid expensive surprises.";

const IMAGE_POSITIONS: [&str; 2] = ["left", "right"];

struct CardDefaults {
    icon: &'static str,
    stat: &'static str,
    label: &'static str,
    description: &'static str,
    image_position: &'static str,
}

const FALLBACK_CARDS: [CardDefaults; 2] = [
    CardDefaults {
        icon: "shield",
        stat: "Trust & Revenue",
        label: "Real Business Consequences",
        description: "A broken website can lead to lost trust, missed opportunities, and direct \
            revenue loss.",
        image_position: "left",
    },
    CardDefaults {
        icon: "chart",
        stat: "What You Cannot Miss",
        label: "What You Cannot Afford to Miss",
        description: "Slow pages and broken forms can hurt conversions and customer confidence \
            before anyone reports it.",
        image_position: "right",
    },
];

const TYPE_THRESHOLD: f64 = 0.35;
const TYPE_TICK_MS: u64 = 14;
const CARD_THRESHOLD: f64 = 0.2;
const STAGGER_MS: usize = 130;

#[derive(Debug, Clone, PartialEq)]
pub struct ImpactCardView {
    pub icon_key: String,
    pub stat: String,
    pub label: String,
    pub description: String,
    pub image_url: Option<String>,
    pub image_position: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BusinessImpactView {
    pub heading: String,
    pub subheading: String,
    pub cards: Vec<ImpactCardView>,
}

fn normalize_card(card: &ImpactCard, default: &CardDefaults) -> ImpactCardView {
    ImpactCardView {
        icon_key: opt_text(card.icon_key.as_deref()).unwrap_or_else(|| default.icon.to_string()),
        stat: text_or(card.stat.as_deref(), default.stat),
        label: text_or(card.label.as_deref(), default.label),
        description: text_or(card.description.as_deref(), default.description),
        image_url: card.image.as_ref().and_then(|media| media.resolve()),
        image_position: key_or(
            card.image_position.as_deref(),
            &IMAGE_POSITIONS,
            default.image_position,
        ),
    }
}

fn seed_card(default: &CardDefaults) -> ImpactCardView {
    ImpactCardView {
        icon_key: default.icon.to_string(),
        stat: default.stat.to_string(),
        label: default.label.to_string(),
        description: default.description.to_string(),
        image_url: None,
        image_position: default.image_position,
    }
}

fn normalize(data: Option<&BusinessImpactData>) -> BusinessImpactView {
    BusinessImpactView {
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
fn ImpactIcon(icon_key: String) -> impl IntoView {
    let path = match icon_key.to_lowercase().as_str() {
        "shield" => {
            "M9 12l2 2 4-4m5.618-4.016A11.955 11.955 0 0112 2.944a11.955 11.955 0 01-8.618 \
             3.04A12.02 12.02 0 003 9c0 5.591 3.824 10.29 9 11.622 5.176-1.332 9-6.03 \
             9-11.622 0-1.042-.133-2.052-.382-3.016z"
        }
        "users" => {
            "M12 4.354a4 4 0 110 5.292M15 21H3v-1a6 6 0 0112 0v1zm0 0h6v-1a6 6 0 \
             00-9-5.197M13 7a4 4 0 11-8 0 4 4 0 018 0z"
        }
        "zap" => "M13 10V3L4 14h7v7l9-11h-7z",
        _ => {
            "M9 19v-6a2 2 0 00-2-2H5a2 2 0 00-2 2v6a2 2 0 002 2h2a2 2 0 002-2zm0 0V9a2 2 0 \
             012-2h2a2 2 0 012 2v10m-6 0a2 2 0 002 2h2a2 2 0 002-2m0 0V5a2 2 0 012-2h2a2 2 0 \
             012 2v14a2 2 0 01-2 2h-2a2 2 0 01-2-2z"
        }
    };
    view! {
        <svg class="impact-icon" fill="none" viewBox="0 0 24 24" stroke="currentColor" stroke-width="2" aria-hidden="true">
            <path stroke-linecap="round" stroke-linejoin="round" d=path/>
        </svg>
    }
}

#[component]
fn ImpactCardBlock(index: usize, card: ImpactCardView) -> impl IntoView {
    let anchor = NodeRef::<leptos::html::Article>::new();
    let entered = once_visible(anchor, CARD_THRESHOLD);
    let delay = format!("transition-delay: {}ms", index * STAGGER_MS);

    let media = match card.image_url {
        Some(url) => view! {
            <img src=url alt=card.label.clone() class="impact-image" loading="lazy"/>
        }
        .into_any(),
        None => view! {
            <div class="impact-placeholder">
                <ImpactIcon icon_key=card.icon_key/>
            </div>
        }
        .into_any(),
    };

    view! {
        <article
            node_ref=anchor
            class=format!("impact-card media-{}", card.image_position)
            class:visible=move || entered.get()
            style=delay
        >
            <div class="impact-content">
                <span class="impact-eyebrow">{card.stat}</span>
                <h3 class="card-title">{card.label}</h3>
                <p class="card-description">{card.description}</p>
            </div>
            <div class="impact-media">{media}</div>
        </article>
    }
}

#[component]
pub fn BusinessImpact(data: Option<BusinessImpactData>) -> impl IntoView {
    let section = normalize(data.as_ref());

    let subheading_anchor = NodeRef::<leptos::html::P>::new();
    let typing = once_visible(subheading_anchor, TYPE_THRESHOLD);
    let typed = typewriter(typing, section.subheading.clone(), TYPE_TICK_MS);

    let cards = section
        .cards
        .into_iter()
        .enumerate()
        .map(|(index, card)| view! { <ImpactCardBlock index=index card=card/> })
        .collect_view();

    view! {
        <section class="business-impact">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">{section.heading}</h2>
                    <p class="section-subheading" node_ref=subheading_anchor>
                        {move || typed.get()}
                    </p>
                </div>
                <div class="impact-list">{cards}</div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fallback_view() -> BusinessImpactView {
        BusinessImpactView {
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
    fn test_image_position_validated() {
        let data = BusinessImpactData {
            cards: Some(vec![
                ImpactCard {
                    image_position: Some("right".to_string()),
                    ..ImpactCard::default()
                },
                ImpactCard {
                    image_position: Some("center".to_string()),
                    ..ImpactCard::default()
                },
            ]),
            ..BusinessImpactData::default()
        };
        let view = normalize(Some(&data));
        assert_eq!(view.cards[0].image_position, "right");
        // Unknown value falls back to the positional default.
        assert_eq!(view.cards[1].image_position, "right");
    }

    #[test]
    fn test_overflow_card_uses_last_default() {
        let data = BusinessImpactData {
            cards: Some(vec![
                ImpactCard::default(),
                ImpactCard::default(),
                ImpactCard {
                    stat: Some("Extra".to_string()),
                    ..ImpactCard::default()
                },
            ]),
            ..BusinessImpactData::default()
        };
        let view = normalize(Some(&data));
        assert_eq!(view.cards.len(), 3);
        assert_eq!(view.cards[2].stat, "Extra");
        assert_eq!(view.cards[2].label, FALLBACK_CARDS[1].label);
    }
}
