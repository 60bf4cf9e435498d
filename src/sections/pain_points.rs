use leptos::prelude::*;

use crate::content::fallback::{key_or, merge_replace, opt_text, text_or};
use crate::content::types::{PainPointCard, PainPointsData};
use crate::fx::{once_visible, typewriter};

const FALLBACK_BADGE: &str = "Never Miss a Sale Again";
const FALLBACK_HEADING: &str = "Your website might be losing customers silently";
const FALLBACK_SUBHEADING: &str = "Broken contact forms, slow loading pages, or expired \
    certificates often go unnoticed until sales drop and customers stop reaching out.";

const ICON_KEYS: [&str; 3] = ["network", "ranking", "shield"];

struct CardDefaults {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    stat_label: Option<&'static str>,
    stat_delta: Option<&'static str>,
}

const FALLBACK_CARDS: [CardDefaults; 3] = [
    CardDefaults {
        icon: "network",
        title: "Never Lose a Customer to a Broken Website",
        description: "We make sure your website is running smoothly, so your forms and contact \
            info always work, meaning no more missed inquiries or lost sales.",
        stat_label: None,
        stat_delta: None,
    },
    CardDefaults {
        icon: "ranking",
        title: "Boost Your Google Ranking",
        description: "A fast, error-free website helps you rank higher on Google. Kapinet works \
            24/7 to spot and diagnose website errors, and gives detailed, easy-to-follow \
            instructions to fix issues quickly.",
        stat_label: Some("#1"),
        stat_delta: Some("+98%"),
    },
    CardDefaults {
        icon: "shield",
        title: "Avoid Embarrassing Tech Issues",
        description: "Embarrassing technical glitches and hidden problems can hurt your brand \
            image. Kapinet helps you detect and fix issues first, before customers notice.",
        stat_label: None,
        stat_delta: None,
    },
];

const TYPE_THRESHOLD: f64 = 0.35;
const TYPE_TICK_MS: u64 = 12;
const CARDS_THRESHOLD: f64 = 0.3;
const STAGGER_MS: usize = 120;

#[derive(Debug, Clone, PartialEq)]
pub struct PainPointCardView {
    pub title: String,
    pub description: String,
    pub icon_key: &'static str,
    pub image_url: Option<String>,
    pub stat_label: Option<String>,
    pub stat_delta: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PainPointsView {
    pub badge: String,
    pub heading: String,
    pub subheading: String,
    pub cards: Vec<PainPointCardView>,
}

fn normalize_card(card: &PainPointCard, default: &CardDefaults) -> PainPointCardView {
    PainPointCardView {
        title: text_or(card.title.as_deref(), default.title),
        description: text_or(card.description.as_deref(), default.description),
        icon_key: key_or(card.icon_key.as_deref(), &ICON_KEYS, default.icon),
        image_url: card.image.as_ref().and_then(|media| media.resolve()),
        stat_label: opt_text(card.stat_label.as_deref())
            .or_else(|| default.stat_label.map(str::to_string)),
        stat_delta: opt_text(card.stat_delta.as_deref())
            .or_else(|| default.stat_delta.map(str::to_string)),
    }
}

fn seed_card(default: &CardDefaults) -> PainPointCardView {
    PainPointCardView {
        title: default.title.to_string(),
        description: default.description.to_string(),
        icon_key: default.icon,
        image_url: None,
        stat_label: default.stat_label.map(str::to_string),
        stat_delta: default.stat_delta.map(str::to_string),
    }
}

fn normalize(data: Option<&PainPointsData>) -> PainPointsView {
    PainPointsView {
        badge: text_or(data.and_then(|d| d.badge_text.as_deref()), FALLBACK_BADGE),
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
fn NetworkGraphic() -> impl IntoView {
    let nodes: [(i32, i32); 8] = [
        (28, 28),
        (68, 16),
        (68, 90),
        (116, 20),
        (156, 36),
        (196, 16),
        (196, 58),
        (196, 90),
    ];
    view! {
        <div class="card-graphic">
            <svg viewBox="0 0 224 112" fill="none" aria-hidden="true">
                <g stroke="#d4dcf8" stroke-width="2">
                    {nodes
                        .iter()
                        .map(|(x, y)| {
                            view! {
                                <line x1="116" y1="58" x2=x.to_string() y2=y.to_string()/>
                            }
                        })
                        .collect_view()}
                </g>
                {nodes
                    .iter()
                    .map(|(x, y)| {
                        view! {
                            <circle cx=x.to_string() cy=y.to_string() r="10" fill="#dae4ff"/>
                        }
                    })
                    .collect_view()}
                <circle cx="116" cy="58" r="17" fill="#5d76f7"/>
                <path d="M120 48L112 59H118L112 68" stroke="white" stroke-width="2.6"/>
            </svg>
        </div>
    }
}

#[component]
fn RankingGraphic(stat_label: Option<String>, stat_delta: Option<String>) -> impl IntoView {
    let bars = [24, 32, 50, 44, 56, 62];
    view! {
        <div class="card-graphic ranking">
            <div class="ranking-stat">
                <span class="ranking-position">{stat_label.unwrap_or_else(|| "#1".to_string())}</span>
                <span class="ranking-delta">{stat_delta.unwrap_or_else(|| "+98%".to_string())}</span>
            </div>
            <div class="ranking-bars">
                {bars
                    .iter()
                    .enumerate()
                    .map(|(index, height)| {
                        view! {
                            <div
                                class=if index == 2 { "ranking-bar accent" } else { "ranking-bar" }
                                style=format!("height: {height}px")
                            ></div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn ShieldGraphic() -> impl IntoView {
    view! {
        <div class="card-graphic">
            <svg viewBox="0 0 224 112" fill="none" aria-hidden="true">
                <circle cx="40" cy="18" r="11" fill="#d8d2e7"/>
                <circle cx="34" cy="56" r="11" fill="#d8d2e7"/>
                <circle cx="44" cy="94" r="11" fill="#d8d2e7"/>
                <circle cx="186" cy="18" r="11" fill="#d8d2e7"/>
                <circle cx="198" cy="56" r="11" fill="#d8d2e7"/>
                <circle cx="188" cy="94" r="11" fill="#d8d2e7"/>
                <path
                    d="M112 18L140 26V62L112 88L84 62V26L112 18Z"
                    fill="#7f6cf9"
                    stroke="#6c57f2"
                    stroke-width="2"
                />
                <circle cx="112" cy="46" r="14" fill="#ffd94b"/>
            </svg>
        </div>
    }
}

#[component]
fn CardGraphic(card: PainPointCardView) -> impl IntoView {
    match card.image_url {
        Some(url) => view! {
            <img src=url alt=card.title class="card-image" loading="lazy"/>
        }
        .into_any(),
        None => match card.icon_key {
            "ranking" => view! {
                <RankingGraphic stat_label=card.stat_label stat_delta=card.stat_delta/>
            }
            .into_any(),
            "shield" => view! { <ShieldGraphic/> }.into_any(),
            _ => view! { <NetworkGraphic/> }.into_any(),
        },
    }
}

#[component]
pub fn PainPoints(data: Option<PainPointsData>) -> impl IntoView {
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
            let title = card.title.clone();
            let description = card.description.clone();
            view! {
                <article
                    class="pain-card"
                    class:visible=move || cards_entered.get()
                    style=delay
                >
                    <CardGraphic card=card/>
                    <h3 class="card-title">{title}</h3>
                    <p class="card-description">{description}</p>
                </article>
            }
        })
        .collect_view();

    view! {
        <section class="pain-points">
            <div class="container">
                <div class="section-header">
                    <span class="section-badge">{section.badge}</span>
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

    fn fallback_view() -> PainPointsView {
        PainPointsView {
            badge: FALLBACK_BADGE.to_string(),
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
    fn test_backend_cards_replace_wholesale() {
        let data = PainPointsData {
            cards: Some(vec![PainPointCard {
                title: Some("Only card".to_string()),
                ..PainPointCard::default()
            }]),
            ..PainPointsData::default()
        };
        let view = normalize(Some(&data));
        // One backend card fully replaces the three fallback cards.
        assert_eq!(view.cards.len(), 1);
        assert_eq!(view.cards[0].title, "Only card");
        // Its remaining fields fall back against fallback card 0.
        assert_eq!(view.cards[0].description, FALLBACK_CARDS[0].description);
        assert_eq!(view.cards[0].icon_key, "network");
    }

    #[test]
    fn test_invalid_icon_key_falls_back_positionally() {
        let data = PainPointsData {
            cards: Some(vec![
                PainPointCard::default(),
                PainPointCard {
                    icon_key: Some("sparkles".to_string()),
                    ..PainPointCard::default()
                },
                PainPointCard {
                    icon_key: Some("shield".to_string()),
                    ..PainPointCard::default()
                },
            ]),
            ..PainPointsData::default()
        };
        let view = normalize(Some(&data));
        assert_eq!(view.cards[0].icon_key, "network");
        assert_eq!(view.cards[1].icon_key, "ranking");
        assert_eq!(view.cards[2].icon_key, "shield");
    }

    #[test]
    fn test_no_empty_fields_with_partial_backend() {
        let data = PainPointsData {
            badge_text: Some("   ".to_string()),
            heading: Some("Real heading".to_string()),
            ..PainPointsData::default()
        };
        let view = normalize(Some(&data));
        assert_eq!(view.badge, FALLBACK_BADGE);
        assert_eq!(view.heading, "Real heading");
        assert!(!view.subheading.is_empty());
        assert!(view.cards.iter().all(|c| !c.title.is_empty() && !c.description.is_empty()));
    }
}
