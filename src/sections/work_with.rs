use leptos::prelude::*;

use crate::content::fallback::{merge_replace, opt_text, text_or};
use crate::content::types::WorkWithData;
use crate::fx::once_visible;

const FALLBACK_HEADING: &str = "Works With Any Website";
const FALLBACK_NAMES: [&str; 8] = [
    "Weebly",
    "Drupal",
    "Webflow",
    "Squarespace",
    "Shopify",
    "Joomla!",
    "Wix",
    "WordPress",
];

const REVEAL_THRESHOLD: f64 = 0.2;
const STAGGER_MS: usize = 90;

#[derive(Debug, Clone, PartialEq)]
pub struct LogoImage {
    pub src: String,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogoView {
    pub name: String,
    pub link: Option<String>,
    pub image: Option<LogoImage>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkWithView {
    pub heading: String,
    pub items: Vec<LogoView>,
}

fn normalize(data: Option<&WorkWithData>) -> WorkWithView {
    WorkWithView {
        heading: text_or(data.and_then(|d| d.heading.as_deref()), FALLBACK_HEADING),
        items: merge_replace(
            data.and_then(|d| d.logo_items.as_deref()),
            &FALLBACK_NAMES,
            |item, fallback_name| LogoView {
                name: text_or(item.name.as_deref(), fallback_name),
                link: opt_text(item.url.as_deref()),
                image: item.logo.as_ref().and_then(|media| {
                    media.resolve().map(|src| {
                        let (width, height) = media.dimensions_or(180, 60);
                        LogoImage { src, width, height }
                    })
                }),
            },
            |fallback_name| LogoView {
                name: fallback_name.to_string(),
                link: None,
                image: None,
            },
        ),
    }
}

#[component]
pub fn WorkWith(data: Option<WorkWithData>) -> impl IntoView {
    let section = normalize(data.as_ref());
    let strip = NodeRef::<leptos::html::Div>::new();
    let entered = once_visible(strip, REVEAL_THRESHOLD);

    let items = section
        .items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let delay = format!("transition-delay: {}ms", index * STAGGER_MS);
            match item.image {
                Some(image) => {
                    let img = view! {
                        <img
                            src=image.src
                            alt=item.name.clone()
                            width=image.width.to_string()
                            height=image.height.to_string()
                            class="logo-image"
                            loading="lazy"
                        />
                    };
                    match item.link {
                        Some(link) => view! {
                            <a
                                href=link
                                target="_blank"
                                rel="noopener noreferrer"
                                class="logo-item"
                                class:visible=move || entered.get()
                                style=delay
                                aria-label=item.name
                            >
                                {img}
                            </a>
                        }
                        .into_any(),
                        None => view! {
                            <div
                                class="logo-item"
                                class:visible=move || entered.get()
                                style=delay
                            >
                                {img}
                            </div>
                        }
                        .into_any(),
                    }
                }
                None => view! {
                    <span
                        class="logo-item logo-name"
                        class:visible=move || entered.get()
                        style=delay
                    >
                        {item.name}
                    </span>
                }
                .into_any(),
            }
        })
        .collect_view();

    view! {
        <section class="work-with">
            <div class="container">
                <h2 class="work-with-heading">{section.heading}</h2>
                <div class="logo-strip" node_ref=strip>
                    {items}
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::media::MediaRef;
    use crate::content::types::LogoItem;

    fn fallback_view() -> WorkWithView {
        WorkWithView {
            heading: FALLBACK_HEADING.to_string(),
            items: FALLBACK_NAMES
                .iter()
                .map(|name| LogoView {
                    name: name.to_string(),
                    link: None,
                    image: None,
                })
                .collect(),
        }
    }

    #[test]
    fn test_normalize_null_is_all_fallback() {
        assert_eq!(normalize(None), fallback_view());
    }

    #[test]
    fn test_normalize_empty_list_is_all_fallback() {
        let data = WorkWithData {
            logo_items: Some(Vec::new()),
            ..WorkWithData::default()
        };
        assert_eq!(normalize(Some(&data)), fallback_view());
    }

    #[test]
    fn test_backend_items_replace_wholesale() {
        let data = WorkWithData {
            heading: Some("Our partners".to_string()),
            logo_items: Some(vec![LogoItem {
                name: Some("Ghost".to_string()),
                url: Some("https://ghost.org".to_string()),
                logo: None,
            }]),
        };
        let view = normalize(Some(&data));
        assert_eq!(view.heading, "Our partners");
        assert_eq!(view.items.len(), 1);
        assert_eq!(view.items[0].name, "Ghost");
        assert_eq!(view.items[0].link.as_deref(), Some("https://ghost.org"));
    }

    #[test]
    fn test_unnamed_item_takes_positional_name() {
        let data = WorkWithData {
            logo_items: Some(vec![
                LogoItem::default(),
                LogoItem {
                    logo: Some(MediaRef::default()),
                    ..LogoItem::default()
                },
            ]),
            ..WorkWithData::default()
        };
        let view = normalize(Some(&data));
        assert_eq!(view.items[0].name, FALLBACK_NAMES[0]);
        assert_eq!(view.items[1].name, FALLBACK_NAMES[1]);
        assert!(view.items[1].image.is_none());
    }
}
