use leptos::prelude::*;

use crate::content::fallback::{merge_replace, text_or};
use crate::content::types::{FaqItem, LandingFaqData};
use crate::fx::once_visible;
use crate::sections::icons::Chevron;

const FALLBACK_BADGE: &str = "Real Business Impact";
const FALLBACK_HEADING: &str = "Small Errors. Big Business consequences.";
const FALLBACK_SUBHEADING: &str = "Many website problems are silent. You may not even know they \
    exist until your sales start dropping.";

struct FaqDefaults {
    question: &'static str,
    answer: &'static str,
}

const FALLBACK_FAQS: [FaqDefaults; 3] = [
    FaqDefaults {
        question: "Your SEO Determines Business Success",
        answer: "Less than 1% of users ever click on a page-2 search result. Poor technical SEO \
            can quietly erase most of your website's traffic.",
    },
    FaqDefaults {
        question: "A Slow Website Can Tank Your Sales",
        answer: "Even a one-second slowdown can reduce conversions and increase bounce rates, \
            especially on mobile traffic.",
    },
    FaqDefaults {
        question: "Broken Forms Mean Lost Leads",
        answer: "If contact forms fail silently, qualified prospects never reach your team and \
            revenue opportunities disappear.",
    },
];

const IMAGE_THRESHOLD: f64 = 0.25;
const LIST_THRESHOLD: f64 = 0.18;
const STAGGER_MS: usize = 120;

#[derive(Debug, Clone, PartialEq)]
pub struct FaqItemView {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LandingFaqView {
    pub badge: String,
    pub heading: String,
    pub subheading: String,
    pub featured_image_url: Option<String>,
    pub faqs: Vec<FaqItemView>,
}

fn normalize(data: Option<&LandingFaqData>) -> LandingFaqView {
    LandingFaqView {
        badge: text_or(data.and_then(|d| d.badge_text.as_deref()), FALLBACK_BADGE),
        heading: text_or(data.and_then(|d| d.heading.as_deref()), FALLBACK_HEADING),
        subheading: text_or(
            data.and_then(|d| d.subheading.as_deref()),
            FALLBACK_SUBHEADING,
        ),
        featured_image_url: data
            .and_then(|d| d.featured_image.as_ref())
            .and_then(|media| media.resolve()),
        faqs: merge_replace(
            data.and_then(|d| d.faqs.as_deref()),
            &FALLBACK_FAQS,
            |item: &FaqItem, default| FaqItemView {
                question: text_or(item.question.as_deref(), default.question),
                answer: text_or(item.answer.as_deref(), default.answer),
            },
            |default| FaqItemView {
                question: default.question.to_string(),
                answer: default.answer.to_string(),
            },
        ),
    }
}

#[component]
pub fn LandingFaq(data: Option<LandingFaqData>) -> impl IntoView {
    let section = normalize(data.as_ref());
    let faq_count = section.faqs.len();

    let image_anchor = NodeRef::<leptos::html::Article>::new();
    let image_entered = once_visible(image_anchor, IMAGE_THRESHOLD);

    let list_anchor = NodeRef::<leptos::html::Div>::new();
    let list_entered = once_visible(list_anchor, LIST_THRESHOLD);

    let (open_index, set_open_index) = signal(0usize);
    // An index past the list (after a shorter backend list replaced the
    // default one) reopens the first entry.
    let open = move || {
        let index = open_index.get();
        if index < faq_count { index } else { 0 }
    };

    let image = match section.featured_image_url {
        Some(url) => view! {
            <img src=url alt="FAQ visual" class="faq-image" loading="lazy"/>
        }
        .into_any(),
        None => view! {
            <div class="faq-image-placeholder">
                <span class="faq-question-mark">"?"</span>
            </div>
        }
        .into_any(),
    };

    let entries = section
        .faqs
        .into_iter()
        .enumerate()
        .map(|(index, faq)| {
            let number = format!("{:02}", index + 1);
            let delay = format!("transition-delay: {}ms", index * STAGGER_MS);
            let is_open = move || open() == index;
            view! {
                <div
                    class="faq-entry"
                    class:visible=move || list_entered.get()
                    style=delay
                >
                    <button
                        type="button"
                        class="faq-toggle"
                        class:open=is_open
                        aria-expanded=is_open
                        on:click=move |_| set_open_index.set(index)
                    >
                        <span class="faq-number">{number}</span>
                        <span class="faq-text">
                            <h3 class="faq-question">{faq.question}</h3>
                            <p class="faq-answer" class:open=is_open>
                                {faq.answer}
                            </p>
                        </span>
                        <span class="faq-chevron" class:open=is_open>
                            <Chevron/>
                        </span>
                    </button>
                </div>
            }
        })
        .collect_view();

    view! {
        <section class="landing-faq">
            <div class="container">
                <div class="section-header">
                    <span class="section-badge">{section.badge}</span>
                    <h2 class="section-title">{section.heading}</h2>
                    <p class="section-subheading">{section.subheading}</p>
                </div>

                <div class="faq-layout">
                    <article
                        node_ref=image_anchor
                        class="faq-image-card"
                        class:visible=move || image_entered.get()
                    >
                        {image}
                    </article>

                    <div class="faq-list" node_ref=list_anchor>
                        {entries}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fallback_view() -> LandingFaqView {
        LandingFaqView {
            badge: FALLBACK_BADGE.to_string(),
            heading: FALLBACK_HEADING.to_string(),
            subheading: FALLBACK_SUBHEADING.to_string(),
            featured_image_url: None,
            faqs: FALLBACK_FAQS
                .iter()
                .map(|d| FaqItemView {
                    question: d.question.to_string(),
                    answer: d.answer.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_normalize_null_is_all_fallback() {
        assert_eq!(normalize(None), fallback_view());
    }

    #[test]
    fn test_backend_faqs_replace_wholesale() {
        let data = LandingFaqData {
            faqs: Some(vec![FaqItem {
                question: Some("Only question".to_string()),
                answer: None,
            }]),
            ..LandingFaqData::default()
        };
        let view = normalize(Some(&data));
        assert_eq!(view.faqs.len(), 1);
        assert_eq!(view.faqs[0].question, "Only question");
        assert_eq!(view.faqs[0].answer, FALLBACK_FAQS[0].answer);
    }
}
