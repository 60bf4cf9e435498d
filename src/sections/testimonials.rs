use leptos::prelude::*;

use crate::content::fallback::{merge_replace, opt_text, text_or};
use crate::content::types::TestimonialData;
use crate::sections::icons::Star;

const HEADING: &str = "Loved by teams worldwide";
const SUBHEADING: &str = "Do not just take our word for it. See what customers say.";
const FALLBACK_AUTHOR: &str = "Anonymous";

struct TestimonialDefaults {
    quote: &'static str,
    rating: u8,
    author: &'static str,
    role: &'static str,
    company: &'static str,
}

const FALLBACK_TESTIMONIALS: [TestimonialDefaults; 3] = [
    TestimonialDefaults {
        quote: "Kapinet caught a broken checkout form before we lost a single order, and the fix \
            instructions were spot on.",
        rating: 5,
        author: "Sarah Mitchell",
        role: "Owner",
        company: "Bloom & Branch",
    },
    TestimonialDefaults {
        quote: "Our contact form had been failing silently for weeks. Kapinet flagged it on day \
            one and walked us through the repair.",
        rating: 5,
        author: "David Okafor",
        role: "Director",
        company: "Okafor Legal",
    },
    TestimonialDefaults {
        quote: "We moved up two spots on Google after clearing the issues Kapinet found. The \
            monthly report alone is worth it.",
        rating: 5,
        author: "Priya Raman",
        role: "Marketing Lead",
        company: "Raman & Co",
    },
];

#[derive(Debug, Clone, PartialEq)]
pub struct TestimonialView {
    pub quote: String,
    pub rating: u8,
    pub author: String,
    pub role: Option<String>,
    pub company: Option<String>,
    pub avatar_url: Option<String>,
}

impl TestimonialView {
    /// "Role - Company", whichever parts exist.
    pub fn byline(&self) -> Option<String> {
        let parts: Vec<&str> = [self.role.as_deref(), self.company.as_deref()]
            .into_iter()
            .flatten()
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" - "))
        }
    }

    pub fn initial(&self) -> String {
        self.author
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_else(|| "?".to_string())
    }
}

fn clamp_rating(rating: Option<f64>, default: u8) -> u8 {
    match rating {
        Some(value) => value.clamp(0.0, 5.0) as u8,
        None => default,
    }
}

fn normalize_one(data: &TestimonialData, default: &TestimonialDefaults) -> TestimonialView {
    // The author arrives under `author_name`, or `name` in older payloads.
    let author = opt_text(data.author_name.as_deref())
        .or_else(|| opt_text(data.name.as_deref()))
        .unwrap_or_else(|| FALLBACK_AUTHOR.to_string());
    TestimonialView {
        quote: text_or(data.quote.as_deref(), default.quote),
        rating: clamp_rating(data.rating, default.rating),
        author,
        role: opt_text(data.role.as_deref()).or_else(|| Some(default.role.to_string())),
        company: opt_text(data.company.as_deref()).or_else(|| Some(default.company.to_string())),
        avatar_url: data.avatar.as_ref().and_then(|media| media.resolve()),
    }
}

fn seed_one(default: &TestimonialDefaults) -> TestimonialView {
    TestimonialView {
        quote: default.quote.to_string(),
        rating: default.rating,
        author: default.author.to_string(),
        role: Some(default.role.to_string()),
        company: Some(default.company.to_string()),
        avatar_url: None,
    }
}

fn normalize(data: &[TestimonialData]) -> Vec<TestimonialView> {
    merge_replace(
        Some(data),
        &FALLBACK_TESTIMONIALS,
        normalize_one,
        seed_one,
    )
}

#[component]
fn StarRating(rating: u8) -> impl IntoView {
    view! {
        <div class="star-rating">
            {(0..5)
                .map(|index| view! { <Star filled={index < rating}/> })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn Testimonials(data: Vec<TestimonialData>) -> impl IntoView {
    let entries = normalize(&data);

    let cards = entries
        .into_iter()
        .map(|entry| {
            let byline = entry.byline();
            let initial = entry.initial();
            let avatar = match entry.avatar_url {
                Some(url) => view! {
                    <img src=url alt=entry.author.clone() class="testimonial-avatar" loading="lazy"/>
                }
                .into_any(),
                None => view! {
                    <span class="testimonial-avatar testimonial-initial">{initial}</span>
                }
                .into_any(),
            };
            view! {
                <article class="testimonial-card">
                    <StarRating rating=entry.rating/>
                    <blockquote class="testimonial-quote">{format!("\u{201c}{}\u{201d}", entry.quote)}</blockquote>
                    <div class="testimonial-author">
                        {avatar}
                        <div>
                            <p class="testimonial-name">{entry.author}</p>
                            {byline.map(|b| view! { <p class="testimonial-byline">{b}</p> })}
                        </div>
                    </div>
                </article>
            }
        })
        .collect_view();

    view! {
        <section class="testimonials">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">{HEADING}</h2>
                    <p class="section-subheading">{SUBHEADING}</p>
                </div>
                <div class="card-grid">{cards}</div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_empty_is_all_fallback() {
        let entries = normalize(&[]);
        assert_eq!(entries.len(), FALLBACK_TESTIMONIALS.len());
        assert_eq!(entries[0].author, FALLBACK_TESTIMONIALS[0].author);
        assert!(entries.iter().all(|e| !e.quote.is_empty()));
    }

    #[test]
    fn test_legacy_name_field_honored() {
        let data = vec![TestimonialData {
            name: Some("Jo Chen".to_string()),
            ..TestimonialData::default()
        }];
        let entries = normalize(&data);
        assert_eq!(entries[0].author, "Jo Chen");
    }

    #[test]
    fn test_author_name_wins_over_legacy_name() {
        let data = vec![TestimonialData {
            author_name: Some("Primary".to_string()),
            name: Some("Legacy".to_string()),
            ..TestimonialData::default()
        }];
        assert_eq!(normalize(&data)[0].author, "Primary");
    }

    #[test]
    fn test_rating_clamped() {
        let data = vec![
            TestimonialData {
                rating: Some(9.0),
                ..TestimonialData::default()
            },
            TestimonialData {
                rating: Some(-2.0),
                ..TestimonialData::default()
            },
            TestimonialData::default(),
        ];
        let entries = normalize(&data);
        assert_eq!(entries[0].rating, 5);
        assert_eq!(entries[1].rating, 0);
        assert_eq!(entries[2].rating, FALLBACK_TESTIMONIALS[2].rating);
    }

    #[test]
    fn test_byline_joins_available_parts() {
        let entry = TestimonialView {
            quote: "q".to_string(),
            rating: 5,
            author: "a".to_string(),
            role: Some("Owner".to_string()),
            company: None,
            avatar_url: None,
        };
        assert_eq!(entry.byline().as_deref(), Some("Owner"));
    }
}
