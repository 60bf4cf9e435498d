//! Content gateway: one fetch operation per page section.
//!
//! Failures never propagate out of this module. Transport errors, non-2xx
//! statuses and malformed bodies all collapse to `None`, logged to the
//! console; a missing resource is a valid "no content configured" state for
//! most section singletons and is tolerated silently. Successful bodies are
//! kept in memory for a fixed per-call lifetime before the next request
//! re-fetches from the backend.

use std::cell::RefCell;
use std::collections::HashMap;

use serde::de::DeserializeOwned;
use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::config::config;
use crate::content::media::MediaRef;
use crate::content::types::*;

/// Content cache lifetime, seconds.
const REVALIDATE_SECS: f64 = 60.0;

#[derive(Debug, Error)]
enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("malformed body: {0}")]
    Decode(#[from] serde_json::Error),
}

struct CachedBody {
    fetched_at_ms: f64,
    body: String,
}

thread_local! {
    static CACHE: RefCell<HashMap<String, CachedBody>> = RefCell::new(HashMap::new());
    static CLIENT: reqwest::Client = reqwest::Client::new();
}

fn now_ms() -> f64 {
    js_sys::Date::now()
}

fn is_fresh(now_ms: f64, fetched_at_ms: f64, max_age_secs: f64) -> bool {
    now_ms - fetched_at_ms < max_age_secs * 1000.0
}

/// Whether the endpoint already carries population parameters. When it does
/// not, the request defaults to full relation population.
fn has_populate_param(endpoint: &str) -> bool {
    let Some((_, query)) = endpoint.split_once('?') else {
        return false;
    };
    query.split('&').any(|pair| {
        let key = pair.split('=').next().unwrap_or(pair);
        key == "populate" || key.starts_with("populate[") || key.starts_with("populate%5B")
    })
}

fn request_url(base: &str, endpoint: &str) -> String {
    if has_populate_param(endpoint) {
        format!("{base}/api/{endpoint}")
    } else if endpoint.contains('?') {
        format!("{base}/api/{endpoint}&populate=*")
    } else {
        format!("{base}/api/{endpoint}?populate=*")
    }
}

async fn fetch_body(endpoint: &str) -> Result<String, FetchError> {
    let url = request_url(&config().base_url, endpoint);
    let client = CLIENT.with(|c| c.clone());
    let mut request = client.get(&url).header("Content-Type", "application/json");
    if let Some(token) = config().token {
        request = request.bearer_auth(token);
    }
    let response = request.send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }
    Ok(response.text().await?)
}

async fn load_fresh<T: DeserializeOwned>(endpoint: &str) -> Result<T, FetchError> {
    let body = fetch_body(endpoint).await?;
    let value = serde_json::from_str::<T>(&body)?;
    CACHE.with(|cache| {
        cache.borrow_mut().insert(
            endpoint.to_string(),
            CachedBody {
                fetched_at_ms: now_ms(),
                body,
            },
        );
    });
    Ok(value)
}

async fn fetch_resource<T: DeserializeOwned>(
    endpoint: &str,
    revalidate_secs: f64,
    allow_not_found: bool,
) -> Option<T> {
    let cached = CACHE.with(|cache| {
        cache.borrow().get(endpoint).and_then(|entry| {
            is_fresh(now_ms(), entry.fetched_at_ms, revalidate_secs).then(|| entry.body.clone())
        })
    });
    if let Some(body) = cached {
        if let Ok(value) = serde_json::from_str::<T>(&body) {
            return Some(value);
        }
    }

    match load_fresh::<T>(endpoint).await {
        Ok(value) => Some(value),
        Err(FetchError::Status(404)) if allow_not_found => None,
        Err(err) => {
            web_sys::console::error_1(&JsValue::from_str(&format!(
                "content fetch failed [{endpoint}]: {err}"
            )));
            None
        }
    }
}

async fn get_single<T: DeserializeOwned>(endpoint: &str, allow_not_found: bool) -> Option<T> {
    fetch_resource::<Envelope<T>>(endpoint, REVALIDATE_SECS, allow_not_found)
        .await?
        .data
}

async fn get_list<T: DeserializeOwned>(endpoint: &str) -> Vec<T> {
    fetch_resource::<Envelope<Vec<T>>>(endpoint, REVALIDATE_SECS, false)
        .await
        .and_then(|envelope| envelope.data)
        .unwrap_or_default()
}

pub async fn get_navbar() -> Option<NavbarData> {
    get_single("navbar", false).await
}

pub async fn get_hero() -> Option<HeroData> {
    get_single("hero", false).await
}

pub async fn get_pain_points() -> Option<PainPointsData> {
    get_single("pain-point?populate[cards][populate]=image", true).await
}

pub async fn get_business_impact() -> Option<BusinessImpactData> {
    get_single("business-impact?populate[cards][populate]=image", true).await
}

pub async fn get_stats_grid() -> Option<StatsGridData> {
    get_single("stats-grid", true).await
}

pub async fn get_how_it_works() -> Option<HowItWorksData> {
    get_single("how-it-works", true).await
}

pub async fn get_testimonials() -> Vec<TestimonialData> {
    get_list("testimonials").await
}

pub async fn get_pricing_plans() -> Vec<PricingPlanData> {
    get_list("pricing-plans").await
}

pub async fn get_resources() -> Option<ResourcesData> {
    get_single("resources?populate[cards][populate]=image", true).await
}

pub async fn get_landing_faq() -> Option<LandingFaqData> {
    get_single("landing-faq", true).await
}

pub async fn get_conversion_panel() -> Option<ConversionPanelData> {
    get_single("conversion-panel", true).await
}

pub async fn get_footer() -> Option<FooterData> {
    get_single("footer", true).await
}

/// Platform keys matched against uploaded file names when the primary
/// resource carries no usable logo media. Order fixes the rendered order;
/// the first matching upload wins a key.
const LOGO_ORDER: [(&str, &str); 8] = [
    ("weebly", "Weebly"),
    ("drupal", "Drupal"),
    ("webflow", "Webflow"),
    ("squarespace", "Squarespace"),
    ("shopify", "Shopify"),
    ("joomla", "Joomla!"),
    ("wix", "Wix"),
    ("wordpress", "WordPress"),
];

fn normalize_key(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

fn has_logo_media(items: &[LogoItem]) -> bool {
    items
        .iter()
        .any(|item| item.logo.as_ref().is_some_and(|logo| logo.raw_url().is_some()))
}

fn logos_from_uploads(files: &[UploadFile]) -> Vec<LogoItem> {
    LOGO_ORDER
        .iter()
        .filter_map(|(key, label)| {
            files
                .iter()
                .find(|file| {
                    file.name
                        .as_deref()
                        .is_some_and(|name| normalize_key(name).contains(key))
                })
                .map(|file| LogoItem {
                    name: Some((*label).to_string()),
                    url: None,
                    logo: Some(MediaRef {
                        url: file.url.clone(),
                        alternative_text: file.alternative_text.clone(),
                        width: file.width.or(Some(180)),
                        height: file.height.or(Some(60)),
                        data: None,
                    }),
                })
        })
        .collect()
}

/// The works-with section, with its logo substitution rule: when the primary
/// resource yields no logo item with usable media, scan the generic upload
/// listing for known platform file names and assemble a substitute set. The
/// primary heading survives either way; with no usable media from either
/// source the section renders plain platform names.
pub async fn get_work_with() -> Option<WorkWithData> {
    let primary = get_single::<WorkWithData>(
        "work-with-website?populate[logo_items][populate]=logo",
        true,
    )
    .await;

    if let Some(data) = &primary {
        let usable = data
            .logo_items
            .as_deref()
            .is_some_and(|items| !items.is_empty() && has_logo_media(items));
        if usable {
            return primary;
        }
    }

    let files = fetch_resource::<Vec<UploadFile>>("upload/files", REVALIDATE_SECS, true)
        .await
        .unwrap_or_default();
    let substitutes = logos_from_uploads(&files);

    match primary {
        Some(mut data) => {
            data.logo_items = if substitutes.is_empty() {
                None
            } else {
                Some(substitutes)
            };
            Some(data)
        }
        None if substitutes.is_empty() => None,
        None => Some(WorkWithData {
            heading: None,
            logo_items: Some(substitutes),
        }),
    }
}
