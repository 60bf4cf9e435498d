use leptos::prelude::*;

use crate::content::fallback::text_or;
use crate::content::media::media_url;
use crate::content::types::NavbarData;
use crate::sections::SITE_NAME;
use crate::sections::icons::{ArrowUpRight, MenuToggle};

const FALLBACK_SIGNUP_LABEL: &str = "Signup";
const FALLBACK_LOGIN_LABEL: &str = "Login";
const FALLBACK_URL: &str = "#";
const FALLBACK_LOGO_SRC: &str = "assets/kapinet-logo.svg";

#[derive(Debug, Clone, PartialEq)]
pub struct NavLinkView {
    pub label: String,
    pub url: String,
    pub new_tab: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavbarView {
    pub logo_src: String,
    pub logo_alt: String,
    pub links: Vec<NavLinkView>,
    pub signup_label: String,
    pub signup_url: String,
    pub login_label: String,
    pub login_url: String,
}

fn normalize(data: Option<&NavbarData>) -> NavbarView {
    // Media-field logo first (either payload shape), then the legacy plain
    // URL field, then the bundled asset.
    let logo_from_media = data
        .and_then(|d| d.logo.as_ref())
        .and_then(|logo| logo.resolve());
    let logo_from_legacy = data.and_then(|d| {
        let url = media_url(d.logo_url.as_deref());
        if url.is_empty() { None } else { Some(url) }
    });
    let logo_src = logo_from_media
        .or(logo_from_legacy)
        .unwrap_or_else(|| FALLBACK_LOGO_SRC.to_string());

    let logo_alt = data
        .and_then(|d| d.logo.as_ref())
        .and_then(|logo| logo.alt_text())
        .map(str::to_string)
        .unwrap_or_else(|| {
            text_or(data.and_then(|d| d.logo_text.as_deref()), SITE_NAME)
        });

    let links = data
        .and_then(|d| d.nav_links.as_deref())
        .unwrap_or_default()
        .iter()
        .map(|link| NavLinkView {
            label: text_or(link.label.as_deref(), ""),
            url: text_or(link.url.as_deref(), FALLBACK_URL),
            new_tab: link.open_new_tab.unwrap_or(false),
        })
        .filter(|link| !link.label.is_empty())
        .collect();

    NavbarView {
        logo_src,
        logo_alt,
        links,
        signup_label: text_or(
            data.and_then(|d| d.primary_cta_label.as_deref()),
            FALLBACK_SIGNUP_LABEL,
        ),
        signup_url: text_or(
            data.and_then(|d| d.primary_cta_url.as_deref()),
            FALLBACK_URL,
        ),
        login_label: text_or(
            data.and_then(|d| d.secondary_cta_label.as_deref()),
            FALLBACK_LOGIN_LABEL,
        ),
        login_url: text_or(
            data.and_then(|d| d.secondary_cta_url.as_deref()),
            FALLBACK_URL,
        ),
    }
}

#[component]
pub fn Navbar(data: Option<NavbarData>) -> impl IntoView {
    let nav = normalize(data.as_ref());
    let (menu_open, set_menu_open) = signal(false);

    let desktop_links = nav
        .links
        .iter()
        .map(|link| {
            let target = if link.new_tab { Some("_blank") } else { None };
            let rel = if link.new_tab {
                Some("noopener noreferrer")
            } else {
                None
            };
            view! {
                <li>
                    <a href=link.url.clone() target=target rel=rel class="nav-link">
                        {link.label.clone()}
                    </a>
                </li>
            }
        })
        .collect_view();

    let mobile_links = nav
        .links
        .iter()
        .map(|link| {
            let target = if link.new_tab { Some("_blank") } else { None };
            view! {
                <li>
                    <a
                        href=link.url.clone()
                        target=target
                        class="nav-link"
                        on:click=move |_| set_menu_open.set(false)
                    >
                        {link.label.clone()}
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <header class="navbar">
            <nav class="navbar-inner container">
                <a href="/" class="navbar-brand" on:click=move |_| set_menu_open.set(false)>
                    <img src=nav.logo_src.clone() alt=nav.logo_alt.clone() class="navbar-logo"/>
                </a>

                <ul class="navbar-links">{desktop_links}</ul>

                <div class="navbar-actions">
                    <a href=nav.login_url.clone() class="nav-link navbar-login">
                        {nav.login_label.clone()}
                    </a>
                    <a href=nav.signup_url.clone() class="btn btn-primary navbar-signup">
                        <span>{nav.signup_label.clone()}</span>
                        <span class="btn-arrow">
                            <ArrowUpRight/>
                        </span>
                    </a>
                    <button
                        class="navbar-menu-toggle"
                        aria-expanded=move || menu_open.get()
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || view! { <MenuToggle open=menu_open.get()/> }}
                    </button>
                </div>
            </nav>

            <div class="navbar-mobile" class:open=move || menu_open.get()>
                <ul class="navbar-mobile-links">{mobile_links}</ul>
                <div class="navbar-mobile-actions">
                    <a href=nav.login_url class="btn btn-secondary" on:click=move |_| set_menu_open.set(false)>
                        {nav.login_label}
                    </a>
                    <a href=nav.signup_url class="btn btn-primary" on:click=move |_| set_menu_open.set(false)>
                        {nav.signup_label}
                    </a>
                </div>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::types::NavLink;

    #[test]
    fn test_normalize_null_is_all_fallback() {
        let view = normalize(None);
        assert_eq!(view.logo_src, FALLBACK_LOGO_SRC);
        assert_eq!(view.logo_alt, SITE_NAME);
        assert!(view.links.is_empty());
        assert_eq!(view.signup_label, FALLBACK_SIGNUP_LABEL);
        assert_eq!(view.login_label, FALLBACK_LOGIN_LABEL);
        assert_eq!(view.signup_url, FALLBACK_URL);
    }

    #[test]
    fn test_normalize_drops_unlabeled_links() {
        let data = NavbarData {
            nav_links: Some(vec![
                NavLink {
                    label: Some("Pricing".to_string()),
                    url: Some("/pricing".to_string()),
                    open_new_tab: Some(true),
                },
                NavLink::default(),
            ]),
            ..NavbarData::default()
        };
        let view = normalize(Some(&data));
        assert_eq!(view.links.len(), 1);
        assert_eq!(view.links[0].label, "Pricing");
        assert!(view.links[0].new_tab);
    }
}
