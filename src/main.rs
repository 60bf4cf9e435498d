// Kapinet marketing site — Leptos 0.8, client-side rendered.
//
// Content is pulled from the CMS at page load; every section falls back to
// compiled-in copy when its resource is missing, so the page always renders.

mod config;
mod content;
mod fx;
mod sections;

use leptos::prelude::*;

use content::PageContent;
use sections::*;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    let (content, set_content) = signal(None::<PageContent>);

    // All section resources are fetched concurrently; the page body is
    // rendered once every fetch has settled, degraded sections included.
    leptos::task::spawn_local(async move {
        set_content.set(Some(content::load_page().await));
    });

    view! {
        {move || {
            content.get().map(|page| {
                view! {
                    <Navbar data=page.navbar/>
                    <main class="page">
                        <Hero data=page.hero/>
                        <WorkWith data=page.work_with/>
                        <PainPoints data=page.pain_points/>
                        <BusinessImpact data=page.business_impact/>
                        <StatsGrid data=page.stats_grid/>
                        <HowItWorks data=page.how_it_works/>
                        <Testimonials data=page.testimonials/>
                        <Pricing data=page.pricing_plans/>
                        <Resources data=page.resources/>
                        <LandingFaq data=page.landing_faq/>
                        <ConversionPanel data=page.conversion_panel/>
                    </main>
                    <Footer data=page.footer/>
                }
            })
        }}
    }
}
