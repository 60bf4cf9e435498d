//! Content layer: CMS payload types, the fetch gateway, and the shared
//! fallback rules the section normalizers build on.

pub mod fallback;
pub mod gateway;
pub mod media;
pub mod types;

use types::*;

/// Everything the page needs, one slot per section. Each slot settles to its
/// own `None` (or empty list) independently of the others.
#[derive(Debug, Clone, Default)]
pub struct PageContent {
    pub navbar: Option<NavbarData>,
    pub hero: Option<HeroData>,
    pub work_with: Option<WorkWithData>,
    pub pain_points: Option<PainPointsData>,
    pub business_impact: Option<BusinessImpactData>,
    pub stats_grid: Option<StatsGridData>,
    pub how_it_works: Option<HowItWorksData>,
    pub testimonials: Vec<TestimonialData>,
    pub pricing_plans: Vec<PricingPlanData>,
    pub resources: Option<ResourcesData>,
    pub landing_faq: Option<LandingFaqData>,
    pub conversion_panel: Option<ConversionPanelData>,
    pub footer: Option<FooterData>,
}

/// Fetch every section resource concurrently. No section depends on another's
/// data, and any subset may fail without affecting the rest.
pub async fn load_page() -> PageContent {
    let (
        navbar,
        hero,
        work_with,
        pain_points,
        business_impact,
        stats_grid,
        how_it_works,
        testimonials,
        pricing_plans,
        resources,
        landing_faq,
        conversion_panel,
        footer,
    ) = futures::join!(
        gateway::get_navbar(),
        gateway::get_hero(),
        gateway::get_work_with(),
        gateway::get_pain_points(),
        gateway::get_business_impact(),
        gateway::get_stats_grid(),
        gateway::get_how_it_works(),
        gateway::get_testimonials(),
        gateway::get_pricing_plans(),
        gateway::get_resources(),
        gateway::get_landing_faq(),
        gateway::get_conversion_panel(),
        gateway::get_footer(),
    );

    PageContent {
        navbar,
        hero,
        work_with,
        pain_points,
        business_impact,
        stats_grid,
        how_it_works,
        testimonials,
        pricing_plans,
        resources,
        landing_faq,
        conversion_panel,
        footer,
    }
}
