//! Landing page sections, one module per visual block.

/// Product name, single source of truth across the page.
pub const SITE_NAME: &str = "Kapinet";

mod business_impact;
mod conversion_panel;
mod faq;
mod footer;
mod hero;
mod how_it_works;
mod icons;
mod navbar;
mod pain_points;
mod pricing;
mod resources;
mod stats_grid;
mod testimonials;
mod work_with;

pub use business_impact::BusinessImpact;
pub use conversion_panel::ConversionPanel;
pub use faq::LandingFaq;
pub use footer::Footer;
pub use hero::Hero;
pub use how_it_works::HowItWorks;
pub use navbar::Navbar;
pub use pain_points::PainPoints;
pub use pricing::Pricing;
pub use resources::Resources;
pub use stats_grid::StatsGrid;
pub use testimonials::Testimonials;
pub use work_with::WorkWith;
